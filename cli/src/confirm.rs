use log::warn;

use crate::tui::Confirm;

/// Asks on the terminal with `inquire`. Anything but an explicit yes declines.
pub struct PromptConfirm;

impl Confirm for PromptConfirm {
    fn confirm(&self, message: &str) -> bool {
        match inquire::Confirm::new(message).with_default(false).prompt() {
            Ok(answer) => answer,
            Err(e) => {
                warn!("Confirmation prompt failed: {}", e);
                false
            }
        }
    }
}
