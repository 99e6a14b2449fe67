use crate::tui::app::PendingAction;

pub struct ModalState {
    pub showing_confirmation: bool,
    pub confirmation_message: String,
    pub confirmation_action: PendingAction,
}

impl ModalState {
    pub fn new() -> Self {
        Self {
            showing_confirmation: false,
            confirmation_message: String::new(),
            confirmation_action: PendingAction::None,
        }
    }

    pub fn show_confirmation(&mut self, message: String, action: PendingAction) {
        self.showing_confirmation = true;
        self.confirmation_message = message;
        self.confirmation_action = action;
    }

    pub fn close_confirmation(&mut self) {
        self.showing_confirmation = false;
        self.confirmation_message.clear();
        self.confirmation_action = PendingAction::None;
    }

    /// Closes the modal and hands back the action it was guarding.
    pub fn take_confirmed_action(&mut self) -> PendingAction {
        let action = std::mem::replace(&mut self.confirmation_action, PendingAction::None);
        self.close_confirmation();
        action
    }

    pub fn is_any_modal_showing(&self) -> bool {
        self.showing_confirmation
    }
}

impl Default for ModalState {
    fn default() -> Self {
        Self::new()
    }
}
