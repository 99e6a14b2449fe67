pub mod commands;
mod confirm;
pub mod tui;

pub use confirm::PromptConfirm;
