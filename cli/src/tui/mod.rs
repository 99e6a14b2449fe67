pub mod app;
pub mod background;
pub mod background_tasks;
pub mod card;
pub mod events;
pub mod handlers;
pub mod poller;
pub mod renderers;
pub mod run;
pub mod state;
pub mod ui;
pub mod widgets;

pub use app::{App, ConsoleOptions};
pub use card::{Answered, CardEvent, Confirm, ModuleCard};
pub use run::run_tui;
