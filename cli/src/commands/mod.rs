mod config;
mod module;

pub use config::handle_config;
pub use module::{handle_deploy, handle_list, handle_undeploy};
