pub mod config;
pub mod config_path;
mod logging;

pub use config::{ConfigOverrides, ConsoleConfig, StoredConfig};
pub use logging::{level_from_str, setup_logging, LogTarget};
