use anyhow::{anyhow, Result};
use std::path::PathBuf;

/// Get the path to the workshop-console config directory
/// On macOS: ~/Library/Application Support/workshop-console
/// On Linux: ~/.config/workshop-console
/// On Windows: %APPDATA%\workshop-console
pub fn get_config_dir() -> Result<PathBuf> {
    let mut path = dirs::config_dir().ok_or_else(|| anyhow!("Could not find config directory"))?;
    path.push("workshop-console");
    Ok(path)
}

/// Get the path to the console configuration file
pub fn get_config_path() -> Result<PathBuf> {
    let mut path = get_config_dir()?;
    path.push("config.json");
    Ok(path)
}

/// Get the path of the log file written while the terminal UI is running
pub fn get_log_path() -> Result<PathBuf> {
    let mut path = get_config_dir()?;
    // Ensure directory exists
    std::fs::create_dir_all(&path).ok();
    path.push("console.log");
    Ok(path)
}
