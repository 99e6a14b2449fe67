use std::env;
use std::path::PathBuf;

use chrono::Local;
use log::LevelFilter;

/// Where log records are written.
#[derive(Debug, Clone, PartialEq)]
pub enum LogTarget {
    Stderr,
    /// Used by the terminal UI, which owns stdout and stderr while running.
    File(PathBuf),
}

pub fn level_from_str(value: Option<&str>) -> LevelFilter {
    match value {
        Some("info") => LevelFilter::Info,
        Some("debug") => LevelFilter::Debug,
        Some("warn") => LevelFilter::Warn,
        Some("error") => LevelFilter::Error,
        _ => LevelFilter::Warn, // Default to Warn if variable is unset or has an unrecognized value
    }
}

pub fn setup_logging(target: LogTarget) -> Result<(), fern::InitError> {
    let base_config = fern::Dispatch::new();

    let level = level_from_str(env::var("LOG_LEVEL").ok().as_deref());

    let output_config = fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "{}[{}] {}: {}",
                Local::now().format("[%Y-%m-%d][%H:%M:%S]"),
                record.target(),
                record.level(),
                message
            ))
        })
        .level(level);

    let output_config = match target {
        LogTarget::Stderr => output_config.chain(std::io::stderr()),
        LogTarget::File(path) => output_config.chain(fern::log_file(path)?),
    };

    base_config.chain(output_config).apply()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_level_from_str() {
        assert_eq!(level_from_str(Some("debug")), LevelFilter::Debug);
        assert_eq!(level_from_str(Some("error")), LevelFilter::Error);
        assert_eq!(level_from_str(Some("verbose")), LevelFilter::Warn);
        assert_eq!(level_from_str(None), LevelFilter::Warn);
    }
}
