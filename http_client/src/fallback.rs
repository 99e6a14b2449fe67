use log::error;

/// Replaces a failed request with the value supplied by the caller.
///
/// `operation` names the failing call in the log record.
pub fn with_fallback<T>(operation: &str, result: anyhow::Result<T>, fallback: T) -> T {
    match result {
        Ok(value) => value,
        Err(e) => {
            error!("{} failed: {:#}", operation, e);
            fallback
        }
    }
}
