use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConsoleError {
    #[error("No alert is registered under the code \"{0}\"")]
    UnknownAlertCode(String),

    #[error("No API endpoint configured. Pass --endpoint or set \"export WORKSHOP_CONSOLE_API_ENDPOINT=http://localhost:8080\"")]
    MissingEndpoint(),

    #[error("The API endpoint \"{0}\" is not a valid URL: {1}")]
    InvalidEndpoint(String, String),

    #[error("Invalid console configuration: {0}")]
    InvalidConfig(String),
}
