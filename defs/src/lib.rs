mod alert;
mod api;
mod config;
pub mod errors;
mod module;

pub use alert::{Alert, AlertCode, Severity};
pub use api::{ApplicationPayload, DeployResponse, DeployStatus};
pub use config::{
    GlobalConfig, ALLOWED_MODULES_COUNT, OPENSHIFT_DOMAIN, PASSWORD, SHOWROOM_URL, USER,
};
pub use errors::ConsoleError;
pub use module::{ApplicationState, Module, ModuleList};
