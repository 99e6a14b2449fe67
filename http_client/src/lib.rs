mod api;
mod client;
mod fallback;

pub use api::ModuleApi;
pub use client::{HttpModuleClient, DEPLOY_PATH, GLOBAL_CONFIG_PATH, MODULES_PATH, UNDEPLOY_PATH};
pub use fallback::with_fallback;
