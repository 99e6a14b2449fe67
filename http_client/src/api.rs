use async_trait::async_trait;
use console_defs::{DeployResponse, GlobalConfig, ModuleList};

/// The four backend calls the console makes.
///
/// Implementations never return errors: a failed read yields `None`, a failed
/// write yields [`DeployResponse::error`].
#[async_trait]
pub trait ModuleApi: Send + Sync {
    async fn fetch_module_list(&self) -> Option<ModuleList>;
    async fn get_global_config(&self) -> Option<GlobalConfig>;
    async fn deploy_application(&self, application: &str) -> DeployResponse;
    async fn undeploy_application(&self, application: &str) -> DeployResponse;
}
