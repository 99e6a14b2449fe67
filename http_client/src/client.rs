use anyhow::{anyhow, Context, Result};
use async_trait::async_trait;
use console_defs::{ApplicationPayload, DeployResponse, GlobalConfig, ModuleList};
use console_utils::ConsoleConfig;
use log::{debug, info};
use serde::de::DeserializeOwned;
use serde::Serialize;
use url::Url;

use crate::api::ModuleApi;
use crate::fallback::with_fallback;

pub const MODULES_PATH: &str = "/api/modules";
pub const GLOBAL_CONFIG_PATH: &str = "/api/getGlobalConfig";
pub const DEPLOY_PATH: &str = "/api/deploy";
pub const UNDEPLOY_PATH: &str = "/api/undeploy";

/// Header the backend reads the workshop user from.
const FORWARDED_USER_HEADER: &str = "X-Forwarded-User";

pub struct HttpModuleClient {
    client: reqwest::Client,
    endpoint: Url,
    forwarded_user: Option<String>,
}

impl HttpModuleClient {
    pub fn new(config: &ConsoleConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            endpoint: config.api_endpoint.clone(),
            forwarded_user: config.forwarded_user.clone(),
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.endpoint.as_str().trim_end_matches('/'), path)
    }

    fn with_headers(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        let request = request.header("Content-Type", "application/json");
        match &self.forwarded_user {
            Some(user) => request.header(FORWARDED_USER_HEADER, user),
            None => request,
        }
    }

    async fn http_get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = self.url(path);
        debug!("HTTP GET {}", url);

        let response = self
            .with_headers(self.client.get(&url))
            .send()
            .await
            .context(format!("Failed to make request to {}", url))?;

        Self::parse_response(response).await
    }

    async fn http_post<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> Result<T> {
        let url = self.url(path);
        debug!("HTTP POST {}", url);

        let response = self
            .with_headers(self.client.post(&url))
            .json(body)
            .send()
            .await
            .context(format!("Failed to make request to {}", url))?;

        Self::parse_response(response).await
    }

    async fn parse_response<T: DeserializeOwned>(response: reqwest::Response) -> Result<T> {
        let status = response.status();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            return Err(anyhow!(
                "API request failed with status {}: {}",
                status,
                error_body
            ));
        }

        response
            .json()
            .await
            .context("Failed to parse JSON response")
    }
}

#[async_trait]
impl ModuleApi for HttpModuleClient {
    async fn fetch_module_list(&self) -> Option<ModuleList> {
        let result = self.http_get::<ModuleList>(MODULES_PATH).await.map(Some);
        with_fallback("fetchModuleList", result, None)
    }

    async fn get_global_config(&self) -> Option<GlobalConfig> {
        let result = self
            .http_get::<GlobalConfig>(GLOBAL_CONFIG_PATH)
            .await
            .map(Some);
        with_fallback("getGlobalConfig", result, None)
    }

    async fn deploy_application(&self, application: &str) -> DeployResponse {
        info!("Deploying application {}", application);
        let result = self
            .http_post(DEPLOY_PATH, &ApplicationPayload::new(application))
            .await;
        with_fallback("deployApplication", result, DeployResponse::error())
    }

    async fn undeploy_application(&self, application: &str) -> DeployResponse {
        info!("Undeploying application {}", application);
        let result = self
            .http_post(UNDEPLOY_PATH, &ApplicationPayload::new(application))
            .await;
        with_fallback("undeployApplication", result, DeployResponse::error())
    }
}
