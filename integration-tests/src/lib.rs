//! Stub of the workshop backend for the client and console tests, served on a
//! random local port.

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use console_defs::{ApplicationPayload, Module, ModuleList};
use console_utils::{ConfigOverrides, ConsoleConfig, StoredConfig};
use serde_json::json;
use tokio::net::TcpListener;

/// How the stub answers `GET /api/modules`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ListMode {
    Normal,
    ServerError,
    BadJson,
}

#[derive(Debug)]
pub struct StubState {
    pub modules: Vec<Module>,
    pub config: BTreeMap<String, String>,
    pub list_mode: ListMode,
    /// `X-Forwarded-User` values seen, in request order.
    pub forwarded_users: Vec<Option<String>>,
    pub writes: Vec<String>,
}

#[derive(Clone)]
pub struct StubBackend {
    state: Arc<Mutex<StubState>>,
}

impl StubBackend {
    pub fn new(modules: Vec<Module>) -> Self {
        Self {
            state: Arc::new(Mutex::new(StubState {
                modules,
                config: BTreeMap::new(),
                list_mode: ListMode::Normal,
                forwarded_users: Vec::new(),
                writes: Vec::new(),
            })),
        }
    }

    pub fn with_config(self, key: &str, value: &str) -> Self {
        self.lock().config.insert(key.to_string(), value.to_string());
        self
    }

    pub fn lock(&self) -> MutexGuard<'_, StubState> {
        match self.state.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    fn router(&self) -> Router {
        Router::new()
            .route("/api/modules", get(list_modules))
            .route("/api/getGlobalConfig", get(global_config))
            .route("/api/deploy", post(deploy))
            .route("/api/undeploy", post(undeploy))
            .with_state(self.clone())
    }

    /// Serves the stub in the background and returns its base URL.
    pub async fn start(&self) -> anyhow::Result<String> {
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let address = listener.local_addr()?;
        let router = self.router();
        tokio::spawn(async move {
            let _ = axum::serve(listener, router).await;
        });
        Ok(format!("http://{}", address))
    }
}

fn record_user(stub: &StubBackend, headers: &HeaderMap) {
    let user = headers
        .get("x-forwarded-user")
        .and_then(|v| v.to_str().ok())
        .map(|v| v.to_string());
    stub.lock().forwarded_users.push(user);
}

async fn list_modules(State(stub): State<StubBackend>, headers: HeaderMap) -> Response {
    record_user(&stub, &headers);
    let state = stub.lock();
    match state.list_mode {
        ListMode::ServerError => (StatusCode::INTERNAL_SERVER_ERROR, "boom").into_response(),
        ListMode::BadJson => (StatusCode::OK, "<html>not json</html>").into_response(),
        ListMode::Normal => Json(ModuleList::new(state.modules.clone())).into_response(),
    }
}

async fn global_config(State(stub): State<StubBackend>, headers: HeaderMap) -> Response {
    record_user(&stub, &headers);
    Json(stub.lock().config.clone()).into_response()
}

fn set_deployed(stub: &StubBackend, application: &str, deployed: bool) -> Response {
    let mut state = stub.lock();
    state
        .writes
        .push(format!("{} {}", if deployed { "deploy" } else { "undeploy" }, application));

    let Some(module) = state
        .modules
        .iter_mut()
        .find(|m| m.application == application)
    else {
        return Json(json!({ "status": "notchanged" })).into_response();
    };
    if module.deployed == deployed {
        return Json(json!({ "status": "notchanged" })).into_response();
    }

    module.deployed = deployed;
    module.health = "Progressing".to_string();
    module.status = "OutOfSync".to_string();
    Json(json!({
        "status": "ok",
        "application": {
            "deployed": module.deployed,
            "deleting": false,
            "health": module.health,
            "status": module.status,
        }
    }))
    .into_response()
}

async fn deploy(
    State(stub): State<StubBackend>,
    headers: HeaderMap,
    Json(payload): Json<ApplicationPayload>,
) -> Response {
    record_user(&stub, &headers);
    set_deployed(&stub, &payload.application, true)
}

async fn undeploy(
    State(stub): State<StubBackend>,
    headers: HeaderMap,
    Json(payload): Json<ApplicationPayload>,
) -> Response {
    record_user(&stub, &headers);
    set_deployed(&stub, &payload.application, false)
}

/// Client configuration pointing at `endpoint`, as `alice`.
pub fn console_config(endpoint: &str) -> anyhow::Result<ConsoleConfig> {
    let mut config = ConsoleConfig::resolve(
        ConfigOverrides {
            api_endpoint: Some(endpoint.to_string()),
            forwarded_user: Some("alice".to_string()),
            refresh_interval_secs: None,
        },
        |_| None,
        StoredConfig::default(),
    )?;
    config.request_timeout = Duration::from_secs(5);
    Ok(config)
}

pub fn workshop_modules() -> Vec<Module> {
    vec![
        Module {
            name: "Inventory service".to_string(),
            description: "Quarkus inventory backend".to_string(),
            primary_tags: vec!["backend".to_string(), "quarkus".to_string()],
            application: "globex-inventory".to_string(),
            deployed: true,
            is_default: true,
            status: "Synced".to_string(),
            health: "Healthy".to_string(),
            ..Default::default()
        },
        Module {
            name: "Web UI".to_string(),
            description: "Node.js storefront".to_string(),
            primary_tags: vec!["frontend".to_string()],
            application: "globex-web".to_string(),
            ..Default::default()
        },
        Module {
            name: "Order events".to_string(),
            description: "Kafka order stream".to_string(),
            primary_tags: vec!["backend".to_string(), "kafka".to_string()],
            application: "globex-orders".to_string(),
            ..Default::default()
        },
    ]
}
