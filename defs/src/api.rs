use serde::{Deserialize, Serialize};

use crate::ApplicationState;

/// Request body for `POST /api/deploy` and `POST /api/undeploy`.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct ApplicationPayload {
    pub application: String,
}

impl ApplicationPayload {
    pub fn new(application: &str) -> Self {
        Self {
            application: application.to_string(),
        }
    }
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DeployStatus {
    Ok,
    NotChanged,
    Error,
    #[serde(other)]
    Unknown,
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct DeployResponse {
    pub status: DeployStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub application: Option<ApplicationState>,
}

impl DeployResponse {
    /// The value a failed deploy or undeploy request is normalized to.
    pub fn error() -> Self {
        Self {
            status: DeployStatus::Error,
            application: None,
        }
    }

    pub fn is_ok(&self) -> bool {
        self.status == DeployStatus::Ok
    }
}
