use std::fmt;
use std::str::FromStr;

use crate::errors::ConsoleError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertCode {
    MaxModulesDeployed,
}

impl AlertCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            AlertCode::MaxModulesDeployed => "MAX_MODULES_DEPLOYED",
        }
    }

    /// The alert registered under this code.
    pub fn alert(&self) -> Alert {
        match self {
            AlertCode::MaxModulesDeployed => Alert {
                code: *self,
                severity: Severity::Warning,
                message: "You have reached the maximum number of deployable modules. Please undeploy any of the already deployed modules to deploy additional modules.",
            },
        }
    }
}

impl fmt::Display for AlertCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AlertCode {
    type Err = ConsoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "MAX_MODULES_DEPLOYED" => Ok(AlertCode::MaxModulesDeployed),
            other => Err(ConsoleError::UnknownAlertCode(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Warning,
    Danger,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Info => "info",
            Severity::Warning => "warning",
            Severity::Danger => "danger",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub code: AlertCode,
    pub severity: Severity,
    pub message: &'static str,
}
