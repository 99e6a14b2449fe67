use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};

pub const ALLOWED_MODULES_COUNT: &str = "ALLOWED_MODULES_COUNT";
pub const SHOWROOM_URL: &str = "SHOWROOM_URL";
pub const USER: &str = "USER";
pub const PASSWORD: &str = "PASSWORD";
pub const OPENSHIFT_DOMAIN: &str = "OPENSHIFT_DOMAIN";

/// Unset backend variables arrive as `null`; those keys are left out.
fn skip_null_values<'de, D>(deserializer: D) -> Result<BTreeMap<String, String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = BTreeMap::<String, Option<String>>::deserialize(deserializer)?;
    Ok(raw
        .into_iter()
        .filter_map(|(key, value)| value.map(|value| (key, value)))
        .collect())
}

/// Key/value settings published by `GET /api/getGlobalConfig`.
#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq)]
#[serde(transparent)]
pub struct GlobalConfig {
    #[serde(deserialize_with = "skip_null_values")]
    pub values: BTreeMap<String, String>,
}

impl GlobalConfig {
    pub fn new(values: BTreeMap<String, String>) -> Self {
        Self { values }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(|v| v.as_str())
    }

    /// Number of modules a user may have deployed at once. `None` when the
    /// backend did not publish it or the value is not a number.
    pub fn allowed_modules_count(&self) -> Option<usize> {
        self.get(ALLOWED_MODULES_COUNT)
            .and_then(|v| v.trim().parse::<i64>().ok())
            .map(|count| count.max(0) as usize)
    }

    pub fn showroom_url(&self) -> Option<&str> {
        self.get(SHOWROOM_URL)
    }

    pub fn user(&self) -> Option<&str> {
        self.get(USER)
    }

    pub fn openshift_domain(&self) -> Option<&str> {
        self.get(OPENSHIFT_DOMAIN)
    }

    /// Entries in key order with secrets masked, for display.
    pub fn display_entries(&self) -> Vec<(String, String)> {
        self.values
            .iter()
            .map(|(key, value)| {
                let shown = if key == PASSWORD {
                    "*".repeat(value.chars().count().min(12))
                } else {
                    value.clone()
                };
                (key.clone(), shown)
            })
            .collect()
    }
}
