use serde::{Deserialize, Deserializer, Serialize};

/// Treats an explicit JSON `null` the same as a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Module {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub primary_tags: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub secondary_tags: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub application: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub deployed: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub deleting: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub health: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub is_default: bool,
}

impl Module {
    pub fn has_primary_tag(&self, tag: &str) -> bool {
        self.primary_tags.iter().any(|t| t == tag)
    }

    /// Returns a new module with the lifecycle fields present in `state` copied
    /// over. Fields missing from `state` keep their current value.
    pub fn merged_with(&self, state: &ApplicationState) -> Module {
        let mut module = self.clone();
        if let Some(deployed) = state.deployed {
            module.deployed = deployed;
        }
        if let Some(deleting) = state.deleting {
            module.deleting = deleting;
        }
        if let Some(health) = &state.health {
            module.health = health.clone();
        }
        if let Some(status) = &state.status {
            module.status = status.clone();
        }
        module
    }
}

/// Wire shape of `GET /api/modules`.
#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq)]
pub struct ModuleList {
    #[serde(default, deserialize_with = "null_as_default")]
    pub modules: Vec<Module>,
}

impl ModuleList {
    pub fn new(modules: Vec<Module>) -> Self {
        Self { modules }
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }

    pub fn len(&self) -> usize {
        self.modules.len()
    }
}

/// The `application` record embedded in deploy and undeploy responses.
#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq)]
pub struct ApplicationState {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deployed: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deleting: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub health: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}
