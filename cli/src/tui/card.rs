use console_defs::{AlertCode, ApplicationState, DeployResponse, Module};
use http_client::ModuleApi;
use log::{debug, info};

/// What a module card reports back to the module list.
#[derive(Debug, Clone, PartialEq)]
pub enum CardEvent {
    /// Something changed on the backend; the list should resync.
    Message(String),
    Alert(AlertCode),
    ModuleUpdated {
        application: String,
        state: ApplicationState,
    },
}

/// Asks the user to approve an irreversible action.
pub trait Confirm: Send + Sync {
    fn confirm(&self, message: &str) -> bool;
}

/// An answer that was already collected, e.g. by the confirmation modal.
#[derive(Debug, Clone, Copy)]
pub struct Answered(pub bool);

impl Confirm for Answered {
    fn confirm(&self, _message: &str) -> bool {
        self.0
    }
}

pub const UNDEPLOY_PROMPT: &str =
    "Click OK to confirm, and Cancel to exit. This is action irreversible.";

/// One module plus the commands that can be run against it.
///
/// The card works on its own copy of the module and never changes it; results
/// are returned as [`CardEvent`]s for the list to apply.
#[derive(Debug, Clone)]
pub struct ModuleCard {
    module: Module,
    max_modules_reached: bool,
}

impl ModuleCard {
    pub fn new(module: Module, max_modules_reached: bool) -> Self {
        Self {
            module,
            max_modules_reached,
        }
    }

    pub fn module(&self) -> &Module {
        &self.module
    }

    pub fn can_deploy(&self) -> bool {
        !self.module.deployed && !self.module.deleting
    }

    pub fn can_undeploy(&self) -> bool {
        self.module.deployed && !self.module.deleting && !self.module.is_default
    }

    pub async fn deploy(&self, api: &dyn ModuleApi) -> Vec<CardEvent> {
        if self.max_modules_reached {
            info!(
                "Not deploying {}: maximum number of modules deployed",
                self.module.application
            );
            return vec![CardEvent::Alert(AlertCode::MaxModulesDeployed)];
        }

        let response = api.deploy_application(&self.module.application).await;
        self.events_for("deploy", response)
    }

    pub async fn undeploy(&self, api: &dyn ModuleApi, confirm: &dyn Confirm) -> Vec<CardEvent> {
        if !confirm.confirm(UNDEPLOY_PROMPT) {
            debug!("Undeploy of {} cancelled", self.module.application);
            return Vec::new();
        }

        let response = api.undeploy_application(&self.module.application).await;
        self.events_for("undeploy", response)
    }

    fn events_for(&self, action: &str, response: DeployResponse) -> Vec<CardEvent> {
        debug!("{} {} -> {:?}", action, self.module.application, response);

        let mut events = Vec::new();
        if response.is_ok() {
            if let Some(state) = response.application {
                events.push(CardEvent::ModuleUpdated {
                    application: self.module.application.clone(),
                    state,
                });
            }
        }
        events.push(CardEvent::Message(format!(
            "{} {}",
            action, self.module.application
        )));
        events
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::state::ModuleListState;
    use async_trait::async_trait;
    use console_defs::{DeployStatus, GlobalConfig, ModuleList};
    use pretty_assertions::assert_eq;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingApi {
        response: Option<DeployResponse>,
        calls: Mutex<Vec<String>>,
    }

    impl RecordingApi {
        fn answering(response: DeployResponse) -> Self {
            Self {
                response: Some(response),
                calls: Mutex::new(Vec::new()),
            }
        }

        fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }

        fn reply(&self, call: String) -> DeployResponse {
            self.calls.lock().unwrap().push(call);
            self.response.clone().unwrap_or_else(DeployResponse::error)
        }
    }

    #[async_trait]
    impl ModuleApi for RecordingApi {
        async fn fetch_module_list(&self) -> Option<ModuleList> {
            None
        }

        async fn get_global_config(&self) -> Option<GlobalConfig> {
            None
        }

        async fn deploy_application(&self, application: &str) -> DeployResponse {
            self.reply(format!("deploy {}", application))
        }

        async fn undeploy_application(&self, application: &str) -> DeployResponse {
            self.reply(format!("undeploy {}", application))
        }
    }

    fn inventory(deployed: bool) -> Module {
        Module {
            name: "inventory".to_string(),
            description: "Inventory service".to_string(),
            primary_tags: vec!["backend".to_string()],
            application: "globex-inventory".to_string(),
            deployed,
            status: "".to_string(),
            health: "".to_string(),
            ..Default::default()
        }
    }

    fn list_with(module: Module) -> ModuleListState {
        let mut state = ModuleListState::new();
        state.apply_refresh(1, Some(ModuleList::new(vec![module])));
        state
    }

    #[tokio::test]
    async fn test_deploy_ok_updates_tracked_fields() {
        let api = RecordingApi::answering(DeployResponse {
            status: DeployStatus::Ok,
            application: Some(ApplicationState {
                deployed: Some(true),
                deleting: Some(false),
                health: Some("green".to_string()),
                status: Some("Synced".to_string()),
            }),
        });
        let card = ModuleCard::new(inventory(false), false);
        let mut state = list_with(inventory(false));

        let events = card.deploy(&api).await;
        for event in &events {
            state.apply_card_event(event);
        }

        let module = &state.modules()[0];
        assert!(module.deployed);
        assert!(!module.deleting);
        assert_eq!(module.health, "green");
        assert_eq!(module.status, "Synced");
        assert_eq!(module.name, "inventory");
        assert_eq!(module.description, "Inventory service");
        assert_eq!(api.calls(), vec!["deploy globex-inventory"]);
        // The card's own copy is untouched.
        assert!(!card.module().deployed);
    }

    #[tokio::test]
    async fn test_deploy_transport_error_leaves_module_unchanged() {
        let api = RecordingApi::default();
        let card = ModuleCard::new(inventory(false), false);
        let mut state = list_with(inventory(false));

        let events = card.deploy(&api).await;
        for event in &events {
            state.apply_card_event(event);
        }

        assert_eq!(state.modules()[0], inventory(false));
        assert_eq!(
            events,
            vec![CardEvent::Message("deploy globex-inventory".to_string())]
        );
    }

    #[tokio::test]
    async fn test_deploy_notchanged_is_not_applied() {
        let api = RecordingApi::answering(DeployResponse {
            status: DeployStatus::NotChanged,
            application: Some(ApplicationState {
                deployed: Some(true),
                ..Default::default()
            }),
        });
        let card = ModuleCard::new(inventory(false), false);

        let events = card.deploy(&api).await;
        assert!(!events
            .iter()
            .any(|e| matches!(e, CardEvent::ModuleUpdated { .. })));
    }

    #[tokio::test]
    async fn test_deploy_at_limit_raises_alert_without_request() {
        let api = RecordingApi::default();
        let card = ModuleCard::new(inventory(false), true);

        let events = card.deploy(&api).await;

        assert_eq!(events, vec![CardEvent::Alert(AlertCode::MaxModulesDeployed)]);
        assert!(api.calls().is_empty());
    }

    #[tokio::test]
    async fn test_declined_undeploy_sends_nothing() {
        let api = RecordingApi::default();
        let card = ModuleCard::new(inventory(true), false);
        let mut state = list_with(inventory(true));

        let events = card.undeploy(&api, &Answered(false)).await;
        for event in &events {
            state.apply_card_event(event);
        }

        assert!(events.is_empty());
        assert!(api.calls().is_empty());
        assert_eq!(state.modules()[0], inventory(true));
    }

    #[tokio::test]
    async fn test_confirmed_undeploy_marks_deleting() {
        let api = RecordingApi::answering(DeployResponse {
            status: DeployStatus::Ok,
            application: Some(ApplicationState {
                deployed: Some(true),
                deleting: Some(true),
                health: Some("".to_string()),
                status: Some("".to_string()),
            }),
        });
        let card = ModuleCard::new(inventory(true), false);
        let mut state = list_with(inventory(true));

        let events = card.undeploy(&api, &Answered(true)).await;
        let reactions: Vec<bool> = events
            .iter()
            .map(|event| state.apply_card_event(event))
            .collect();

        assert_eq!(reactions, vec![false, true]);
        assert!(state.modules()[0].deleting);
        assert_eq!(api.calls(), vec!["undeploy globex-inventory"]);
    }

    #[test]
    fn test_default_module_cannot_be_undeployed() {
        let mut module = inventory(true);
        module.is_default = true;
        let card = ModuleCard::new(module, false);
        assert!(!card.can_undeploy());
        assert!(!card.can_deploy());
    }
}
