use std::collections::BTreeSet;
use std::sync::Arc;
use std::time::Duration;

use console_defs::Module;
use http_client::ModuleApi;
use log::{debug, info, warn};
use tokio::sync::mpsc::UnboundedSender;

use super::background::{spawn_task, BackgroundMessage};
use super::card::{Answered, ModuleCard};
use super::poller::{spawn_refresh, RefreshGenerations, RefreshPoller};
use super::state::{ModalState, ModuleListState, RefreshOutcome};

#[derive(Debug, Clone, PartialEq)]
pub enum View {
    Modules,
    Config,
}

/// Which part of the modules view receives navigation keys.
#[derive(Debug, Clone, PartialEq)]
pub enum Focus {
    Modules,
    Tags,
}

#[derive(Debug, Clone, PartialEq)]
pub enum PendingAction {
    None,
    Refresh,
    Deploy(String),
    Undeploy(String),
}

/// Decided by whoever starts the console.
#[derive(Debug, Clone)]
pub struct ConsoleOptions {
    /// Without it the console never talks to the backend; useful for
    /// rendering the UI in an environment with no network.
    pub networked: bool,
    pub refresh_interval: Duration,
}

impl Default for ConsoleOptions {
    fn default() -> Self {
        Self {
            networked: true,
            refresh_interval: Duration::from_secs(10),
        }
    }
}

pub struct App {
    pub should_quit: bool,
    pub current_view: View,
    pub focus: Focus,
    pub selected_index: usize,
    pub tag_cursor: usize,
    pub list_state: ModuleListState,
    pub modal_state: ModalState,
    pub pending_action: PendingAction,
    /// Applications with a deploy or undeploy request outstanding.
    pub in_flight: BTreeSet<String>,
    visible: Vec<usize>,
    options: ConsoleOptions,
    api: Arc<dyn ModuleApi>,
    sender: UnboundedSender<BackgroundMessage>,
    generations: RefreshGenerations,
    poller: Option<RefreshPoller>,
}

impl App {
    pub fn new(
        api: Arc<dyn ModuleApi>,
        options: ConsoleOptions,
        sender: UnboundedSender<BackgroundMessage>,
    ) -> Self {
        Self {
            should_quit: false,
            current_view: View::Modules,
            focus: Focus::Modules,
            selected_index: 0,
            tag_cursor: 0,
            list_state: ModuleListState::new(),
            modal_state: ModalState::new(),
            pending_action: PendingAction::None,
            in_flight: BTreeSet::new(),
            visible: Vec::new(),
            options,
            api,
            sender,
            generations: RefreshGenerations::new(),
            poller: None,
        }
    }

    pub fn is_networked(&self) -> bool {
        self.options.networked
    }

    pub fn refresh_interval(&self) -> Duration {
        self.options.refresh_interval
    }

    /// Loads the global config and starts the periodic module list refresh,
    /// whose first run happens immediately.
    pub fn mount(&mut self) {
        if !self.options.networked {
            info!("Console started without network access, not polling");
            return;
        }
        if self.poller.is_some() {
            return;
        }

        self.fetch_global_config();
        self.poller = Some(RefreshPoller::start(
            self.api.clone(),
            self.generations.clone(),
            self.sender.clone(),
            self.options.refresh_interval,
        ));
    }

    /// Stops the periodic refresh. Requests already sent still complete.
    pub fn unmount(&mut self) {
        if let Some(mut poller) = self.poller.take() {
            poller.shutdown();
        }
    }

    pub fn is_polling(&self) -> bool {
        self.poller.as_ref().map(|p| p.is_running()).unwrap_or(false)
    }

    pub fn is_loading(&self) -> bool {
        self.options.networked && !self.list_state.has_loaded()
    }

    pub fn refresh(&mut self) {
        if !self.options.networked {
            return;
        }
        spawn_refresh(self.api.clone(), &self.generations, self.sender.clone());
    }

    fn fetch_global_config(&self) {
        let api = self.api.clone();
        spawn_task(
            self.sender.clone(),
            async move { api.get_global_config().await },
            BackgroundMessage::GlobalConfigLoaded,
        );
    }

    pub fn process_background_message(&mut self, message: BackgroundMessage) {
        match message {
            BackgroundMessage::ModulesLoaded { generation, list } => {
                if self.list_state.apply_refresh(generation, list) == RefreshOutcome::Applied {
                    self.refresh_visible();
                }
            }
            BackgroundMessage::GlobalConfigLoaded(config) => {
                self.list_state.set_global_config(config);
            }
            BackgroundMessage::CardFinished {
                application,
                events,
            } => {
                self.in_flight.remove(&application);
                let mut resync = false;
                for event in &events {
                    resync |= self.list_state.apply_card_event(event);
                }
                if resync {
                    self.refresh();
                }
                self.refresh_visible();
            }
        }
    }

    /// Re-evaluates the filters. Called before every frame.
    pub fn refresh_visible(&mut self) {
        self.visible = self.list_state.visible_indices();
        if self.selected_index >= self.visible.len() {
            self.selected_index = self.visible.len().saturating_sub(1);
        }
        let tag_count = self.list_state.tag_filters().as_slice().len();
        if self.tag_cursor >= tag_count {
            self.tag_cursor = tag_count.saturating_sub(1);
        }
    }

    pub fn visible_modules(&self) -> Vec<&Module> {
        let modules = self.list_state.modules();
        self.visible
            .iter()
            .filter_map(|&i| modules.get(i))
            .collect()
    }

    pub fn selected_module(&self) -> Option<&Module> {
        self.visible
            .get(self.selected_index)
            .and_then(|&i| self.list_state.modules().get(i))
    }

    fn card_for(&self, application: &str) -> Option<ModuleCard> {
        self.list_state
            .modules()
            .iter()
            .find(|m| m.application == application)
            .map(|m| ModuleCard::new(m.clone(), self.list_state.max_modules_reached()))
    }

    pub fn move_up(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        }
    }

    pub fn move_down(&mut self) {
        if self.selected_index + 1 < self.visible.len() {
            self.selected_index += 1;
        }
    }

    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            Focus::Modules if !self.list_state.tag_filters().as_slice().is_empty() => Focus::Tags,
            _ => Focus::Modules,
        };
    }

    pub fn tag_left(&mut self) {
        if self.tag_cursor > 0 {
            self.tag_cursor -= 1;
        }
    }

    pub fn tag_right(&mut self) {
        if self.tag_cursor + 1 < self.list_state.tag_filters().as_slice().len() {
            self.tag_cursor += 1;
        }
    }

    pub fn toggle_selected_tag(&mut self) {
        self.list_state.toggle_tag(self.tag_cursor);
        self.selected_index = 0;
    }

    pub fn toggle_show_only_deployed(&mut self) {
        self.list_state.toggle_show_only_deployed();
        self.selected_index = 0;
    }

    pub fn dismiss_alert(&mut self) {
        self.list_state.dismiss_alert();
    }

    pub fn change_view(&mut self, view: View) {
        self.current_view = view;
        self.focus = Focus::Modules;
    }

    pub fn request_deploy(&mut self) {
        let Some(module) = self.selected_module() else {
            return;
        };
        let card = ModuleCard::new(module.clone(), self.list_state.max_modules_reached());
        if !card.can_deploy() || self.in_flight.contains(&module.application) {
            return;
        }
        let application = module.application.clone();
        self.schedule_action(PendingAction::Deploy(application));
    }

    pub fn request_undeploy(&mut self) {
        let Some(module) = self.selected_module() else {
            return;
        };
        let card = ModuleCard::new(module.clone(), false);
        if !card.can_undeploy() || self.in_flight.contains(&module.application) {
            return;
        }
        let message = format!(
            "Undeploy module?\n\nModule: {}\nApplication: {}\n\nThis action is irreversible.",
            module.name,
            module.application,
        );
        let action = PendingAction::Undeploy(module.application.clone());
        self.modal_state.show_confirmation(message, action);
    }

    pub fn confirm_action(&mut self) {
        let action = self.modal_state.take_confirmed_action();
        self.schedule_action(action);
    }

    pub fn close_confirmation(&mut self) {
        self.modal_state.close_confirmation();
    }

    pub fn schedule_action(&mut self, action: PendingAction) {
        self.pending_action = action;
    }

    pub fn has_pending_action(&self) -> bool {
        self.pending_action != PendingAction::None
    }

    pub fn process_pending_action(&mut self) {
        // Clear pending action immediately to avoid reprocessing
        let action = std::mem::replace(&mut self.pending_action, PendingAction::None);

        match action {
            PendingAction::None => {}
            PendingAction::Refresh => self.refresh(),
            PendingAction::Deploy(application) => {
                self.run_card_command(CardCommand::Deploy, application)
            }
            PendingAction::Undeploy(application) => {
                self.run_card_command(CardCommand::Undeploy, application)
            }
        }
    }

    fn run_card_command(&mut self, command: CardCommand, application: String) {
        if !self.options.networked {
            warn!(
                "Ignoring {} of {}: console has no network access",
                command.label(),
                application
            );
            return;
        }
        let Some(card) = self.card_for(&application) else {
            debug!("Module {} disappeared before {}", application, command.label());
            return;
        };

        self.in_flight.insert(application.clone());
        let api = self.api.clone();
        spawn_task(
            self.sender.clone(),
            async move {
                match command {
                    CardCommand::Deploy => card.deploy(api.as_ref()).await,
                    // The confirmation modal already collected the answer.
                    CardCommand::Undeploy => card.undeploy(api.as_ref(), &Answered(true)).await,
                }
            },
            move |events| BackgroundMessage::CardFinished {
                application,
                events,
            },
        );
    }
}

#[derive(Debug, Clone, Copy)]
enum CardCommand {
    Deploy,
    Undeploy,
}

impl CardCommand {
    fn label(&self) -> &'static str {
        match self {
            CardCommand::Deploy => "deploy",
            CardCommand::Undeploy => "undeploy",
        }
    }
}

impl Drop for App {
    fn drop(&mut self) {
        self.unmount();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::background::create_channel;
    use crate::tui::background_tasks::process_background_messages;
    use crate::tui::card::CardEvent;
    use async_trait::async_trait;
    use console_defs::{
        AlertCode, ApplicationState, DeployResponse, DeployStatus, GlobalConfig, ModuleList,
        ALLOWED_MODULES_COUNT,
    };
    use pretty_assertions::assert_eq;
    use std::collections::BTreeMap;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct FakeApi {
        list: ModuleList,
        allowed: &'static str,
        fetches: AtomicUsize,
        config_fetches: AtomicUsize,
        writes: AtomicUsize,
    }

    impl FakeApi {
        fn new(list: ModuleList, allowed: &'static str) -> Arc<Self> {
            Arc::new(Self {
                list,
                allowed,
                fetches: AtomicUsize::new(0),
                config_fetches: AtomicUsize::new(0),
                writes: AtomicUsize::new(0),
            })
        }
    }

    #[async_trait]
    impl ModuleApi for FakeApi {
        async fn fetch_module_list(&self) -> Option<ModuleList> {
            self.fetches.fetch_add(1, Ordering::SeqCst);
            Some(self.list.clone())
        }

        async fn get_global_config(&self) -> Option<GlobalConfig> {
            self.config_fetches.fetch_add(1, Ordering::SeqCst);
            let mut values = BTreeMap::new();
            values.insert(ALLOWED_MODULES_COUNT.to_string(), self.allowed.to_string());
            Some(GlobalConfig::new(values))
        }

        async fn deploy_application(&self, _application: &str) -> DeployResponse {
            self.writes.fetch_add(1, Ordering::SeqCst);
            DeployResponse {
                status: DeployStatus::Ok,
                application: Some(ApplicationState {
                    deployed: Some(true),
                    deleting: Some(false),
                    health: Some("Progressing".to_string()),
                    status: Some("OutOfSync".to_string()),
                }),
            }
        }

        async fn undeploy_application(&self, _application: &str) -> DeployResponse {
            self.writes.fetch_add(1, Ordering::SeqCst);
            DeployResponse::error()
        }
    }

    fn catalog() -> ModuleList {
        ModuleList::new(vec![
            Module {
                name: "inventory".to_string(),
                primary_tags: vec!["backend".to_string()],
                application: "globex-inventory".to_string(),
                deployed: true,
                ..Default::default()
            },
            Module {
                name: "web".to_string(),
                primary_tags: vec!["frontend".to_string()],
                application: "globex-web".to_string(),
                ..Default::default()
            },
        ])
    }

    #[tokio::test]
    async fn test_offline_console_makes_no_requests() {
        let api = FakeApi::new(catalog(), "2");
        let (sender, mut receiver) = create_channel();
        let mut app = App::new(
            api.clone(),
            ConsoleOptions {
                networked: false,
                ..Default::default()
            },
            sender,
        );

        app.mount();
        app.refresh();
        tokio::task::yield_now().await;
        process_background_messages(&mut app, &mut receiver);

        assert!(!app.is_polling());
        assert!(!app.is_loading());
        assert_eq!(api.fetches.load(Ordering::SeqCst), 0);
        assert_eq!(api.config_fetches.load(Ordering::SeqCst), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_mount_loads_list_and_config_then_unmount_stops() {
        let api = FakeApi::new(catalog(), "2");
        let (sender, mut receiver) = create_channel();
        let mut app = App::new(api.clone(), ConsoleOptions::default(), sender);

        app.mount();
        assert!(app.is_loading());
        for _ in 0..2 {
            let message = receiver.recv().await.unwrap();
            app.process_background_message(message);
        }

        assert!(app.is_polling());
        assert!(!app.is_loading());
        assert_eq!(app.visible_modules().len(), 2);
        assert_eq!(
            app.list_state.global_config().unwrap().allowed_modules_count(),
            Some(2)
        );

        app.unmount();
        assert!(!app.is_polling());
        tokio::time::sleep(Duration::from_secs(60)).await;
        assert_eq!(api.fetches.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_deploy_merges_and_resyncs() {
        let api = FakeApi::new(catalog(), "5");
        let (sender, mut receiver) = create_channel();
        let mut app = App::new(api.clone(), ConsoleOptions::default(), sender);
        app.process_background_message(BackgroundMessage::ModulesLoaded {
            generation: 1,
            list: Some(catalog()),
        });

        app.move_down();
        app.request_deploy();
        assert_eq!(
            app.pending_action,
            PendingAction::Deploy("globex-web".to_string())
        );
        app.process_pending_action();
        assert!(app.in_flight.contains("globex-web"));

        let message = receiver.recv().await.unwrap();
        app.process_background_message(message);

        assert!(app.in_flight.is_empty());
        let web = &app.list_state.modules()[1];
        assert!(web.deployed);
        assert_eq!(web.health, "Progressing");
        // The card message triggered a resync.
        let message = receiver.recv().await.unwrap();
        assert!(matches!(message, BackgroundMessage::ModulesLoaded { .. }));
        assert_eq!(api.fetches.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_deploy_at_limit_shows_alert() {
        let api = FakeApi::new(catalog(), "1");
        let (sender, mut receiver) = create_channel();
        let mut app = App::new(api.clone(), ConsoleOptions::default(), sender);
        app.process_background_message(BackgroundMessage::GlobalConfigLoaded(
            api.get_global_config().await,
        ));
        app.process_background_message(BackgroundMessage::ModulesLoaded {
            generation: 1,
            list: Some(catalog()),
        });

        app.move_down();
        app.request_deploy();
        app.process_pending_action();
        let message = receiver.recv().await.unwrap();
        app.process_background_message(message);

        assert_eq!(
            app.list_state.active_alert().map(|a| a.code),
            Some(AlertCode::MaxModulesDeployed)
        );
        assert_eq!(api.writes.load(Ordering::SeqCst), 0);

        app.dismiss_alert();
        assert!(app.list_state.active_alert().is_none());
    }

    #[tokio::test]
    async fn test_declining_undeploy_modal() {
        let api = FakeApi::new(catalog(), "5");
        let (sender, _receiver) = create_channel();
        let mut app = App::new(api.clone(), ConsoleOptions::default(), sender);
        app.process_background_message(BackgroundMessage::ModulesLoaded {
            generation: 1,
            list: Some(catalog()),
        });

        app.request_undeploy();
        assert!(app.modal_state.showing_confirmation);
        app.close_confirmation();
        app.process_pending_action();
        tokio::task::yield_now().await;

        assert!(!app.has_pending_action());
        assert_eq!(api.writes.load(Ordering::SeqCst), 0);
        assert_eq!(app.list_state.modules(), catalog().modules.as_slice());
    }

    #[tokio::test]
    async fn test_confirming_undeploy_modal_schedules_request() {
        let api = FakeApi::new(catalog(), "5");
        let (sender, _receiver) = create_channel();
        let mut app = App::new(api.clone(), ConsoleOptions::default(), sender);
        app.process_background_message(BackgroundMessage::ModulesLoaded {
            generation: 1,
            list: Some(catalog()),
        });

        app.request_undeploy();
        app.confirm_action();
        assert!(!app.modal_state.showing_confirmation);
        assert_eq!(
            app.pending_action,
            PendingAction::Undeploy("globex-inventory".to_string())
        );
    }

    #[tokio::test]
    async fn test_confirmed_undeploy_reaches_backend() {
        let api = FakeApi::new(catalog(), "5");
        let (sender, mut receiver) = create_channel();
        let mut app = App::new(api.clone(), ConsoleOptions::default(), sender);
        app.process_background_message(BackgroundMessage::ModulesLoaded {
            generation: 1,
            list: Some(catalog()),
        });

        app.request_undeploy();
        app.confirm_action();
        app.process_pending_action();
        assert!(app.in_flight.contains("globex-inventory"));

        let message = receiver.recv().await.unwrap();
        app.process_background_message(message);

        assert!(app.in_flight.is_empty());
        assert_eq!(api.writes.load(Ordering::SeqCst), 1);
        // A failed write leaves the module as it was.
        assert!(app.list_state.modules()[0].deployed);
    }

    #[tokio::test]
    async fn test_offline_console_ignores_card_commands() {
        let api = FakeApi::new(catalog(), "5");
        let (sender, _receiver) = create_channel();
        let mut app = App::new(
            api.clone(),
            ConsoleOptions {
                networked: false,
                ..Default::default()
            },
            sender,
        );
        app.process_background_message(BackgroundMessage::ModulesLoaded {
            generation: 1,
            list: Some(catalog()),
        });

        app.schedule_action(PendingAction::Deploy("globex-web".to_string()));
        app.process_pending_action();
        app.schedule_action(PendingAction::Undeploy("globex-inventory".to_string()));
        app.process_pending_action();
        tokio::task::yield_now().await;

        assert!(app.in_flight.is_empty());
        assert_eq!(api.writes.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_tag_focus_and_filter() {
        let api = FakeApi::new(catalog(), "5");
        let (sender, _receiver) = create_channel();
        let mut app = App::new(api, ConsoleOptions::default(), sender);
        app.process_background_message(BackgroundMessage::ModulesLoaded {
            generation: 1,
            list: Some(catalog()),
        });

        app.toggle_focus();
        assert_eq!(app.focus, Focus::Tags);
        app.tag_right();
        app.toggle_selected_tag();
        app.refresh_visible();

        let names: Vec<&str> = app.visible_modules().iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["web"]);
        assert_eq!(app.selected_module().map(|m| m.name.as_str()), Some("web"));

        app.list_state.apply_card_event(&CardEvent::Alert(AlertCode::MaxModulesDeployed));
        assert!(app.list_state.active_alert().is_some());
    }
}
