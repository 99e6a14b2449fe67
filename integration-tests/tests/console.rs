#[cfg(test)]
mod console_tests {
    use std::sync::Arc;

    use console_defs::{AlertCode, ALLOWED_MODULES_COUNT};
    use http_client::{HttpModuleClient, ModuleApi};
    use integration_tests::{console_config, workshop_modules, StubBackend};
    use pretty_assertions::assert_eq;
    use workshop_console::tui::app::PendingAction;
    use workshop_console::tui::background::create_channel;
    use workshop_console::tui::card::{Answered, CardEvent, ModuleCard};
    use workshop_console::tui::state::ModuleListState;
    use workshop_console::tui::{App, ConsoleOptions};

    async fn api_for(stub: &StubBackend) -> Arc<dyn ModuleApi> {
        let endpoint = stub.start().await.unwrap();
        Arc::new(HttpModuleClient::new(&console_config(&endpoint).unwrap()).unwrap())
    }

    #[tokio::test]
    async fn test_deploy_from_card_then_resync() {
        let stub = StubBackend::new(workshop_modules());
        let api = api_for(&stub).await;

        let mut state = ModuleListState::new();
        state.apply_refresh(1, api.fetch_module_list().await);
        assert_eq!(state.tag_filters().as_slice().len(), 4);

        let web = state.modules()[1].clone();
        let card = ModuleCard::new(web, state.max_modules_reached());
        let events = card.deploy(api.as_ref()).await;

        let resync: Vec<bool> = events.iter().map(|e| state.apply_card_event(e)).collect();
        assert_eq!(resync, vec![false, true]);
        assert!(state.modules()[1].deployed);
        assert_eq!(state.modules()[1].name, "Web UI");

        state.apply_refresh(2, api.fetch_module_list().await);
        assert_eq!(state.deployed_count(), 2);
        assert_eq!(state.modules()[1].status, "OutOfSync");
    }

    #[tokio::test]
    async fn test_limit_reached_blocks_deploy() {
        let stub = StubBackend::new(workshop_modules()).with_config(ALLOWED_MODULES_COUNT, "1");
        let api = api_for(&stub).await;

        let mut state = ModuleListState::new();
        state.apply_refresh(1, api.fetch_module_list().await);
        state.set_global_config(api.get_global_config().await);
        assert!(state.max_modules_reached());

        let card = ModuleCard::new(state.modules()[2].clone(), state.max_modules_reached());
        let events = card.deploy(api.as_ref()).await;

        assert_eq!(events, vec![CardEvent::Alert(AlertCode::MaxModulesDeployed)]);
        assert!(stub.lock().writes.is_empty());
    }

    #[tokio::test]
    async fn test_declined_undeploy_sends_nothing() {
        let stub = StubBackend::new(workshop_modules());
        let api = api_for(&stub).await;

        let mut inventory = workshop_modules()[0].clone();
        inventory.is_default = false;
        let card = ModuleCard::new(inventory, false);
        let events = card.undeploy(api.as_ref(), &Answered(false)).await;

        assert!(events.is_empty());
        assert!(stub.lock().writes.is_empty());
    }

    #[tokio::test]
    async fn test_console_loads_and_deploys() {
        let stub = StubBackend::new(workshop_modules()).with_config(ALLOWED_MODULES_COUNT, "5");
        let api = api_for(&stub).await;
        let (sender, mut receiver) = create_channel();
        let mut app = App::new(api, ConsoleOptions::default(), sender);

        app.mount();
        while !(app.list_state.has_loaded() && app.list_state.global_config().is_some()) {
            let message = receiver.recv().await.unwrap();
            app.process_background_message(message);
        }
        app.refresh_visible();
        assert_eq!(app.visible_modules().len(), 3);

        app.move_down();
        app.request_deploy();
        assert_eq!(
            app.pending_action,
            PendingAction::Deploy("globex-web".to_string())
        );
        app.process_pending_action();
        while !app.in_flight.is_empty() {
            let message = receiver.recv().await.unwrap();
            app.process_background_message(message);
        }

        assert!(app.list_state.modules()[1].deployed);
        assert_eq!(stub.lock().writes, vec!["deploy globex-web".to_string()]);
        app.unmount();
    }
}
