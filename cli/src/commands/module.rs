use anyhow::{anyhow, bail, Result};
use colored::Colorize;
use console_defs::{Module, ModuleList};
use http_client::ModuleApi;
use log::{info, warn};
use prettytable::{row, Table};

use crate::tui::card::{CardEvent, Confirm, ModuleCard};
use crate::tui::state::ModuleListState;

async fn load_state(api: &dyn ModuleApi) -> Result<ModuleListState> {
    let list = api
        .fetch_module_list()
        .await
        .ok_or_else(|| anyhow!("Failed to load the module list"))?;

    let mut state = ModuleListState::new();
    state.apply_refresh(1, Some(list));
    state.set_global_config(api.get_global_config().await);
    Ok(state)
}

fn find_card(state: &ModuleListState, application: &str) -> Result<ModuleCard> {
    state
        .modules()
        .iter()
        .find(|m| m.application == application)
        .map(|m| ModuleCard::new(m.clone(), state.max_modules_reached()))
        .ok_or_else(|| anyhow!("No module with application '{}'", application))
}

fn print_modules(modules: &[&Module]) {
    let mut table = Table::new();
    table.add_row(row![
        "Module".purple().bold(),
        "Application".blue().bold(),
        "Tags".green().bold(),
        "Deployed".bold(),
        "Status".bold(),
        "Health".bold(),
    ]);
    for module in modules {
        let deployed = if module.deleting {
            "deleting".red()
        } else if module.deployed {
            "yes".green()
        } else {
            "no".normal()
        };
        table.add_row(row![
            module.name,
            module.application,
            module.primary_tags.join(", "),
            deployed,
            module.status,
            module.health,
        ]);
    }
    table.printstd();
}

pub async fn handle_list(api: &dyn ModuleApi, deployed_only: bool, tags: &[String]) -> Result<()> {
    let mut state = load_state(api).await?;

    for tag in tags {
        if state.toggle_tag_named(tag).is_none() {
            warn!("Ignoring unknown tag '{}'", tag);
        }
    }
    if deployed_only {
        state.set_show_only_deployed(true);
    }

    let modules = state.visible_modules();
    if modules.is_empty() {
        println!("No modules found");
        return Ok(());
    }
    print_modules(&modules);
    Ok(())
}

/// Prints what the card reported and, like the console does, re-reads the list.
async fn report(api: &dyn ModuleApi, application: &str, events: Vec<CardEvent>) -> Result<()> {
    let mut resync = false;
    for event in &events {
        match event {
            CardEvent::Alert(code) => {
                bail!("{}", code.alert().message);
            }
            CardEvent::ModuleUpdated { state, .. } => {
                info!("{} reported {:?}", application, state);
            }
            CardEvent::Message(_) => resync = true,
        }
    }
    if !resync {
        println!("Nothing to do for {}", application);
        return Ok(());
    }

    let list: ModuleList = api
        .fetch_module_list()
        .await
        .ok_or_else(|| anyhow!("Failed to reload the module list"))?;
    let modules: Vec<&Module> = list
        .modules
        .iter()
        .filter(|m| m.application == application)
        .collect();
    print_modules(&modules);
    Ok(())
}

pub async fn handle_deploy(api: &dyn ModuleApi, application: &str) -> Result<()> {
    let state = load_state(api).await?;
    let card = find_card(&state, application)?;
    if !card.can_deploy() {
        println!("{} is already deployed", application.bold());
        return Ok(());
    }

    let events = card.deploy(api).await;
    report(api, application, events).await
}

pub async fn handle_undeploy(
    api: &dyn ModuleApi,
    application: &str,
    confirm: &dyn Confirm,
) -> Result<()> {
    let state = load_state(api).await?;
    let card = find_card(&state, application)?;
    if card.module().is_default {
        bail!("{} is deployed by default and cannot be undeployed", application);
    }
    if !card.can_undeploy() {
        println!("{} is not deployed", application.bold());
        return Ok(());
    }

    let events = card.undeploy(api, confirm).await;
    if events.is_empty() {
        println!("Cancelled");
        return Ok(());
    }
    report(api, application, events).await
}
