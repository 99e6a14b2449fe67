use anyhow::{anyhow, Result};
use colored::Colorize;
use http_client::ModuleApi;
use prettytable::{row, Table};

pub async fn handle_config(api: &dyn ModuleApi) -> Result<()> {
    let config = api
        .get_global_config()
        .await
        .ok_or_else(|| anyhow!("Failed to load the global configuration"))?;

    let mut table = Table::new();
    table.add_row(row!["Key".purple().bold(), "Value".blue().bold()]);
    for (key, value) in config.display_entries() {
        table.add_row(row![key, value]);
    }
    table.printstd();
    Ok(())
}
