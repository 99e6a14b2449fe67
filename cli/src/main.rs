use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use console_utils::{config_path::get_log_path, setup_logging, ConfigOverrides, ConsoleConfig, LogTarget};
use http_client::{HttpModuleClient, ModuleApi};
use log::{error, info};
use workshop_console::commands;
use workshop_console::tui::{card::Answered, run_tui, ConsoleOptions};
use workshop_console::PromptConfirm;

#[derive(Parser, Debug)]
#[command(name = "workshop-console", version = env!("APP_VERSION"), about = "Browse, deploy and undeploy workshop modules")]
struct Cli {
    /// Base URL of the workshop backend
    #[arg(long, global = true)]
    endpoint: Option<String>,

    /// User forwarded to the backend in the X-Forwarded-User header
    #[arg(long, global = true)]
    user: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Interactive console (default)
    Tui {
        /// Start without talking to the backend
        #[arg(long)]
        no_poll: bool,
        /// Seconds between module list refreshes
        #[arg(long)]
        interval: Option<u64>,
    },
    /// Print the module list
    List {
        /// Only show deployed modules
        #[arg(long)]
        deployed: bool,
        /// Only show modules with this primary tag, may be repeated
        #[arg(long = "tag")]
        tags: Vec<String>,
    },
    /// Print the global workshop configuration
    Config,
    /// Deploy the module backed by APPLICATION
    Deploy { application: String },
    /// Undeploy the module backed by APPLICATION
    Undeploy {
        application: String,
        /// Do not ask for confirmation
        #[arg(long, short)]
        yes: bool,
    },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(cli).await {
        error!("{:#}", e);
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let command = cli.command.unwrap_or(Commands::Tui {
        no_poll: false,
        interval: None,
    });

    // The TUI owns the terminal, so it logs to a file instead
    let target = match command {
        Commands::Tui { .. } => LogTarget::File(get_log_path()?),
        _ => LogTarget::Stderr,
    };
    setup_logging(target).context("Failed to initialize logging")?;

    let refresh_interval_secs = match &command {
        Commands::Tui { interval, .. } => *interval,
        _ => None,
    };
    let config = ConsoleConfig::load(ConfigOverrides {
        api_endpoint: cli.endpoint,
        forwarded_user: cli.user,
        refresh_interval_secs,
    })?;
    info!("Using backend {}", config.api_endpoint);

    let api: Arc<dyn ModuleApi> = Arc::new(HttpModuleClient::new(&config)?);

    match command {
        Commands::Tui { no_poll, .. } => {
            let options = ConsoleOptions {
                networked: !no_poll,
                refresh_interval: config.refresh_interval,
            };
            run_tui(api, options).await
        }
        Commands::List { deployed, tags } => {
            commands::handle_list(api.as_ref(), deployed, &tags).await
        }
        Commands::Config => commands::handle_config(api.as_ref()).await,
        Commands::Deploy { application } => {
            commands::handle_deploy(api.as_ref(), &application).await
        }
        Commands::Undeploy { application, yes } => {
            if yes {
                commands::handle_undeploy(api.as_ref(), &application, &Answered(true)).await
            } else {
                commands::handle_undeploy(api.as_ref(), &application, &PromptConfirm).await
            }
        }
    }
}
