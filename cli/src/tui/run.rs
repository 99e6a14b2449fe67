use std::io;
use std::sync::Arc;

use anyhow::{Context, Result};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use http_client::ModuleApi;
use log::info;
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use tokio::sync::mpsc::UnboundedReceiver;

use super::app::{App, ConsoleOptions};
use super::background::{create_channel, BackgroundMessage};
use super::background_tasks::process_background_messages;
use super::handlers::handle_events;
use super::ui;

/// Takes over the terminal until the user quits.
pub async fn run_tui(api: Arc<dyn ModuleApi>, options: ConsoleOptions) -> Result<()> {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(info);
    }));

    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;

    let (sender, mut receiver) = create_channel();
    let mut app = App::new(api, options, sender);
    app.mount();

    let result = run_app(&mut terminal, &mut app, &mut receiver).await;

    app.unmount();
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    info!("Console closed");
    result
}

async fn run_app<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    receiver: &mut UnboundedReceiver<BackgroundMessage>,
) -> Result<()> {
    loop {
        process_background_messages(app, receiver);

        terminal.draw(|frame| ui::render(frame, app))?;

        if app.has_pending_action() {
            app.process_pending_action();
        }

        handle_events(app).await?;

        if app.should_quit {
            return Ok(());
        }
    }
}
