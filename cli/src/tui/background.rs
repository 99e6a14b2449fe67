use console_defs::{GlobalConfig, ModuleList};
use tokio::sync::mpsc;

use super::card::CardEvent;

/// Messages sent from background tasks to the UI thread
#[derive(Debug, Clone)]
pub enum BackgroundMessage {
    // Data loading results
    ModulesLoaded {
        generation: u64,
        list: Option<ModuleList>,
    },
    GlobalConfigLoaded(Option<GlobalConfig>),

    // Card actions
    CardFinished {
        application: String,
        events: Vec<CardEvent>,
    },
}

/// Create a channel for background task communication
pub fn create_channel() -> (
    mpsc::UnboundedSender<BackgroundMessage>,
    mpsc::UnboundedReceiver<BackgroundMessage>,
) {
    mpsc::unbounded_channel()
}

/// Helper to spawn a background task and send its result via channel
pub fn spawn_task<F, T>(
    sender: mpsc::UnboundedSender<BackgroundMessage>,
    future: F,
    mapper: impl FnOnce(T) -> BackgroundMessage + Send + 'static,
) where
    F: std::future::Future<Output = T> + Send + 'static,
    T: Send + 'static,
{
    tokio::spawn(async move {
        let result = future.await;
        // The UI may already be gone; the result is dropped then.
        let _ = sender.send(mapper(result));
    });
}
