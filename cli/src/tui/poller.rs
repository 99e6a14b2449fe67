use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use http_client::ModuleApi;
use log::{debug, info};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;

use super::background::{spawn_task, BackgroundMessage};

/// Hands out increasing numbers for module list requests so responses that
/// arrive out of order can be told apart.
#[derive(Debug, Clone, Default)]
pub struct RefreshGenerations(Arc<AtomicU64>);

impl RefreshGenerations {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn issue(&self) -> u64 {
        self.0.fetch_add(1, Ordering::SeqCst) + 1
    }

    pub fn latest(&self) -> u64 {
        self.0.load(Ordering::SeqCst)
    }
}

/// Fetches the module list in the background. Requests are not serialized: a
/// slow one may still be running when the next one starts.
pub fn spawn_refresh(
    api: Arc<dyn ModuleApi>,
    generations: &RefreshGenerations,
    sender: mpsc::UnboundedSender<BackgroundMessage>,
) -> u64 {
    let generation = generations.issue();
    debug!("Refreshing module list (#{})", generation);
    spawn_task(
        sender,
        async move { api.fetch_module_list().await },
        move |list| BackgroundMessage::ModulesLoaded { generation, list },
    );
    generation
}

/// Refreshes the module list right away and then once per period until
/// shut down. Dropping the poller shuts it down.
pub struct RefreshPoller {
    token: CancellationToken,
    handle: Option<JoinHandle<()>>,
}

impl RefreshPoller {
    pub fn start(
        api: Arc<dyn ModuleApi>,
        generations: RefreshGenerations,
        sender: mpsc::UnboundedSender<BackgroundMessage>,
        period: Duration,
    ) -> Self {
        let token = CancellationToken::new();
        let child = token.clone();

        info!("Starting module list refresh every {:?}", period);
        let handle = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                tokio::select! {
                    biased;
                    _ = child.cancelled() => break,
                    _ = ticker.tick() => {
                        spawn_refresh(api.clone(), &generations, sender.clone());
                    }
                }
            }
            debug!("Module list refresh stopped");
        });

        Self {
            token,
            handle: Some(handle),
        }
    }

    pub fn is_running(&self) -> bool {
        self.handle
            .as_ref()
            .map(|handle| !handle.is_finished())
            .unwrap_or(false)
    }

    pub fn shutdown(&mut self) {
        self.token.cancel();
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }
}

impl Drop for RefreshPoller {
    fn drop(&mut self) {
        self.shutdown();
    }
}
