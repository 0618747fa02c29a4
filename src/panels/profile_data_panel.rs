use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::models::fetch_state::FetchState;
use crate::services::github_profile_service::GitHubProfileService;

/// Owns the GitHub panel's fetch state.
///
/// Mounting starts a single background fetch; that task is the only writer of
/// the state and writes it at most once. Handlers read snapshots.
pub struct ProfileDataPanel {
    state: Arc<watch::Sender<FetchState>>,
    mounted: Arc<AtomicBool>,
    task: Mutex<Option<JoinHandle<()>>>,
}

impl ProfileDataPanel {
    pub fn mount(service: Arc<GitHubProfileService>) -> Self {
        let (sender, _) = watch::channel(FetchState::Loading);
        let state = Arc::new(sender);
        let mounted = Arc::new(AtomicBool::new(true));

        let task = tokio::spawn(load(service, state.clone(), mounted.clone()));

        ProfileDataPanel {
            state,
            mounted,
            task: Mutex::new(Some(task)),
        }
    }

    pub fn state(&self) -> FetchState {
        self.state.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<FetchState> {
        self.state.subscribe()
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted.load(Ordering::Acquire)
    }

    /// Waits until the state leaves `Loading`.
    ///
    /// Never resolves if the panel is unmounted before the fetch completes.
    pub async fn settled(&self) -> FetchState {
        let mut receiver = self.state.subscribe();
        loop {
            {
                let current = receiver.borrow_and_update();
                if !current.is_loading() {
                    return current.clone();
                }
            }
            if receiver.changed().await.is_err() {
                return receiver.borrow().clone();
            }
        }
    }

    /// Stops any late response from being applied. In-flight requests are not
    /// cancelled; the fetch task handle is returned on the first call.
    pub fn unmount(&self) -> Option<JoinHandle<()>> {
        // Cleared under the state lock so it cannot interleave with `publish`.
        self.state.send_if_modified(|_| {
            self.mounted.store(false, Ordering::Release);
            false
        });
        match self.task.lock() {
            Ok(mut task) => task.take(),
            Err(poisoned) => poisoned.into_inner().take(),
        }
    }
}

async fn load(service: Arc<GitHubProfileService>, state: Arc<watch::Sender<FetchState>>, mounted: Arc<AtomicBool>) {
    log::info!("Loading GitHub data for {}", service.config.handle);
    let outcome = service.fetch_panel_data().await;

    if let Err(e) = &outcome {
        log::error!("GitHub data unavailable: {}", e);
    }
    if !publish(&state, &mounted, FetchState::from(outcome)) {
        log::debug!("Panel unmounted or already settled, discarding GitHub response");
    }
}

/// Replaces `Loading` with `next` while mounted. The mounted check and the
/// write happen under the channel's lock.
fn publish(state: &watch::Sender<FetchState>, mounted: &AtomicBool, next: FetchState) -> bool {
    state.send_if_modified(|current| {
        if !mounted.load(Ordering::Acquire) || !current.is_loading() {
            return false;
        }
        *current = next;
        true
    })
}
