//! A tokio task that runs [`UrlSync`] against the wall clock.
//!
//! The view sends filter changes and navigation notices through a
//! [`DebouncedUrlSync`] handle. The task owns the single outstanding timer;
//! dropping the handle aborts the task, and with it any pending push.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;
use tokio::time::{self, Instant};
use url::Url;

use crate::history::{History, MemoryHistory, UrlSync};
use crate::state::FilterState;

enum Command {
    Changed(FilterState),
    Navigated(oneshot::Sender<FilterState>),
}

/// A [`MemoryHistory`] that the view and the driver task can both reach.
#[derive(Clone, Debug)]
pub struct SharedHistory {
    inner: Arc<Mutex<MemoryHistory>>,
}

impl SharedHistory {
    /// Creates a shared history with a single entry.
    pub fn new(initial: Url) -> Self {
        Self {
            inner: Arc::new(Mutex::new(MemoryHistory::new(initial))),
        }
    }

    fn lock(&self) -> MutexGuard<'_, MemoryHistory> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// A copy of the current history.
    pub fn snapshot(&self) -> MemoryHistory {
        self.lock().clone()
    }

    /// Browser "back". Returns false at the start.
    pub fn back(&self) -> bool {
        self.lock().back()
    }

    /// Browser "forward". Returns false at the end.
    pub fn forward(&self) -> bool {
        self.lock().forward()
    }
}

impl History for SharedHistory {
    fn location(&self) -> Url {
        self.lock().location()
    }

    fn replace(&mut self, url: Url) {
        self.lock().replace(url);
    }

    fn push(&mut self, url: Url) {
        self.lock().push(url);
    }
}

/// Handle to a running URL sync task.
#[derive(Debug)]
pub struct DebouncedUrlSync {
    commands: mpsc::UnboundedSender<Command>,
    task: JoinHandle<()>,
    initial: FilterState,
}

impl DebouncedUrlSync {
    /// Mount URL sync on `history` and start the task.
    ///
    /// Must be called from within a tokio runtime.
    pub fn spawn<H>(history: H, delay: Duration) -> Self
    where
        H: History + Send + 'static,
    {
        let sync = UrlSync::mount(history, delay);
        let initial = sync.current().clone();
        let (commands, receiver) = mpsc::unbounded_channel();
        let task = tokio::spawn(run(sync, receiver));
        Self {
            commands,
            task,
            initial,
        }
    }

    /// The filter state read from the URL at mount.
    pub fn initial_state(&self) -> &FilterState {
        &self.initial
    }

    /// Report a filter change.
    pub fn filter_changed(&self, state: FilterState) {
        if self.commands.send(Command::Changed(state)).is_err() {
            log::warn!("URL sync task is gone; filter change not recorded");
        }
    }

    /// Report a back/forward navigation and get the state adopted from the
    /// new URL. `None` if the task is gone.
    pub async fn navigated(&self) -> Option<FilterState> {
        let (reply, response) = oneshot::channel();
        self.commands.send(Command::Navigated(reply)).ok()?;
        response.await.ok()
    }
}

impl Drop for DebouncedUrlSync {
    fn drop(&mut self) {
        self.task.abort();
    }
}

async fn run<H: History>(mut sync: UrlSync<H>, mut commands: mpsc::UnboundedReceiver<Command>) {
    loop {
        let deadline = sync.deadline();

        tokio::select! {
            command = commands.recv() => match command {
                Some(Command::Changed(state)) => sync.filter_changed(state, Instant::now()),
                Some(Command::Navigated(reply)) => {
                    let state = sync.navigated().clone();
                    let _ = reply.send(state);
                }
                None => break,
            },
            () = async {
                if let Some(deadline) = deadline {
                    time::sleep_until(deadline).await;
                }
            }, if deadline.is_some() => {
                sync.poll(Instant::now());
            }
        }
    }
    log::debug!("URL sync task stopped");
}
