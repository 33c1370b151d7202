//! Keeping the filter state in the browser history.
//!
//! Every filter change rewrites the current history entry at once, so a
//! reload or shared link always reflects what is on screen. A new history
//! entry is only created once the filters have been quiet for a while, so
//! typing a query does not leave one entry per keystroke.
//!
//! [`UrlSync`] is the synchronous state machine; the caller supplies the
//! clock. See [`crate::driver`] for a tokio task that runs it.

use std::time::Duration;

use tokio::time::Instant;
use url::Url;

use crate::query_string::{apply_to_url, from_url};
use crate::state::FilterState;

/// Quiet period before a filter change becomes a history entry.
pub const DEFAULT_PUSH_DELAY: Duration = Duration::from_secs(5);

/// The browser history, as far as URL sync is concerned.
pub trait History {
    /// URL of the current entry.
    fn location(&self) -> Url;

    /// Rewrite the current entry without creating a new one.
    fn replace(&mut self, url: Url);

    /// Append a new entry after the current one and make it current.
    fn push(&mut self, url: Url);
}

/// In-memory history with back/forward, for tests and the CLI.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MemoryHistory {
    entries: Vec<Url>,
    cursor: usize,
}

impl MemoryHistory {
    /// Creates a history with a single entry.
    pub fn new(initial: Url) -> Self {
        Self {
            entries: vec![initial],
            cursor: 0,
        }
    }

    /// All entries, oldest first.
    pub fn entries(&self) -> &[Url] {
        &self.entries
    }

    /// Index of the current entry.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Go back one entry. Returns false at the start.
    pub fn back(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        true
    }

    /// Go forward one entry. Returns false at the end.
    pub fn forward(&mut self) -> bool {
        if self.cursor + 1 >= self.entries.len() {
            return false;
        }
        self.cursor += 1;
        true
    }
}

impl History for MemoryHistory {
    fn location(&self) -> Url {
        self.entries[self.cursor].clone()
    }

    fn replace(&mut self, url: Url) {
        self.entries[self.cursor] = url;
    }

    fn push(&mut self, url: Url) {
        self.entries.truncate(self.cursor + 1);
        self.entries.push(url);
        self.cursor = self.entries.len() - 1;
    }
}

/// Whether a history push is waiting for the quiet period to end.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SyncState {
    /// Nothing pending.
    Idle,
    /// A push is due at `deadline` unless the filters change again.
    PendingPush {
        /// When the push happens.
        deadline: Instant,
    },
}

/// Debounced filter state ⇄ history synchronisation.
#[derive(Debug)]
pub struct UrlSync<H> {
    history: H,
    delay: Duration,
    current: FilterState,
    pushed: FilterState,
    state: SyncState,
}

impl<H: History> UrlSync<H> {
    /// Start syncing: the filter state is read from the current URL and
    /// taken as already pushed.
    pub fn mount(history: H, delay: Duration) -> Self {
        let current = from_url(&history.location());
        Self {
            history,
            delay,
            pushed: current.clone(),
            current,
            state: SyncState::Idle,
        }
    }

    /// The filter state as last set.
    pub fn current(&self) -> &FilterState {
        &self.current
    }

    /// The state of the last history entry this instance created.
    pub fn pushed(&self) -> &FilterState {
        &self.pushed
    }

    /// Current machine state.
    pub fn state(&self) -> SyncState {
        self.state
    }

    /// When the pending push is due, if any.
    pub fn deadline(&self) -> Option<Instant> {
        match self.state {
            SyncState::Idle => None,
            SyncState::PendingPush { deadline } => Some(deadline),
        }
    }

    /// The history being written.
    pub fn history(&self) -> &H {
        &self.history
    }

    /// The filters changed: rewrite the current entry and (re)start the
    /// quiet period.
    pub fn filter_changed(&mut self, state: FilterState, now: Instant) {
        self.current = state;
        let url = apply_to_url(&self.current, &self.history.location());
        self.history.replace(url);
        self.state = SyncState::PendingPush {
            deadline: now + self.delay,
        };
    }

    /// Fire the pending push if its deadline has passed. Returns whether a
    /// new history entry was created.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.deadline() {
            Some(deadline) if now >= deadline => self.fire(),
            _ => false,
        }
    }

    fn fire(&mut self) -> bool {
        self.state = SyncState::Idle;
        if self.current == self.pushed {
            return false;
        }
        let location = self.history.location();
        self.history.replace(apply_to_url(&self.pushed, &location));
        let url = apply_to_url(&self.current, &location);
        log::debug!("Pushing history entry {url}");
        self.history.push(url);
        self.pushed = self.current.clone();
        true
    }

    /// The user navigated back or forward: drop any pending push and adopt
    /// the state of the entry navigated to.
    pub fn navigated(&mut self) -> &FilterState {
        self.state = SyncState::Idle;
        self.current = from_url(&self.history.location());
        self.pushed = self.current.clone();
        &self.current
    }

    /// Stop syncing and hand back the history. A pending push is dropped.
    pub fn unmount(self) -> H {
        self.history
    }
}
