//! Debounced search query state shared by the dashboard views.
//!
//! Raw keystrokes are held locally and only committed to the shared query
//! after a 300 ms quiet period, so list views re-filter once per pause in
//! typing instead of on every keystroke. Exactly one debounce timer is
//! pending at any instant: each keystroke supersedes the previous timer,
//! and clearing (or dropping the last controller handle) invalidates any
//! in-flight commit.

use std::sync::{Arc, Mutex, MutexGuard, Weak};
use std::time::Duration;

use tokio::{sync::watch, task::JoinHandle, time};
use tracing::debug;

/// Quiet period a raw query must survive before it is committed.
pub const DEBOUNCE_WINDOW: Duration = Duration::from_millis(300);

/// Controller for the dashboard's committed search query.
///
/// Clones share the same state, so one handle can live in the search box
/// while others sit in the list views. `set_query` spawns the debounce
/// timer on the ambient tokio runtime and must be called from runtime
/// context; every other operation is synchronous.
#[derive(Clone)]
pub struct SearchQueryController {
    inner: Arc<Inner>,
}

struct Inner {
    committed: watch::Sender<String>,
    pending: Mutex<Pending>,
}

#[derive(Default)]
struct Pending {
    /// The query as typed, ahead of whatever is committed.
    raw: String,
    /// Bumped on every keystroke and on clear; a timer only commits if the
    /// generation it captured is still current.
    generation: u64,
    timer: Option<JoinHandle<()>>,
}

impl SearchQueryController {
    pub fn new() -> Self {
        let (committed, _) = watch::channel(String::new());
        Self {
            inner: Arc::new(Inner {
                committed,
                pending: Mutex::new(Pending::default()),
            }),
        }
    }

    /// Record a keystroke and restart the debounce window.
    ///
    /// Any string is accepted literally, including empty, whitespace-only
    /// and regex metacharacters. Only the most recent value in a window
    /// reaches the committed state; superseded values are never observed
    /// by the matchers.
    pub fn set_query(&self, raw: impl Into<String>) {
        let raw = raw.into();
        let mut pending = self.inner.lock_pending();
        pending.raw = raw.clone();
        pending.generation += 1;
        let generation = pending.generation;
        if let Some(timer) = pending.timer.take() {
            timer.abort();
        }

        // The timer holds only a weak handle so a commit can never land
        // after the last controller is dropped.
        let inner = Arc::downgrade(&self.inner);
        pending.timer = Some(tokio::spawn(async move {
            time::sleep(DEBOUNCE_WINDOW).await;
            if let Some(inner) = inner.upgrade() {
                inner.commit(generation, raw);
            }
        }));
    }

    /// Reset both raw and committed query to empty, immediately.
    ///
    /// A pending debounce timer is invalidated; no stale commit can land
    /// after a clear.
    pub fn clear(&self) {
        let mut pending = self.inner.lock_pending();
        pending.raw.clear();
        pending.generation += 1;
        if let Some(timer) = pending.timer.take() {
            timer.abort();
        }
        debug!("search query cleared");
        self.inner.committed.send_replace(String::new());
    }

    /// The committed query all matchers observe. Never blocks.
    pub fn committed(&self) -> String {
        self.inner.committed.borrow().clone()
    }

    /// The query as typed, possibly ahead of the committed value.
    pub fn raw(&self) -> String {
        self.inner.lock_pending().raw.clone()
    }

    /// Observe commits; receivers wake once per committed change.
    pub fn subscribe(&self) -> watch::Receiver<String> {
        self.inner.committed.subscribe()
    }
}

impl Default for SearchQueryController {
    fn default() -> Self {
        Self::new()
    }
}

impl Inner {
    fn lock_pending(&self) -> MutexGuard<'_, Pending> {
        self.pending.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn commit(&self, generation: u64, value: String) {
        let mut pending = self.lock_pending();
        if pending.generation != generation {
            // Superseded by a newer keystroke or a clear while we slept.
            return;
        }
        pending.timer = None;
        debug!(query = %value, "committing search query");
        self.committed.send_replace(value);
    }
}

impl Drop for Inner {
    fn drop(&mut self) {
        if let Ok(mut pending) = self.pending.lock()
            && let Some(timer) = pending.timer.take()
        {
            timer.abort();
        }
    }
}
