use crate::config::Config;
use crate::models::CalendarLayout;
use crate::source::ContributionSource;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::debug;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub source: Arc<dyn ContributionSource>,
    pub renders: Arc<RenderTracker>,
}

impl AppState {
    pub fn new(config: Config, source: Arc<dyn ContributionSource>) -> Self {
        Self {
            config: Arc::new(config),
            source,
            renders: Arc::new(RenderTracker::default()),
        }
    }
}

#[derive(Default)]
struct InFlight {
    active: usize,
    newest: Option<(u64, Arc<CalendarLayout>)>,
}

#[derive(Default)]
pub struct RenderTracker {
    next: AtomicU64,
    users: Mutex<HashMap<String, InFlight>>,
}

impl RenderTracker {
    pub fn begin(&self, username: &str) -> RenderTicket<'_> {
        let generation = self.next.fetch_add(1, Ordering::SeqCst) + 1;
        self.users()
            .entry(username.to_string())
            .or_default()
            .active += 1;
        RenderTicket {
            tracker: self,
            username: username.to_string(),
            generation,
        }
    }

    fn users(&self) -> MutexGuard<'_, HashMap<String, InFlight>> {
        self.users.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn release(&self, username: &str) {
        let mut users = self.users();
        if let Some(entry) = users.get_mut(username) {
            entry.active = entry.active.saturating_sub(1);
            if entry.active == 0 {
                users.remove(username);
            }
        }
    }
}

// Dropped without settling when the request is cancelled.
pub struct RenderTicket<'a> {
    tracker: &'a RenderTracker,
    username: String,
    generation: u64,
}

impl RenderTicket<'_> {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn settle(self, layout: CalendarLayout) -> Arc<CalendarLayout> {
        let mut users = self.tracker.users();
        let entry = users.entry(self.username.clone()).or_default();
        if let Some((newest, newer_layout)) = &entry.newest {
            if *newest > self.generation {
                debug!(
                    "discarding stale render {} for {}, {newest} already settled",
                    self.generation, self.username
                );
                return Arc::clone(newer_layout);
            }
        }

        let layout = Arc::new(layout);
        entry.newest = Some((self.generation, Arc::clone(&layout)));
        layout
    }
}

impl Drop for RenderTicket<'_> {
    fn drop(&mut self) {
        self.tracker.release(&self.username);
    }
}
