use ferrous_mdns_domain::MdnsResponse;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::debug;

use crate::ports::Clock;

/// Recently sent responses, held for one shared window.
///
/// The window opens on the first query seen while no window is running and
/// closes `window` later, dropping every held response at once. Responses
/// recorded late in a window therefore expire early; there is no per-entry
/// lifetime.
pub struct ResponseDeduplicator {
    recent: Vec<MdnsResponse>,
    window: Duration,
    expires_at: Option<Instant>,
    clock: Arc<dyn Clock>,
}

impl ResponseDeduplicator {
    pub fn new(window: Duration, clock: Arc<dyn Clock>) -> Self {
        Self {
            recent: Vec::new(),
            window,
            expires_at: None,
            clock,
        }
    }

    /// Opens the window unless one is already running. A window whose
    /// deadline has passed is closed first.
    pub fn start_window(&mut self) {
        let now = self.clock.now();
        self.expire_at(now);
        if self.expires_at.is_none() {
            self.expires_at = Some(now + self.window);
        }
    }

    /// True when an identical response was sent during the current window.
    pub fn should_suppress(&mut self, candidate: &MdnsResponse) -> bool {
        let now = self.clock.now();
        self.expire_at(now);
        self.recent.iter().any(|sent| sent == candidate)
    }

    pub fn record(&mut self, candidate: &MdnsResponse) {
        self.recent.push(candidate.clone());
    }

    /// Drops every held response and stops the window.
    pub fn clear(&mut self) {
        self.recent.clear();
        self.expires_at = None;
    }

    pub fn is_window_running(&self) -> bool {
        self.expires_at.is_some()
    }

    pub fn len(&self) -> usize {
        self.recent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recent.is_empty()
    }

    fn expire_at(&mut self, now: Instant) {
        if let Some(deadline) = self.expires_at {
            if now >= deadline {
                debug!(expired = self.recent.len(), "Suppression window closed");
                self.clear();
            }
        }
    }
}
