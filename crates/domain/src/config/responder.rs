use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ResponderConfig {
    /// How long an identical response stays suppressed, in milliseconds.
    /// The window is shared by every response sent while it is open.
    #[serde(default = "default_cache_window_ms")]
    pub cache_window_ms: u64,
}

impl ResponderConfig {
    pub fn cache_window(&self) -> Duration {
        Duration::from_millis(self.cache_window_ms)
    }
}

impl Default for ResponderConfig {
    fn default() -> Self {
        Self {
            cache_window_ms: default_cache_window_ms(),
        }
    }
}

fn default_cache_window_ms() -> u64 {
    5000
}
