use chrono::{DateTime, Timelike, Utc};
use std::collections::HashMap;
use tokio::sync::RwLock;

/// In-process fixed-window rate limiter, keyed by client address.
///
/// Each client gets a counter for the current minute window (timestamp
/// truncated to the minute). The counter resets when the window rolls over.
/// This exists to bound outbound DNS query volume per client; it has no
/// lifecycle interaction with the classifiers.
pub struct RateLimiter {
    max_per_minute: u32,
    windows: RwLock<HashMap<String, WindowCounter>>,
}

struct WindowCounter {
    window_start: DateTime<Utc>,
    count: u32,
}

impl RateLimiter {
    pub fn new(max_per_minute: u32) -> Self {
        Self {
            max_per_minute,
            windows: RwLock::new(HashMap::new()),
        }
    }

    /// Checks the client against the current minute window and, when
    /// allowed, counts the request. Returns `false` once the window is full.
    pub async fn check_allowed(&self, client: &str) -> bool {
        self.check_allowed_at(client, Self::current_window()).await
    }

    async fn check_allowed_at(&self, client: &str, window_start: DateTime<Utc>) -> bool {
        let mut windows = self.windows.write().await;

        let counter = windows.entry(client.to_owned()).or_insert(WindowCounter {
            window_start,
            count: 0,
        });

        if counter.window_start != window_start {
            counter.window_start = window_start;
            counter.count = 0;
        }

        if counter.count >= self.max_per_minute {
            log::debug!("Rate limit hit for client {}: {} requests this minute", client, counter.count);
            return false;
        }

        counter.count += 1;
        true
    }

    /// Drops counters from past windows so the map does not grow with every
    /// client ever seen. Safe to call from any task at any interval.
    pub async fn sweep_stale(&self) {
        let window_start = Self::current_window();
        let mut windows = self.windows.write().await;
        windows.retain(|_, counter| counter.window_start == window_start);
    }

    fn current_window() -> DateTime<Utc> {
        let now = Utc::now();
        now.with_second(0)
            .and_then(|t| t.with_nanosecond(0))
            .unwrap_or(now)
    }
}
