//! Sliding-window rate limiting keyed by client identifier.

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use crate::errors::AppError;

/// In-memory sliding-window limiter. Each identifier keeps the timestamps of
/// its requests within the current window; anything older is dropped on the
/// next check. State is process-local.
pub struct RateLimiter {
    max_requests: usize,
    period: Duration,
    store: Mutex<HashMap<String, Vec<Instant>>>,
}

impl RateLimiter {
    pub fn new(max_requests: usize, period: Duration) -> Self {
        Self {
            max_requests,
            period,
            store: Mutex::new(HashMap::new()),
        }
    }

    /// Record one request for `identifier` if it fits in the window.
    /// Returns false when the identifier is over quota; denied requests are
    /// not recorded.
    pub fn check(&self, identifier: &str) -> bool {
        let mut store = self.store.lock().expect("rate limiter lock poisoned");
        let now = Instant::now();

        let events = store.entry(identifier.to_string()).or_default();
        events.retain(|&event| now.duration_since(event) < self.period);

        if events.len() >= self.max_requests {
            return false;
        }
        events.push(now);
        true
    }

    /// Like [`check`](Self::check), but surfaces the denial as an
    /// [`AppError`] for direct use in handlers.
    pub fn enforce(&self, identifier: &str) -> Result<(), AppError> {
        if self.check(identifier) {
            Ok(())
        } else {
            Err(AppError::RateLimited {
                max_requests: self.max_requests,
                period_secs: self.period.as_secs(),
            })
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
