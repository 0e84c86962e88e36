//! Rate Limiting Implementation
//!
//! Fixed-window admission control keyed by client identifier.
//!
//! Each client owns a window of `window_secs` that starts with its first
//! request. Requests are counted until the window's reset instant passes; the
//! next request after that opens a fresh window. A fixed window can admit up to
//! twice the nominal rate around a boundary, which is an accepted approximation.
//!
//! Rejected attempts are counted too. A client that keeps sending past the cap
//! stays rejected until its window resets.
//!
//! Windows live in a bounded LRU map, so memory is capped at
//! `max_tracked_clients` entries. A background sweep drops windows that have
//! already expired.

use crate::config::models::rate_limit::{MAX_WINDOW_SECS, RateLimitConfig};
use lru::LruCache;
use parking_lot::Mutex;
use std::num::NonZeroUsize;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::debug;

/// Outcome of one admission check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RateLimitDecision {
    /// Request may proceed
    Admitted,
    /// Request is over the cap for the current window
    Rejected {
        /// Whole seconds until the client's window resets, rounded up
        retry_after_secs: u64,
    },
}

impl RateLimitDecision {
    pub fn is_admitted(&self) -> bool {
        matches!(self, RateLimitDecision::Admitted)
    }

    pub fn retry_after_secs(&self) -> Option<u64> {
        match self {
            RateLimitDecision::Admitted => None,
            RateLimitDecision::Rejected { retry_after_secs } => Some(*retry_after_secs),
        }
    }
}

/// Read-only view of one client's window
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowStatus {
    /// Requests counted in the current window, rejected ones included
    pub count: u32,
    /// Requests still admissible in the current window
    pub remaining: u32,
    /// Whole seconds until the window resets, rounded up
    pub reset_after_secs: u64,
}

/// Per-client counter
#[derive(Debug, Clone)]
struct ClientWindow {
    count: u32,
    window_reset_at: Instant,
}

impl ClientWindow {
    fn open(now: Instant, window: Duration) -> Self {
        let window_reset_at = now
            .checked_add(window)
            .or_else(|| now.checked_add(Duration::from_secs(MAX_WINDOW_SECS)))
            .unwrap_or(now);
        Self {
            count: 1,
            window_reset_at,
        }
    }

    fn is_expired(&self, now: Instant) -> bool {
        now > self.window_reset_at
    }
}

/// Rate limiter implementation
pub struct RateLimiter {
    /// Rate limit configuration
    config: RateLimitConfig,
    /// Windows by client identifier
    windows: Mutex<LruCache<String, ClientWindow>>,
    /// Window duration
    window: Duration,
}

impl RateLimiter {
    /// Create a new rate limiter
    pub fn new(config: RateLimitConfig) -> Self {
        let capacity =
            NonZeroUsize::new(config.max_tracked_clients).unwrap_or(NonZeroUsize::MIN);
        let window = Duration::from_secs(config.window_secs.min(MAX_WINDOW_SECS));

        Self {
            config,
            windows: Mutex::new(LruCache::new(capacity)),
            window,
        }
    }

    /// Create a rate limiter with a custom window, for sub-second windows
    pub fn with_window(config: RateLimitConfig, window: Duration) -> Self {
        Self {
            window,
            ..Self::new(config)
        }
    }

    /// Count one request from `client_id` and decide whether to admit it.
    ///
    /// The lookup, the rollover and the increment happen under one lock, so
    /// concurrent requests from the same client cannot both slip under the cap.
    pub fn check_and_record(&self, client_id: &str, now: Instant) -> RateLimitDecision {
        if !self.config.enabled {
            return RateLimitDecision::Admitted;
        }

        let limit = self.config.max_requests;
        let mut windows = self.windows.lock();

        let Some(entry) = windows.get_mut(client_id) else {
            if windows.len() == windows.cap().get() {
                debug!("Rate limiter at capacity, evicting least recently seen client");
            }
            windows.put(client_id.to_string(), ClientWindow::open(now, self.window));
            return RateLimitDecision::Admitted;
        };

        if entry.is_expired(now) {
            *entry = ClientWindow::open(now, self.window);
            return RateLimitDecision::Admitted;
        }

        entry.count = entry.count.saturating_add(1);
        if entry.count > limit {
            let retry_after_secs = ceil_secs(entry.window_reset_at.saturating_duration_since(now));
            debug!(
                "Rate limit exceeded for {}: {}/{} requests, retry after {}s",
                client_id, entry.count, limit, retry_after_secs
            );
            return RateLimitDecision::Rejected { retry_after_secs };
        }

        RateLimitDecision::Admitted
    }

    /// Current window of `client_id`, without counting a request
    pub fn status(&self, client_id: &str, now: Instant) -> Option<WindowStatus> {
        let mut windows = self.windows.lock();
        let entry = windows.peek(client_id)?;
        if entry.is_expired(now) {
            windows.pop(client_id);
            return None;
        }

        Some(WindowStatus {
            count: entry.count,
            remaining: self.config.max_requests.saturating_sub(entry.count),
            reset_after_secs: ceil_secs(entry.window_reset_at.saturating_duration_since(now)),
        })
    }

    /// Drop every window whose reset instant has passed; returns how many
    pub fn sweep_expired(&self, now: Instant) -> usize {
        let mut windows = self.windows.lock();
        let expired: Vec<String> = windows
            .iter()
            .filter(|(_, window)| window.is_expired(now))
            .map(|(client_id, _)| client_id.clone())
            .collect();

        for client_id in &expired {
            windows.pop(client_id);
        }

        expired.len()
    }

    /// Start background cleanup task
    pub fn start_cleanup_task(self: Arc<Self>) -> tokio::task::JoinHandle<()> {
        let period = Duration::from_secs(self.config.cleanup_interval_secs.max(1));
        tokio::spawn(async move {
            let mut interval = tokio::time::interval(period);
            loop {
                interval.tick().await;
                let removed = self.sweep_expired(Instant::now());
                if removed > 0 {
                    debug!("Swept {} expired rate limit windows", removed);
                }
            }
        })
    }

    /// Number of client windows currently held
    pub fn tracked_clients(&self) -> usize {
        self.windows.lock().len()
    }

    /// Check if rate limiting is enabled
    pub fn is_enabled(&self) -> bool {
        self.config.enabled
    }

    /// Get the configured limit
    pub fn limit(&self) -> u32 {
        self.config.max_requests
    }
}

impl std::fmt::Debug for RateLimiter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RateLimiter")
            .field("enabled", &self.config.enabled)
            .field("max_requests", &self.config.max_requests)
            .field("window", &self.window)
            .finish()
    }
}

fn ceil_secs(duration: Duration) -> u64 {
    duration.as_millis().div_ceil(1000) as u64
}
