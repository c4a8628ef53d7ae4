//! Deezer API rate limiter.

use std::time::{Duration, Instant};

/// Default minimum interval between requests (20 req/s).
const DEFAULT_MIN_INTERVAL: Duration = Duration::from_millis(50);

/// Single-tier rate limiter for the catalog API.
///
/// The public API tolerates roughly 50 requests per 5 seconds; this
/// limiter keeps a minimum interval between consecutive requests so the
/// aggregate outbound rate stays below that ceiling. A token is only
/// what the next caller can consume now; unused intervals are not
/// banked into bursts.
#[derive(Debug)]
#[allow(clippy::module_name_repetitions)]
pub(crate) struct DeezerRateLimiter {
    /// Minimum interval between requests.
    min_interval: Duration,
    /// Last request timestamp.
    last_request: Option<Instant>,
}

impl DeezerRateLimiter {
    /// Creates a new rate limiter with the given minimum interval.
    pub(crate) const fn new(min_interval: Duration) -> Self {
        Self {
            min_interval,
            last_request: None,
        }
    }

    /// Creates a new rate limiter with the default interval (50ms).
    pub(crate) const fn default_interval() -> Self {
        Self::new(DEFAULT_MIN_INTERVAL)
    }

    /// Waits until the next request is allowed.
    ///
    /// Never fails; callers are delayed until the interval since the
    /// previous admission has elapsed, then admitted.
    pub(crate) async fn wait(&mut self) {
        let now = Instant::now();

        if let Some(last) = self.last_request {
            let elapsed = now.duration_since(last);
            if elapsed < self.min_interval {
                tokio::time::sleep(self.min_interval.saturating_sub(elapsed)).await;
            }
        }

        self.last_request = Some(Instant::now());
    }
}
