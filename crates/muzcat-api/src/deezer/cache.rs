//! In-memory response cache keyed by canonical request identity.

use std::sync::Mutex;
use std::time::{Duration, Instant};

use dashmap::DashMap;
use url::form_urlencoded;

/// Default time-to-live for cached response bodies.
pub(crate) const DEFAULT_TTL: Duration = Duration::from_secs(300);

/// Builds the canonical cache key for a request.
///
/// Parameter names are sorted before percent-encoding, so the same
/// parameter set produces the same key regardless of insertion order.
pub(crate) fn request_key(path: &str, params: &[(&str, String)]) -> String {
    let mut sorted: Vec<&(&str, String)> = params.iter().collect();
    sorted.sort_by(|a, b| a.0.cmp(b.0));

    let mut encoded = form_urlencoded::Serializer::new(String::new());
    for (name, value) in sorted {
        encoded.append_pair(name, value);
    }
    format!("{path}?{}", encoded.finish())
}

/// A single cached response body.
#[derive(Debug)]
struct CacheEntry {
    /// Raw response bytes as received from the server.
    body: Vec<u8>,
    /// Creation time; the entry expires `ttl` after this.
    stored_at: Instant,
}

/// Thread-safe response cache with per-entry TTL expiration.
///
/// Stores raw bytes only; typed decoding stays at the client boundary.
/// An expired entry behaves as a miss on read even before the
/// housekeeping sweep reclaims it; the sweep only bounds memory.
#[derive(Debug)]
pub struct ResponseCache {
    entries: DashMap<String, CacheEntry>,
    ttl: Duration,
    sweep_interval: Duration,
    last_sweep: Mutex<Instant>,
}

impl ResponseCache {
    /// Creates a cache with the given TTL and a sweep interval of twice
    /// the TTL.
    #[must_use]
    pub fn new(ttl: Duration) -> Self {
        Self::with_sweep_interval(ttl, ttl.saturating_mul(2))
    }

    /// Creates a cache with explicit TTL and sweep interval.
    #[must_use]
    pub fn with_sweep_interval(ttl: Duration, sweep_interval: Duration) -> Self {
        Self {
            entries: DashMap::new(),
            ttl,
            sweep_interval,
            last_sweep: Mutex::new(Instant::now()),
        }
    }

    /// Returns the stored bytes for `key`, or `None` if no live entry
    /// exists. Expired entries are removed on the way out.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<Vec<u8>> {
        if let Some(entry) = self.entries.get(key) {
            if entry.stored_at.elapsed() <= self.ttl {
                return Some(entry.body.clone());
            }
            drop(entry);
            self.entries.remove(key);
        }
        None
    }

    /// Stores or overwrites the entry for `key` with a fresh creation
    /// time.
    pub fn set(&self, key: &str, body: Vec<u8>) {
        self.entries.insert(
            String::from(key),
            CacheEntry {
                body,
                stored_at: Instant::now(),
            },
        );
        self.maybe_sweep();
    }

    /// Removes the entry for `key`, if any.
    pub fn delete(&self, key: &str) {
        self.entries.remove(key);
    }

    /// Removes every entry.
    pub fn flush(&self) {
        self.entries.clear();
    }

    /// Number of entries currently held, including not-yet-swept
    /// expired ones.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the cache holds no entries at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drops expired entries if a sweep interval has elapsed since the
    /// last sweep. Called opportunistically from `set`.
    fn maybe_sweep(&self) {
        let due = {
            let Ok(mut last_sweep) = self.last_sweep.lock() else {
                return;
            };
            if last_sweep.elapsed() < self.sweep_interval {
                false
            } else {
                *last_sweep = Instant::now();
                true
            }
        };

        if due {
            self.entries.retain(|_, entry| entry.stored_at.elapsed() <= self.ttl);
        }
    }
}
