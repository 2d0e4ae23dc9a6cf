//! # Per-Client Rate Limiting
//!
//! Fixed-window rate limiter keyed by the `X-Client-Id` header. State is
//! in-memory per process. Buckets whose window has expired are swept at
//! most once per window, so the map only holds clients seen recently.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

use axum::extract::Request;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use parking_lot::Mutex;

use crate::error::AppError;

/// Header carrying the rate limit key.
pub const CLIENT_ID_HEADER: &str = "x-client-id";

/// Rate limiter configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimitConfig {
    /// Maximum requests per window.
    pub max_requests: u64,
    /// Window duration in seconds.
    pub window_secs: u64,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            max_requests: 100,
            window_secs: 3600,
        }
    }
}

#[derive(Debug, Clone)]
struct BucketState {
    count: u64,
    window_start: Instant,
}

#[derive(Debug)]
struct Buckets {
    by_client: HashMap<String, BucketState>,
    last_sweep: Instant,
}

impl Buckets {
    /// Drop every bucket whose window ended before `now`.
    fn sweep(&mut self, now: Instant, window: Duration) {
        self.by_client
            .retain(|_, b| now.saturating_duration_since(b.window_start) < window);
        self.last_sweep = now;
    }
}

/// Shared rate limiter state.
#[derive(Debug, Clone)]
pub struct RateLimiter {
    config: RateLimitConfig,
    buckets: Arc<Mutex<Buckets>>,
}

impl RateLimiter {
    pub fn new(config: RateLimitConfig) -> Self {
        Self {
            config,
            buckets: Arc::new(Mutex::new(Buckets {
                by_client: HashMap::new(),
                last_sweep: Instant::now(),
            })),
        }
    }

    /// Number of clients currently holding a bucket.
    pub fn tracked_clients(&self) -> usize {
        self.buckets.lock().by_client.len()
    }

    /// Count a request from `key`; `false` when the window is exhausted.
    pub fn check(&self, key: &str) -> bool {
        self.check_at(key, Instant::now())
    }

    fn check_at(&self, key: &str, now: Instant) -> bool {
        let window = Duration::from_secs(self.config.window_secs);
        let mut buckets = self.buckets.lock();

        if now.saturating_duration_since(buckets.last_sweep) >= window {
            buckets.sweep(now, window);
        }

        let bucket = buckets.by_client.entry(key.to_string()).or_insert(BucketState {
            count: 0,
            window_start: now,
        });

        if now.saturating_duration_since(bucket.window_start) >= window {
            bucket.count = 0;
            bucket.window_start = now;
        }

        if bucket.count >= self.config.max_requests {
            false
        } else {
            bucket.count += 1;
            true
        }
    }
}

/// Middleware that enforces per-client rate limits.
///
/// Requests without an `X-Client-Id` header share the `"anonymous"` bucket.
pub async fn rate_limit_middleware(request: Request, next: Next) -> Response {
    let limiter = request.extensions().get::<RateLimiter>().cloned();

    if let Some(limiter) = limiter {
        let key = request
            .headers()
            .get(CLIENT_ID_HEADER)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("anonymous")
            .to_string();

        if !limiter.check(&key) {
            return AppError::RateLimited(format!("client {key}")).into_response();
        }
    }

    next.run(request).await
}

#[cfg(test)]
mod tests {
    use super::*;

    fn limiter(max_requests: u64, window_secs: u64) -> RateLimiter {
        RateLimiter::new(RateLimitConfig {
            max_requests,
            window_secs,
        })
    }

    #[test]
    fn allows_up_to_limit() {
        let l = limiter(2, 60);
        assert!(l.check("a"));
        assert!(l.check("a"));
        assert!(!l.check("a"));
    }

    #[test]
    fn keys_are_independent() {
        let l = limiter(1, 60);
        assert!(l.check("a"));
        assert!(l.check("b"));
        assert!(!l.check("a"));
    }

    #[test]
    fn window_resets() {
        let l = limiter(1, 10);
        let t0 = Instant::now();
        assert!(l.check_at("a", t0));
        assert!(!l.check_at("a", t0 + Duration::from_secs(5)));
        assert!(l.check_at("a", t0 + Duration::from_secs(10)));
    }

    #[test]
    fn expired_clients_are_evicted() {
        let l = limiter(5, 10);
        let t0 = Instant::now();
        for i in 0..2_000 {
            assert!(l.check_at(&format!("client-{i}"), t0));
        }
        assert_eq!(l.tracked_clients(), 2_000);

        assert!(l.check_at("late", t0 + Duration::from_secs(10)));
        assert_eq!(l.tracked_clients(), 1);
    }

    #[test]
    fn live_clients_survive_sweep() {
        let l = limiter(1, 10);
        let t0 = Instant::now();
        assert!(l.check_at("old", t0));
        assert!(l.check_at("recent", t0 + Duration::from_secs(8)));

        // Sweep at t0+12 drops "old" but keeps the exhausted "recent" bucket.
        assert!(l.check_at("other", t0 + Duration::from_secs(12)));
        assert_eq!(l.tracked_clients(), 2);
        assert!(!l.check_at("recent", t0 + Duration::from_secs(12)));
    }

    #[test]
    fn clones_share_buckets() {
        let l = limiter(1, 60);
        let other = l.clone();
        assert!(l.check("a"));
        assert!(!other.check("a"));
    }
}
