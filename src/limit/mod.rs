//! Fixed-window rate limiting for the `/api/` routes: N requests per window
//! per client, keyed by peer IP when the server exposes one.

use std::collections::HashMap;
use std::net::SocketAddr;
use std::time::{Duration, Instant};

use axum::extract::{ConnectInfo, Request, State};
use axum::middleware::Next;
use axum::response::Response;
use tracing::warn;

use crate::error::AppError;
use crate::AppState;

#[derive(Debug)]
struct Window {
    started: Instant,
    count: u32,
}

#[derive(Debug)]
pub struct RateLimiter {
    max: u32,
    window: Duration,
    windows: HashMap<String, Window>,
}

impl RateLimiter {
    pub fn new(max: u32, window: Duration) -> Self {
        Self {
            max,
            window,
            windows: HashMap::new(),
        }
    }

    /// Counts one request against `key`; returns false once the window is full.
    pub fn check(&mut self, key: &str, now: Instant) -> bool {
        let window = self
            .windows
            .entry(key.to_string())
            .or_insert_with(|| Window { started: now, count: 0 });

        if now.duration_since(window.started) >= self.window {
            window.started = now;
            window.count = 0;
        }

        window.count += 1;
        window.count <= self.max
    }

    /// Drops windows old enough to have expired. Called opportunistically so
    /// the map does not grow without bound under many distinct clients.
    pub fn evict_expired(&mut self, now: Instant) {
        let window = self.window;
        self.windows
            .retain(|_, w| now.duration_since(w.started) < window);
    }
}

/// Axum middleware enforcing the limit. Requests that arrive without peer
/// info (e.g. in-process test requests) share a single bucket.
pub async fn enforce(
    State(state): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let key = req
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|info| info.0.ip().to_string())
        .unwrap_or_else(|| "local".to_string());

    let now = Instant::now();
    let mut limiter = state.limiter.write().await;
    limiter.evict_expired(now);
    if !limiter.check(&key, now) {
        drop(limiter);
        warn!(client = %key, "rate limit exceeded");
        return Err(AppError::RateLimited);
    }
    drop(limiter);

    Ok(next.run(req).await)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn allows_up_to_max_within_window() {
        let mut limiter = RateLimiter::new(3, Duration::from_secs(60));
        let now = Instant::now();
        assert!(limiter.check("a", now));
        assert!(limiter.check("a", now));
        assert!(limiter.check("a", now));
        assert!(!limiter.check("a", now), "fourth request must be rejected");
    }

    #[test]
    fn keys_are_independent() {
        let mut limiter = RateLimiter::new(1, Duration::from_secs(60));
        let now = Instant::now();
        assert!(limiter.check("a", now));
        assert!(!limiter.check("a", now));
        assert!(limiter.check("b", now), "a full window for one client must not affect another");
    }

    #[test]
    fn window_resets_after_expiry() {
        let mut limiter = RateLimiter::new(1, Duration::from_secs(60));
        let start = Instant::now();
        assert!(limiter.check("a", start));
        assert!(!limiter.check("a", start));
        let later = start + Duration::from_secs(61);
        assert!(limiter.check("a", later), "a new window must start after expiry");
    }

    #[test]
    fn evict_drops_only_expired_windows() {
        let mut limiter = RateLimiter::new(5, Duration::from_secs(60));
        let start = Instant::now();
        limiter.check("old", start);
        limiter.check("fresh", start + Duration::from_secs(59));
        limiter.evict_expired(start + Duration::from_secs(61));
        assert!(!limiter.windows.contains_key("old"));
        assert!(limiter.windows.contains_key("fresh"));
    }
}
