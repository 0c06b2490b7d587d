//! Fixed-window rate limiter for signup attempts.

use std::time::{Duration, Instant};

use dashmap::DashMap;
use tracing::warn;

use codehive_core::config::AuthConfig;

/// Per-client state for the current window.
#[derive(Debug, Clone)]
struct Window {
    count: u32,
    started_at: Instant,
}

/// In-memory fixed-window rate limiter keyed by client address.
#[derive(Debug)]
pub struct SignupRateLimiter {
    /// Client key to current window state.
    windows: DashMap<String, Window>,
    /// Maximum requests allowed per window.
    max_requests: u32,
    /// Window length.
    window: Duration,
}

impl SignupRateLimiter {
    /// Creates a limiter from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            windows: DashMap::new(),
            max_requests: config.signup_max_requests,
            window: Duration::from_secs(config.signup_window_seconds),
        }
    }

    /// Records a request for the given key and returns whether it is
    /// allowed. The window resets once its full length has elapsed.
    pub fn check(&self, key: &str) -> bool {
        let now = Instant::now();
        let mut entry = self.windows.entry(key.to_string()).or_insert(Window {
            count: 0,
            started_at: now,
        });

        if now.duration_since(entry.started_at) >= self.window {
            entry.count = 0;
            entry.started_at = now;
        }

        entry.count += 1;
        if entry.count > self.max_requests {
            warn!(client = key, "Signup rate limit exceeded");
            false
        } else {
            true
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn limiter(max_requests: u32) -> SignupRateLimiter {
        SignupRateLimiter::new(&AuthConfig {
            jwt_secret: "test-secret".to_string(),
            token_ttl_minutes: 60,
            signup_max_requests: max_requests,
            signup_window_seconds: 900,
        })
    }

    #[test]
    fn allows_up_to_limit_then_rejects() {
        let limiter = limiter(3);
        assert!(limiter.check("1.2.3.4"));
        assert!(limiter.check("1.2.3.4"));
        assert!(limiter.check("1.2.3.4"));
        assert!(!limiter.check("1.2.3.4"));
    }

    #[test]
    fn keys_are_independent() {
        let limiter = limiter(1);
        assert!(limiter.check("1.2.3.4"));
        assert!(!limiter.check("1.2.3.4"));
        assert!(limiter.check("5.6.7.8"));
    }
}
