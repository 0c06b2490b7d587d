//! Authentication primitives for CodeHive.
//!
//! Covers Argon2id password hashing, JWT access token issuance and
//! validation, and a fixed-window signup rate limiter.

pub mod jwt;
pub mod password;
pub mod rate_limit;

pub use jwt::{Claims, JwtDecoder, JwtEncoder};
pub use password::PasswordHasher;
pub use rate_limit::SignupRateLimiter;
