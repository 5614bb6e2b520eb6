// src/presentation/http/middleware/mod.rs
pub mod rate_limit;

pub use rate_limit::{RateLimiterConfigError, RateLimiterLayer, login_rate_limiter};
