// src/presentation/http/middleware/rate_limit.rs
use ::governor::{clock::QuantaInstant, middleware::NoOpMiddleware};
use std::sync::Arc;
use thiserror::Error;
use tower_governor::{
    GovernorLayer, governor::GovernorConfigBuilder, key_extractor::SmartIpKeyExtractor,
};

/// Keyed by client IP, read from forwarding headers first and the peer
/// address last. The peer address needs `ConnectInfo<SocketAddr>`.
pub type RateLimiterLayer =
    GovernorLayer<SmartIpKeyExtractor, NoOpMiddleware<QuantaInstant>, axum::body::Body>;

#[derive(Debug, Error)]
#[error("invalid rate limiter configuration: replenish every {period_secs}s, burst {burst}")]
pub struct RateLimiterConfigError {
    pub period_secs: u64,
    pub burst: u32,
}

const LOGIN_PERIOD_SECS: u64 = 6;
const LOGIN_BURST: u32 = 5;

/// Login limiter: one attempt replenished every 6 seconds, bursts of 5.
pub fn login_rate_limiter() -> Result<RateLimiterLayer, RateLimiterConfigError> {
    rate_limiter(LOGIN_PERIOD_SECS, LOGIN_BURST)
}

fn rate_limiter(period_secs: u64, burst: u32) -> Result<RateLimiterLayer, RateLimiterConfigError> {
    let config = GovernorConfigBuilder::default()
        .key_extractor(SmartIpKeyExtractor)
        .per_second(period_secs)
        .burst_size(burst)
        .finish()
        .ok_or(RateLimiterConfigError { period_secs, burst })?;
    Ok(GovernorLayer::new(Arc::new(config)))
}
