// src/presentation/http/middleware/rate_limit.rs
use ::governor::middleware::NoOpMiddleware;
use axum::body::Body;
use std::sync::OnceLock;
use tower_governor::{
    GovernorLayer, governor::GovernorConfigBuilder, key_extractor::SmartIpKeyExtractor,
};

pub type MutationRateLimit = GovernorLayer<SmartIpKeyExtractor, NoOpMiddleware, Body>;

const REPLENISH_PER_SECOND: u64 = 2;
const BURST_SIZE: u32 = 10;

/// Per client IP budget shared by every route that writes content or files.
/// `None` when the limiter cannot be configured.
pub fn mutation_rate_limit() -> Option<MutationRateLimit> {
    static RATE_LIMITER: OnceLock<Option<MutationRateLimit>> = OnceLock::new();

    RATE_LIMITER
        .get_or_init(|| {
            let mut builder = GovernorConfigBuilder::default();
            builder.per_second(REPLENISH_PER_SECOND);
            builder.burst_size(BURST_SIZE);
            let config = builder.key_extractor(SmartIpKeyExtractor).finish()?;

            Some(GovernorLayer::new(config))
        })
        .clone()
}
