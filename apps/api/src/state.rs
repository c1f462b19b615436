use std::sync::Arc;

use sqlx::PgPool;

use crate::scoring::MatchScorer;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    /// Pluggable compatibility scorer. Default: `WeightedScorer`.
    pub scorer: Arc<dyn MatchScorer>,
}
