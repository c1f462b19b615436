pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::scoring::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Compatibility API
        .route("/api/v1/compatibility/score", post(handlers::handle_score))
        .route(
            "/api/v1/compatibility/score/batch",
            post(handlers::handle_score_batch),
        )
        .route(
            "/api/v1/profiles/:id/matches",
            get(handlers::handle_profile_matches),
        )
        .with_state(state)
}
