pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::evaluation::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let body_limit = state.config.max_upload_bytes();

    Router::new()
        .route("/health", get(health::health_handler))
        // Evaluator page
        .route("/", get(handlers::handle_index))
        .route("/evaluate", post(handlers::handle_evaluate_page))
        // Evaluation API
        .route("/api/v1/evaluations", post(handlers::handle_evaluate_api))
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}
