//! Routes du formulaire et middleware de trace.

use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

use super::handlers;
use super::state::AppState;

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        // GET lit les champs dans la query, POST dans le corps
        .route("/calc", get(handlers::calc).post(handlers::calc))
        .fallback(handlers::index)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
