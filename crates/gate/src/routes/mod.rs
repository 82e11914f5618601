//! HTTP routes

pub mod health;

use axum::{middleware, routing::get, Router};
use tower_http::trace::TraceLayer;

use crate::{security::host_gate_middleware, state::AppState};

/// Create the router; every route sits behind the host gate
pub fn create_router(state: AppState) -> Router {
    let gate_state = state.gate_state();

    Router::new()
        .route("/health", get(health::health))
        .route("/health/live", get(health::liveness))
        .layer(middleware::from_fn_with_state(gate_state, host_gate_middleware))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
