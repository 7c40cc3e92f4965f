use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::{
    handlers::{health::livez, params::execute},
    state::AppState,
};

/// Path the orchestrator calls for parameter generation.
pub const GETPARAMS_PATH: &str = "/api/v1/getparams.execute";

/// Create the application router with all routes and middleware.
pub fn create_app(state: AppState) -> Router {
    Router::new()
        .route(GETPARAMS_PATH, post(execute))
        .route("/livez", get(livez))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
