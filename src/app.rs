use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

use crate::cors;
use crate::handlers;
use crate::routes;
use crate::state::AppState;

/// Assemble the complete service router
///
/// Single construction point, shared by `main` and the tests.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(routes::ROOT, get(handlers::list_products))
        .route(routes::PAGE, get(handlers::page_not_found))
        .layer(cors::cors_layer())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
