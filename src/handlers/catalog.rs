use crate::models::Catalog;
use crate::state::AppState;
use axum::{extract::State, Json};

/// GET / handler - Product catalog
///
/// Returns the full catalog as a JSON array of product names, in catalog
/// order. Query strings and request headers do not affect the response.
pub async fn list_products(State(state): State<AppState>) -> Json<Catalog> {
    tracing::debug!("Serving product catalog");
    Json((*state.catalog).clone())
}
