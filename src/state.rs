use crate::models::Catalog;
use std::sync::Arc;

/// Shared application state
///
/// The catalog is built once at startup and passed in at construction;
/// request handling only ever reads it.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
}
