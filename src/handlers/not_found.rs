use crate::error::ApiError;
use axum::extract::Path;

/// Catch-all handler - any path other than the root
///
/// The wildcard route captures the whole remaining path (multi-segment
/// included) as one URL-decoded string without the leading slash, and the
/// response names it verbatim.
pub async fn page_not_found(Path(page): Path<String>) -> ApiError {
    tracing::debug!("No route for page: {}", page);
    ApiError::PageNotFound(page)
}
