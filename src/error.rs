use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

/// Custom error type for route handlers
///
/// An unmatched path is the only user-visible error class in this service,
/// surfaced as a defined 404 response rather than a fault.
#[derive(Debug)]
pub enum ApiError {
    /// Request path did not match any registered route
    PageNotFound(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::PageNotFound(page) => (
                StatusCode::NOT_FOUND,
                format!("The page named {} does not exist.", page),
            )
                .into_response(),
        }
    }
}
