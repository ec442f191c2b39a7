// Cross-origin configuration

use tower_http::cors::{Any, CorsLayer};

/// Create the permissive CORS layer
///
/// Every response gets `Access-Control-Allow-Origin: *`, and OPTIONS
/// preflight requests for any path are answered with the permissive
/// method/header set and an empty body.
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cors_layer_creation() {
        let _layer = cors_layer();
    }
}
