//! Headers attached to every response.
//!
//! Applied at the Router level so handlers, the `/images` service and the
//! fallback all get the same set.

use axum::Router;
use axum::http::header::{self, HeaderValue};
use tower_http::set_header::SetResponseHeaderLayer;

pub const SERVER_NAME: &str = "boruto-api";

pub fn apply(router: Router) -> Router {
    router
        .layer(SetResponseHeaderLayer::if_not_present(
            header::SERVER,
            HeaderValue::from_static(SERVER_NAME),
        ))
        // Prevent MIME sniffing
        .layer(SetResponseHeaderLayer::if_not_present(
            header::X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static("nosniff"),
        ))
}
