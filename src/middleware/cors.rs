//! CORS policy for browser clients (hero list / image pages hosted elsewhere).
//!
//! Policy:
//! - Development: any origin, WITHOUT credentials.
//! - Production: exact-match allowlist from `CORS_ALLOWED_ORIGINS`. Empty allowlist = no origin.
//! - Read-only API: only GET / HEAD / OPTIONS are advertised.
//! - `x-request-id` is exposed so a browser client can quote it in bug reports.

use axum::Router;
use axum::http::{HeaderName, HeaderValue, Method, header};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

use crate::config::Config;
use crate::middleware::http::REQUEST_ID_HEADER;

pub fn apply(router: Router, config: &Config) -> Router {
    let cors = if config.app_env.is_production() {
        let allowed: Vec<HeaderValue> = config
            .cors_allowed_origins
            .iter()
            .filter_map(|s| HeaderValue::from_str(s).ok())
            .collect();

        let allow_origin = AllowOrigin::predicate(move |origin: &HeaderValue, _req| {
            allowed.iter().any(|v| v == origin)
        });

        CorsLayer::new().allow_origin(allow_origin)
    } else {
        CorsLayer::new().allow_origin(Any)
    }
    .allow_methods([Method::GET, Method::HEAD, Method::OPTIONS])
    // Clients may send their own request id; it is propagated back unchanged.
    .allow_headers([header::ACCEPT, HeaderName::from_static(REQUEST_ID_HEADER)])
    .expose_headers([HeaderName::from_static(REQUEST_ID_HEADER)])
    .max_age(std::time::Duration::from_secs(60 * 10));

    router.layer(cors)
}
