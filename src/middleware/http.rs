//! HTTP-level middleware (cross-cutting concerns).
//!
//! Responsibility:
//! - Request-Id generation + propagation (X-Request-Id)
//! - Access log: one `request` span per call, carrying the request id
//! - Global timeout (`REQUEST_TIMEOUT_SECONDS`) mapped to 408
//!
//! The API is read-only (GET only), so there is no request body limit here.

use std::time::Duration;

use axum::Router;
use axum::error_handling::HandleErrorLayer;
use axum::extract::Request;
use axum::http::{StatusCode, header::HeaderName};
use tower::timeout::TimeoutLayer;
use tower::{BoxError, ServiceBuilder};
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;
use tracing::Span;

use crate::config::Config;

pub const REQUEST_ID_HEADER: &str = "x-request-id";

// SetRequestIdLayer runs first, so the header is always present here.
fn request_span(req: &Request) -> Span {
    let request_id = req
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("-");

    tracing::info_span!(
        "request",
        method = %req.method(),
        uri = %req.uri(),
        request_id,
    )
}

pub fn apply(router: Router, config: &Config) -> Router {
    let request_id_header = HeaderName::from_static(REQUEST_ID_HEADER);

    let layers = ServiceBuilder::new()
        // Make the service error `Infallible` by converting errors into responses.
        .layer(HandleErrorLayer::new(|err: BoxError| async move {
            if err.is::<tower::timeout::error::Elapsed>() {
                tracing::warn!("request timed out");
                StatusCode::REQUEST_TIMEOUT
            } else {
                tracing::error!(error = %err, "unhandled middleware error");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }))
        .layer(SetRequestIdLayer::new(
            request_id_header.clone(),
            MakeRequestUuid,
        ))
        .layer(PropagateRequestIdLayer::new(request_id_header))
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.request_timeout_seconds,
        )))
        .layer(TraceLayer::new_for_http().make_span_with(request_span));

    router.layer(layers)
}

#[cfg(test)]
mod tests {
    use axum::{body::Body, routing::get};
    use tower::ServiceExt;

    use super::*;

    fn config_with_timeout(seconds: &str) -> Config {
        let seconds = seconds.to_string();
        Config::from_lookup(move |key| (key == "REQUEST_TIMEOUT_SECONDS").then(|| seconds.clone()))
            .unwrap()
    }

    fn slow_router() -> Router {
        Router::new()
            .route(
                "/slow",
                get(|| async {
                    tokio::time::sleep(Duration::from_secs(5)).await;
                    "late"
                }),
            )
            .route("/fast", get(|| async { "ok" }))
    }

    #[tokio::test]
    async fn slow_handler_is_cut_off_with_408() {
        let app = apply(slow_router(), &config_with_timeout("1"));

        let res = app
            .oneshot(Request::builder().uri("/slow").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(res.status(), StatusCode::REQUEST_TIMEOUT);
    }

    #[tokio::test]
    async fn client_request_id_is_echoed_back() {
        let app = apply(slow_router(), &config_with_timeout("1"));

        let res = app
            .oneshot(
                Request::builder()
                    .uri("/fast")
                    .header(REQUEST_ID_HEADER, "hero-42")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(res.status(), StatusCode::OK);
        assert_eq!(res.headers()[REQUEST_ID_HEADER], "hero-42");
    }
}
