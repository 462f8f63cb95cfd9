pub mod api;

use std::time::Duration;

use axum::http::{HeaderValue, Request, StatusCode, header};
use tower::ServiceBuilder;
use tower_http::compression::CompressionLayer;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::{DefaultOnResponse, MakeSpan, TraceLayer};
use tracing::{Level, Span};

use crate::application::state::AppState;

/// 1 MB request body limit. The API takes no request bodies.
const BODY_LIMIT_BYTES: usize = 1024 * 1024;

/// Upper bound on the time any single request may take.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

pub fn app_router(state: AppState) -> axum::Router {
    let index = state.static_dir.join("index.html");
    // Unknown paths get index.html so client-side routes resolve.
    let frontend = ServeDir::new(&state.static_dir).fallback(ServeFile::new(index));

    axum::Router::new()
        .nest(
            "/api",
            api::router().layer(SetResponseHeaderLayer::overriding(
                header::CONTENT_TYPE,
                HeaderValue::from_static("application/json; charset=utf-8"),
            )),
        )
        .fallback_service(frontend)
        .layer(timeout_layer(REQUEST_TIMEOUT))
        .layer(
            ServiceBuilder::new()
                .layer(
                    TraceLayer::new_for_http()
                        .make_span_with(SegpicMakeSpan)
                        .on_response(DefaultOnResponse::new().level(Level::INFO)),
                )
                .layer(RequestBodyLimitLayer::new(BODY_LIMIT_BYTES))
                .layer(SetResponseHeaderLayer::overriding(
                    header::X_CONTENT_TYPE_OPTIONS,
                    HeaderValue::from_static("nosniff"),
                ))
                .layer(SetResponseHeaderLayer::overriding(
                    header::X_FRAME_OPTIONS,
                    HeaderValue::from_static("DENY"),
                ))
                .layer(SetResponseHeaderLayer::overriding(
                    header::REFERRER_POLICY,
                    HeaderValue::from_static("strict-origin-when-cross-origin"),
                ))
                .layer(CompressionLayer::new().gzip(true)),
        )
        .with_state(state)
}

/// Requests running past `timeout` are answered with `408 Request Timeout`.
fn timeout_layer(timeout: Duration) -> TimeoutLayer {
    TimeoutLayer::with_status_code(StatusCode::REQUEST_TIMEOUT, timeout)
}

#[derive(Clone)]
struct SegpicMakeSpan;

impl<B> MakeSpan<B> for SegpicMakeSpan {
    fn make_span(&mut self, request: &Request<B>) -> Span {
        tracing::info_span!(
            "request",
            method = %request.method(),
            uri = %request.uri(),
            version = ?request.version(),
        )
    }
}
