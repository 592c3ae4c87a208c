// ABOUTME: Request tracing middleware for correlation and structured logging
// ABOUTME: Assigns x-request-id, echoes it on responses and opens one span per HTTP request

use crate::constants::headers::REQUEST_ID;
use axum::Router;
use http::header::HeaderName;
use http::Request;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::{DefaultOnResponse, MakeSpan, TraceLayer};
use tracing::field::Empty;
use tracing::{info_span, Level, Span};
use uuid::Uuid;

/// Builds the `http_request` span for each request
#[derive(Debug, Clone, Copy, Default)]
pub struct RequestSpan;

impl<B> MakeSpan<B> for RequestSpan {
    fn make_span(&mut self, request: &Request<B>) -> Span {
        let request_id = request
            .headers()
            .get(REQUEST_ID)
            .and_then(|value| value.to_str().ok())
            .unwrap_or("unknown");

        info_span!(
            "http_request",
            method = %request.method(),
            path = %request.uri().path(),
            request_id = %request_id,
            user_id = Empty,
        )
    }
}

/// Record the authenticated user on the current request span
pub fn record_user_in_span(user_id: &Uuid) {
    Span::current().record("user_id", user_id.to_string());
}

/// Wrap `router` with request-id assignment, propagation and request spans
///
/// A client-supplied `x-request-id` is kept; otherwise a UUID is generated.
#[must_use]
pub fn apply_request_tracing<S>(router: Router<S>) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    let header = HeaderName::from_static(REQUEST_ID);
    router
        .layer(PropagateRequestIdLayer::new(header.clone()))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(RequestSpan)
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(SetRequestIdLayer::new(header, MakeRequestUuid))
}
