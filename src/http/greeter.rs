//! Handlers for the visitor greeting and liveness probe.

use crate::visitor::{SeenCookie, Visitor};
use axum::http::HeaderMap;
use axum::http::header::{COOKIE, SET_COOKIE};
use axum::response::{IntoResponse, Response};
use tracing::debug;

/// Greets the visitor and refreshes the `seen` cookie.
pub async fn greet(headers: HeaderMap) -> Response {
    let visitor = Visitor::from_cookie_headers(
        headers
            .get_all(COOKIE)
            .iter()
            .filter_map(|value| value.to_str().ok()),
    );
    debug!(?visitor, "greeting visitor");
    (
        [(SET_COOKIE, SeenCookie::new().to_string())],
        visitor.greeting(),
    )
        .into_response()
}

/// Reports that the server is up.
pub async fn health() -> &'static str {
    "ok"
}
