//! Request-outcome logging middleware
//!
//! Logs one timed JSON line per request to the normal sink, named
//! `request_finished` or `request_error` by status-code threshold.

use crate::core::Record;
use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;

/// Event name for requests that finished below 400.
pub const REQUEST_FINISHED: &str = "request_finished";

/// Event name for requests that finished at 400 or above.
pub const REQUEST_ERROR: &str = "request_error";

/// Logs each request's outcome with status code, path, query string, and
/// elapsed milliseconds.
///
/// Both records are started at request entry so the logged duration covers
/// the whole handler run; only the one matching the outcome ever writes.
/// The response passes through unchanged, and classification never routes
/// to the error sink: an errored request is still one line on the normal
/// sink.
///
/// # Examples
///
/// ```
/// use axum::{middleware, routing::get, Router};
/// use json_event_log::middleware::request_logging;
///
/// let app: Router = Router::new()
///     .route("/health", get(|| async {}))
///     .layer(middleware::from_fn(request_logging));
/// ```
pub async fn request_logging(request: Request, next: Next) -> Response {
    let finished = Record::new(REQUEST_FINISHED);
    let errored = Record::new(REQUEST_ERROR);

    let path = request.uri().path().to_string();
    let query = request.uri().query().unwrap_or("").to_string();

    let response = next.run(request).await;

    // A handler that never sets a status yields the implicit 200 here.
    let status = response.status().as_u16();
    let desc = format!("code: {status}, path: {path}, params: {query}");
    if status >= 400 {
        errored.log(&desc);
    } else {
        finished.log(&desc);
    }

    response
}
