//! HTTP request/response tracing middleware.

use tower_http::LatencyUnit;
use tower_http::classify::{ServerErrorsAsFailures, SharedClassifier};
use tower_http::trace::{
    DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer,
};
use tracing::Level;

/// Trace layer type produced by [`layer`].
pub type HttpTraceLayer = TraceLayer<SharedClassifier<ServerErrorsAsFailures>>;

/// Creates a tracing middleware for HTTP requests.
///
/// Every request gets an `INFO` span with method, URI and HTTP version.
/// The start of a request is logged at `DEBUG`, the response (status and
/// latency in milliseconds) at `INFO`, and 5xx failures at `ERROR`.
///
/// # Example Logs
///
/// ```text
/// INFO request{method=POST uri=/shorten version=HTTP/1.1}: finished processing request latency=0 ms status=200
/// INFO request{method=GET uri=/aZ3k9Qx version=HTTP/1.1}: finished processing request latency=0 ms status=302
/// ```
pub fn layer() -> HttpTraceLayer {
    TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_request(DefaultOnRequest::new().level(Level::DEBUG))
        .on_response(
            DefaultOnResponse::new()
                .level(Level::INFO)
                .latency_unit(LatencyUnit::Millis),
        )
        .on_failure(
            DefaultOnFailure::new()
                .level(Level::ERROR)
                .latency_unit(LatencyUnit::Millis),
        )
}
