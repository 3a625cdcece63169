/*!
 * Structured Tracing
 * Operation tracing for host queries and reports using the tracing crate
 *
 * Features:
 * - Automatic trace ID generation for correlating report lines
 * - JSON-formatted logs for structured parsing
 * - Slow-operation detection when spans close
 */

use crate::core::limits::SLOW_OPERATION_MS;
use std::time::Instant;
use tracing::{debug, info, span, warn, Level};
use tracing_subscriber::{
    fmt::format::FmtSpan, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter,
};
use uuid::Uuid;

/// Initialize structured tracing
///
/// Environment variables:
/// - RUST_LOG: Set log level (default: info)
/// - PROBE_TRACE_JSON: Enable JSON output (default: false)
pub fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    // Check if JSON output is requested
    let use_json = std::env::var("PROBE_TRACE_JSON")
        .map(|v| v == "1" || v == "true")
        .unwrap_or(false);

    let registry = tracing_subscriber::registry().with(env_filter);

    if use_json {
        // JSON output for production/parsing
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_target(true)
                    .with_current_span(true)
                    .with_span_events(FmtSpan::FULL),
            )
            .init();
        info!("Structured tracing initialized with JSON output");
    } else {
        // Human-readable output for development
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(true)
                    .with_span_events(FmtSpan::CLOSE)
                    .compact(),
            )
            .init();
        info!("Structured tracing initialized");
    }
}

/// Generate a unique trace ID for correlation
pub fn generate_trace_id() -> String {
    Uuid::new_v4().to_string()
}

/// Span for operation tracing with structured fields
pub struct OperationSpan {
    _span: tracing::Span,
    start: Instant,
    trace_id: String,
}

impl OperationSpan {
    pub fn new(operation: &str) -> Self {
        let trace_id = generate_trace_id();

        let span = span!(
            Level::DEBUG,
            "operation",
            trace_id = %trace_id,
            operation = operation,
            duration_us = tracing::field::Empty,
            duration_ms = tracing::field::Empty,
            result = tracing::field::Empty,
            error = tracing::field::Empty,
        );

        let _entered = span.enter();
        debug!(
            operation = operation,
            trace_id = %trace_id,
            "operation started"
        );
        drop(_entered);

        Self {
            _span: span,
            start: Instant::now(),
            trace_id,
        }
    }

    /// Get the trace ID for this operation
    pub fn trace_id(&self) -> &str {
        &self.trace_id
    }

    /// Record structured fields during operation execution
    pub fn record(&self, key: &str, value: &str) {
        self._span.record(key, value);
    }

    /// Record the operation result
    pub fn record_result(&self, success: bool) {
        self._span
            .record("result", if success { "success" } else { "error" });
    }

    /// Record an error
    pub fn record_error(&self, error: &str) {
        self._span.record("error", error);
        self._span.record("result", "error");
    }

    /// Enter the span context
    pub fn enter(&self) -> tracing::span::Entered<'_> {
        self._span.enter()
    }
}

impl Drop for OperationSpan {
    fn drop(&mut self) {
        let duration = self.start.elapsed();
        let _entered = self._span.enter();

        if duration.as_millis() > SLOW_OPERATION_MS {
            self._span.record("duration_ms", duration.as_millis());
            warn!(
                trace_id = %self.trace_id,
                duration_ms = duration.as_millis(),
                slow = true,
                "slow operation detected"
            );
        } else {
            self._span.record("duration_us", duration.as_micros());
            debug!(
                trace_id = %self.trace_id,
                duration_us = duration.as_micros(),
                "operation completed"
            );
        }
    }
}

/// Helper to create an operation span
#[inline]
pub fn span_operation(name: &str) -> OperationSpan {
    OperationSpan::new(name)
}
