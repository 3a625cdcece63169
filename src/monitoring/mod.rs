/*!
 * Observability
 * Structured tracing for probe operations
 */

mod tracer;

pub use tracer::{init_tracing, span_operation, OperationSpan};
