/*!
 * Process Probe Library
 * Host introspection, exit lifecycle, and byte splicing exposed as a library
 */

pub mod buffer;
pub mod core;
pub mod monitoring;
pub mod process;

// Re-exports
pub use crate::core::errors::{ProbeError, Result};
pub use crate::core::types::{ExitCode, Pid, Signal};
pub use buffer::{splice, splice_range, ByteSequence, SpliceError};
pub use monitoring::{init_tracing, span_operation, OperationSpan};
pub use process::{
    ExitRegistry, HostEnvironment, HostQueryError, LifecycleError, LifecyclePhase,
    LifecycleReporter, MemoryUsage, ProcessSnapshot, SnapshotCollector, SystemHost,
};
