/*!
 * Process Module
 * Host introspection, snapshots, and exit lifecycle
 */

pub mod host;
pub mod lifecycle;
pub mod reporter;
pub mod snapshot;
pub mod types;

// Re-export for convenience
pub use host::{HostEnvironment, SystemHost};
pub use lifecycle::ExitRegistry;
pub use reporter::LifecycleReporter;
pub use snapshot::SnapshotCollector;
pub use types::{
    HostQueryError, HostResult, LifecycleError, LifecyclePhase, LifecycleResult, MemoryUsage,
    ProcessSnapshot,
};
