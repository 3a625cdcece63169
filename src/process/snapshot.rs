/*!
 * Snapshot Collector
 * Builds point-in-time process snapshots with per-field degradation
 */

use super::host::{HostEnvironment, SystemHost};
use super::types::{HostResult, MemoryUsage, ProcessSnapshot};
use crate::monitoring::span_operation;
use log::{debug, warn};
use std::cell::Cell;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::SystemTime;

/// Identifier reported when the host cannot name its platform or arch
const UNKNOWN_IDENTIFIER: &str = "unknown";

/// Collects process snapshots from a host environment
///
/// Every call to `current` re-reads the host; nothing is cached between
/// calls. A field the host fails to answer degrades to its default and
/// logs a warning, so the snapshot itself never fails.
#[derive(Clone)]
pub struct SnapshotCollector {
    host: Arc<dyn HostEnvironment>,
}

impl SnapshotCollector {
    /// Create a collector over the given host
    pub fn new(host: Arc<dyn HostEnvironment>) -> Self {
        Self { host }
    }

    /// Collector over the real process
    #[must_use]
    pub fn system() -> Self {
        Self::new(Arc::new(SystemHost::new()))
    }

    /// Build a fresh snapshot of the current process
    ///
    /// Degraded defaults: pid 0, empty args, empty working dir, "unknown"
    /// platform, arch, and version, no exec path, zeroed memory counters.
    pub fn current(&self) -> ProcessSnapshot {
        let span = span_operation("snapshot_collect");
        let degraded = Cell::new(0usize);

        let snapshot = ProcessSnapshot {
            pid: read_or("pid", self.host.pid(), 0, &degraded),
            args: read_or("args", self.host.args(), Vec::new(), &degraded),
            working_dir: read_or(
                "working_dir",
                self.host.working_dir(),
                PathBuf::new(),
                &degraded,
            ),
            platform: read_or(
                "platform",
                self.host.platform(),
                UNKNOWN_IDENTIFIER.to_string(),
                &degraded,
            ),
            arch: read_or(
                "arch",
                self.host.arch(),
                UNKNOWN_IDENTIFIER.to_string(),
                &degraded,
            ),
            version: read_or(
                "version",
                self.host.version(),
                UNKNOWN_IDENTIFIER.to_string(),
                &degraded,
            ),
            exec_path: read_or("exec_path", self.host.exec_path().map(Some), None, &degraded),
            memory: read_or(
                "memory",
                self.host.memory_usage(),
                MemoryUsage::zeroed(),
                &degraded,
            ),
            captured_at: SystemTime::now(),
        };

        if degraded.get() == 0 {
            span.record_result(true);
        } else {
            span.record_error(&format!("{} snapshot fields degraded", degraded.get()));
        }
        debug!(
            "Collected snapshot: pid {} on {}/{}",
            snapshot.pid, snapshot.platform, snapshot.arch
        );

        snapshot
    }
}

/// Unwrap a host read, degrading to `default` with a warning on failure
fn read_or<T>(
    field: &'static str,
    result: HostResult<T>,
    default: T,
    degraded: &Cell<usize>,
) -> T {
    match result {
        Ok(value) => value,
        Err(e) => {
            warn!("Snapshot field {} degraded to default: {}", field, e);
            degraded.set(degraded.get() + 1);
            default
        }
    }
}
