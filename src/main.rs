/*!
 * Process Probe - Main Entry Point
 *
 * Small demonstration binary that:
 * - Reports a fresh host-process snapshot
 * - Splices a byte run between two sequences
 * - Exits through the lifecycle registry
 */

use std::error::Error;
use std::sync::Arc;
use tracing::info;

use proc_probe::{
    init_tracing, splice, ByteSequence, ExitCode, ExitRegistry, LifecycleReporter,
    SnapshotCollector,
};

fn main() -> Result<(), Box<dyn Error>> {
    // Initialize structured tracing
    init_tracing();

    info!("Process probe starting...");
    info!("================================================");

    info!("Initializing exit registry...");
    let registry = ExitRegistry::new();

    info!("Initializing lifecycle reporter...");
    let reporter = Arc::new(LifecycleReporter::new(SnapshotCollector::system()));
    reporter.install(&registry)?;

    info!("Reporting host snapshot...");
    let snapshot = reporter.report_snapshot()?;
    info!(pid = snapshot.pid, "Snapshot reported");

    // Splice demonstration: copy a whole source run into the middle of
    // the destination
    let mut destination = ByteSequence::from_text("abcdefghijkl");
    let source = ByteSequence::from_text("RUNOOB");

    let copied = splice(&mut destination, &source, 2)?;
    info!(copied, "Splice complete");
    reporter.report_sequence("spliced", &destination)?;

    info!("Probe run complete");
    registry.exit(ExitCode::SUCCESS);
}
