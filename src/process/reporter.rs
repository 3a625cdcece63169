/*!
 * Lifecycle Reporter
 * Labeled human-readable reporting for snapshots, byte sequences, and exit
 */

use super::lifecycle::ExitRegistry;
use super::snapshot::SnapshotCollector;
use super::types::{LifecycleResult, ProcessSnapshot};
use crate::buffer::ByteSequence;
use crate::core::types::ExitCode;
use log::debug;
use parking_lot::Mutex;
use std::io::{self, Write};
use std::sync::Arc;

/// Prints labeled report lines for snapshots, byte sequences, and exit
///
/// Owns its output stream: stdout by default, injectable for tests. All
/// reporting methods lock the stream, so interleaved reports from shared
/// reporters stay line-atomic.
pub struct LifecycleReporter {
    collector: SnapshotCollector,
    out: Mutex<Box<dyn Write + Send>>,
}

impl LifecycleReporter {
    /// Reporter over the given collector, writing to stdout
    #[must_use]
    pub fn new(collector: SnapshotCollector) -> Self {
        Self::with_output(collector, Box::new(io::stdout()))
    }

    /// Reporter writing to the given stream
    pub fn with_output(collector: SnapshotCollector, out: Box<dyn Write + Send>) -> Self {
        Self {
            collector,
            out: Mutex::new(out),
        }
    }

    /// Capture a fresh snapshot and print one labeled line per field
    ///
    /// Launch arguments get one indexed line each, preceded by the program
    /// name derived from the first of them. Returns the snapshot that was
    /// printed so callers can inspect what the host reported.
    pub fn report_snapshot(&self) -> io::Result<ProcessSnapshot> {
        let snapshot = self.collector.current();
        let mut out = self.out.lock();

        writeln!(out, "pid: {}", snapshot.pid)?;
        if let Some(name) = snapshot.program_name() {
            writeln!(out, "program: {}", name)?;
        }
        for (index, arg) in snapshot.args.iter().enumerate() {
            writeln!(out, "argv[{}]: {}", index, arg)?;
        }
        writeln!(out, "working dir: {}", snapshot.working_dir.display())?;
        writeln!(out, "platform: {}", snapshot.platform)?;
        writeln!(out, "arch: {}", snapshot.arch)?;
        writeln!(out, "version: {}", snapshot.version)?;
        if let Some(ref path) = snapshot.exec_path {
            writeln!(out, "exec path: {}", path.display())?;
        }
        writeln!(
            out,
            "memory: resident {} B, virtual {} B, shared {} B",
            snapshot.memory.resident_bytes,
            snapshot.memory.virtual_bytes,
            snapshot.memory.shared_bytes,
        )?;
        out.flush()?;

        debug!("Reported snapshot for pid {}", snapshot.pid);
        Ok(snapshot)
    }

    /// Print a byte sequence as decoded text under a label
    pub fn report_sequence(&self, label: &str, sequence: &ByteSequence) -> io::Result<()> {
        let mut out = self.out.lock();
        writeln!(out, "{}: {}", label, sequence.to_text())?;
        out.flush()
    }

    /// Print the exit-code line
    pub fn report_exit(&self, code: ExitCode) -> io::Result<()> {
        let mut out = self.out.lock();
        writeln!(out, "exit code: {} ({})", code, code.describe())?;
        out.flush()
    }

    /// Register the exit-code line as an exit hook on `registry`
    ///
    /// The hook prints the final exit code when the terminal phase runs.
    /// A write failure at that point is logged, not propagated; nothing
    /// can handle it during termination.
    pub fn install(self: &Arc<Self>, registry: &ExitRegistry) -> LifecycleResult<()> {
        let reporter = Arc::clone(self);
        registry.on_exit(move |code| {
            if let Err(e) = reporter.report_exit(code) {
                log::warn!("Exit report failed: {}", e);
            }
        })
    }
}
