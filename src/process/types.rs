/*!
 * Process Types
 * Common types for host introspection and exit lifecycle
 */

use crate::core::serde::{
    is_none, is_zero_usize, optional_pathbuf_string, pathbuf_string, system_time_micros,
};
use crate::core::types::Pid;
use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::SystemTime;
use thiserror::Error;

/// Host query result
pub type HostResult<T> = Result<T, HostQueryError>;

/// Lifecycle operation result
pub type LifecycleResult<T> = Result<T, LifecycleError>;

/// Host introspection errors with serialization support
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Diagnostic)]
#[serde(tag = "error_type", content = "details", rename_all = "snake_case")]
pub enum HostQueryError {
    #[error("Host query failed for {field}: {reason}")]
    #[diagnostic(
        code(probe::host::query_failed),
        help("The host refused or failed the query. The snapshot falls back to a default for this field.")
    )]
    QueryFailed { field: String, reason: String },

    #[error("Host does not expose {field} on this platform")]
    #[diagnostic(
        code(probe::host::unsupported),
        help("This field has no source on the current platform. The snapshot reports its default.")
    )]
    Unsupported { field: String },

    #[error("Malformed host data for {field}: {reason}")]
    #[diagnostic(
        code(probe::host::malformed),
        help("The host returned data the probe could not parse. Check the platform's introspection files.")
    )]
    Malformed { field: String, reason: String },
}

impl HostQueryError {
    /// Query failure for a named snapshot field
    pub fn query_failed(field: &str, reason: impl Into<String>) -> Self {
        Self::QueryFailed {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Field with no source on the current platform
    pub fn unsupported(field: &str) -> Self {
        Self::Unsupported {
            field: field.into(),
        }
    }

    /// Host data that failed to parse
    pub fn malformed(field: &str, reason: impl Into<String>) -> Self {
        Self::Malformed {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

/// Exit lifecycle errors with serialization support
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Diagnostic)]
#[serde(tag = "error_type", content = "details", rename_all = "snake_case")]
pub enum LifecycleError {
    #[error("Process is in terminal phase; the hook was rejected and will never run")]
    #[diagnostic(
        code(probe::lifecycle::terminal_phase),
        help("Exit hooks registered during or after termination never execute. Register before exiting.")
    )]
    TerminalPhase,

    #[error("Terminal phase already entered")]
    #[diagnostic(
        code(probe::lifecycle::already_terminating),
        help("The Running to Terminating transition fires exactly once per process.")
    )]
    AlreadyTerminating,

    #[error("Exit hook limit exceeded: current {current}, limit {limit}")]
    #[diagnostic(
        code(probe::lifecycle::hook_limit),
        help("The registry caps exit hooks. A process hitting the cap is leaking registrations.")
    )]
    HookLimitExceeded { current: usize, limit: usize },
}

/// Process lifecycle phase
///
/// The transition Running -> Terminating is irreversible and fires exactly
/// once. There is no phase after Terminating; the process ceases instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LifecyclePhase {
    /// Process is executing normally; hooks may be registered
    Running,
    /// Exit has begun; hooks are draining and registration is rejected
    Terminating,
}

impl LifecyclePhase {
    #[inline]
    #[must_use]
    pub const fn is_running(self) -> bool {
        matches!(self, Self::Running)
    }

    #[inline]
    #[must_use]
    pub const fn is_terminating(self) -> bool {
        matches!(self, Self::Terminating)
    }
}

/// Memory counters for the current process
///
/// All counters are best-effort. A platform that exposes no memory
/// accounting reports the zeroed default rather than failing the snapshot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct MemoryUsage {
    /// Resident set size in bytes
    #[serde(default, skip_serializing_if = "is_zero_usize")]
    pub resident_bytes: usize,
    /// Total virtual address space in bytes
    #[serde(default, skip_serializing_if = "is_zero_usize")]
    pub virtual_bytes: usize,
    /// Shared pages in bytes
    #[serde(default, skip_serializing_if = "is_zero_usize")]
    pub shared_bytes: usize,
}

impl MemoryUsage {
    /// Zeroed counters, used when the host exposes no memory accounting
    #[inline]
    #[must_use]
    pub const fn zeroed() -> Self {
        Self {
            resident_bytes: 0,
            virtual_bytes: 0,
            shared_bytes: 0,
        }
    }

    /// True when every counter is zero (degraded or unsupported host)
    #[inline]
    #[must_use]
    pub const fn is_zeroed(&self) -> bool {
        self.resident_bytes == 0 && self.virtual_bytes == 0 && self.shared_bytes == 0
    }
}

/// Point-in-time view of the current process
///
/// Built fresh on every query; no field is cached between snapshots.
/// Fields the host failed to answer hold their defaults instead of
/// aborting the whole snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ProcessSnapshot {
    /// OS process ID
    pub pid: Pid,
    /// Launch arguments, program path first
    #[serde(skip_serializing_if = "crate::core::serde::is_empty_vec", default)]
    pub args: Vec<String>,
    /// Current working directory at capture time
    #[serde(with = "pathbuf_string")]
    pub working_dir: PathBuf,
    /// Host operating system identifier (e.g. "linux", "macos")
    pub platform: String,
    /// Host CPU architecture (e.g. "x86_64", "aarch64")
    pub arch: String,
    /// Version of the probe runtime answering the queries
    pub version: String,
    /// Absolute path of the running executable, when the host exposes it
    #[serde(with = "optional_pathbuf_string", skip_serializing_if = "is_none", default)]
    pub exec_path: Option<PathBuf>,
    /// Memory counters at capture time
    pub memory: MemoryUsage,
    /// Capture timestamp
    #[serde(with = "system_time_micros")]
    pub captured_at: SystemTime,
}

impl ProcessSnapshot {
    /// Program name: final component of the first launch argument
    #[must_use]
    pub fn program_name(&self) -> Option<&str> {
        self.args
            .first()
            .map(|arg| arg.rsplit(['/', '\\']).next().unwrap_or(arg))
    }
}
