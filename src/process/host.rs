/*!
 * Host Environment
 * Read-only introspection surface over the running process
 */

use super::types::{HostQueryError, HostResult, MemoryUsage};
use crate::core::types::Pid;
use std::path::PathBuf;

/// Read-only introspection surface of the host process
///
/// Every read queries the host at call time. Implementations must not
/// cache: two successive reads observe two host states.
pub trait HostEnvironment: Send + Sync {
    /// OS process ID
    fn pid(&self) -> HostResult<Pid>;

    /// Launch arguments, program path first
    fn args(&self) -> HostResult<Vec<String>>;

    /// Current working directory
    fn working_dir(&self) -> HostResult<PathBuf>;

    /// Absolute path of the running executable
    fn exec_path(&self) -> HostResult<PathBuf>;

    /// Operating system identifier
    fn platform(&self) -> HostResult<String>;

    /// CPU architecture identifier
    fn arch(&self) -> HostResult<String>;

    /// Version of the probe runtime
    fn version(&self) -> HostResult<String>;

    /// Memory counters for the process
    fn memory_usage(&self) -> HostResult<MemoryUsage>;
}

/// Host environment backed by the real process
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemHost;

impl SystemHost {
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl HostEnvironment for SystemHost {
    fn pid(&self) -> HostResult<Pid> {
        Ok(std::process::id())
    }

    fn args(&self) -> HostResult<Vec<String>> {
        // Lossy conversion keeps the snapshot usable when an argument is
        // not valid UTF-8
        Ok(std::env::args_os()
            .map(|arg| arg.to_string_lossy().into_owned())
            .collect())
    }

    fn working_dir(&self) -> HostResult<PathBuf> {
        std::env::current_dir()
            .map_err(|e| HostQueryError::query_failed("working_dir", e.to_string()))
    }

    fn exec_path(&self) -> HostResult<PathBuf> {
        std::env::current_exe()
            .map_err(|e| HostQueryError::query_failed("exec_path", e.to_string()))
    }

    fn platform(&self) -> HostResult<String> {
        Ok(std::env::consts::OS.to_string())
    }

    fn arch(&self) -> HostResult<String> {
        Ok(std::env::consts::ARCH.to_string())
    }

    fn version(&self) -> HostResult<String> {
        Ok(env!("CARGO_PKG_VERSION").to_string())
    }

    fn memory_usage(&self) -> HostResult<MemoryUsage> {
        read_memory_usage()
    }
}

#[cfg(target_os = "linux")]
fn read_memory_usage() -> HostResult<MemoryUsage> {
    let raw = std::fs::read_to_string("/proc/self/statm")
        .map_err(|e| HostQueryError::query_failed("memory", e.to_string()))?;
    parse_statm(&raw)
}

#[cfg(not(target_os = "linux"))]
fn read_memory_usage() -> HostResult<MemoryUsage> {
    Err(HostQueryError::unsupported("memory"))
}

/// Parse a `/proc/self/statm` line into byte counters
///
/// Format: `size resident shared text lib data dt`, all in pages.
#[cfg(any(target_os = "linux", test))]
fn parse_statm(raw: &str) -> HostResult<MemoryUsage> {
    use crate::core::limits::{STATM_FIELDS, STATM_PAGE_SIZE};

    let pages: Vec<usize> = raw
        .split_whitespace()
        .map(|field| {
            field
                .parse::<usize>()
                .map_err(|e| HostQueryError::malformed("memory", e.to_string()))
        })
        .collect::<HostResult<_>>()?;

    if pages.len() < STATM_FIELDS {
        return Err(HostQueryError::malformed(
            "memory",
            format!("expected {} statm fields, got {}", STATM_FIELDS, pages.len()),
        ));
    }

    Ok(MemoryUsage {
        virtual_bytes: pages[0] * STATM_PAGE_SIZE,
        resident_bytes: pages[1] * STATM_PAGE_SIZE,
        shared_bytes: pages[2] * STATM_PAGE_SIZE,
    })
}
