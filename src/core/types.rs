/*!
 * Core Types
 * Common types used across the probe
 */

use serde::{Deserialize, Serialize};
use std::fmt;

/// Process ID type
pub type Pid = u32;

/// Signal number type (1-based, POSIX numbering)
pub type Signal = u32;

/// Offset where a fatal signal is encoded in an exit code.
///
/// Standard Unix practice: a process killed by signal `n` reports exit
/// code `128 + n`.
const SIGNAL_EXIT_BASE: i32 = 128;

/// Process exit code as delivered to exit hooks and the host.
///
/// Wraps the raw integer the process hands to its exit path, plus the
/// conventional classification: 0 is success, anything else is failure,
/// and codes above 128 encode a fatal signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExitCode(i32);

impl ExitCode {
    /// Clean exit
    pub const SUCCESS: Self = Self(0);

    /// Generic failure exit
    pub const FAILURE: Self = Self(1);

    #[inline]
    #[must_use]
    pub const fn new(code: i32) -> Self {
        Self(code)
    }

    /// Exit code for a process killed by `signal` (`128 + signal`)
    #[inline]
    #[must_use]
    pub const fn from_signal(signal: Signal) -> Self {
        Self(SIGNAL_EXIT_BASE + signal as i32)
    }

    /// Raw integer value, as passed to the host exit path
    #[inline]
    #[must_use]
    pub const fn value(self) -> i32 {
        self.0
    }

    #[inline]
    #[must_use]
    pub const fn is_success(self) -> bool {
        self.0 == 0
    }

    #[inline]
    #[must_use]
    pub const fn is_failure(self) -> bool {
        self.0 != 0
    }

    /// Recover the fatal signal number from a signal-exit code
    #[inline]
    #[must_use]
    pub const fn signal(self) -> Option<Signal> {
        if self.0 > SIGNAL_EXIT_BASE && self.0 <= SIGNAL_EXIT_BASE + 64 {
            Some((self.0 - SIGNAL_EXIT_BASE) as Signal)
        } else {
            None
        }
    }

    /// Short human-readable classification for report lines
    #[must_use]
    pub const fn describe(self) -> &'static str {
        if self.is_success() {
            "success"
        } else if self.signal().is_some() {
            "fatal signal exit"
        } else {
            "failure"
        }
    }
}

impl Default for ExitCode {
    fn default() -> Self {
        Self::SUCCESS
    }
}

impl From<i32> for ExitCode {
    fn from(code: i32) -> Self {
        Self::new(code)
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
