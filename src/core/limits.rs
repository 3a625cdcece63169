/*!
 * Limits and Constants
 *
 * Centralized location for probe-wide limits, thresholds, and magic numbers.
 * All values include rationale comments explaining WHY they exist.
 */

// =============================================================================
// LIFECYCLE LIMITS
// =============================================================================

/// Maximum exit hooks a registry accepts
/// Bounds the terminal phase; a process registering more than this is
/// leaking registrations
pub const MAX_EXIT_HOOKS: usize = 64;

// =============================================================================
// HOST INTROSPECTION
// =============================================================================

/// Page size used to convert `/proc/self/statm` page counts to bytes (4KB)
/// statm reports pages, not bytes; 4KB is the page size on every platform
/// the probe targets
pub const STATM_PAGE_SIZE: usize = 4096;

/// Field count of a well-formed `/proc/self/statm` line
/// size resident shared text lib data dt
pub const STATM_FIELDS: usize = 7;

// =============================================================================
// OBSERVABILITY
// =============================================================================

/// Slow operation threshold (milliseconds)
/// Operations above this log a warning when their span closes
pub const SLOW_OPERATION_MS: u128 = 100;
