/*!
 * Buffer Splice
 * Bounds-checked copy of a byte run between sequences
 */

use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::sequence::ByteSequence;

/// Splice operation result
///
/// # Must Use
/// Range violations must be handled; a discarded error hides a rejected copy
pub type SpliceResult<T> = Result<T, SpliceError>;

/// Range errors raised by splice operations
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Diagnostic)]
#[serde(tag = "error_type", content = "details", rename_all = "snake_case")]
pub enum SpliceError {
    #[error("destination offset {offset} out of range for sequence of {len} bytes")]
    #[diagnostic(
        code(splice::destination_offset_out_of_range),
        help("The destination offset must be strictly less than the destination length.")
    )]
    DestinationOffsetOutOfRange { offset: usize, len: usize },

    #[error("source range {start}..{end} out of range for sequence of {len} bytes")]
    #[diagnostic(
        code(splice::source_range_out_of_range),
        help("Source start and end must not exceed the source length.")
    )]
    SourceRangeOutOfRange {
        start: usize,
        end: usize,
        len: usize,
    },
}

/// Copy the whole of `source` into `destination` starting at
/// `destination_offset`.
///
/// Shorthand for [`splice_range`] over `0..source.len()`.
#[inline]
pub fn splice(
    destination: &mut ByteSequence,
    source: &ByteSequence,
    destination_offset: usize,
) -> SpliceResult<usize> {
    splice_range(destination, source, destination_offset, 0, source.len())
}

/// Copy `source[source_start..source_end]` into `destination` starting at
/// `destination_offset`, clamped to the destination's remaining capacity.
///
/// Copies `min(source_end - source_start, destination.len() -
/// destination_offset)` bytes and returns the count actually copied. Bytes
/// of `destination` outside the copied run are untouched; `source` is never
/// modified. An empty requested range (including `source_start >=
/// source_end`) is a no-op returning 0.
///
/// # Errors
/// - [`SpliceError::DestinationOffsetOutOfRange`] if `destination_offset >=
///   destination.len()`
/// - [`SpliceError::SourceRangeOutOfRange`] if `source_start` or
///   `source_end` exceeds `source.len()`
pub fn splice_range(
    destination: &mut ByteSequence,
    source: &ByteSequence,
    destination_offset: usize,
    source_start: usize,
    source_end: usize,
) -> SpliceResult<usize> {
    if destination_offset >= destination.len() {
        return Err(SpliceError::DestinationOffsetOutOfRange {
            offset: destination_offset,
            len: destination.len(),
        });
    }

    if source_start > source.len() || source_end > source.len() {
        return Err(SpliceError::SourceRangeOutOfRange {
            start: source_start,
            end: source_end,
            len: source.len(),
        });
    }

    // A reversed range yields nothing to copy
    let requested = source_end.saturating_sub(source_start);
    if requested == 0 {
        return Ok(0);
    }

    let count = requested.min(destination.len() - destination_offset);
    destination.as_bytes_mut()[destination_offset..destination_offset + count]
        .copy_from_slice(&source.as_bytes()[source_start..source_start + count]);

    Ok(count)
}
