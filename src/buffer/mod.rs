/*!
 * Buffer Module
 * Fixed-length byte sequences and the splice copy primitive
 */

pub mod sequence;
pub mod splice;

// Re-export for convenience
pub use sequence::ByteSequence;
pub use splice::{splice, splice_range, SpliceError, SpliceResult};
