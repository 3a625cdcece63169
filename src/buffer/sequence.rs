/*!
 * Byte Sequences
 * Fixed-length, in-place-mutable byte storage
 */

use std::borrow::Cow;
use std::fmt;

/// Ordered, fixed-length sequence of bytes.
///
/// Length is fixed at creation; the boxed slice makes growth impossible by
/// construction. Contents are mutable in place through [`as_bytes_mut`].
/// Sequences are built from literal UTF-8 text and can be decoded back for
/// reporting.
///
/// [`as_bytes_mut`]: ByteSequence::as_bytes_mut
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ByteSequence {
    data: Box<[u8]>,
}

impl ByteSequence {
    /// Create a sequence holding the UTF-8 encoding of `text`
    #[inline]
    #[must_use]
    pub fn from_text(text: &str) -> Self {
        Self {
            data: text.as_bytes().into(),
        }
    }

    /// Create a zero-filled sequence of `len` bytes
    #[inline]
    #[must_use]
    pub fn zeroed(len: usize) -> Self {
        Self {
            data: vec![0u8; len].into_boxed_slice(),
        }
    }

    /// Number of bytes in the sequence (fixed for its lifetime)
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    #[inline]
    #[must_use]
    pub fn as_bytes_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Decode the sequence as UTF-8 text for reporting.
    ///
    /// Invalid byte runs are replaced rather than failing; report output is
    /// best-effort text, never an error.
    #[inline]
    #[must_use]
    pub fn to_text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.data)
    }
}

impl From<&str> for ByteSequence {
    fn from(text: &str) -> Self {
        Self::from_text(text)
    }
}

impl From<Vec<u8>> for ByteSequence {
    fn from(bytes: Vec<u8>) -> Self {
        Self {
            data: bytes.into_boxed_slice(),
        }
    }
}

impl fmt::Display for ByteSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_text())
    }
}
