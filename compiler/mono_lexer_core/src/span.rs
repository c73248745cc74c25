//! `(start, len)` spans into a source view.

use std::fmt;
use std::ops::Range;

/// Error when creating a span from a range that does not fit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SpanError {
    /// Span start position exceeds `u32::MAX`.
    #[error("span start {0} (0x{0:X}) exceeds u32::MAX")]
    StartTooLarge(usize),
    /// Span length exceeds `u32::MAX`.
    #[error("span length {0} (0x{0:X}) exceeds u32::MAX")]
    LenTooLarge(usize),
    /// Range end lies before its start.
    #[error("span range {start}..{end} is inverted")]
    Inverted {
        /// Range start.
        start: usize,
        /// Range end.
        end: usize,
    },
}

/// A sub-range of a [`SourceView`](crate::SourceView), relative to that view.
///
/// Layout: 8 bytes (`start: u32`, `len: u32`).
#[derive(Copy, Clone, Eq, PartialEq, Hash, Default)]
pub struct Span {
    /// Index of the first byte.
    pub start: u32,
    /// Number of bytes covered.
    pub len: u32,
}

/// Span of the identifier immediately preceding an opening `<`.
pub type NamePosition = Span;

impl Span {
    /// Create a new span.
    #[inline]
    pub const fn new(start: u32, len: u32) -> Self {
        Span { start, len }
    }

    /// Try to create a span from a byte range.
    ///
    /// # Errors
    ///
    /// Returns an error if the range is inverted or exceeds `u32::MAX`.
    pub fn try_from_range(range: Range<usize>) -> Result<Self, SpanError> {
        if range.end < range.start {
            return Err(SpanError::Inverted {
                start: range.start,
                end: range.end,
            });
        }
        let len = range.end - range.start;
        let start =
            u32::try_from(range.start).map_err(|_| SpanError::StartTooLarge(range.start))?;
        let len = u32::try_from(len).map_err(|_| SpanError::LenTooLarge(len))?;
        Ok(Span { start, len })
    }

    /// One past the last covered byte.
    #[inline]
    pub const fn end(&self) -> u32 {
        self.start + self.len
    }

    /// Check if the span covers no bytes.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Check if an offset is within this span.
    #[inline]
    pub fn contains(&self, offset: u32) -> bool {
        offset >= self.start && offset < self.end()
    }

    /// The same span moved `by` bytes to the right.
    ///
    /// Converts a span relative to a sub-view into one relative to its parent.
    #[inline]
    #[must_use]
    pub const fn shifted(self, by: u32) -> Span {
        Span {
            start: self.start + by,
            len: self.len,
        }
    }

    /// The span as a `usize` range, for slicing.
    #[inline]
    pub fn range(&self) -> Range<usize> {
        self.start as usize..self.end() as usize
    }
}

impl fmt::Debug for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end())
    }
}

impl From<Span> for Range<usize> {
    fn from(span: Span) -> Self {
        span.range()
    }
}

#[cfg(test)]
mod tests;
