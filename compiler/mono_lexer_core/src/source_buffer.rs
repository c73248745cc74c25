//! Terminated source buffers and zero-copy views.
//!
//! Every scanner reads one byte past its current position (`next`) and one
//! byte before it (`prev`). [`SourceBuffer`] guarantees a `0x00` terminator
//! after the source content, and [`SourceView`] extends the same guarantee
//! to sub-ranges: any read at or past a view's length yields `0x00`, even
//! when the backing buffer continues.
//!
//! # Layout
//!
//! ```text
//! SourceBuffer: [source_bytes..., 0x00]
//!                ^                ^
//!                0            source_len (terminator)
//!
//! SourceView:        [ start .. start + len )
//!                      byte(len) == 0x00
//! ```

use crate::Span;

/// Owned source text followed by a `0x00` terminator byte.
#[derive(Clone, Debug)]
pub struct SourceBuffer {
    /// `[source_bytes..., 0x00]`.
    buf: Vec<u8>,
    /// Length of the source content (excludes the terminator).
    source_len: u32,
}

/// Failure to build a buffer or a sub-view.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ViewError {
    /// The requested range does not fit inside the parent view.
    #[error("sub-view at {start} with length {len} exceeds view length {available}")]
    OutOfBounds {
        /// Requested start, relative to the parent view.
        start: u32,
        /// Requested length.
        len: u32,
        /// Length of the parent view.
        available: u32,
    },
    /// Source content longer than `u32::MAX` bytes.
    #[error("source of {0} bytes exceeds u32::MAX")]
    SourceTooLarge(usize),
}

impl SourceBuffer {
    /// Copy `source` into a new terminated buffer.
    ///
    /// # Panics
    ///
    /// Panics if the source is longer than `u32::MAX` bytes. Use
    /// [`try_from_bytes`](Self::try_from_bytes) for untrusted input.
    pub fn new(source: &str) -> Self {
        Self::try_from_bytes(source.as_bytes()).unwrap_or_else(|e| panic!("{e}"))
    }

    /// Copy `bytes` into a new terminated buffer.
    ///
    /// The bytes need not be UTF-8; scanners only inspect ASCII.
    pub fn try_from_bytes(bytes: &[u8]) -> Result<Self, ViewError> {
        let source_len =
            u32::try_from(bytes.len()).map_err(|_| ViewError::SourceTooLarge(bytes.len()))?;
        let mut buf = Vec::with_capacity(bytes.len() + 1);
        buf.extend_from_slice(bytes);
        buf.push(0);
        Ok(Self { buf, source_len })
    }

    /// Returns the source bytes (without the terminator).
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.source_len as usize]
    }

    /// Returns the source bytes followed by the `0x00` terminator.
    pub fn as_terminated_bytes(&self) -> &[u8] {
        &self.buf
    }

    /// A view over the whole source.
    pub fn view(&self) -> SourceView<'_> {
        SourceView {
            bytes: self.as_bytes(),
            start: 0,
            len: self.source_len,
        }
    }

    /// Length of the source content in bytes.
    pub fn len(&self) -> u32 {
        self.source_len
    }

    /// Returns `true` if the source content is empty.
    pub fn is_empty(&self) -> bool {
        self.source_len == 0
    }
}

/// Read-only window `[start, start + len)` into a byte sequence.
///
/// Views are [`Copy`] and never own or copy their bytes; sub-views share the
/// root slice and only move the window. All indices taken and returned by a
/// view's methods are relative to the view's own start.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SourceView<'a> {
    /// The root slice. The view covers `bytes[start..start + len]`.
    bytes: &'a [u8],
    start: u32,
    len: u32,
}

impl<'a> SourceView<'a> {
    /// A view over borrowed bytes.
    ///
    /// # Panics
    ///
    /// Panics if `bytes` is longer than `u32::MAX`.
    pub fn new(bytes: &'a [u8]) -> Self {
        let len = u32::try_from(bytes.len())
            .unwrap_or_else(|_| panic!("{}", ViewError::SourceTooLarge(bytes.len())));
        Self {
            bytes,
            start: 0,
            len,
        }
    }

    /// Byte at `index`, or the `0x00` terminator for any `index >= len`.
    #[inline]
    pub fn byte(&self, index: u32) -> u8 {
        if index < self.len {
            self.bytes[(self.start + index) as usize]
        } else {
            0
        }
    }

    /// Byte before `index`, or `0x00` at the start of the view.
    #[inline]
    pub fn prev_byte(&self, index: u32) -> u8 {
        match index.checked_sub(1) {
            Some(i) => self.byte(i),
            None => 0,
        }
    }

    /// Number of bytes in the view.
    #[inline]
    pub fn len(&self) -> u32 {
        self.len
    }

    /// Returns `true` if the view covers no bytes.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Offset of this view's first byte within the root slice.
    pub fn offset(&self) -> u32 {
        self.start
    }

    /// The bytes covered by the view.
    pub fn as_bytes(&self) -> &'a [u8] {
        &self.bytes[self.start as usize..(self.start + self.len) as usize]
    }

    /// Sub-view `[start, start + len)` of this view.
    ///
    /// # Errors
    ///
    /// Returns [`ViewError::OutOfBounds`] if the range leaves this view.
    pub fn try_sub_view(&self, start: u32, len: u32) -> Result<Self, ViewError> {
        match start.checked_add(len) {
            Some(end) if end <= self.len => Ok(Self {
                bytes: self.bytes,
                start: self.start + start,
                len,
            }),
            _ => Err(ViewError::OutOfBounds {
                start,
                len,
                available: self.len,
            }),
        }
    }

    /// Sub-view `[start, start + len)` of this view.
    ///
    /// # Panics
    ///
    /// Panics if the range leaves this view.
    pub fn sub_view(&self, start: u32, len: u32) -> Self {
        self.try_sub_view(start, len).unwrap_or_else(|e| panic!("{e}"))
    }

    /// Prefix ending at `end_inclusive`, clamped to the view.
    pub fn front(&self, end_inclusive: u32) -> Self {
        let len = end_inclusive.saturating_add(1).min(self.len);
        self.sub_view(0, len)
    }

    /// Suffix starting at `start`, clamped to the view.
    ///
    /// A `start` at or past the end yields an empty view.
    pub fn back(&self, start: u32) -> Self {
        let start = start.min(self.len);
        self.sub_view(start, self.len - start)
    }

    /// Bytes covered by `span`, clamped to the view.
    pub fn slice(&self, span: Span) -> &'a [u8] {
        let bytes = self.as_bytes();
        let start = (span.start as usize).min(bytes.len());
        let end = (span.end() as usize).min(bytes.len());
        &bytes[start..end]
    }

    /// Text covered by `span`, if it is valid UTF-8.
    pub fn text(&self, span: Span) -> Option<&'a str> {
        std::str::from_utf8(self.slice(span)).ok()
    }

    /// Returns `true` if the view begins with `prefix`.
    pub fn starts_with(&self, prefix: &[u8]) -> bool {
        self.as_bytes().starts_with(prefix)
    }

    /// Index of the first occurrence of `needle`.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "offsets are bounded by the view length, which fits in u32"
    )]
    pub fn find_byte(&self, needle: u8) -> Option<u32> {
        memchr::memchr(needle, self.as_bytes()).map(|i| i as u32)
    }

    /// Index of the last occurrence of `needle` before `end`.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "offsets are bounded by the view length, which fits in u32"
    )]
    pub fn rfind_byte_before(&self, needle: u8, end: u32) -> Option<u32> {
        let end = end.min(self.len) as usize;
        memchr::memrchr(needle, &self.as_bytes()[..end]).map(|i| i as u32)
    }
}

impl<'a> From<&'a str> for SourceView<'a> {
    fn from(source: &'a str) -> Self {
        Self::new(source.as_bytes())
    }
}

impl<'a> From<&'a SourceBuffer> for SourceView<'a> {
    fn from(buffer: &'a SourceBuffer) -> Self {
        buffer.view()
    }
}
