//! Low-level building blocks for scanning C-like source text.
//!
//! This crate has no `mono_*` dependencies. It provides:
//! - [`SourceBuffer`]: owned source bytes followed by a `0x00` terminator
//! - [`SourceView`]: a zero-copy window into a buffer with the same
//!   one-past-the-end terminator guarantee
//! - [`Span`]: `(start, len)` references into a view
//! - Byte classification ([`is_name_byte`], [`is_space`], [`ByteSet`])
//! - [`ContextTracker`] / [`ReverseTracker`]: the string, comment and
//!   macro-line state machine shared by every scanner
//!
//! Only [`ReverseTracker`] allocates, to record its forward pass. Nothing
//! here logs. Scanners that make heuristic decisions live in `mono_scan`.

mod classify;
mod context;
mod source_buffer;
mod span;

pub use classify::{is_blank_or_control, is_name_byte, is_space, ByteSet};
pub use context::{
    Context, ContextTracker, Depths, MacroContinuation, ReverseTracker, ScanState, Step,
};
pub use source_buffer::{SourceBuffer, SourceView, ViewError};
pub use span::{NamePosition, Span, SpanError};
