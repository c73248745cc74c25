//! Is the text after a `<` a generic argument list?
//!
//! A closed-world heuristic: generic arguments contain names, whitespace,
//! commas, pointers, nested `<...>` lists and embedded `{ ... }` bodies.
//! Anything that looks like an expression operator, a statement terminator
//! or a quote disqualifies the candidate, so comparisons and shifts fall
//! through as ordinary code.

use mono_lexer_core::{ByteSet, SourceView};
use tracing::trace;

use crate::matcher::{Angle, AngleWalker};

/// Bytes that can never appear at brace depth zero in an argument list.
pub const DISQUALIFYING: ByteSet = ByteSet::new(b".;()/\\'\"}|-+=&^%$#@!`~");

/// Decide whether `view`, which starts just after a candidate `<`, holds a
/// generic argument list.
///
/// Empty angle brackets (`<>`) are rejected.
pub fn look_ahead_is_generic_call(view: SourceView<'_>) -> bool {
    generic_call_extent(view).is_some()
}

/// Index in `view` of the `>` that ends the argument list, if `view` holds one.
///
/// Walks bytes the same way as
/// [`index_of_closing_alligator`](crate::index_of_closing_alligator), so for
/// a `<` at `open` the result `k` satisfies
/// `index_of_closing_alligator(parent, 0, open) == Some(open + 1 + k)`.
pub fn generic_call_extent(view: SourceView<'_>) -> Option<u32> {
    let mut walker = AngleWalker::inside_open();

    for i in 0..view.len() {
        match walker.feed(view.byte(i)) {
            Angle::Close if i == 0 => {
                trace!("empty angle brackets");
                return None;
            }
            Angle::Close => return Some(i),
            Angle::Other(c) if DISQUALIFYING.contains(c) => {
                trace!(at = i, byte = %char::from(c), "disqualified");
                return None;
            }
            Angle::Body | Angle::Nested | Angle::Other(_) => {}
        }
    }

    None
}
