//! Depth-balanced closing-delimiter search.
//!
//! [`index_of_closing_brace`] and [`index_of_closing_paren`] run the full
//! [`ContextTracker`] so brackets in strings, comments and macro lines are
//! ignored. [`index_of_closing_alligator`] deliberately does not: generic
//! argument lists are assumed not to straddle literals, and the detector in
//! [`crate::detect`] walks the same bytes the same way.

use mono_lexer_core::{ContextTracker, Depths, SourceView, Step};
use tracing::trace;

use crate::ScanConfig;

/// Index of the `}` that closes the first `{` in `view`.
///
/// Returns `None` if depth never returns to zero before the view ends,
/// meaning the extent could not be determined.
///
/// # Panics
///
/// Panics if `view` is empty.
pub fn index_of_closing_brace(view: SourceView<'_>) -> Option<u32> {
    index_of_closing_brace_with(view, &ScanConfig::default())
}

/// [`index_of_closing_brace`] with an explicit configuration.
///
/// # Panics
///
/// Panics if `view` is empty.
pub fn index_of_closing_brace_with(view: SourceView<'_>, config: &ScanConfig) -> Option<u32> {
    assert!(!view.is_empty(), "index_of_closing_brace requires a non-empty buffer");

    let mut tracker = ContextTracker::new(config.macro_continuation);
    let mut depths = Depths::default();

    for i in 0..view.len() {
        match tracker.step_at(&view, i) {
            Step::Code(b'{') => depths.brace += 1,
            Step::Code(b'}') => {
                depths.brace -= 1;
                if depths.brace == 0 {
                    return Some(i);
                }
            }
            _ => {}
        }
    }

    trace!(state = ?tracker.snapshot(depths), "no closing brace");
    None
}

/// Index of the `)` that closes the first `(` in `view`.
///
/// Parens inside a nested `{ ... }` body are not counted, so a block
/// passed as an argument cannot close the enclosing call.
///
/// # Panics
///
/// Panics if `view` is empty.
pub fn index_of_closing_paren(view: SourceView<'_>) -> Option<u32> {
    index_of_closing_paren_with(view, &ScanConfig::default())
}

/// [`index_of_closing_paren`] with an explicit configuration.
///
/// # Panics
///
/// Panics if `view` is empty.
pub fn index_of_closing_paren_with(view: SourceView<'_>, config: &ScanConfig) -> Option<u32> {
    assert!(!view.is_empty(), "index_of_closing_paren requires a non-empty buffer");

    let mut tracker = ContextTracker::new(config.macro_continuation);
    let mut depths = Depths::default();

    for i in 0..view.len() {
        let Step::Code(c) = tracker.step_at(&view, i) else {
            continue;
        };
        match c {
            b'{' => depths.brace += 1,
            b'}' => depths.brace -= 1,
            b'(' if depths.brace == 0 => depths.paren += 1,
            b')' if depths.brace == 0 => {
                depths.paren -= 1;
                if depths.paren == 0 {
                    return Some(i);
                }
            }
            _ => {}
        }
    }

    trace!(state = ?tracker.snapshot(depths), "no closing paren");
    None
}

/// Index of the `>` that closes the `<` at `open_index`.
///
/// `start_brace_depth` resumes a scan that begins inside a brace body; while
/// brace depth is non-zero only `{` and `}` are significant. This lets an
/// argument list embed a body, as in `array<struct point{int x;int y;}>`.
///
/// # Panics
///
/// Panics if `open_index` lies past the end of `view`.
pub fn index_of_closing_alligator(
    view: SourceView<'_>,
    start_brace_depth: i32,
    open_index: u32,
) -> Option<u32> {
    assert!(
        open_index <= view.len(),
        "open index {open_index} exceeds buffer length {}",
        view.len()
    );

    let mut walker = AngleWalker::new(Depths {
        brace: start_brace_depth,
        ..Depths::default()
    });
    (open_index..view.len()).find(|&i| walker.feed(view.byte(i)) == Angle::Close)
}

/// What one byte meant to an angle-bracket walk.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum Angle {
    /// Inside, opening or closing an embedded `{ ... }` body.
    Body,
    /// A `<`, or a `>` that closes a nested list.
    Nested,
    /// The `>` that brings angle depth back to zero.
    Close,
    /// Any other byte at brace depth zero.
    Other(u8),
}

/// Angle-bracket depth walk shared by the detector and the matcher.
#[derive(Copy, Clone, Debug)]
pub(crate) struct AngleWalker {
    depths: Depths,
}

impl AngleWalker {
    pub(crate) fn new(depths: Depths) -> Self {
        Self { depths }
    }

    /// A walk that starts just past an opening `<`.
    pub(crate) fn inside_open() -> Self {
        Self::new(Depths {
            alligator: 1,
            ..Depths::default()
        })
    }

    pub(crate) fn feed(&mut self, c: u8) -> Angle {
        if self.depths.brace != 0 {
            match c {
                b'{' => self.depths.brace += 1,
                b'}' => self.depths.brace -= 1,
                _ => {}
            }
            return Angle::Body;
        }

        match c {
            b'>' => {
                self.depths.alligator -= 1;
                if self.depths.alligator == 0 {
                    Angle::Close
                } else {
                    Angle::Nested
                }
            }
            b'<' => {
                self.depths.alligator += 1;
                Angle::Nested
            }
            b'{' => {
                self.depths.brace += 1;
                Angle::Body
            }
            _ => Angle::Other(c),
        }
    }
}
