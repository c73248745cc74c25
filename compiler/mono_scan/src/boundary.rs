//! Backward search for the start of the statement or expression that
//! precedes a position.
//!
//! Used to recover the full declaration in front of a generic call site:
//! return type, qualifiers, and the name itself.
//!
//! # Rules
//!
//! Walking from `start` toward the floor, skipping whitespace, strings and
//! comments (via [`ReverseTracker`], which classifies bytes forward from the
//! floor, so a line that begins inside a block comment is read correctly):
//!
//! - A depth-zero `;` or `,` ends the search. The result is the leftmost
//!   identifier byte seen so far, or the separator itself.
//! - An unmatched `(` or `{` is the edge of the enclosing call or block.
//!   The result is the leftmost identifier byte seen, or the first byte
//!   inside the bracket.
//! - A balanced `{ ... }` preceded by `)` is a function body: the result is
//!   the leftmost identifier byte seen, or its closing `}`.
//! - Any other balanced `{ ... }` is a distinct statement block (a struct
//!   body, for instance), and the search restarts in front of its `{`.
//!
//! If nothing matches before the floor, the result is the first
//! non-whitespace byte at or after the floor.
//!
//! Restarts are iterative. Each restart position is recorded in the
//! scanner's [`trail`](BoundaryScanner::trail).

use mono_lexer_core::{
    is_blank_or_control, is_name_byte, is_space, Depths, MacroContinuation, ReverseTracker,
    SourceView, Step,
};
use smallvec::SmallVec;
use tracing::trace;

use crate::navigate::previous_non_whitespace;

/// Inline capacity of the restart trail. Longer chains spill to the heap.
const TRAIL_INLINE: usize = 8;

/// Outcome of scanning one level.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Level {
    /// A boundary was found.
    Found(u32),
    /// A statement block ends here; scan again in front of this `{`.
    Restart(u32),
    /// Reached the floor without finding a boundary.
    Exhausted,
}

/// Find where the statement, expression or macro preceding `start` begins.
///
/// `last_macro_index` is the floor: the index just past the last macro line
/// before `start`. The scan never reads below it.
///
/// # Panics
///
/// Panics unless `last_macro_index <= start <= view.len()`.
pub fn index_of_last_block_expression_or_macro(
    view: SourceView<'_>,
    start: u32,
    last_macro_index: u32,
) -> u32 {
    BoundaryScanner::new(view, last_macro_index).scan(start)
}

/// Reusable backward boundary scanner over one view.
#[derive(Clone, Debug)]
pub struct BoundaryScanner<'a> {
    view: SourceView<'a>,
    floor: u32,
    trail: SmallVec<[u32; TRAIL_INLINE]>,
}

impl<'a> BoundaryScanner<'a> {
    /// A scanner over `view` that never reads below `floor`.
    pub fn new(view: SourceView<'a>, floor: u32) -> Self {
        Self {
            view,
            floor,
            trail: SmallVec::new(),
        }
    }

    /// Positions the last [`scan`](Self::scan) restarted from, in the order
    /// they were taken.
    pub fn trail(&self) -> &[u32] {
        &self.trail
    }

    /// Find the boundary in front of `start`.
    ///
    /// # Panics
    ///
    /// Panics unless `floor <= start <= view.len()`.
    pub fn scan(&mut self, start: u32) -> u32 {
        assert!(
            start <= self.view.len(),
            "start {start} exceeds buffer length {}",
            self.view.len()
        );
        assert!(
            self.floor <= start,
            "last macro index {} exceeds start {start}",
            self.floor
        );

        self.trail.clear();
        let mut tracker =
            ReverseTracker::with_origin(self.view, self.floor, MacroContinuation::default());
        let mut start = start;
        loop {
            match self.scan_level(&mut tracker, start) {
                Level::Found(index) => return index,
                Level::Restart(open) => {
                    trace!(open, "restarting before statement block");
                    self.trail.push(open);
                    start = open;
                }
                Level::Exhausted => return self.first_at_floor(start),
            }
        }
    }

    fn scan_level(&self, tracker: &mut ReverseTracker<'_>, start: u32) -> Level {
        let mut depths = Depths::default();
        let mut last_name: Option<u32> = None;
        let mut first_brace: Option<u32> = None;

        for i in (self.floor..start).rev() {
            if is_space(self.view.byte(i)) {
                continue;
            }
            let Step::Code(c) = tracker.step_at(i) else {
                continue;
            };

            if depths.paren == 0 {
                if c == b'}' {
                    depths.brace += 1;
                    first_brace.get_or_insert(i);
                } else if c == b'{' {
                    depths.brace -= 1;
                    if depths.brace < 0 {
                        return Level::Found(last_name.unwrap_or(i + 1));
                    }
                    if depths.brace == 0 {
                        if let Some(close) = first_brace.filter(|_| self.follows_paren(i)) {
                            return Level::Found(last_name.unwrap_or(close));
                        }
                        return Level::Restart(i);
                    }
                }
            }

            if depths.brace != 0 {
                continue;
            }

            match c {
                b'(' => {
                    depths.paren -= 1;
                    if depths.paren < 0 {
                        return Level::Found(last_name.unwrap_or(i + 1));
                    }
                }
                b')' => depths.paren += 1,
                _ => {}
            }

            if depths.paren != 0 {
                continue;
            }

            if is_name_byte(c) {
                last_name = Some(i);
            } else if c == b';' || c == b',' {
                return Level::Found(last_name.unwrap_or(i));
            }
        }

        Level::Exhausted
    }

    /// `true` if the last non-whitespace byte before `open` (above the
    /// floor) is `)`, marking `open` as a function body.
    fn follows_paren(&self, open: u32) -> bool {
        let before = self.view.sub_view(self.floor, open - self.floor);
        previous_non_whitespace(before) == Some(b')')
    }

    fn first_at_floor(&self, start: u32) -> u32 {
        (self.floor..start)
            .find(|&i| !is_blank_or_control(self.view.byte(i)))
            .unwrap_or(self.floor)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, reason = "test assertions use unwrap for clarity")]
mod tests;
