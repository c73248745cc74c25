//! Small look-around helpers over a view.

use std::cmp::Ordering;

use mono_lexer_core::{is_name_byte, is_space, SourceView};

/// First non-whitespace byte in `view`.
pub fn next_non_whitespace(view: SourceView<'_>) -> Option<u8> {
    index_of_next_non_whitespace(view).map(|i| view.byte(i))
}

/// Index of the first non-whitespace byte in `view`.
pub fn index_of_next_non_whitespace(view: SourceView<'_>) -> Option<u32> {
    (0..view.len()).find(|&i| !is_space(view.byte(i)))
}

/// Last non-whitespace byte in `view`.
pub fn previous_non_whitespace(view: SourceView<'_>) -> Option<u8> {
    index_of_previous_non_whitespace(view).map(|i| view.byte(i))
}

/// Index of the last non-whitespace byte in `view`.
pub fn index_of_previous_non_whitespace(view: SourceView<'_>) -> Option<u32> {
    (0..view.len()).rev().find(|&i| !is_space(view.byte(i)))
}

/// Which of two bytes occurs first.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FirstFound {
    /// `left` occurs before `right`, or `right` is absent.
    Left,
    /// `right` occurs before `left`, or `left` is absent.
    Right,
    /// Neither occurs, or `left` and `right` are the same byte.
    Neither,
}

/// Report which of `left` and `right` appears first in `view`.
pub fn first_of(view: SourceView<'_>, left: u8, right: u8) -> FirstFound {
    match (view.find_byte(left), view.find_byte(right)) {
        (Some(l), Some(r)) => match l.cmp(&r) {
            Ordering::Less => FirstFound::Left,
            Ordering::Greater => FirstFound::Right,
            Ordering::Equal => FirstFound::Neither,
        },
        (Some(_), None) => FirstFound::Left,
        (None, Some(_)) => FirstFound::Right,
        (None, None) => FirstFound::Neither,
    }
}

/// `true` if every byte is an identifier byte or whitespace.
pub fn has_only_name_bytes_or_whitespace(view: SourceView<'_>) -> bool {
    view.as_bytes().iter().all(|&c| is_name_byte(c) || is_space(c))
}
