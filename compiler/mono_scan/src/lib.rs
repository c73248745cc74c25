//! Generic call site scanner for C-like source.
//!
//! Finds `Name<Args>` instantiation syntax in raw source text and tells it
//! apart from relational and shift operators, without parsing C. Every
//! scanner is a heuristic recognizer: ambiguous input yields `None` or
//! `false`, never an error. Caller bugs (empty buffers where one is
//! required, indices out of range) panic.
//!
//! # Pieces
//!
//! - [`look_ahead_is_generic_call`]: is the text after a `<` an argument list?
//! - [`index_of_closing_alligator`]: the matching `>`
//! - [`try_get_name_before_alligator`]: the identifier before the `<`
//! - [`index_of_last_block_expression_or_macro`]: where the declaration starts
//! - [`index_of_closing_brace`] / [`index_of_closing_paren`]: body and call extents
//! - [`find_generic_calls`]: all of the above over a whole file
//!
//! All operations read a [`SourceView`](mono_lexer_core::SourceView) and
//! return indices relative to it.

mod boundary;
mod config;
mod detect;
mod matcher;
mod name;
mod navigate;
mod prefix;
mod sites;

pub use boundary::{index_of_last_block_expression_or_macro, BoundaryScanner};
pub use config::ScanConfig;
pub use detect::{generic_call_extent, look_ahead_is_generic_call, DISQUALIFYING};
pub use matcher::{
    index_of_closing_alligator, index_of_closing_brace, index_of_closing_brace_with,
    index_of_closing_paren, index_of_closing_paren_with,
};
pub use name::{method_name, try_get_name_before_alligator};
pub use navigate::{
    first_of, has_only_name_bytes_or_whitespace, index_of_next_non_whitespace,
    index_of_previous_non_whitespace, next_non_whitespace, previous_non_whitespace, FirstFound,
};
pub use prefix::begins_with_any;
pub use sites::{find_generic_calls, find_generic_calls_with, GenericCall};
