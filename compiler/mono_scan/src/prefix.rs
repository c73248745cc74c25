//! Prefix matching against a caller-supplied list.

use mono_lexer_core::SourceView;

/// Index of the first candidate that `view` begins with.
///
/// Candidates are tried in order, so list longer prefixes before shorter
/// ones that share a stem.
pub fn begins_with_any<S: AsRef<[u8]>>(view: SourceView<'_>, candidates: &[S]) -> Option<usize> {
    candidates
        .iter()
        .position(|candidate| view.starts_with(candidate.as_ref()))
}
