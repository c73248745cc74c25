//! The identifier in front of an opening `<`.

use mono_lexer_core::{is_name_byte, is_space, NamePosition, SourceView, Span};
use tracing::trace;

/// Find the identifier at the end of `view`, which conventionally holds
/// the text immediately preceding a `<`.
///
/// Trailing whitespace is skipped, then a run of identifier bytes is
/// collected. The run ends at whitespace or at the start of the view. Any
/// other byte before or inside the run fails the extraction.
///
/// ```
/// use mono_lexer_core::{SourceView, Span};
/// use mono_scan::try_get_name_before_alligator;
///
/// let view = SourceView::from("void main ");
/// assert_eq!(try_get_name_before_alligator(view), Some(Span::new(5, 4)));
/// ```
pub fn try_get_name_before_alligator(view: SourceView<'_>) -> Option<NamePosition> {
    let mut end: Option<u32> = None;

    for i in (0..view.len()).rev() {
        let c = view.byte(i);

        if is_space(c) {
            if let Some(end) = end {
                return Some(Span::new(i + 1, end - i));
            }
            continue;
        }

        if !is_name_byte(c) {
            trace!(at = i, byte = %char::from(c), "no name before alligator");
            return None;
        }

        end.get_or_insert(i);
    }

    end.map(|end| Span::new(0, end + 1))
}

/// The sub-view named by [`try_get_name_before_alligator`].
///
/// Given the text up to a generic method's `<`, such as `int main`, returns
/// a view of `main`.
pub fn method_name(view: SourceView<'_>) -> Option<SourceView<'_>> {
    try_get_name_before_alligator(view).map(|name| view.sub_view(name.start, name.len))
}
