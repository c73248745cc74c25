//! Locating every generic call site in a buffer.
//!
//! Drives the detector, the alligator matcher, the boundary scanner and the
//! name extractor over a whole file. Only spans are reported; rewriting the
//! sites is left to the caller.

use mono_lexer_core::{Context, ContextTracker, SourceView, Span, Step};
use tracing::{debug, trace};

use crate::{
    begins_with_any, generic_call_extent, index_of_closing_alligator,
    index_of_last_block_expression_or_macro, try_get_name_before_alligator, ScanConfig,
};

/// One `Name<Args>` occurrence. All indices are relative to the scanned view.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct GenericCall {
    /// Identifier in front of the `<`, if one could be extracted.
    pub name: Option<Span>,
    /// Bytes strictly between `<` and `>`.
    pub arguments: Span,
    /// Index of the opening `<`.
    pub open: u32,
    /// Index of the closing `>`.
    pub close: u32,
    /// Start of the statement or expression the site belongs to.
    pub statement_start: u32,
    /// Index into [`ScanConfig::prefixes`] of the prefix the statement
    /// begins with.
    pub prefix: Option<usize>,
}

impl GenericCall {
    /// From the name (or the `<` for an unnamed site) through the `>`.
    pub fn span(&self) -> Span {
        let start = self.name.map_or(self.open, |name| name.start);
        Span::new(start, self.close + 1 - start)
    }

    /// From the statement start through the `>`.
    pub fn declaration(&self) -> Span {
        Span::new(self.statement_start, self.close + 1 - self.statement_start)
    }
}

/// Every generic call site in `view`, in source order.
pub fn find_generic_calls(view: SourceView<'_>) -> Vec<GenericCall> {
    find_generic_calls_with(view, &ScanConfig::default())
}

/// [`find_generic_calls`] with an explicit configuration.
///
/// A `<` is a candidate only when it is ordinary code, so `#include <...>`
/// lines, strings and comments never produce sites. The end of the most
/// recent macro line is the floor handed to the boundary scanner. After a
/// site is found, candidates inside its argument list are skipped; scan the
/// [`arguments`](GenericCall::arguments) span to find nested sites.
pub fn find_generic_calls_with(view: SourceView<'_>, config: &ScanConfig) -> Vec<GenericCall> {
    let mut tracker = ContextTracker::new(config.macro_continuation);
    let mut sites = Vec::new();
    let mut floor = 0;
    let mut resume = 0;

    for i in 0..view.len() {
        let was_macro = tracker.context().contains(Context::MACRO_LINE);
        let step = tracker.step_at(&view, i);
        if was_macro && !tracker.context().contains(Context::MACRO_LINE) {
            floor = i + 1;
        }

        if step != Step::Code(b'<') || i < resume {
            continue;
        }
        if let Some(site) = site_at(view, i, floor, config) {
            trace!(open = site.open, close = site.close, "generic call site");
            resume = site.close + 1;
            sites.push(site);
        }
    }

    debug!(count = sites.len(), "located generic call sites");
    sites
}

fn site_at(
    view: SourceView<'_>,
    open: u32,
    floor: u32,
    config: &ScanConfig,
) -> Option<GenericCall> {
    let extent = generic_call_extent(view.back(open + 1))?;
    let close = index_of_closing_alligator(view, 0, open)?;
    debug_assert_eq!(close, open + 1 + extent, "detector and matcher disagree");

    let statement_start = index_of_last_block_expression_or_macro(view, open, floor);
    let head = view.sub_view(statement_start, open - statement_start);
    let name = try_get_name_before_alligator(head).map(|name| name.shifted(statement_start));
    let prefix = begins_with_any(view.back(statement_start), config.prefixes.as_slice());

    Some(GenericCall {
        name,
        arguments: Span::new(open + 1, close - open - 1),
        open,
        close,
        statement_start,
        prefix,
    })
}
