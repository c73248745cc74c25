//! Property-based tests for the scanners.
//!
//! Generated inputs are drawn from the bytes the scanners care about, so
//! brackets, separators, quotes and comment markers collide often.

#![allow(clippy::unwrap_used, reason = "Tests can panic")]
#![allow(
    clippy::doc_markdown,
    clippy::uninlined_format_args,
    reason = "Proptest macros generate code with these patterns"
)]

use mono_lexer_core::{is_name_byte, SourceView};
use mono_scan::{
    begins_with_any, find_generic_calls, generic_call_extent, index_of_closing_alligator,
    index_of_closing_brace, index_of_closing_paren, index_of_last_block_expression_or_macro,
    look_ahead_is_generic_call, try_get_name_before_alligator, BoundaryScanner,
};
use proptest::prelude::*;

const C_LIKE: &str = "[a-z <>{}(),;*.\"/#\n]{0,64}";

const PREFIXES: [&str; 3] = ["static", "st", "int"];

proptest! {
    #[test]
    fn detector_agrees_with_matcher(source in C_LIKE) {
        let view = SourceView::from(source.as_str());
        for open in (0..view.len()).filter(|&i| view.byte(i) == b'<') {
            if let Some(extent) = generic_call_extent(view.back(open + 1)) {
                prop_assert_eq!(
                    index_of_closing_alligator(view, 0, open),
                    Some(open + 1 + extent)
                );
            }
        }
    }

    #[test]
    fn sites_are_ordered_and_in_range(source in C_LIKE) {
        let view = SourceView::from(source.as_str());
        let mut previous_close = None;

        for site in find_generic_calls(view) {
            prop_assert!(site.statement_start <= site.open);
            prop_assert!(site.open < site.close && site.close < view.len());
            prop_assert_eq!(view.byte(site.open), b'<');
            prop_assert_eq!(view.byte(site.close), b'>');
            if let Some(name) = site.name {
                prop_assert!(name.start >= site.statement_start && name.end() <= site.open);
            }
            if let Some(close) = previous_close {
                prop_assert!(site.open > close);
            }
            previous_close = Some(site.close);
        }
    }

    #[test]
    fn boundary_stays_between_floor_and_start(
        source in C_LIKE,
        start in 0u32..80,
        floor in 0u32..80,
    ) {
        let view = SourceView::from(source.as_str());
        let start = start.min(view.len());
        let floor = floor.min(start);

        let boundary = index_of_last_block_expression_or_macro(view, start, floor);
        prop_assert!(floor <= boundary && boundary <= start);
    }

    #[test]
    fn extracted_name_is_identifier(source in "[a-z_ .*\n]{0,24}") {
        let view = SourceView::from(source.as_str());
        if let Some(name) = try_get_name_before_alligator(view) {
            prop_assert!(!name.is_empty());
            prop_assert!(name.end() <= view.len());
            prop_assert!(view.slice(name).iter().all(|&c| is_name_byte(c)));
        }
    }

    #[test]
    fn closing_brace_is_a_brace(source in "[a-z {}\"/*#\n]{1,48}") {
        let view = SourceView::from(source.as_str());
        if let Some(close) = index_of_closing_brace(view) {
            prop_assert_eq!(view.byte(close), b'}');
        }
    }

    #[test]
    fn closing_paren_is_a_paren(source in "[a-z (){}\"/*#\n]{1,48}") {
        let view = SourceView::from(source.as_str());
        if let Some(close) = index_of_closing_paren(view) {
            prop_assert!(close < view.len());
            prop_assert_eq!(view.byte(close), b')');
        }
    }

    #[test]
    fn scanners_are_idempotent(source in C_LIKE, at in 0u32..80) {
        let view = SourceView::from(source.as_str());
        let at = at.min(view.len());
        let head = view.sub_view(0, at);
        let tail = view.back(at);

        if !view.is_empty() {
            prop_assert_eq!(index_of_closing_brace(view), index_of_closing_brace(view));
            prop_assert_eq!(index_of_closing_paren(view), index_of_closing_paren(view));
        }
        prop_assert_eq!(
            index_of_closing_alligator(view, 0, at),
            index_of_closing_alligator(view, 0, at)
        );
        prop_assert_eq!(look_ahead_is_generic_call(tail), look_ahead_is_generic_call(tail));
        prop_assert_eq!(generic_call_extent(tail), generic_call_extent(tail));
        prop_assert_eq!(
            index_of_last_block_expression_or_macro(view, at, 0),
            index_of_last_block_expression_or_macro(view, at, 0)
        );
        prop_assert_eq!(try_get_name_before_alligator(head), try_get_name_before_alligator(head));
        prop_assert_eq!(begins_with_any(tail, &PREFIXES), begins_with_any(tail, &PREFIXES));
        prop_assert_eq!(find_generic_calls(view), find_generic_calls(view));
    }

    #[test]
    fn reused_boundary_scanner_repeats_itself(source in C_LIKE, at in 0u32..80) {
        let view = SourceView::from(source.as_str());
        let at = at.min(view.len());
        let mut scanner = BoundaryScanner::new(view, 0);

        let first = scanner.scan(at);
        let first_trail = scanner.trail().to_vec();
        prop_assert_eq!(scanner.scan(at), first);
        prop_assert_eq!(scanner.trail(), first_trail.as_slice());
    }
}
