use super::*;
use pretty_assertions::assert_eq;

/// Helper: boundary in front of the first `<` in `source`, with no floor.
fn before_open(source: &str) -> u32 {
    let open = source.find('<').unwrap_or(source.len());
    let open = u32::try_from(open).unwrap();
    index_of_last_block_expression_or_macro(SourceView::from(source), open, 0)
}

#[test]
fn statement_separator() {
    assert_eq!(before_open("int x; array<int> a"), 7);
}

#[test]
fn argument_separator_keeps_qualifiers() {
    assert_eq!(before_open("foo(bar, static int list<"), 9);
}

#[test]
fn unmatched_paren_is_call_edge() {
    assert_eq!(before_open("call(list<"), 5);
    assert_eq!(before_open("call(<"), 5);
}

#[test]
fn unmatched_brace_is_block_edge() {
    assert_eq!(before_open("void f() { list<"), 11);
    assert_eq!(before_open("{<"), 1);
}

#[test]
fn balanced_parens_are_skipped() {
    assert_eq!(before_open("x; f(a, b) list<"), 3);
}

#[test]
fn function_body_ends_previous_statement() {
    assert_eq!(before_open("int f() { return 0; }\nstatic list<"), 22);
}

#[test]
fn function_body_with_nothing_after() {
    assert_eq!(before_open("void f() {}<"), 10);
}

#[test]
fn statement_block_restarts_scan() {
    let source = "struct point{int x;int y;} list<";
    let view = SourceView::from(source);
    let mut scanner = BoundaryScanner::new(view, 0);
    assert_eq!(scanner.scan(31), 0);
    assert_eq!(scanner.trail(), &[12]);
}

#[test]
fn chained_statement_blocks() {
    let source = "struct a{int x;} struct b{int y;} list<";
    let mut scanner = BoundaryScanner::new(SourceView::from(source), 0);
    assert_eq!(scanner.scan(38), 0);
    assert_eq!(scanner.trail(), &[25, 8]);
}

#[test]
fn trail_is_reset_between_scans() {
    let source = "struct p{int x;} list<";
    let mut scanner = BoundaryScanner::new(SourceView::from(source), 0);
    scanner.scan(21);
    assert_eq!(scanner.trail().len(), 1);
    scanner.scan(4);
    assert!(scanner.trail().is_empty());
}

#[test]
fn block_comment_is_skipped() {
    assert_eq!(before_open("a; /* x; */ list<"), 12);
}

#[test]
fn line_comment_is_skipped() {
    assert_eq!(before_open("a;\n// b;\nlist<"), 9);
}

#[test]
fn line_marker_inside_multiline_block_comment() {
    assert_eq!(before_open("int a; /* see\n http://x */ array<int> b;"), 27);
}

#[test]
fn string_is_skipped() {
    assert_eq!(before_open("x; y = \"a;b\" <"), 3);
}

#[test]
fn floor_stops_before_macro() {
    let source = "#include <x>\nlist<";
    let view = SourceView::from(source);
    assert_eq!(index_of_last_block_expression_or_macro(view, 17, 13), 13);
}

#[test]
fn exhausted_scan_skips_leading_whitespace() {
    assert_eq!(before_open("  \n list<"), 4);
}

#[test]
fn start_at_floor() {
    let view = SourceView::from("abc def");
    assert_eq!(index_of_last_block_expression_or_macro(view, 3, 3), 3);
}

#[test]
#[should_panic(expected = "exceeds buffer length")]
fn start_past_end() {
    index_of_last_block_expression_or_macro(SourceView::from("ab"), 3, 0);
}

#[test]
#[should_panic(expected = "exceeds start")]
fn floor_above_start() {
    index_of_last_block_expression_or_macro(SourceView::from("abcd"), 1, 2);
}
