use super::*;

#[test]
fn span_basic() {
    let span = Span::new(10, 5);
    assert_eq!(span.end(), 15);
    assert!(!span.is_empty());
    assert!(span.contains(10));
    assert!(span.contains(14));
    assert!(!span.contains(15));
}

#[test]
fn empty_span() {
    let span = Span::default();
    assert!(span.is_empty());
    assert!(!span.contains(0));
}

#[test]
fn shifted_moves_start_only() {
    let span = Span::new(2, 3).shifted(10);
    assert_eq!(span, Span::new(12, 3));
}

#[test]
fn from_range() {
    assert_eq!(Span::try_from_range(4..9), Ok(Span::new(4, 5)));
    assert_eq!(Span::try_from_range(3..3), Ok(Span::new(3, 0)));
}

#[test]
#[allow(clippy::reversed_empty_ranges, reason = "exercising the inverted-range error")]
fn inverted_range_rejected() {
    assert_eq!(
        Span::try_from_range(9..4),
        Err(SpanError::Inverted { start: 9, end: 4 })
    );
}

#[test]
#[cfg(target_pointer_width = "64")]
fn oversized_range_rejected() {
    let big = u32::MAX as usize + 1;
    assert_eq!(
        Span::try_from_range(big..big + 1),
        Err(SpanError::StartTooLarge(big))
    );
    assert_eq!(
        Span::try_from_range(0..big),
        Err(SpanError::LenTooLarge(big))
    );
}

#[test]
fn range_round_trip_for_slicing() {
    let text = "int main";
    let span = Span::new(4, 4);
    assert_eq!(&text[span.range()], "main");
    let range: std::ops::Range<usize> = span.into();
    assert_eq!(range, 4..8);
}

#[test]
fn debug_format() {
    assert_eq!(format!("{:?}", Span::new(3, 4)), "3..7");
}
