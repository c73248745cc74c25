use super::*;

#[test]
fn name_bytes() {
    for c in b"azAZ09_".iter().copied() {
        assert!(is_name_byte(c), "{:?} should be a name byte", c as char);
    }
    for c in b" <>(){}.;,*&-$\0".iter().copied() {
        assert!(!is_name_byte(c), "{:?} should not be a name byte", c as char);
    }
}

#[test]
fn non_ascii_is_never_a_name_byte() {
    assert!((0x80..=0xFF).all(|c| !is_name_byte(c)));
}

#[test]
fn c_space_set() {
    for c in [b' ', b'\t', b'\n', 0x0B, 0x0C, b'\r'] {
        assert!(is_space(c));
    }
    assert!(!is_space(0));
    assert!(!is_space(b'a'));
}

#[test]
fn blank_or_control_includes_terminator() {
    assert!(is_blank_or_control(0));
    assert!(is_blank_or_control(0x1B));
    assert!(is_blank_or_control(b' '));
    assert!(!is_blank_or_control(b'x'));
}

#[test]
fn byte_set_membership() {
    const SET: ByteSet = ByteSet::new(b".;()");
    assert!(SET.contains(b'.'));
    assert!(SET.contains(b')'));
    assert!(!SET.contains(b'<'));
    assert!(!SET.contains(0));
}

#[test]
fn empty_byte_set() {
    let set = ByteSet::new(b"");
    assert!((0..=255).all(|c| !set.contains(c)));
}
