use super::*;

#[test]
fn test_append_returns_offset_before_the_write() {
    let mut tail = TailBuffer::with_capacity(8);
    let first = tail.append(b"ab");
    let second = tail.append(b"xyz");
    assert_eq!(tail.str_at(first), b"ab");
    assert_eq!(tail.str_at(second), b"xyz");
}

#[test]
fn test_append_empty_string_is_just_a_terminator() {
    let mut tail = TailBuffer::with_capacity(4);
    let offset = tail.append(b"");
    assert_eq!(tail.str_at(offset), b"" as &[u8]);
}

#[test]
fn test_write_at_pads_and_terminates() {
    let mut tail = TailBuffer::with_capacity(4);
    tail.write_at(b"hello", 10);
    assert_eq!(tail.str_at(10), b"hello");
}

#[test]
fn test_write_at_overwrites_in_place_without_growing() {
    let mut tail = TailBuffer::with_capacity(8);
    let offset = tail.append(b"abcdef");
    let len_before = tail.len();
    tail.write_at(b"xy", offset);
    assert_eq!(tail.len(), len_before);
    assert_eq!(tail.str_at(offset), b"xy");
}
