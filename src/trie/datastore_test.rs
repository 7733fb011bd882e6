use super::*;

#[test]
fn test_index_zero_is_reserved() {
    let data = DataStore::with_capacity(4);
    assert_eq!(data.len(), 1);
    assert_eq!(data.get(0), (0, 0));
}

#[test]
fn test_push_returns_the_new_index() {
    let mut data = DataStore::with_capacity(4);
    let a = data.push(10, 99);
    let b = data.push(20, 100);
    assert_eq!(a, 1);
    assert_eq!(b, 2);
    assert_eq!(data.get(a), (10, 99));
    assert_eq!(data.get(b), (20, 100));
}

#[test]
fn test_set_tail_offset_updates_in_place() {
    let mut data = DataStore::with_capacity(4);
    let idx = data.push(10, 99);
    data.set_tail_offset(idx, 42);
    assert_eq!(data.get(idx), (42, 99));
}
