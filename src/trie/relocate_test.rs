use super::*;
use crate::trie::insert::add_transition;
use crate::trie::nodes::ROOT_ID;

fn fresh_store() -> (NodeStore, Alphabet) {
    let mut nodes = NodeStore::with_capacity(16);
    nodes.push(super::super::nodes::Node::default());
    nodes.push(super::super::nodes::Node { base: -1, check: -1 });
    nodes.push(super::super::nodes::Node { base: 0, check: 0 });
    let alphabet = Alphabet::new(b"abc").unwrap();
    (nodes, alphabet)
}

#[test]
fn test_relocate_base_preserves_children_and_grandchildren() {
    let (mut nodes, alphabet) = fresh_store();

    let a = add_transition(&mut nodes, &alphabet, ROOT_ID, b'a').unwrap();
    let b = add_transition(&mut nodes, &alphabet, ROOT_ID, b'b').unwrap();
    let c = add_transition(&mut nodes, &alphabet, b, b'c').unwrap();

    let old_base = nodes.get(ROOT_ID).base;
    let new_base = old_base + 100;
    relocate_base(&mut nodes, &alphabet, ROOT_ID, new_base).unwrap();

    assert_eq!(nodes.get(ROOT_ID).base, new_base);

    let new_a = (new_base + alphabet.char_index(b'a') as i32) as u32;
    let new_b = (new_base + alphabet.char_index(b'b') as i32) as u32;
    assert_eq!(nodes.get(new_a).check, ROOT_ID as i32);
    assert_eq!(nodes.get(new_b).check, ROOT_ID as i32);

    // The old cells are back on the free list.
    assert!(nodes.get(a).is_free());
    assert_ne!(a, new_a);

    // b's own child c must still point at b's *new* index.
    let b_base = nodes.get(new_b).base;
    let c_at = (b_base + alphabet.char_index(b'c') as i32) as u32;
    assert_eq!(c_at, c);
    assert_eq!(nodes.get(c).check, new_b as i32);
}
