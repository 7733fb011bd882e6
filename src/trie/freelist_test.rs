use super::*;

fn fresh_store() -> NodeStore {
    let mut nodes = NodeStore::with_capacity(8);
    nodes.push(Node::default());
    nodes.push(Node { base: -1, check: -1 });
    nodes.push(Node { base: 3, check: 0 });
    nodes
}

#[test]
fn test_extend_links_new_cells() {
    let mut nodes = fresh_store();
    extend(&mut nodes, 6).unwrap();
    assert_eq!(nodes.len(), 7);

    // Walk the free list from the head and confirm every index 3..=6 is
    // visited exactly once before returning to the head.
    let mut seen = Vec::new();
    let mut i = (-nodes.get(FREE_LIST_ID).check) as u32;
    while i != FREE_LIST_ID {
        seen.push(i);
        i = (-nodes.get(i).check) as u32;
    }
    assert_eq!(seen, vec![3, 4, 5, 6]);
}

#[test]
fn test_extend_is_idempotent_within_bounds() {
    let mut nodes = fresh_store();
    extend(&mut nodes, 5).unwrap();
    let len_before = nodes.len();
    extend(&mut nodes, 4).unwrap();
    assert_eq!(nodes.len(), len_before);
}

#[test]
fn test_init_then_free_restores_the_list() {
    let mut nodes = fresh_store();
    extend(&mut nodes, 6).unwrap();

    init_node(&mut nodes, 4);
    nodes.set_node(4, Node { base: 99, check: 2 });

    let mut seen = Vec::new();
    let mut i = (-nodes.get(FREE_LIST_ID).check) as u32;
    while i != FREE_LIST_ID {
        seen.push(i);
        i = (-nodes.get(i).check) as u32;
    }
    assert_eq!(seen, vec![3, 5, 6]);

    free_node(&mut nodes, 4);
    let mut seen = Vec::new();
    let mut i = (-nodes.get(FREE_LIST_ID).check) as u32;
    while i != FREE_LIST_ID {
        seen.push(i);
        i = (-nodes.get(i).check) as u32;
    }
    assert_eq!(seen, vec![3, 4, 5, 6]);
}

#[test]
fn test_extend_rejects_runaway_index() {
    let mut nodes = fresh_store();
    assert!(extend(&mut nodes, TRIE_MAX_INDEX).is_err());
}
