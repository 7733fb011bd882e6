//! Free list: the circular, doubly-linked list of unused cells embedded
//! in the node store via the sign-encoded `base`/`check` fields.
//!
//! Ordering invariant: the list is always strictly ascending by index,
//! anchored at [`FREE_LIST_ID`]. The base allocator (`base.rs`) and the
//! relocator (`relocate.rs`) both depend on this holding.

use crate::err_at;
use crate::error::Result;

use super::nodes::{Node, NodeStore, FREE_LIST_ID, TRIE_MAX_INDEX};

/// Append free cells up to and including `to_index`, splicing the new
/// run onto the tail of the free list. No-op if `to_index` is already
/// covered by the store.
pub fn extend(nodes: &mut NodeStore, to_index: u32) -> Result<()> {
    if to_index == 0 || to_index >= TRIE_MAX_INDEX {
        return err_at!(IndexOverflow, msg: "cannot extend trie past index {}", to_index);
    }
    if (to_index as usize) < nodes.len() {
        return Ok(());
    }

    let new_begin = nodes.len() as u32;
    for i in new_begin..=to_index {
        let ii = i as i32;
        nodes.push(Node {
            base: -(ii - 1),
            check: -(ii + 1),
        });
    }

    let free_tail = -nodes.get(FREE_LIST_ID).base;
    nodes.set_check(free_tail as u32, -(new_begin as i32));
    nodes.set_base(new_begin, -free_tail);
    nodes.set_check(to_index, -(FREE_LIST_ID as i32));
    nodes.set_base(FREE_LIST_ID, -(to_index as i32));

    Ok(())
}

/// Unlink `index` from the free list; `index` must currently be free.
pub fn init_node(nodes: &mut NodeStore, index: u32) {
    let node = nodes.get(index);
    let prev = -node.base;
    let next = -node.check;

    nodes.set_check(prev as u32, -next);
    nodes.set_base(next as u32, -prev);
}

/// Splice `index` back into the free list, preserving ascending order.
/// `index` must currently be allocated.
pub fn free_node(nodes: &mut NodeStore, index: u32) {
    let mut i = -nodes.get(FREE_LIST_ID).check;
    while i as u32 != FREE_LIST_ID && (i as u32) < index {
        i = -nodes.get(i as u32).check;
    }

    let prev = -nodes.get(i as u32).base;

    nodes.set_node(
        index,
        Node {
            base: -prev,
            check: -i,
        },
    );
    nodes.set_check(prev as u32, -(index as i32));
    nodes.set_base(i as u32, -(index as i32));
}

#[cfg(test)]
#[path = "freelist_test.rs"]
mod freelist_test;
