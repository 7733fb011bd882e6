//! Relocator: moves a node's children to a new base when a collision
//! makes the old base unable to accommodate a new transition, rewiring
//! grandchildren's `check` so descendants stay reachable.

use crate::error::Result;

use super::alphabet::Alphabet;
use super::freelist;
use super::nodes::{make_room_for, Node, NodeStore};

/// Children present at `node_id`, in ascending alphabet order — the
/// order both the base allocator and the relocator require to keep the
/// free list's ascending invariant intact while they splice cells in
/// and out.
pub fn transitions_at(nodes: &NodeStore, alphabet: &Alphabet, node_id: u32, base: i32) -> Vec<u8> {
    alphabet.present_transitions(|c| {
        let index = base + alphabet.char_index(c) as i32;
        index >= 0 && (index as u32 as usize) < nodes.len() && nodes.get(index as u32).check == node_id as i32
    })
}

/// Move `node_id`'s children from its current base to `new_base`.
pub fn relocate_base(
    nodes: &mut NodeStore,
    alphabet: &Alphabet,
    node_id: u32,
    new_base: i32,
) -> Result<()> {
    make_room_for(nodes, alphabet.alphabet_size(), new_base as u32)?;

    let old_base = nodes.get(node_id).base;
    let transitions = transitions_at(nodes, alphabet, node_id, old_base);

    for c in transitions {
        let char_index = alphabet.char_index(c) as i32;
        let old_index = (old_base + char_index) as u32;
        let new_index = (new_base + char_index) as u32;

        let old_transition = nodes.get(old_index);

        freelist::init_node(nodes, new_index);
        nodes.set_node(
            new_index,
            Node {
                base: old_transition.base,
                check: node_id as i32,
            },
        );

        // A tail pointer (base < 0) has no descendants to rewire.
        if old_transition.base > 0 {
            for &gc in alphabet.bytes() {
                let gc_index = old_transition.base + alphabet.char_index(gc) as i32;
                if gc_index >= 0
                    && (gc_index as u32 as usize) < nodes.len()
                    && nodes.get(gc_index as u32).check == old_index as i32
                {
                    nodes.set_check(gc_index as u32, new_index as i32);
                }
            }
        }

        freelist::free_node(nodes, old_index);
    }

    nodes.set_base(node_id, new_base);
    Ok(())
}

#[cfg(test)]
#[path = "relocate_test.rs"]
mod relocate_test;
