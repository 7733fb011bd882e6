//! Base allocator: finds a base `b` such that every transition byte a
//! node must accommodate lands on a currently-free cell.

use crate::error::Result;

use super::freelist;
use super::nodes::{NodeStore, FREE_LIST_ID, TRIE_MAX_INDEX, TRIE_POOL_BEGIN};

/// `true` if `base + char_index(c)` is free (and in range) for every `c`
/// in `char_indices`.
fn can_fit(nodes: &NodeStore, base: i32, char_indices: &[u32]) -> bool {
    for &ci in char_indices {
        if base as i64 > TRIE_MAX_INDEX as i64 - ci as i64 {
            return false;
        }
        let index = (base + ci as i32) as u32;
        if index as usize >= nodes.len() || !nodes.get(index).is_free() {
            return false;
        }
    }
    true
}

/// Find a base admitting every char index in `char_indices` (ascending,
/// as produced by [`super::alphabet::Alphabet::present_transitions`]).
/// Walks the free list, extending the store when the search runs past
/// its tail, until a fit is found.
pub fn find_new_base(nodes: &mut NodeStore, char_indices: &[u32]) -> Result<i32> {
    let first_char_index = char_indices[0];
    let threshold = first_char_index + TRIE_POOL_BEGIN;

    let mut index = (-nodes.get(FREE_LIST_ID).check) as u32;
    while index != FREE_LIST_ID && index < threshold {
        index = (-nodes.get(index).check) as u32;
    }

    if index == FREE_LIST_ID {
        index = threshold;
        loop {
            freelist::extend(nodes, index)?;
            if nodes.get(index).check < 0 {
                break;
            }
            index += 1;
        }
    }

    while !can_fit(nodes, index as i32 - first_char_index as i32, char_indices) {
        let mut node = nodes.get(index);
        if (-node.check) as u32 == FREE_LIST_ID {
            let alphabet_size = char_indices.len().max(1);
            let to = nodes.len() as u32 + alphabet_size as u32;
            freelist::extend(nodes, to)?;
            node = nodes.get(index);
        }
        index = (-node.check) as u32;
    }

    Ok(index as i32 - first_char_index as i32)
}

/// Find a base for a single fresh transition byte, used by
/// `add_transition` when a node has no base yet.
pub fn find_new_base_for_char(nodes: &mut NodeStore, char_index: u32) -> Result<i32> {
    find_new_base(nodes, &[char_index])
}

/// `true` if `base + char_index` alone is free (and in range) — the
/// single-transition case `add_transition` checks before deciding
/// whether a node's existing base still works.
pub fn can_fit_char(nodes: &NodeStore, base: i32, char_index: u32) -> bool {
    can_fit(nodes, base, &[char_index])
}

#[cfg(test)]
#[path = "base_test.rs"]
mod base_test;
