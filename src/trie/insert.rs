//! Insert engine: walks a key from a starting node, branching off into a
//! fresh tail wherever the existing structure runs out, and splitting an
//! existing tail wherever two keys diverge partway through it.

use log::debug;

use crate::error::Result;

use super::alphabet::Alphabet;
use super::base;
use super::datastore::DataStore;
use super::freelist;
use super::nodes::{NodeStore, ROOT_ID};
use super::relocate;
use super::tail::TailBuffer;

/// Create (or reuse, if it already fits) a transition `c` from `node_id`,
/// returning the child's index.
pub fn add_transition(
    nodes: &mut NodeStore,
    alphabet: &Alphabet,
    node_id: u32,
    c: u8,
) -> Result<u32> {
    let node = nodes.get_node(node_id);
    let char_index = alphabet.char_index(c);

    let base = if node.base <= 0 {
        let base = base::find_new_base_for_char(nodes, char_index)?;
        nodes.set_base(node_id, base);
        base
    } else if !base::can_fit_char(nodes, node.base, char_index) {
        let mut char_indices: Vec<u32> = relocate::transitions_at(nodes, alphabet, node_id, node.base)
            .into_iter()
            .map(|b| alphabet.char_index(b))
            .collect();
        char_indices.push(char_index);
        char_indices.sort_unstable();
        char_indices.dedup();
        let new_base = base::find_new_base(nodes, &char_indices)?;
        debug!(
            "relocating node {} from base {} to {} ({} transitions)",
            node_id,
            node.base,
            new_base,
            char_indices.len()
        );
        relocate::relocate_base(nodes, alphabet, node_id, new_base)?;
        new_base
    } else {
        node.base
    };

    let index = (base + char_index as i32) as u32;
    super::nodes::make_room_for(nodes, alphabet.alphabet_size(), index)?;
    freelist::init_node(nodes, index);
    nodes.set_check(index, node_id as i32);
    Ok(index)
}

/// Branch a brand-new terminal off `from_index` for `suffix` (its first
/// byte becomes the transition; anything after is appended to the tail
/// buffer). `suffix` may be empty, meaning the key ends exactly here.
pub fn separate_tail(
    nodes: &mut NodeStore,
    alphabet: &Alphabet,
    tail: &mut TailBuffer,
    data: &mut DataStore,
    from_index: u32,
    suffix: &[u8],
    payload: u32,
) -> Result<u32> {
    let c = suffix.first().copied().unwrap_or(0);
    let index = add_transition(nodes, alphabet, from_index, c)?;
    let remaining: &[u8] = if c != 0 { &suffix[1..] } else { suffix };
    let tail_offset = tail.append(remaining);
    let data_index = data.push(tail_offset, payload);
    nodes.set_base(index, -(data_index as i32));
    Ok(index)
}

fn common_prefix_len(a: &[u8], b: &[u8]) -> usize {
    a.iter().zip(b.iter()).take_while(|(x, y)| x == y).count()
}

/// `true` if `node_id` currently has any transition, including the
/// reserved NUL/terminator one.
pub fn has_children(nodes: &NodeStore, alphabet: &Alphabet, node_id: u32) -> bool {
    let node = nodes.get_node(node_id);
    if node.base <= 0 {
        return false;
    }
    let nul_index = node.base;
    if nul_index >= 0 && (nul_index as usize) < nodes.len() && nodes.get(nul_index as u32).check == node_id as i32 {
        return true;
    }
    alphabet.bytes().iter().any(|&c| {
        let index = node.base + alphabet.char_index(c) as i32;
        index >= 0 && (index as usize) < nodes.len() && nodes.get(index as u32).check == node_id as i32
    })
}

/// Undo a partially built chain on insert failure: free `created` nodes
/// most-recently-created first, stopping at the first one that still has
/// a child of its own, or at `stop_at`.
pub fn prune(nodes: &mut NodeStore, alphabet: &Alphabet, stop_at: u32, created: &[u32]) {
    for &id in created.iter().rev() {
        if id == stop_at || has_children(nodes, alphabet, id) {
            break;
        }
        freelist::free_node(nodes, id);
    }
}

/// Split the tail stored at `old_node_id` so the existing key and the
/// new one sharing its prefix both get their own terminal.
pub fn tail_merge(
    nodes: &mut NodeStore,
    alphabet: &Alphabet,
    tail: &mut TailBuffer,
    data: &mut DataStore,
    old_node_id: u32,
    new_suffix: &[u8],
    payload: u32,
) -> Result<u32> {
    let old_data_index = (-nodes.get(old_node_id).base) as u32;
    let (old_tail_offset, _) = data.get(old_data_index);
    let old_tail = tail.str_at(old_tail_offset).to_vec();

    let common = common_prefix_len(&old_tail, new_suffix);
    if common == old_tail.len() && common == new_suffix.len() {
        // The key being added already exists with this exact suffix.
        return Ok(old_node_id);
    }

    let mut node_id = old_node_id;
    let mut created = Vec::with_capacity(common + 2);
    for &c in &old_tail[..common] {
        match add_transition(nodes, alphabet, node_id, c) {
            Ok(next) => {
                created.push(next);
                node_id = next;
            }
            Err(e) => {
                prune(nodes, alphabet, old_node_id, &created);
                return Err(e);
            }
        }
    }

    let old_c = old_tail.get(common).copied().unwrap_or(0);
    let old_rest: &[u8] = if old_c != 0 { &old_tail[common + 1..] } else { &[] };

    let old_index = match add_transition(nodes, alphabet, node_id, old_c) {
        Ok(idx) => idx,
        Err(e) => {
            prune(nodes, alphabet, old_node_id, &created);
            return Err(e);
        }
    };
    created.push(old_index);
    tail.write_at(old_rest, old_tail_offset);
    nodes.set_base(old_index, -(old_data_index as i32));

    let new_rest = &new_suffix[common..];
    match separate_tail(nodes, alphabet, tail, data, node_id, new_rest, payload) {
        Ok(idx) => Ok(idx),
        Err(e) => {
            prune(nodes, alphabet, old_node_id, &created);
            Err(e)
        }
    }
}

fn add_to_node(
    nodes: &mut NodeStore,
    alphabet: &Alphabet,
    tail: &mut TailBuffer,
    data: &mut DataStore,
    start_id: u32,
    key: &[u8],
) -> AddStep {
    let mut node_id = start_id;
    let mut i = 0;
    loop {
        let node = nodes.get_node(node_id);
        let c = if i < key.len() { key[i] } else { 0 };
        let next_id = if node.base > 0 {
            (node.base + alphabet.char_index(c) as i32) as u32
        } else {
            0
        };
        let next = nodes.get_node(next_id);

        if next.check != node_id as i32 {
            return AddStep::Separate { from: node_id, suffix_start: i };
        }
        if next.base < 0 {
            return AddStep::Merge { old_node_id: next_id, suffix_start: i + (c != 0) as usize };
        }

        node_id = next_id;
        i += 1;
    }
}

enum AddStep {
    Separate { from: u32, suffix_start: usize },
    Merge { old_node_id: u32, suffix_start: usize },
}

fn resolve_add(
    nodes: &mut NodeStore,
    alphabet: &Alphabet,
    tail: &mut TailBuffer,
    data: &mut DataStore,
    start_id: u32,
    key: &[u8],
    payload: u32,
) -> Result<u32> {
    match add_to_node(nodes, alphabet, tail, data, start_id, key) {
        AddStep::Separate { from, suffix_start } => {
            separate_tail(nodes, alphabet, tail, data, from, &key[suffix_start..], payload)
        }
        AddStep::Merge { old_node_id, suffix_start } => {
            tail_merge(nodes, alphabet, tail, data, old_node_id, &key[suffix_start..], payload)
        }
    }
}

/// Insert `key` with `payload`, returning its terminal's node index.
/// Re-inserting a key already present with the same bytes is a silent
/// no-op that returns the existing terminal. An empty `key` is also a
/// silent no-op, returning `0`.
pub fn add(
    nodes: &mut NodeStore,
    alphabet: &Alphabet,
    tail: &mut TailBuffer,
    data: &mut DataStore,
    key: &[u8],
    payload: u32,
) -> Result<u32> {
    if key.is_empty() {
        return Ok(0);
    }
    resolve_add(nodes, alphabet, tail, data, ROOT_ID, key, payload)
}

/// Insert `key` (typically already reversed by the caller) under a
/// distinguished NUL-prefixed branch off the root, so suffix entries
/// never collide with ordinary keys inserted via [`add`]. An empty
/// `key` is a silent no-op, returning `0`.
pub fn add_suffix(
    nodes: &mut NodeStore,
    alphabet: &Alphabet,
    tail: &mut TailBuffer,
    data: &mut DataStore,
    key: &[u8],
    payload: u32,
) -> Result<u32> {
    if key.is_empty() {
        return Ok(0);
    }
    let root = nodes.get_node(ROOT_ID);
    let existing = if root.base > 0 {
        (root.base + alphabet.char_index(0) as i32) as u32
    } else {
        0
    };
    let branch = if nodes.get_node(existing).check == ROOT_ID as i32 {
        existing
    } else {
        add_transition(nodes, alphabet, ROOT_ID, 0)?
    };
    resolve_add(nodes, alphabet, tail, data, branch, key, payload)
}

#[cfg(test)]
#[path = "insert_test.rs"]
mod insert_test;
