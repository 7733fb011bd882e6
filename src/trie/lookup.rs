//! Lookup engine: a read-only walk of transitions, resolving a tail
//! comparison once a terminal is reached.

use super::alphabet::Alphabet;
use super::datastore::DataStore;
use super::nodes::{NodeStore, ROOT_ID};
use super::tail::TailBuffer;

/// Walk `key` from the root. Returns the trie node index reached on a
/// hit (always non-zero — a stable handle the caller may keep), or 0 on
/// a miss.
///
/// With `whole_word`, the walk is extended one step past the last key
/// byte to match the implicit NUL terminator, so `"ab"` does not
/// falsely match a stored `"abc"`; the stored tail must then match the
/// query remainder exactly (same length, same bytes). Without
/// `whole_word`, the stored tail only needs to start with the query
/// remainder — a prefix-lookup match.
pub fn get(
    nodes: &NodeStore,
    alphabet: &Alphabet,
    tail: &TailBuffer,
    data: &DataStore,
    key: &[u8],
    whole_word: bool,
) -> u32 {
    let mut node_id = ROOT_ID;
    let mut node = nodes.get_node(ROOT_ID);
    let steps = if whole_word { key.len() + 1 } else { key.len() };

    for i in 0..steps {
        let c = if i < key.len() { key[i] } else { 0 };
        let next_id = (node.base + alphabet.char_index(c) as i32) as u32;
        let next = nodes.get_node(next_id);

        if next.check != node_id as i32 {
            return 0;
        }

        if next.base < 0 {
            let data_index = (-next.base) as u32;
            let (tail_offset, _payload) = data.get(data_index);
            let current_tail = tail.str_at(tail_offset);
            let remaining: &[u8] = if c == 0 { &[] } else { &key[i + 1..] };

            let matched = if whole_word {
                remaining.len() == current_tail.len() && remaining == current_tail
            } else {
                remaining.len() <= current_tail.len() && current_tail[..remaining.len()] == *remaining
            };

            return if matched { next_id } else { 0 };
        }

        node_id = next_id;
        node = next;
    }

    node_id
}

/// Resolve the payload stored at a terminal handle returned by [`get`].
/// `None` if `handle` does not denote a terminal node — this is expected
/// for handles returned by a non-`whole_word` lookup that lands on a
/// branching (internal) node rather than the key's own terminal.
pub fn payload_at(nodes: &NodeStore, data: &DataStore, handle: u32) -> Option<u32> {
    if handle as usize >= nodes.len() {
        return None;
    }
    let node = nodes.get(handle);
    if node.base < 0 {
        Some(data.get((-node.base) as u32).1)
    } else {
        None
    }
}

#[cfg(test)]
#[path = "lookup_test.rs"]
mod lookup_test;
