//! A double-array trie: a compact, index-addressed associative map from
//! byte-string keys to `u32` payloads, built on two parallel integer
//! arrays (`base`/`check`) plus a tail buffer for suffix compression.
//!
//! See the individual submodules for each component: [`alphabet`] maps
//! the caller's byte alphabet to dense transition indices, [`nodes`] and
//! [`freelist`] hold the cell array and its embedded free list,
//! [`tail`] and [`datastore`] hold compressed suffixes and payloads,
//! [`base`] and [`relocate`] grow the structure on collision, [`insert`]
//! and [`lookup`] are the two walks, and [`codec`] is the on-disk form.

pub mod alphabet;
pub mod base;
pub mod codec;
pub mod config;
pub mod datastore;
pub mod freelist;
pub mod insert;
pub mod lookup;
pub mod nodes;
pub mod relocate;
pub mod tail;

use crate::error::Result;
use crate::util::reverse_utf8;

pub use alphabet::Alphabet;
pub use config::Config;
pub use nodes::{FREE_LIST_ID, NULL_ID, ROOT_ID, TRIE_POOL_BEGIN, TRIE_SIGNATURE};

use datastore::DataStore;
use nodes::{Node, NodeStore};
use tail::TailBuffer;

/// Maps byte-string keys to `u32` payloads using a double-array trie.
///
/// Construction fixes the alphabet: every key passed to [`Trie::insert`]
/// or looked up must be drawn from the bytes given to [`Trie::new`], with
/// the implicit exception of the reserved NUL byte, which a caller's
/// alphabet must not include.
#[derive(Clone, Debug)]
pub struct Trie {
    alphabet: Alphabet,
    nodes: NodeStore,
    tail: TailBuffer,
    data: DataStore,
}

impl Trie {
    /// Build an empty trie over `alphabet_bytes` with default sizing.
    pub fn new(alphabet_bytes: &[u8]) -> Result<Trie> {
        Trie::with_config(alphabet_bytes, Config::default())
    }

    /// Build an empty trie, overriding the default initial capacities.
    pub fn with_config(alphabet_bytes: &[u8], config: Config) -> Result<Trie> {
        let alphabet = Alphabet::new(alphabet_bytes)?;

        let mut nodes = NodeStore::with_capacity(config.node_chunk.max(3));
        nodes.push(Node::default());
        nodes.push(Node { base: -1, check: -1 });
        nodes.push(Node {
            base: TRIE_POOL_BEGIN as i32,
            check: 0,
        });

        Ok(Trie {
            alphabet,
            nodes,
            tail: TailBuffer::with_capacity(config.tail_initial),
            data: DataStore::with_capacity(config.data_initial),
        })
    }

    /// Associate `key` with `payload`. Re-inserting a key already present
    /// with the exact same bytes is a no-op (first write wins). An empty
    /// `key` is also a silent no-op, returning `0`.
    pub fn insert(&mut self, key: &[u8], payload: u32) -> Result<u32> {
        insert::add(
            &mut self.nodes,
            &self.alphabet,
            &mut self.tail,
            &mut self.data,
            key,
            payload,
        )
    }

    /// Index `key` by its reversed form under a separate branch, so a
    /// later [`Trie::lookup_handle`] over a reversed query can find keys
    /// by suffix. `key` is reversed by Unicode scalar value, not by byte.
    /// An empty `key` is a silent no-op, returning `0`.
    pub fn insert_suffix(&mut self, key: &[u8], payload: u32) -> Result<u32> {
        let reversed = reverse_utf8(key);
        insert::add_suffix(
            &mut self.nodes,
            &self.alphabet,
            &mut self.tail,
            &mut self.data,
            &reversed,
            payload,
        )
    }

    /// Exact-match lookup: the payload stored for `key`, or `None` if
    /// `key` was never inserted.
    pub fn get(&self, key: &[u8]) -> Option<u32> {
        let handle = self.lookup_handle(key, true)?;
        self.payload_at(handle)
    }

    /// `true` if some stored key has `key` as a prefix (or equals it).
    pub fn contains_prefix(&self, key: &[u8]) -> bool {
        self.lookup_handle(key, false).is_some()
    }

    /// Walk `key` from the root, returning a stable node handle on a hit.
    /// With `whole_word`, `key` must match a stored key exactly; without
    /// it, `key` only needs to be consistent with some longer stored key
    /// (a prefix match).
    pub fn lookup_handle(&self, key: &[u8], whole_word: bool) -> Option<u32> {
        let handle = lookup::get(&self.nodes, &self.alphabet, &self.tail, &self.data, key, whole_word);
        if handle == 0 {
            None
        } else {
            Some(handle)
        }
    }

    /// Resolve the payload at a handle returned by [`Trie::lookup_handle`].
    /// `None` if the handle does not denote a terminal node, which can
    /// happen for a `whole_word = false` handle that lands on a branching
    /// node rather than a key's own terminal.
    pub fn payload_at(&self, handle: u32) -> Option<u32> {
        lookup::payload_at(&self.nodes, &self.data, handle)
    }

    /// Number of distinct keys stored (via [`Trie::insert`] or
    /// [`Trie::insert_suffix`]).
    pub fn len(&self) -> usize {
        self.data.len() - 1
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// Write this trie to `path` in this crate's binary format.
    pub fn save(&self, path: &str) -> Result<()> {
        codec::save(path, &self.alphabet, &self.nodes, &self.tail, &self.data)
    }

    /// Read a trie previously written by [`Trie::save`].
    pub fn load(path: &str) -> Result<Trie> {
        let (alphabet, nodes, tail, data) = codec::load(path)?;
        Ok(Trie {
            alphabet,
            nodes,
            tail,
            data,
        })
    }
}
