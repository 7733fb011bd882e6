//! A double-array trie: a compact, index-addressed associative map from
//! byte-string keys to small integer payloads.
//!
//! The trie stores transitions in two parallel integer arrays (`base`
//! and `check`) rather than per-node pointers, so traversal is a single
//! array index per byte consumed. Long unbranching runs of keys are
//! compressed into a shared tail buffer instead of one node per byte,
//! keeping the node array small relative to the keys stored.
//!
//! This crate covers insertion, exact and prefix lookup, suffix
//! indexing (via reversed keys), and a binary on-disk form. It does not
//! cover deletion, concurrent mutation, or approximate matching — see
//! [`trie`] for the full component breakdown.

mod error;
pub mod trie;
mod util;

pub use crate::error::{Error, Result};
pub use crate::trie::{Alphabet, Config, Trie};
