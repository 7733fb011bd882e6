//! Codec: a flat binary encoding of the trie's four stores, written and
//! read with `to_be_bytes`/`from_be_bytes` rather than pulling in a
//! byte-order crate.

use std::io::{Read, Write};

use log::{debug, info};

use crate::err_at;
use crate::error::Result;

use super::alphabet::Alphabet;
use super::datastore::DataStore;
use super::nodes::{Node, NodeStore, TRIE_SIGNATURE};
use super::tail::TailBuffer;
use crate::util::{open_file_r, open_file_w};

fn push_u32(out: &mut Vec<u8>, v: u32) {
    out.extend_from_slice(&v.to_be_bytes());
}

fn push_i32(out: &mut Vec<u8>, v: i32) {
    out.extend_from_slice(&v.to_be_bytes());
}

struct Cursor<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn new(bytes: &'a [u8]) -> Cursor<'a> {
        Cursor { bytes, pos: 0 }
    }

    fn take(&mut self, n: usize) -> Result<&'a [u8]> {
        if self.pos + n > self.bytes.len() {
            return err_at!(
                TruncatedInput,
                msg: "expected {} more bytes at offset {}, found {}",
                n,
                self.pos,
                self.bytes.len() - self.pos
            );
        }
        let slice = &self.bytes[self.pos..self.pos + n];
        self.pos += n;
        Ok(slice)
    }

    fn u32(&mut self) -> Result<u32> {
        Ok(u32::from_be_bytes(self.take(4)?.try_into().unwrap()))
    }

    fn i32(&mut self) -> Result<i32> {
        Ok(i32::from_be_bytes(self.take(4)?.try_into().unwrap()))
    }
}

/// Flatten the four stores into a single byte buffer.
pub fn encode(alphabet: &Alphabet, nodes: &NodeStore, tail: &TailBuffer, data: &DataStore) -> Vec<u8> {
    let mut out = Vec::new();
    push_u32(&mut out, TRIE_SIGNATURE);

    push_u32(&mut out, alphabet.alphabet_size() as u32);
    out.extend_from_slice(alphabet.bytes());

    push_u32(&mut out, nodes.len() as u32);
    for node in nodes.iter() {
        push_i32(&mut out, node.base);
        push_i32(&mut out, node.check);
    }

    push_u32(&mut out, data.len() as u32);
    for &(tail_offset, payload) in data.iter() {
        push_u32(&mut out, tail_offset);
        push_u32(&mut out, payload);
    }

    push_u32(&mut out, tail.len() as u32);
    out.extend_from_slice(tail.as_slice());

    out
}

/// Reverse of [`encode`]. Validates the signature and every length field
/// against the bytes actually available before trusting them.
pub fn decode(bytes: &[u8]) -> Result<(Alphabet, NodeStore, TailBuffer, DataStore)> {
    let mut cur = Cursor::new(bytes);

    let signature = cur.u32()?;
    if signature != TRIE_SIGNATURE {
        return err_at!(
            InvalidFormat,
            msg: "bad signature {:#010x}, expected {:#010x}",
            signature,
            TRIE_SIGNATURE
        );
    }

    let alphabet_size = cur.u32()? as usize;
    let alphabet_bytes = cur.take(alphabet_size)?;
    let alphabet = Alphabet::new(alphabet_bytes)?;

    let num_nodes = cur.u32()? as usize;
    let mut nodes = NodeStore::with_capacity(num_nodes);
    for _ in 0..num_nodes {
        let base = cur.i32()?;
        let check = cur.i32()?;
        nodes.push(Node { base, check });
    }

    let num_data = cur.u32()? as usize;
    let mut records = Vec::with_capacity(num_data);
    for _ in 0..num_data {
        let tail_offset = cur.u32()?;
        let payload = cur.u32()?;
        records.push((tail_offset, payload));
    }
    let mut data = DataStore::with_capacity(num_data);
    data.set_records(records);

    let tail_len = cur.u32()? as usize;
    let tail_bytes = cur.take(tail_len)?.to_vec();
    let mut tail = TailBuffer::with_capacity(tail_len);
    tail.set_bytes(tail_bytes);

    Ok((alphabet, nodes, tail, data))
}

pub fn save(
    path: &str,
    alphabet: &Alphabet,
    nodes: &NodeStore,
    tail: &TailBuffer,
    data: &DataStore,
) -> Result<()> {
    let bytes = encode(alphabet, nodes, tail, data);
    let mut file = open_file_w(path, true)?;
    file.write_all(&bytes)?;
    file.sync_all()?;
    info!("wrote trie to {} ({} bytes, {} nodes)", path, bytes.len(), nodes.len());
    Ok(())
}

pub fn load(path: &str) -> Result<(Alphabet, NodeStore, TailBuffer, DataStore)> {
    let mut file = open_file_r(path)?;
    let mut bytes = Vec::new();
    file.read_to_end(&mut bytes)?;
    debug!("read {} bytes from {}", bytes.len(), path);
    decode(&bytes)
}

#[cfg(test)]
#[path = "codec_test.rs"]
mod codec_test;
