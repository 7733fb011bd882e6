//! Ambient tuning knobs, kept separate from the algorithm so defaults can
//! be overridden without touching component code.

/// Construction-time sizing hints. None of these affect correctness —
/// only how many reallocations a build does along the way.
#[derive(Clone, Copy, Debug)]
pub struct Config {
    /// Initial node-store capacity, in cells.
    pub node_chunk: usize,
    /// Initial tail-buffer capacity, in bytes.
    pub tail_initial: usize,
    /// Initial data-store capacity, in records.
    pub data_initial: usize,
}

impl Default for Config {
    fn default() -> Config {
        Config {
            node_chunk: 256,
            tail_initial: 256,
            data_initial: 64,
        }
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;
