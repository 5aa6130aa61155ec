//! Collections indexed by symbol sequences.
//!
//! Currently a single family:
//! - `trie`: per-symbol prefix trees.

pub mod trie;

pub use trie::Trie;
