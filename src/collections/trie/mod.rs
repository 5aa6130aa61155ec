//! Per-symbol trie (prefix tree) implementation.
//!
//! A trie stores a set of symbol sequences as a rooted tree where each
//! edge is labeled with one symbol; the path from the root to a node
//! spells the prefix that node represents. Nodes are held in an arena
//! owned by the trie and linked by index.

pub mod node;
pub mod set;

pub use set::Trie;
