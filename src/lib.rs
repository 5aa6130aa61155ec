//! # `trellis` - Prefix Tree Collections
//!
//! A small toolkit of prefix-tree (trie) data structures, generic over
//! the symbol type of the sequences they index. Sequences sharing a
//! prefix share storage, so prefix queries cost time proportional to
//! the query length rather than the set size.
//!
//! ## Design
//!
//! - **Arena-backed nodes**: nodes live in a flat arena owned by the
//!   trie and are linked by index, so dropping a trie frees a single
//!   allocation instead of recursing through the tree.
//! - **Sorted children**: each node keeps its outgoing edges sorted by
//!   symbol, making traversal order deterministic and child lookup a
//!   binary search.
//! - **Total operations**: insertion and queries cannot fail; there is
//!   no error type anywhere in the public API.
//!
//! ## Example
//!
//! ```rust
//! use trellis::Trie;
//!
//! let mut trie = Trie::new();
//! trie.insert("flower".chars());
//! trie.insert("flow".chars());
//! trie.insert("flown".chars());
//!
//! let prefix: String = trie.common_prefix().into_iter().collect();
//! assert_eq!(prefix, "flow");
//! ```

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![forbid(unsafe_code)]

pub mod collections;

pub use collections::trie::Trie;
