/// A node in the trie.
///
/// Each node contains:
/// - A list of outgoing edges, one symbol each, sorted by symbol.
/// - A terminal flag, set iff some inserted sequence ends exactly here.
///
/// Edges hold `usize` links to other nodes within the trie's arena.
#[derive(Debug, Clone)]
pub struct Node<S> {
    /// Outgoing edges, sorted by symbol. Maps symbol -> node index.
    pub(crate) children: Vec<(S, usize)>,
    /// True iff some inserted sequence ends exactly at this node.
    pub(crate) terminal: bool,
}

impl<S> Node<S> {
    /// Creates a new empty, non-terminal node.
    pub(crate) fn new() -> Self {
        Self {
            children: Vec::new(),
            terminal: false,
        }
    }
}

impl<S: Ord> Node<S> {
    /// Adds an edge to the node.
    /// Maintains the sorted order of children.
    pub(crate) fn add_child(&mut self, symbol: S, child_idx: usize) {
        match self.children.binary_search_by(|(s, _)| s.cmp(&symbol)) {
            // Insertion only adds an edge after a failed lookup, so the
            // symbol is never already present.
            Ok(pos) => self.children[pos].1 = child_idx,
            Err(pos) => self.children.insert(pos, (symbol, child_idx)),
        }
    }

    /// Finds the child index reached by a given symbol.
    pub(crate) fn child(&self, symbol: &S) -> Option<usize> {
        self.children
            .binary_search_by(|(s, _)| s.cmp(symbol))
            .ok()
            .map(|pos| self.children[pos].1)
    }
}

impl<S> Default for Node<S> {
    fn default() -> Self {
        Self::new()
    }
}
