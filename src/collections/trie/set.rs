use super::node::Node;

/// Index of the root node within the arena. The root represents the
/// empty prefix and exists for the whole lifetime of the trie.
const ROOT: usize = 0;

/// A set of symbol sequences stored as a per-symbol trie (prefix tree).
///
/// Sequences sharing a prefix share nodes, so inserting or looking up a
/// sequence costs time proportional to its length, not to the number of
/// sequences stored. Nodes live in a flat arena and are linked by
/// index, which keeps traversal iterative and drops the whole tree as
/// one allocation.
///
/// Two policies worth calling out:
/// - The empty sequence is never a member: inserting it is a no-op that
///   allocates nothing and does not mark the root.
/// - [`common_prefix`](Trie::common_prefix) treats a terminal node as a
///   hard stop. A sequence that is a strict prefix of every longer one
///   bounds the common prefix at its own end.
///
/// The set only grows; there is no removal operation.
pub struct Trie<S> {
    /// Arena of nodes. The root always lives at index `ROOT`.
    nodes: Vec<Node<S>>,
    /// Number of distinct sequences in the set.
    len: usize,
}

impl<S> Trie<S> {
    /// Creates a new empty trie.
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::new()],
            len: 0,
        }
    }

    /// Creates a new empty trie with room for `capacity` nodes.
    pub fn with_capacity(capacity: usize) -> Self {
        let mut nodes = Vec::with_capacity(capacity.max(1));
        nodes.push(Node::new());
        Self { nodes, len: 0 }
    }

    /// Returns the number of distinct sequences in the set.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if no sequence has been inserted.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of nodes in the arena, root included.
    #[cfg(test)]
    pub(crate) fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Allocates a fresh node and returns its index.
    fn alloc_node(&mut self) -> usize {
        let idx = self.nodes.len();
        self.nodes.push(Node::new());
        #[cfg(feature = "tracing")]
        tracing::trace!(node = idx, "allocated trie node");
        idx
    }
}

impl<S: Ord> Trie<S> {
    /// Inserts a sequence into the set.
    /// Returns whether the sequence was newly inserted.
    ///
    /// The empty sequence is not a member of any trie; inserting it is
    /// a no-op and returns `false`. Otherwise the path for the sequence
    /// is linked into the tree, creating missing nodes on the way down,
    /// and the node reached by the last symbol is marked terminal.
    /// Re-inserting a sequence leaves the set unchanged.
    pub fn insert<I>(&mut self, sequence: I) -> bool
    where
        I: IntoIterator<Item = S>,
    {
        let mut symbols = sequence.into_iter();
        let Some(mut symbol) = symbols.next() else {
            return false;
        };

        let mut curr = ROOT;
        loop {
            let next = match self.nodes[curr].child(&symbol) {
                Some(idx) => idx,
                None => {
                    let idx = self.alloc_node();
                    self.nodes[curr].add_child(symbol, idx);
                    idx
                }
            };
            curr = next;
            match symbols.next() {
                Some(s) => symbol = s,
                None => break,
            }
        }

        // Only the node reached by the final symbol is marked, even if
        // it already existed from a previous longer insertion.
        let node = &mut self.nodes[curr];
        if node.terminal {
            false
        } else {
            node.terminal = true;
            self.len += 1;
            #[cfg(feature = "tracing")]
            tracing::trace!(len = self.len, "inserted new sequence");
            true
        }
    }

    /// Returns true if the exact sequence was previously inserted.
    ///
    /// A sequence is a member iff following its symbols from the root
    /// lands on a terminal node. The empty sequence is never a member.
    pub fn contains<I>(&self, sequence: I) -> bool
    where
        I: IntoIterator<Item = S>,
    {
        let mut curr = ROOT;
        let mut consumed_any = false;
        for symbol in sequence {
            consumed_any = true;
            match self.nodes[curr].child(&symbol) {
                Some(idx) => curr = idx,
                None => return false,
            }
        }
        consumed_any && self.nodes[curr].terminal
    }
}

impl<S: Clone> Trie<S> {
    /// Returns the longest prefix shared by every inserted sequence.
    ///
    /// Walks down from the root, appending the symbol of the single
    /// outgoing edge at each step, and stops at the first node that
    /// either branches (child count other than one) or is terminal. A
    /// terminal node stops the walk even when it has exactly one child:
    /// the sequence ending there cannot have anything past its own end
    /// as a prefix.
    ///
    /// An empty trie yields the empty sequence; a trie holding a single
    /// sequence yields that sequence in full.
    pub fn common_prefix(&self) -> Vec<S> {
        let mut prefix = Vec::new();
        let mut curr = ROOT;
        loop {
            let node = &self.nodes[curr];
            if node.children.len() != 1 || node.terminal {
                return prefix;
            }
            let (symbol, child) = &node.children[0];
            prefix.push(symbol.clone());
            curr = *child;
        }
    }
}

impl Trie<char> {
    /// Inserts the characters of `s`.
    /// Returns whether the sequence was newly inserted.
    pub fn insert_str(&mut self, s: &str) -> bool {
        self.insert(s.chars())
    }

    /// Returns true if the exact string was previously inserted.
    pub fn contains_str(&self, s: &str) -> bool {
        self.contains(s.chars())
    }

    /// Returns the longest shared prefix as a `String`.
    pub fn common_prefix_string(&self) -> String {
        self.common_prefix().into_iter().collect()
    }
}

impl<S> Default for Trie<S> {
    fn default() -> Self {
        Self::new()
    }
}
