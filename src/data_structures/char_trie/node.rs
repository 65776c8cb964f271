//! Node implementation for the character trie.
//!
//! A node owns its children outright; the only path to a node is the chain
//! of characters leading to it from the root.

use fnv::FnvHashMap;

/// A single vertex of a [`CharTrie`](super::CharTrie).
///
/// `value` is `Some` exactly when `is_terminal` is set.
#[derive(Debug)]
pub struct TrieNode<V> {
    /// Map of characters to owned child nodes
    pub children: FnvHashMap<char, TrieNode<V>>,

    /// Whether this node represents the end of an inserted key
    pub is_terminal: bool,

    /// Value stored by the most recent insertion ending here
    pub value: Option<V>,
}

impl<V> TrieNode<V> {
    /// Creates a new empty trie node.
    pub fn new() -> Self {
        Self {
            children: FnvHashMap::default(),
            is_terminal: false,
            value: None,
        }
    }

    /// Returns the child reached by `c`, if any.
    pub fn child(&self, c: char) -> Option<&TrieNode<V>> {
        self.children.get(&c)
    }

    /// Returns the child reached by `c`, creating it first if needed.
    ///
    /// The flag tells the caller whether a new node was allocated.
    pub fn child_or_insert(&mut self, c: char) -> (&mut TrieNode<V>, bool) {
        let created = !self.children.contains_key(&c);
        let child = self.children.entry(c).or_insert_with(TrieNode::new);
        (child, created)
    }

    /// Children sorted by their edge character.
    pub fn sorted_children(&self) -> Vec<(char, &TrieNode<V>)> {
        let mut children: Vec<_> = self.children.iter().map(|(c, n)| (*c, n)).collect();
        children.sort_unstable_by_key(|(c, _)| *c);
        children
    }
}

impl<V> Default for TrieNode<V> {
    fn default() -> Self {
        Self::new()
    }
}
