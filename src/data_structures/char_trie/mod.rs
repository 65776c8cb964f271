//! Character Trie Implementation
//!
//! This module provides a prefix tree keyed by `char`, storing one value of a
//! caller-chosen type per inserted string. It answers exact lookups, prefix
//! existence tests, and enumerates its keys without recursion, so key length
//! is bounded only by memory.
//!
//! Nodes are owned by their parent and never shared. The trie only grows:
//! there is no removal, and re-inserting a key overwrites its value in place.

mod argument;
mod error;
mod node;

use std::fmt;

use serde_json::Value;

pub use argument::{expect_str, expect_str_sequence, type_name};
pub use error::TrieError;
pub(crate) use node::TrieNode;

/// Result type for trie operations
pub type TrieResult<T> = Result<T, TrieError>;

/// A prefix tree mapping strings to values of type `V`.
///
/// Each `char` of a key is one edge. The empty key is stored on the root.
///
/// Key features:
/// * Exact lookup returning the most recently inserted value
/// * Prefix tests that ignore whether the prefix itself was inserted
/// * Lexicographic key enumeration with an explicit stack
/// * Dynamic entry points that validate untyped arguments
pub struct CharTrie<V> {
    /// The root node of the trie
    root: TrieNode<V>,

    /// Number of distinct inserted keys
    len: usize,

    /// Number of nodes, root included
    node_count: usize,
}

impl<V> CharTrie<V> {
    /// Creates a new empty `CharTrie` holding only the root node.
    pub fn new() -> Self {
        Self {
            root: TrieNode::new(),
            len: 0,
            node_count: 1,
        }
    }

    /// Inserts a key-value pair into the trie.
    ///
    /// Nodes are created only for characters not already on the path. If the
    /// key was inserted before, its value is replaced and the tree shape is
    /// left as it was.
    ///
    /// # Arguments
    ///
    /// * `key` - The key to insert.
    /// * `value` - The value to associate with the key.
    ///
    /// # Returns
    ///
    /// The value previously stored under `key`, if any.
    pub fn put<K>(&mut self, key: K, value: V) -> Option<V>
    where
        K: AsRef<str>,
    {
        let key = key.as_ref();
        let mut node = &mut self.root;
        let mut created = 0;

        for c in key.chars() {
            let (next, is_new) = node.child_or_insert(c);
            if is_new {
                created += 1;
            }
            node = next;
        }

        let previous = node.value.replace(value);
        if !node.is_terminal {
            node.is_terminal = true;
            self.len += 1;
        }
        self.node_count += created;

        tracing::debug!(
            key,
            created_nodes = created,
            updated = previous.is_some(),
            "Inserted key"
        );

        previous
    }

    /// Inserts a key given as an untyped argument.
    ///
    /// # Returns
    ///
    /// * `Ok(Option<V>)` - The previously stored value, as for [`put`](Self::put).
    /// * `Err(TrieError::InvalidArgument)` - If `key` is not a string. The
    ///   trie is left untouched.
    pub fn try_put(&mut self, key: &Value, value: V) -> TrieResult<Option<V>> {
        let key = expect_str(key, "key")?;
        Ok(self.put(key, value))
    }

    /// Retrieves the value stored under `key`.
    ///
    /// Returns `None` when the path is missing, or when it exists but only
    /// as a prefix of other keys.
    pub fn get<K>(&self, key: K) -> Option<&V>
    where
        K: AsRef<str>,
    {
        self.find_node(key.as_ref())
            .filter(|node| node.is_terminal)
            .and_then(|node| node.value.as_ref())
    }

    /// Retrieves the value for an untyped key. Non-string keys never match.
    pub fn get_any(&self, key: &Value) -> Option<&V> {
        key.as_str().and_then(|key| self.get(key))
    }

    /// Checks if `key` was inserted.
    pub fn contains_key<K>(&self, key: K) -> bool
    where
        K: AsRef<str>,
    {
        self.get(key).is_some()
    }

    /// Checks whether any path starts with `prefix`.
    ///
    /// The last node need not be terminal. The empty prefix is always present.
    pub fn has_prefix<P>(&self, prefix: P) -> bool
    where
        P: AsRef<str>,
    {
        let found = self.find_node(prefix.as_ref()).is_some();
        tracing::trace!(prefix = prefix.as_ref(), found, "Prefix lookup");
        found
    }

    /// Prefix test for an untyped argument.
    ///
    /// # Returns
    ///
    /// * `Ok(bool)` - As for [`has_prefix`](Self::has_prefix).
    /// * `Err(TrieError::InvalidArgument)` - If `prefix` is not a string.
    pub fn try_has_prefix(&self, prefix: &Value) -> TrieResult<bool> {
        let prefix = expect_str(prefix, "prefix")?;
        Ok(self.has_prefix(prefix))
    }

    /// Iterates over every inserted key and its value in lexicographic order.
    pub fn words(&self) -> Words<'_, V> {
        Words::new(Some(&self.root), Vec::new())
    }

    /// Iterates over the inserted keys that start with `prefix`.
    pub fn words_with_prefix<P>(&self, prefix: P) -> Words<'_, V>
    where
        P: AsRef<str>,
    {
        let prefix = prefix.as_ref();
        Words::new(self.find_node(prefix), prefix.chars().collect())
    }

    /// Counts the inserted keys that start with `prefix`.
    pub fn count_with_prefix<P>(&self, prefix: P) -> usize
    where
        P: AsRef<str>,
    {
        self.words_with_prefix(prefix).count()
    }

    /// Returns the number of distinct keys in the trie.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Checks if no key has been inserted.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of nodes in the trie, including the root.
    pub fn node_count(&self) -> usize {
        self.node_count
    }

    pub(crate) fn root(&self) -> &TrieNode<V> {
        &self.root
    }

    /// Follows `path` from the root, one edge per character.
    fn find_node(&self, path: &str) -> Option<&TrieNode<V>> {
        path.chars().try_fold(&self.root, |node, c| node.child(c))
    }
}

impl<V> Default for CharTrie<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> fmt::Debug for CharTrie<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CharTrie")
            .field("len", &self.len)
            .field("node_count", &self.node_count)
            .finish()
    }
}

impl<K, V> Extend<(K, V)> for CharTrie<V>
where
    K: AsRef<str>,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.put(key, value);
        }
    }
}

impl<K, V> FromIterator<(K, V)> for CharTrie<V>
where
    K: AsRef<str>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut trie = Self::new();
        trie.extend(iter);
        trie
    }
}

impl<V> Drop for CharTrie<V> {
    // Detach children before each node drops so teardown never recurses.
    fn drop(&mut self) {
        let mut pending: Vec<TrieNode<V>> = self.root.children.drain().map(|(_, n)| n).collect();
        while let Some(mut node) = pending.pop() {
            pending.extend(node.children.drain().map(|(_, n)| n));
        }
    }
}

/// A pending visit in a [`Words`] traversal.
struct Frame<'a, V> {
    /// Path length of the parent when this frame was pushed
    depth: usize,
    /// Edge leading into `node`, `None` for the starting node
    edge: Option<char>,
    node: &'a TrieNode<V>,
}

/// Depth-first iterator over `(key, value)` pairs of a [`CharTrie`].
///
/// Created by [`CharTrie::words`] and [`CharTrie::words_with_prefix`].
pub struct Words<'a, V> {
    stack: Vec<Frame<'a, V>>,
    path: Vec<char>,
}

impl<'a, V> Words<'a, V> {
    fn new(start: Option<&'a TrieNode<V>>, prefix: Vec<char>) -> Self {
        let depth = prefix.len();
        Self {
            stack: start
                .map(|node| Frame {
                    depth,
                    edge: None,
                    node,
                })
                .into_iter()
                .collect(),
            path: prefix,
        }
    }
}

impl<'a, V> Iterator for Words<'a, V> {
    type Item = (String, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(Frame { depth, edge, node }) = self.stack.pop() {
            self.path.truncate(depth);
            if let Some(c) = edge {
                self.path.push(c);
            }

            // Reversed so the smallest edge is popped first
            let child_depth = self.path.len();
            self.stack.extend(node.sorted_children().into_iter().rev().map(
                |(c, child)| Frame {
                    depth: child_depth,
                    edge: Some(c),
                    node: child,
                },
            ));

            if let (true, Some(value)) = (node.is_terminal, node.value.as_ref()) {
                return Some((self.path.iter().collect(), value));
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_trie_basic_operations() {
        let mut trie = CharTrie::new();

        // Test initial state
        assert!(trie.is_empty());
        assert_eq!(trie.node_count(), 1);

        // Test insertion
        assert_eq!(trie.put("hello", "world"), None);
        assert_eq!(trie.len(), 1);
        assert_eq!(trie.node_count(), 6);
        assert!(!trie.is_empty());

        // Test retrieval
        assert_eq!(trie.get("hello"), Some(&"world"));
        assert!(trie.contains_key("hello"));
        assert_eq!(trie.get("nonexistent"), None);
        assert!(!trie.contains_key("nonexistent"));

        // Lookups are case-sensitive
        assert_eq!(trie.get("HELLO"), None);

        // Test update
        assert_eq!(trie.put("hello", "planet"), Some("world"));
        assert_eq!(trie.get("hello"), Some(&"planet"));
        assert_eq!(trie.len(), 1);
        assert_eq!(trie.node_count(), 6);
    }

    #[test]
    fn test_proper_prefix_is_not_a_key() {
        let mut trie = CharTrie::new();
        trie.put("application", 1);

        assert_eq!(trie.get("app"), None);
        assert!(trie.has_prefix("app"));

        trie.put("app", 2);
        assert_eq!(trie.get("app"), Some(&2));
        assert_eq!(trie.get("application"), Some(&1));
        // "app" reused existing nodes
        assert_eq!(trie.node_count(), 12);
    }

    #[test]
    fn test_empty_key_lives_on_root() {
        let mut trie = CharTrie::new();
        assert_eq!(trie.get(""), None);

        trie.put("", 7);
        assert_eq!(trie.get(""), Some(&7));
        assert_eq!(trie.len(), 1);
        assert_eq!(trie.node_count(), 1);
    }

    #[test]
    fn test_has_prefix() {
        let trie: CharTrie<usize> = ["apple", "application", "banana", "cat"]
            .into_iter()
            .enumerate()
            .map(|(i, w)| (w, i))
            .collect();

        assert!(trie.has_prefix("app"));
        assert!(!trie.has_prefix("bat"));
        assert!(trie.has_prefix("ban"));
        assert!(trie.has_prefix("ca"));
        assert!(trie.has_prefix("cat"));
        assert!(!trie.has_prefix("cats"));
        assert!(trie.has_prefix(""));
        assert!(CharTrie::<()>::new().has_prefix(""));
    }

    #[test]
    fn test_words_are_lexicographic() {
        let mut trie = CharTrie::new();
        for (i, word) in ["cat", "apple", "", "banana", "app", "application"]
            .iter()
            .enumerate()
        {
            trie.put(word, i);
        }

        let words: Vec<(String, usize)> = trie.words().map(|(w, v)| (w, *v)).collect();
        assert_eq!(
            words,
            vec![
                ("".to_string(), 2),
                ("app".to_string(), 4),
                ("apple".to_string(), 1),
                ("application".to_string(), 5),
                ("banana".to_string(), 3),
                ("cat".to_string(), 0),
            ]
        );
    }

    #[test]
    fn test_prefix_search() {
        let mut trie = CharTrie::new();

        // Insert some keys with common prefixes
        trie.put("apple", "fruit");
        trie.put("application", "software");
        trie.put("apply", "verb");
        trie.put("banana", "yellow");

        let results: Vec<String> = trie.words_with_prefix("app").map(|(w, _)| w).collect();
        assert_eq!(results, vec!["apple", "application", "apply"]);
        assert_eq!(trie.count_with_prefix("app"), 3);
        assert_eq!(trie.count_with_prefix("apple"), 1);
        assert_eq!(trie.count_with_prefix(""), 4);

        // Test with no matches
        assert_eq!(trie.words_with_prefix("orange").count(), 0);
    }

    #[test]
    fn test_dynamic_arguments() {
        let mut trie = CharTrie::new();

        assert_eq!(trie.try_put(&json!("key"), 1).unwrap(), None);
        assert_eq!(trie.try_put(&json!("key"), 2).unwrap(), Some(1));

        let err = trie.try_put(&json!(12), 3).unwrap_err();
        assert!(matches!(err, TrieError::InvalidArgument { argument: "key", .. }));
        assert_eq!(trie.len(), 1);
        assert_eq!(trie.node_count(), 4);

        assert_eq!(trie.get_any(&json!("key")), Some(&2));
        assert_eq!(trie.get_any(&json!(null)), None);
        assert_eq!(trie.get_any(&json!(["key"])), None);

        assert!(trie.try_has_prefix(&json!("ke")).unwrap());
        assert!(!trie.try_has_prefix(&json!("x")).unwrap());
        assert!(trie.try_has_prefix(&json!(true)).is_err());
    }

    #[test]
    fn test_long_key_does_not_overflow_stack() {
        let key: String = std::iter::repeat('a').take(200_000).collect();
        let mut trie = CharTrie::new();
        trie.put(&key, ());
        trie.put("ab", ());

        assert!(trie.contains_key(&key));
        assert_eq!(trie.words().count(), 2);
        assert_eq!(trie.node_count(), 200_002);
        drop(trie);
    }

    /// Readers on several threads share one fully built trie.
    #[test]
    fn test_concurrent_reads() {
        const THREAD_COUNT: usize = 8;
        const KEYS: usize = 200;

        let trie: Arc<CharTrie<usize>> =
            Arc::new((0..KEYS).map(|i| (format!("key_{i}"), i)).collect());

        let handles: Vec<_> = (0..THREAD_COUNT)
            .map(|_| {
                let trie = Arc::clone(&trie);
                thread::spawn(move || {
                    (0..KEYS).all(|i| trie.get(format!("key_{i}")) == Some(&i))
                        && trie.has_prefix("key_1")
                        && trie.words().count() == KEYS
                })
            })
            .collect();

        for handle in handles {
            assert!(handle.join().unwrap());
        }
    }
}
