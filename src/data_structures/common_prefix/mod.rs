// Copyright (c) 2025 Trie Toolkit Authors
//
// Licensed under the MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)

//! Longest common prefix of a batch of strings.
//!
//! The batch is loaded into a fresh [`CharTrie`] (each string keyed to its
//! position), then the single unbranched path from the root is read off. The
//! walk stops at the first node that either branches or ends one of the
//! inputs, so the result is never longer than the shortest string.

use serde_json::Value;

use super::char_trie::{expect_str_sequence, CharTrie, TrieNode, TrieResult};

/// Returns the longest prefix shared by every string in `strings`.
///
/// An empty batch yields the empty string, as does any batch whose members
/// differ in their first character or that contains the empty string.
///
/// # Example
///
/// ```
/// use trie_toolkit_lib::data_structures::common_prefix::find_longest_common_word;
///
/// assert_eq!(find_longest_common_word(&["flower", "flow", "flight"]), "fl");
/// assert_eq!(find_longest_common_word(&["dog", "racecar", "car"]), "");
/// ```
pub fn find_longest_common_word<S>(strings: &[S]) -> String
where
    S: AsRef<str>,
{
    if strings.is_empty() {
        return String::new();
    }

    let trie: CharTrie<usize> = strings
        .iter()
        .enumerate()
        .map(|(index, s)| (s.as_ref(), index))
        .collect();

    let prefix = unbranched_prefix(trie.root());
    tracing::debug!(batch = strings.len(), prefix = %prefix, "Found longest common prefix");
    prefix
}

/// Longest common prefix of an untyped batch.
///
/// # Returns
///
/// * `Ok(String)` - As for [`find_longest_common_word`].
/// * `Err(TrieError::InvalidArgument)` - If `strings` is not an array, or any
///   item is not a string.
pub fn try_find_longest_common_word(strings: &Value) -> TrieResult<String> {
    let strings = expect_str_sequence(strings, "strings")?;
    Ok(find_longest_common_word(&strings))
}

/// Follows single-child, non-terminal nodes from `root`, collecting edges.
fn unbranched_prefix<V>(root: &TrieNode<V>) -> String {
    let mut prefix = String::new();
    let mut node = root;

    while !node.is_terminal && node.children.len() == 1 {
        let Some((c, next)) = node.children.iter().next() else {
            break;
        };
        prefix.push(*c);
        node = next;
    }

    prefix
}
