// Copyright (c) 2025 Trie Toolkit Authors
//
// Licensed under the MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)

//! Suffix counting over the words of a trie.
//!
//! A [`SuffixCounter`] owns its own [`CharTrie`] and answers "how many of the
//! inserted words end with this pattern". Matching is exact and
//! case-sensitive, one `char` at a time, and the empty pattern matches every
//! word.
//!
//! Two strategies give identical answers:
//!
//! - [`SuffixStrategy::Enumerate`] walks every word and applies an ordinary
//!   suffix test. Nothing beyond the trie is stored.
//! - [`SuffixStrategy::ReversedIndex`] also keeps a trie of reversed keys, so a
//!   suffix query becomes a prefix count on that index.
//!
//! # Example
//!
//! ```
//! use trie_toolkit_lib::data_structures::suffix_counter::SuffixCounter;
//!
//! let mut counter = SuffixCounter::new();
//! for (i, word) in ["apple", "application", "banana", "cat"].iter().enumerate() {
//!     counter.put(word, i);
//! }
//!
//! assert_eq!(counter.count_words_with_suffix("ion"), 1);
//! assert_eq!(counter.count_words_with_suffix(""), 4);
//! ```

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::char_trie::{expect_str, CharTrie, TrieResult};

/// How a [`SuffixCounter`] answers suffix queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SuffixStrategy {
    /// Enumerate all words, then filter with a string suffix test
    #[default]
    Enumerate,
    /// Count prefixes in a trie of reversed keys
    ReversedIndex,
}

/// A trie of words that can count how many of them end with a pattern.
#[derive(Debug)]
pub struct SuffixCounter<V> {
    trie: CharTrie<V>,
    reversed: Option<CharTrie<()>>,
    strategy: SuffixStrategy,
}

impl<V> SuffixCounter<V> {
    /// Creates an empty counter using [`SuffixStrategy::Enumerate`].
    pub fn new() -> Self {
        Self::with_strategy(SuffixStrategy::default())
    }

    /// Creates an empty counter using the given strategy.
    pub fn with_strategy(strategy: SuffixStrategy) -> Self {
        let reversed = match strategy {
            SuffixStrategy::Enumerate => None,
            SuffixStrategy::ReversedIndex => Some(CharTrie::new()),
        };
        Self {
            trie: CharTrie::new(),
            reversed,
            strategy,
        }
    }

    /// The strategy this counter was built with.
    pub fn strategy(&self) -> SuffixStrategy {
        self.strategy
    }

    /// Read access to the underlying word trie.
    pub fn trie(&self) -> &CharTrie<V> {
        &self.trie
    }

    /// Inserts a word, returning the value it replaced.
    pub fn put<K>(&mut self, key: K, value: V) -> Option<V>
    where
        K: AsRef<str>,
    {
        let key = key.as_ref();
        if let Some(reversed) = self.reversed.as_mut() {
            reversed.put(key.chars().rev().collect::<String>(), ());
        }
        self.trie.put(key, value)
    }

    /// Inserts a word given as an untyped argument.
    ///
    /// Fails with `InvalidArgument` before either trie is touched.
    pub fn try_put(&mut self, key: &Value, value: V) -> TrieResult<Option<V>> {
        let key = expect_str(key, "key")?;
        Ok(self.put(key, value))
    }

    /// Looks up the value stored for `key`.
    pub fn get<K>(&self, key: K) -> Option<&V>
    where
        K: AsRef<str>,
    {
        self.trie.get(key)
    }

    /// Checks whether any inserted word starts with `prefix`.
    pub fn has_prefix<P>(&self, prefix: P) -> bool
    where
        P: AsRef<str>,
    {
        self.trie.has_prefix(prefix)
    }

    /// Prefix test for an untyped argument.
    pub fn try_has_prefix(&self, prefix: &Value) -> TrieResult<bool> {
        self.trie.try_has_prefix(prefix)
    }

    /// Counts the inserted words that end with `pattern`.
    ///
    /// Each distinct key counts once. The empty pattern counts every word.
    pub fn count_words_with_suffix<P>(&self, pattern: P) -> usize
    where
        P: AsRef<str>,
    {
        let pattern = pattern.as_ref();
        let count = match &self.reversed {
            Some(reversed) => {
                let reversed_pattern: String = pattern.chars().rev().collect();
                reversed.count_with_prefix(reversed_pattern)
            }
            None => self
                .trie
                .words()
                .filter(|(word, _)| word.ends_with(pattern))
                .count(),
        };

        tracing::debug!(pattern, count, strategy = ?self.strategy, "Counted words by suffix");
        count
    }

    /// Suffix count for an untyped pattern.
    ///
    /// # Returns
    ///
    /// * `Ok(usize)` - As for [`count_words_with_suffix`](Self::count_words_with_suffix).
    /// * `Err(TrieError::InvalidArgument)` - If `pattern` is not a string.
    pub fn try_count_words_with_suffix(&self, pattern: &Value) -> TrieResult<usize> {
        let pattern = expect_str(pattern, "pattern")?;
        Ok(self.count_words_with_suffix(pattern))
    }
}

impl<V> Default for SuffixCounter<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> Extend<(K, V)> for SuffixCounter<V>
where
    K: AsRef<str>,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.put(key, value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_structures::char_trie::TrieError;
    use serde_json::json;
    use test_case::test_case;

    fn sample(strategy: SuffixStrategy) -> SuffixCounter<usize> {
        let mut counter = SuffixCounter::with_strategy(strategy);
        counter.extend(
            ["apple", "application", "banana", "cat"]
                .into_iter()
                .enumerate()
                .map(|(i, w)| (w, i)),
        );
        counter
    }

    #[test_case("e", 1 ; "apple")]
    #[test_case("ion", 1 ; "application")]
    #[test_case("a", 1 ; "banana")]
    #[test_case("at", 1 ; "cat")]
    #[test_case("", 4 ; "empty pattern matches all")]
    #[test_case("x", 0 ; "no match")]
    #[test_case("E", 0 ; "case sensitive")]
    #[test_case("banana", 1 ; "whole word")]
    #[test_case("bananas", 0 ; "longer than word")]
    fn test_counts(pattern: &str, expected: usize) {
        for strategy in [SuffixStrategy::Enumerate, SuffixStrategy::ReversedIndex] {
            assert_eq!(
                sample(strategy).count_words_with_suffix(pattern),
                expected,
                "strategy {strategy:?}"
            );
        }
    }

    #[test_case(SuffixStrategy::Enumerate)]
    #[test_case(SuffixStrategy::ReversedIndex)]
    fn test_duplicates_count_once(strategy: SuffixStrategy) {
        let mut counter = SuffixCounter::with_strategy(strategy);
        counter.put("running", 1);
        counter.put("running", 2);
        counter.put("sing", 3);
        counter.put("", 4);

        assert_eq!(counter.count_words_with_suffix("ing"), 2);
        assert_eq!(counter.count_words_with_suffix(""), 3);
        assert_eq!(counter.get("running"), Some(&2));
    }

    #[test]
    fn test_delegates_prefix_queries() {
        let counter = sample(SuffixStrategy::Enumerate);
        assert!(counter.has_prefix("app"));
        assert!(!counter.has_prefix("bat"));
        assert!(counter.has_prefix("ban"));
        assert!(counter.has_prefix("ca"));
        assert_eq!(counter.trie().len(), 4);
        assert_eq!(counter.strategy(), SuffixStrategy::Enumerate);
    }

    #[test]
    fn test_dynamic_arguments() {
        let mut counter = sample(SuffixStrategy::ReversedIndex);

        assert_eq!(counter.try_count_words_with_suffix(&json!("at")).unwrap(), 1);
        let err = counter.try_count_words_with_suffix(&json!(1)).unwrap_err();
        assert!(matches!(err, TrieError::InvalidArgument { argument: "pattern", .. }));

        assert!(counter.try_put(&json!({"word": "hat"}), 9).is_err());
        assert_eq!(counter.count_words_with_suffix("at"), 1);

        counter.try_put(&json!("hat"), 9).unwrap();
        assert_eq!(counter.count_words_with_suffix("at"), 2);

        assert!(counter.try_has_prefix(&json!("ha")).unwrap());
        assert!(counter.try_has_prefix(&json!(null)).is_err());
    }

    #[test]
    fn test_strategy_serde_names() {
        assert_eq!(
            serde_json::to_string(&SuffixStrategy::ReversedIndex).unwrap(),
            "\"reversed_index\""
        );
        let parsed: SuffixStrategy = serde_json::from_str("\"enumerate\"").unwrap();
        assert_eq!(parsed, SuffixStrategy::Enumerate);
    }
}
