//! Data structures for the Trie Toolkit.
//!
//! The character trie is the only storage structure. Suffix counting and
//! longest-common-prefix search are built on top of it by composition: each
//! owns a private trie rather than extending a shared one.

pub mod char_trie;
pub mod common_prefix;
pub mod suffix_counter;

// Re-export common data structures
pub use char_trie::{CharTrie, TrieError, TrieResult, Words};
pub use common_prefix::{find_longest_common_word, try_find_longest_common_word};
pub use suffix_counter::{SuffixCounter, SuffixStrategy};
