//! Test modules for the Trie Toolkit.
//!
//! Cross-component tests live here:
//! - Configuration loading and validation
//! - Error wrapping and reporting
//! - Property-based tests of the trie and its algorithms using proptest
//! - Shared fixtures and strategies


// Re-export commonly used testing tools to simplify imports in test modules
pub use test_utils::{word_list_strategy, word_strategy, TestFixture};
