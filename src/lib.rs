//! Trie Toolkit Library
//!
//! This library contains a character trie and the algorithms built on it:
//! exact lookup, prefix tests, suffix counting across all inserted words, and
//! longest-common-prefix search over a batch of strings. The binary crate
//! wraps these in a small demonstration driver.
//!
//! # Architecture
//!
//! - One concrete trie type, generic over the stored value
//! - Extensions compose a private trie instead of inheriting from one
//! - Typed entry points that cannot fail, plus validating entry points for
//!   untyped (JSON) arguments
//! - Iterative traversal everywhere, so key length never threatens the stack

pub mod config;
pub mod data_structures;
pub mod demo;
pub mod error;

// Internal modules that are not part of the public API
#[cfg(test)]
pub(crate) mod tests;

/// Version information for the Trie Toolkit.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
