//! Error types for the character trie.
//!
//! Lookups that miss are not errors. The only failure is a caller handing
//! an argument of the wrong shape to one of the dynamic entry points.

/// Errors that can occur in trie operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TrieError {
    /// An argument did not have the required type.
    #[error("Invalid argument `{argument}`: expected {expected}, got {found}")]
    InvalidArgument {
        /// Name of the rejected parameter.
        argument: &'static str,
        /// Description of the accepted type.
        expected: &'static str,
        /// Description of what was supplied.
        found: String,
    },
}
