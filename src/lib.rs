//! A character trie with weighted insertion and frequency-ranked autocomplete.

pub mod error;
pub mod node;
pub mod snapshot;
pub mod trie;

pub use error::{SnapshotError, TrieError};
pub use node::TrieNode;
pub use trie::{
    NodeView, Suggestion, Trie, Walk, DEFAULT_FREQUENCY, DEFAULT_MAX_SUGGESTIONS, MAX_WORD_LEN,
};
