use thiserror::Error;

/// Rejection raised by [`Trie`](crate::Trie) before any mutation or traversal happens.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TrieError {
    /// A numeric argument or a word length is outside its allowed range.
    #[error("invalid {param}: {reason}")]
    OutOfRange { param: &'static str, reason: String },

    /// A required text argument was empty.
    #[error("{param} cannot be empty")]
    Empty { param: &'static str },
}

impl TrieError {
    pub(crate) fn out_of_range(param: &'static str, reason: impl Into<String>) -> Self {
        TrieError::OutOfRange {
            param,
            reason: reason.into(),
        }
    }

    /// The name of the argument that was rejected.
    pub fn param(&self) -> &'static str {
        match self {
            TrieError::OutOfRange { param, .. } | TrieError::Empty { param } => param,
        }
    }
}

#[derive(Error, Debug)]
pub enum SnapshotError {
    #[error("{}", .0)]
    Json(#[from] serde_json::Error),

    #[error("malformed trie at {path:?}: {reason}")]
    Invalid { path: String, reason: String },
}
