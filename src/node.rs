use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A node in the prefix tree
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrieNode {
    // The children of this node, keyed by the character
    pub(crate) children: BTreeMap<char, TrieNode>,
    // Whether some inserted word ends exactly here
    pub(crate) is_end_of_word: bool,
    // Summed weight of the word ending here, 0 unless `is_end_of_word`
    pub(crate) word_frequency: u64,
    // Summed weight of every insertion passing through this node
    pub(crate) prefix_frequency: u64,
}

impl TrieNode {
    pub fn new() -> Self {
        TrieNode::default()
    }

    pub fn children(&self) -> &BTreeMap<char, TrieNode> {
        &self.children
    }

    pub fn child(&self, c: char) -> Option<&TrieNode> {
        self.children.get(&c)
    }

    pub fn is_end_of_word(&self) -> bool {
        self.is_end_of_word
    }

    pub fn word_frequency(&self) -> u64 {
        self.word_frequency
    }

    pub fn prefix_frequency(&self) -> u64 {
        self.prefix_frequency
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Follows `path` one character at a time without creating anything.
    pub(crate) fn descend(&self, path: &str) -> Option<&TrieNode> {
        path.chars().try_fold(self, |node, c| node.children.get(&c))
    }
}
