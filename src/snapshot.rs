//! JSON form of a [`Trie`]: the root node with every child, flag and counter.

use tracing::debug;

use crate::error::SnapshotError;
use crate::node::TrieNode;
use crate::trie::{Trie, MAX_WORD_LEN};

pub fn to_json(trie: &Trie) -> Result<String, SnapshotError> {
    Ok(serde_json::to_string(trie.root())?)
}

pub fn to_json_pretty(trie: &Trie) -> Result<String, SnapshotError> {
    Ok(serde_json::to_string_pretty(trie.root())?)
}

/// Restores a trie written by [`to_json`], rejecting structures insertion could not have built.
pub fn from_json(json: &str) -> Result<Trie, SnapshotError> {
    let root: TrieNode = serde_json::from_str(json)?;
    if root.is_end_of_word() || root.word_frequency() != 0 || root.prefix_frequency() != 0 {
        return Err(invalid("", "root must not carry a word or counts"));
    }

    let trie = Trie::from_root(root);
    for view in trie.walk().skip(1) {
        let node = view.node;
        if view.depth() > MAX_WORD_LEN {
            return Err(invalid(
                &view.path,
                &format!("path is longer than {MAX_WORD_LEN} characters"),
            ));
        }
        if node.is_end_of_word() && node.word_frequency() == 0 {
            return Err(invalid(&view.path, "word ends here with frequency 0"));
        }
        if !node.is_end_of_word() && node.word_frequency() != 0 {
            return Err(invalid(&view.path, "frequency set on a non-word node"));
        }
        let through_children = node
            .children()
            .values()
            .fold(0u64, |acc, child| acc.saturating_add(child.prefix_frequency()));
        if node.prefix_frequency() != node.word_frequency().saturating_add(through_children) {
            return Err(invalid(
                &view.path,
                "prefix frequency does not match the words below it",
            ));
        }
        if node.is_leaf() && !node.is_end_of_word() {
            return Err(invalid(&view.path, "leaf is not the end of a word"));
        }
    }

    debug!("Restored trie with {} nodes", trie.walk().count());
    Ok(trie)
}

fn invalid(path: &str, reason: &str) -> SnapshotError {
    SnapshotError::Invalid {
        path: path.to_string(),
        reason: reason.to_string(),
    }
}
