use serde::Serialize;
use tracing::{debug, trace};

use crate::error::TrieError;
use crate::node::TrieNode;

/// Longest word, in characters, that [`Trie::insert`] accepts.
pub const MAX_WORD_LEN: usize = 50;
pub const DEFAULT_FREQUENCY: u32 = 1;
pub const DEFAULT_MAX_SUGGESTIONS: usize = 5;

/// One ranked autocomplete result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Suggestion {
    pub word: String,
    pub frequency: u64,
}

/// A character trie that weights every inserted word.
///
/// Each node counts two things: how often a word ends there and how often an
/// insertion passed through it. Nodes are created lazily and never removed.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Trie {
    root: TrieNode,
}

impl Trie {
    /// Creates a new, empty trie
    pub fn new() -> Self {
        Trie {
            root: TrieNode::new(),
        }
    }

    /// Builds a trie from `(word, frequency)` pairs, stopping at the first invalid pair.
    pub fn from_words<'a, I>(words: I) -> Result<Self, TrieError>
    where
        I: IntoIterator<Item = (&'a str, u32)>,
    {
        let mut trie = Trie::new();
        for (word, frequency) in words {
            trie.insert_with_frequency(word, frequency)?;
        }
        Ok(trie)
    }

    pub(crate) fn from_root(root: TrieNode) -> Self {
        Trie { root }
    }

    /// Inserts `word` once.
    pub fn insert(&mut self, word: &str) -> Result<(), TrieError> {
        self.insert_with_frequency(word, DEFAULT_FREQUENCY)
    }

    /// Inserts `word` with weight `frequency`, accumulating onto earlier insertions.
    pub fn insert_with_frequency(&mut self, word: &str, frequency: u32) -> Result<(), TrieError> {
        if frequency < 1 {
            return Err(TrieError::out_of_range(
                "frequency",
                "must be greater than 0",
            ));
        }
        if word.is_empty() {
            return Err(TrieError::Empty { param: "word" });
        }
        let len = word.chars().count();
        if len > MAX_WORD_LEN {
            return Err(TrieError::out_of_range(
                "word",
                format!("length {len} exceeds the maximum of {MAX_WORD_LEN} characters"),
            ));
        }

        let frequency = u64::from(frequency);
        let mut current_node = &mut self.root;
        for c in word.chars() {
            current_node = current_node.children.entry(c).or_default();
            current_node.prefix_frequency = current_node.prefix_frequency.saturating_add(frequency);
        }
        current_node.is_end_of_word = true;
        current_node.word_frequency = current_node.word_frequency.saturating_add(frequency);

        debug!(
            "Inserted {:?} (+{}), word frequency now {}",
            word, frequency, current_node.word_frequency
        );
        Ok(())
    }

    /// Returns `true` if `word` was inserted as a complete word.
    pub fn word_exists(&self, word: &str) -> bool {
        self.root
            .descend(word)
            .map_or(false, |node| node.is_end_of_word)
    }

    /// The accumulated weight of `word`, or 0 when it was never inserted.
    pub fn get_word_frequency(&self, word: &str) -> u64 {
        match self.root.descend(word) {
            Some(node) if node.is_end_of_word => node.word_frequency,
            _ => 0,
        }
    }

    /// The accumulated weight of every word starting with `prefix`, or 0 when no word does.
    ///
    /// The empty prefix resolves to the root, whose counter is never incremented.
    pub fn get_prefix_frequency(&self, prefix: &str) -> u64 {
        self.root
            .descend(prefix)
            .map_or(0, |node| node.prefix_frequency)
    }

    /// Returns `true` if some inserted word starts with `prefix`.
    pub fn starts_with(&self, prefix: &str) -> bool {
        self.root.descend(prefix).is_some()
    }

    /// Up to [`DEFAULT_MAX_SUGGESTIONS`] completions of `prefix`, most frequent first.
    pub fn autocomplete(&self, prefix: &str) -> Result<Vec<Suggestion>, TrieError> {
        self.autocomplete_with_limit(prefix, DEFAULT_MAX_SUGGESTIONS)
    }

    /// Up to `max_suggestions` completions of `prefix`, most frequent first.
    ///
    /// Words of equal frequency are ordered alphabetically. A prefix that matches
    /// nothing yields an empty list.
    pub fn autocomplete_with_limit(
        &self,
        prefix: &str,
        max_suggestions: usize,
    ) -> Result<Vec<Suggestion>, TrieError> {
        if prefix.is_empty() {
            return Err(TrieError::Empty { param: "prefix" });
        }
        if max_suggestions < 1 {
            return Err(TrieError::out_of_range(
                "max_suggestions",
                "must be greater than 0",
            ));
        }

        let Some(start) = self.root.descend(prefix) else {
            debug!("No node for prefix {:?}", prefix);
            return Ok(Vec::new());
        };

        let mut results = collect_words(start, prefix);
        results.sort_by(|a, b| {
            b.frequency
                .cmp(&a.frequency)
                .then_with(|| a.word.cmp(&b.word))
        });
        debug!(
            "Ranked {} completions for {:?}, keeping {}",
            results.len(),
            prefix,
            max_suggestions.min(results.len())
        );
        results.truncate(max_suggestions);
        Ok(results)
    }

    /// The root node, representing the empty prefix.
    pub fn root(&self) -> &TrieNode {
        &self.root
    }

    /// Pre-order walk over every node, the root first with an empty path.
    pub fn walk(&self) -> Walk<'_> {
        Walk {
            stack: vec![(String::new(), &self.root)],
        }
    }
}

/// Depth-first pre-order collection of every word below `start`.
fn collect_words(start: &TrieNode, prefix: &str) -> Vec<Suggestion> {
    let mut results = Vec::new();
    let mut stack = vec![(prefix.to_string(), start)];

    while let Some((word, node)) = stack.pop() {
        trace!("Visiting {:?}", word);
        if node.is_end_of_word {
            results.push(Suggestion {
                word: word.clone(),
                frequency: node.word_frequency,
            });
        }
        // reversed so the smallest character is popped first
        for (c, child) in node.children.iter().rev() {
            let mut next = word.clone();
            next.push(*c);
            stack.push((next, child));
        }
    }

    results
}

/// A node reached by [`Trie::walk`], along with the characters leading to it.
#[derive(Debug, Clone)]
pub struct NodeView<'a> {
    pub path: String,
    pub node: &'a TrieNode,
}

impl NodeView<'_> {
    pub fn depth(&self) -> usize {
        self.path.chars().count()
    }
}

/// Pre-order iterator returned by [`Trie::walk`].
#[derive(Debug)]
pub struct Walk<'a> {
    stack: Vec<(String, &'a TrieNode)>,
}

impl<'a> Iterator for Walk<'a> {
    type Item = NodeView<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let (path, node) = self.stack.pop()?;
        for (c, child) in node.children.iter().rev() {
            let mut next = path.clone();
            next.push(*c);
            self.stack.push((next, child));
        }
        Some(NodeView { path, node })
    }
}
