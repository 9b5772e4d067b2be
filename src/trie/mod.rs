// Copyright (c) 2025 Comp Trie Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Trie implementation.
//!
//! This module provides an uncompressed prefix tree that stores words as
//! sequences of symbols. It supports insertion, exact-match search, prefix
//! enumeration, full enumeration and deletion with pruning of branches that
//! no longer lead to any word.
//!
//! # Example
//!
//! ```
//! use comp_trie_lib::trie::Trie;
//!
//! let mut trie: Trie<char> = ["axy", "abxy", "bca", "bxta"].into_iter().collect();
//!
//! assert!(trie.search_str("abxy"));
//! assert_eq!(trie.words_with_prefix("b"), vec!["bca", "bxta"]);
//!
//! assert!(trie.delete_str("axy"));
//! assert_eq!(trie.words(), vec!["abxy", "bca", "bxta"]);
//! ```

mod node;
mod observer;

use std::fmt::{self, Debug};

use crate::config::TrieOptions;
use node::TrieNode;
pub use observer::{TracingObserver, TrieObserver};

/// A prefix tree over symbols of type `S`.
///
/// Children are kept in symbol order, so every enumeration returns words in
/// ascending lexicographic order of their symbols.
///
/// `word_count` counts successful inserts minus successful deletes. Inserting
/// a word that is already present still increments it, while presence itself
/// stays binary: such a word is reported once by [`Trie::get_all_words`] and
/// a single [`Trie::delete`] removes it.
pub struct Trie<S> {
    /// The root node, present for the whole lifetime of the trie
    root: TrieNode<S>,

    /// Number of inserts minus number of successful deletes
    word_count: usize,

    /// Optional mutation observer
    observer: Option<Box<dyn TrieObserver<S>>>,
}

impl<S: Ord + Clone + Debug> Trie<S> {
    /// Creates a new empty trie without an observer.
    pub fn new() -> Self {
        Self {
            root: TrieNode::new(),
            word_count: 0,
            observer: None,
        }
    }

    /// Creates a new empty trie that reports mutations to `observer`.
    pub fn with_observer<O>(observer: O) -> Self
    where
        O: TrieObserver<S> + 'static,
    {
        Self {
            root: TrieNode::new(),
            word_count: 0,
            observer: Some(Box::new(observer)),
        }
    }

    /// Inserts a word into the trie.
    ///
    /// Missing nodes along the path are created. The word count is
    /// incremented even if the word was already present.
    pub fn insert(&mut self, word: &[S]) {
        let mut node = &mut self.root;
        for symbol in word {
            node = node.children.entry(symbol.clone()).or_default();
        }
        node.is_terminal = true;
        self.word_count += 1;

        if let Some(observer) = &self.observer {
            observer.on_insert(word);
        }
    }

    /// Returns `true` if `word` is currently stored in the trie.
    pub fn search(&self, word: &[S]) -> bool {
        self.find_node(word).map_or(false, |node| node.is_terminal)
    }

    /// Returns every stored word, in ascending symbol order.
    pub fn get_all_words(&self) -> Vec<Vec<S>> {
        self.get_all_prefixes(&[])
    }

    /// Returns every stored word that starts with `prefix`.
    ///
    /// The prefix itself is included if it is a stored word. The result is
    /// empty when no path spells `prefix`.
    pub fn get_all_prefixes(&self, prefix: &[S]) -> Vec<Vec<S>> {
        let Some(node) = self.find_node(prefix) else {
            return Vec::new();
        };

        Self::collect_words(node, prefix)
    }

    /// Removes `word` from the trie.
    ///
    /// Returns `false` without touching the trie if the word is not stored.
    /// Otherwise the terminal flag is cleared and every node that no longer
    /// leads to a word is pruned, starting at the end of the word and stopping
    /// at the first node that is terminal or still has other children.
    pub fn delete(&mut self, word: &[S]) -> bool {
        if !self.search(word) {
            return false;
        }

        self.delete_path(word);
        self.word_count -= 1;

        if let Some(observer) = &self.observer {
            observer.on_delete(word);
        }
        true
    }

    /// Returns the number of inserts minus the number of successful deletes.
    pub fn word_count(&self) -> usize {
        self.word_count
    }

    /// Returns `true` if no word is stored.
    pub fn is_empty(&self) -> bool {
        self.root.is_prunable()
    }

    /// Removes every word and resets the word count.
    ///
    /// The observer is not notified.
    pub fn clear(&mut self) {
        self.root = TrieNode::new();
        self.word_count = 0;
    }

    /// Follows `path` from the root, returning the node it ends at.
    fn find_node(&self, path: &[S]) -> Option<&TrieNode<S>> {
        path.iter()
            .try_fold(&self.root, |node, symbol| node.children.get(symbol))
    }

    /// Depth-first collection of all terminal paths below `node`.
    ///
    /// `prefix` is the path that leads to `node`. The walk keeps its own
    /// stack of `(symbol, child, depth)` entries, so the output path is only
    /// ever truncated back to the depth of the entry being visited.
    fn collect_words(node: &TrieNode<S>, prefix: &[S]) -> Vec<Vec<S>> {
        let mut words = Vec::new();
        let mut path = prefix.to_vec();
        let mut stack: Vec<(Option<&S>, &TrieNode<S>, usize)> = vec![(None, node, prefix.len())];

        while let Some((symbol, node, depth)) = stack.pop() {
            path.truncate(depth);
            if let Some(symbol) = symbol {
                path.push(symbol.clone());
            }
            if node.is_terminal {
                words.push(path.clone());
            }

            // Reversed so the smallest symbol is popped first.
            let child_depth = path.len();
            stack.extend(
                node.children
                    .iter()
                    .rev()
                    .map(|(symbol, child)| (Some(symbol), child, child_depth)),
            );
        }

        words
    }

    /// Clears the terminal flag at the end of `word` and prunes the branch
    /// that no longer leads to any word. The path must exist.
    ///
    /// A first read-only pass finds the deepest node on the path that has to
    /// survive: the root, a terminal node, or a node with other children.
    /// Everything below it on the path is removed by detaching a single edge.
    fn delete_path(&mut self, word: &[S]) {
        let mut anchor = 0;
        let mut node = &self.root;
        for (depth, symbol) in word.iter().enumerate() {
            if node.is_terminal || node.children.len() > 1 {
                anchor = depth;
            }
            let Some(child) = node.children.get(symbol) else {
                unreachable!("deletion path must exist after a successful search");
            };
            node = child;
        }

        // The end node keeps its place when a longer word passes through it.
        let keep_end = !node.children.is_empty() || word.is_empty();
        let stop = if keep_end { word.len() } else { anchor };

        let mut node = &mut self.root;
        for symbol in &word[..stop] {
            let Some(child) = node.children.get_mut(symbol) else {
                unreachable!("deletion path must exist after a successful search");
            };
            node = child;
        }

        if keep_end {
            node.is_terminal = false;
            return;
        }

        let symbol = &word[anchor];
        node.children.remove(symbol);
        tracing::trace!(
            symbol = ?symbol,
            depth = anchor,
            nodes = word.len() - anchor,
            "Pruned trie branch"
        );
    }
}

impl<S: Ord + Clone + Debug + 'static> Trie<S> {
    /// Creates a new empty trie configured by `options`.
    pub fn with_options(options: &TrieOptions) -> Self {
        if options.log_mutations {
            Self::with_observer(TracingObserver::new())
        } else {
            Self::new()
        }
    }
}

impl Trie<char> {
    /// Inserts a string, one symbol per `char`.
    pub fn insert_str(&mut self, word: &str) {
        self.insert(&to_symbols(word));
    }

    /// Returns `true` if the string is currently stored.
    pub fn search_str(&self, word: &str) -> bool {
        self.search(&to_symbols(word))
    }

    /// Removes a string, returning `false` if it was not stored.
    pub fn delete_str(&mut self, word: &str) -> bool {
        self.delete(&to_symbols(word))
    }

    /// Returns every stored string in lexicographic order.
    pub fn words(&self) -> Vec<String> {
        to_strings(self.get_all_words())
    }

    /// Returns every stored string starting with `prefix`.
    pub fn words_with_prefix(&self, prefix: &str) -> Vec<String> {
        to_strings(self.get_all_prefixes(&to_symbols(prefix)))
    }
}

fn to_symbols(word: &str) -> Vec<char> {
    word.chars().collect()
}

fn to_strings(words: Vec<Vec<char>>) -> Vec<String> {
    words
        .into_iter()
        .map(|word| word.into_iter().collect())
        .collect()
}

impl<S: Ord + Clone + Debug> Default for Trie<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> FromIterator<&'a str> for Trie<char> {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut trie = Trie::new();
        for word in iter {
            trie.insert_str(word);
        }
        trie
    }
}

impl<S: Ord + Clone + Debug> Debug for Trie<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Trie")
            .field("word_count", &self.word_count)
            .field("words", &self.get_all_words())
            .field("observed", &self.observer.is_some())
            .finish()
    }
}
