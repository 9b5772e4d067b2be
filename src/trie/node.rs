// Copyright (c) 2025 Comp Trie Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Node implementation for the trie.
//!
//! Nodes are the building blocks of the trie. Each node exclusively owns its
//! children, so the whole structure is a plain tree. Dropping it walks the
//! tree with an explicit work stack, so the depth of a stored word is not
//! bounded by the thread's call stack.

use std::collections::BTreeMap;

/// A node in the trie.
///
/// Each node sits at the end of a path of symbols from the root. Terminal
/// nodes mark the end of a word that is currently stored.
pub struct TrieNode<S> {
    /// Map of symbols to owned child nodes, iterated in ascending symbol order
    pub children: BTreeMap<S, TrieNode<S>>,

    /// Whether a stored word ends exactly at this node
    pub is_terminal: bool,
}

impl<S: Ord> TrieNode<S> {
    /// Creates a new, non-terminal node without children.
    pub fn new() -> Self {
        Self {
            children: BTreeMap::new(),
            is_terminal: false,
        }
    }

    /// Returns `true` if the node neither ends a word nor leads to one.
    ///
    /// Such a node must never survive below the root.
    pub fn is_prunable(&self) -> bool {
        !self.is_terminal && self.children.is_empty()
    }
}

impl<S: Ord> Default for TrieNode<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> Drop for TrieNode<S> {
    fn drop(&mut self) {
        // Detach every descendant before it is dropped, so each node goes
        // away with an empty child map.
        let mut stack: Vec<TrieNode<S>> = std::mem::take(&mut self.children)
            .into_values()
            .collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(std::mem::take(&mut node.children).into_values());
        }
    }
}
