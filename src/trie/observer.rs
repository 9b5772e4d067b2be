// Copyright (c) 2025 Comp Trie Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Mutation observers for the trie.
//!
//! An observer is notified after every successful mutation. The trie itself
//! never prints or logs mutations; callers that want a record of them attach
//! an observer such as [`TracingObserver`].

use std::fmt::Debug;
use std::marker::PhantomData;

/// Receives notifications about trie mutations.
pub trait TrieObserver<S>: Send + Sync {
    /// Called after `word` has been inserted.
    fn on_insert(&self, word: &[S]);

    /// Called after `word` has been deleted.
    fn on_delete(&self, word: &[S]);
}

/// Observer that reports every mutation as a `tracing` event.
pub struct TracingObserver<S> {
    _symbol: PhantomData<fn(&S)>,
}

impl<S> TracingObserver<S> {
    /// Creates a new tracing observer.
    pub fn new() -> Self {
        Self {
            _symbol: PhantomData,
        }
    }
}

impl<S> Default for TracingObserver<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> Debug for TracingObserver<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("TracingObserver")
    }
}

impl<S: Debug> TrieObserver<S> for TracingObserver<S> {
    fn on_insert(&self, word: &[S]) {
        tracing::info!(word = ?word, "Inserted word into trie");
    }

    fn on_delete(&self, word: &[S]) {
        tracing::info!(word = ?word, "Deleted word from trie");
    }
}
