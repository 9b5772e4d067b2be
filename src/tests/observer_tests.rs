// Copyright (c) 2025 Comp Trie Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Tests for trie mutation observers.

use mockall::{mock, Sequence};

use super::SCENARIO_WORDS;
use crate::trie::{Trie, TrieObserver};

mock! {
    pub Observer {}

    impl TrieObserver<char> for Observer {
        fn on_insert(&self, word: &[char]);
        fn on_delete(&self, word: &[char]);
    }
}

/// Test that every insert is reported, duplicates included.
#[test]
fn test_observer_sees_every_insert() {
    let mut observer = MockObserver::new();
    observer.expect_on_insert().times(SCENARIO_WORDS.len() + 1).return_const(());
    observer.expect_on_delete().never();

    let mut trie = Trie::with_observer(observer);
    for word in SCENARIO_WORDS {
        trie.insert_str(word);
    }
    trie.insert_str("axy");
}

/// Test that only successful deletes are reported, in order.
#[test]
fn test_observer_sees_successful_deletes_only() {
    let mut seq = Sequence::new();
    let mut observer = MockObserver::new();
    observer
        .expect_on_insert()
        .withf(|word| word.iter().collect::<String>() == "axy")
        .times(1)
        .in_sequence(&mut seq)
        .return_const(());
    observer
        .expect_on_delete()
        .withf(|word| word.iter().collect::<String>() == "axy")
        .times(1)
        .in_sequence(&mut seq)
        .return_const(());

    let mut trie = Trie::with_observer(observer);
    trie.insert_str("axy");
    assert!(!trie.delete_str("ax"));
    assert!(trie.delete_str("axy"));
    assert!(!trie.delete_str("axy"));
}

/// Test that read-only operations and clearing never notify.
#[test]
fn test_observer_ignores_reads_and_clear() {
    let mut observer = MockObserver::new();
    observer.expect_on_insert().times(1).return_const(());
    observer.expect_on_delete().never();

    let mut trie = Trie::with_observer(observer);
    trie.insert_str("word");
    assert!(trie.search_str("word"));
    assert_eq!(trie.words_with_prefix("w"), vec!["word"]);
    assert_eq!(trie.words(), vec!["word"]);
    trie.clear();
    assert!(trie.is_empty());
}
