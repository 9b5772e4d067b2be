// Copyright (c) 2025 Comp Trie Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Property-based tests for the trie.
//!
//! Every generated sequence of inserts and deletes is replayed against both
//! the trie and a `BTreeSet` model of the present words.

use proptest::prelude::*;
use std::collections::BTreeSet;

use super::{op_strategy, word_strategy, TrieOp};
use crate::trie::Trie;

/// Replays `ops`, returning the trie, the model and the expected word count.
fn replay(ops: &[TrieOp]) -> (Trie<char>, BTreeSet<String>, usize) {
    let mut trie = Trie::new();
    let mut model = BTreeSet::new();
    let mut count = 0;

    for op in ops {
        match op {
            TrieOp::Insert(word) => {
                trie.insert_str(word);
                model.insert(word.clone());
                count += 1;
            }
            TrieOp::Delete(word) => {
                let expected = model.remove(word);
                assert_eq!(trie.delete_str(word), expected, "delete({word:?})");
                if expected {
                    count -= 1;
                }
            }
        }
    }

    (trie, model, count)
}

proptest! {
    // Property: enumeration returns exactly the present words, in sorted order
    #[test]
    fn prop_words_match_model(ops in op_strategy()) {
        let (trie, model, _) = replay(&ops);
        let expected: Vec<String> = model.into_iter().collect();
        prop_assert_eq!(trie.words(), expected);
    }

    // Property: search agrees with the model for arbitrary probes
    #[test]
    fn prop_search_matches_model(ops in op_strategy(), probes in prop::collection::vec(word_strategy(6), 0..32)) {
        let (trie, model, _) = replay(&ops);
        for probe in probes.iter().chain(model.iter()) {
            prop_assert_eq!(trie.search_str(probe), model.contains(probe), "search({:?})", probe);
        }
    }

    // Property: prefix enumeration returns exactly the present words starting with the prefix
    #[test]
    fn prop_prefix_matches_model(ops in op_strategy(), prefix in word_strategy(3)) {
        let (trie, model, _) = replay(&ops);
        let expected: Vec<String> = model
            .iter()
            .filter(|word| word.starts_with(prefix.as_str()))
            .cloned()
            .collect();
        prop_assert_eq!(trie.words_with_prefix(&prefix), expected);
    }

    // Property: word count tracks inserts minus successful deletes
    #[test]
    fn prop_word_count_tracks_mutations(ops in op_strategy()) {
        let (trie, _, count) = replay(&ops);
        prop_assert_eq!(trie.word_count(), count);
    }

    // Property: deleting an absent word changes nothing
    #[test]
    fn prop_delete_absent_is_noop(ops in op_strategy(), probe in word_strategy(6)) {
        let (mut trie, model, count) = replay(&ops);
        prop_assume!(!model.contains(&probe));

        let before = trie.words();
        prop_assert!(!trie.delete_str(&probe));
        prop_assert_eq!(trie.words(), before);
        prop_assert_eq!(trie.word_count(), count);
    }

    // Property: deleting every present word prunes the whole tree
    #[test]
    fn prop_delete_all_prunes_everything(ops in op_strategy()) {
        let (mut trie, model, _) = replay(&ops);
        for word in &model {
            prop_assert!(trie.delete_str(word));
        }
        prop_assert!(trie.is_empty());
        prop_assert!(trie.words().is_empty());
    }
}
