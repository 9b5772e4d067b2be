// Copyright (c) 2025 Comp Trie Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Demonstration runner.
//!
//! Builds a trie from the configured words and walks through every trie
//! operation once: full enumeration, prefix enumeration, search and delete.
//! The outcome is captured in a [`DemoReport`] that can be rendered as text
//! or JSON.

use serde::Serialize;
use std::fmt::Write;
use tracing::{debug, info};

use crate::config::{DemoConfig, OutputFormat, TrieOptions};
use crate::error::{CompTrieError, CompTrieResult};
use crate::trie::Trie;

/// Outcome of a demonstration run.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct DemoReport {
    /// Words inserted, in insertion order
    pub inserted: Vec<String>,

    /// Every stored word after insertion
    pub all_words: Vec<String>,

    /// The enumerated prefix
    pub prefix: String,

    /// Stored words starting with `prefix`
    pub prefix_matches: Vec<String>,

    /// The searched word
    pub search: String,

    /// Whether `search` was found
    pub found: bool,

    /// The deleted word
    pub delete: String,

    /// Whether `delete` was present and removed
    pub deleted: bool,

    /// Every stored word after deletion
    pub remaining_words: Vec<String>,

    /// Word count after deletion
    pub word_count: usize,
}

/// Runs the demonstration described by `config`.
pub fn run(config: &DemoConfig, options: &TrieOptions) -> DemoReport {
    let mut trie = Trie::<char>::with_options(options);

    for word in &config.words {
        trie.insert_str(word);
    }
    info!(count = trie.word_count(), "Inserted demo words");

    let all_words = trie.words();
    let prefix_matches = trie.words_with_prefix(&config.prefix);
    debug!(prefix = %config.prefix, matches = prefix_matches.len(), "Enumerated prefix");

    let found = trie.search_str(&config.search);
    let deleted = trie.delete_str(&config.delete);
    debug!(word = %config.delete, deleted, "Delete finished");

    DemoReport {
        inserted: config.words.clone(),
        all_words,
        prefix: config.prefix.clone(),
        prefix_matches,
        search: config.search.clone(),
        found,
        delete: config.delete.clone(),
        deleted,
        remaining_words: trie.words(),
        word_count: trie.word_count(),
    }
}

impl DemoReport {
    /// Renders the report in the requested format.
    pub fn render(&self, format: OutputFormat) -> CompTrieResult<String> {
        match format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(self)?),
            OutputFormat::Text => self.render_text(),
        }
    }

    fn render_text(&self) -> CompTrieResult<String> {
        let mut out = String::new();
        self.write_text(&mut out)
            .map_err(|e| CompTrieError::Custom(format!("Failed to render report: {e}")))?;
        Ok(out)
    }

    fn write_text(&self, out: &mut String) -> std::fmt::Result {
        writeln!(out, "All words in trie:")?;
        writeln!(out, "{:?}", self.all_words)?;
        writeln!(out)?;
        writeln!(out, "All words with prefix '{}':", self.prefix)?;
        writeln!(out, "{:?}", self.prefix_matches)?;
        writeln!(out)?;
        writeln!(out, "Searching for '{}':", self.search)?;
        writeln!(out, "{}", self.found)?;
        writeln!(out)?;
        writeln!(out, "Deleting '{}':", self.delete)?;
        writeln!(out, "{}", self.deleted)?;
        writeln!(out)?;
        writeln!(out, "All words in trie after deletion:")?;
        writeln!(out, "{:?}", self.remaining_words)?;
        write!(out, "Word count: {}", self.word_count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_demo() {
        let report = run(&DemoConfig::default(), &TrieOptions::default());

        assert_eq!(report.all_words, vec!["abxy", "axy", "bca", "bxta"]);
        assert_eq!(report.prefix_matches, vec!["bca", "bxta"]);
        assert!(report.found);
        assert!(report.deleted);
        assert_eq!(report.remaining_words, vec!["abxy", "bca", "bxta"]);
        assert_eq!(report.word_count, 3);
    }

    #[test]
    fn test_demo_with_absent_words() {
        let config = DemoConfig {
            words: vec!["alpha".to_string(), "beta".to_string()],
            prefix: "z".to_string(),
            search: "gamma".to_string(),
            delete: "delta".to_string(),
            output: OutputFormat::Text,
        };
        let report = run(&config, &TrieOptions { log_mutations: true });

        assert!(report.prefix_matches.is_empty());
        assert!(!report.found);
        assert!(!report.deleted);
        assert_eq!(report.remaining_words, report.all_words);
        assert_eq!(report.word_count, 2);
    }

    #[test]
    fn test_render_text() {
        let report = run(&DemoConfig::default(), &TrieOptions::default());
        let text = report.render(OutputFormat::Text).unwrap();

        assert!(text.contains("All words with prefix 'b':\n[\"bca\", \"bxta\"]"));
        assert!(text.contains("Searching for 'abxy':\ntrue"));
        assert!(text.ends_with("Word count: 3"));
    }

    #[test]
    fn test_render_json() {
        let report = run(&DemoConfig::default(), &TrieOptions::default());
        let json = report.render(OutputFormat::Json).unwrap();

        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["prefix_matches"], serde_json::json!(["bca", "bxta"]));
        assert_eq!(value["deleted"], serde_json::json!(true));
        assert_eq!(value["word_count"], serde_json::json!(3));
    }
}
