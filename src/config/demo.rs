// Copyright (c) 2025 Comp Trie Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Demonstration configuration module.
//!
//! This module defines the inputs of the demonstration runner: which words
//! are inserted, which prefix is enumerated, which word is searched for and
//! which word is deleted, plus how the report is rendered.

use super::{ConfigResult, Validate};
use crate::error::config::ConfigError;
use serde::{Deserialize, Serialize};

/// Output format for the demonstration report.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable text
    #[default]
    Text,
    /// Pretty-printed JSON
    Json,
}

/// Demonstration configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DemoConfig {
    /// Words inserted into the trie, in order
    pub words: Vec<String>,

    /// Prefix whose matching words are listed
    pub prefix: String,

    /// Word looked up after insertion
    pub search: String,

    /// Word deleted at the end of the run
    pub delete: String,

    /// How the report is rendered
    pub output: OutputFormat,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            words: ["axy", "abxy", "bca", "bxta"]
                .into_iter()
                .map(String::from)
                .collect(),
            prefix: "b".to_string(),
            search: "abxy".to_string(),
            delete: "axy".to_string(),
            output: OutputFormat::Text,
        }
    }
}

impl Validate for DemoConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.words.is_empty() {
            return Err(ConfigError::ValidationError(
                "demo.words must contain at least one word".to_string(),
            ));
        }

        Ok(())
    }
}
