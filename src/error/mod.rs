// Copyright (c) 2025 Comp Trie Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Error module for Comp Trie.
//!
//! Trie operations never fail: absence is reported as `false` or an empty
//! result. The errors defined here belong to the surrounding layers, namely
//! configuration loading, report rendering and file output.

use thiserror::Error;

pub mod config;

/// Result type alias used throughout Comp Trie.
pub type CompTrieResult<T> = Result<T, CompTrieError>;

/// Core error enum for Comp Trie.
#[derive(Error, Debug)]
pub enum CompTrieError {
    /// Errors occurring during configuration loading or validation.
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// IO errors that may occur during file operations.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/Deserialization errors.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Custom error with message for cases where specific error types are not defined.
    #[error("{0}")]
    Custom(String),
}
