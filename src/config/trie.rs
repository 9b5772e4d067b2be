// Copyright (c) 2025 Comp Trie Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Trie configuration module.
//!
//! This module defines the options applied when a trie is constructed from
//! configuration rather than directly through the library API.

use super::{ConfigResult, Validate};
use serde::{Deserialize, Serialize};

/// Options applied to tries built with [`crate::trie::Trie::with_options`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrieOptions {
    /// Whether to attach a tracing observer that logs every insert and delete
    pub log_mutations: bool,
}

impl Validate for TrieOptions {
    fn validate(&self) -> ConfigResult<()> {
        Ok(())
    }
}
