// Copyright (c) 2025 Comp Trie Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Comp Trie Library
//!
//! This library contains an uncompressed prefix tree (trie) together with the
//! configuration, error handling and demonstration layers used by the
//! `comp_trie` binary. The trie can also be used on its own as a dependency
//! by other projects.
//!
//! # Architecture
//!
//! - [`trie`]: the trie, its nodes and mutation observers
//! - [`config`]: layered configuration (defaults, file, environment)
//! - [`demo`]: the demonstration runner and its report
//! - [`error`]: error types for the non-trie layers

pub mod config;
pub mod demo;
pub mod error;
pub mod trie;

// Internal modules that are not part of the public API
#[cfg(test)]
pub(crate) mod tests;

pub use trie::Trie;

/// Version information for Comp Trie.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
