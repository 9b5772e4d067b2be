// Copyright (c) 2025 Comp Trie Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Test modules for Comp Trie.
//!
//! This module contains the crate-internal testing infrastructure:
//! - Property-based tests of the trie against a set model
//! - Observer notification tests using mock observers
//! - Configuration loading and validation tests
//! - Error display tests
//! - Shared strategies and fixtures

pub mod observer_tests;
pub mod trie_property_tests;

// Re-export commonly used testing tools to simplify imports in test modules
pub use test_utils::{op_strategy, word_strategy, TestFixture, TrieOp, SCENARIO_WORDS};
