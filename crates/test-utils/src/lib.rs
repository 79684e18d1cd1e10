// Copyright (c) 2026 shard-rewrite contributors
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! Testing utilities for shard-rewrite
//!
//! This crate provides common testing components:
//! - Segment fixtures with real offsets into fixture SQL texts
//! - Ready-made statement fixtures for token-generator tests
//! - Rule-context builders (encrypt/sharding rules, route summaries)

pub mod rules;
pub mod segments;
pub mod statements;

// Re-exports for convenience
pub use rules::{encrypt_rule, multi_route, sharding_rule, single_route};
pub use statements::{
    insert_set_statement, insert_set_statement_parameter_pwd, select_row_count_marker,
    select_row_count_only, select_with_limit_and_offset,
};
