// Copyright (c) 2026 shard-rewrite contributors
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # shard-rewrite - Parse Rule Registry
//!
//! This crate provides the dialect-aware parse-rule registry and the
//! statement construction pipeline built on top of it.
//!
//! ## Architecture
//!
//! Three independent registry instances exist, one per rule family
//! ([`RuleFamily`]): general sharding parsing, encryption-aware parsing, and
//! read/write-split parsing. Each has its own registration namespace; they
//! never share state.
//!
//! A registry maps:
//!
//! - `(Dialect, StatementShape)` → [`StatementRule`]: which grammar
//!   production applies and which statement kind it produces. Exactly one
//!   registration per key; duplicates are rejected when the registry is
//!   built, and a missing registration is a hard failure for the statement.
//! - `(Dialect, SegmentKind)` → [`SegmentFiller`]: how an extracted segment
//!   lands on the statement. Absence is a valid outcome: segment variants
//!   with no filler for a dialect are simply skipped.
//!
//! This decouples "what a segment means" from "how this dialect's grammar
//! expresses it", so new dialects can be added without touching the
//! statement model or any token generator.
//!
//! ## Construction pipeline
//!
//! [`StatementBuilder`] consumes the segments extracted by the (external)
//! grammar layer, resolves the statement rule, runs each segment through its
//! registered filler, then derives the table and condition views as a
//! post-pass.

pub mod builder;
pub mod error;
pub mod filler;
pub mod registry;

// Re-exports
pub use builder::StatementBuilder;
pub use error::{ParseRuleError, ParseRuleResult};
pub use filler::SegmentFiller;
pub use registry::{ParseRuleRegistry, RuleFamily, StatementRule, StatementShape};
