// Copyright (c) 2026 shard-rewrite contributors
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! Error types for the parse-rule registry and construction pipeline

use shard_rewrite_ast::{Dialect, SegmentKind, StatementError};

use crate::registry::StatementShape;

/// Result type alias for parse-rule operations
pub type ParseRuleResult<T> = Result<T, ParseRuleError>;

/// Errors raised by registry lookups and statement construction.
///
/// `Clone` so the shared, lazily-built registry instances can hand a build
/// failure to every caller instead of panicking.
#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum ParseRuleError {
    /// No statement rule registered for the (dialect, shape) pair.
    /// Fatal for the statement: parsing cannot proceed without a rule.
    #[error("No statement rule registered for dialect '{dialect}' and shape '{shape}'")]
    StatementRuleNotFound {
        dialect: Dialect,
        shape: StatementShape,
    },

    /// Two statement rules registered under the same key.
    /// Rejected when the registry is built, never at lookup time.
    #[error("Duplicate statement rule for dialect '{dialect}' and shape '{shape}'")]
    DuplicateStatementRule {
        dialect: Dialect,
        shape: StatementShape,
    },

    /// Two segment fillers registered under the same key
    #[error("Duplicate segment filler for dialect '{dialect}' and segment kind '{kind}'")]
    DuplicateSegmentFiller { dialect: Dialect, kind: SegmentKind },

    /// A filler was handed a segment of a kind it is not registered for
    #[error("Segment filler expected '{expected}' segment, got '{found}'")]
    SegmentKindMismatch {
        expected: SegmentKind,
        found: SegmentKind,
    },

    /// Statement-model lookup failure during construction
    #[error(transparent)]
    Statement(#[from] StatementError),
}
