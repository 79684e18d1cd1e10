// Copyright (c) 2026 shard-rewrite contributors
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! Error types for statement-model lookups

use crate::segment::SegmentKind;

/// Result type alias for statement-model operations
pub type StatementResult<T> = Result<T, StatementError>;

/// Errors raised by statement-model lookups.
///
/// Absence of a segment is *not* an error: singleton lookups return
/// `Ok(None)` and multi-lookups return an empty collection. An error is only
/// raised when the caller's cardinality expectation is violated.
#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum StatementError {
    /// A singleton segment lookup matched more than one segment
    #[error("Ambiguous segment match: expected at most one '{kind}' segment, found {count}")]
    AmbiguousSegment { kind: SegmentKind, count: usize },
}
