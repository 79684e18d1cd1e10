// Copyright (c) 2026 shard-rewrite contributors
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! Segment fillers: how an extracted segment lands on the statement.
//!
//! A filler appends its segment to the statement and advances the
//! bind-parameter cursor by the segment's parameter-marker count. Each filler
//! first checks it was handed the segment kind it is registered for, so a
//! mis-registration fails loudly instead of silently corrupting the
//! statement.

use crate::error::{ParseRuleError, ParseRuleResult};
use shard_rewrite_ast::{Segment, SegmentKind, Statement};

/// How a segment variant is filled into a statement for one dialect.
///
/// Implementations are registered per `(Dialect, SegmentKind)` in the
/// parse-rule registry and shared read-only across concurrent statement
/// constructions.
pub trait SegmentFiller: Send + Sync {
    /// The segment kind this filler accepts
    fn kind(&self) -> SegmentKind;

    /// Fill the segment into the statement
    fn fill(&self, segment: Segment, statement: &mut Statement) -> ParseRuleResult<()> {
        if segment.kind() != self.kind() {
            return Err(ParseRuleError::SegmentKindMismatch {
                expected: self.kind(),
                found: segment.kind(),
            });
        }
        statement.increment_parameters_index(segment.parameter_marker_count());
        statement.push_segment(segment);
        Ok(())
    }
}

/// Fills table-reference segments
#[derive(Debug, Clone, Copy)]
pub struct TableFiller;

impl SegmentFiller for TableFiller {
    fn kind(&self) -> SegmentKind {
        SegmentKind::Table
    }
}

/// Fills SET-assignment clause segments (MySQL `INSERT ... SET`, UPDATE SET)
#[derive(Debug, Clone, Copy)]
pub struct SetAssignmentsFiller;

impl SegmentFiller for SetAssignmentsFiller {
    fn kind(&self) -> SegmentKind {
        SegmentKind::SetAssignments
    }
}

/// Fills WHERE-predicate segments
#[derive(Debug, Clone, Copy)]
pub struct PredicateFiller;

impl SegmentFiller for PredicateFiller {
    fn kind(&self) -> SegmentKind {
        SegmentKind::Predicate
    }
}

/// Fills pagination bound segments, one instance per bound kind
#[derive(Debug, Clone, Copy)]
pub struct PaginationFiller {
    expected: SegmentKind,
}

impl PaginationFiller {
    pub fn row_count() -> Self {
        Self {
            expected: SegmentKind::RowCount,
        }
    }

    pub fn offset() -> Self {
        Self {
            expected: SegmentKind::Offset,
        }
    }
}

impl SegmentFiller for PaginationFiller {
    fn kind(&self) -> SegmentKind {
        self.expected
    }
}

/// Fills DDL column-definition segments
#[derive(Debug, Clone, Copy)]
pub struct ColumnDefinitionFiller;

impl SegmentFiller for ColumnDefinitionFiller {
    fn kind(&self) -> SegmentKind {
        SegmentKind::ColumnDefinition
    }
}
