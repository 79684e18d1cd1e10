// Copyright (c) 2026 shard-rewrite contributors
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Segment model
//!
//! Segments are immutable value types representing syntactic fragments of a
//! parsed SQL statement. Every segment carries its inclusive, 0-based
//! `[start, stop]` character range in the original SQL text.
//!
//! Invariant: `start <= stop`, and offsets always index the untouched
//! original SQL text, never text produced by a previous rewrite pass.

use crate::value::ParameterValue;
use serde::{Deserialize, Serialize};

/// Discriminant for segment variants, used for statement queries and for
/// keying segment fillers in the parse-rule registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum SegmentKind {
    Table,
    SetAssignments,
    Predicate,
    RowCount,
    Offset,
    ColumnDefinition,
}

impl SegmentKind {
    pub fn name(&self) -> &'static str {
        match self {
            SegmentKind::Table => "table",
            SegmentKind::SetAssignments => "set_assignments",
            SegmentKind::Predicate => "predicate",
            SegmentKind::RowCount => "row_count",
            SegmentKind::Offset => "offset",
            SegmentKind::ColumnDefinition => "column_definition",
        }
    }
}

impl std::fmt::Display for SegmentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A column reference
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnSegment {
    pub start: usize,
    pub stop: usize,
    /// Column name, without quoting
    pub name: String,
    /// Optional owner qualifier (`owner.column`)
    pub owner: Option<String>,
}

impl ColumnSegment {
    pub fn new(start: usize, stop: usize, name: impl Into<String>) -> Self {
        debug_assert!(start <= stop);
        Self {
            start,
            stop,
            name: name.into(),
            owner: None,
        }
    }

    pub fn with_owner(mut self, owner: impl Into<String>) -> Self {
        self.owner = Some(owner.into());
        self
    }
}

/// A literal value expression
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LiteralExpressionSegment {
    pub start: usize,
    pub stop: usize,
    pub literal: ParameterValue,
}

impl LiteralExpressionSegment {
    pub fn new(start: usize, stop: usize, literal: impl Into<ParameterValue>) -> Self {
        debug_assert!(start <= stop);
        Self {
            start,
            stop,
            literal: literal.into(),
        }
    }
}

/// A positional parameter-marker expression (`?` or `$n`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParameterMarkerExpressionSegment {
    pub start: usize,
    pub stop: usize,
    /// 0-based position in the bound-parameter list
    pub parameter_index: usize,
}

impl ParameterMarkerExpressionSegment {
    pub fn new(start: usize, stop: usize, parameter_index: usize) -> Self {
        debug_assert!(start <= stop);
        Self {
            start,
            stop,
            parameter_index,
        }
    }
}

/// A value expression: either a literal or a parameter marker.
///
/// The distinction drives rewrite behavior: literal values can be rewritten
/// in place as text tokens, parameter markers must be transformed in the
/// bound-parameter list by the execution layer instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ExpressionSegment {
    Literal(LiteralExpressionSegment),
    ParameterMarker(ParameterMarkerExpressionSegment),
}

impl ExpressionSegment {
    pub fn start(&self) -> usize {
        match self {
            ExpressionSegment::Literal(s) => s.start,
            ExpressionSegment::ParameterMarker(s) => s.start,
        }
    }

    pub fn stop(&self) -> usize {
        match self {
            ExpressionSegment::Literal(s) => s.stop,
            ExpressionSegment::ParameterMarker(s) => s.stop,
        }
    }

    pub fn is_parameter_marker(&self) -> bool {
        matches!(self, ExpressionSegment::ParameterMarker(_))
    }
}

/// One `column = value` assignment inside a SET clause
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssignmentSegment {
    pub start: usize,
    pub stop: usize,
    pub column: ColumnSegment,
    pub value: ExpressionSegment,
}

impl AssignmentSegment {
    pub fn new(start: usize, stop: usize, column: ColumnSegment, value: ExpressionSegment) -> Self {
        debug_assert!(start <= stop);
        Self {
            start,
            stop,
            column,
            value,
        }
    }
}

/// A SET-style assignment clause (`INSERT ... SET a = 1, b = ?` or the SET
/// clause of an UPDATE)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SetAssignmentsSegment {
    pub start: usize,
    pub stop: usize,
    pub assignments: Vec<AssignmentSegment>,
}

impl SetAssignmentsSegment {
    pub fn new(start: usize, stop: usize, assignments: Vec<AssignmentSegment>) -> Self {
        debug_assert!(start <= stop);
        Self {
            start,
            stop,
            assignments,
        }
    }
}

/// A table reference
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableSegment {
    pub start: usize,
    pub stop: usize,
    pub name: String,
    pub alias: Option<String>,
}

impl TableSegment {
    pub fn new(start: usize, stop: usize, name: impl Into<String>) -> Self {
        debug_assert!(start <= stop);
        Self {
            start,
            stop,
            name: name.into(),
            alias: None,
        }
    }

    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }
}

/// Comparison operator of a WHERE predicate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum PredicateOperator {
    Equal,
    In,
    Greater,
    GreaterOrEqual,
    Less,
    LessOrEqual,
    Like,
}

/// A simple `column OP value` predicate from a WHERE clause
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredicateSegment {
    pub start: usize,
    pub stop: usize,
    pub column: ColumnSegment,
    pub operator: PredicateOperator,
    pub value: ExpressionSegment,
}

impl PredicateSegment {
    pub fn new(
        start: usize,
        stop: usize,
        column: ColumnSegment,
        operator: PredicateOperator,
        value: ExpressionSegment,
    ) -> Self {
        debug_assert!(start <= stop);
        Self {
            start,
            stop,
            column,
            operator,
            value,
        }
    }
}

/// A pagination bound (LIMIT/OFFSET value): either a number literal written
/// in the SQL text or a parameter marker resolved at execution time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaginationValueSegment {
    NumberLiteral {
        start: usize,
        stop: usize,
        value: u64,
    },
    ParameterMarker {
        start: usize,
        stop: usize,
        parameter_index: usize,
    },
}

impl PaginationValueSegment {
    pub fn start(&self) -> usize {
        match self {
            PaginationValueSegment::NumberLiteral { start, .. } => *start,
            PaginationValueSegment::ParameterMarker { start, .. } => *start,
        }
    }

    pub fn stop(&self) -> usize {
        match self {
            PaginationValueSegment::NumberLiteral { stop, .. } => *stop,
            PaginationValueSegment::ParameterMarker { stop, .. } => *stop,
        }
    }

    pub fn is_parameter_marker(&self) -> bool {
        matches!(self, PaginationValueSegment::ParameterMarker { .. })
    }
}

/// A column definition from a DDL statement
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnDefinitionSegment {
    pub start: usize,
    pub stop: usize,
    pub column_name: String,
    pub type_name: String,
    pub primary_key: bool,
}

impl ColumnDefinitionSegment {
    pub fn new(
        start: usize,
        stop: usize,
        column_name: impl Into<String>,
        type_name: impl Into<String>,
    ) -> Self {
        debug_assert!(start <= stop);
        Self {
            start,
            stop,
            column_name: column_name.into(),
            type_name: type_name.into(),
            primary_key: false,
        }
    }

    pub fn with_primary_key(mut self) -> Self {
        self.primary_key = true;
        self
    }
}

/// A syntactic fragment of a parsed statement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum Segment {
    Table(TableSegment),
    SetAssignments(SetAssignmentsSegment),
    Predicate(PredicateSegment),
    RowCount(PaginationValueSegment),
    Offset(PaginationValueSegment),
    ColumnDefinition(ColumnDefinitionSegment),
}

impl Segment {
    pub fn kind(&self) -> SegmentKind {
        match self {
            Segment::Table(_) => SegmentKind::Table,
            Segment::SetAssignments(_) => SegmentKind::SetAssignments,
            Segment::Predicate(_) => SegmentKind::Predicate,
            Segment::RowCount(_) => SegmentKind::RowCount,
            Segment::Offset(_) => SegmentKind::Offset,
            Segment::ColumnDefinition(_) => SegmentKind::ColumnDefinition,
        }
    }

    pub fn start(&self) -> usize {
        match self {
            Segment::Table(s) => s.start,
            Segment::SetAssignments(s) => s.start,
            Segment::Predicate(s) => s.start,
            Segment::RowCount(s) => s.start(),
            Segment::Offset(s) => s.start(),
            Segment::ColumnDefinition(s) => s.start,
        }
    }

    pub fn stop(&self) -> usize {
        match self {
            Segment::Table(s) => s.stop,
            Segment::SetAssignments(s) => s.stop,
            Segment::Predicate(s) => s.stop,
            Segment::RowCount(s) => s.stop(),
            Segment::Offset(s) => s.stop(),
            Segment::ColumnDefinition(s) => s.stop,
        }
    }

    /// Count the parameter markers inside this segment.
    ///
    /// The construction pipeline advances the statement's parameter-index
    /// cursor by this amount when the segment is filled.
    pub fn parameter_marker_count(&self) -> usize {
        match self {
            Segment::Table(_) | Segment::ColumnDefinition(_) => 0,
            Segment::SetAssignments(s) => s
                .assignments
                .iter()
                .filter(|a| a.value.is_parameter_marker())
                .count(),
            Segment::Predicate(s) => usize::from(s.value.is_parameter_marker()),
            Segment::RowCount(s) | Segment::Offset(s) => usize::from(s.is_parameter_marker()),
        }
    }
}
