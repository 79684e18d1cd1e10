// Copyright (c) 2026 shard-rewrite contributors
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # shard-rewrite - Statement Model
//!
//! This crate provides the parsed-statement data model for the SQL rewrite
//! core. It defines:
//!
//! - [`Dialect`]: SQL dialect identifiers
//! - [`Segment`]: syntactic fragments annotated with character offsets into
//!   the original SQL text
//! - [`Statement`]: the queryable representation of one parsed SQL statement
//! - [`ParameterValue`]: positional bind-parameter values
//!
//! ## Offsets
//!
//! Every segment carries an inclusive, 0-based `[start, stop]` range into the
//! *original* SQL text. Offsets never refer to already-rewritten text from a
//! previous pass; a rewrite is always a splice of the untouched input.
//!
//! ## Lifecycle
//!
//! A [`Statement`] is constructed once per SQL execution by the parse-rule
//! pipeline, mutated only during construction (segment filling, parameter
//! index bookkeeping) and once afterwards (`set_logic_sql`), then read-only
//! for the duration of token generation.

pub mod dialect;
pub mod error;
pub mod segment;
pub mod statement;
pub mod value;

// Re-exports
pub use dialect::Dialect;
pub use error::{StatementError, StatementResult};
pub use segment::{
    AssignmentSegment, ColumnDefinitionSegment, ColumnSegment, ExpressionSegment,
    LiteralExpressionSegment, PaginationValueSegment, ParameterMarkerExpressionSegment,
    PredicateOperator, PredicateSegment, Segment, SegmentKind, SetAssignmentsSegment,
    TableSegment,
};
pub use statement::{Condition, Conditions, Statement, StatementKind, Tables};
pub use value::ParameterValue;
