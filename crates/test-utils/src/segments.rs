// Copyright (c) 2026 shard-rewrite contributors
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! Segment fixtures with real offsets.
//!
//! Offsets index these fixture SQL texts:
//!
//! ```text
//! INSERT INTO t_user SET user_id = 1, pwd = 'abc'
//! 0         1         2         3         4
//! 0123456789012345678901234567890123456789012345678
//! ```
//!
//! `t_user` at 12..17, SET clause at 19..46, `user_id` at 23..29 with its
//! literal at 33, `pwd` at 36..38 with its literal at 42..46 (or a `?`
//! marker at 42 in the parameterized variant).
//!
//! ```text
//! SELECT * FROM t_order WHERE order_id = 1 ORDER BY order_id LIMIT 5, 10
//! ```
//!
//! `t_order` at 14..20, the predicate at 28..39, the offset literal `5` at
//! 65 and the row-count literal `10` at 68..69.

use shard_rewrite_ast::{
    AssignmentSegment, ColumnSegment, ExpressionSegment, LiteralExpressionSegment,
    PaginationValueSegment, ParameterMarkerExpressionSegment, PredicateOperator,
    PredicateSegment, Segment, SetAssignmentsSegment, TableSegment,
};

/// The INSERT fixture SQL
pub const INSERT_SET_SQL: &str = "INSERT INTO t_user SET user_id = 1, pwd = 'abc'";

/// The SELECT fixture SQL
pub const SELECT_LIMIT_SQL: &str =
    "SELECT * FROM t_order WHERE order_id = 1 ORDER BY order_id LIMIT 5, 10";

/// `t_user` table reference from the INSERT fixture
pub fn user_table() -> Segment {
    Segment::Table(TableSegment::new(12, 17, "t_user"))
}

/// `t_order` table reference from the SELECT fixture
pub fn order_table() -> Segment {
    Segment::Table(TableSegment::new(14, 20, "t_order"))
}

/// SET clause with both assignment values written as literals
pub fn user_set_assignments_literal() -> Segment {
    Segment::SetAssignments(SetAssignmentsSegment::new(
        19,
        46,
        vec![
            AssignmentSegment::new(
                23,
                33,
                ColumnSegment::new(23, 29, "user_id"),
                ExpressionSegment::Literal(LiteralExpressionSegment::new(33, 33, 1_i64)),
            ),
            AssignmentSegment::new(
                36,
                46,
                ColumnSegment::new(36, 38, "pwd"),
                ExpressionSegment::Literal(LiteralExpressionSegment::new(42, 46, "abc")),
            ),
        ],
    ))
}

/// SET clause with the `pwd` value bound as parameter 0
pub fn user_set_assignments_marker() -> Segment {
    Segment::SetAssignments(SetAssignmentsSegment::new(
        19,
        42,
        vec![
            AssignmentSegment::new(
                23,
                33,
                ColumnSegment::new(23, 29, "user_id"),
                ExpressionSegment::Literal(LiteralExpressionSegment::new(33, 33, 1_i64)),
            ),
            AssignmentSegment::new(
                36,
                42,
                ColumnSegment::new(36, 38, "pwd"),
                ExpressionSegment::ParameterMarker(ParameterMarkerExpressionSegment::new(
                    42, 42, 0,
                )),
            ),
        ],
    ))
}

/// `order_id = 1` predicate from the SELECT fixture
pub fn order_id_equals_literal() -> Segment {
    Segment::Predicate(PredicateSegment::new(
        28,
        39,
        ColumnSegment::new(28, 35, "order_id"),
        PredicateOperator::Equal,
        ExpressionSegment::Literal(LiteralExpressionSegment::new(39, 39, 1_i64)),
    ))
}

/// Offset literal `5` from the SELECT fixture
pub fn offset_literal(value: u64) -> Segment {
    Segment::Offset(PaginationValueSegment::NumberLiteral {
        start: 65,
        stop: 65,
        value,
    })
}

/// Row-count literal `10` from the SELECT fixture
pub fn row_count_literal(value: u64) -> Segment {
    Segment::RowCount(PaginationValueSegment::NumberLiteral {
        start: 68,
        stop: 69,
        value,
    })
}

/// Offset bound as a parameter marker
pub fn offset_marker(parameter_index: usize) -> Segment {
    Segment::Offset(PaginationValueSegment::ParameterMarker {
        start: 65,
        stop: 65,
        parameter_index,
    })
}

/// Row count bound as a parameter marker
pub fn row_count_marker(parameter_index: usize) -> Segment {
    Segment::RowCount(PaginationValueSegment::ParameterMarker {
        start: 68,
        stop: 68,
        parameter_index,
    })
}
