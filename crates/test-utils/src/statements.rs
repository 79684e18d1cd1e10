// Copyright (c) 2026 shard-rewrite contributors
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! Ready-made statement fixtures for token-generator tests.
//!
//! These are assembled directly on the statement model (segment append +
//! derivation post-pass), mirroring what the construction pipeline produces
//! for the fixture SQL texts in [`crate::segments`].

use crate::segments;
use shard_rewrite_ast::{PaginationValueSegment, Segment, Statement, StatementKind};

fn assemble(kind: StatementKind, sql: &str, segments: Vec<Segment>) -> Statement {
    let mut statement = Statement::new(kind);
    for segment in segments {
        statement.increment_parameters_index(segment.parameter_marker_count());
        statement.push_segment(segment);
    }
    statement.derive_tables();
    statement.derive_conditions();
    statement.set_logic_sql(sql);
    statement
}

/// `INSERT INTO t_user SET user_id = 1, pwd = 'abc'`
pub fn insert_set_statement() -> Statement {
    assemble(
        StatementKind::Insert,
        segments::INSERT_SET_SQL,
        vec![
            segments::user_table(),
            segments::user_set_assignments_literal(),
        ],
    )
}

/// `INSERT INTO t_user SET user_id = 1, pwd = ?`
pub fn insert_set_statement_parameter_pwd() -> Statement {
    assemble(
        StatementKind::Insert,
        "INSERT INTO t_user SET user_id = 1, pwd = ?",
        vec![
            segments::user_table(),
            segments::user_set_assignments_marker(),
        ],
    )
}

/// `SELECT * FROM t_order WHERE order_id = 1 ORDER BY order_id LIMIT 5, 10`
pub fn select_with_limit_and_offset(offset: u64, row_count: u64) -> Statement {
    assemble(
        StatementKind::Select,
        segments::SELECT_LIMIT_SQL,
        vec![
            segments::order_table(),
            segments::order_id_equals_literal(),
            segments::offset_literal(offset),
            segments::row_count_literal(row_count),
        ],
    )
}

/// `SELECT * FROM t_order LIMIT 10` - row count literal at 28..29, no offset
pub fn select_row_count_only(row_count: u64) -> Statement {
    assemble(
        StatementKind::Select,
        "SELECT * FROM t_order LIMIT 10",
        vec![
            segments::order_table(),
            Segment::RowCount(PaginationValueSegment::NumberLiteral {
                start: 28,
                stop: 29,
                value: row_count,
            }),
        ],
    )
}

/// `SELECT * FROM t_order LIMIT ?` - row count bound as parameter 0
pub fn select_row_count_marker() -> Statement {
    assemble(
        StatementKind::Select,
        "SELECT * FROM t_order LIMIT ?",
        vec![
            segments::order_table(),
            Segment::RowCount(PaginationValueSegment::ParameterMarker {
                start: 28,
                stop: 28,
                parameter_index: 0,
            }),
        ],
    )
}
