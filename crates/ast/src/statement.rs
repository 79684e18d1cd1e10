// Copyright (c) 2026 shard-rewrite contributors
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Statement model
//!
//! [`Statement`] is the structured, queryable representation of one parsed
//! SQL statement: a kind tag, the ordered segment collection appended during
//! parsing, the derived table and condition views consumed by the routing
//! layer, the bind-parameter cursor, and the logic SQL text the current
//! rewrite pass operates over.
//!
//! A statement is exclusively owned by the single rewrite operation
//! processing its SQL execution; it is never shared across requests.

use crate::error::{StatementError, StatementResult};
use crate::segment::{
    ColumnSegment, ExpressionSegment, PredicateOperator, Segment, SegmentKind,
};
use serde::{Deserialize, Serialize};

/// Statement kind tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum StatementKind {
    Select,
    Insert,
    Update,
    Delete,
    Ddl,
}

/// Derived view of the tables a statement touches.
///
/// For single-table DML this holds exactly one entry; for joins it holds all
/// referenced tables.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tables {
    names: Vec<String>,
}

impl Tables {
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n.eq_ignore_ascii_case(name))
    }

    /// The unique table name, when the statement touches exactly one table.
    ///
    /// Returns `None` for zero or multiple tables; per-column rule lookups
    /// are only meaningful against a single target table.
    pub fn single_table_name(&self) -> Option<&str> {
        match self.names.as_slice() {
            [single] => Some(single),
            _ => None,
        }
    }

    fn push(&mut self, name: &str) {
        if !self.contains(name) {
            self.names.push(name.to_string());
        }
    }
}

/// One derived condition, consumed opaquely by the routing or encryption
/// layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Condition {
    pub column: ColumnSegment,
    pub operator: PredicateOperator,
    pub value: ExpressionSegment,
}

/// Derived condition set
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Conditions {
    conditions: Vec<Condition>,
}

impl Conditions {
    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty()
    }

    pub fn len(&self) -> usize {
        self.conditions.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Condition> {
        self.conditions.iter()
    }
}

/// One parsed SQL statement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Statement {
    kind: StatementKind,
    segments: Vec<Segment>,
    tables: Tables,
    sharding_conditions: Conditions,
    encrypt_conditions: Conditions,
    parameters_index: usize,
    logic_sql: String,
}

impl Statement {
    pub fn new(kind: StatementKind) -> Self {
        Self {
            kind,
            segments: Vec::new(),
            tables: Tables::default(),
            sharding_conditions: Conditions::default(),
            encrypt_conditions: Conditions::default(),
            parameters_index: 0,
            logic_sql: String::new(),
        }
    }

    pub fn kind(&self) -> StatementKind {
        self.kind
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Append a segment. Construction-time only.
    pub fn push_segment(&mut self, segment: Segment) {
        self.segments.push(segment);
    }

    /// Advance the bind-parameter cursor. Construction-time only; the cursor
    /// is monotonically non-decreasing and frozen once parsing completes.
    pub fn increment_parameters_index(&mut self, by: usize) {
        self.parameters_index += by;
    }

    /// Count of positional bind-parameters consumed while filling segments.
    pub fn parameters_index(&self) -> usize {
        self.parameters_index
    }

    /// Assign the SQL text this statement's rewrite pass operates over.
    /// Set once by the caller after parsing.
    pub fn set_logic_sql(&mut self, sql: impl Into<String>) {
        self.logic_sql = sql.into();
    }

    pub fn logic_sql(&self) -> &str {
        &self.logic_sql
    }

    /// Find the unique segment of the given kind.
    ///
    /// Absence is an expected, non-error outcome (`Ok(None)`); more than one
    /// match signals a caller contract violation and fails loudly.
    pub fn find_segment(&self, kind: SegmentKind) -> StatementResult<Option<&Segment>> {
        let mut matches = self.segments.iter().filter(|s| s.kind() == kind);
        let first = matches.next();
        let rest = matches.count();
        if rest > 0 {
            return Err(StatementError::AmbiguousSegment {
                kind,
                count: rest + 1,
            });
        }
        Ok(first)
    }

    /// Find all segments of the given kind, possibly empty.
    pub fn find_segments(&self, kind: SegmentKind) -> Vec<&Segment> {
        self.segments.iter().filter(|s| s.kind() == kind).collect()
    }

    pub fn tables(&self) -> &Tables {
        &self.tables
    }

    pub fn sharding_conditions(&self) -> &Conditions {
        &self.sharding_conditions
    }

    pub fn encrypt_conditions(&self) -> &Conditions {
        &self.encrypt_conditions
    }

    /// Derive the table view from the filled segment collection.
    ///
    /// Runs as a post-pass after all segments are filled; the result is
    /// independent of segment traversal order.
    pub fn derive_tables(&mut self) {
        let names: Vec<String> = self
            .segments
            .iter()
            .filter_map(|s| match s {
                Segment::Table(table) => Some(table.name.clone()),
                _ => None,
            })
            .collect();
        for name in names {
            self.tables.push(&name);
        }
    }

    /// Derive the sharding and encryption condition sets from the filled
    /// predicate segments.
    ///
    /// Sharding conditions keep only equality/IN predicates (the shapes
    /// routing can act on); encryption conditions keep every predicate, since
    /// the encryption layer must rewrite any comparison against an encrypted
    /// column.
    pub fn derive_conditions(&mut self) {
        for segment in &self.segments {
            let Segment::Predicate(predicate) = segment else {
                continue;
            };
            let condition = Condition {
                column: predicate.column.clone(),
                operator: predicate.operator,
                value: predicate.value.clone(),
            };
            if matches!(
                predicate.operator,
                PredicateOperator::Equal | PredicateOperator::In
            ) {
                self.sharding_conditions.conditions.push(condition.clone());
            }
            self.encrypt_conditions.conditions.push(condition);
        }
    }
}
