// Copyright (c) 2026 shard-rewrite contributors
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! Statement construction pipeline.
//!
//! Consumes the segments extracted by the (external) grammar layer and
//! assembles a [`Statement`]: resolve the statement rule for the dialect and
//! shape, run each segment through its registered filler, then derive the
//! table and condition views as a post-pass over the completed segment
//! collection.

use crate::error::ParseRuleResult;
use crate::registry::{ParseRuleRegistry, StatementShape};
use shard_rewrite_ast::{Dialect, Segment, Statement};
use tracing::trace;

/// Builds statements from extracted segments through one registry instance.
pub struct StatementBuilder<'a> {
    registry: &'a ParseRuleRegistry,
    dialect: Dialect,
}

impl<'a> StatementBuilder<'a> {
    pub fn new(registry: &'a ParseRuleRegistry, dialect: Dialect) -> Self {
        Self { registry, dialect }
    }

    pub fn dialect(&self) -> Dialect {
        self.dialect
    }

    /// Build a statement from the segments extracted for one SQL text.
    ///
    /// Fails hard when the (dialect, shape) pair has no statement rule.
    /// Segments whose kind has no registered filler for this dialect are
    /// skipped; that is a valid outcome, not an error. The caller assigns
    /// `logic_sql` afterwards.
    pub fn build(
        &self,
        shape: StatementShape,
        segments: Vec<Segment>,
    ) -> ParseRuleResult<Statement> {
        let rule = self.registry.statement_rule(self.dialect, shape)?;
        let mut statement = Statement::new(rule.kind());
        for segment in segments {
            match self.registry.segment_filler(self.dialect, segment.kind()) {
                Some(filler) => filler.fill(segment, &mut statement)?,
                None => {
                    trace!(
                        dialect = self.dialect.name(),
                        kind = segment.kind().name(),
                        "no segment filler registered, skipping segment"
                    );
                }
            }
        }
        statement.derive_tables();
        statement.derive_conditions();
        Ok(statement)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ParseRuleError;
    use crate::registry::RuleFamily;
    use shard_rewrite_ast::{SegmentKind, StatementKind};
    use shard_rewrite_test_utils::segments;

    fn sharding_registry() -> ParseRuleRegistry {
        ParseRuleRegistry::with_defaults(RuleFamily::Sharding).unwrap()
    }

    #[test]
    fn test_build_insert_set_statement() {
        let registry = sharding_registry();
        let builder = StatementBuilder::new(&registry, Dialect::MySQL);
        let statement = builder
            .build(
                StatementShape::Insert,
                vec![
                    segments::user_table(),
                    segments::user_set_assignments_literal(),
                ],
            )
            .unwrap();
        assert_eq!(statement.kind(), StatementKind::Insert);
        assert_eq!(statement.tables().single_table_name(), Some("t_user"));
        assert!(
            statement
                .find_segment(SegmentKind::SetAssignments)
                .unwrap()
                .is_some()
        );
    }

    #[test]
    fn test_build_counts_parameter_markers() {
        let registry = sharding_registry();
        let builder = StatementBuilder::new(&registry, Dialect::MySQL);
        let statement = builder
            .build(
                StatementShape::Insert,
                vec![
                    segments::user_table(),
                    segments::user_set_assignments_marker(),
                ],
            )
            .unwrap();
        // One assignment value is a parameter marker
        assert_eq!(statement.parameters_index(), 1);
    }

    #[test]
    fn test_parameters_index_is_traversal_order_independent() {
        let registry = sharding_registry();
        let builder = StatementBuilder::new(&registry, Dialect::MySQL);
        let forward = builder
            .build(
                StatementShape::Select,
                vec![
                    segments::order_table(),
                    segments::offset_marker(0),
                    segments::row_count_marker(1),
                ],
            )
            .unwrap();
        let reversed = builder
            .build(
                StatementShape::Select,
                vec![
                    segments::row_count_marker(1),
                    segments::offset_marker(0),
                    segments::order_table(),
                ],
            )
            .unwrap();
        assert_eq!(forward.parameters_index(), 2);
        assert_eq!(forward.parameters_index(), reversed.parameters_index());
    }

    #[test]
    fn test_unfilled_segment_is_skipped() {
        let registry = sharding_registry();
        // Oracle has no SET-assignments filler registered
        let builder = StatementBuilder::new(&registry, Dialect::Oracle);
        let statement = builder
            .build(
                StatementShape::Insert,
                vec![
                    segments::user_table(),
                    segments::user_set_assignments_literal(),
                ],
            )
            .unwrap();
        assert_eq!(
            statement.find_segment(SegmentKind::SetAssignments).unwrap(),
            None
        );
        // The table segment still went through its filler
        assert_eq!(statement.tables().single_table_name(), Some("t_user"));
    }

    #[test]
    fn test_missing_statement_rule_is_fatal() {
        let registry = ParseRuleRegistry::new(RuleFamily::Sharding);
        let builder = StatementBuilder::new(&registry, Dialect::MySQL);
        let err = builder
            .build(StatementShape::Select, Vec::new())
            .unwrap_err();
        assert!(matches!(
            err,
            ParseRuleError::StatementRuleNotFound { .. }
        ));
    }

    #[test]
    fn test_conditions_derived_from_predicates() {
        let registry = sharding_registry();
        let builder = StatementBuilder::new(&registry, Dialect::MySQL);
        let statement = builder
            .build(
                StatementShape::Select,
                vec![segments::order_table(), segments::order_id_equals_literal()],
            )
            .unwrap();
        assert_eq!(statement.sharding_conditions().len(), 1);
        assert_eq!(statement.encrypt_conditions().len(), 1);
    }
}
