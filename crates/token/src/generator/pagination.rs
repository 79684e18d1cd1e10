// Copyright (c) 2026 shard-rewrite contributors
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! Pagination-revision generators.
//!
//! Both generators rewrite literal pagination bounds only. A bound written
//! as a parameter marker has no text span to replace; its revision happens
//! in the bound parameter list, outside this crate.

use crate::error::RewriteResult;
use crate::generator::OptionalTokenGenerator;
use crate::pagination::Pagination;
use crate::token::{Token, TokenPayload};
use shard_rewrite_ast::{
    PaginationValueSegment, ParameterValue, Segment, SegmentKind, Statement, StatementKind,
};
use shard_rewrite_rule::ShardingRule;

fn pagination_segment<'a>(
    statement: &'a Statement,
    kind: SegmentKind,
) -> RewriteResult<Option<&'a PaginationValueSegment>> {
    Ok(match statement.find_segment(kind)? {
        Some(Segment::RowCount(segment)) | Some(Segment::Offset(segment)) => Some(segment),
        _ => None,
    })
}

/// Replaces a literal row-count bound with the widened per-shard window
/// `offset + row_count`.
pub struct RowCountGenerator;

impl OptionalTokenGenerator<ShardingRule> for RowCountGenerator {
    fn generate(
        &self,
        statement: &Statement,
        parameters: &[ParameterValue],
        _rule: &ShardingRule,
    ) -> RewriteResult<Option<Token>> {
        if statement.kind() != StatementKind::Select {
            return Ok(None);
        }
        let Some(row_count) = pagination_segment(statement, SegmentKind::RowCount)? else {
            return Ok(None);
        };
        let &PaginationValueSegment::NumberLiteral { start, stop, .. } = row_count else {
            return Ok(None);
        };
        let offset = pagination_segment(statement, SegmentKind::Offset)?;
        let pagination = Pagination::new(offset, Some(row_count), parameters)?;
        Ok(Some(Token::new(
            start,
            stop,
            TokenPayload::RowCount {
                revised: pagination.revised_row_count(),
            },
        )))
    }
}

/// Replaces a literal offset bound with 0; the merger applies the original
/// offset after merge-sorting the per-shard results.
pub struct OffsetGenerator;

impl OptionalTokenGenerator<ShardingRule> for OffsetGenerator {
    fn generate(
        &self,
        statement: &Statement,
        parameters: &[ParameterValue],
        _rule: &ShardingRule,
    ) -> RewriteResult<Option<Token>> {
        if statement.kind() != StatementKind::Select {
            return Ok(None);
        }
        let Some(offset) = pagination_segment(statement, SegmentKind::Offset)? else {
            return Ok(None);
        };
        let &PaginationValueSegment::NumberLiteral { start, stop, .. } = offset else {
            return Ok(None);
        };
        let pagination = Pagination::new(Some(offset), None, parameters)?;
        Ok(Some(Token::new(
            start,
            stop,
            TokenPayload::Offset {
                revised: pagination.revised_offset(),
            },
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shard_rewrite_rule::ShardingRule;
    use shard_rewrite_test_utils::statements;

    #[test]
    fn test_row_count_revised_by_offset() {
        // LIMIT 5, 10 -> each shard asked for 15 rows
        let statement = statements::select_with_limit_and_offset(5, 10);
        let token = RowCountGenerator
            .generate(&statement, &[], &ShardingRule::new())
            .unwrap()
            .unwrap();
        assert_eq!(token.start(), 68);
        assert_eq!(token.stop(), 69);
        assert_eq!(token.payload(), &TokenPayload::RowCount { revised: 15 });
    }

    #[test]
    fn test_row_count_without_offset_is_unchanged_value() {
        let statement = statements::select_row_count_only(10);
        let token = RowCountGenerator
            .generate(&statement, &[], &ShardingRule::new())
            .unwrap()
            .unwrap();
        assert_eq!(token.payload(), &TokenPayload::RowCount { revised: 10 });
    }

    #[test]
    fn test_parameter_marker_row_count_yields_no_token() {
        let statement = statements::select_row_count_marker();
        let token = RowCountGenerator
            .generate(&statement, &[ParameterValue::Integer(10)], &ShardingRule::new())
            .unwrap();
        assert!(token.is_none());
    }

    #[test]
    fn test_non_select_yields_no_token() {
        let statement = statements::insert_set_statement();
        assert!(
            RowCountGenerator
                .generate(&statement, &[], &ShardingRule::new())
                .unwrap()
                .is_none()
        );
        assert!(
            OffsetGenerator
                .generate(&statement, &[], &ShardingRule::new())
                .unwrap()
                .is_none()
        );
    }

    #[test]
    fn test_offset_rewritten_to_zero() {
        let statement = statements::select_with_limit_and_offset(5, 10);
        let token = OffsetGenerator
            .generate(&statement, &[], &ShardingRule::new())
            .unwrap()
            .unwrap();
        assert_eq!(token.start(), 65);
        assert_eq!(token.stop(), 65);
        assert_eq!(token.payload(), &TokenPayload::Offset { revised: 0 });
    }

    #[test]
    fn test_no_offset_segment_yields_no_token() {
        let statement = statements::select_row_count_only(10);
        assert!(
            OffsetGenerator
                .generate(&statement, &[], &ShardingRule::new())
                .unwrap()
                .is_none()
        );
    }
}
