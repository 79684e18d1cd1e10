// Copyright (c) 2026 shard-rewrite contributors
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! Encryption-driven generators.

use crate::error::RewriteResult;
use crate::generator::CollectionTokenGenerator;
use crate::token::{Token, TokenPayload};
use shard_rewrite_ast::{
    ExpressionSegment, ParameterValue, Segment, SegmentKind, Statement, StatementKind,
};
use shard_rewrite_rule::EncryptRule;

/// Emits one token per `SET` assignment whose column has a configured
/// encryptor and whose value is an inline literal.
///
/// Applies only to `INSERT ... SET` statements. Parameter-marker values are
/// skipped: those are encrypted in the bound parameter list, not in the SQL
/// text.
pub struct InsertSetEncryptValueGenerator;

impl CollectionTokenGenerator<EncryptRule> for InsertSetEncryptValueGenerator {
    fn generate(
        &self,
        statement: &Statement,
        _parameters: &[ParameterValue],
        rule: &EncryptRule,
    ) -> RewriteResult<Vec<Token>> {
        if statement.kind() != StatementKind::Insert {
            return Ok(Vec::new());
        }
        let Some(Segment::SetAssignments(set_assignments)) =
            statement.find_segment(SegmentKind::SetAssignments)?
        else {
            return Ok(Vec::new());
        };
        let Some(table) = statement.tables().single_table_name() else {
            return Ok(Vec::new());
        };

        let mut tokens = Vec::new();
        for assignment in &set_assignments.assignments {
            if rule.find_encryptor(table, &assignment.column.name).is_none() {
                continue;
            }
            if let ExpressionSegment::Literal(literal) = &assignment.value {
                tokens.push(Token::new(
                    literal.start,
                    literal.stop,
                    TokenPayload::EncryptAssignmentValue {
                        column_name: assignment.column.name.clone(),
                    },
                ));
            }
        }
        Ok(tokens)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shard_rewrite_test_utils::{rules, segments, statements};

    #[test]
    fn test_token_per_encrypted_literal_assignment() {
        let statement = statements::insert_set_statement();
        let tokens = InsertSetEncryptValueGenerator
            .generate(&statement, &[], &rules::encrypt_rule())
            .unwrap();
        // user_id has no encryptor; pwd = 'abc' spans 42..46
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].start(), 42);
        assert_eq!(tokens[0].stop(), 46);
        assert_eq!(
            tokens[0].payload(),
            &TokenPayload::EncryptAssignmentValue {
                column_name: "pwd".to_string()
            }
        );
    }

    #[test]
    fn test_parameter_marker_value_is_skipped() {
        let statement = statements::insert_set_statement_parameter_pwd();
        let tokens = InsertSetEncryptValueGenerator
            .generate(&statement, &[ParameterValue::from("abc")], &rules::encrypt_rule())
            .unwrap();
        assert!(tokens.is_empty());
    }

    #[test]
    fn test_insert_without_set_clause_yields_nothing() {
        // INSERT ... VALUES parses without a SET-assignments segment
        let mut statement = Statement::new(StatementKind::Insert);
        statement.push_segment(segments::user_table());
        statement.derive_tables();
        let tokens = InsertSetEncryptValueGenerator
            .generate(&statement, &[], &rules::encrypt_rule())
            .unwrap();
        assert!(tokens.is_empty());
    }

    #[test]
    fn test_non_insert_statement_yields_nothing() {
        let statement = statements::select_with_limit_and_offset(5, 10);
        let tokens = InsertSetEncryptValueGenerator
            .generate(&statement, &[], &rules::encrypt_rule())
            .unwrap();
        assert!(tokens.is_empty());
    }

    #[test]
    fn test_empty_rule_yields_nothing() {
        let statement = statements::insert_set_statement();
        let tokens = InsertSetEncryptValueGenerator
            .generate(&statement, &[], &EncryptRule::new())
            .unwrap();
        assert!(tokens.is_empty());
    }
}
