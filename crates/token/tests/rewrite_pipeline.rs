// Copyright (c) 2026 shard-rewrite contributors
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! End-to-end pipeline tests: registry-driven statement construction
//! followed by rewrite-token generation.

use shard_rewrite_ast::{Dialect, ParameterValue};
use shard_rewrite_parse::{ParseRuleRegistry, RuleFamily, StatementBuilder, StatementShape};
use shard_rewrite_test_utils::{rules, segments};
use shard_rewrite_token::{RewriteEngine, TokenPayload};

#[test]
fn test_select_with_limit_rewrites_table_and_pagination() {
    let registry = ParseRuleRegistry::with_defaults(RuleFamily::Sharding).unwrap();
    let builder = StatementBuilder::new(&registry, Dialect::MySQL);
    let mut statement = builder
        .build(
            StatementShape::Select,
            vec![
                segments::order_table(),
                segments::order_id_equals_literal(),
                segments::offset_literal(5),
                segments::row_count_literal(10),
            ],
        )
        .unwrap();
    statement.set_logic_sql(segments::SELECT_LIMIT_SQL);

    let tokens = RewriteEngine::new()
        .generate(
            &statement,
            &[],
            &rules::sharding_rule(),
            &rules::encrypt_rule(),
            &rules::multi_route(),
        )
        .unwrap();

    assert_eq!(tokens.len(), 3);
    // Sorted ascending by start offset
    assert_eq!(
        tokens[0].payload(),
        &TokenPayload::Table {
            table_name: "t_order".to_string()
        }
    );
    assert_eq!((tokens[0].start(), tokens[0].stop()), (14, 20));
    assert_eq!(tokens[1].payload(), &TokenPayload::Offset { revised: 0 });
    assert_eq!((tokens[1].start(), tokens[1].stop()), (65, 65));
    assert_eq!(tokens[2].payload(), &TokenPayload::RowCount { revised: 15 });
    assert_eq!((tokens[2].start(), tokens[2].stop()), (68, 69));
}

#[test]
fn test_single_route_skips_pagination_revision() {
    let registry = ParseRuleRegistry::with_defaults(RuleFamily::Sharding).unwrap();
    let builder = StatementBuilder::new(&registry, Dialect::MySQL);
    let statement = builder
        .build(
            StatementShape::Select,
            vec![
                segments::order_table(),
                segments::offset_literal(5),
                segments::row_count_literal(10),
            ],
        )
        .unwrap();

    let tokens = RewriteEngine::new()
        .generate(
            &statement,
            &[],
            &rules::sharding_rule(),
            &rules::encrypt_rule(),
            &rules::single_route(),
        )
        .unwrap();

    // The shard sees the original LIMIT; only the table name is rewritten
    assert_eq!(tokens.len(), 1);
    assert!(matches!(tokens[0].payload(), TokenPayload::Table { .. }));
}

#[test]
fn test_insert_set_rewrites_encrypted_literal() {
    let registry = ParseRuleRegistry::with_defaults(RuleFamily::Encrypt).unwrap();
    let builder = StatementBuilder::new(&registry, Dialect::MySQL);
    let mut statement = builder
        .build(
            StatementShape::Insert,
            vec![
                segments::user_table(),
                segments::user_set_assignments_literal(),
            ],
        )
        .unwrap();
    statement.set_logic_sql(segments::INSERT_SET_SQL);

    let tokens = RewriteEngine::new()
        .generate(
            &statement,
            &[],
            &rules::sharding_rule(),
            &rules::encrypt_rule(),
            &rules::single_route(),
        )
        .unwrap();

    // t_user is not sharded; only the pwd literal is rewritten
    assert_eq!(tokens.len(), 1);
    assert_eq!((tokens[0].start(), tokens[0].stop()), (42, 46));
    assert_eq!(
        tokens[0].payload(),
        &TokenPayload::EncryptAssignmentValue {
            column_name: "pwd".to_string()
        }
    );
    // The token span covers exactly the quoted literal in the fixture text
    assert_eq!(&segments::INSERT_SET_SQL[42..=46], "'abc'");
}

#[test]
fn test_parameterized_insert_set_needs_no_text_rewrite() {
    let registry = ParseRuleRegistry::with_defaults(RuleFamily::Encrypt).unwrap();
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
    assert_eq!(statement.parameters_index(), 1);

    let tokens = RewriteEngine::new()
        .generate(
            &statement,
            &[ParameterValue::from("abc")],
            &rules::sharding_rule(),
            &rules::encrypt_rule(),
            &rules::single_route(),
        )
        .unwrap();
    assert!(tokens.is_empty());
}

#[test]
fn test_marker_pagination_yields_no_pagination_tokens() {
    let registry = ParseRuleRegistry::with_defaults(RuleFamily::Sharding).unwrap();
    let builder = StatementBuilder::new(&registry, Dialect::MySQL);
    let statement = builder
        .build(
            StatementShape::Select,
            vec![
                segments::order_table(),
                segments::offset_marker(0),
                segments::row_count_marker(1),
            ],
        )
        .unwrap();

    let tokens = RewriteEngine::new()
        .generate(
            &statement,
            &[ParameterValue::Integer(5), ParameterValue::Integer(10)],
            &rules::sharding_rule(),
            &rules::encrypt_rule(),
            &rules::multi_route(),
        )
        .unwrap();

    assert_eq!(tokens.len(), 1);
    assert!(matches!(tokens[0].payload(), TokenPayload::Table { .. }));
}

#[test]
fn test_shared_registry_drives_the_same_pipeline() {
    let registry = ParseRuleRegistry::shared(RuleFamily::Sharding).unwrap();
    let builder = StatementBuilder::new(registry, Dialect::PostgreSQL);
    let statement = builder
        .build(
            StatementShape::Select,
            vec![segments::order_table(), segments::row_count_literal(10)],
        )
        .unwrap();

    let tokens = RewriteEngine::new()
        .generate(
            &statement,
            &[],
            &rules::sharding_rule(),
            &rules::encrypt_rule(),
            &rules::multi_route(),
        )
        .unwrap();

    assert_eq!(tokens.len(), 2);
    assert_eq!(tokens[1].payload(), &TokenPayload::RowCount { revised: 10 });
}
