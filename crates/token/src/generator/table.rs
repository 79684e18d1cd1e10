// Copyright (c) 2026 shard-rewrite contributors
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! Logical-table-name rewriting.

use crate::error::RewriteResult;
use crate::generator::CollectionTokenGenerator;
use crate::token::{Token, TokenPayload};
use shard_rewrite_ast::{ParameterValue, Segment, SegmentKind, Statement};
use shard_rewrite_rule::ShardingRule;

/// Emits one token per table segment whose name is a configured logical
/// sharding table. Non-sharded table references are left untouched.
pub struct TableTokenGenerator;

impl CollectionTokenGenerator<ShardingRule> for TableTokenGenerator {
    fn generate(
        &self,
        statement: &Statement,
        _parameters: &[ParameterValue],
        rule: &ShardingRule,
    ) -> RewriteResult<Vec<Token>> {
        let mut tokens = Vec::new();
        for segment in statement.find_segments(SegmentKind::Table) {
            let Segment::Table(table) = segment else {
                continue;
            };
            if rule.contains_table(&table.name) {
                tokens.push(Token::new(
                    table.start,
                    table.stop,
                    TokenPayload::Table {
                        table_name: table.name.clone(),
                    },
                ));
            }
        }
        Ok(tokens)
    }
}
