// Copyright (c) 2026 shard-rewrite contributors
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! Rewrite engine facade.

use crate::error::RewriteResult;
use crate::generator::{sort_and_check, TokenGeneratorRegistry};
use crate::token::Token;
use shard_rewrite_ast::{ParameterValue, Statement};
use shard_rewrite_rule::{EncryptRule, RouteSummary, ShardingRule};
use tracing::debug;

/// Runs the sharding-driven and encryption-driven generator registries over
/// one statement and merges their tokens into a single ordered,
/// non-overlapping collection.
pub struct RewriteEngine {
    sharding_generators: TokenGeneratorRegistry<ShardingRule>,
    encrypt_generators: TokenGeneratorRegistry<EncryptRule>,
}

impl RewriteEngine {
    pub fn new() -> Self {
        Self {
            sharding_generators: TokenGeneratorRegistry::sharding_defaults(),
            encrypt_generators: TokenGeneratorRegistry::encrypt_defaults(),
        }
    }

    /// Generate the full rewrite-token set for one statement execution.
    pub fn generate(
        &self,
        statement: &Statement,
        parameters: &[ParameterValue],
        sharding_rule: &ShardingRule,
        encrypt_rule: &EncryptRule,
        route: &RouteSummary,
    ) -> RewriteResult<Vec<Token>> {
        let mut tokens =
            self.sharding_generators
                .generate_tokens(statement, parameters, sharding_rule, route)?;
        tokens.extend(self.encrypt_generators.generate_tokens(
            statement,
            parameters,
            encrypt_rule,
            route,
        )?);
        let tokens = sort_and_check(tokens)?;
        debug!(
            tokens = tokens.len(),
            route_units = route.route_units(),
            "generated rewrite tokens"
        );
        Ok(tokens)
    }
}

impl Default for RewriteEngine {
    fn default() -> Self {
        Self::new()
    }
}
