// Copyright (c) 2026 shard-rewrite contributors
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! Token generator framework.
//!
//! Generators are independent, rule-driven units, each polymorphic over one
//! of two generation contracts and parameterized by the rule-context type it
//! needs. They are pure functions over `(Statement, parameters, rule)`:
//! invocation order is unspecified, and any two generators that could match
//! the same text span must be mutually exclusive by their own precondition
//! checks, not by ordering.

pub mod encrypt;
pub mod pagination;
pub mod table;

pub use encrypt::InsertSetEncryptValueGenerator;
pub use pagination::{OffsetGenerator, RowCountGenerator};
pub use table::TableTokenGenerator;

use crate::error::{RewriteError, RewriteResult};
use crate::token::Token;
use shard_rewrite_ast::{ParameterValue, Statement};
use shard_rewrite_rule::{EncryptRule, RouteSummary, ShardingRule};
use tracing::trace;

/// A generator producing zero or one token.
///
/// Used when the rewrite applies fully or not at all for the whole
/// statement. A precondition mismatch yields `Ok(None)`, never an error.
pub trait OptionalTokenGenerator<R>: Send + Sync {
    fn generate(
        &self,
        statement: &Statement,
        parameters: &[ParameterValue],
        rule: &R,
    ) -> RewriteResult<Option<Token>>;
}

/// A generator producing zero or many tokens.
///
/// Used when the rewrite applies independently per matched sub-segment. A
/// precondition mismatch yields `Ok(vec![])`, never an error; the returned
/// collection is always the *full* eligible set, never a partial one.
pub trait CollectionTokenGenerator<R>: Send + Sync {
    fn generate(
        &self,
        statement: &Statement,
        parameters: &[ParameterValue],
        rule: &R,
    ) -> RewriteResult<Vec<Token>>;
}

/// Closed set of generator shapes
pub enum TokenGenerator<R> {
    Optional(Box<dyn OptionalTokenGenerator<R>>),
    Collection(Box<dyn CollectionTokenGenerator<R>>),
}

struct Registration<R> {
    generator: TokenGenerator<R>,
    /// Skip this generator when the statement routes to exactly one shard
    ignore_for_single_route: bool,
}

/// Registry of token generators sharing one rule-context type.
pub struct TokenGeneratorRegistry<R> {
    registrations: Vec<Registration<R>>,
}

impl<R> TokenGeneratorRegistry<R> {
    pub fn new() -> Self {
        Self {
            registrations: Vec::new(),
        }
    }

    /// Register an optional-contract generator (builder style)
    pub fn register_optional(
        mut self,
        generator: impl OptionalTokenGenerator<R> + 'static,
        ignore_for_single_route: bool,
    ) -> Self {
        self.registrations.push(Registration {
            generator: TokenGenerator::Optional(Box::new(generator)),
            ignore_for_single_route,
        });
        self
    }

    /// Register a collection-contract generator (builder style)
    pub fn register_collection(
        mut self,
        generator: impl CollectionTokenGenerator<R> + 'static,
        ignore_for_single_route: bool,
    ) -> Self {
        self.registrations.push(Registration {
            generator: TokenGenerator::Collection(Box::new(generator)),
            ignore_for_single_route,
        });
        self
    }

    pub fn len(&self) -> usize {
        self.registrations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.registrations.is_empty()
    }

    /// Run every applicable generator and merge the results.
    ///
    /// Route-sensitive registrations are skipped on single-route statements.
    /// The merged collection is sorted ascending by start offset and checked
    /// for overlaps before being returned; on failure nothing is returned.
    pub fn generate_tokens(
        &self,
        statement: &Statement,
        parameters: &[ParameterValue],
        rule: &R,
        route: &RouteSummary,
    ) -> RewriteResult<Vec<Token>> {
        let mut tokens = Vec::new();
        for registration in &self.registrations {
            if registration.ignore_for_single_route && route.is_single_route() {
                continue;
            }
            match &registration.generator {
                TokenGenerator::Optional(generator) => {
                    if let Some(token) = generator.generate(statement, parameters, rule)? {
                        trace!(start = token.start(), stop = token.stop(), "emitted token");
                        tokens.push(token);
                    }
                }
                TokenGenerator::Collection(generator) => {
                    for token in generator.generate(statement, parameters, rule)? {
                        trace!(start = token.start(), stop = token.stop(), "emitted token");
                        tokens.push(token);
                    }
                }
            }
        }
        sort_and_check(tokens)
    }
}

impl<R> Default for TokenGeneratorRegistry<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl TokenGeneratorRegistry<ShardingRule> {
    /// The default sharding-driven generators: table-name rewriting (always)
    /// and pagination revision (multi-route only).
    pub fn sharding_defaults() -> Self {
        Self::new()
            .register_collection(TableTokenGenerator, false)
            .register_optional(RowCountGenerator, true)
            .register_optional(OffsetGenerator, true)
    }
}

impl TokenGeneratorRegistry<EncryptRule> {
    /// The default encryption-driven generators. Encryption is required
    /// regardless of routing, so nothing here is route-sensitive.
    pub fn encrypt_defaults() -> Self {
        Self::new().register_collection(InsertSetEncryptValueGenerator, false)
    }
}

/// Sort tokens ascending by start offset and reject overlapping spans.
pub(crate) fn sort_and_check(mut tokens: Vec<Token>) -> RewriteResult<Vec<Token>> {
    tokens.sort_by_key(Token::start);
    for pair in tokens.windows(2) {
        if pair[0].overlaps(&pair[1]) {
            return Err(RewriteError::OverlappingTokens {
                first_start: pair[0].start(),
                first_stop: pair[0].stop(),
                second_start: pair[1].start(),
                second_stop: pair[1].stop(),
            });
        }
    }
    Ok(tokens)
}
