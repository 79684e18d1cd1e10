// Copyright (c) 2026 shard-rewrite contributors
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # shard-rewrite - Token Generation
//!
//! This crate turns a read-only [`Statement`](shard_rewrite_ast::Statement)
//! plus runtime bind parameters and rule contexts into a set of
//! position-anchored rewrite tokens.
//!
//! ## Generation contracts
//!
//! Generators come in two shapes:
//!
//! - [`OptionalTokenGenerator`]: zero or one token, for rewrites that apply
//!   fully or not at all (e.g. revising a row-count literal)
//! - [`CollectionTokenGenerator`]: zero or many tokens, for rewrites that
//!   apply per matched sub-segment (e.g. one token per encrypted column
//!   assignment)
//!
//! A generator whose preconditions do not hold returns an empty result,
//! never an error. A registration may be marked route-sensitive
//! (`ignore_for_single_route`): it is skipped when the statement routes to a
//! single physical shard, because no cross-shard merge will happen.
//!
//! ## Output guarantee
//!
//! The token collection handed back is sorted ascending by start offset and
//! free of overlaps; an overlap between independently-authored generators is
//! a hard failure, and no partial token set is ever returned.

pub mod engine;
pub mod error;
pub mod generator;
pub mod pagination;
pub mod token;

// Re-exports
pub use engine::RewriteEngine;
pub use error::{RewriteError, RewriteResult};
pub use generator::{
    CollectionTokenGenerator, OptionalTokenGenerator, TokenGenerator, TokenGeneratorRegistry,
};
pub use pagination::Pagination;
pub use token::{Token, TokenPayload};
