// Copyright (c) 2026 shard-rewrite contributors
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! Error types for token generation

use shard_rewrite_ast::StatementError;

/// Result type alias for token-generation operations
pub type RewriteResult<T> = Result<T, RewriteError>;

/// Errors raised during token generation.
///
/// A generator whose preconditions do not hold is *not* an error; it returns
/// an empty result. These variants cover caller contract violations and
/// framework invariant breaches, which abort the rewrite of the current
/// statement rather than letting it execute unrewritten.
#[derive(Debug, thiserror::Error, Clone, PartialEq)]
pub enum RewriteError {
    /// A parameter marker referenced a position past the end of the bound
    /// parameter list
    #[error("Parameter index {index} out of range: {len} parameters bound")]
    ParameterIndexOutOfRange { index: usize, len: usize },

    /// A pagination bound resolved to a parameter that is not usable as a
    /// non-negative integer
    #[error("Parameter {index} is not usable as a pagination value")]
    NonNumericParameter { index: usize },

    /// Two generators produced tokens over intersecting text spans
    #[error(
        "Overlapping rewrite tokens: [{first_start}, {first_stop}] and [{second_start}, {second_stop}]"
    )]
    OverlappingTokens {
        first_start: usize,
        first_stop: usize,
        second_start: usize,
        second_stop: usize,
    },

    /// Statement-model lookup failure (e.g. ambiguous segment match)
    #[error(transparent)]
    Statement(#[from] StatementError),
}
