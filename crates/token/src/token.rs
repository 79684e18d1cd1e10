// Copyright (c) 2026 shard-rewrite contributors
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! Token model: position-anchored rewrite instructions.
//!
//! A token instructs the (external) splicer to replace the text at
//! `[start, stop]` in the original SQL with content derived from the
//! payload. Tokens are immutable, created by generators, consumed once by
//! the splicer, then discarded.

use serde::{Deserialize, Serialize};

/// What the splicer substitutes at the token's span.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum TokenPayload {
    /// Replace a logical table name; the splicer maps it to the actual
    /// physical table of the current route unit
    Table { table_name: String },
    /// Replace a row-count literal with the revised per-shard row count
    RowCount { revised: u64 },
    /// Replace an offset literal with the revised per-shard offset
    Offset { revised: u64 },
    /// Replace an assignment value literal with its ciphertext; the column
    /// name selects the encryptor
    EncryptAssignmentValue { column_name: String },
}

/// One rewrite instruction over `[start, stop]` (inclusive, 0-based) in the
/// original SQL text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Token {
    start: usize,
    stop: usize,
    payload: TokenPayload,
}

impl Token {
    pub fn new(start: usize, stop: usize, payload: TokenPayload) -> Self {
        debug_assert!(start <= stop);
        Self {
            start,
            stop,
            payload,
        }
    }

    pub fn start(&self) -> usize {
        self.start
    }

    pub fn stop(&self) -> usize {
        self.stop
    }

    pub fn payload(&self) -> &TokenPayload {
        &self.payload
    }

    /// Whether two tokens' inclusive spans intersect
    pub fn overlaps(&self, other: &Token) -> bool {
        self.start <= other.stop && other.start <= self.stop
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlap_detection() {
        let a = Token::new(10, 20, TokenPayload::RowCount { revised: 15 });
        let b = Token::new(15, 25, TokenPayload::Offset { revised: 0 });
        let c = Token::new(21, 30, TokenPayload::Offset { revised: 0 });
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
        assert!(!a.overlaps(&c));
    }

    #[test]
    fn test_adjacent_spans_do_not_overlap() {
        let a = Token::new(10, 20, TokenPayload::RowCount { revised: 15 });
        let b = Token::new(21, 21, TokenPayload::Offset { revised: 0 });
        assert!(!a.overlaps(&b));
    }

    #[test]
    fn test_single_char_span() {
        let a = Token::new(5, 5, TokenPayload::Offset { revised: 0 });
        let b = Token::new(5, 5, TokenPayload::RowCount { revised: 1 });
        assert!(a.overlaps(&b));
    }

    #[test]
    fn test_token_serialization() {
        let token = Token::new(
            42,
            46,
            TokenPayload::EncryptAssignmentValue {
                column_name: "pwd".to_string(),
            },
        );
        assert!(serde_json::to_string(&token).is_ok());
    }
}
