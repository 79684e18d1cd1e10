// Copyright (c) 2026 shard-rewrite contributors
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! Pagination revision for cross-shard result merging.
//!
//! When a paginated query fans out to several shards, each shard must be
//! asked for the full window `offset + row_count` starting at 0, and the
//! merger trims the window after merge-sorting the partial results. A shard
//! cannot apply the original offset locally because the rows it would skip
//! may rank anywhere in the merged order.

use crate::error::{RewriteError, RewriteResult};
use shard_rewrite_ast::{PaginationValueSegment, ParameterValue};

/// Resolved pagination bounds for one statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    offset: Option<u64>,
    row_count: Option<u64>,
}

impl Pagination {
    /// Resolve the statement's pagination bounds against the bound-parameter
    /// list.
    ///
    /// Literal bounds are taken as written; parameter-marker bounds are
    /// looked up in `parameters`. An out-of-range index or a value that is
    /// not a non-negative integer is a hard failure.
    pub fn new(
        offset: Option<&PaginationValueSegment>,
        row_count: Option<&PaginationValueSegment>,
        parameters: &[ParameterValue],
    ) -> RewriteResult<Self> {
        Ok(Self {
            offset: Self::resolve(offset, parameters)?,
            row_count: Self::resolve(row_count, parameters)?,
        })
    }

    fn resolve(
        segment: Option<&PaginationValueSegment>,
        parameters: &[ParameterValue],
    ) -> RewriteResult<Option<u64>> {
        match segment {
            None => Ok(None),
            Some(PaginationValueSegment::NumberLiteral { value, .. }) => Ok(Some(*value)),
            Some(PaginationValueSegment::ParameterMarker {
                parameter_index, ..
            }) => {
                let value = parameters.get(*parameter_index).ok_or(
                    RewriteError::ParameterIndexOutOfRange {
                        index: *parameter_index,
                        len: parameters.len(),
                    },
                )?;
                let revised = value
                    .as_u64()
                    .ok_or(RewriteError::NonNumericParameter {
                        index: *parameter_index,
                    })?;
                Ok(Some(revised))
            }
        }
    }

    pub fn offset(&self) -> u64 {
        self.offset.unwrap_or(0)
    }

    pub fn row_count(&self) -> Option<u64> {
        self.row_count
    }

    /// The row count each shard must be asked for so the merged result still
    /// covers the original window: `offset + row_count`, saturating at
    /// `u64::MAX` for bounds no result set can reach anyway.
    pub fn revised_row_count(&self) -> u64 {
        self.offset().saturating_add(self.row_count.unwrap_or(0))
    }

    /// The offset each shard is read from: always 0, the merger trims.
    pub fn revised_offset(&self) -> u64 {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn literal(value: u64) -> PaginationValueSegment {
        PaginationValueSegment::NumberLiteral {
            start: 0,
            stop: 1,
            value,
        }
    }

    fn marker(parameter_index: usize) -> PaginationValueSegment {
        PaginationValueSegment::ParameterMarker {
            start: 0,
            stop: 0,
            parameter_index,
        }
    }

    #[test]
    fn test_revised_row_count_reference_pairs() {
        // (offset, row_count) -> revised per-shard row count
        for (offset, row_count, expected) in [(0, 10, 10), (5, 10, 15), (100, 50, 150)] {
            let pagination =
                Pagination::new(Some(&literal(offset)), Some(&literal(row_count)), &[]).unwrap();
            assert_eq!(pagination.revised_row_count(), expected);
        }
    }

    #[test]
    fn test_missing_offset_defaults_to_zero() {
        let pagination = Pagination::new(None, Some(&literal(10)), &[]).unwrap();
        assert_eq!(pagination.offset(), 0);
        assert_eq!(pagination.revised_row_count(), 10);
    }

    #[test]
    fn test_parameter_resolved_offset() {
        let parameters = vec![ParameterValue::Integer(5)];
        let pagination =
            Pagination::new(Some(&marker(0)), Some(&literal(10)), &parameters).unwrap();
        assert_eq!(pagination.offset(), 5);
        assert_eq!(pagination.revised_row_count(), 15);
    }

    #[test]
    fn test_revised_row_count_saturates_on_huge_bounds() {
        let pagination =
            Pagination::new(Some(&literal(u64::MAX)), Some(&literal(u64::MAX)), &[]).unwrap();
        assert_eq!(pagination.revised_row_count(), u64::MAX);
    }

    #[test]
    fn test_revised_offset_is_zero() {
        let pagination = Pagination::new(Some(&literal(100)), Some(&literal(50)), &[]).unwrap();
        assert_eq!(pagination.revised_offset(), 0);
    }

    #[test]
    fn test_out_of_range_parameter_is_hard_failure() {
        let err = Pagination::new(Some(&marker(2)), None, &[ParameterValue::Integer(1)])
            .unwrap_err();
        assert_eq!(
            err,
            RewriteError::ParameterIndexOutOfRange { index: 2, len: 1 }
        );
    }

    #[test]
    fn test_non_numeric_parameter_is_hard_failure() {
        let parameters = vec![ParameterValue::Text("ten".to_string())];
        let err = Pagination::new(Some(&marker(0)), None, &parameters).unwrap_err();
        assert_eq!(err, RewriteError::NonNumericParameter { index: 0 });
    }
}
