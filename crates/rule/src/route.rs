// Copyright (c) 2026 shard-rewrite contributors
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! Routing outcome summary.
//!
//! The shard-selection decision itself is made by the routing layer; the
//! rewrite core only needs to know whether a statement routes to a single
//! physical shard, because some rewrites (pagination revision) are pure
//! waste when no cross-shard merge will happen.

use serde::{Deserialize, Serialize};

/// Summary of the routing decision for one statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteSummary {
    route_units: usize,
}

impl RouteSummary {
    /// A route across `route_units` physical targets
    pub fn new(route_units: usize) -> Self {
        Self { route_units }
    }

    /// A route to exactly one physical target
    pub fn single() -> Self {
        Self::new(1)
    }

    pub fn route_units(&self) -> usize {
        self.route_units
    }

    pub fn is_single_route(&self) -> bool {
        self.route_units == 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_route() {
        assert!(RouteSummary::single().is_single_route());
        assert!(RouteSummary::new(1).is_single_route());
        assert!(!RouteSummary::new(2).is_single_route());
    }
}
