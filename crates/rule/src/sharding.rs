// Copyright (c) 2026 shard-rewrite contributors
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! Sharding rule context

use serde::{Deserialize, Serialize};

/// Sharding configuration for one logical table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableRule {
    /// Logical table name as it appears in SQL (e.g. `t_order`)
    pub logical_table: String,
    /// Physical data nodes backing the logical table
    /// (e.g. `ds0.t_order_0`, `ds1.t_order_1`)
    pub actual_data_nodes: Vec<String>,
    /// Column the sharding algorithm partitions on
    pub sharding_column: Option<String>,
}

impl TableRule {
    pub fn new(logical_table: impl Into<String>, actual_data_nodes: Vec<String>) -> Self {
        Self {
            logical_table: logical_table.into(),
            actual_data_nodes,
            sharding_column: None,
        }
    }

    pub fn with_sharding_column(mut self, column: impl Into<String>) -> Self {
        self.sharding_column = Some(column.into());
        self
    }
}

/// Read-only sharding rule: which logical tables are sharded and on which
/// column. The shard-selection algorithm itself lives in the routing layer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShardingRule {
    table_rules: Vec<TableRule>,
}

impl ShardingRule {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a table rule (builder style)
    pub fn add_table_rule(mut self, rule: TableRule) -> Self {
        self.table_rules.push(rule);
        self
    }

    /// Whether the named logical table is sharded (case-insensitive)
    pub fn contains_table(&self, name: &str) -> bool {
        self.find_table_rule(name).is_some()
    }

    /// Find the rule for a logical table, if any
    pub fn find_table_rule(&self, name: &str) -> Option<&TableRule> {
        self.table_rules
            .iter()
            .find(|r| r.logical_table.eq_ignore_ascii_case(name))
    }

    /// Whether a column is the sharding column of the named table
    pub fn is_sharding_column(&self, table: &str, column: &str) -> bool {
        self.find_table_rule(table)
            .and_then(|r| r.sharding_column.as_deref())
            .is_some_and(|c| c.eq_ignore_ascii_case(column))
    }

    pub fn table_rules(&self) -> &[TableRule] {
        &self.table_rules
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rule() -> ShardingRule {
        ShardingRule::new().add_table_rule(
            TableRule::new(
                "t_order",
                vec!["ds0.t_order_0".to_string(), "ds1.t_order_1".to_string()],
            )
            .with_sharding_column("order_id"),
        )
    }

    #[test]
    fn test_contains_table() {
        let rule = rule();
        assert!(rule.contains_table("t_order"));
        assert!(rule.contains_table("T_ORDER"));
        assert!(!rule.contains_table("t_user"));
    }

    #[test]
    fn test_sharding_column() {
        let rule = rule();
        assert!(rule.is_sharding_column("t_order", "order_id"));
        assert!(!rule.is_sharding_column("t_order", "status"));
        assert!(!rule.is_sharding_column("t_user", "order_id"));
    }

    #[test]
    fn test_table_rule_nodes() {
        let rule = rule();
        let table_rule = rule.find_table_rule("t_order").unwrap();
        assert_eq!(table_rule.actual_data_nodes.len(), 2);
    }
}
