// Copyright (c) 2026 shard-rewrite contributors
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! Rule-context fixtures

use shard_rewrite_rule::{EncryptRule, EncryptorMetadata, RouteSummary, ShardingRule, TableRule};

/// Encrypt rule with `t_user.pwd` behind an AES encryptor
pub fn encrypt_rule() -> EncryptRule {
    EncryptRule::new().add_encryptor(
        "t_user",
        "pwd",
        EncryptorMetadata::new("user_encryptor", "aes").with_prop("aes.key.value", "123456abc"),
    )
}

/// Sharding rule with `t_order` split across two data sources on `order_id`
pub fn sharding_rule() -> ShardingRule {
    ShardingRule::new().add_table_rule(
        TableRule::new(
            "t_order",
            vec!["ds0.t_order_0".to_string(), "ds1.t_order_1".to_string()],
        )
        .with_sharding_column("order_id"),
    )
}

/// A route across two physical shards
pub fn multi_route() -> RouteSummary {
    RouteSummary::new(2)
}

/// A route to exactly one physical shard
pub fn single_route() -> RouteSummary {
    RouteSummary::single()
}
