// Copyright (c) 2026 shard-rewrite contributors
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # shard-rewrite - Rule Contexts
//!
//! Read-only configuration objects consumed by the token generators:
//!
//! - [`EncryptRule`]: which columns are encrypted, and with which encryptor
//! - [`ShardingRule`]: which logical tables are sharded, and on which column
//! - [`RouteSummary`]: the routing outcome the generator framework consults
//!   for route-sensitive rewrites
//!
//! Rule contexts are supplied by the configuration layer, live at least as
//! long as the process, and are never mutated by the rewrite core. All types
//! here are `Send + Sync` and safe for concurrent read access.

pub mod encrypt;
pub mod route;
pub mod sharding;

// Re-exports
pub use encrypt::{EncryptRule, EncryptorMetadata};
pub use route::RouteSummary;
pub use sharding::{ShardingRule, TableRule};
