// Copyright (c) 2026 shard-rewrite contributors
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! SQL dialect identifiers.
//!
//! Dialects share the common [`Statement`](crate::Statement) model but differ
//! in which grammar productions exist and how parse-tree nodes map to segment
//! variants. The parse-rule registry is keyed by dialect so new dialects can
//! be added without touching the statement model or any token generator.

use serde::{Deserialize, Serialize};

/// Supported SQL dialects
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum Dialect {
    /// MySQL (5.7, 8.0)
    MySQL,
    /// PostgreSQL (12+)
    PostgreSQL,
    /// Oracle (11g+)
    Oracle,
    /// SQL Server (2012+)
    SQLServer,
    /// The SQL-92 common subset
    SQL92,
}

impl Dialect {
    /// Get all supported dialects
    pub fn all() -> &'static [Dialect] {
        &[
            Dialect::MySQL,
            Dialect::PostgreSQL,
            Dialect::Oracle,
            Dialect::SQLServer,
            Dialect::SQL92,
        ]
    }

    /// Get dialect name as string
    pub fn name(&self) -> &'static str {
        match self {
            Dialect::MySQL => "mysql",
            Dialect::PostgreSQL => "postgresql",
            Dialect::Oracle => "oracle",
            Dialect::SQLServer => "sqlserver",
            Dialect::SQL92 => "sql92",
        }
    }

    /// Parse dialect from string
    pub fn from_str(s: &str) -> Option<Dialect> {
        match s.to_lowercase().as_str() {
            "mysql" => Some(Dialect::MySQL),
            "postgresql" | "postgres" => Some(Dialect::PostgreSQL),
            "oracle" => Some(Dialect::Oracle),
            "sqlserver" | "mssql" => Some(Dialect::SQLServer),
            "sql92" => Some(Dialect::SQL92),
            _ => None,
        }
    }
}

impl std::fmt::Display for Dialect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
