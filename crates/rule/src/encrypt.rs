// Copyright (c) 2026 shard-rewrite contributors
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! Encryption rule context

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Descriptor for the encryptor configured on one column.
///
/// The rewrite core never runs the encryption algorithm itself; the splicer
/// uses this descriptor to select the correct encryptor when materializing
/// ciphertext literals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncryptorMetadata {
    /// Configured encryptor name (e.g. `order_encryptor`)
    pub name: String,
    /// Encryptor algorithm type (e.g. `aes`, `md5`)
    pub encryptor_type: String,
    /// Algorithm properties (e.g. the AES key)
    pub props: HashMap<String, String>,
}

impl EncryptorMetadata {
    pub fn new(name: impl Into<String>, encryptor_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            encryptor_type: encryptor_type.into(),
            props: HashMap::new(),
        }
    }

    pub fn with_prop(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.props.insert(key.into(), value.into());
        self
    }
}

/// Read-only encryption rule: which `(table, column)` pairs are encrypted,
/// and with which encryptor.
///
/// Lookups are case-insensitive over table and column names, matching how
/// SQL identifiers are resolved.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EncryptRule {
    /// Keyed by `table.column`, lowercased
    encryptors: HashMap<String, EncryptorMetadata>,
}

impl EncryptRule {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an encryptor for a column (builder style)
    pub fn add_encryptor(
        mut self,
        table: &str,
        column: &str,
        encryptor: EncryptorMetadata,
    ) -> Self {
        self.encryptors.insert(Self::key(table, column), encryptor);
        self
    }

    /// Look up the encryptor configured for a column, if any
    pub fn find_encryptor(&self, table: &str, column: &str) -> Option<&EncryptorMetadata> {
        self.encryptors.get(&Self::key(table, column))
    }

    pub fn is_empty(&self) -> bool {
        self.encryptors.is_empty()
    }

    fn key(table: &str, column: &str) -> String {
        format!(
            "{}.{}",
            table.to_ascii_lowercase(),
            column.to_ascii_lowercase()
        )
    }
}
