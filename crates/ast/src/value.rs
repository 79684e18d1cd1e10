// Copyright (c) 2026 shard-rewrite contributors
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! Positional bind-parameter values.

use serde::{Deserialize, Serialize};

/// A bind-parameter value supplied alongside a statement.
///
/// The rewrite core consumes these for placeholder-vs-literal discrimination
/// and for resolving pagination bounds expressed as parameter markers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ParameterValue {
    Integer(i64),
    Unsigned(u64),
    Float(f64),
    Text(String),
    Boolean(bool),
    Null,
}

impl ParameterValue {
    /// Interpret this value as a non-negative integer, if possible.
    ///
    /// Used when a pagination bound (offset or row count) is bound as a
    /// parameter rather than written as a literal.
    pub fn as_u64(&self) -> Option<u64> {
        match self {
            ParameterValue::Integer(i) if *i >= 0 => Some(*i as u64),
            ParameterValue::Unsigned(u) => Some(*u),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, ParameterValue::Null)
    }
}

impl From<i64> for ParameterValue {
    fn from(value: i64) -> Self {
        ParameterValue::Integer(value)
    }
}

impl From<u64> for ParameterValue {
    fn from(value: u64) -> Self {
        ParameterValue::Unsigned(value)
    }
}

impl From<&str> for ParameterValue {
    fn from(value: &str) -> Self {
        ParameterValue::Text(value.to_string())
    }
}

impl From<String> for ParameterValue {
    fn from(value: String) -> Self {
        ParameterValue::Text(value)
    }
}

impl From<bool> for ParameterValue {
    fn from(value: bool) -> Self {
        ParameterValue::Boolean(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_as_u64() {
        assert_eq!(ParameterValue::Integer(10).as_u64(), Some(10));
        assert_eq!(ParameterValue::Unsigned(5).as_u64(), Some(5));
        assert_eq!(ParameterValue::Integer(-1).as_u64(), None);
        assert_eq!(ParameterValue::Text("10".into()).as_u64(), None);
        assert_eq!(ParameterValue::Null.as_u64(), None);
    }

    #[test]
    fn test_from_conversions() {
        assert_eq!(ParameterValue::from(3_i64), ParameterValue::Integer(3));
        assert_eq!(
            ParameterValue::from("abc"),
            ParameterValue::Text("abc".to_string())
        );
        assert_eq!(ParameterValue::from(true), ParameterValue::Boolean(true));
    }
}
