/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use serde::de::{self, Deserializer};
use serde::Deserialize;
use serde_json::Value;

/// Reads an identifier the server may send either as a number or as a string
///
/// # Arguments
/// * `value` - JSON value holding the identifier
///
/// # Returns
/// The identifier, or `None` when the value is neither a non-negative integer
/// nor a string containing one
#[must_use]
pub fn value_as_id(value: &Value) -> Option<u64> {
    match value {
        Value::Number(n) => n.as_u64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Serde helper accepting `67` as well as `"67"` for identifier fields
pub fn deserialize_id<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    value_as_id(&value).ok_or_else(|| de::Error::custom(format!("invalid identifier: {value}")))
}
