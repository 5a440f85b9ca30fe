use serde_json::Value;
use thiserror::Error;

use crate::entities::UpcItem;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ItemError {
    /// The upstream flagged the lookup as invalid; carries its `reason`.
    #[error("{0}")]
    Invalid(String),
}

/// Resolves the `valid` field.
///
/// A `valid` of `false` or `"false"` fails with the upstream `reason` as the
/// message. Anything else is returned unchanged.
pub fn resolve_validity(item: &UpcItem) -> Result<Option<Value>, ItemError> {
    match &item.valid {
        Some(Value::Bool(false)) => Err(invalid(item)),
        Some(Value::String(text)) if text == "false" => Err(invalid(item)),
        other => Ok(other.clone()),
    }
}

fn invalid(item: &UpcItem) -> ItemError {
    ItemError::Invalid(item.reason.clone().unwrap_or_default())
}
