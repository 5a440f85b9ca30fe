// Item entity: one deserialized upstream UPC lookup

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// The upstream JSON body for a single UPC lookup.
///
/// `valid` is kept exactly as the upstream sent it. Every other field is
/// accepted as a string, number or boolean and stored in its text form.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct UpcItem {
    #[serde(default)]
    pub valid: Option<Value>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub reason: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub number: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub item_name: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub alias: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub avg_price: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub rate_up: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub rate_down: Option<String>,
}

impl UpcItem {
    /// Returns the text form of the value stored under an upstream
    /// (snake_case) key.
    pub fn lookup(&self, key: &str) -> Option<String> {
        match key {
            "valid" => self.valid.as_ref().and_then(scalar_text),
            "reason" => self.reason.clone(),
            "number" => self.number.clone(),
            "item_name" => self.item_name.clone(),
            "alias" => self.alias.clone(),
            "description" => self.description.clone(),
            "avg_price" => self.avg_price.clone(),
            "rate_up" => self.rate_up.clone(),
            "rate_down" => self.rate_down.clone(),
            _ => None,
        }
    }
}

/// Renders a JSON value the way GraphQL `String` coercion would.
pub fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(text) => Some(text.clone()),
        other => Some(other.to_string()),
    }
}

fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(scalar_text))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn deserializes_upstream_snake_case_body() {
        let item: UpcItem = serde_json::from_value(json!({
            "valid": "true",
            "number": "0111222333446",
            "item_name": "UPC Database Testing Code",
            "alias": "Testing Code",
            "description": "http://upcdatabase.org/code/0111222333446",
            "avg_price": "123.45",
            "rate_up": 14,
            "rate_down": 3
        }))
        .expect("item");
        assert_eq!(item.valid, Some(json!("true")));
        assert_eq!(item.reason, None);
        assert_eq!(item.item_name.as_deref(), Some("UPC Database Testing Code"));
        assert_eq!(item.rate_up.as_deref(), Some("14"));
        assert_eq!(item.lookup("rate_down").as_deref(), Some("3"));
    }

    #[test]
    fn lookup_renders_valid_as_text() {
        let item = UpcItem {
            valid: Some(json!(true)),
            ..UpcItem::default()
        };
        assert_eq!(item.lookup("valid").as_deref(), Some("true"));
        assert_eq!(item.lookup("unknown_key"), None);
    }

    #[test]
    fn null_and_missing_fields_become_none() {
        let item: UpcItem =
            serde_json::from_value(json!({ "valid": null, "reason": null })).expect("item");
        assert_eq!(item.valid, None);
        assert_eq!(item.lookup("reason"), None);
        assert_eq!(item.lookup("avg_price"), None);
    }
}
