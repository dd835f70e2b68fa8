//! Arbitrary JSON documents passed through the echo endpoint.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A JSON document of any shape.
///
/// Serializes exactly like the wrapped [`Value`]: objects keep the key order
/// they were parsed with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Payload(Value);

impl Payload {
    /// Wrap a JSON value.
    #[must_use]
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    /// Borrow the inner JSON value.
    #[must_use]
    pub fn as_value(&self) -> &Value {
        &self.0
    }

    /// Unwrap into the inner JSON value.
    #[must_use]
    pub fn into_value(self) -> Value {
        self.0
    }

    /// Short name of the top-level JSON type, used in logs.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self.0 {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Number(_) => "number",
            Value::String(_) => "string",
            Value::Array(_) => "array",
            Value::Object(_) => "object",
        }
    }
}

impl From<Value> for Payload {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn should_serialize_transparently() {
        let payload = Payload::new(json!({"a": [1, true, null]}));
        assert_eq!(
            serde_json::to_string(&payload).unwrap(),
            r#"{"a":[1,true,null]}"#
        );
    }

    #[test]
    fn should_preserve_object_key_order() {
        let payload: Payload = serde_json::from_str(r#"{"z":1,"a":2,"m":3}"#).unwrap();
        assert_eq!(serde_json::to_string(&payload).unwrap(), r#"{"z":1,"a":2,"m":3}"#);
    }

    #[test]
    fn should_accept_scalar_documents() {
        let payload: Payload = serde_json::from_str("\"hello\"").unwrap();
        assert_eq!(payload.as_value(), &json!("hello"));
        assert_eq!(payload.kind(), "string");
    }

    #[test]
    fn should_name_each_json_kind() {
        let kinds: Vec<_> = [
            json!(null),
            json!(false),
            json!(1.5),
            json!("x"),
            json!([]),
            json!({}),
        ]
        .into_iter()
        .map(|v| Payload::from(v).kind())
        .collect();
        assert_eq!(
            kinds,
            ["null", "bool", "number", "string", "array", "object"]
        );
    }
}
