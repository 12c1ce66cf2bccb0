//! Response envelope
//!
//! Every query answer is wrapped as
//! `{"success": true, "<payload-key>": <data>, "count": n}`, where `count`
//! only appears for list payloads. Failures are
//! `{"success": false, "detail": "<message>"}`.

use serde::{Serialize, Serializer};
use serde_json::{Map, Value};

/// A single response document
#[derive(Debug, Clone, PartialEq)]
pub struct Envelope {
    body: Map<String, Value>,
}

impl Envelope {
    /// Successful response carrying `data` under `key`
    pub fn success(key: &str, data: Value) -> Self {
        let mut body = Map::new();
        body.insert("success".to_string(), Value::Bool(true));
        body.insert(key.to_string(), data);
        Self { body }
    }

    /// Failed response with a human-readable message
    pub fn failure(detail: impl Into<String>) -> Self {
        let mut body = Map::new();
        body.insert("success".to_string(), Value::Bool(false));
        body.insert("detail".to_string(), Value::String(detail.into()));
        Self { body }
    }

    /// Adds the `count` field
    pub fn with_count(self, count: usize) -> Self {
        self.with_field("count", Value::from(count))
    }

    /// Adds an arbitrary top-level field
    pub fn with_field(mut self, key: &str, value: Value) -> Self {
        self.body.insert(key.to_string(), value);
        self
    }

    /// Whether the response reports success
    pub fn is_success(&self) -> bool {
        matches!(self.body.get("success"), Some(Value::Bool(true)))
    }

    /// Reads a top-level field
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.body.get(key)
    }

    /// Converts the envelope into a JSON value
    pub fn into_value(self) -> Value {
        Value::Object(self.body)
    }
}

impl Serialize for Envelope {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.body.serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_success_with_count() {
        let envelope = Envelope::success("patients", json!([1, 2])).with_count(2);
        assert!(envelope.is_success());
        assert_eq!(
            envelope.into_value(),
            json!({"success": true, "patients": [1, 2], "count": 2})
        );
    }

    #[test]
    fn test_success_field_is_written_first() {
        let envelope = Envelope::success("testResults", json!([])).with_count(0);
        assert_eq!(
            serde_json::to_string(&envelope).unwrap(),
            r#"{"success":true,"testResults":[],"count":0}"#
        );
    }

    #[test]
    fn test_failure() {
        let envelope = Envelope::failure("Patient with ID PAT-9 not found");
        assert!(!envelope.is_success());
        assert_eq!(
            serde_json::to_value(&envelope).unwrap(),
            json!({"success": false, "detail": "Patient with ID PAT-9 not found"})
        );
    }

    #[test]
    fn test_extra_field() {
        let envelope = Envelope::success("appointments", json!([])).with_field("type", json!("past"));
        assert_eq!(envelope.get("type"), Some(&json!("past")));
    }
}
