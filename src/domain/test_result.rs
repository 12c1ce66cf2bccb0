//! Test result domain model

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A single diagnostic test result
///
/// Stored verbatim. Only `testType` (e.g. `Laboratory`, `Radiology`) is
/// interpreted, and only for exact-match filtering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TestResult(Value);

impl TestResult {
    /// Wraps a raw JSON record
    pub fn new(record: Value) -> Self {
        Self(record)
    }

    /// The `testType` field, if present and a string
    pub fn test_type(&self) -> Option<&str> {
        self.0.get("testType").and_then(Value::as_str)
    }

    /// Returns true if `testType` equals `test_type` exactly (case-sensitive)
    pub fn is_type(&self, test_type: &str) -> bool {
        self.test_type() == Some(test_type)
    }

    /// The underlying JSON record
    pub fn as_value(&self) -> &Value {
        &self.0
    }
}
