//! Query result and composite answer types.

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use thiserror::Error;

/// Outcome of running one extractor, normalized by the query executor.
///
/// Invariants (enforced by the constructors):
/// - `success == false` ⇒ `data` is null and `error` is set.
/// - `success == true` ⇒ `error` is `None`.
/// - `count` is the array length when `data` is a sequence, `1` when `data`
///   is any other non-null value, unset otherwise.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryResult {
    pub success: bool,
    pub data: JsonValue,
    pub count: Option<usize>,
    /// Extractor wall time in seconds (monotonic clock).
    pub query_time: f64,
    pub error: Option<String>,
}

impl QueryResult {
    pub fn ok(data: JsonValue, query_time: f64) -> Self {
        let count = match &data {
            JsonValue::Array(items) => Some(items.len()),
            JsonValue::Null => None,
            _ => Some(1),
        };
        Self {
            success: true,
            data,
            count,
            query_time,
            error: None,
        }
    }

    pub fn failed(error: impl Into<String>, query_time: f64) -> Self {
        Self {
            success: false,
            data: JsonValue::Null,
            count: None,
            query_time,
            error: Some(error.into()),
        }
    }
}

/// The composite answer produced for one input message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AiResponse {
    pub message: String,
    pub query_result: Option<QueryResult>,
    /// Follow-up queries, at most four.
    pub suggestions: Vec<String>,
    pub confidence: f64,
    /// Whole-pipeline wall time in seconds.
    pub processing_time: f64,
}

#[derive(Debug, Error)]
pub enum AiError {
    #[error("invalid query input: {0}")]
    InvalidInput(String),

    #[error("data lookup failed: {0}")]
    LookupFailed(String),

    #[error("internal error: {0}")]
    Internal(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn ok_counts_array_length() {
        let result = QueryResult::ok(json!([1, 2, 3]), 0.0);
        assert!(result.success);
        assert_eq!(result.count, Some(3));
        assert!(result.error.is_none());
    }

    #[test]
    fn ok_counts_single_object_as_one() {
        let result = QueryResult::ok(json!({"total_items": 5}), 0.0);
        assert_eq!(result.count, Some(1));
    }

    #[test]
    fn ok_with_null_data_has_no_count() {
        let result = QueryResult::ok(JsonValue::Null, 0.0);
        assert_eq!(result.count, None);
    }

    #[test]
    fn failed_clears_data_and_sets_error() {
        let result = QueryResult::failed("boom", 0.1);
        assert!(!result.success);
        assert_eq!(result.data, JsonValue::Null);
        assert_eq!(result.error.as_deref(), Some("boom"));
        assert_eq!(result.count, None);
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn count_is_the_array_length(len in 0usize..64) {
                let data = JsonValue::Array(vec![json!(1); len]);
                let result = QueryResult::ok(data, 0.0);
                prop_assert_eq!(result.count, Some(len));
                prop_assert!(result.success);
            }
        }
    }
}
