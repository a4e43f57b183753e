//! Query executor: timing and failure containment.
//!
//! This is the single point where heterogeneous extractor failures are
//! normalized into the `QueryResult` failure shape. Nothing below this
//! boundary reaches the formatter as anything other than a `QueryResult`.
//! If a future data layer performs real I/O, this is also where timeouts
//! would be bounded and converted into the same failure shape.

use std::time::Instant;

use serde_json::{json, Value as JsonValue};

use portstock_data::ReferenceStore;

use crate::extractors::run_extractor;
use crate::intent::QueryIntent;
use crate::response::QueryResult;

/// Canned clarification message for general (unrouted) queries.
pub const GENERAL_MESSAGE: &str = "我理解您的问题，但需要更具体的信息才能提供准确的答案。";

/// Execute the intent's extractor against the store.
///
/// Total: extractor errors become `QueryResult::failed`, never a panic or a
/// propagated error.
pub fn execute(store: &dyn ReferenceStore, intent: &QueryIntent, raw_input: &str) -> QueryResult {
    let started = Instant::now();

    let outcome = match intent.extractor {
        Some(kind) => run_extractor(kind, store, &intent.entities, raw_input),
        None => Ok(general_payload()),
    };

    let query_time = started.elapsed().as_secs_f64();

    match outcome {
        Ok(data) => QueryResult::ok(data, query_time),
        Err(e) => {
            tracing::warn!(error = %e, "extractor failed");
            QueryResult::failed(e.to_string(), query_time)
        }
    }
}

/// Payload answered for queries no rule matched.
fn general_payload() -> JsonValue {
    json!({
        "message": GENERAL_MESSAGE,
        "suggestions": [
            "请尝试询问具体的码头或仓库库存",
            "查看库存总览",
            "搜索特定物资",
        ],
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::FixtureStore;
    use crate::registry::PatternRegistry;

    #[test]
    fn success_wraps_data_with_count_and_timing() {
        let store = FixtureStore::scenario();
        let registry = PatternRegistry::standard().unwrap();

        let intent = registry.resolve("A码头有多少物品");
        let result = execute(&store, &intent, "A码头有多少物品");

        assert!(result.success);
        assert_eq!(result.count, Some(2));
        assert!(result.query_time >= 0.0);
        assert!(result.error.is_none());
    }

    #[test]
    fn general_intent_gets_clarification_payload() {
        let store = FixtureStore::scenario();
        let registry = PatternRegistry::standard().unwrap();

        let intent = registry.resolve("你好");
        let result = execute(&store, &intent, "你好");

        assert!(result.success);
        assert_eq!(result.count, Some(1));
        assert_eq!(result.data["message"], GENERAL_MESSAGE);
    }

    #[test]
    fn empty_extraction_is_success_not_failure() {
        let store = FixtureStore::scenario();
        let registry = PatternRegistry::standard().unwrap();

        // Unknown warehouse: empty-data success keeps the formatter path uniform.
        let intent = registry.resolve("外星仓库有多少货");
        let result = execute(&store, &intent, "外星仓库有多少货");

        assert!(result.success);
        assert_eq!(result.count, Some(0));
    }
}
