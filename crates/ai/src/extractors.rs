//! Entity extractors: one per routed intent.
//!
//! An extractor turns the captured entities (plus the raw input) into a
//! reference-data lookup and returns the lookup's result as JSON. Extractors
//! are total over missing entities: failing to resolve a target yields an
//! empty result, never an error, so the formatter path stays uniform.

use serde_json::Value as JsonValue;

use portstock_data::ReferenceStore;

use crate::response::AiError;

/// Fixed page size for the recent-transactions lookup.
///
/// The "最近N天" day window in the query is deliberately ignored: the
/// original behavior returns the last 10 transactions by recency no matter
/// what N was. Kept as-is pending a product decision.
pub const RECENT_TRANSACTIONS_LIMIT: usize = 10;

/// Trigger words stripped from the raw input when the search pattern matched
/// without capturing a usable term.
const SEARCH_TRIGGERS: [&str; 3] = ["搜索", "查找", "在哪里"];

/// The data accessor a matched rule routes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExtractorKind {
    PortInventory,
    WarehouseInventory,
    MaterialInventory,
    InventorySummary,
    MaterialSearch,
    RecentTransactions,
}

/// Run one extractor against the reference store.
pub fn run_extractor(
    kind: ExtractorKind,
    store: &dyn ReferenceStore,
    entities: &[String],
    raw_input: &str,
) -> Result<JsonValue, AiError> {
    match kind {
        ExtractorKind::PortInventory => port_inventory(store, entities),
        ExtractorKind::WarehouseInventory => warehouse_inventory(store, entities),
        ExtractorKind::MaterialInventory => material_inventory(store, entities),
        ExtractorKind::InventorySummary => inventory_summary(store),
        ExtractorKind::MaterialSearch => material_search(store, entities, raw_input),
        ExtractorKind::RecentTransactions => recent_transactions(store),
    }
}

fn to_json<T: serde::Serialize>(value: T) -> Result<JsonValue, AiError> {
    serde_json::to_value(value).map_err(|e| AiError::Internal(e.to_string()))
}

/// Port inventory lookup.
///
/// Ports and warehouses are separate in the reference dataset, so a fixed
/// name-letter mapping stands in for the unmodeled port→warehouse relation:
/// names containing "A" map to 1号仓库, "B" to 2号仓库, everything else
/// defaults to 1号仓库.
fn port_inventory(store: &dyn ReferenceStore, entities: &[String]) -> Result<JsonValue, AiError> {
    let Some(port_name) = entities.first() else {
        return Ok(JsonValue::Array(Vec::new()));
    };

    let port_name = port_name.trim().to_uppercase();
    // "A" takes precedence when both letters appear.
    let warehouse_name = if port_name.contains('B') && !port_name.contains('A') {
        "2号仓库"
    } else {
        "1号仓库"
    };

    to_json(store.inventory_by_warehouse(warehouse_name))
}

fn warehouse_inventory(
    store: &dyn ReferenceStore,
    entities: &[String],
) -> Result<JsonValue, AiError> {
    let Some(warehouse_name) = entities.first() else {
        return Ok(JsonValue::Array(Vec::new()));
    };
    to_json(store.inventory_by_warehouse(warehouse_name.trim()))
}

fn material_inventory(
    store: &dyn ReferenceStore,
    entities: &[String],
) -> Result<JsonValue, AiError> {
    let Some(material_name) = entities.first() else {
        return Ok(JsonValue::Array(Vec::new()));
    };
    to_json(store.search_materials(material_name.trim()))
}

fn inventory_summary(store: &dyn ReferenceStore) -> Result<JsonValue, AiError> {
    to_json(store.inventory_summary())
}

/// Search term recovery: first non-empty captured entity, else strip the
/// trigger words from the raw input.
fn material_search(
    store: &dyn ReferenceStore,
    entities: &[String],
    raw_input: &str,
) -> Result<JsonValue, AiError> {
    let mut term = entities
        .iter()
        .map(|e| e.trim())
        .find(|e| !e.is_empty())
        .unwrap_or("")
        .to_string();

    if term.is_empty() {
        for trigger in SEARCH_TRIGGERS {
            if raw_input.contains(trigger) {
                term = raw_input.replace(trigger, "").trim().to_string();
                break;
            }
        }
    }

    if term.is_empty() {
        return Ok(JsonValue::Array(Vec::new()));
    }
    to_json(store.search_materials(&term))
}

fn recent_transactions(store: &dyn ReferenceStore) -> Result<JsonValue, AiError> {
    to_json(store.recent_transactions(RECENT_TRANSACTIONS_LIMIT))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::FixtureStore;

    fn entities(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn port_a_maps_to_warehouse_one() {
        let store = FixtureStore::scenario();
        let data = run_extractor(
            ExtractorKind::PortInventory,
            &store,
            &entities(&["A"]),
            "A码头有多少物品",
        )
        .unwrap();

        let rows = data.as_array().unwrap();
        assert_eq!(rows.len(), 2);
    }

    #[test]
    fn port_b_maps_to_warehouse_two() {
        let store = FixtureStore::scenario();
        let data = run_extractor(
            ExtractorKind::PortInventory,
            &store,
            &entities(&["b"]),
            "b码头有多少物品",
        )
        .unwrap();

        let rows = data.as_array().unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0]["material_name"], "安全帽");
    }

    #[test]
    fn unknown_port_letter_defaults_to_warehouse_one() {
        let store = FixtureStore::scenario();
        let data = run_extractor(
            ExtractorKind::PortInventory,
            &store,
            &entities(&["C"]),
            "C码头有多少物品",
        )
        .unwrap();
        assert_eq!(data.as_array().unwrap().len(), 2);
    }

    #[test]
    fn missing_entities_yield_empty_sequence_not_error() {
        let store = FixtureStore::scenario();
        for kind in [
            ExtractorKind::PortInventory,
            ExtractorKind::WarehouseInventory,
            ExtractorKind::MaterialInventory,
        ] {
            let data = run_extractor(kind, &store, &[], "").unwrap();
            assert_eq!(data, serde_json::json!([]));
        }
    }

    #[test]
    fn search_falls_back_to_trigger_word_stripping() {
        let store = FixtureStore::scenario();
        // All captured groups empty: term must be recovered from raw input.
        let data = run_extractor(
            ExtractorKind::MaterialSearch,
            &store,
            &entities(&["", "", ""]),
            "搜索起重机",
        )
        .unwrap();

        let rows = data.as_array().unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0]["name"], "起重机");
    }

    #[test]
    fn search_uses_first_nonempty_entity() {
        let store = FixtureStore::scenario();
        let data = run_extractor(
            ExtractorKind::MaterialSearch,
            &store,
            &entities(&["", "叉车", ""]),
            "查找叉车",
        )
        .unwrap();
        assert_eq!(data.as_array().unwrap()[0]["name"], "叉车");
    }

    #[test]
    fn search_with_no_recoverable_term_is_empty() {
        let store = FixtureStore::scenario();
        let data = run_extractor(ExtractorKind::MaterialSearch, &store, &[], "你好").unwrap();
        assert_eq!(data, serde_json::json!([]));
    }

    #[test]
    fn summary_ignores_entities() {
        let store = FixtureStore::scenario();
        let data = run_extractor(
            ExtractorKind::InventorySummary,
            &store,
            &entities(&["whatever"]),
            "库存总览",
        )
        .unwrap();
        assert!(data.get("total_items").is_some());
    }

    #[test]
    fn recent_transactions_capped_at_ten() {
        let store = FixtureStore::scenario();
        let data = run_extractor(
            ExtractorKind::RecentTransactions,
            &store,
            &entities(&["7"]),
            "最近7天的交易记录",
        )
        .unwrap();
        assert_eq!(data.as_array().unwrap().len(), RECENT_TRANSACTIONS_LIMIT);
    }
}
