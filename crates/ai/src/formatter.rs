//! Response formatter: (intent, result) → human-readable message.

use serde_json::Value as JsonValue;

use crate::intent::{QueryIntent, QueryType};
use crate::response::QueryResult;

/// Fallback when no template applies.
const FALLBACK_MESSAGE: &str = "查询完成，请查看详细数据。";

/// Render the per-intent message for a query result.
pub fn format_response(intent: &QueryIntent, result: &QueryResult) -> String {
    if !result.success {
        let error = result.error.as_deref().unwrap_or("未知错误");
        return format!("抱歉，查询失败：{error}");
    }

    let data = &result.data;

    match intent.kind {
        QueryType::Count => format_count(data),
        QueryType::List => format_list(data),
        QueryType::General => data
            .get("message")
            .and_then(JsonValue::as_str)
            .map(str::to_string)
            .unwrap_or_else(|| FALLBACK_MESSAGE.to_string()),
        _ => FALLBACK_MESSAGE.to_string(),
    }
}

fn format_count(data: &JsonValue) -> String {
    match data.as_array() {
        Some(items) if !items.is_empty() => {
            let total_items = items.len();
            // Absent quantity fields count as zero.
            let total_quantity: i64 = items
                .iter()
                .map(|item| item.get("quantity").and_then(JsonValue::as_i64).unwrap_or(0))
                .sum();
            format!("根据查询结果，共有 {total_items} 种物资，总数量为 {total_quantity} 件。")
        }
        _ => "没有找到相关的库存信息。".to_string(),
    }
}

fn format_list(data: &JsonValue) -> String {
    // Summary shape is recognized by its total_items field.
    if let Some(total_items) = data.get("total_items") {
        let total_quantity = data.get("total_quantity").cloned().unwrap_or(JsonValue::Null);
        let low_stock = data.get("low_stock_items").cloned().unwrap_or(JsonValue::Null);
        return format!(
            "库存总览：共有 {total_items} 个库存项目，总数量 {total_quantity} 件，其中 {low_stock} 项库存不足。"
        );
    }

    match data.as_array() {
        Some(items) if !items.is_empty() => format!("找到 {} 条相关记录。", items.len()),
        Some(_) => "没有找到相关记录。".to_string(),
        None => FALLBACK_MESSAGE.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extractors::ExtractorKind;
    use serde_json::json;

    fn count_intent() -> QueryIntent {
        QueryIntent::matched(QueryType::Count, vec![], ExtractorKind::PortInventory)
    }

    fn list_intent() -> QueryIntent {
        QueryIntent::matched(QueryType::List, vec![], ExtractorKind::InventorySummary)
    }

    #[test]
    fn failure_message_carries_error() {
        let result = QueryResult::failed("store unavailable", 0.0);
        let message = format_response(&count_intent(), &result);
        assert_eq!(message, "抱歉，查询失败：store unavailable");
    }

    #[test]
    fn count_sums_quantities() {
        let result = QueryResult::ok(json!([{"quantity": 5}, {"quantity": 7}]), 0.0);
        let message = format_response(&count_intent(), &result);
        assert_eq!(message, "根据查询结果，共有 2 种物资，总数量为 12 件。");
    }

    #[test]
    fn count_defaults_missing_quantity_to_zero() {
        let result = QueryResult::ok(json!([{"name": "起重机"}, {"quantity": 3}]), 0.0);
        let message = format_response(&count_intent(), &result);
        assert!(message.contains("共有 2 种物资"));
        assert!(message.contains("总数量为 3 件"));
    }

    #[test]
    fn count_with_empty_data_reports_no_inventory() {
        let result = QueryResult::ok(json!([]), 0.0);
        let message = format_response(&count_intent(), &result);
        assert_eq!(message, "没有找到相关的库存信息。");
    }

    #[test]
    fn list_summary_uses_summary_template() {
        let result = QueryResult::ok(
            json!({"total_items": 40, "total_quantity": 9000, "low_stock_items": 3,
                   "warehouses_count": 10, "materials_count": 30}),
            0.0,
        );
        let message = format_response(&list_intent(), &result);
        assert_eq!(
            message,
            "库存总览：共有 40 个库存项目，总数量 9000 件，其中 3 项库存不足。"
        );
    }

    #[test]
    fn list_array_reports_record_count() {
        let result = QueryResult::ok(json!([{"a": 1}, {"a": 2}, {"a": 3}]), 0.0);
        assert_eq!(format_response(&list_intent(), &result), "找到 3 条相关记录。");

        let empty = QueryResult::ok(json!([]), 0.0);
        assert_eq!(format_response(&list_intent(), &empty), "没有找到相关记录。");
    }

    #[test]
    fn general_echoes_payload_message() {
        let intent = QueryIntent::general("你好");
        let result = QueryResult::ok(json!({"message": "canned"}), 0.0);
        assert_eq!(format_response(&intent, &result), "canned");
    }

    #[test]
    fn unhandled_combinations_fall_back() {
        let intent = QueryIntent::matched(QueryType::Trend, vec![], ExtractorKind::InventorySummary);
        let result = QueryResult::ok(json!({"anything": true}), 0.0);
        assert_eq!(format_response(&intent, &result), FALLBACK_MESSAGE);
    }
}
