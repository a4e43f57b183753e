//! Follow-up query suggestions.

use crate::intent::{QueryIntent, QueryType};
use crate::response::QueryResult;

/// Hard cap on the suggestion list length.
pub const MAX_SUGGESTIONS: usize = 4;

const BASE_SUGGESTIONS: [&str; 4] = [
    "查看库存总览",
    "A码头有多少物品？",
    "搜索起重机",
    "最近7天的交易记录",
];

/// Build the follow-up suggestion list for an answered query.
///
/// Successful count queries append two inventory follow-ups; since the base
/// list already fills the cap these extras are currently never visible.
/// Preserved as-is pending a product decision.
pub fn generate(intent: &QueryIntent, result: &QueryResult) -> Vec<String> {
    let mut suggestions: Vec<String> = BASE_SUGGESTIONS.iter().map(|s| s.to_string()).collect();

    if intent.kind == QueryType::Count && result.success {
        suggestions.push("查看其他码头的库存".to_string());
        suggestions.push("查看库存不足的物资".to_string());
    }

    suggestions.truncate(MAX_SUGGESTIONS);
    suggestions
}

/// Suggestions attached to the best-effort apology response.
pub fn fallback() -> Vec<String> {
    vec![
        "请尝试重新表述您的问题".to_string(),
        "查看库存总览".to_string(),
        "联系系统管理员".to_string(),
    ]
}
