//! Canned quick actions surfaced by the chat UI.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuickAction {
    pub id: String,
    pub title: String,
    pub query: String,
    pub description: String,
}

/// The default quick-action set.
pub fn defaults() -> Vec<QuickAction> {
    [
        (
            "inventory_summary",
            "库存总览",
            "库存总览",
            "查看整体库存统计信息",
        ),
        (
            "port_a_inventory",
            "A码头库存",
            "A码头有多少物品",
            "查看A码头的物资库存",
        ),
        (
            "low_stock",
            "库存不足",
            "库存不足的物资",
            "查看库存不足的物资列表",
        ),
        (
            "recent_transactions",
            "最近交易",
            "最近7天的交易记录",
            "查看最近的交易记录",
        ),
    ]
    .into_iter()
    .map(|(id, title, query, description)| QuickAction {
        id: id.to_string(),
        title: title.to_string(),
        query: query.to_string(),
        description: description.to_string(),
    })
    .collect()
}
