//! Read-only lookup interface consumed by the assistant engine.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use portstock_core::{MaterialCategory, MaterialId, MaterialStatus, TransactionId, TransactionType};

/// Available-quantity cutoff below which an inventory row counts as low stock.
pub const LOW_STOCK_THRESHOLD: i64 = 20;

/// Sentinel shown when a transaction's material cannot be resolved.
pub const UNKNOWN_MATERIAL: &str = "未知物资";

/// Sentinel shown when a transaction's warehouse cannot be resolved.
pub const UNKNOWN_WAREHOUSE: &str = "未知仓库";

/// One inventory row of a warehouse, joined to its material.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryRow {
    pub material_name: String,
    pub category: MaterialCategory,
    pub quantity: i64,
    pub available_quantity: i64,
    pub unit: String,
    pub location: String,
    pub status: MaterialStatus,
}

/// One material search hit with its quantity aggregated across warehouses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialMatch {
    pub id: MaterialId,
    pub name: String,
    pub category: MaterialCategory,
    pub description: String,
    pub unit: String,
    pub total_quantity: i64,
}

/// Whole-store inventory statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventorySummary {
    pub total_items: usize,
    pub total_quantity: i64,
    /// Rows with `available_quantity` below [`LOW_STOCK_THRESHOLD`].
    pub low_stock_items: usize,
    pub warehouses_count: usize,
    pub materials_count: usize,
}

/// One recent stock movement, joined to material and warehouse names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionRow {
    pub transaction_id: TransactionId,
    #[serde(rename = "type")]
    pub kind: TransactionType,
    pub material_name: String,
    pub warehouse_name: String,
    pub quantity: i64,
    pub operator: String,
    pub timestamp: DateTime<Utc>,
}

/// Read-only reference data capability.
///
/// Implementations must be immutable for the duration of request processing;
/// the engine takes this at construction time (no process-wide singleton) and
/// performs no retries or timeouts of its own.
pub trait ReferenceStore: Send + Sync {
    /// Inventory of the first warehouse whose name contains `name_substring`.
    /// Unknown warehouse names yield an empty vec, not an error.
    fn inventory_by_warehouse(&self, name_substring: &str) -> Vec<InventoryRow>;

    /// Case-insensitive substring search across material name, description,
    /// and category label.
    fn search_materials(&self, term: &str) -> Vec<MaterialMatch>;

    fn inventory_summary(&self) -> InventorySummary;

    /// Most recent transactions, newest first, truncated to `limit`.
    fn recent_transactions(&self, limit: usize) -> Vec<TransactionRow>;
}
