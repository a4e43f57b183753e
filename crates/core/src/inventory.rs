use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::id::{InventoryId, MaterialId, WarehouseId};

/// Status of a stored material batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaterialStatus {
    Available,
    Reserved,
    InUse,
    Maintenance,
    Damaged,
    Expired,
}

impl MaterialStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            MaterialStatus::Available => "available",
            MaterialStatus::Reserved => "reserved",
            MaterialStatus::InUse => "in_use",
            MaterialStatus::Maintenance => "maintenance",
            MaterialStatus::Damaged => "damaged",
            MaterialStatus::Expired => "expired",
        }
    }

    pub fn all() -> [MaterialStatus; 6] {
        [
            MaterialStatus::Available,
            MaterialStatus::Reserved,
            MaterialStatus::InUse,
            MaterialStatus::Maintenance,
            MaterialStatus::Damaged,
            MaterialStatus::Expired,
        ]
    }
}

/// One inventory row: a quantity of one material held in one warehouse.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Inventory {
    pub id: InventoryId,
    pub material_id: MaterialId,
    pub warehouse_id: WarehouseId,
    pub quantity: i64,
    pub reserved_quantity: i64,
    /// Invariant: `available_quantity = quantity - reserved_quantity`.
    pub available_quantity: i64,
    pub status: MaterialStatus,
    /// Shelf/slot label inside the warehouse, e.g. `1号仓库-B07`.
    pub location_detail: String,
    pub last_updated: DateTime<Utc>,
}

impl Inventory {
    /// Whether this row counts as under-stocked for the given cutoff.
    pub fn is_low_stock(&self, threshold: i64) -> bool {
        self.available_quantity < threshold
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(available: i64) -> Inventory {
        Inventory {
            id: InventoryId::new("INV0001"),
            material_id: MaterialId::new("MAT001"),
            warehouse_id: WarehouseId::new("WH001"),
            quantity: available,
            reserved_quantity: 0,
            available_quantity: available,
            status: MaterialStatus::Available,
            location_detail: "1号仓库-A01".to_string(),
            last_updated: Utc::now(),
        }
    }

    #[test]
    fn low_stock_is_strictly_below_threshold() {
        assert!(row(19).is_low_stock(20));
        assert!(!row(20).is_low_stock(20));
    }
}
