use serde::{Deserialize, Serialize};

use crate::id::{PortId, WarehouseId};

/// A storage warehouse (仓库).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Warehouse {
    pub id: WarehouseId,
    pub name: String,
    pub location: String,
    pub capacity: i64,
    pub current_usage: i64,
    pub manager: String,
    pub description: String,
}

/// A quay/dock (码头). Ports are not joined to warehouses in the reference
/// dataset; the assistant applies a fixed name-based mapping instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Port {
    pub id: PortId,
    pub name: String,
    pub location: String,
    pub capacity: i64,
    pub current_load: i64,
    pub status: String,
    pub manager: String,
}
