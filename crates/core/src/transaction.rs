use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::id::{MaterialId, TransactionId, WarehouseId};

/// Stock movement kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Inbound,
    Outbound,
    Transfer,
    Adjustment,
}

impl TransactionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionType::Inbound => "inbound",
            TransactionType::Outbound => "outbound",
            TransactionType::Transfer => "transfer",
            TransactionType::Adjustment => "adjustment",
        }
    }

    pub fn all() -> [TransactionType; 4] {
        [
            TransactionType::Inbound,
            TransactionType::Outbound,
            TransactionType::Transfer,
            TransactionType::Adjustment,
        ]
    }
}

/// One recorded stock movement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: TransactionId,
    #[serde(rename = "type")]
    pub kind: TransactionType,
    pub material_id: MaterialId,
    pub warehouse_id: WarehouseId,
    pub quantity: i64,
    pub operator: String,
    pub timestamp: DateTime<Utc>,
    pub reference_no: String,
    pub notes: String,
}
