use serde::{Deserialize, Serialize};

use crate::id::SupplierId;

/// A material supplier (供应商).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Supplier {
    pub id: SupplierId,
    pub name: String,
    pub contact_person: String,
    pub phone: String,
    pub email: String,
    pub address: String,
    /// Assessment rating in [3.5, 5.0], one decimal.
    pub rating: f64,
    pub status: String,
}
