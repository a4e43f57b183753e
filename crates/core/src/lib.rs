//! `portstock-core`
//!
//! **Responsibility:** domain foundation building blocks.
//!
//! This crate contains **pure domain** records and identifiers for the port
//! materials system (no storage, transport, or query concerns).

pub mod error;
pub mod id;
pub mod inventory;
pub mod material;
pub mod supplier;
pub mod transaction;
pub mod warehouse;

pub use error::{DomainError, DomainResult};
pub use id::{InventoryId, MaterialId, PortId, SupplierId, TransactionId, WarehouseId};
pub use inventory::{Inventory, MaterialStatus};
pub use material::{Material, MaterialCategory};
pub use supplier::Supplier;
pub use transaction::{Transaction, TransactionType};
pub use warehouse::{Port, Warehouse};
