//! `portstock-data`
//!
//! **Responsibility:** the read-only Reference Data Store.
//!
//! The assistant engine never owns domain records; it borrows read access
//! through the [`ReferenceStore`] trait defined here. [`MockDataStore`] is
//! the seeded in-memory implementation used for demos and tests.

pub mod mock;
pub mod store;

pub use mock::MockDataStore;
pub use store::{
    InventoryRow, InventorySummary, MaterialMatch, ReferenceStore, TransactionRow,
    LOW_STOCK_THRESHOLD, UNKNOWN_MATERIAL, UNKNOWN_WAREHOUSE,
};
