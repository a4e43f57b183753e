//! Hand-built reference store for engine tests.
//!
//! Unlike the seeded mock dataset, every number here is chosen by hand so
//! tests can assert exact message contents.

use chrono::{DateTime, Duration, Utc};

use portstock_core::{MaterialCategory, MaterialId, MaterialStatus, TransactionId, TransactionType};
use portstock_data::{
    InventoryRow, InventorySummary, MaterialMatch, ReferenceStore, TransactionRow,
};

pub struct FixtureStore {
    warehouses: Vec<(String, Vec<InventoryRow>)>,
    materials: Vec<MaterialMatch>,
    summary: InventorySummary,
    transactions: Vec<TransactionRow>,
}

impl FixtureStore {
    /// Two warehouses, three materials, twelve transactions.
    ///
    /// 1号仓库 holds quantities 5 and 7 so count queries answer "2 kinds,
    /// 12 total".
    pub fn scenario() -> Self {
        let base: DateTime<Utc> = "2025-06-01T12:00:00Z".parse().unwrap();

        let row = |name: &str, quantity: i64, available: i64| InventoryRow {
            material_name: name.to_string(),
            category: MaterialCategory::Machinery,
            quantity,
            available_quantity: available,
            unit: "台".to_string(),
            location: "1号仓库-A01".to_string(),
            status: MaterialStatus::Available,
        };

        let material = |id: &str, name: &str, desc: &str, total: i64| MaterialMatch {
            id: MaterialId::new(id),
            name: name.to_string(),
            category: MaterialCategory::Machinery,
            description: desc.to_string(),
            unit: "台".to_string(),
            total_quantity: total,
        };

        let transactions = (0..12)
            .map(|i| TransactionRow {
                transaction_id: TransactionId::new(format!("TXN{:04}", i + 1)),
                kind: TransactionType::Inbound,
                material_name: "起重机".to_string(),
                warehouse_name: "1号仓库".to_string(),
                quantity: 1,
                operator: "张三".to_string(),
                timestamp: base - Duration::hours(i),
            })
            .collect();

        Self {
            warehouses: vec![
                (
                    "1号仓库".to_string(),
                    vec![row("起重机", 5, 5), row("叉车", 7, 3)],
                ),
                ("2号仓库".to_string(), vec![row("安全帽", 30, 30)]),
            ],
            materials: vec![
                material("MAT001", "起重机", "港口起重设备", 5),
                material("MAT002", "叉车", "货物搬运设备", 7),
                material("MAT003", "安全帽", "头部防护用品", 30),
            ],
            summary: InventorySummary {
                total_items: 3,
                total_quantity: 42,
                low_stock_items: 1,
                warehouses_count: 2,
                materials_count: 3,
            },
            transactions,
        }
    }
}

impl ReferenceStore for FixtureStore {
    fn inventory_by_warehouse(&self, name_substring: &str) -> Vec<InventoryRow> {
        self.warehouses
            .iter()
            .find(|(name, _)| name.contains(name_substring))
            .map(|(_, rows)| rows.clone())
            .unwrap_or_default()
    }

    fn search_materials(&self, term: &str) -> Vec<MaterialMatch> {
        let term = term.to_lowercase();
        self.materials
            .iter()
            .filter(|m| {
                m.name.to_lowercase().contains(&term)
                    || m.description.to_lowercase().contains(&term)
                    || m.category.as_str().contains(&term)
            })
            .cloned()
            .collect()
    }

    fn inventory_summary(&self) -> InventorySummary {
        self.summary
    }

    fn recent_transactions(&self, limit: usize) -> Vec<TransactionRow> {
        let mut sorted = self.transactions.clone();
        sorted.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        sorted.truncate(limit);
        sorted
    }
}
