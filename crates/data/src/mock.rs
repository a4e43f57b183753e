//! Seeded in-memory reference dataset.
//!
//! Demo/test stand-in for a real warehouse database. Generation is
//! deterministic for a given `(seed, now)` pair so tests can assert on
//! equality of two independently built stores.

use chrono::{DateTime, Duration, Utc};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use serde_json::json;

use portstock_core::{
    Inventory, InventoryId, Material, MaterialCategory, MaterialId, MaterialStatus, Port, PortId,
    Supplier, SupplierId, Transaction, TransactionId, TransactionType, Warehouse, WarehouseId,
};

use crate::store::{
    InventoryRow, InventorySummary, MaterialMatch, ReferenceStore, TransactionRow,
    LOW_STOCK_THRESHOLD, UNKNOWN_MATERIAL, UNKNOWN_WAREHOUSE,
};

const SUPPLIER_NAMES: [&str; 6] = [
    "上海港口设备有限公司",
    "青岛海洋机械厂",
    "大连重工集团",
    "天津港务机械公司",
    "宁波港口装备厂",
    "深圳海事设备公司",
];

const PORT_NAMES: [&str; 5] = ["A码头", "B码头", "C码头", "D码头", "E码头"];

const WAREHOUSE_NAMES: [&str; 10] = [
    "1号仓库",
    "2号仓库",
    "3号仓库",
    "4号仓库",
    "5号仓库",
    "设备仓库",
    "工具仓库",
    "备件仓库",
    "消耗品仓库",
    "危险品仓库",
];

const OPERATORS: [&str; 6] = ["张三", "李四", "王五", "赵六", "钱七", "孙八"];

const MATERIAL_CATALOG: [(&str, MaterialCategory, &str, &str); 30] = [
    ("起重机", MaterialCategory::Machinery, "台", "港口起重设备"),
    ("叉车", MaterialCategory::Machinery, "台", "货物搬运设备"),
    ("拖车", MaterialCategory::Machinery, "台", "货物运输设备"),
    ("装载机", MaterialCategory::Machinery, "台", "货物装卸设备"),
    ("吊车", MaterialCategory::Machinery, "台", "重型起重设备"),
    ("监控摄像头", MaterialCategory::Electronics, "个", "安防监控设备"),
    ("对讲机", MaterialCategory::Electronics, "台", "通讯设备"),
    ("计算机", MaterialCategory::Electronics, "台", "办公设备"),
    ("打印机", MaterialCategory::Electronics, "台", "办公设备"),
    ("扫描枪", MaterialCategory::Electronics, "个", "条码扫描设备"),
    ("扳手", MaterialCategory::Tools, "把", "维修工具"),
    ("螺丝刀", MaterialCategory::Tools, "把", "维修工具"),
    ("电钻", MaterialCategory::Tools, "台", "电动工具"),
    ("切割机", MaterialCategory::Tools, "台", "切割工具"),
    ("焊接设备", MaterialCategory::Tools, "套", "焊接工具"),
    ("安全帽", MaterialCategory::Safety, "顶", "头部防护用品"),
    ("安全带", MaterialCategory::Safety, "条", "高空作业防护"),
    ("防护服", MaterialCategory::Safety, "套", "身体防护用品"),
    ("防护眼镜", MaterialCategory::Safety, "副", "眼部防护用品"),
    ("防护手套", MaterialCategory::Safety, "双", "手部防护用品"),
    ("机油", MaterialCategory::Consumables, "桶", "设备润滑油"),
    ("柴油", MaterialCategory::Consumables, "升", "设备燃料"),
    ("液压油", MaterialCategory::Consumables, "桶", "液压系统用油"),
    ("清洁剂", MaterialCategory::Consumables, "瓶", "设备清洁用品"),
    ("润滑脂", MaterialCategory::Consumables, "桶", "设备润滑脂"),
    ("A4纸", MaterialCategory::Office, "包", "办公用纸"),
    ("签字笔", MaterialCategory::Office, "支", "书写工具"),
    ("文件夹", MaterialCategory::Office, "个", "文件整理用品"),
    ("订书机", MaterialCategory::Office, "台", "办公工具"),
    ("胶带", MaterialCategory::Office, "卷", "粘贴用品"),
];

/// Pre-populated, read-only reference data store.
#[derive(Debug, Clone, PartialEq)]
pub struct MockDataStore {
    suppliers: Vec<Supplier>,
    ports: Vec<Port>,
    warehouses: Vec<Warehouse>,
    materials: Vec<Material>,
    inventories: Vec<Inventory>,
    transactions: Vec<Transaction>,
}

impl MockDataStore {
    /// Generate a dataset from the given seed, timestamped relative to now.
    pub fn generate(seed: u64) -> Self {
        Self::generate_at(seed, Utc::now())
    }

    /// Generate a dataset from the given seed with a fixed time base.
    ///
    /// Two stores built with the same `(seed, now)` are identical.
    pub fn generate_at(seed: u64, now: DateTime<Utc>) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);

        let suppliers = gen_suppliers(&mut rng);
        let ports = gen_ports(&mut rng);
        let warehouses = gen_warehouses(&mut rng);
        let materials = gen_materials(&mut rng, &suppliers);
        let inventories = gen_inventories(&mut rng, now, &materials, &warehouses);
        let transactions = gen_transactions(&mut rng, now, &materials, &warehouses);

        tracing::debug!(
            suppliers = suppliers.len(),
            warehouses = warehouses.len(),
            materials = materials.len(),
            inventories = inventories.len(),
            transactions = transactions.len(),
            "generated mock reference dataset"
        );

        Self {
            suppliers,
            ports,
            warehouses,
            materials,
            inventories,
            transactions,
        }
    }

    pub fn suppliers(&self) -> &[Supplier] {
        &self.suppliers
    }

    pub fn ports(&self) -> &[Port] {
        &self.ports
    }

    pub fn warehouses(&self) -> &[Warehouse] {
        &self.warehouses
    }

    pub fn materials(&self) -> &[Material] {
        &self.materials
    }

    pub fn inventories(&self) -> &[Inventory] {
        &self.inventories
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    fn material_by_id(&self, id: &MaterialId) -> Option<&Material> {
        self.materials.iter().find(|m| &m.id == id)
    }

    fn warehouse_by_id(&self, id: &WarehouseId) -> Option<&Warehouse> {
        self.warehouses.iter().find(|w| &w.id == id)
    }
}

impl ReferenceStore for MockDataStore {
    fn inventory_by_warehouse(&self, name_substring: &str) -> Vec<InventoryRow> {
        let Some(warehouse) = self
            .warehouses
            .iter()
            .find(|w| w.name.contains(name_substring))
        else {
            return Vec::new();
        };

        self.inventories
            .iter()
            .filter(|inv| inv.warehouse_id == warehouse.id)
            .filter_map(|inv| {
                // Rows whose material cannot be resolved are skipped.
                let material = self.material_by_id(&inv.material_id)?;
                Some(InventoryRow {
                    material_name: material.name.clone(),
                    category: material.category,
                    quantity: inv.quantity,
                    available_quantity: inv.available_quantity,
                    unit: material.unit.clone(),
                    location: inv.location_detail.clone(),
                    status: inv.status,
                })
            })
            .collect()
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
            .map(|m| {
                let total_quantity = self
                    .inventories
                    .iter()
                    .filter(|inv| inv.material_id == m.id)
                    .map(|inv| inv.quantity)
                    .sum();
                MaterialMatch {
                    id: m.id.clone(),
                    name: m.name.clone(),
                    category: m.category,
                    description: m.description.clone(),
                    unit: m.unit.clone(),
                    total_quantity,
                }
            })
            .collect()
    }

    fn inventory_summary(&self) -> InventorySummary {
        InventorySummary {
            total_items: self.inventories.len(),
            total_quantity: self.inventories.iter().map(|inv| inv.quantity).sum(),
            low_stock_items: self
                .inventories
                .iter()
                .filter(|inv| inv.is_low_stock(LOW_STOCK_THRESHOLD))
                .count(),
            warehouses_count: self.warehouses.len(),
            materials_count: self.materials.len(),
        }
    }

    fn recent_transactions(&self, limit: usize) -> Vec<TransactionRow> {
        let mut sorted: Vec<&Transaction> = self.transactions.iter().collect();
        sorted.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));

        sorted
            .into_iter()
            .take(limit)
            .map(|txn| TransactionRow {
                transaction_id: txn.id.clone(),
                kind: txn.kind,
                material_name: self
                    .material_by_id(&txn.material_id)
                    .map(|m| m.name.clone())
                    .unwrap_or_else(|| UNKNOWN_MATERIAL.to_string()),
                warehouse_name: self
                    .warehouse_by_id(&txn.warehouse_id)
                    .map(|w| w.name.clone())
                    .unwrap_or_else(|| UNKNOWN_WAREHOUSE.to_string()),
                quantity: txn.quantity,
                operator: txn.operator.clone(),
                timestamp: txn.timestamp,
            })
            .collect()
    }
}

fn gen_suppliers(rng: &mut StdRng) -> Vec<Supplier> {
    SUPPLIER_NAMES
        .iter()
        .enumerate()
        .map(|(i, name)| Supplier {
            id: SupplierId::new(format!("SUP{:03}", i + 1)),
            name: (*name).to_string(),
            contact_person: format!("联系人{}", i + 1),
            phone: format!("138{}", rng.gen_range(10_000_000..100_000_000u64)),
            email: format!("contact{}@company.com", i + 1),
            address: format!("工业园区{}号", rng.gen_range(1..=100)),
            rating: (rng.gen_range(3.5..=5.0f64) * 10.0).round() / 10.0,
            status: "active".to_string(),
        })
        .collect()
}

fn gen_ports(rng: &mut StdRng) -> Vec<Port> {
    PORT_NAMES
        .iter()
        .enumerate()
        .map(|(i, name)| Port {
            id: PortId::new(format!("PORT{:03}", i + 1)),
            name: (*name).to_string(),
            location: format!("港区{}区", (b'A' + i as u8) as char),
            capacity: rng.gen_range(5_000..=20_000),
            current_load: rng.gen_range(1_000..=15_000),
            status: "operational".to_string(),
            manager: format!("管理员{}", i + 1),
        })
        .collect()
}

fn gen_warehouses(rng: &mut StdRng) -> Vec<Warehouse> {
    WAREHOUSE_NAMES
        .iter()
        .enumerate()
        .map(|(i, name)| Warehouse {
            id: WarehouseId::new(format!("WH{:03}", i + 1)),
            name: (*name).to_string(),
            location: format!("仓储区{}区{}号", (b'A' + (i % 5) as u8) as char, i / 5 + 1),
            capacity: rng.gen_range(1_000..=5_000),
            current_usage: rng.gen_range(200..=3_000),
            manager: format!("仓管员{}", i + 1),
            description: format!("{name}，主要存储相关物资"),
        })
        .collect()
}

fn gen_materials(rng: &mut StdRng, suppliers: &[Supplier]) -> Vec<Material> {
    MATERIAL_CATALOG
        .iter()
        .enumerate()
        .map(|(i, (name, category, unit, description))| Material {
            id: MaterialId::new(format!("MAT{:03}", i + 1)),
            name: (*name).to_string(),
            category: *category,
            description: (*description).to_string(),
            unit: (*unit).to_string(),
            specifications: json!({
                "brand": format!("品牌{}", rng.gen_range(1..=5)),
                "model": format!("型号{}", rng.gen_range(100..=999)),
                "weight": format!("{}kg", rng.gen_range(1..=100)),
            }),
            supplier_id: suppliers.choose(rng).map(|s| s.id.clone()),
        })
        .collect()
}

fn gen_inventories(
    rng: &mut StdRng,
    now: DateTime<Utc>,
    materials: &[Material],
    warehouses: &[Warehouse],
) -> Vec<Inventory> {
    let mut inventories = Vec::new();

    for material in materials {
        // Each material is stocked in 1-3 warehouses.
        let count = rng.gen_range(1..=3.min(warehouses.len()));
        let selected: Vec<&Warehouse> = warehouses.choose_multiple(rng, count).collect();

        for warehouse in selected {
            let quantity = rng.gen_range(10..=500);
            let reserved = rng.gen_range(0..=quantity / 4);
            let status = *MaterialStatus::all().choose(rng).unwrap_or(&MaterialStatus::Available);

            inventories.push(Inventory {
                id: InventoryId::new(format!("INV{:04}", inventories.len() + 1)),
                material_id: material.id.clone(),
                warehouse_id: warehouse.id.clone(),
                quantity,
                reserved_quantity: reserved,
                available_quantity: quantity - reserved,
                status,
                location_detail: format!(
                    "{}-{}{:02}",
                    warehouse.name,
                    (b'A' + rng.gen_range(0..5u8)) as char,
                    rng.gen_range(1..=20)
                ),
                last_updated: now - Duration::days(rng.gen_range(0..=30)),
            });
        }
    }

    inventories
}

fn gen_transactions(
    rng: &mut StdRng,
    now: DateTime<Utc>,
    materials: &[Material],
    warehouses: &[Warehouse],
) -> Vec<Transaction> {
    let mut transactions = Vec::with_capacity(200);

    for i in 0..200 {
        let kind = *TransactionType::all().choose(rng).unwrap_or(&TransactionType::Inbound);
        let material = materials.choose(rng);
        let warehouse = warehouses.choose(rng);
        let (Some(material), Some(warehouse)) = (material, warehouse) else {
            break;
        };

        transactions.push(Transaction {
            id: TransactionId::new(format!("TXN{:04}", i + 1)),
            kind,
            material_id: material.id.clone(),
            warehouse_id: warehouse.id.clone(),
            quantity: rng.gen_range(1..=50),
            operator: OPERATORS
                .choose(rng)
                .copied()
                .unwrap_or("张三")
                .to_string(),
            timestamp: now - Duration::days(rng.gen_range(0..=90)),
            reference_no: format!("REF{}", rng.gen_range(100_000..=999_999)),
            notes: format!("交易备注{}", rng.gen_range(1..=100)),
        });
    }

    transactions
}
