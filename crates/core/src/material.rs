use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use crate::id::{MaterialId, SupplierId};

/// Material category taxonomy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MaterialCategory {
    Machinery,
    Electronics,
    Consumables,
    Tools,
    Safety,
    Office,
    Maintenance,
}

impl MaterialCategory {
    /// Wire/label form of the category (matches the serialized value).
    pub fn as_str(&self) -> &'static str {
        match self {
            MaterialCategory::Machinery => "machinery",
            MaterialCategory::Electronics => "electronics",
            MaterialCategory::Consumables => "consumables",
            MaterialCategory::Tools => "tools",
            MaterialCategory::Safety => "safety",
            MaterialCategory::Office => "office",
            MaterialCategory::Maintenance => "maintenance",
        }
    }

    pub fn all() -> [MaterialCategory; 7] {
        [
            MaterialCategory::Machinery,
            MaterialCategory::Electronics,
            MaterialCategory::Consumables,
            MaterialCategory::Tools,
            MaterialCategory::Safety,
            MaterialCategory::Office,
            MaterialCategory::Maintenance,
        ]
    }
}

impl core::fmt::Display for MaterialCategory {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A material (物资) in the port reference catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Material {
    pub id: MaterialId,
    pub name: String,
    pub category: MaterialCategory,
    pub description: String,
    /// Counting unit, e.g. 台 / 把 / 桶.
    pub unit: String,
    /// Free-form specification metadata (brand, model, weight...).
    pub specifications: JsonValue,
    pub supplier_id: Option<SupplierId>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_label_matches_serde_form() {
        for category in MaterialCategory::all() {
            let serialized = serde_json::to_value(category).unwrap();
            assert_eq!(serialized, serde_json::json!(category.as_str()));
        }
    }
}
