//! Strongly-typed identifiers used across the domain.
//!
//! The reference dataset uses short human-readable codes (`MAT001`, `WH003`,
//! `TXN0042`, ...), so identifiers are string newtypes rather than UUIDs.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

macro_rules! impl_string_id {
    ($t:ident, $name:literal) => {
        #[doc = concat!("Identifier of a ", $name, " record.")]
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $t(String);

        impl $t {
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl core::fmt::Display for $t {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                core::fmt::Display::fmt(&self.0, f)
            }
        }

        impl From<String> for $t {
            fn from(value: String) -> Self {
                Self(value)
            }
        }

        impl From<$t> for String {
            fn from(value: $t) -> Self {
                value.0
            }
        }

        impl FromStr for $t {
            type Err = DomainError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                if s.trim().is_empty() {
                    return Err(DomainError::invalid_id(concat!($name, " id cannot be empty")));
                }
                Ok(Self(s.to_string()))
            }
        }
    };
}

impl_string_id!(MaterialId, "material");
impl_string_id!(WarehouseId, "warehouse");
impl_string_id!(PortId, "port");
impl_string_id!(SupplierId, "supplier");
impl_string_id!(InventoryId, "inventory");
impl_string_id!(TransactionId, "transaction");
