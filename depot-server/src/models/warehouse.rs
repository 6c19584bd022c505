//! Warehouse model and the per-warehouse product count report

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Mutable fields of a warehouse
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct WarehouseAttributes {
    pub name: String,
    /// Stored in the legacy `adress` column
    #[sqlx(rename = "adress")]
    pub address: String,
    pub telephone: String,
    pub capacity: i32,
}

/// Stored warehouse
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Warehouse {
    /// Assigned by the database on insert
    pub id: i64,
    #[serde(flatten)]
    #[sqlx(flatten)]
    pub attributes: WarehouseAttributes,
}

impl Warehouse {
    pub fn new(id: i64, attributes: WarehouseAttributes) -> Self {
        Self { id, attributes }
    }
}

/// Number of products assigned to a warehouse.
///
/// Derived on every report request, never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct WarehouseProductsCount {
    pub name: String,
    pub count: i64,
}
