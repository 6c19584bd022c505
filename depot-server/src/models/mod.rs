//! Domain models - products, warehouses and the derived stock report

pub mod product;
pub mod validation;
pub mod warehouse;

pub use product::{Product, ProductAttributes};
pub use validation::{parse_id, ValidationError};
pub use warehouse::{Warehouse, WarehouseAttributes, WarehouseProductsCount};
