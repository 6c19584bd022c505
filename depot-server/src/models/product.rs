//! Product model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Mutable fields of a product
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct ProductAttributes {
    pub name: String,
    pub quantity: i32,
    /// Intended to be unique, but nothing in the schema enforces it
    pub code_value: String,
    pub is_published: bool,
    pub expiration: NaiveDate,
    pub price: f64,
    /// Owning warehouse, `None` when unassigned. Not a foreign key.
    #[sqlx(rename = "id_warehouse")]
    pub warehouse_id: Option<i64>,
}

/// Stored product
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Product {
    /// Assigned by the database on insert
    pub id: i64,
    #[serde(flatten)]
    #[sqlx(flatten)]
    pub attributes: ProductAttributes,
}

impl Product {
    pub fn new(id: i64, attributes: ProductAttributes) -> Self {
        Self { id, attributes }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> Product {
        Product::new(
            7,
            ProductAttributes {
                name: "P1".into(),
                quantity: 3,
                code_value: "C1".into(),
                is_published: true,
                expiration: NaiveDate::from_ymd_opt(2021, 1, 1).unwrap(),
                price: 1.5,
                warehouse_id: Some(2),
            },
        )
    }

    #[test]
    fn serializes_flat_field_names() {
        let value = serde_json::to_value(sample()).unwrap();
        assert_eq!(
            value,
            json!({
                "id": 7,
                "name": "P1",
                "quantity": 3,
                "code_value": "C1",
                "is_published": true,
                "expiration": "2021-01-01",
                "price": 1.5,
                "warehouse_id": 2
            })
        );
    }

    #[test]
    fn unassigned_warehouse_serializes_as_null() {
        let mut product = sample();
        product.attributes.warehouse_id = None;
        let value = serde_json::to_value(product).unwrap();
        assert!(value["warehouse_id"].is_null());
    }
}
