//! Warehouse repository
//!
//! Reads and inserts against `warehouses`, plus the product count report
//! (LEFT JOIN so empty warehouses still show up with a zero count).

use async_trait::async_trait;
use sqlx::PgPool;

use crate::db::DbError;
use crate::models::{Warehouse, WarehouseAttributes, WarehouseProductsCount};

const RESOURCE: &str = "warehouse";

/// Data access for warehouses
#[async_trait]
pub trait WarehouseRepository: Send + Sync {
    /// Fetch one warehouse. `NotFound` when the id does not exist.
    async fn find_by_id(&self, id: i64) -> Result<Warehouse, DbError>;

    /// Insert a warehouse, returning it with its assigned id.
    async fn save(&self, attributes: WarehouseAttributes) -> Result<Warehouse, DbError>;

    /// All warehouses ordered by id. Empty when the table is empty.
    async fn get_all(&self) -> Result<Vec<Warehouse>, DbError>;

    /// Product counts per warehouse.
    ///
    /// `id == 0` reports every warehouse; any other id restricts the report
    /// to that warehouse, yielding an empty list when it does not exist.
    async fn report_products(&self, id: i64) -> Result<Vec<WarehouseProductsCount>, DbError>;
}

/// PostgreSQL-backed warehouse repository
#[derive(Clone)]
pub struct PgWarehouseRepo {
    pool: PgPool,
}

impl PgWarehouseRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl WarehouseRepository for PgWarehouseRepo {
    async fn find_by_id(&self, id: i64) -> Result<Warehouse, DbError> {
        sqlx::query_as::<_, Warehouse>(
            "SELECT id, name, adress, telephone, capacity FROM warehouses WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(DbError::NotFound {
            resource: RESOURCE,
            id,
        })
    }

    async fn save(&self, attributes: WarehouseAttributes) -> Result<Warehouse, DbError> {
        let warehouse = sqlx::query_as::<_, Warehouse>(
            r#"
            INSERT INTO warehouses (name, adress, telephone, capacity)
            VALUES ($1, $2, $3, $4)
            RETURNING id, name, adress, telephone, capacity
            "#,
        )
        .bind(&attributes.name)
        .bind(&attributes.address)
        .bind(&attributes.telephone)
        .bind(attributes.capacity)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| DbError::from_write(e, RESOURCE))?;

        tracing::debug!(id = warehouse.id, "warehouse saved");
        Ok(warehouse)
    }

    async fn get_all(&self) -> Result<Vec<Warehouse>, DbError> {
        let warehouses = sqlx::query_as::<_, Warehouse>(
            "SELECT id, name, adress, telephone, capacity FROM warehouses ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(warehouses)
    }

    async fn report_products(&self, id: i64) -> Result<Vec<WarehouseProductsCount>, DbError> {
        let query = if id == 0 {
            sqlx::query_as::<_, WarehouseProductsCount>(
                r#"
                SELECT w.name, COUNT(p.id) AS count
                FROM warehouses w
                LEFT JOIN products p ON p.id_warehouse = w.id
                GROUP BY w.id, w.name
                ORDER BY w.id
                "#,
            )
        } else {
            sqlx::query_as::<_, WarehouseProductsCount>(
                r#"
                SELECT w.name, COUNT(p.id) AS count
                FROM warehouses w
                LEFT JOIN products p ON p.id_warehouse = w.id
                WHERE w.id = $1
                GROUP BY w.id, w.name
                "#,
            )
            .bind(id)
        };

        Ok(query.fetch_all(&self.pool).await?)
    }
}
