//! Product repository
//!
//! Full-row reads and writes against the `products` table:
//! - save: INSERT ... RETURNING (id from the identity column)
//! - update: no existence check, reports rows affected
//! - update_or_save: update, falling back to save when nothing matched

use async_trait::async_trait;
use sqlx::PgPool;

use crate::db::DbError;
use crate::models::{Product, ProductAttributes};

const RESOURCE: &str = "product";

/// Data access for products
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Fetch one product. `NotFound` when the id does not exist.
    async fn find_by_id(&self, id: i64) -> Result<Product, DbError>;

    /// Insert a product, returning it with its assigned id.
    async fn save(&self, attributes: ProductAttributes) -> Result<Product, DbError>;

    /// Overwrite every mutable field of `product.id`.
    ///
    /// Returns the number of rows affected. An absent id is not an error:
    /// nothing is written and `0` comes back.
    async fn update(&self, product: &Product) -> Result<u64, DbError>;

    /// Delete one product. `NotFound` when nothing was deleted.
    async fn delete(&self, id: i64) -> Result<(), DbError>;

    /// All products ordered by id. Empty when the table is empty.
    async fn get_all(&self) -> Result<Vec<Product>, DbError>;

    /// Replace `product.id` if it exists, otherwise create a new product.
    ///
    /// A created product gets a fresh id from the database; the requested
    /// id is not reused.
    async fn update_or_save(&self, product: Product) -> Result<Product, DbError> {
        if self.update(&product).await? > 0 {
            return Ok(product);
        }

        tracing::debug!(id = product.id, "product missing on update, saving instead");
        self.save(product.attributes).await
    }
}

/// PostgreSQL-backed product repository
#[derive(Clone)]
pub struct PgProductRepo {
    pool: PgPool,
}

impl PgProductRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProductRepository for PgProductRepo {
    async fn find_by_id(&self, id: i64) -> Result<Product, DbError> {
        sqlx::query_as::<_, Product>(
            r#"
            SELECT id, name, quantity, code_value, is_published, expiration, price, id_warehouse
            FROM products
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(DbError::NotFound {
            resource: RESOURCE,
            id,
        })
    }

    async fn save(&self, attributes: ProductAttributes) -> Result<Product, DbError> {
        let product = sqlx::query_as::<_, Product>(
            r#"
            INSERT INTO products
                (name, quantity, code_value, is_published, expiration, price, id_warehouse)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id, name, quantity, code_value, is_published, expiration, price, id_warehouse
            "#,
        )
        .bind(&attributes.name)
        .bind(attributes.quantity)
        .bind(&attributes.code_value)
        .bind(attributes.is_published)
        .bind(attributes.expiration)
        .bind(attributes.price)
        .bind(attributes.warehouse_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| DbError::from_write(e, RESOURCE))?;

        tracing::debug!(id = product.id, "product saved");
        Ok(product)
    }

    async fn update(&self, product: &Product) -> Result<u64, DbError> {
        let attributes = &product.attributes;
        let result = sqlx::query(
            r#"
            UPDATE products
            SET name = $1, quantity = $2, code_value = $3, is_published = $4,
                expiration = $5, price = $6, id_warehouse = $7
            WHERE id = $8
            "#,
        )
        .bind(&attributes.name)
        .bind(attributes.quantity)
        .bind(&attributes.code_value)
        .bind(attributes.is_published)
        .bind(attributes.expiration)
        .bind(attributes.price)
        .bind(attributes.warehouse_id)
        .bind(product.id)
        .execute(&self.pool)
        .await
        .map_err(|e| DbError::from_write(e, RESOURCE))?;

        Ok(result.rows_affected())
    }

    async fn delete(&self, id: i64) -> Result<(), DbError> {
        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::NotFound {
                resource: RESOURCE,
                id,
            });
        }

        Ok(())
    }

    async fn get_all(&self) -> Result<Vec<Product>, DbError> {
        let products = sqlx::query_as::<_, Product>(
            r#"
            SELECT id, name, quantity, code_value, is_published, expiration, price, id_warehouse
            FROM products
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(products)
    }
}
