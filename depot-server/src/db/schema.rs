//! Schema bootstrap
//!
//! Idempotent DDL so a fresh database can serve requests. There is no
//! versioning; changing a table means changing it by hand.

use sqlx::PgPool;

/// Create the `warehouses` and `products` tables if they are missing.
pub async fn ensure_schema(pool: &PgPool) -> Result<(), sqlx::Error> {
    tracing::info!("Ensuring database schema...");

    // `adress` is the historical column name; the API calls it `address`
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS warehouses (
            id BIGINT GENERATED BY DEFAULT AS IDENTITY PRIMARY KEY,
            name TEXT NOT NULL,
            adress TEXT NOT NULL,
            telephone TEXT NOT NULL,
            capacity INTEGER NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    // No foreign key on id_warehouse and no unique index on code_value
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS products (
            id BIGINT GENERATED BY DEFAULT AS IDENTITY PRIMARY KEY,
            name TEXT NOT NULL,
            quantity INTEGER NOT NULL,
            code_value TEXT NOT NULL,
            is_published BOOLEAN NOT NULL,
            expiration DATE NOT NULL,
            price DOUBLE PRECISION NOT NULL,
            id_warehouse BIGINT
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query("CREATE INDEX IF NOT EXISTS products_id_warehouse_idx ON products (id_warehouse)")
        .execute(pool)
        .await?;

    tracing::info!("Database schema ready");
    Ok(())
}
