//! Product endpoints

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use chrono::NaiveDate;
use serde::Deserialize;

use crate::http::error::ApiError;
use crate::http::extractors::{JsonBody, ValidId};
use crate::http::response::Envelope;
use crate::http::server::AppState;
use crate::models::{Product, ProductAttributes};

/// Product fields as sent by clients. Any `id` in the body is ignored.
#[derive(Debug, Deserialize)]
pub struct ProductRequest {
    pub name: String,
    pub quantity: i32,
    pub code_value: String,
    pub is_published: bool,
    pub expiration: NaiveDate,
    pub price: f64,
    #[serde(default)]
    pub warehouse_id: Option<i64>,
}

impl From<ProductRequest> for ProductAttributes {
    fn from(req: ProductRequest) -> Self {
        Self {
            name: req.name,
            quantity: req.quantity,
            code_value: req.code_value,
            is_published: req.is_published,
            expiration: req.expiration,
            price: req.price,
            // 0 is how clients say "no warehouse"
            warehouse_id: req.warehouse_id.filter(|id| *id != 0),
        }
    }
}

type Enveloped<T> = Json<Envelope<T>>;

/// GET /products - list all products
async fn list_products(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Product>>, ApiError> {
    Ok(Json(state.products.get_all().await?))
}

/// GET /products/{id} - get a single product
async fn get_product(
    State(state): State<Arc<AppState>>,
    ValidId(id): ValidId,
) -> Result<Enveloped<Product>, ApiError> {
    let product = state.products.find_by_id(id).await?;
    Ok(Envelope::success(product))
}

/// POST /products - create a new product
async fn create_product(
    State(state): State<Arc<AppState>>,
    JsonBody(req): JsonBody<ProductRequest>,
) -> Result<(StatusCode, Enveloped<Product>), ApiError> {
    let product = state.products.save(req.into()).await?;
    tracing::info!(id = product.id, "product created");

    Ok((StatusCode::CREATED, Envelope::success(product)))
}

/// PUT /products/{id} - replace the product, creating it when absent
async fn upsert_product(
    State(state): State<Arc<AppState>>,
    ValidId(id): ValidId,
    JsonBody(req): JsonBody<ProductRequest>,
) -> Result<Enveloped<Product>, ApiError> {
    let product = state
        .products
        .update_or_save(Product::new(id, req.into()))
        .await?;

    Ok(Envelope::success(product))
}

/// PATCH /products/{id} - overwrite the product's fields
///
/// An unknown id is accepted and nothing is written.
async fn update_product(
    State(state): State<Arc<AppState>>,
    ValidId(id): ValidId,
    JsonBody(req): JsonBody<ProductRequest>,
) -> Result<Enveloped<Product>, ApiError> {
    let product = Product::new(id, req.into());

    if state.products.update(&product).await? == 0 {
        tracing::debug!(id, "update matched no product");
    }

    Ok(Envelope::success(product))
}

/// DELETE /products/{id} - delete a product
async fn delete_product(
    State(state): State<Arc<AppState>>,
    ValidId(id): ValidId,
) -> Result<StatusCode, ApiError> {
    state.products.delete(id).await?;
    tracing::info!(id, "product deleted");

    Ok(StatusCode::NO_CONTENT)
}

/// Product routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/products", get(list_products).post(create_product))
        .route(
            "/products/{id}",
            get(get_product)
                .put(upsert_product)
                .patch(update_product)
                .delete(delete_product),
        )
}
