//! Warehouse endpoints

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use serde::Deserialize;

use crate::http::error::ApiError;
use crate::http::extractors::{JsonBody, ReportFilter, ValidId};
use crate::http::response::Envelope;
use crate::http::server::AppState;
use crate::models::{Warehouse, WarehouseAttributes, WarehouseProductsCount};

/// Warehouse fields as sent by clients. Any `id` in the body is ignored.
#[derive(Debug, Deserialize)]
pub struct WarehouseRequest {
    pub name: String,
    pub address: String,
    pub telephone: String,
    pub capacity: i32,
}

impl From<WarehouseRequest> for WarehouseAttributes {
    fn from(req: WarehouseRequest) -> Self {
        Self {
            name: req.name,
            address: req.address,
            telephone: req.telephone,
            capacity: req.capacity,
        }
    }
}

/// GET /warehouses - list all warehouses
async fn list_warehouses(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Warehouse>>, ApiError> {
    Ok(Json(state.warehouses.get_all().await?))
}

/// GET /warehouses/{id} - get a single warehouse
async fn get_warehouse(
    State(state): State<Arc<AppState>>,
    ValidId(id): ValidId,
) -> Result<Json<Envelope<Warehouse>>, ApiError> {
    let warehouse = state.warehouses.find_by_id(id).await?;
    Ok(Envelope::success(warehouse))
}

/// POST /warehouses - create a new warehouse
async fn create_warehouse(
    State(state): State<Arc<AppState>>,
    JsonBody(req): JsonBody<WarehouseRequest>,
) -> Result<(StatusCode, Json<Envelope<Warehouse>>), ApiError> {
    let warehouse = state.warehouses.save(req.into()).await?;
    tracing::info!(id = warehouse.id, "warehouse created");

    Ok((StatusCode::CREATED, Envelope::success(warehouse)))
}

/// GET /warehouses/report?id= - product counts per warehouse
async fn report_products(
    State(state): State<Arc<AppState>>,
    ReportFilter(id): ReportFilter,
) -> Result<Json<Envelope<Vec<WarehouseProductsCount>>>, ApiError> {
    let report = state.warehouses.report_products(id).await?;
    Ok(Envelope::success(report))
}

/// Warehouse routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/warehouses", get(list_warehouses).post(create_warehouse))
        .route("/warehouses/report", get(report_products))
        .route("/warehouses/{id}", get(get_warehouse))
}
