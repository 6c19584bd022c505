//! Shared fixtures for the HTTP tests: an in-memory store implementing both
//! repository traits, and a request helper driving the router directly.

#![allow(dead_code)]

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::{to_bytes, Body};
use axum::http::{Method, Request, StatusCode};
use axum::Router;
use serde_json::Value;
use tower::ServiceExt;

use depot_server::db::{ProductRepository, WarehouseRepository};
use depot_server::models::{
    Product, ProductAttributes, Warehouse, WarehouseAttributes, WarehouseProductsCount,
};
use depot_server::{build_router, AppState, DbError, ServerConfig};

#[derive(Default)]
struct Tables {
    products: BTreeMap<i64, Product>,
    warehouses: BTreeMap<i64, Warehouse>,
    last_product_id: i64,
    last_warehouse_id: i64,
}

/// Both tables behind one lock so the report can join them
#[derive(Default)]
pub struct MemoryStore {
    tables: Mutex<Tables>,
}

impl MemoryStore {
    pub fn products(&self) -> Vec<Product> {
        self.tables.lock().unwrap().products.values().cloned().collect()
    }
}

#[async_trait]
impl ProductRepository for MemoryStore {
    async fn find_by_id(&self, id: i64) -> Result<Product, DbError> {
        self.tables
            .lock()
            .unwrap()
            .products
            .get(&id)
            .cloned()
            .ok_or(DbError::NotFound {
                resource: "product",
                id,
            })
    }

    async fn save(&self, attributes: ProductAttributes) -> Result<Product, DbError> {
        let mut tables = self.tables.lock().unwrap();
        tables.last_product_id += 1;
        let product = Product::new(tables.last_product_id, attributes);
        tables.products.insert(product.id, product.clone());
        Ok(product)
    }

    async fn update(&self, product: &Product) -> Result<u64, DbError> {
        let mut tables = self.tables.lock().unwrap();
        match tables.products.get_mut(&product.id) {
            Some(stored) => {
                *stored = product.clone();
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn delete(&self, id: i64) -> Result<(), DbError> {
        self.tables
            .lock()
            .unwrap()
            .products
            .remove(&id)
            .map(|_| ())
            .ok_or(DbError::NotFound {
                resource: "product",
                id,
            })
    }

    async fn get_all(&self) -> Result<Vec<Product>, DbError> {
        Ok(self.products())
    }
}

#[async_trait]
impl WarehouseRepository for MemoryStore {
    async fn find_by_id(&self, id: i64) -> Result<Warehouse, DbError> {
        self.tables
            .lock()
            .unwrap()
            .warehouses
            .get(&id)
            .cloned()
            .ok_or(DbError::NotFound {
                resource: "warehouse",
                id,
            })
    }

    async fn save(&self, attributes: WarehouseAttributes) -> Result<Warehouse, DbError> {
        let mut tables = self.tables.lock().unwrap();
        tables.last_warehouse_id += 1;
        let warehouse = Warehouse::new(tables.last_warehouse_id, attributes);
        tables.warehouses.insert(warehouse.id, warehouse.clone());
        Ok(warehouse)
    }

    async fn get_all(&self) -> Result<Vec<Warehouse>, DbError> {
        Ok(self.tables.lock().unwrap().warehouses.values().cloned().collect())
    }

    async fn report_products(&self, id: i64) -> Result<Vec<WarehouseProductsCount>, DbError> {
        let tables = self.tables.lock().unwrap();
        Ok(tables
            .warehouses
            .values()
            .filter(|w| id == 0 || w.id == id)
            .map(|w| WarehouseProductsCount {
                name: w.attributes.name.clone(),
                count: tables
                    .products
                    .values()
                    .filter(|p| p.attributes.warehouse_id == Some(w.id))
                    .count() as i64,
            })
            .collect())
    }
}

/// Every call fails the way a dropped database would
pub struct BrokenStore;

fn broken() -> DbError {
    DbError::Sqlx(sqlx::Error::PoolTimedOut)
}

#[async_trait]
impl ProductRepository for BrokenStore {
    async fn find_by_id(&self, _id: i64) -> Result<Product, DbError> {
        Err(broken())
    }

    async fn save(&self, _attributes: ProductAttributes) -> Result<Product, DbError> {
        Err(broken())
    }

    async fn update(&self, _product: &Product) -> Result<u64, DbError> {
        Err(broken())
    }

    async fn delete(&self, _id: i64) -> Result<(), DbError> {
        Err(broken())
    }

    async fn get_all(&self) -> Result<Vec<Product>, DbError> {
        Err(broken())
    }
}

#[async_trait]
impl WarehouseRepository for BrokenStore {
    async fn find_by_id(&self, _id: i64) -> Result<Warehouse, DbError> {
        Err(broken())
    }

    async fn save(&self, _attributes: WarehouseAttributes) -> Result<Warehouse, DbError> {
        Err(broken())
    }

    async fn get_all(&self) -> Result<Vec<Warehouse>, DbError> {
        Err(broken())
    }

    async fn report_products(&self, _id: i64) -> Result<Vec<WarehouseProductsCount>, DbError> {
        Err(broken())
    }
}

/// Router over a fresh in-memory store, plus the store for assertions
pub fn memory_app() -> (Router, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::default());
    let state = AppState::new(store.clone(), store.clone());
    (build_router(state, &ServerConfig::default()), store)
}

pub fn broken_app() -> Router {
    let store = Arc::new(BrokenStore);
    build_router(AppState::new(store.clone(), store), &ServerConfig::default())
}

/// Send one request and decode the JSON response (`Null` for an empty body)
pub async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };

    (status, json)
}

/// Send a raw, possibly malformed, JSON body
pub async fn send_raw(app: &Router, method: Method, uri: &str, raw: &str) -> StatusCode {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(raw.to_owned()))
        .unwrap();

    app.clone().oneshot(request).await.unwrap().status()
}
