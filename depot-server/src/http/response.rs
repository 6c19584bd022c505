//! Success envelope shared by the resource endpoints

use axum::Json;
use serde::Serialize;

/// `{"message": "success", "data": ...}` wrapper for successful responses
#[derive(Debug, Serialize)]
pub struct Envelope<T> {
    pub message: &'static str,
    pub data: T,
}

impl<T: Serialize> Envelope<T> {
    pub fn success(data: T) -> Json<Self> {
        Json(Self {
            message: "success",
            data,
        })
    }
}
