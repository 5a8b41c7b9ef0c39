//! Health probe endpoint.

use actix_web::{get, HttpResponse, Responder};
use serde::Serialize;

/// Liveness payload.
#[derive(Serialize)]
pub struct HealthStatus {
    /// Always `"ok"` when the process answers.
    pub status: String,
    /// Crate version of the running binary.
    pub version: String,
}

/// Liveness probe: returns 200 whenever the service is running.
#[get("/health/live")]
pub async fn liveness() -> impl Responder {
    HttpResponse::Ok().json(HealthStatus {
        status: "ok".to_owned(),
        version: env!("CARGO_PKG_VERSION").to_owned(),
    })
}
