//! HTTP endpoints and error mapping.

/// Unified API error handling.
pub mod error;
/// Health probe endpoint.
pub mod health;
/// Symptom triage endpoint.
pub mod predict;

pub use error::ApiError;

/// Registers all routes on the actix-web service config.
pub fn configure(cfg: &mut actix_web::web::ServiceConfig) {
    cfg.service(predict::predict_ai).service(health::liveness);
}
