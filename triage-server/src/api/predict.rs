//! Symptom triage endpoint.

use actix_web::{post, web, HttpResponse};
use serde::Deserialize;

use crate::api::error::ApiError;
use crate::app::AppState;

/// Request body for [`predict_ai`].
#[derive(Debug, Deserialize)]
pub struct PredictRequest {
    /// Natural-language symptom description.
    pub symptoms: String,
}

/// Runs the triage pipeline for a symptom description.
///
/// Answers 200 with the triage record (the safe-default record when the
/// server runs with the defaulting fallback policy), 400 for a blank
/// description, and 502 when extraction fails under the surfacing policy.
#[post("/predict_ai")]
pub async fn predict_ai(
    state: web::Data<AppState>,
    body: web::Json<PredictRequest>,
) -> Result<HttpResponse, ApiError> {
    let symptoms = body.symptoms.trim();
    if symptoms.is_empty() {
        return Err(ApiError::BadRequest("symptoms must not be empty".to_owned()));
    }

    tracing::info!(symptoms_len = symptoms.len(), "triage request received");

    let record = state.triage(symptoms).await?;
    Ok(HttpResponse::Ok().json(record))
}
