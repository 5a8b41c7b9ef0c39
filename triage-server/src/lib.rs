//! HTTP service that turns a natural-language symptom description into a
//! structured triage record.
//!
//! The interesting work happens in the `triage-extract` crate; this one is
//! wiring: prompt construction, the Gemini text-producer boundary, and an
//! actix-web surface with two routes (`POST /predict_ai`,
//! `GET /health/live`).

/// HTTP endpoints and error mapping.
pub mod api;
/// Application state and the triage pipeline.
pub mod app;
/// Server configuration.
pub mod config;
/// The text-producer boundary.
pub mod producer;
/// Prompt construction for the triage model call.
pub mod prompt;
