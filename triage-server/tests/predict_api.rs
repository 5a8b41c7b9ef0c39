//! Endpoint tests with a canned text producer.
//!
//! No network and no credentials: the producer is swapped for a stub, so
//! these tests exercise routing, the pipeline, and error mapping only.

use std::sync::Arc;

use actix_web::{test, web, App};
use async_trait::async_trait;
use serde_json::{json, Value};
use triage_extract::{FallbackPolicy, TriageRecord};
use triage_server::api;
use triage_server::app::AppState;
use triage_server::config::ServerConfig;
use triage_server::producer::TextProducer;

/// Producer that always answers with the same canned result.
struct CannedProducer {
    reply: Result<String, String>,
}

impl CannedProducer {
    fn ok(reply: &str) -> Self {
        Self {
            reply: Ok(reply.to_owned()),
        }
    }

    fn err(message: &str) -> Self {
        Self {
            reply: Err(message.to_owned()),
        }
    }
}

#[async_trait]
impl TextProducer for CannedProducer {
    async fn produce(&self, _prompt: &str, _model: &str) -> Result<String, String> {
        self.reply.clone()
    }
}

fn state_with(producer: CannedProducer, fallback: FallbackPolicy) -> web::Data<AppState> {
    let config = ServerConfig {
        fallback,
        ..ServerConfig::default()
    };
    web::Data::new(AppState::with_producer(Arc::new(producer), &config))
}

macro_rules! init_app {
    ($state:expr) => {
        test::init_service(App::new().app_data($state).configure(api::configure)).await
    };
}

#[actix_web::test]
async fn predict_returns_normalized_record() {
    let producer = CannedProducer::ok(concat!(
        "Here is my assessment:\n",
        r#"{"disease": "Influenza", "criticality": "low", "remedy": "1. Rest\n2. Fluids", "rest": "3 days"}"#,
    ));
    let app = init_app!(state_with(producer, FallbackPolicy::Surface));

    let req = test::TestRequest::post()
        .uri("/predict_ai")
        .set_json(json!({"symptoms": "fever, aches, fatigue"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let record: TriageRecord = test::read_body_json(resp).await;
    assert_eq!(record.disease, "Influenza");
    assert_eq!(
        serde_json::to_value(&record.criticality).unwrap(),
        json!("Low")
    );
    assert_eq!(
        serde_json::to_value(&record.remedy).unwrap(),
        json!(["Rest", "Fluids"])
    );
}

#[actix_web::test]
async fn unusable_reply_is_a_gateway_error_under_surface_policy() {
    let producer = CannedProducer::ok("I am sorry, I cannot help with that.");
    let app = init_app!(state_with(producer, FallbackPolicy::Surface));

    let req = test::TestRequest::post()
        .uri("/predict_ai")
        .set_json(json!({"symptoms": "fever"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 502);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "extraction_failed");
    assert_eq!(body["reason"], "no_json_found");
    assert!(body["request_id"].as_str().is_some());
}

#[actix_web::test]
async fn unusable_reply_becomes_safe_default_under_defaulting_policy() {
    let producer = CannedProducer::ok("I am sorry, I cannot help with that.");
    let app = init_app!(state_with(producer, FallbackPolicy::SafeDefault));

    let req = test::TestRequest::post()
        .uri("/predict_ai")
        .set_json(json!({"symptoms": "fever"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let record: TriageRecord = test::read_body_json(resp).await;
    assert_eq!(record, TriageRecord::safe_default());
}

#[actix_web::test]
async fn producer_failure_is_an_upstream_error() {
    let producer = CannedProducer::err("Gemini API returned 429: quota exceeded");
    let app = init_app!(state_with(producer, FallbackPolicy::Surface));

    let req = test::TestRequest::post()
        .uri("/predict_ai")
        .set_json(json!({"symptoms": "fever"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 502);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["reason"], "upstream_error");
    assert!(body["message"]
        .as_str()
        .unwrap()
        .contains("quota exceeded"));
}

#[actix_web::test]
async fn producer_failure_also_honors_the_defaulting_policy() {
    let producer = CannedProducer::err("connection refused");
    let app = init_app!(state_with(producer, FallbackPolicy::SafeDefault));

    let req = test::TestRequest::post()
        .uri("/predict_ai")
        .set_json(json!({"symptoms": "fever"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let record: TriageRecord = test::read_body_json(resp).await;
    assert_eq!(record, TriageRecord::safe_default());
}

#[actix_web::test]
async fn blank_symptoms_are_rejected() {
    let producer = CannedProducer::ok(r#"{"disease": "Flu"}"#);
    let app = init_app!(state_with(producer, FallbackPolicy::Surface));

    let req = test::TestRequest::post()
        .uri("/predict_ai")
        .set_json(json!({"symptoms": "   "}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 400);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "bad_request");
}

#[actix_web::test]
async fn liveness_probe_answers() {
    let producer = CannedProducer::ok("unused");
    let app = init_app!(state_with(producer, FallbackPolicy::Surface));

    let req = test::TestRequest::get().uri("/health/live").to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "ok");
}
