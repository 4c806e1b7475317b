use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{header, Request, StatusCode},
    Router,
};
use quotient_api::{app, AppState};
use quotient_core::{PricingEngine, PricingRules};
use tower::ServiceExt;

fn test_app() -> Router {
    app(AppState {
        pricing: Arc::new(PricingEngine::new(PricingRules::default())),
    })
}

async fn body_string(body: Body) -> String {
    let bytes = to_bytes(body, usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

fn post_form(body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/")
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap()
}

const VALID_BODY: &str = "F_base=1000&N_emp=50&Rp1=25&Rp2=30&N_loc=5&R_loc=200\
                          &Aud_incl=3&N_aud=8&R_aud=150&m=0.20";

#[tokio::test]
async fn test_get_returns_empty_form() {
    let response = test_app()
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let html = body_string(response.into_body()).await;
    assert!(html.contains("<form method=\"post\""));
    assert!(html.contains("name=\"F_base\""));
    assert!(!html.contains("Quote breakdown"));
}

#[tokio::test]
async fn test_post_valid_form_renders_breakdown() {
    let response = test_app().oneshot(post_form(VALID_BODY)).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let html = body_string(response.into_body()).await;
    assert!(html.contains("Calculation completed successfully"));
    assert!(html.contains("$ 1250.00"));
    assert!(html.contains("$ 1000.00"));
    assert!(html.contains("$ 750.00"));
    assert!(html.contains("$ 4000.00"));
    assert!(html.contains("$ 4800.00"));
}

#[tokio::test]
async fn test_post_negative_value_renders_rule_message() {
    let body = VALID_BODY.replace("F_base=1000", "F_base=-1");
    let response = test_app().oneshot(post_form(&body)).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let html = body_string(response.into_body()).await;
    assert!(html.contains("base fee must be non-negative"));
    assert!(!html.contains("Quote breakdown"));
}

#[tokio::test]
async fn test_post_hearing_count_inversion_is_rejected() {
    let body = VALID_BODY.replace("N_aud=8", "N_aud=2");
    let response = test_app().oneshot(post_form(&body)).await.unwrap();

    let html = body_string(response.into_body()).await;
    assert!(html.contains("total hearing count"));
    assert!(!html.contains("Quote breakdown"));
}

#[tokio::test]
async fn test_post_unparseable_field_renders_malformed_message() {
    let body = VALID_BODY.replace("N_emp=50", "N_emp=abc");
    let response = test_app().oneshot(post_form(&body)).await.unwrap();

    let html = body_string(response.into_body()).await;
    assert!(html.contains("N_emp"));
    assert!(html.contains("not a valid number"));
    assert!(!html.contains("Quote breakdown"));
}

#[tokio::test]
async fn test_post_missing_field_renders_malformed_message() {
    let body = VALID_BODY.replace("&m=0.20", "");
    let response = test_app().oneshot(post_form(&body)).await.unwrap();

    let html = body_string(response.into_body()).await;
    assert!(html.contains("not a valid number"));
    assert!(!html.contains("Quote breakdown"));
}

#[tokio::test]
async fn test_post_margin_above_cap_is_rejected() {
    let body = VALID_BODY.replace("m=0.20", "m=11");
    let response = test_app().oneshot(post_form(&body)).await.unwrap();

    let html = body_string(response.into_body()).await;
    assert!(html.contains("margin looks too high"));
    assert!(!html.contains("Quote breakdown"));
}
