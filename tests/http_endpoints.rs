//! Integration tests for the idea-brief HTTP endpoints.
//!
//! The router is driven directly through tower's `oneshot`, with the
//! completion gateway replaced by a scripted stub, so these tests cover
//! everything from body extraction down to error mapping without any
//! network traffic.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use serde_json::{Value, json};
use tower::ServiceExt;

use idea_brief::clients::CompletionModel;
use idea_brief::config::Config;
use idea_brief::error::{IdeaBriefError, Result};
use idea_brief::http::{HttpState, router};

/// Gateway stub that plays back scripted replies in order.
struct ScriptedModel {
    replies: Mutex<Vec<Result<String>>>,
}

impl ScriptedModel {
    fn new(mut replies: Vec<Result<String>>) -> Self {
        replies.reverse();
        Self {
            replies: Mutex::new(replies),
        }
    }
}

#[async_trait]
impl CompletionModel for ScriptedModel {
    async fn complete(&self, _prompt: &str, _max_tokens: u32) -> Result<String> {
        self.replies
            .lock()
            .expect("replies lock")
            .pop()
            .expect("stub ran out of scripted replies")
    }
}

fn test_config() -> Config {
    Config {
        api_key: "test-key".into(),
        base_url: "http://localhost:0".into(),
        model: "gpt-4o".into(),
        http_bind: "127.0.0.1:0".parse().unwrap(),
        http_timeout_ms: 1_000,
        facts_max_tokens: 500,
        brief_max_tokens: 8_000,
    }
}

fn test_state(replies: Vec<Result<String>>) -> HttpState {
    HttpState {
        config: Arc::new(test_config()),
        gateway: Arc::new(ScriptedModel::new(replies)),
    }
}

fn post_json(uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("request builds")
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body reads");
    serde_json::from_slice(&bytes).expect("body is JSON")
}

fn analysis_body() -> Value {
    json!({
        "domain": "fitness",
        "problem": "people skip workouts",
        "website": "example.com",
        "mvp": "habit tracker app"
    })
}

fn facts_reply() -> String {
    json!({
        "industry": "fitness",
        "product": "habit tracker",
        "website": "example.com",
        "minimum_viable_product": "habit tracker app"
    })
    .to_string()
}

fn brief_reply() -> String {
    json!({
        "1-Pager": "FitNudge",
        "Problem Statement": "people skip workouts",
        "Target Audience": "casual gym-goers",
        "Why It Matters": "retention drives revenue",
        "Proposed Solution": "a habit tracker with streaks",
        "Success Criteria": ["weekly active users"],
        "Risks and Considerations": "motivation decay",
        "Next Steps": "ship a beta",
        "Additional Notes": "none"
    })
    .to_string()
}

#[tokio::test]
async fn health_route_responds() {
    let app = router(test_state(vec![]));
    let response = app
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .expect("request builds"),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn prompt_to_json_returns_the_four_facts() {
    let app = router(test_state(vec![Ok(facts_reply())]));
    let response = app
        .oneshot(post_json("/prompt_to_json", &analysis_body()))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["industry"], "fitness");
    assert_eq!(body["product"], "habit tracker");
    assert_eq!(body["website"], "example.com");
    assert_eq!(body["minimum_viable_product"], "habit tracker app");
    assert!(body.get("error").is_none());
}

#[tokio::test]
async fn prompt_to_json_recovers_from_undecodable_output() {
    let app = router(test_state(vec![Ok("Sure! Here is the analysis:".into())]));
    let response = app
        .oneshot(post_json("/prompt_to_json", &analysis_body()))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body, json!({"error": "Invalid JSON response from the API."}));
}

#[tokio::test]
async fn prompt_to_json_maps_gateway_failure_to_500() {
    let app = router(test_state(vec![Err(IdeaBriefError::Gateway {
        message: "connection refused".into(),
    })]));
    let response = app
        .oneshot(post_json("/prompt_to_json", &analysis_body()))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = body_json(response).await;
    let detail = body["detail"].as_str().expect("detail is a string");
    assert!(detail.contains("connection refused"));
}

#[tokio::test]
async fn generate_product_brief_returns_sections() {
    let app = router(test_state(vec![Ok(brief_reply())]));
    let request_body = json!({"context": {"industry": "fitness"}});
    let response = app
        .oneshot(post_json("/generate_product_brief", &request_body))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["Problem Statement"], "people skip workouts");
    assert_eq!(body["Next Steps"], "ship a beta");
}

#[tokio::test]
async fn generate_product_brief_rejects_non_json_output() {
    let app = router(test_state(vec![Ok("1-Pager: FitNudge ...".into())]));
    let request_body = json!({"context": {"industry": "fitness"}});
    let response = app
        .oneshot(post_json("/generate_product_brief", &request_body))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = body_json(response).await;
    assert!(body["detail"].is_string());
}

#[tokio::test]
async fn complete_analysis_nests_both_results() {
    let app = router(test_state(vec![Ok(facts_reply()), Ok(brief_reply())]));
    let response = app
        .oneshot(post_json("/complete_analysis", &analysis_body()))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["analysis"]["industry"], "fitness");
    assert_eq!(body["product_brief"]["1-Pager"], "FitNudge");
}

#[tokio::test]
async fn complete_analysis_short_circuits_on_facts_failure() {
    // Only one scripted reply: the stub panics if the brief call runs.
    let app = router(test_state(vec![Ok("not json".into())]));
    let response = app
        .oneshot(post_json("/complete_analysis", &analysis_body()))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body, json!({"error": "Invalid JSON response from the API."}));
}

#[tokio::test]
async fn malformed_body_is_a_client_error() {
    let app = router(test_state(vec![]));
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/prompt_to_json")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from("{\"domain\": "))
                .expect("request builds"),
        )
        .await
        .unwrap();
    assert!(response.status().is_client_error());
}

#[tokio::test]
async fn missing_fields_are_a_client_error() {
    let app = router(test_state(vec![]));
    let response = app
        .oneshot(post_json("/prompt_to_json", &json!({"domain": "fitness"})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}
