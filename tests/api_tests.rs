/// End-to-end tests against the HTTP router
use ai_cost_advisor::{config::Config, handlers::AppState, profile::Profile, server::create_router};
use arc_swap::ArcSwap;
use axum::{
    body::{to_bytes, Body},
    http::{Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

fn test_config() -> Config {
    let mut config = Config::default();
    config.profiles.push(Profile {
        id: "user-1".to_string(),
        email: "ada@example.com".to_string(),
        full_name: Some("Ada Lovelace".to_string()),
    });
    config
}

fn app(config: Config) -> Router {
    let state = AppState::new(Arc::new(ArcSwap::from_pointee(config.clone())));
    create_router(&config, state, None)
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            builder = builder.header("content-type", "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };

    let response = app
        .clone()
        .oneshot(builder.body(body).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

#[tokio::test]
async fn test_health() {
    let app = app(test_config());
    let (status, body) = send(&app, Method::GET, "/health", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn test_estimate_endpoint() {
    let app = app(test_config());
    let (status, body) = send(
        &app,
        Method::POST,
        "/v1/estimate",
        Some(json!({
            "monthlySpend": "5000",
            "primaryService": "openai-gpt4",
            "callsPerMonth": "60000",
            "avgTokens": "800"
        })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["potentialSavings"], 2000.0);
    assert_eq!(body["optimizedCost"], 3000.0);
    assert_eq!(body["savingsPercentage"], 40.0);
    assert_eq!(body["yearlySavings"], 24000.0);
    assert_eq!(body["hasEstimate"], true);
    assert_eq!(body["strategies"].as_array().unwrap().len(), 4);
}

#[tokio::test]
async fn test_estimate_endpoint_with_empty_form() {
    let app = app(test_config());
    let (status, body) = send(&app, Method::POST, "/v1/estimate", Some(json!({}))).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["potentialSavings"], 0.0);
    assert_eq!(body["hasEstimate"], false);
}

#[tokio::test]
async fn test_fixed_estimate_endpoint() {
    let app = app(test_config());
    let (status, body) = send(
        &app,
        Method::POST,
        "/v1/estimate/fixed",
        Some(json!({"model": "gpt-4", "currentCost": "25"})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["model"]["name"], "GPT-4");
    assert!((body["yearlySavings"].as_f64().unwrap() - 3600.0).abs() < 1e-9);
    assert_eq!(body["recommendations"].as_array().unwrap().len(), 4);
}

#[tokio::test]
async fn test_catalog_endpoint() {
    let app = app(test_config());
    let (status, body) = send(&app, Method::GET, "/v1/catalog", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["primaryServices"].as_array().unwrap().len(), 5);
    assert_eq!(body["demoModels"][0]["id"], "gpt-4");
}

#[tokio::test]
async fn test_connection_lifecycle() {
    let app = app(test_config());

    let (status, body) = send(
        &app,
        Method::POST,
        "/v1/users/user-1/connections/openai",
        Some(json!({"type": "api_key", "api_key": "sk-test-0123456789"})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["connected"], true);

    let (status, body) = send(&app, Method::GET, "/v1/users/user-1/connections", None).await;
    assert_eq!(status, StatusCode::OK);
    let list = body.as_array().unwrap();
    assert_eq!(list.len(), 3);
    assert_eq!(list[0]["id"], "openai");
    assert_eq!(list[0]["connected"], true);

    let (status, body) = send(&app, Method::GET, "/v1/users/user-1/dashboard", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["metrics"]["connectedServices"], 1);
    assert_eq!(body["gettingStarted"][0]["completed"], true);

    let (status, _) = send(&app, Method::DELETE, "/v1/users/user-1/connections/openai", None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, body) = send(&app, Method::DELETE, "/v1/users/user-1/connections/openai", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["type"], "not_found");
}

#[tokio::test]
async fn test_connect_rejects_bad_credentials() {
    let app = app(test_config());

    let (status, body) = send(
        &app,
        Method::POST,
        "/v1/users/user-1/connections/aws-bedrock",
        Some(json!({"type": "aws", "access_key": "AKIA", "secret_key": "", "region": "us-east-1"})),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"]["type"], "invalid_credentials");

    let (status, _) = send(
        &app,
        Method::POST,
        "/v1/users/user-1/connections/mistral",
        Some(json!({"type": "api_key", "api_key": "k"})),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_account_dashboard() {
    let app = app(test_config());

    let (status, body) = send(&app, Method::GET, "/v1/users/user-1/dashboard", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["greeting"], "Welcome back, Ada Lovelace!");
    assert_eq!(body["metrics"]["monthlySpend"], 0.0);

    let (status, _) = send(&app, Method::GET, "/v1/users/nobody/dashboard", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_demo_dashboard() {
    let app = app(test_config());
    let (status, body) = send(&app, Method::GET, "/v1/demo/dashboard", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["summary"]["monthlySpend"], 3800.0);
    assert_eq!(body["summary"]["totalSavings"], 2200.0);
    assert_eq!(body["costTrend"].as_array().unwrap().len(), 6);
    assert_eq!(body["optimizationTrend"][0]["optimized"], 720.0);
}

#[tokio::test]
async fn test_contact_form() {
    let app = app(test_config());

    let (status, body) = send(
        &app,
        Method::POST,
        "/v1/contact",
        Some(json!({"name": "Ada", "email": "ada@example.com", "message": "Pricing question"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["receivedAt"].is_string());

    let (status, body) = send(
        &app,
        Method::POST,
        "/v1/contact",
        Some(json!({"name": "Ada", "email": "not-an-email", "message": "hi"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["type"], "invalid_input");
}

#[tokio::test]
async fn test_advisor_disabled() {
    let app = app(test_config());
    let (status, body) = send(
        &app,
        Method::POST,
        "/v1/advisor/chat",
        Some(json!({"userId": "user-1", "message": "Where am I overspending?"})),
    )
    .await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["error"]["type"], "advisor_disabled");
}

#[tokio::test]
async fn test_metrics_route_only_with_handle() {
    let app = app(test_config());
    let (status, _) = send(&app, Method::GET, "/metrics", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
