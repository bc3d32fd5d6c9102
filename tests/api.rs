use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use chroma_forge::{config::AppConfig, routes, state::AppState};
use serde_json::Value;
use tower::util::ServiceExt;

fn create_test_app() -> Router {
    routes::router(AppState::new(AppConfig::default()))
}

async fn get(app: Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = serde_json::from_slice(&body).unwrap_or(Value::Null);
    (status, json)
}

#[tokio::test]
async fn test_healthcheck() {
    let (status, json) = get(create_test_app(), "/healthcheck").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "ok");
}

#[tokio::test]
async fn test_describe_color() {
    let (status, json) = get(create_test_app(), "/colors?hex=3B82F6").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["hex"], "#3b82f6");
    assert_eq!(json["rgb"], serde_json::json!({"r": 59, "g": 130, "b": 246}));
    assert!(json["oklch"]["h"].is_number());
}

#[tokio::test]
async fn test_describe_gray_omits_hue() {
    let (status, json) = get(create_test_app(), "/colors?hex=%23808080").await;
    assert_eq!(status, StatusCode::OK);
    assert!(json["oklch"].get("h").is_none());
}

#[tokio::test]
async fn test_malformed_hex_is_rejected() {
    let (status, json) = get(create_test_app(), "/colors?hex=%23fff").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let message = json["message"].as_str().unwrap();
    assert!(message.starts_with("bad request: validation failed"), "{message}");
    assert!(message.contains("exactly 6 hex digits"), "{message}");

    let (status, json) = get(create_test_app(), "/palettes?seed=nothex").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json["message"].as_str().unwrap().contains("seed"));
}

#[tokio::test]
async fn test_palette_triadic() {
    let (status, json) = get(
        create_test_app(),
        "/palettes?seed=%233b82f6&scheme=triadic&count=5",
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["scheme"], "triadic");
    let colors = json["colors"].as_array().unwrap();
    assert_eq!(colors.len(), 5);
    assert_eq!(colors[0], "#3b82f6");
}

#[tokio::test]
async fn test_palette_defaults_and_clamps() {
    let (_, json) = get(create_test_app(), "/palettes?seed=%23e11d48").await;
    assert_eq!(json["colors"].as_array().unwrap().len(), 5);

    let (_, json) = get(
        create_test_app(),
        "/palettes?seed=%23e11d48&scheme=whatever&count=99",
    )
    .await;
    assert_eq!(json["scheme"], "triadic");
    assert_eq!(json["colors"].as_array().unwrap().len(), 20);
}

#[tokio::test]
async fn test_stepped_gradient() {
    let (status, json) = get(
        create_test_app(),
        "/gradients?color=%233b82f6&kind=saturation&steps=5",
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["kind"], "saturation");
    assert_eq!(json["colors"].as_array().unwrap().len(), 5);
}

#[tokio::test]
async fn test_unknown_gradient_kind() {
    let (status, json) = get(create_test_app(), "/gradients?color=%233b82f6&kind=radial").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json["message"].as_str().unwrap().contains("kind"));
}

#[tokio::test]
async fn test_sample_matches_stepped_end() {
    let (_, stepped) = get(create_test_app(), "/gradients?color=%233b82f6&kind=both&steps=4").await;
    let (status, sample) = get(
        create_test_app(),
        "/gradients/sample?color=%233b82f6&kind=both&position=1",
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(sample["hex"], stepped["colors"][3]);
}

#[tokio::test]
async fn test_sample_position_out_of_range() {
    let (status, json) = get(
        create_test_app(),
        "/gradients/sample?color=%233b82f6&position=1.5",
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json["message"].as_str().unwrap().contains("position"));
}

#[tokio::test]
async fn test_smooth_gradient_defaults_to_max_stops() {
    let (status, json) = get(create_test_app(), "/gradients/smooth?color=%2316a34a").await;
    assert_eq!(status, StatusCode::OK);
    let stops = json["stops"].as_array().unwrap();
    assert_eq!(stops.len(), 150);
    assert_eq!(stops[0]["position"], 0.0);
    assert_eq!(stops[149]["position"], 1.0);
}

#[tokio::test]
async fn test_openapi_document_is_served() {
    let (status, json) = get(create_test_app(), "/api-doc/openapi.json").await;
    assert_eq!(status, StatusCode::OK);
    assert!(json["paths"]["/palettes"].is_object());
}
