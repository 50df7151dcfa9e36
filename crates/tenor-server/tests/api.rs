//! HTTP endpoint tests for the Tenor server.

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use tenor_server::{create_router, AppState, ServerConfig};

// =============================================================================
// HELPERS
// =============================================================================

fn create_test_app() -> axum::Router {
    create_router(AppState::default())
}

fn create_export_app(dir: &std::path::Path) -> axum::Router {
    let config = ServerConfig {
        export_dir: dir.to_path_buf(),
        ..ServerConfig::default()
    };
    create_router(AppState::new(config))
}

async fn send(app: axum::Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: Value = serde_json::from_slice(&body).unwrap_or(json!({}));

    (status, json)
}

async fn post_json(app: axum::Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("Content-Type", "application/json")
        .body(Body::from(serde_json::to_string(&body).unwrap()))
        .unwrap();

    send(app, request).await
}

async fn get(app: axum::Router, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    send(app, request).await
}

fn single_bond() -> Value {
    json!({
        "bond_prices": [95.0],
        "face_values": [100.0],
        "maturities": [1.0],
        "coupon_rates": [0.0],
        "compounding_frequencies": [2]
    })
}

fn swap_splice() -> Value {
    json!({
        "base_tenors": [0.5, 1.0],
        "base_rates": [0.02, 0.022],
        "swap_tenors": [2.0, 3.0],
        "swap_rates": [0.025, 0.03]
    })
}

// =============================================================================
// HEALTH
// =============================================================================

#[tokio::test]
async fn test_health_endpoint() {
    let (status, json) = get(create_test_app(), "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["tools"], 10);
}

// =============================================================================
// CURVES
// =============================================================================

#[tokio::test]
async fn test_bootstrap_zero_coupon() {
    let (status, json) =
        post_json(create_test_app(), "/api/v1/curves/bootstrap", single_bond()).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["tool"], "determining-zero-rates");
    let rate = json["result"]["zero_rates"]["value"][0].as_f64().unwrap();
    assert!((rate - 0.051_293_294).abs() < 1e-8);
    assert!(json.get("files").is_none());
}

#[tokio::test]
async fn test_splice_swap_uses_default_samples() {
    let (status, json) =
        post_json(create_test_app(), "/api/v1/curves/splice/swap", swap_splice()).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["result"]["tenors"]["value"].as_array().unwrap().len(), 300);
    let rates = json["result"]["extended_zero_curve"]["value"].as_array().unwrap();
    assert_eq!(rates.len(), 300);
    assert!((rates[0].as_f64().unwrap() - 0.02).abs() < 1e-9);
    assert!((rates[299].as_f64().unwrap() - 0.03).abs() < 1e-9);
}

#[tokio::test]
async fn test_splice_fra_with_sample_override() {
    let body = json!({
        "base_tenors": [0.5, 1.0],
        "base_rates": [0.02, 0.021],
        "fra_tenors": [1.5],
        "fra_rates": [0.025],
        "sample_points": 7
    });
    let (status, json) = post_json(create_test_app(), "/api/v1/curves/splice/fra", body).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["tool"], "extending-zero-curve-with-fra");
    assert_eq!(json["result"]["tenors"]["value"].as_array().unwrap().len(), 7);
}

#[tokio::test]
async fn test_forward_curve() {
    let body = json!({
        "spot_rates": [0.02, 0.025],
        "maturities": [1.0, 2.0],
        "convention": "continuous"
    });
    let (status, json) = post_json(create_test_app(), "/api/v1/curves/forward", body).await;

    assert_eq!(status, StatusCode::OK);
    let forwards = json["result"]["forward_rates"]["value"].as_array().unwrap();
    assert_eq!(forwards.len(), 1);
    assert!((forwards[0].as_f64().unwrap() - 0.03).abs() < 1e-12);
}

#[tokio::test]
async fn test_curve_export_writes_files() {
    let dir = tempfile::tempdir().unwrap();
    let mut body = swap_splice();
    body["export"] = json!(true);

    let (status, json) =
        post_json(create_export_app(dir.path()), "/api/v1/curves/splice/swap", body).await;

    assert_eq!(status, StatusCode::OK);
    let csv = json["files"]["csv"].as_str().unwrap();
    let xlsx = json["files"]["xlsx"].as_str().unwrap();
    assert!(std::path::Path::new(csv).exists());
    assert!(std::path::Path::new(xlsx).exists());
    assert!(csv.contains("tenor_swap_curve_"));

    let content = std::fs::read_to_string(csv).unwrap();
    assert_eq!(content.lines().next(), Some("maturity,rate"));
    assert_eq!(content.lines().count(), 301);
}

// =============================================================================
// FRA
// =============================================================================

#[tokio::test]
async fn test_fra_payoff() {
    let body = json!({
        "contract_rate": 0.03,
        "settlement_rates": [0.032],
        "notional_value": 1_000_000.0,
        "interval": 0.5
    });
    let (status, json) = post_json(create_test_app(), "/api/v1/fra/payoff", body).await;

    assert_eq!(status, StatusCode::OK);
    let payoff = json["result"]["total_fra_payoff"]["value"].as_f64().unwrap();
    assert!((payoff - 984.251_968_5).abs() < 1e-6);
}

#[tokio::test]
async fn test_fra_valuation_seller_is_negated() {
    let buyer = json!({
        "contract_rate": 0.03,
        "forward_rates": [0.035, 0.04],
        "notional": 1_000_000.0,
        "interval": 0.25
    });
    let mut seller = buyer.clone();
    seller["position"] = json!("seller");

    let (_, buyer_json) = post_json(create_test_app(), "/api/v1/fra/valuation", buyer).await;
    let (status, seller_json) = post_json(create_test_app(), "/api/v1/fra/valuation", seller).await;

    assert_eq!(status, StatusCode::OK);
    let buyer_value = buyer_json["result"]["fra_valuation"]["value"].as_f64().unwrap();
    let seller_value = seller_json["result"]["fra_valuation"]["value"].as_f64().unwrap();
    assert!(buyer_value > 0.0);
    assert!((buyer_value + seller_value).abs() < 1e-9);
}

#[tokio::test]
async fn test_fra_break_even() {
    let body = json!({"forward_rates": [0.04, 0.04], "interval": 0.5});
    let (status, json) = post_json(create_test_app(), "/api/v1/fra/break-even", body).await;

    assert_eq!(status, StatusCode::OK);
    let rate = json["result"]["break_even_rate"]["value"].as_f64().unwrap();
    assert!((rate - 0.04).abs() < 1e-10);
}

// =============================================================================
// RATES AND BONDS
// =============================================================================

#[tokio::test]
async fn test_rate_conversion_both_directions() {
    let (status, json) = post_json(
        create_test_app(),
        "/api/v1/rates/convert",
        json!({"rate": 0.1, "frequency": 2}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let continuous = json["result"]["rate_c"]["value"].as_f64().unwrap();
    assert!((continuous - 2.0 * 1.05_f64.ln()).abs() < 1e-12);

    let (status, json) = post_json(
        create_test_app(),
        "/api/v1/rates/convert",
        json!({"rate": 0.08, "frequency": 4, "to": "nominal"}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let nominal = json["result"]["rate_m"]["value"].as_f64().unwrap();
    assert!((nominal - 4.0 * (0.02_f64.exp() - 1.0)).abs() < 1e-12);
}

#[tokio::test]
async fn test_bond_price_at_par() {
    let body = json!({
        "face_value": 1000.0,
        "coupon_rate": 5.0,
        "maturity": 10.0,
        "market_rate": 5.0
    });
    let (status, json) = post_json(create_test_app(), "/api/v1/bonds/price", body).await;

    assert_eq!(status, StatusCode::OK);
    let price = json["result"]["bond_price"]["value"].as_f64().unwrap();
    assert!((price - 1000.0).abs() < 1e-6);
}

// =============================================================================
// TOOL CATALOG
// =============================================================================

#[tokio::test]
async fn test_tool_list() {
    let (status, json) = get(create_test_app(), "/api/v1/tools").await;

    assert_eq!(status, StatusCode::OK);
    let tools = json.as_array().unwrap();
    assert_eq!(tools.len(), 10);
    assert!(tools
        .iter()
        .any(|t| t["key"] == "fra-break-even-rate" && t["produces_curve"] == false));
}

#[tokio::test]
async fn test_tool_dispatch_with_export() {
    let dir = tempfile::tempdir().unwrap();
    let body = json!({
        "spot_rates": [0.02, 0.025, 0.03],
        "maturities": [1.0, 2.0, 3.0],
        "export": true
    });
    let (status, json) = post_json(
        create_export_app(dir.path()),
        "/api/v1/tools/forward-rate-calculation",
        body,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["title"], "Forward Rate Calculation");
    assert!(json["files"]["xlsx"].as_str().unwrap().ends_with(".xlsx"));
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 2);
}

#[tokio::test]
async fn test_tool_dispatch_scalar() {
    let body = json!({"contract_rate": 0.03, "settlement_rates": [0.032], "notional_value": 1_000_000.0, "interval": 0.5});
    let (status, json) = post_json(create_test_app(), "/api/v1/tools/payoff-of-fra", body).await;

    assert_eq!(status, StatusCode::OK);
    assert!(json["result"]["total_fra_payoff"]["value"].as_f64().unwrap() > 984.0);
}

#[tokio::test]
async fn test_unknown_tool_not_found() {
    let (status, json) =
        post_json(create_test_app(), "/api/v1/tools/duration-and-convexity", json!({})).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"]["code"], "NOT_FOUND");
}

#[tokio::test]
async fn test_tool_with_wrong_shape_is_validation_error() {
    let (status, json) = post_json(
        create_test_app(),
        "/api/v1/tools/fra-break-even-rate",
        json!({"forward_rates": "high"}),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
}

// =============================================================================
// ERRORS
// =============================================================================

#[tokio::test]
async fn test_length_mismatch_is_validation_error() {
    let mut body = single_bond();
    body["maturities"] = json!([1.0, 2.0]);
    let (status, json) = post_json(create_test_app(), "/api/v1/curves/bootstrap", body).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
    assert!(!json["error"]["message"].as_str().unwrap().is_empty());
}

#[tokio::test]
async fn test_oversized_sample_count_is_validation_error() {
    let mut body = swap_splice();
    body["sample_points"] = json!(usize::MAX / 4);
    let (status, json) = post_json(create_test_app(), "/api/v1/curves/splice/swap", body).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_empty_rates_is_computation_error() {
    let body = json!({"forward_rates": [], "interval": 0.5});
    let (status, json) = post_json(create_test_app(), "/api/v1/fra/break-even", body).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["error"]["code"], "COMPUTATION_ERROR");
}

#[tokio::test]
async fn test_malformed_json_is_bad_request() {
    let request = Request::builder()
        .method("POST")
        .uri("/api/v1/fra/payoff")
        .header("Content-Type", "application/json")
        .body(Body::from("{\"contract_rate\": 0.03,"))
        .unwrap();
    let (status, json) = send(create_test_app(), request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn test_body_limit() {
    let config = ServerConfig {
        max_body_bytes: 64,
        ..ServerConfig::default()
    };
    let app = create_router(AppState::new(config));
    let rates: Vec<f64> = vec![0.03; 100];
    let (status, _) = post_json(
        app,
        "/api/v1/fra/break-even",
        json!({"forward_rates": rates, "interval": 0.5}),
    )
    .await;

    assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
}
