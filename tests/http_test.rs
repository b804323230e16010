//! Dashboard HTTP API, exercised through the router without a socket

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use clinigraph::http::router;
use clinigraph::{Dashboard, DashboardConfig, Dataset};
use http_body_util::BodyExt;
use std::sync::Arc;
use tower::ServiceExt;

struct Reply {
    status: StatusCode,
    content_type: Option<String>,
    body: Vec<u8>,
}

impl Reply {
    fn json(&self) -> serde_json::Value {
        serde_json::from_slice(&self.body).unwrap()
    }

    fn text(&self) -> String {
        String::from_utf8(self.body.clone()).unwrap()
    }
}

async fn get(uri: &str) -> Reply {
    let dashboard = Dashboard::new(Arc::new(Dataset::builtin()), DashboardConfig::default());
    let app = router(Arc::new(dashboard));

    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .map(|v| v.to_str().unwrap().to_string());
    let body = response.into_body().collect().await.unwrap().to_bytes().to_vec();

    Reply {
        status,
        content_type,
        body,
    }
}

#[tokio::test]
async fn test_index_page() {
    let reply = get("/").await;

    assert_eq!(reply.status, StatusCode::OK);
    assert!(reply.content_type.as_deref().unwrap().starts_with("text/html"));
    assert!(reply.text().contains("Sélection des profils"));
}

#[tokio::test]
async fn test_options() {
    let reply = get("/api/options").await;
    assert_eq!(reply.status, StatusCode::OK);

    let json = reply.json();
    assert_eq!(json["profiles"].as_array().unwrap().len(), 4);
    assert_eq!(json["profiles"][1], "Bipolarité");
    assert_eq!(json["axes"].as_array().unwrap().len(), 6);
    assert_eq!(json["categories"][1]["name"], "Symptômes");
    assert_eq!(json["categories"][2]["slug"], "comorbidity");
}

#[tokio::test]
async fn test_dashboard_defaults_to_everything() {
    let reply = get("/api/dashboard").await;
    assert_eq!(reply.status, StatusCode::OK);

    let json = reply.json();
    assert_eq!(json["selection"]["profiles"].as_array().unwrap().len(), 4);
    assert_eq!(
        json["selection"]["categories"],
        serde_json::json!(["profile", "symptom", "comorbidity"])
    );
    assert_eq!(json["radar"]["series"].as_array().unwrap().len(), 4);
    assert!(json["radar_svg"].as_str().unwrap().starts_with("<svg"));
    assert!(json["network_svg"].as_str().unwrap().contains("<circle"));
}

#[tokio::test]
async fn test_dashboard_with_selection() {
    let reply = get("/api/dashboard?profiles=TPB&categories=Sympt%C3%B4mes,Comorbidit%C3%A9s").await;
    assert_eq!(reply.status, StatusCode::OK);

    let json = reply.json();
    let nodes = json["network"]["nodes"].as_array().unwrap();
    assert_eq!(nodes.len(), 13);
    assert!(nodes.iter().all(|n| n["category"] != "profile"));
    // Only the Addictions pair survives without the profile node
    assert_eq!(json["network"]["edges"].as_array().unwrap().len(), 1);
    assert_eq!(json["radar"]["series"][0]["scores"], serde_json::json!([9, 9, 7, 6, 8, 8]));
}

#[tokio::test]
async fn test_empty_selection_is_valid() {
    let reply = get("/api/dashboard?profiles=&categories=").await;
    assert_eq!(reply.status, StatusCode::OK);

    let json = reply.json();
    assert!(json["network"]["nodes"].as_array().unwrap().is_empty());
    assert!(json["radar"]["series"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_unknown_profile_rejected() {
    let reply = get("/api/dashboard?profiles=TPB,Hyst%C3%A9rie").await;

    assert_eq!(reply.status, StatusCode::BAD_REQUEST);
    assert_eq!(reply.json()["error"], "Unknown profile: Hystérie");
}

#[tokio::test]
async fn test_unknown_category_rejected() {
    let reply = get("/api/radar.svg?categories=Traitements").await;

    assert_eq!(reply.status, StatusCode::BAD_REQUEST);
    assert_eq!(reply.json()["error"], "Unknown category: Traitements");
}

#[tokio::test]
async fn test_svg_endpoints() {
    let radar = get("/api/radar.svg?profiles=Schizophr%C3%A9nie").await;
    assert_eq!(radar.status, StatusCode::OK);
    assert_eq!(radar.content_type.as_deref(), Some("image/svg+xml"));
    assert_eq!(radar.text().matches("<polygon").count(), 1);

    let network = get("/api/network.svg?profiles=Pervers%20narcissique&categories=profile").await;
    assert_eq!(network.status, StatusCode::OK);
    assert_eq!(network.text().matches("<circle").count(), 1);
}

#[tokio::test]
async fn test_status() {
    let reply = get("/api/status").await;
    assert_eq!(reply.status, StatusCode::OK);

    let json = reply.json();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["version"], clinigraph::VERSION);
    assert_eq!(json["dataset"]["profiles"], 4);
}
