//! HTTP server implementation for the dashboard

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::get,
    Router,
};
use crate::render::Dashboard;
use rust_embed::RustEmbed;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tracing::info;
use super::handler::{
    dashboard_handler, network_svg_handler, options_handler, radar_svg_handler, status_handler,
};

#[derive(RustEmbed)]
#[folder = "src/http/static/"]
struct Assets;

async fn static_handler() -> Response {
    match Assets::get("index.html") {
        Some(index_html) => {
            Html(String::from_utf8_lossy(index_html.data.as_ref()).into_owned()).into_response()
        }
        None => (StatusCode::NOT_FOUND, "index.html is not embedded").into_response(),
    }
}

/// Build the dashboard router
pub fn router(dashboard: Arc<Dashboard>) -> Router {
    Router::new()
        .route("/", get(static_handler))
        .route("/api/options", get(options_handler))
        .route("/api/dashboard", get(dashboard_handler))
        .route("/api/radar.svg", get(radar_svg_handler))
        .route("/api/network.svg", get(network_svg_handler))
        .route("/api/status", get(status_handler))
        .layer(CorsLayer::permissive())
        .with_state(dashboard)
}

/// HTTP server hosting the dashboard page and API
pub struct HttpServer {
    dashboard: Arc<Dashboard>,
}

impl HttpServer {
    /// Create a new HTTP server
    pub fn new(dashboard: Arc<Dashboard>) -> Self {
        Self { dashboard }
    }

    /// Start the HTTP server
    pub async fn start(&self) -> anyhow::Result<()> {
        let addr = self.dashboard.config().bind_address();
        let app = router(Arc::clone(&self.dashboard));
        let listener = tokio::net::TcpListener::bind(&addr).await?;

        info!("Dashboard available at http://{}", addr);

        axum::serve(listener, app).await?;

        Ok(())
    }
}
