//! HTTP handlers for the dashboard API

use axum::{
    extract::{Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use crate::error::DashboardError;
use crate::graph::Category;
use crate::render::{category_color, Dashboard, DashboardView};
use crate::selection::Selection;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::Arc;
use tracing::{debug, warn};

/// Selection as sent by the page: comma-separated names, absent means "all"
#[derive(Debug, Default, Deserialize)]
pub struct SelectionParams {
    pub profiles: Option<String>,
    pub categories: Option<String>,
}

/// Choices offered by the two selection widgets
#[derive(Debug, Serialize)]
pub struct OptionsResponse {
    pub profiles: Vec<String>,
    pub axes: Vec<String>,
    pub categories: Vec<CategoryOption>,
}

#[derive(Debug, Serialize)]
pub struct CategoryOption {
    pub name: &'static str,
    pub slug: &'static str,
    pub color: &'static str,
}

/// Both views plus their SVG renderings
#[derive(Debug, Serialize)]
pub struct DashboardResponse {
    #[serde(flatten)]
    pub view: DashboardView,
    pub radar_svg: String,
    pub network_svg: String,
}

/// Error reply: 400 for rejected selections, 500 otherwise
pub struct ApiError(DashboardError);

impl From<DashboardError> for ApiError {
    fn from(err: DashboardError) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = if self.0.is_validation() {
            StatusCode::BAD_REQUEST
        } else {
            warn!("Dashboard render failed: {}", self.0);
            StatusCode::INTERNAL_SERVER_ERROR
        };
        (status, Json(json!({ "error": self.0.to_string() }))).into_response()
    }
}

fn render_view(dashboard: &Dashboard, params: &SelectionParams) -> Result<DashboardView, ApiError> {
    let selection = Selection::parse(
        dashboard.dataset(),
        params.profiles.as_deref(),
        params.categories.as_deref(),
    )?;
    debug!(?selection, "Render request");
    Ok(dashboard.render(&selection)?)
}

fn svg_response(body: String) -> Response {
    ([(header::CONTENT_TYPE, mime::IMAGE_SVG.as_ref())], body).into_response()
}

/// Handler for the widget options
pub async fn options_handler(State(dashboard): State<Arc<Dashboard>>) -> Json<OptionsResponse> {
    let dataset = dashboard.dataset();
    Json(OptionsResponse {
        profiles: dataset.profile_names().into_iter().map(String::from).collect(),
        axes: dataset.axes().to_vec(),
        categories: Category::ALL
            .into_iter()
            .map(|c| CategoryOption {
                name: c.display_name(),
                slug: c.slug(),
                color: category_color(c),
            })
            .collect(),
    })
}

/// Handler for one full render cycle
pub async fn dashboard_handler(
    State(dashboard): State<Arc<Dashboard>>,
    Query(params): Query<SelectionParams>,
) -> Result<Json<DashboardResponse>, ApiError> {
    let view = render_view(&dashboard, &params)?;
    let radar_svg = dashboard.radar_svg(&view);
    let network_svg = dashboard.network_svg(&view);

    Ok(Json(DashboardResponse {
        view,
        radar_svg,
        network_svg,
    }))
}

/// Handler for the radar chart alone
pub async fn radar_svg_handler(
    State(dashboard): State<Arc<Dashboard>>,
    Query(params): Query<SelectionParams>,
) -> Result<Response, ApiError> {
    let view = render_view(&dashboard, &params)?;
    Ok(svg_response(dashboard.radar_svg(&view)))
}

/// Handler for the network chart alone
pub async fn network_svg_handler(
    State(dashboard): State<Arc<Dashboard>>,
    Query(params): Query<SelectionParams>,
) -> Result<Response, ApiError> {
    let view = render_view(&dashboard, &params)?;
    Ok(svg_response(dashboard.network_svg(&view)))
}

/// Handler for system status
pub async fn status_handler(State(dashboard): State<Arc<Dashboard>>) -> impl IntoResponse {
    let dataset = dashboard.dataset();
    Json(json!({
        "status": "healthy",
        "version": crate::VERSION,
        "dataset": {
            "profiles": dataset.profile_count(),
            "axes": dataset.axes().len(),
        }
    }))
}
