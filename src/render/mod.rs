//! Visualization-ready views
//!
//! [`Dashboard::render`] is the whole recomputation cycle run on every user
//! interaction: rebuild the network from the selected profiles, filter it by
//! category, lay it out, and collect the radar series. It holds no state
//! between calls.

pub mod network;
pub mod radar;
pub mod svg;

pub use network::{category_color, NetworkView, PlacedEdge, PlacedNode};
pub use radar::{RadarSeries, RadarView};

use crate::config::DashboardConfig;
use crate::dataset::Dataset;
use crate::error::DashboardResult;
use crate::graph::{build_graph, filter_categories};
use crate::selection::Selection;
use serde::Serialize;
use std::sync::Arc;
use tracing::debug;

/// Both views for one selection
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardView {
    pub selection: Selection,
    pub radar: RadarView,
    pub network: NetworkView,
}

/// Immutable dataset plus configuration; safe to share across requests
#[derive(Debug, Clone)]
pub struct Dashboard {
    dataset: Arc<Dataset>,
    config: DashboardConfig,
}

impl Dashboard {
    pub fn new(dataset: Arc<Dataset>, config: DashboardConfig) -> Self {
        Self { dataset, config }
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    /// Compute both views for a selection
    pub fn render(&self, selection: &Selection) -> DashboardResult<DashboardView> {
        let graph = build_graph(&self.dataset, selection.profiles())?;
        let filtered = filter_categories(&graph, selection.categories());
        let network = NetworkView::layout(&filtered, &self.config.layout)?;
        let radar = RadarView::new(&self.dataset, selection.profiles())?;

        debug!(
            profiles = selection.profiles().len(),
            categories = selection.categories().len(),
            nodes = network.nodes.len(),
            edges = network.edges.len(),
            "Rendered dashboard"
        );

        Ok(DashboardView {
            selection: selection.clone(),
            radar,
            network,
        })
    }

    pub fn radar_svg(&self, view: &DashboardView) -> String {
        view.radar.to_svg(self.config.chart.radar_size)
    }

    pub fn network_svg(&self, view: &DashboardView) -> String {
        view.network
            .to_svg(self.config.chart.network_width, self.config.chart.network_height)
    }
}
