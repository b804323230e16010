//! Clinigraph
//!
//! An interactive dashboard over four clinical profiles: a cumulative radar
//! of their severity scores and a network linking each profile to its
//! symptoms and comorbidities.
//!
//! # Architecture
//!
//! - `dataset`: the immutable profile/axis tables, built once at startup
//! - `graph`: network construction and category filtering
//! - `selection`: validation of user choices at the input boundary
//! - `render`: the stateless selection -> (radar, network) transform
//! - `http`: the browser shell (axum) serving the page and JSON/SVG API
//!
//! Layout is delegated to the `clinigraph-layout` crate.
//!
//! ## Example Usage
//!
//! ```rust
//! use clinigraph::graph::{build_graph, filter_categories, CategorySet, NodeKey};
//! use clinigraph::Dataset;
//!
//! let dataset = Dataset::builtin();
//! let graph = build_graph(&dataset, &["TPB"]).unwrap();
//!
//! // The symptom and the comorbidity "Addictions" are linked to each other
//! assert!(graph.contains_edge(
//!     &NodeKey::symptom("Addictions"),
//!     &NodeKey::comorbidity("Addictions"),
//! ));
//!
//! let everything = filter_categories(&graph, &CategorySet::all());
//! assert_eq!(everything, graph);
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod dataset;
pub mod error;
pub mod graph;
pub mod http;
pub mod render;
pub mod selection;

// Re-export main types for convenience
pub use config::{ChartSettings, DashboardConfig, LayoutSettings, ServerConfig};

pub use dataset::{Dataset, Profile, Scores, AXIS_COUNT, MAX_SCORE};

pub use error::{DashboardError, DashboardResult};

pub use graph::{
    build_graph, filter_categories, relates, Category, CategorySet, NetworkGraph, NodeKey,
};

pub use render::{Dashboard, DashboardView, NetworkView, RadarView};

pub use selection::Selection;

pub use http::HttpServer;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get version string
pub fn version() -> &'static str {
    VERSION
}
