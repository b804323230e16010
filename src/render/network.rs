//! Network view: the filtered graph laid out in 2-D

use super::svg;
use crate::config::LayoutSettings;
use crate::error::DashboardResult;
use crate::graph::{Category, NetworkGraph};
use clinigraph_layout::{spring_layout, GraphView};
use serde::Serialize;
use std::fmt::Write;

pub const EDGE_COLOR: &str = "#888888";

/// Node radius in pixels
const NODE_RADIUS: f64 = 10.0;

/// Space kept around the plot for labels
const MARGIN: f64 = 60.0;

/// Fill color of a node category
pub fn category_color(category: Category) -> &'static str {
    match category {
        Category::Profile => "#FF6F61",
        Category::Symptom => "#88B04B",
        Category::Comorbidity => "#6B5B95",
    }
}

/// A node with its layout position, coordinates in [-1, 1]
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlacedNode {
    pub label: String,
    pub category: Category,
    pub color: &'static str,
    pub degree: usize,
    pub x: f64,
    pub y: f64,
}

/// An edge between two entries of [`NetworkView::nodes`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PlacedEdge {
    pub source: usize,
    pub target: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NetworkView {
    pub nodes: Vec<PlacedNode>,
    pub edges: Vec<PlacedEdge>,
}

impl NetworkView {
    /// Lay the graph out with the spring layout
    pub fn layout(graph: &NetworkGraph, settings: &LayoutSettings) -> DashboardResult<Self> {
        let edges: Vec<(usize, usize)> = graph.edge_indices().collect();
        let view = GraphView::from_edges(graph.node_count(), &edges)?;
        let positions = spring_layout(&view, &settings.spring_config());
        let degrees = graph.degrees();

        let nodes = graph
            .nodes()
            .zip(positions)
            .zip(degrees)
            .map(|((key, pos), degree)| PlacedNode {
                label: key.label.clone(),
                category: key.category,
                color: category_color(key.category),
                degree,
                x: pos.x,
                y: pos.y,
            })
            .collect();

        let edges = edges
            .into_iter()
            .map(|(source, target)| PlacedEdge { source, target })
            .collect();

        Ok(NetworkView { nodes, edges })
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Render as SVG: grey edges, colored nodes labelled from above
    pub fn to_svg(&self, width: f64, height: f64) -> String {
        let half_w = (width / 2.0 - MARGIN).max(1.0);
        let half_h = (height / 2.0 - MARGIN).max(1.0);
        // Layout y grows upwards, SVG y grows downwards
        let project = |node: &PlacedNode| (width / 2.0 + node.x * half_w, height / 2.0 - node.y * half_h);

        let mut out = svg::open(width, height);
        out.push_str(r##"<rect width="100%" height="100%" fill="#ffffff"/>"##);

        for edge in &self.edges {
            let (Some(a), Some(b)) = (self.nodes.get(edge.source), self.nodes.get(edge.target)) else {
                continue;
            };
            let (x1, y1) = project(a);
            let (x2, y2) = project(b);
            let _ = write!(
                out,
                r#"<line x1="{:.1}" y1="{:.1}" x2="{:.1}" y2="{:.1}" stroke="{}" stroke-width="1"/>"#,
                x1, y1, x2, y2, EDGE_COLOR
            );
        }

        for node in &self.nodes {
            let (x, y) = project(node);
            let label = svg::escape(&node.label);
            let _ = write!(
                out,
                r#"<g><circle cx="{:.1}" cy="{:.1}" r="{:.1}" fill="{}"><title>{}</title></circle><text x="{:.1}" y="{:.1}" font-size="11" text-anchor="middle">{}</text></g>"#,
                x,
                y,
                NODE_RADIUS,
                node.color,
                label,
                x,
                y - NODE_RADIUS - 4.0,
                label
            );
        }

        out.push_str(svg::CLOSE);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::NodeKey;

    fn triangle() -> NetworkGraph {
        let mut graph = NetworkGraph::new();
        graph.add_edge(NodeKey::profile("P"), NodeKey::symptom("S"));
        graph.add_edge(NodeKey::profile("P"), NodeKey::comorbidity("C"));
        graph.add_edge(NodeKey::symptom("S"), NodeKey::comorbidity("C"));
        graph
    }

    #[test]
    fn test_layout_keeps_graph_content() {
        let graph = triangle();
        let view = NetworkView::layout(&graph, &LayoutSettings::default()).unwrap();

        assert_eq!(view.nodes.len(), 3);
        assert_eq!(view.edges.len(), 3);
        assert_eq!(view.nodes[0].label, "P");
        assert_eq!(view.nodes[0].color, "#FF6F61");
        assert_eq!(view.nodes[1].color, "#88B04B");
        assert_eq!(view.nodes[2].color, "#6B5B95");
        assert!(view.nodes.iter().all(|n| n.degree == 2));
        for node in &view.nodes {
            assert!(node.x.abs() <= 1.0 + 1e-9 && node.y.abs() <= 1.0 + 1e-9);
        }
    }

    #[test]
    fn test_layout_is_reproducible() {
        let graph = triangle();
        let settings = LayoutSettings::default();
        assert_eq!(
            NetworkView::layout(&graph, &settings).unwrap(),
            NetworkView::layout(&graph, &settings).unwrap()
        );
    }

    #[test]
    fn test_svg_elements() {
        let view = NetworkView::layout(&triangle(), &LayoutSettings::default()).unwrap();
        let svg = view.to_svg(900.0, 700.0);

        assert_eq!(svg.matches("<line").count(), 3);
        assert_eq!(svg.matches("<circle").count(), 3);
        assert!(svg.contains(">S</text>"));
    }

    #[test]
    fn test_empty_graph() {
        let view = NetworkView::layout(&NetworkGraph::new(), &LayoutSettings::default()).unwrap();
        assert!(view.is_empty());
        let svg = view.to_svg(400.0, 300.0);
        assert!(!svg.contains("<circle"));
    }
}
