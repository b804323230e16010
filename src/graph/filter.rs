//! Category filtering of the symptom network

use super::network::NetworkGraph;
use super::types::CategorySet;

/// Subgraph induced by the nodes whose category is allowed.
///
/// The input graph is left untouched.
pub fn filter_categories(graph: &NetworkGraph, allowed: &CategorySet) -> NetworkGraph {
    graph.induced_subgraph(|key| allowed.contains(key.category))
}
