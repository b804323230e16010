//! Graph construction from the dataset
//!
//! For each selected profile: a profile node, one edge to each declared
//! symptom and comorbidity, and a symptom-comorbidity edge for every pair of
//! that profile whose labels are related by [`relates`].

use super::network::NetworkGraph;
use super::types::NodeKey;
use crate::dataset::{Dataset, Profile};
use crate::error::{DashboardError, DashboardResult};
use tracing::debug;

/// Case-insensitive substring test in either direction.
///
/// Literal containment after lowercasing, nothing fuzzier: "Addictions"
/// relates to "addictions" and to "Addictions sévères", not to "addictifs".
pub fn relates(a: &str, b: &str) -> bool {
    let a = a.to_lowercase();
    let b = b.to_lowercase();
    a.contains(&b) || b.contains(&a)
}

/// Build the network for the named profiles.
///
/// Unknown names are rejected before any node is created. An empty selection
/// yields an empty graph.
pub fn build_graph<S: AsRef<str>>(dataset: &Dataset, profiles: &[S]) -> DashboardResult<NetworkGraph> {
    let resolved = profiles
        .iter()
        .map(|name| {
            let name = name.as_ref();
            dataset
                .profile(name)
                .ok_or_else(|| DashboardError::UnknownProfile(name.to_string()))
        })
        .collect::<DashboardResult<Vec<&Profile>>>()?;

    Ok(build_from_profiles(resolved))
}

/// Build the network from already resolved profiles
pub fn build_from_profiles<'a, I>(profiles: I) -> NetworkGraph
where
    I: IntoIterator<Item = &'a Profile>,
{
    let mut graph = NetworkGraph::new();

    for profile in profiles {
        let profile_idx = graph.add_node(NodeKey::profile(&profile.name));

        let symptoms: Vec<(usize, &str)> = profile
            .symptoms
            .iter()
            .map(|s| (graph.add_node(NodeKey::symptom(s)), s.as_str()))
            .collect();
        for &(symptom_idx, _) in &symptoms {
            graph.connect(profile_idx, symptom_idx);
        }

        for comorbidity in &profile.comorbidities {
            let comorbidity_idx = graph.add_node(NodeKey::comorbidity(comorbidity));
            graph.connect(profile_idx, comorbidity_idx);

            for &(symptom_idx, symptom) in &symptoms {
                if relates(comorbidity, symptom) {
                    graph.connect(symptom_idx, comorbidity_idx);
                }
            }
        }
    }

    debug!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "Built symptom network"
    );
    graph
}
