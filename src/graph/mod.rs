//! Symptom network: construction and category filtering
//!
//! Nodes are profiles, symptoms and comorbidities; edges are undirected:
//! - profile to each declared symptom and comorbidity
//! - symptom to comorbidity of the same profile when their labels relate

pub mod builder;
pub mod filter;
pub mod network;
pub mod types;

// Re-export main types
pub use builder::{build_from_profiles, build_graph, relates};
pub use filter::filter_categories;
pub use network::NetworkGraph;
pub use types::{Category, CategorySet, NodeKey};
