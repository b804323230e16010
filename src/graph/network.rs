//! Undirected symptom network
//!
//! Nodes are kept in insertion order and addressed by a dense index, which is
//! what the layout engine consumes. Edges are unweighted, undirected and
//! stored once per node pair.

use super::types::{Category, NodeKey};
use indexmap::IndexSet;

/// An undirected, simple graph over [`NodeKey`]s
#[derive(Debug, Clone, Default)]
pub struct NetworkGraph {
    /// Node storage; the position in the set is the node index
    nodes: IndexSet<NodeKey>,

    /// Edges as (low, high) node index pairs
    edges: IndexSet<(usize, usize)>,
}

impl NetworkGraph {
    /// Create a new empty graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a node if absent; returns its index either way
    pub fn add_node(&mut self, key: NodeKey) -> usize {
        self.nodes.insert_full(key).0
    }

    /// Connect two nodes by index.
    ///
    /// Returns `true` when the edge is new. Self-loops and indices that do not
    /// belong to this graph are ignored and return `false`.
    pub fn connect(&mut self, a: usize, b: usize) -> bool {
        if a == b || a >= self.nodes.len() || b >= self.nodes.len() {
            return false;
        }
        self.edges.insert((a.min(b), a.max(b)))
    }

    /// Add an edge, inserting missing endpoints first
    pub fn add_edge(&mut self, a: NodeKey, b: NodeKey) -> bool {
        let a = self.add_node(a);
        let b = self.add_node(b);
        self.connect(a, b)
    }

    pub fn index_of(&self, key: &NodeKey) -> Option<usize> {
        self.nodes.get_index_of(key)
    }

    pub fn contains_node(&self, key: &NodeKey) -> bool {
        self.nodes.contains(key)
    }

    /// Whether an edge joins `a` and `b`, in either direction
    pub fn contains_edge(&self, a: &NodeKey, b: &NodeKey) -> bool {
        match (self.index_of(a), self.index_of(b)) {
            (Some(a), Some(b)) => self.edges.contains(&(a.min(b), a.max(b))),
            _ => false,
        }
    }

    /// Nodes in insertion order
    pub fn nodes(&self) -> impl Iterator<Item = &NodeKey> {
        self.nodes.iter()
    }

    /// Edges as key pairs, in insertion order
    pub fn edges(&self) -> impl Iterator<Item = (&NodeKey, &NodeKey)> {
        self.edges
            .iter()
            .map(move |&(a, b)| (&self.nodes[a], &self.nodes[b]))
    }

    /// Edges as node index pairs
    pub fn edge_indices(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.edges.iter().copied()
    }

    pub fn nodes_in(&self, category: Category) -> impl Iterator<Item = &NodeKey> {
        self.nodes.iter().filter(move |k| k.category == category)
    }

    pub fn neighbors(&self, key: &NodeKey) -> Vec<&NodeKey> {
        let Some(idx) = self.index_of(key) else {
            return Vec::new();
        };
        self.edges
            .iter()
            .filter_map(|&(a, b)| match (a == idx, b == idx) {
                (true, _) => Some(&self.nodes[b]),
                (_, true) => Some(&self.nodes[a]),
                _ => None,
            })
            .collect()
    }

    pub fn degree(&self, key: &NodeKey) -> usize {
        self.index_of(key)
            .map(|idx| self.degree_at(idx))
            .unwrap_or(0)
    }

    /// Degree of every node, indexed like [`nodes`](Self::nodes)
    pub fn degrees(&self) -> Vec<usize> {
        let mut degrees = vec![0; self.nodes.len()];
        for &(a, b) in &self.edges {
            degrees[a] += 1;
            degrees[b] += 1;
        }
        degrees
    }

    fn degree_at(&self, idx: usize) -> usize {
        self.edges
            .iter()
            .filter(|&&(a, b)| a == idx || b == idx)
            .count()
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Subgraph induced by the nodes for which `keep` holds.
    ///
    /// Keeps every edge whose endpoints both survive; node order is preserved.
    pub fn induced_subgraph<F>(&self, keep: F) -> NetworkGraph
    where
        F: Fn(&NodeKey) -> bool,
    {
        let mut subgraph = NetworkGraph::new();
        let mut remap: Vec<Option<usize>> = Vec::with_capacity(self.nodes.len());

        for key in &self.nodes {
            remap.push(keep(key).then(|| subgraph.add_node(key.clone())));
        }

        for &(a, b) in &self.edges {
            if let (Some(a), Some(b)) = (remap[a], remap[b]) {
                subgraph.connect(a, b);
            }
        }

        subgraph
    }
}

/// Graphs are equal when they hold the same nodes and the same edges,
/// whatever the insertion order
impl PartialEq for NetworkGraph {
    fn eq(&self, other: &Self) -> bool {
        self.node_count() == other.node_count()
            && self.edge_count() == other.edge_count()
            && self.nodes().all(|k| other.contains_node(k))
            && self.edges().all(|(a, b)| other.contains_edge(a, b))
    }
}

impl Eq for NetworkGraph {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_node_is_idempotent() {
        let mut graph = NetworkGraph::new();
        let a = graph.add_node(NodeKey::profile("TPB"));
        let b = graph.add_node(NodeKey::profile("TPB"));

        assert_eq!(a, b);
        assert_eq!(graph.node_count(), 1);
    }

    #[test]
    fn test_edges_are_undirected_and_deduplicated() {
        let mut graph = NetworkGraph::new();
        let p = NodeKey::profile("TPB");
        let s = NodeKey::symptom("Colère intense");

        assert!(graph.add_edge(p.clone(), s.clone()));
        assert!(!graph.add_edge(s.clone(), p.clone()));

        assert_eq!(graph.edge_count(), 1);
        assert!(graph.contains_edge(&p, &s));
        assert!(graph.contains_edge(&s, &p));
        assert_eq!(graph.degree(&p), 1);
        assert_eq!(graph.neighbors(&s), vec![&p]);
    }

    #[test]
    fn test_connect_rejects_loops_and_foreign_indices() {
        let mut graph = NetworkGraph::new();
        let a = graph.add_node(NodeKey::symptom("Anhédonie"));

        assert!(!graph.connect(a, a));
        assert!(!graph.connect(a, 7));
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn test_degrees_and_categories() {
        let mut graph = NetworkGraph::new();
        let p = NodeKey::profile("P");
        graph.add_edge(p.clone(), NodeKey::symptom("S1"));
        graph.add_edge(p.clone(), NodeKey::symptom("S2"));
        graph.add_edge(p.clone(), NodeKey::comorbidity("C1"));

        assert_eq!(graph.degrees(), vec![3, 1, 1, 1]);
        assert_eq!(graph.nodes_in(Category::Symptom).count(), 2);
        assert_eq!(graph.nodes_in(Category::Comorbidity).count(), 1);
        assert_eq!(graph.degree(&NodeKey::symptom("absent")), 0);
    }

    #[test]
    fn test_induced_subgraph() {
        let mut graph = NetworkGraph::new();
        let p = NodeKey::profile("P");
        let s = NodeKey::symptom("S");
        let c = NodeKey::comorbidity("C");
        graph.add_edge(p.clone(), s.clone());
        graph.add_edge(p.clone(), c.clone());
        graph.add_edge(s.clone(), c.clone());

        let sub = graph.induced_subgraph(|k| k.category != Category::Profile);

        assert_eq!(sub.node_count(), 2);
        assert_eq!(sub.edge_count(), 1);
        assert!(sub.contains_edge(&s, &c));
        assert!(!sub.contains_node(&p));
        // Source graph untouched
        assert_eq!(graph.node_count(), 3);
        assert_eq!(graph.edge_count(), 3);
    }

    #[test]
    fn test_equality_ignores_order() {
        let mut first = NetworkGraph::new();
        first.add_edge(NodeKey::profile("A"), NodeKey::symptom("x"));
        first.add_node(NodeKey::comorbidity("y"));

        let mut second = NetworkGraph::new();
        second.add_node(NodeKey::comorbidity("y"));
        second.add_edge(NodeKey::symptom("x"), NodeKey::profile("A"));

        assert_eq!(first, second);

        second.add_edge(NodeKey::symptom("x"), NodeKey::comorbidity("y"));
        assert_ne!(first, second);
    }
}
