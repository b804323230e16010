//! Shared graph topology for layout
//!
//! Provides a read-only, dense view of an undirected graph. Callers map their
//! own node identities to indices `0..node_count` and keep that mapping.

use thiserror::Error;

/// Errors raised while building a [`GraphView`]
#[derive(Error, Debug, PartialEq, Eq)]
pub enum LayoutError {
    #[error("Edge ({from}, {to}) references a node outside 0..{node_count}")]
    EndpointOutOfRange {
        from: usize,
        to: usize,
        node_count: usize,
    },
}

/// A dense, integer-indexed view of an undirected graph in Compressed Sparse Row format.
///
/// Every edge is stored in both directions, so `neighbors(u)` contains `v`
/// exactly when `neighbors(v)` contains `u`. Self-loops and parallel edges are dropped.
#[derive(Debug, Clone)]
pub struct GraphView {
    /// Number of nodes
    pub node_count: usize,

    /// Offsets into `targets`. Size = node_count + 1
    pub offsets: Vec<usize>,
    /// Contiguous, per-node sorted array of neighbor indices
    pub targets: Vec<usize>,
}

impl GraphView {
    /// Build a view from an undirected edge list
    pub fn from_edges(node_count: usize, edges: &[(usize, usize)]) -> Result<Self, LayoutError> {
        let mut adjacency: Vec<Vec<usize>> = vec![Vec::new(); node_count];

        for &(from, to) in edges {
            if from >= node_count || to >= node_count {
                return Err(LayoutError::EndpointOutOfRange {
                    from,
                    to,
                    node_count,
                });
            }
            if from == to {
                continue;
            }
            adjacency[from].push(to);
            adjacency[to].push(from);
        }

        Ok(Self::from_adjacency_list(adjacency))
    }

    /// Build a view from adjacency lists; lists are sorted and deduplicated
    pub fn from_adjacency_list(adjacency: Vec<Vec<usize>>) -> Self {
        let node_count = adjacency.len();
        let mut offsets = Vec::with_capacity(node_count + 1);
        let mut targets = Vec::new();

        offsets.push(0);
        for (idx, mut neighbors) in adjacency.into_iter().enumerate() {
            neighbors.retain(|&n| n != idx);
            neighbors.sort_unstable();
            neighbors.dedup();
            targets.extend(neighbors);
            offsets.push(targets.len());
        }

        GraphView {
            node_count,
            offsets,
            targets,
        }
    }

    /// Number of distinct neighbors of a node (by index)
    pub fn degree(&self, idx: usize) -> usize {
        self.offsets[idx + 1] - self.offsets[idx]
    }

    /// Neighbors of a node, sorted ascending
    pub fn neighbors(&self, idx: usize) -> &[usize] {
        let start = self.offsets[idx];
        let end = self.offsets[idx + 1];
        &self.targets[start..end]
    }

    /// Whether `u` and `v` share an edge
    pub fn is_adjacent(&self, u: usize, v: usize) -> bool {
        self.neighbors(u).binary_search(&v).is_ok()
    }

    /// Number of undirected edges
    pub fn edge_count(&self) -> usize {
        self.targets.len() / 2
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_edges_is_symmetric() {
        let view = GraphView::from_edges(3, &[(0, 1), (1, 2)]).unwrap();

        assert_eq!(view.node_count, 3);
        assert_eq!(view.edge_count(), 2);
        assert_eq!(view.neighbors(1), &[0, 2]);
        assert!(view.is_adjacent(0, 1));
        assert!(view.is_adjacent(1, 0));
        assert!(!view.is_adjacent(0, 2));
    }

    #[test]
    fn test_parallel_edges_and_loops_dropped() {
        let view = GraphView::from_edges(2, &[(0, 1), (1, 0), (0, 1), (1, 1)]).unwrap();

        assert_eq!(view.edge_count(), 1);
        assert_eq!(view.degree(0), 1);
        assert_eq!(view.degree(1), 1);
    }

    #[test]
    fn test_endpoint_out_of_range() {
        let err = GraphView::from_edges(2, &[(0, 5)]).unwrap_err();
        assert_eq!(
            err,
            LayoutError::EndpointOutOfRange {
                from: 0,
                to: 5,
                node_count: 2
            }
        );
    }

    #[test]
    fn test_empty_view() {
        let view = GraphView::from_edges(0, &[]).unwrap();
        assert_eq!(view.node_count, 0);
        assert_eq!(view.edge_count(), 0);
        assert_eq!(view.offsets, vec![0]);
    }
}
