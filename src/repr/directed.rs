/*!
# Directed Graph Representations

[`DirectedGraph`] stores only **outgoing** neighborhoods. Edges `(u, v)` and `(v, u)` are distinct
and may carry different weights.

- [`AdjArray`]: adjacency arrays backed by `Vec`.
- [`SparseAdjArray`]: adjacency arrays backed by inline small vectors.
*/

use crate::{repr::macros::impl_common_graph_ops, testing::test_graph_ops};

use super::*;

/// A directed graph storing only **outgoing neighborhoods**.
///
/// # Type parameters
/// - `Nbs`: [`Neighborhood`] implementation used for outgoing adjacency.
#[derive(Clone)]
pub struct DirectedGraph<Nbs>
where
    Nbs: Neighborhood,
{
    out_nbs: Vec<Nbs>,
    num_edges: NumEdges,
}

/// Directed graph using adjacency arrays (`Vec<(Node, Weight)>`).
pub type AdjArray = DirectedGraph<ArrNeighborhood>;

/// Directed graph using sparse adjacency arrays (`SmallVec<[(Node, Weight); 4]>`).
pub type SparseAdjArray = DirectedGraph<SparseNeighborhood>;

impl_common_graph_ops!(DirectedGraph => out_nbs, Directed);

impl<Nbs: Neighborhood> GraphEdgeEditing for DirectedGraph<Nbs> {
    fn try_add_edge(&mut self, u: Node, v: Node, w: Weight) -> bool {
        assert!(self.has_node(v));
        if self.out_nbs[u as usize].try_add_neighbor(v, w) {
            true
        } else {
            self.num_edges += 1;
            false
        }
    }
}

impl<Nbs: Neighborhood> DirectedGraph<Nbs> {
    /// Removes all edges but keeps the nodes
    pub fn clear_edges(&mut self) {
        self.out_nbs.iter_mut().for_each(|nbs| nbs.clear());
        self.num_edges = 0;
    }
}

test_graph_ops!(test_adj_array, AdjArray, false);
test_graph_ops!(test_sparse_adj_array, SparseAdjArray, false);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directed_edges_keep_orientation_and_weight() {
        let graph = AdjArray::from_edges(3, [(0, 1, 5), (1, 0, 2), (0, 1, 9)]);

        assert_eq!(graph.number_of_edges(), 2);
        assert_eq!(graph.weight_of(0, 1), Some(5));
        assert_eq!(graph.weight_of(1, 0), Some(2));
        assert!(!graph.has_edge(2, 0));
        assert_eq!(graph.ith_neighbor(1, 0), (0, 2));
        assert!(AdjArray::is_directed());
    }

    #[test]
    fn clear_edges_keeps_nodes() {
        let mut graph = SparseAdjArray::from_edges(4, [(0, 1), (1, 2), (2, 3)]);
        graph.clear_edges();
        assert_eq!(graph.number_of_nodes(), 4);
        assert!(graph.is_singleton_graph());
        assert_eq!(graph.max_degree(), 0);
    }
}
