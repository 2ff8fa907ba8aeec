use crate::{repr::macros::impl_common_graph_ops, testing::test_graph_ops};

use super::*;

/// An undirected graph representation. Every edge is stored at both endpoints with the same weight;
/// a loop is stored once.
#[derive(Clone)]
pub struct UndirectedGraph<Nbs: Neighborhood> {
    nbs: Vec<Nbs>,
    num_edges: NumEdges,
}

/// Representation using an Adjacency-Array
pub type AdjArrayUndir = UndirectedGraph<ArrNeighborhood>;

/// Representation using a sparse Adjacency-Array
pub type SparseAdjArrayUndir = UndirectedGraph<SparseNeighborhood>;

impl_common_graph_ops!(UndirectedGraph => nbs, Undirected);

impl<Nbs: Neighborhood> GraphEdgeEditing for UndirectedGraph<Nbs> {
    fn try_add_edge(&mut self, u: Node, v: Node, w: Weight) -> bool {
        assert!(self.has_node(v));
        if !self.nbs[u as usize].try_add_neighbor(v, w) {
            if u != v {
                assert!(!self.nbs[v as usize].try_add_neighbor(u, w));
            }
            self.num_edges += 1;
            false
        } else {
            true
        }
    }
}

test_graph_ops!(test_adj_array_undir, AdjArrayUndir, true);
test_graph_ops!(test_sparse_adj_array_undir, SparseAdjArrayUndir, true);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn undirected_edges_are_symmetric() {
        let graph = AdjArrayUndir::from_edges(4, [(0, 1, 3), (1, 0, 8), (2, 2, 1)]);

        assert_eq!(graph.number_of_edges(), 2);
        assert_eq!(graph.weight_of(1, 0), Some(3));
        assert_eq!(graph.degree_of(2), 1);
        assert_eq!(
            graph.ordered_edges(true),
            vec![WeightedEdge(0, 1, 3), WeightedEdge(2, 2, 1)]
        );
    }
}
