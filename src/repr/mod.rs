/*!
# Graph Representations

Weighted adjacency arrays, either directed ([`DirectedGraph`]) or undirected ([`UndirectedGraph`]).
Both are generic over a [`Neighborhood`] that stores `(neighbor, weight)`-pairs:

- [`ArrNeighborhood`] uses a plain `Vec`,
- [`SparseNeighborhood`] uses a `SmallVec` and avoids allocations for low degrees.

Traversals access neighborhoods by index (see [`IndexedAdjacencyList`]) so that a step machine
can pause in the middle of a neighborhood and resume later.
*/

use crate::{ops::*, *};

mod directed;
mod neighborhood;
mod undirected;

pub use directed::*;
pub use neighborhood::*;
pub use undirected::*;

/// Trait for methods on the Neighborhood of a given Node
pub trait Neighborhood: Clone + Default {
    /// Returns the number of neighbors in the Neighborhood
    fn num_of_neighbors(&self) -> NumNodes;

    /// Returns all `(neighbor, weight)`-pairs as a slice
    fn as_slice(&self) -> &[(Node, Weight)];

    /// Returns an iterator over all neighbors in the Neighborhood
    fn neighbors(&self) -> impl Iterator<Item = Node> + '_ {
        self.as_slice().iter().map(|&(v, _)| v)
    }

    /// Returns an iterator over all neighbors together with the weight of the connecting edge
    fn weighted_neighbors(&self) -> impl Iterator<Item = (Node, Weight)> + '_ {
        self.as_slice().iter().copied()
    }

    /// Returns the weight of the edge to `v` if `v` is in the Neighborhood
    fn weight_of(&self, v: Node) -> Option<Weight> {
        self.as_slice()
            .iter()
            .find_map(|&(u, w)| (u == v).then_some(w))
    }

    /// Returns *true* if `v` is in the Neighborhood
    fn has_neighbor(&self, v: Node) -> bool {
        self.weight_of(v).is_some()
    }

    /// Tries to add a neighbor to the Neighborhood.
    /// Returns *true* if the node was in the Neighborhood before; its weight is not updated then.
    fn try_add_neighbor(&mut self, u: Node, w: Weight) -> bool {
        if self.has_neighbor(u) {
            true
        } else {
            self.add_neighbor(u, w);
            false
        }
    }

    /// Adds a neighbor to the Neighborhood without checking if this neighbor exists beforehand.
    /// This might lead to Multi-Edges
    fn add_neighbor(&mut self, u: Node, w: Weight);

    /// Removes all neighbors in the Neighborhood
    fn clear(&mut self);
}

pub(crate) mod macros {
    macro_rules! impl_common_graph_ops {
        ($struct:ident => $nbs:ident, $directed:ident) => {
            impl<Nbs: Neighborhood> GraphType for $struct<Nbs> {
                type Dir = $directed;
            }

            impl<Nbs: Neighborhood> GraphNodeOrder for $struct<Nbs> {
                fn number_of_nodes(&self) -> NumNodes {
                    self.$nbs.len() as NumNodes
                }
            }

            impl<Nbs: Neighborhood> GraphEdgeOrder for $struct<Nbs> {
                fn number_of_edges(&self) -> NumEdges {
                    self.num_edges
                }
            }

            impl<Nbs: Neighborhood> AdjacencyList for $struct<Nbs> {
                fn neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_ {
                    self.$nbs[u as usize].neighbors()
                }

                fn weighted_neighbors_of(
                    &self,
                    u: Node,
                ) -> impl Iterator<Item = (Node, Weight)> + '_ {
                    self.$nbs[u as usize].weighted_neighbors()
                }

                fn degree_of(&self, u: Node) -> NumNodes {
                    self.$nbs[u as usize].num_of_neighbors()
                }
            }

            impl<Nbs: Neighborhood> AdjacencyTest for $struct<Nbs> {
                fn weight_of(&self, u: Node, v: Node) -> Option<Weight> {
                    self.$nbs[u as usize].weight_of(v)
                }
            }

            impl<Nbs: Neighborhood> GraphNew for $struct<Nbs> {
                fn new(n: NumNodes) -> Self {
                    Self {
                        num_edges: 0,
                        $nbs: vec![Nbs::default(); n as usize],
                    }
                }
            }

            impl<Nbs: Neighborhood> NeighborsSlice for $struct<Nbs> {
                fn as_neighbors_slice(&self, u: Node) -> &[(Node, Weight)] {
                    self.$nbs[u as usize].as_slice()
                }
            }

            impl<Nbs: Neighborhood> std::fmt::Debug for $struct<Nbs> {
                fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                    f.debug_struct(stringify!($struct))
                        .field("n", &self.number_of_nodes())
                        .field("m", &self.num_edges)
                        .field("edges", &self.ordered_edges(Self::is_undirected()))
                        .finish()
                }
            }
        };
    }

    pub(crate) use impl_common_graph_ops;
}
