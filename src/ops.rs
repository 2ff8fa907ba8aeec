use std::ops::Range;

use itertools::Itertools;

use crate::*;

/// Provides getters pertaining to the node-size of a graph
pub trait GraphNodeOrder {
    /// Returns the number of nodes of the graph
    fn number_of_nodes(&self) -> NumNodes;

    /// Return the number of nodes as usize
    fn len(&self) -> usize {
        self.number_of_nodes() as usize
    }

    /// Returns an iterator over V.
    fn vertices(&self) -> Range<Node> {
        0..self.number_of_nodes()
    }

    /// Returns *true* if the graph has no nodes (and thus no edges)
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns *true* if `u` is a valid node of the graph, i.e. `u < n`
    fn has_node(&self, u: Node) -> bool {
        u < self.number_of_nodes()
    }
}

/// Provides getters pertaining to the edge-size of a graph
pub trait GraphEdgeOrder {
    /// Returns the number of edges of the graph
    fn number_of_edges(&self) -> NumEdges;

    /// Returns *true* if the graph has no edges
    fn is_singleton_graph(&self) -> bool {
        self.number_of_edges() == 0
    }
}

/// Marker for the orientation of a graph representation
pub trait GraphDir {
    const IS_DIRECTED: bool;
}

/// Edges `(u, v)` and `(v, u)` are distinct
#[derive(Debug, Clone, Copy, Default)]
pub struct Directed;

/// Edge `(u, v)` is the same as `(v, u)`
#[derive(Debug, Clone, Copy, Default)]
pub struct Undirected;

impl GraphDir for Directed {
    const IS_DIRECTED: bool = true;
}

impl GraphDir for Undirected {
    const IS_DIRECTED: bool = false;
}

/// Tells whether a graph representation is directed
pub trait GraphType {
    type Dir: GraphDir;

    fn is_directed() -> bool {
        Self::Dir::IS_DIRECTED
    }

    fn is_undirected() -> bool {
        !Self::is_directed()
    }
}

/// Traits pertaining getters for neighborhoods & edges
pub trait AdjacencyList: GraphNodeOrder + Sized {
    /// Returns an iterator over the (open) neighborhood of a given vertex.
    /// ** Panics if `u >= n` **
    fn neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_;

    /// Returns an iterator over the neighbors of a given vertex together with the weight
    /// of the connecting edge.
    /// ** Panics if `u >= n` **
    fn weighted_neighbors_of(&self, u: Node) -> impl Iterator<Item = (Node, Weight)> + '_;

    /// Returns the number of (outgoing) neighbors of `u`
    /// ** Panics if `u >= n` **
    fn degree_of(&self, u: Node) -> NumNodes;

    /// Returns an iterator over the degrees of all nodes
    fn degrees(&self) -> impl Iterator<Item = NumNodes> + '_ {
        self.vertices().map(|u| self.degree_of(u))
    }

    /// Returns the maximum degree in the graph
    fn max_degree(&self) -> NumNodes {
        self.degrees().max().unwrap_or(0)
    }

    /// Returns an iterator over outgoing edges of a given vertex.
    /// If `only_normalized`, then only edges `(u, v)` with `u <= v` are considered.
    /// ** Panics if `u >= n` **
    fn edges_of(&self, u: Node, only_normalized: bool) -> impl Iterator<Item = WeightedEdge> + '_ {
        self.weighted_neighbors_of(u)
            .map(move |(v, w)| WeightedEdge(u, v, w))
            .filter(move |e| !only_normalized || e.is_normalized())
    }

    /// Returns an iterator over all edges in the graph.
    /// If `only_normalized`, then only edges `(u, v)` with `u <= v` are considered.
    fn edges(&self, only_normalized: bool) -> impl Iterator<Item = WeightedEdge> + '_ {
        self.vertices()
            .flat_map(move |u| self.edges_of(u, only_normalized))
    }

    /// Returns all edges in the graph in sorted order.
    /// If `only_normalized`, then only edges `(u, v)` with `u <= v` are considered.
    fn ordered_edges(&self, only_normalized: bool) -> Vec<WeightedEdge> {
        self.edges(only_normalized).sorted().collect_vec()
    }
}

/// Trait to test existence of certain structures in a graph.
pub trait AdjacencyTest: GraphNodeOrder {
    /// Returns the weight of the egde (u,v) if it exists in the graph.
    /// ** Panics if `u >= n` **
    fn weight_of(&self, u: Node, v: Node) -> Option<Weight>;

    /// Returns *true* if the egde (u,v) exists in the graph.
    /// ** Panics if `u >= n` **
    fn has_edge(&self, u: Node, v: Node) -> bool {
        self.weight_of(u, v).is_some()
    }
}

/// Random access into neighborhoods. Step machines use it to resume the scan of a
/// neighborhood at the position where the previous step stopped.
pub trait IndexedAdjacencyList: AdjacencyList {
    /// Returns the ith neighbor (0-indexed) of a given vertex and the weight of the edge
    /// ** Panics if `u >= n || i >= deg(u)`
    fn ith_neighbor(&self, u: Node, i: NumNodes) -> (Node, Weight);
}

/// Trait for accessing the neighborhood of nodes as slices
pub trait NeighborsSlice {
    /// Returns a slice-reference of the weighted neighborhood of a given vertex
    fn as_neighbors_slice(&self, u: Node) -> &[(Node, Weight)];
}

impl<G: NeighborsSlice + AdjacencyList> IndexedAdjacencyList for G {
    #[inline]
    fn ith_neighbor(&self, u: Node, i: NumNodes) -> (Node, Weight) {
        self.as_neighbors_slice(u)[i as usize]
    }
}

/// Trait for creating a new empty graph
pub trait GraphNew {
    /// Creates an empty graph with n singleton nodes
    fn new(n: NumNodes) -> Self;
}

/// Provides functions to insert edges
pub trait GraphEdgeEditing: GraphNew {
    /// Adds the edge *(u,v)* with weight `w` to the graph.
    /// ** Panics if `u >= n || v >= n` or the edge was already present **
    fn add_edge(&mut self, u: Node, v: Node, w: Weight) {
        assert!(!self.try_add_edge(u, v, w))
    }

    /// Adds the edge `(u, v)` with weight `w` to the graph.
    /// Returns *true* exactly if the edge was present previously, in which case its weight is kept.
    /// ** Panics if `u >= n || v >= n` **
    fn try_add_edge(&mut self, u: Node, v: Node, w: Weight) -> bool;

    /// Adds all edges in the collection
    /// ** Panics if any edge is already present **
    fn add_edges(&mut self, edges: impl IntoIterator<Item = impl Into<WeightedEdge>>) {
        for WeightedEdge(u, v, w) in edges.into_iter().map(|e| e.into()) {
            self.add_edge(u, v, w);
        }
    }
}

/// A super trait for creating a graph from scratch from a set of edges and a number of nodes
pub trait GraphFromScratch {
    /// Create a graph from a number of nodes and an iterator over Edges.
    /// Repeated edges are ignored; the first occurrence determines the weight.
    fn from_edges(n: NumNodes, edges: impl IntoIterator<Item = impl Into<WeightedEdge>>) -> Self;
}

impl<G: GraphNew + GraphEdgeEditing> GraphFromScratch for G {
    fn from_edges(n: NumNodes, edges: impl IntoIterator<Item = impl Into<WeightedEdge>>) -> Self {
        let mut graph = Self::new(n);
        for WeightedEdge(u, v, w) in edges.into_iter().map(|e| e.into()) {
            graph.try_add_edge(u, v, w);
        }
        graph
    }
}
