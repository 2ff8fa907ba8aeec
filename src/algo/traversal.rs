/*!
Stepwise graph traversals: breadth-first search, depth-first search and Dijkstra's shortest paths.

All traversals work on any [`IndexedAdjacencyList`] and keep their position inside the current
neighborhood so that every step performs a single visible operation:

- BFS: visiting a node taken from the queue, or discovering a new node. Nodes are marked when they
  are enqueued.
- DFS: visiting a node. Uses an explicit stack of `(node, next neighbor index)` and thus visits
  nodes in the same order as the recursive formulation.
- Dijkstra: settling a node, checking a neighbor, or improving a distance.

Every inspected neighbor counts as one comparison. The set used to track visited nodes can be
chosen through the `V` parameter, e.g. an `FxHashSet<Node>` for huge graphs where only few nodes
are reachable.

```
use algoscope::{prelude::*, algo::*};

let graph = AdjArrayUndir::from_edges(4, [(0, 1), (0, 2), (1, 3)]);
let mut bfs = graph.bfs(0).unwrap();
bfs.run_to_completion();

assert_eq!(bfs.visit_order(), &[0, 1, 2, 3]);
```
*/

use std::{
    cmp::Reverse,
    collections::{BinaryHeap, VecDeque},
    fmt::Display,
};

use smallvec::{SmallVec, smallvec};

use super::{step::*, *};

/// Graph traversals that can run step by step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TraversalKind {
    BreadthFirst,
    DepthFirst,
    Dijkstra,
}

/// What a single traversal step did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphEvent {
    /// `node` is visited
    Visit { node: Node, order: TraversalKind },
    /// BFS found the unvisited neighbor `node` of `from` and enqueued it
    Discover { node: Node, from: Node },
    /// Dijkstra settled `node` with its final `distance`
    Settle { node: Node, distance: Distance },
    /// Dijkstra checked the edge `from -> node`; `best` is the distance known before
    Relax {
        from: Node,
        node: Node,
        candidate: Distance,
        best: Option<Distance>,
    },
    /// Dijkstra lowered the distance of `node`
    Improve { node: Node, distance: Distance },
}

struct DisplayDistance(Option<Distance>);

impl Display for DisplayDistance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.0 {
            Some(d) => write!(f, "{d}"),
            None => write!(f, "Infinity"),
        }
    }
}

impl Describe for GraphEvent {
    fn description(&self) -> String {
        match self {
            GraphEvent::Visit { node, .. } | GraphEvent::Settle { node, .. } => {
                format!("Visiting node {node}")
            }
            GraphEvent::Discover { node, .. } => format!("Adding node {node}"),
            GraphEvent::Relax { node, .. } => format!("Checking neighbor {node}"),
            GraphEvent::Improve { node, .. } => format!("Updated distance to node {node}"),
        }
    }

    fn detail(&self) -> String {
        match self {
            GraphEvent::Visit {
                order: TraversalKind::DepthFirst,
                ..
            } => "Exploring depth-first".to_string(),
            GraphEvent::Visit { .. } => "Exploring neighbors".to_string(),
            GraphEvent::Discover { .. } => "New node discovered".to_string(),
            GraphEvent::Settle { distance, .. } => format!("Current distance: {distance}"),
            GraphEvent::Relax {
                from,
                candidate,
                best,
                ..
            } => format!(
                "Distance through {from}: {candidate} (Current best: {})",
                DisplayDistance(*best)
            ),
            GraphEvent::Improve { distance, .. } => format!("New shortest distance: {distance}"),
        }
    }

    fn highlighted(&self) -> SmallVec<[usize; 2]> {
        match *self {
            GraphEvent::Visit { node, .. }
            | GraphEvent::Settle { node, .. }
            | GraphEvent::Improve { node, .. } => smallvec![node as usize],
            GraphEvent::Discover { node, from } | GraphEvent::Relax { from, node, .. } => {
                smallvec![from as usize, node as usize]
            }
        }
    }
}

/// Common interface for maintaining and querying visited-states during a traversal.
pub trait TraversalState<S>
where
    S: Set<Node>,
{
    /// Returns a reference to the set of visited nodes.
    fn visited(&self) -> &S;

    /// Checks if a given node `u` has already been visited.
    fn did_visit_node(&self, u: Node) -> bool {
        self.visited().contains(&u)
    }
}

fn check_start<G: GraphNodeOrder>(graph: &G, start: Node) -> AlgoscopeResult<()> {
    if graph.has_node(start) {
        Ok(())
    } else {
        Err(AlgoscopeError::invalid_node(start, graph.number_of_nodes()))
    }
}

/// Stepwise breadth-first search.
/// `completed` lists all marked (i.e. enqueued) nodes in marking order.
pub struct Bfs<'a, G, V = NodeSet>
where
    G: IndexedAdjacencyList,
    V: Set<Node>,
{
    graph: &'a G,
    visited: V,
    queue: VecDeque<Node>,
    /// Node whose neighborhood is being scanned and the index of the next neighbor
    current: Option<(Node, NumNodes)>,
    marked: Vec<usize>,
    order: Vec<Node>,
    metrics: Metrics,
    finished: bool,
}

impl<'a, G, V> Bfs<'a, G, V>
where
    G: IndexedAdjacencyList,
    V: Set<Node> + FromCapacity,
{
    /// Creates a BFS starting at `start`.
    ///
    /// # Errors
    /// Returns [`AlgoscopeError::InvalidNode`] if `start` is not a node of `graph`.
    pub fn new(graph: &'a G, start: Node) -> AlgoscopeResult<Self> {
        check_start(graph, start)?;

        let len = graph.len();
        let mut visited = V::from_total_used_capacity(len, len);
        visited.insert(start);

        Ok(Self {
            graph,
            visited,
            queue: VecDeque::from(vec![start]),
            current: None,
            marked: vec![start as usize],
            order: Vec::new(),
            metrics: Metrics::default(),
            finished: false,
        })
    }
}

impl<G, V> Bfs<'_, G, V>
where
    G: IndexedAdjacencyList,
    V: Set<Node>,
{
    /// Nodes in the order they were visited (dequeued) so far
    pub fn visit_order(&self) -> &[Node] {
        &self.order
    }
}

impl<G, V> TraversalState<V> for Bfs<'_, G, V>
where
    G: IndexedAdjacencyList,
    V: Set<Node>,
{
    fn visited(&self) -> &V {
        &self.visited
    }
}

impl<G, V> StepMachine for Bfs<'_, G, V>
where
    G: IndexedAdjacencyList,
    V: Set<Node>,
{
    type Event = GraphEvent;

    fn advance(&mut self) -> Option<GraphEvent> {
        if self.finished {
            return None;
        }

        loop {
            if let Some((u, i)) = self.current {
                if i < self.graph.degree_of(u) {
                    self.current = Some((u, i + 1));
                    let (v, _) = self.graph.ith_neighbor(u, i);
                    self.metrics.count_comparison();
                    if !self.visited.insert(v) {
                        self.queue.push_back(v);
                        self.marked.push(v as usize);
                        return Some(GraphEvent::Discover { node: v, from: u });
                    }
                    continue;
                }
                self.current = None;
            }

            let Some(u) = self.queue.pop_front() else {
                self.finished = true;
                return None;
            };

            self.current = Some((u, 0));
            self.order.push(u);
            return Some(GraphEvent::Visit {
                node: u,
                order: TraversalKind::BreadthFirst,
            });
        }
    }

    fn metrics(&self) -> Metrics {
        self.metrics
    }

    fn completed(&self) -> &[usize] {
        &self.marked
    }

    fn is_finished(&self) -> bool {
        self.finished
    }
}

/// Stepwise depth-first search in recursive pre-order.
/// `completed` lists the visited nodes in visiting order.
pub struct Dfs<'a, G, V = NodeSet>
where
    G: IndexedAdjacencyList,
    V: Set<Node>,
{
    graph: &'a G,
    visited: V,
    start: Option<Node>,
    stack: Vec<(Node, NumNodes)>,
    order: Vec<usize>,
    metrics: Metrics,
    finished: bool,
}

impl<'a, G, V> Dfs<'a, G, V>
where
    G: IndexedAdjacencyList,
    V: Set<Node> + FromCapacity,
{
    /// Creates a DFS starting at `start`.
    ///
    /// # Errors
    /// Returns [`AlgoscopeError::InvalidNode`] if `start` is not a node of `graph`.
    pub fn new(graph: &'a G, start: Node) -> AlgoscopeResult<Self> {
        check_start(graph, start)?;

        let len = graph.len();
        Ok(Self {
            graph,
            visited: V::from_total_used_capacity(len, len),
            start: Some(start),
            stack: Vec::new(),
            order: Vec::new(),
            metrics: Metrics::default(),
            finished: false,
        })
    }
}

impl<G, V> Dfs<'_, G, V>
where
    G: IndexedAdjacencyList,
    V: Set<Node>,
{
    fn visit(&mut self, u: Node) -> GraphEvent {
        self.visited.insert(u);
        self.stack.push((u, 0));
        self.order.push(u as usize);
        GraphEvent::Visit {
            node: u,
            order: TraversalKind::DepthFirst,
        }
    }

    /// Number of nodes on the recursion stack
    pub fn depth(&self) -> usize {
        self.stack.len()
    }
}

impl<G, V> TraversalState<V> for Dfs<'_, G, V>
where
    G: IndexedAdjacencyList,
    V: Set<Node>,
{
    fn visited(&self) -> &V {
        &self.visited
    }
}

impl<G, V> StepMachine for Dfs<'_, G, V>
where
    G: IndexedAdjacencyList,
    V: Set<Node>,
{
    type Event = GraphEvent;

    fn advance(&mut self) -> Option<GraphEvent> {
        if self.finished {
            return None;
        }
        if let Some(start) = self.start.take() {
            return Some(self.visit(start));
        }

        while let Some(&(u, i)) = self.stack.last() {
            if i >= self.graph.degree_of(u) {
                self.stack.pop();
                continue;
            }

            if let Some(top) = self.stack.last_mut() {
                top.1 += 1;
            }
            let (v, _) = self.graph.ith_neighbor(u, i);
            self.metrics.count_comparison();
            if !self.visited.contains(&v) {
                return Some(self.visit(v));
            }
        }

        self.finished = true;
        None
    }

    fn metrics(&self) -> Metrics {
        self.metrics
    }

    fn completed(&self) -> &[usize] {
        &self.order
    }

    fn is_finished(&self) -> bool {
        self.finished
    }
}

/// Distances and shortest-path tree computed by [`Dijkstra`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DijkstraResult {
    /// `None` for nodes that are not reachable from the start
    pub distances: Vec<Option<Distance>>,
    /// Predecessor on a shortest path; `None` for the start and unreachable nodes
    pub previous: Vec<Option<OptionalNode>>,
}

impl DijkstraResult {
    /// Returns the nodes of a shortest path from the start to `target` (both included)
    pub fn path_to(&self, target: Node) -> Option<Vec<Node>> {
        self.distances.get(target as usize).copied().flatten()?;

        let mut path = vec![target];
        let mut u = target;
        while let Some(p) = self.previous[u as usize].map(|p| p.get()) {
            path.push(p);
            u = p;
        }
        path.reverse();
        Some(path)
    }
}

/// Stepwise Dijkstra with a binary heap as frontier (lazy deletion of outdated entries).
/// `completed` lists the settled nodes in settling order.
pub struct Dijkstra<'a, G, V = NodeSet>
where
    G: IndexedAdjacencyList,
    V: Set<Node>,
{
    graph: &'a G,
    settled: V,
    heap: BinaryHeap<Reverse<(Distance, Node)>>,
    result: DijkstraResult,
    current: Option<(Node, NumNodes)>,
    /// Improvement found by the last relaxation: `(from, node, distance)`
    pending: Option<(Node, Node, Distance)>,
    order: Vec<usize>,
    metrics: Metrics,
    finished: bool,
}

impl<'a, G, V> Dijkstra<'a, G, V>
where
    G: IndexedAdjacencyList,
    V: Set<Node> + FromCapacity,
{
    /// Creates a Dijkstra run from `start`.
    ///
    /// # Errors
    /// Returns [`AlgoscopeError::InvalidNode`] if `start` is not a node of `graph`.
    pub fn new(graph: &'a G, start: Node) -> AlgoscopeResult<Self> {
        check_start(graph, start)?;

        let len = graph.len();
        let mut distances = vec![None; len];
        distances[start as usize] = Some(0);

        Ok(Self {
            graph,
            settled: V::from_total_used_capacity(len, len),
            heap: BinaryHeap::from(vec![Reverse((0, start))]),
            result: DijkstraResult {
                distances,
                previous: vec![None; len],
            },
            current: None,
            pending: None,
            order: Vec::new(),
            metrics: Metrics::default(),
            finished: false,
        })
    }
}

impl<G, V> Dijkstra<'_, G, V>
where
    G: IndexedAdjacencyList,
    V: Set<Node>,
{
    /// Best distance to `u` known so far; `None` if `u` is unreached or not a node of the graph
    pub fn distance_to(&self, u: Node) -> Option<Distance> {
        self.result.distances.get(u as usize).copied().flatten()
    }

    /// Current distances and predecessors; final once the run has finished
    pub fn result(&self) -> &DijkstraResult {
        &self.result
    }

    pub fn into_result(self) -> DijkstraResult {
        self.result
    }
}

impl<G, V> TraversalState<V> for Dijkstra<'_, G, V>
where
    G: IndexedAdjacencyList,
    V: Set<Node>,
{
    fn visited(&self) -> &V {
        &self.settled
    }
}

impl<G, V> StepMachine for Dijkstra<'_, G, V>
where
    G: IndexedAdjacencyList,
    V: Set<Node>,
{
    type Event = GraphEvent;

    fn advance(&mut self) -> Option<GraphEvent> {
        if self.finished {
            return None;
        }

        if let Some((from, node, distance)) = self.pending.take() {
            self.result.distances[node as usize] = Some(distance);
            self.result.previous[node as usize] = OptionalNode::new(from);
            self.heap.push(Reverse((distance, node)));
            return Some(GraphEvent::Improve { node, distance });
        }

        loop {
            if let Some((u, i)) = self.current {
                if i < self.graph.degree_of(u) {
                    self.current = Some((u, i + 1));
                    let (v, w) = self.graph.ith_neighbor(u, i);
                    self.metrics.count_comparison();
                    if self.settled.contains(&v) {
                        continue;
                    }

                    let Some(du) = self.result.distances[u as usize] else {
                        continue;
                    };
                    let candidate = du + w as Distance;
                    let best = self.result.distances[v as usize];
                    if best.is_none_or(|b| candidate < b) {
                        self.pending = Some((u, v, candidate));
                    }

                    return Some(GraphEvent::Relax {
                        from: u,
                        node: v,
                        candidate,
                        best,
                    });
                }
                self.current = None;
            }

            let Some(Reverse((distance, u))) = self.heap.pop() else {
                self.finished = true;
                return None;
            };

            // outdated heap entry
            if self.settled.insert(u) {
                continue;
            }

            self.current = Some((u, 0));
            self.order.push(u as usize);
            return Some(GraphEvent::Settle { node: u, distance });
        }
    }

    fn metrics(&self) -> Metrics {
        self.metrics
    }

    fn completed(&self) -> &[usize] {
        &self.order
    }

    fn is_finished(&self) -> bool {
        self.finished
    }
}

/// Any of the traversal machines, selected at runtime
pub enum Traverser<'a, G>
where
    G: IndexedAdjacencyList,
{
    BreadthFirst(Bfs<'a, G>),
    DepthFirst(Dfs<'a, G>),
    Dijkstra(Dijkstra<'a, G>),
}

macro_rules! dispatch_traverser {
    ($self:expr, $m:ident => $body:expr) => {
        match $self {
            Traverser::BreadthFirst($m) => $body,
            Traverser::DepthFirst($m) => $body,
            Traverser::Dijkstra($m) => $body,
        }
    };
}

impl<'a, G> Traverser<'a, G>
where
    G: IndexedAdjacencyList,
{
    /// Creates the machine for `kind`.
    ///
    /// # Errors
    /// Returns [`AlgoscopeError::InvalidNode`] if `start` is not a node of `graph`.
    pub fn new(kind: TraversalKind, graph: &'a G, start: Node) -> AlgoscopeResult<Self> {
        Ok(match kind {
            TraversalKind::BreadthFirst => Traverser::BreadthFirst(Bfs::new(graph, start)?),
            TraversalKind::DepthFirst => Traverser::DepthFirst(Dfs::new(graph, start)?),
            TraversalKind::Dijkstra => Traverser::Dijkstra(Dijkstra::new(graph, start)?),
        })
    }

    /// Distances of a Dijkstra run, `None` for BFS and DFS
    pub fn dijkstra_result(&self) -> Option<&DijkstraResult> {
        match self {
            Traverser::Dijkstra(d) => Some(d.result()),
            _ => None,
        }
    }
}

impl<G> StepMachine for Traverser<'_, G>
where
    G: IndexedAdjacencyList,
{
    type Event = GraphEvent;

    fn advance(&mut self) -> Option<GraphEvent> {
        dispatch_traverser!(self, m => m.advance())
    }

    fn metrics(&self) -> Metrics {
        dispatch_traverser!(self, m => m.metrics())
    }

    fn completed(&self) -> &[usize] {
        dispatch_traverser!(self, m => m.completed())
    }

    fn is_finished(&self) -> bool {
        dispatch_traverser!(self, m => m.is_finished())
    }
}

/// Stepwise traversals offered directly on graphs
pub trait Traversal: IndexedAdjacencyList + Sized {
    /// Returns a stepwise BFS starting at `start`.
    fn bfs(&self, start: Node) -> AlgoscopeResult<Bfs<'_, Self>> {
        Bfs::new(self, start)
    }

    /// Returns a stepwise DFS starting at `start`.
    fn dfs(&self, start: Node) -> AlgoscopeResult<Dfs<'_, Self>> {
        Dfs::new(self, start)
    }

    /// Returns a stepwise Dijkstra run starting at `start`.
    fn dijkstra(&self, start: Node) -> AlgoscopeResult<Dijkstra<'_, Self>> {
        Dijkstra::new(self, start)
    }

    /// Runs Dijkstra from `start` to completion and returns distances and predecessors.
    fn shortest_paths(&self, start: Node) -> AlgoscopeResult<DijkstraResult> {
        let mut dijkstra = self.dijkstra(start)?;
        dijkstra.run_to_completion();
        Ok(dijkstra.into_result())
    }
}

impl<G: IndexedAdjacencyList> Traversal for G {}

#[cfg(test)]
mod tests {
    use fxhash::FxHashSet;
    use itertools::Itertools;
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    use super::*;
    use crate::gens::RandomGraph;

    fn events<M: StepMachine>(machine: &mut M) -> Vec<M::Event> {
        machine.steps().map(|s| s.event).collect()
    }

    #[test]
    fn bfs_texts_on_ring() {
        let graph = AdjArray::from_edges(3, [(0, 1), (0, 2), (1, 2), (1, 0), (2, 0), (2, 1)]);
        let mut bfs = graph.bfs(0).unwrap();
        let texts = events(&mut bfs)
            .into_iter()
            .map(|e| format!("{} / {}", e.description(), e.detail()))
            .collect_vec();

        assert_eq!(texts, vec![
            "Visiting node 0 / Exploring neighbors",
            "Adding node 1 / New node discovered",
            "Adding node 2 / New node discovered",
            "Visiting node 1 / Exploring neighbors",
            "Visiting node 2 / Exploring neighbors",
        ]);
        assert_eq!(bfs.completed(), &[0, 1, 2]);
        assert_eq!(bfs.metrics().comparisons, 6);
    }

    #[test]
    fn dfs_follows_recursive_order() {
        let graph = AdjArray::from_edges(5, [(0, 1), (0, 3), (1, 2), (2, 0), (3, 4), (4, 1)]);
        let mut dfs = graph.dfs(0).unwrap();
        let visits = events(&mut dfs)
            .into_iter()
            .map(|e| match e {
                GraphEvent::Visit { node, order } => {
                    assert_eq!(order, TraversalKind::DepthFirst);
                    node
                }
                _ => panic!("unexpected event {e:?}"),
            })
            .collect_vec();

        assert_eq!(visits, vec![0, 1, 2, 3, 4]);
        assert_eq!(dfs.completed(), &[0, 1, 2, 3, 4]);
        assert_eq!(dfs.depth(), 0);
        assert!(dfs.did_visit_node(4));
    }

    #[test]
    fn traversals_visit_reachable_nodes_once() {
        let rng = &mut Pcg64Mcg::seed_from_u64(11);

        for n in [1, 10, 100, 500] {
            let graph = AdjArray::random_out_degree(rng, n, 4);

            // reference: plain reachability
            let mut reachable = vec![false; n as usize];
            let mut stack = vec![0];
            reachable[0] = true;
            while let Some(u) = stack.pop() {
                for v in graph.neighbors_of(u) {
                    if !reachable[v as usize] {
                        reachable[v as usize] = true;
                        stack.push(v);
                    }
                }
            }
            let expected = reachable.iter().filter(|&&r| r).count();

            let mut bfs = graph.bfs(0).unwrap();
            bfs.run_to_completion();
            assert_eq!(bfs.visit_order().len(), expected);
            assert!(bfs.visit_order().iter().all_unique());
            assert_eq!(
                bfs.metrics().comparisons,
                bfs.visit_order()
                    .iter()
                    .map(|&u| graph.degree_of(u) as u64)
                    .sum::<u64>()
            );

            let mut dfs: Dfs<_, FxHashSet<Node>> = Dfs::new(&graph, 0).unwrap();
            dfs.run_to_completion();
            assert_eq!(dfs.completed().len(), expected);
            assert!(dfs.completed().iter().all_unique());
            assert!(dfs.completed().iter().all(|&u| reachable[u]));
        }
    }

    #[test]
    fn dijkstra_texts() {
        let graph = AdjArray::from_edges(3, [(0, 1, 4), (0, 2, 1), (2, 1, 2)]);
        let mut dijkstra = graph.dijkstra(0).unwrap();
        let texts = events(&mut dijkstra)
            .into_iter()
            .map(|e| format!("{} / {}", e.description(), e.detail()))
            .collect_vec();

        assert_eq!(texts, vec![
            "Visiting node 0 / Current distance: 0",
            "Checking neighbor 1 / Distance through 0: 4 (Current best: Infinity)",
            "Updated distance to node 1 / New shortest distance: 4",
            "Checking neighbor 2 / Distance through 0: 1 (Current best: Infinity)",
            "Updated distance to node 2 / New shortest distance: 1",
            "Visiting node 2 / Current distance: 1",
            "Checking neighbor 1 / Distance through 2: 3 (Current best: 4)",
            "Updated distance to node 1 / New shortest distance: 3",
            "Visiting node 1 / Current distance: 3",
        ]);

        assert_eq!(dijkstra.distance_to(1), Some(3));
        assert_eq!(dijkstra.distance_to(3), None);
        assert_eq!(dijkstra.distance_to(Node::MAX), None);

        let result = dijkstra.into_result();
        assert_eq!(result.distances, vec![Some(0), Some(3), Some(1)]);
        assert_eq!(result.path_to(3), None);
        assert_eq!(result.path_to(1), Some(vec![0, 2, 1]));
    }

    #[test]
    fn dijkstra_matches_bellman_ford() {
        let rng = &mut Pcg64Mcg::seed_from_u64(12);

        for n in [2, 20, 200] {
            let graph = AdjArray::random_out_degree(rng, n, 4);
            let result = graph.shortest_paths(0).unwrap();

            let mut expected: Vec<Option<Distance>> = vec![None; n as usize];
            expected[0] = Some(0);
            for _ in 0..n {
                for WeightedEdge(u, v, w) in graph.edges(false) {
                    if let Some(du) = expected[u as usize] {
                        let cand = du + w as Distance;
                        if expected[v as usize].is_none_or(|dv| cand < dv) {
                            expected[v as usize] = Some(cand);
                        }
                    }
                }
            }

            assert_eq!(result.distances, expected);
            for v in graph.vertices() {
                match result.path_to(v) {
                    Some(path) => {
                        let length: Distance = path
                            .iter()
                            .tuple_windows()
                            .map(|(&a, &b)| graph.weight_of(a, b).unwrap() as Distance)
                            .sum();
                        assert_eq!(Some(length), expected[v as usize]);
                    }
                    None => assert!(expected[v as usize].is_none()),
                }
            }
        }
    }

    #[test]
    fn invalid_start_node() {
        let graph = AdjArray::from_edges(2, [(0, 1)]);
        for kind in [
            TraversalKind::BreadthFirst,
            TraversalKind::DepthFirst,
            TraversalKind::Dijkstra,
        ] {
            assert!(matches!(
                Traverser::new(kind, &graph, 2),
                Err(AlgoscopeError::InvalidNode { node: 2, n: 2 })
            ));
        }
    }

    #[test]
    fn traverser_dispatches() {
        let graph = AdjArrayUndir::from_edges(3, [(0, 1, 2), (1, 2, 2)]);
        let mut traverser = Traverser::new(TraversalKind::Dijkstra, &graph, 2).unwrap();
        traverser.run_to_completion();

        assert!(traverser.is_finished());
        assert_eq!(traverser.completed(), &[2, 1, 0]);
        assert_eq!(
            traverser.dijkstra_result().unwrap().distances,
            vec![Some(4), Some(2), Some(0)]
        );
    }
}
