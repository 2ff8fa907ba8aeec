use super::*;

/// Generator for the demo graph: nodes `0..n` on a cycle. Node `i` has edges to `i + 1` and `i - 1`
/// (modulo `n`), both weighted with a random weight drawn once per node.
///
/// Loops (`n == 1`) and repeated edges (`n == 2`) are skipped.
#[derive(Debug, Clone)]
pub struct Ring {
    n: NumNodes,
    weights: RangeInclusive<Weight>,
}

/// Number of nodes of the demo graph
pub const DEFAULT_RING_NODES: NumNodes = 8;

impl Default for Ring {
    fn default() -> Self {
        Self {
            n: DEFAULT_RING_NODES,
            weights: DEFAULT_WEIGHTS,
        }
    }
}

impl Ring {
    /// Creates a ring generator with the default number of nodes and weights
    pub fn new() -> Self {
        Self::default()
    }
}

impl NumNodesGen for Ring {
    fn nodes(mut self, n: NumNodes) -> Self {
        self.n = n;
        self
    }
}

impl WeightsGen for Ring {
    fn weights(mut self, range: RangeInclusive<Weight>) -> Self {
        assert_valid_weights(&range);
        self.weights = range;
        self
    }
}

impl GraphGenerator for Ring {
    fn stream<R>(&self, rng: &mut R) -> impl Iterator<Item = WeightedEdge>
    where
        R: Rng,
    {
        let n = self.n;
        let weights = self.weights.clone();
        (0..n).flat_map(move |u| {
            let w = rng.random_range(weights.clone());
            let next = (u + 1) % n;
            let prev = (u + n - 1) % n;

            let mut edges = Vec::with_capacity(2);
            if next != u {
                edges.push(WeightedEdge(u, next, w));
            }
            if prev != u && prev != next {
                edges.push(WeightedEdge(u, prev, w));
            }
            edges
        })
    }
}
