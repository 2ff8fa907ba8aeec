use super::*;

/// Generator for the benchmark graph: every node `u` draws `1..=max_out_degree` targets
/// uniformly from `0..n` and connects to each with a random weight.
///
/// Targets may repeat or equal `u`, so the stream can contain loops and duplicates.
/// Graph construction ignores duplicates (see [`GraphFromScratch`]).
#[derive(Debug, Clone)]
pub struct RandomOutDegree {
    n: NumNodes,
    max_out_degree: NumNodes,
    weights: RangeInclusive<Weight>,
}

/// Upper bound of the number of out-neighbors drawn per node
pub const DEFAULT_MAX_OUT_DEGREE: NumNodes = 4;

impl Default for RandomOutDegree {
    fn default() -> Self {
        Self {
            n: 0,
            max_out_degree: DEFAULT_MAX_OUT_DEGREE,
            weights: DEFAULT_WEIGHTS,
        }
    }
}

impl RandomOutDegree {
    /// Creates a new generator with `n = 0`
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the upper bound on the number of drawn out-neighbors.
    /// ** Panics if `max_out_degree == 0` **
    pub fn max_out_degree(mut self, max_out_degree: NumNodes) -> Self {
        assert!(max_out_degree > 0);
        self.max_out_degree = max_out_degree;
        self
    }
}

impl NumNodesGen for RandomOutDegree {
    fn nodes(mut self, n: NumNodes) -> Self {
        self.n = n;
        self
    }
}

impl WeightsGen for RandomOutDegree {
    fn weights(mut self, range: RangeInclusive<Weight>) -> Self {
        assert_valid_weights(&range);
        self.weights = range;
        self
    }
}

impl GraphGenerator for RandomOutDegree {
    fn stream<R>(&self, rng: &mut R) -> impl Iterator<Item = WeightedEdge>
    where
        R: Rng,
    {
        let n = self.n;
        let max_out_degree = self.max_out_degree;
        let weights = self.weights.clone();

        (0..n).flat_map(move |u| {
            let degree = rng.random_range(1..=max_out_degree);
            (0..degree)
                .map(|_| {
                    let v = rng.random_range(0..n);
                    let w = rng.random_range(weights.clone());
                    WeightedEdge(u, v, w)
                })
                .collect::<Vec<_>>()
        })
    }
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    use super::*;

    #[test]
    fn out_degrees_are_bounded() {
        let rng = &mut Pcg64Mcg::seed_from_u64(5);

        for n in [1, 10, 100] {
            let edges = RandomOutDegree::new().nodes(n).generate(rng);
            let counts = edges.iter().counts_by(|e| e.0);

            assert_eq!(counts.len(), n as usize);
            assert!(counts.values().all(|&c| (1..=4).contains(&c)));
            assert!(edges.iter().all(|e| e.1 < n && DEFAULT_WEIGHTS.contains(&e.2)));
        }
    }

    #[test]
    fn graph_ignores_repeated_targets() {
        let rng = &mut Pcg64Mcg::seed_from_u64(6);
        let graph = AdjArray::random_out_degree(rng, 50, 4);

        assert_eq!(graph.number_of_nodes(), 50);
        assert!(graph.degrees().all(|d| (1..=4).contains(&d)));
        for u in graph.vertices() {
            assert!(graph.neighbors_of(u).all_unique());
        }
    }
}
