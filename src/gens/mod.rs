/*!
# Input Generators

Builders for the inputs the algorithms run on:

- [`Ring`]: the small demo graph shown step by step. Nodes sit on a cycle and every node carries a
  random weight that is used for both of its outgoing edges.
- [`RandomOutDegree`]: the benchmark graph in which every node gets a random number of random
  out-neighbors.
- [`ArrayGenerator`]: random arrays (uniform, sorted, reversed, nearly sorted) and the demo array.

Graph generators follow a builder pattern:

1. Create a generator instance (e.g., `Ring::new()`).
2. Set parameters using trait methods (e.g., `.nodes(n)`).
3. Generate edges via `generate()` or `stream()`.

All graph types implementing `GraphFromScratch` and `GraphType` can use the [`RandomGraph`] trait
to build a whole graph instance in one call.
*/

use std::ops::RangeInclusive;

use rand::Rng;

use crate::prelude::*;

mod arrays;
mod ring;
mod sparse;

pub use arrays::*;
pub use ring::*;
pub use sparse::*;

/// Default range of random edge weights
pub const DEFAULT_WEIGHTS: RangeInclusive<Weight> = 1..=10;

/// Trait for generators that allow setting the number of nodes.
///
/// Allows a fluent interface when configuring generators.
pub trait NumNodesGen {
    /// Sets the number of nodes in the graph generator.
    fn nodes(self, n: NumNodes) -> Self;
}

/// Trait for generators that draw random edge weights.
pub trait WeightsGen {
    /// Sets the (inclusive) range weights are drawn from.
    /// ** Panics if the range is empty or contains `0` **
    fn weights(self, range: RangeInclusive<Weight>) -> Self;
}

/// General trait for a configurable random edge generator.
///
/// Types implementing this trait can produce a complete edge list
/// or a lazily-evaluated stream (iterator) of edges.
pub trait GraphGenerator {
    /// Generates a list of random edges.
    ///
    /// This collects the full result from `stream()` into a `Vec<WeightedEdge>` as default.
    fn generate<R>(&self, rng: &mut R) -> Vec<WeightedEdge>
    where
        R: Rng,
    {
        self.stream(rng).collect()
    }

    /// Creates a lazy iterator (stream) over generated edges.
    fn stream<R>(&self, rng: &mut R) -> impl Iterator<Item = WeightedEdge>
    where
        R: Rng;
}

/// Trait for building full graph instances from the provided generators.
pub trait RandomGraph: Sized {
    /// Creates the ring demo graph with `n` nodes and default weights.
    fn ring<R>(rng: &mut R, n: NumNodes) -> Self
    where
        R: Rng;

    /// Creates a graph with `n` nodes where every node gets `1..=max_out_degree` random
    /// out-neighbors.
    fn random_out_degree<R>(rng: &mut R, n: NumNodes, max_out_degree: NumNodes) -> Self
    where
        R: Rng;
}

impl<G> RandomGraph for G
where
    G: GraphFromScratch + GraphType,
{
    fn ring<R>(rng: &mut R, n: NumNodes) -> Self
    where
        R: Rng,
    {
        Self::from_edges(n, Ring::new().nodes(n).stream(rng))
    }

    fn random_out_degree<R>(rng: &mut R, n: NumNodes, max_out_degree: NumNodes) -> Self
    where
        R: Rng,
    {
        Self::from_edges(
            n,
            RandomOutDegree::new()
                .nodes(n)
                .max_out_degree(max_out_degree)
                .stream(rng)
                .filter(|e| Self::is_directed() || e.is_normalized()),
        )
    }
}

pub(crate) fn assert_valid_weights(range: &RangeInclusive<Weight>) {
    assert!(
        !range.is_empty() && *range.start() > 0,
        "weights must be drawn from a non-empty range of positive integers"
    );
}
