/*!
# Benchmarking Harness

Runs every algorithm of a [`Category`] to completion on a generated input and compares the measured
running time with the running time predicted by its complexity class.

- **Sorting**: all sorts get a copy of the same uniform random array.
- **Searching**: linear search scans the random array; binary and jump search run on a sorted copy.
  Sorting the copy is not part of the measurement.
- **Graph**: all traversals start at node `0` of a random graph with `min(size, graph_node_cap)`
  nodes in which every node has `1..=max_out_degree` random out-neighbors.

```
use algoscope::{algo::Category, bench::*};

let report = BenchmarkHarness::new()
    .size(200)
    .seed(7)
    .sort_by(SortKey::Comparisons)
    .run(Category::Searching)
    .unwrap();

assert_eq!(report.results.len(), 3);
assert!(report.results.iter().all(|r| r.correct));
assert_eq!(report.leader().unwrap().comparisons, report.results[0].comparisons);
```
*/

use std::{
    fmt::Display,
    ops::Range,
    str::FromStr,
    time::{Duration, Instant},
};

use rand::SeedableRng;
use rand_pcg::Pcg64Mcg;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::{
    AlgoscopeError, AlgoscopeResult,
    algo::*,
    gens::{ArrayGenerator, DEFAULT_MAX_OUT_DEGREE, RandomGraph},
    prelude::*,
};

/// Key by which the results of a report are ordered (ascending)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    /// Measured running time
    #[default]
    Time,
    Comparisons,
    /// Predicted work units of the complexity class
    Theoretical,
}

impl SortKey {
    pub fn id(&self) -> &'static str {
        match self {
            SortKey::Time => "time",
            SortKey::Comparisons => "comparisons",
            SortKey::Theoretical => "theoretical",
        }
    }
}

impl Display for SortKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.id())
    }
}

impl FromStr for SortKey {
    type Err = AlgoscopeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "time" => Ok(SortKey::Time),
            "comparisons" => Ok(SortKey::Comparisons),
            "theoretical" => Ok(SortKey::Theoretical),
            other => Err(AlgoscopeError::invalid_input(format!(
                "unknown sort key `{other}`, expected time, comparisons or theoretical"
            ))),
        }
    }
}

/// Measurement of a single algorithm
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BenchmarkResult {
    pub algorithm: Algorithm,
    pub name: &'static str,
    pub elapsed_ms: f64,
    pub comparisons: u64,
    pub swaps: u64,
    pub complexity: &'static str,
    /// Work units predicted by the complexity class for the input size
    pub theoretical: f64,
    /// `elapsed_ms / theoretical`; absent if the prediction is zero
    pub ratio: Option<f64>,
    /// Whether the algorithm produced the expected output
    pub correct: bool,
}

impl BenchmarkResult {
    fn new(
        algorithm: Algorithm,
        input_size: usize,
        metrics: Metrics,
        elapsed: Duration,
        correct: bool,
    ) -> Self {
        let complexity = algorithm.complexity();
        let theoretical = complexity.theoretical_units(input_size);
        let elapsed_ms = elapsed.as_secs_f64() * 1000.0;

        Self {
            algorithm,
            name: algorithm.name(),
            elapsed_ms,
            comparisons: metrics.comparisons,
            swaps: metrics.swaps,
            complexity: complexity.label(),
            theoretical,
            ratio: (theoretical > 0.0).then(|| elapsed_ms / theoretical),
            correct,
        }
    }
}

/// Results of one category, ordered by `sort_key`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub category: Category,
    /// Array length, or number of nodes for graph algorithms
    pub input_size: usize,
    pub sort_key: SortKey,
    pub results: Vec<BenchmarkResult>,
}

impl Report {
    /// Best result according to the sort key
    pub fn leader(&self) -> Option<&BenchmarkResult> {
        self.results.first()
    }

    fn sort(&mut self) {
        match self.sort_key {
            SortKey::Time => self
                .results
                .sort_by(|a, b| a.elapsed_ms.total_cmp(&b.elapsed_ms)),
            SortKey::Comparisons => self.results.sort_by_key(|r| r.comparisons),
            SortKey::Theoretical => self
                .results
                .sort_by(|a, b| a.theoretical.total_cmp(&b.theoretical)),
        }
    }
}

/// Configurable benchmark runner.
#[derive(Debug, Clone)]
pub struct BenchmarkHarness {
    size: usize,
    target: i64,
    seed: Option<u64>,
    sort_by: SortKey,
    values: Range<i64>,
    graph_node_cap: NumNodes,
    max_out_degree: NumNodes,
}

impl Default for BenchmarkHarness {
    fn default() -> Self {
        Self {
            size: 1000,
            target: 50,
            seed: None,
            sort_by: SortKey::Time,
            values: 0..100,
            graph_node_cap: 1000,
            max_out_degree: DEFAULT_MAX_OUT_DEGREE,
        }
    }
}

fn measure<M: StepMachine>(machine: &mut M) -> (Metrics, Duration) {
    let start = Instant::now();
    let metrics = machine.run_to_completion();
    (metrics, start.elapsed())
}

/// Number of nodes reachable from `start`, including `start`
fn count_reachable<G: AdjacencyList>(graph: &G, start: Node) -> usize {
    let mut seen = vec![false; graph.len()];
    let mut stack = vec![start];
    seen[start as usize] = true;
    let mut count = 1;

    while let Some(u) = stack.pop() {
        for v in graph.neighbors_of(u) {
            if !seen[v as usize] {
                seen[v as usize] = true;
                count += 1;
                stack.push(v);
            }
        }
    }
    count
}

impl BenchmarkHarness {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the array length (and the upper bound for the number of graph nodes).
    /// ** Panics if `size == 0` **
    pub fn size(mut self, size: usize) -> Self {
        assert!(size > 0);
        self.size = size;
        self
    }

    /// Sets the value searched for
    pub fn target(mut self, target: i64) -> Self {
        self.target = target;
        self
    }

    /// Makes the generated inputs reproducible
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn sort_by(mut self, key: SortKey) -> Self {
        self.sort_by = key;
        self
    }

    /// Sets the range array values are drawn from.
    /// ** Panics if the range is empty **
    pub fn values(mut self, values: Range<i64>) -> Self {
        assert!(!values.is_empty());
        self.values = values;
        self
    }

    /// ** Panics if `cap == 0` **
    pub fn graph_node_cap(mut self, cap: NumNodes) -> Self {
        assert!(cap > 0);
        self.graph_node_cap = cap;
        self
    }

    /// ** Panics if `max_out_degree == 0` **
    pub fn max_out_degree(mut self, max_out_degree: NumNodes) -> Self {
        assert!(max_out_degree > 0);
        self.max_out_degree = max_out_degree;
        self
    }

    fn rng(&self) -> Pcg64Mcg {
        match self.seed {
            Some(seed) => Pcg64Mcg::seed_from_u64(seed),
            None => Pcg64Mcg::from_rng(&mut rand::rng()),
        }
    }

    fn array(&self, rng: &mut Pcg64Mcg) -> Vec<i64> {
        ArrayGenerator::new()
            .len(self.size)
            .values(self.values.clone())
            .generate(rng)
    }

    /// Benchmarks every algorithm of `category`.
    ///
    /// # Errors
    /// Propagates errors of the algorithms; with generated inputs none is expected.
    #[tracing::instrument(skip(self), fields(size = self.size, seed = ?self.seed))]
    pub fn run(&self, category: Category) -> AlgoscopeResult<Report> {
        let mut rng = self.rng();

        let (input_size, results) = match category {
            Category::Sorting => (self.size, self.run_sorting(&mut rng)),
            Category::Searching => (self.size, self.run_searching(&mut rng)?),
            Category::Graph => {
                let n = self.size.min(self.graph_node_cap as usize) as NumNodes;
                (n as usize, self.run_graph(&mut rng, n)?)
            }
        };

        for result in &results {
            debug!(
                algorithm = result.algorithm.id(),
                elapsed_ms = result.elapsed_ms,
                comparisons = result.comparisons,
                correct = result.correct,
                "benchmarked"
            );
        }

        let mut report = Report {
            category,
            input_size,
            sort_key: self.sort_by,
            results,
        };
        report.sort();

        info!(
            category = %category,
            leader = report.leader().map(|r| r.name),
            "benchmark finished"
        );
        Ok(report)
    }

    /// Benchmarks all categories
    pub fn run_all(&self) -> AlgoscopeResult<Vec<Report>> {
        Category::ALL.iter().map(|&c| self.run(c)).collect()
    }

    fn run_sorting(&self, rng: &mut Pcg64Mcg) -> Vec<BenchmarkResult> {
        let data = self.array(rng);
        let mut expected = data.clone();
        expected.sort_unstable();

        Category::Sorting
            .algorithms()
            .filter_map(|algo| {
                let kind = algo.sort_kind()?;
                let mut sorter = Sorter::new(kind, data.clone());
                let (metrics, elapsed) = measure(&mut sorter);
                let correct = sorter.as_slice() == expected.as_slice();
                Some(BenchmarkResult::new(
                    algo, data.len(), metrics, elapsed, correct,
                ))
            })
            .collect()
    }

    fn run_searching(&self, rng: &mut Pcg64Mcg) -> AlgoscopeResult<Vec<BenchmarkResult>> {
        let data = self.array(rng);
        let mut sorted = data.clone();
        sorted.sort_unstable();

        let mut results = Vec::new();
        for algo in Category::Searching.algorithms() {
            let Some(kind) = algo.search_kind() else {
                continue;
            };
            let input = if algo.requires_sorted_input() {
                &sorted
            } else {
                &data
            };

            let mut searcher = Searcher::new(kind, input.clone(), self.target)?;
            let (metrics, elapsed) = measure(&mut searcher);
            let correct = match searcher.outcome() {
                Some(SearchOutcome::Found(i)) => input[i] == self.target,
                Some(SearchOutcome::NotFound) => !input.contains(&self.target),
                None => false,
            };
            results.push(BenchmarkResult::new(
                algo,
                input.len(),
                metrics,
                elapsed,
                correct,
            ));
        }
        Ok(results)
    }

    fn run_graph(
        &self,
        rng: &mut Pcg64Mcg,
        n: NumNodes,
    ) -> AlgoscopeResult<Vec<BenchmarkResult>> {
        let graph = AdjArray::random_out_degree(rng, n, self.max_out_degree);
        let reachable = count_reachable(&graph, 0);

        let mut results = Vec::new();
        for algo in Category::Graph.algorithms() {
            let Some(kind) = algo.traversal_kind() else {
                continue;
            };
            let mut traverser = Traverser::new(kind, &graph, 0)?;
            let (metrics, elapsed) = measure(&mut traverser);
            let correct = traverser.completed().len() == reachable;
            results.push(BenchmarkResult::new(
                algo,
                n as usize,
                metrics,
                elapsed,
                correct,
            ));
        }
        Ok(results)
    }
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;

    use super::*;

    #[test]
    fn sorting_report() {
        let report = BenchmarkHarness::new()
            .size(300)
            .seed(1)
            .sort_by(SortKey::Comparisons)
            .run(Category::Sorting)
            .unwrap();

        assert_eq!(report.category, Category::Sorting);
        assert_eq!(report.input_size, 300);
        assert_eq!(report.results.len(), 5);
        assert!(report.results.iter().all(|r| r.correct));
        assert!(
            report
                .results
                .iter()
                .tuple_windows()
                .all(|(a, b)| a.comparisons <= b.comparisons)
        );

        let bubble = report
            .results
            .iter()
            .find(|r| r.algorithm == Algorithm::Bubble)
            .unwrap();
        assert_eq!(bubble.comparisons, 300 * 299 / 2);
        assert_eq!(bubble.complexity, "O(n²)");
        assert_eq!(bubble.theoretical, 90000.0);
    }

    #[test]
    fn searching_uses_sorted_copy() {
        let report = BenchmarkHarness::new()
            .size(1000)
            .seed(2)
            .target(50)
            .sort_by(SortKey::Theoretical)
            .run(Category::Searching)
            .unwrap();

        assert!(report.results.iter().all(|r| r.correct));
        assert_eq!(
            report.results.iter().map(|r| r.algorithm).collect_vec(),
            vec![Algorithm::Binary, Algorithm::Jump, Algorithm::Linear]
        );
        assert_eq!(report.leader().unwrap().theoretical, 1000f64.log2());
    }

    #[test]
    fn graph_report_caps_nodes() {
        let report = BenchmarkHarness::new()
            .size(5000)
            .graph_node_cap(300)
            .seed(3)
            .run(Category::Graph)
            .unwrap();

        assert_eq!(report.input_size, 300);
        assert_eq!(report.results.len(), 3);
        assert!(report.results.iter().all(|r| r.correct));
        assert!(report.results.iter().all(|r| r.swaps == 0));
        assert_eq!(
            report
                .results
                .iter()
                .find(|r| r.algorithm == Algorithm::Dijkstra)
                .unwrap()
                .complexity,
            "O((V + E) log V)"
        );
    }

    #[test]
    fn seeded_runs_repeat_counters() {
        let harness = BenchmarkHarness::new().size(100).seed(9);
        let counters = |report: Report| {
            report
                .results
                .into_iter()
                .map(|r| (r.algorithm, r.comparisons, r.swaps))
                .sorted_by_key(|&(a, ..)| a.id())
                .collect_vec()
        };

        let first = harness.run_all().unwrap();
        let second = harness.run_all().unwrap();
        assert_eq!(first.len(), 3);
        for (a, b) in first.into_iter().zip(second) {
            assert_eq!(counters(a), counters(b));
        }
    }

    #[test]
    fn results_serialize() {
        let report = BenchmarkHarness::new()
            .size(10)
            .seed(4)
            .run(Category::Graph)
            .unwrap();
        let json = serde_json::to_value(&report).unwrap();

        assert_eq!(json["category"], "graph");
        assert_eq!(json["sort_key"], "time");
        assert!(json["results"][0]["elapsed_ms"].is_number());
        assert!(json["results"][0]["name"].is_string());
    }

    #[test]
    fn parse_sort_key() {
        assert_eq!("Comparisons".parse::<SortKey>().unwrap(), SortKey::Comparisons);
        assert!("speed".parse::<SortKey>().is_err());
    }
}
