/*!
# Viewer Session

A [`Session`] holds everything an interactive viewer shows: the selected algorithm, the array and
search target, the graph and its start node, the speed and the history of the last run.

Switching to another category replaces the inputs by the defaults of that category (searching
uses the sorted array). Running dispatches to the step machine of the selected algorithm and
records every step; the resulting (or, if cancelled, partially sorted) array is kept.
*/

use std::time::Duration;

use rand::SeedableRng;
use rand_pcg::Pcg64Mcg;

use crate::{
    AlgoscopeError, AlgoscopeResult,
    algo::*,
    config::VisualizerConfig,
    gens::{GraphGenerator, NumNodesGen, Ring, WeightsGen},
    io::parse_custom_array,
    prelude::*,
    runner::{MAX_DELAY_MS, RunSummary, StepRunner},
};

/// Status lines shown before the first step
pub const READY: (&str, &str) = ("Ready to start", "Select an algorithm and press Start");

/// Final state of a run besides the step history
#[derive(Debug, Clone, PartialEq)]
pub enum RunOutcome {
    /// The array after sorting (or after the last executed step)
    Array(Vec<f64>),
    /// `None` if the search was cancelled before it finished
    Search(Option<SearchOutcome>),
    Traversal {
        /// Visited (BFS/DFS) or settled (Dijkstra) nodes in order
        completed: Vec<usize>,
        /// Distances from the start node; Dijkstra only
        distances: Option<Vec<Option<Distance>>>,
    },
}

/// Result of [`Session::run`]
#[derive(Debug, Clone, PartialEq)]
pub struct SessionRun {
    pub summary: RunSummary,
    pub outcome: RunOutcome,
}

/// State of an interactive viewer
#[derive(Debug, Clone)]
pub struct Session {
    config: VisualizerConfig,
    algorithm: Algorithm,
    array: Vec<f64>,
    target: f64,
    graph: AdjArray,
    start: Node,
    speed_ms: u64,
    history: Vec<StepRecord>,
    rng: Pcg64Mcg,
}

impl Default for Session {
    fn default() -> Self {
        let config = VisualizerConfig::default();
        let rng = Pcg64Mcg::from_rng(&mut rand::rng());
        Self::with_rng(config, rng)
    }
}

impl Session {
    /// Creates a session showing the first sorting algorithm.
    ///
    /// # Errors
    /// Returns [`AlgoscopeError::Config`] if `config` is invalid.
    pub fn new(config: VisualizerConfig) -> AlgoscopeResult<Self> {
        config.validate()?;
        let rng = match config.seed {
            Some(seed) => Pcg64Mcg::seed_from_u64(seed),
            None => Pcg64Mcg::from_rng(&mut rand::rng()),
        };
        Ok(Self::with_rng(config, rng))
    }

    fn with_rng(config: VisualizerConfig, mut rng: Pcg64Mcg) -> Self {
        let graph = Self::ring(&config, &mut rng);
        Self {
            algorithm: Category::Sorting.default_algorithm(),
            array: config.array.clone(),
            target: config.target,
            graph,
            start: config.start,
            speed_ms: config.speed_ms,
            history: Vec::new(),
            rng,
            config,
        }
    }

    fn ring(config: &VisualizerConfig, rng: &mut Pcg64Mcg) -> AdjArray {
        let edges = Ring::new()
            .nodes(config.ring_nodes)
            .weights(config.min_weight..=config.max_weight)
            .generate(rng);
        AdjArray::from_edges(config.ring_nodes, edges)
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    pub fn category(&self) -> Category {
        self.algorithm.category()
    }

    pub fn array(&self) -> &[f64] {
        &self.array
    }

    pub fn target(&self) -> f64 {
        self.target
    }

    pub fn graph(&self) -> &AdjArray {
        &self.graph
    }

    pub fn start(&self) -> Node {
        self.start
    }

    pub fn speed_ms(&self) -> u64 {
        self.speed_ms
    }

    /// Steps of the last run
    pub fn history(&self) -> &[StepRecord] {
        &self.history
    }

    /// Description and detail of the last executed step
    pub fn status(&self) -> (String, String) {
        match self.history.last() {
            Some(record) => (record.description.clone(), record.detail.clone()),
            None => (READY.0.to_string(), READY.1.to_string()),
        }
    }

    /// Selects `algorithm`; inputs are regenerated if the category changes
    pub fn select(&mut self, algorithm: Algorithm) {
        let changed = algorithm.category() != self.category();
        self.algorithm = algorithm;
        if changed {
            self.regenerate();
        } else {
            self.reset();
        }
    }

    /// Replaces the array by the parsed `text`, see [`parse_custom_array`].
    /// In the searching category the array is sorted so that every search accepts it.
    ///
    /// # Errors
    /// Returns [`AlgoscopeError::InvalidInput`] and leaves the session unchanged if `text` is not a
    /// comma separated list of numbers.
    pub fn apply_custom_input(&mut self, text: &str) -> AlgoscopeResult<()> {
        let mut values = parse_custom_array(text)?;
        if self.category() == Category::Searching {
            values.sort_by(f64::total_cmp);
        }
        self.array = values;
        self.reset();
        Ok(())
    }

    /// # Errors
    /// Returns [`AlgoscopeError::InvalidInput`] if `target` is not a finite number.
    pub fn set_target(&mut self, target: f64) -> AlgoscopeResult<()> {
        if !target.is_finite() {
            return Err(AlgoscopeError::invalid_input(format!(
                "target must be a finite number, got {target}"
            )));
        }
        self.target = target;
        self.reset();
        Ok(())
    }

    /// # Errors
    /// Returns [`AlgoscopeError::InvalidInput`] if `speed_ms` exceeds [`MAX_DELAY_MS`].
    pub fn set_speed_ms(&mut self, speed_ms: u64) -> AlgoscopeResult<()> {
        if speed_ms > MAX_DELAY_MS {
            return Err(AlgoscopeError::invalid_input(format!(
                "speed must be in 0..={MAX_DELAY_MS} ms, got {speed_ms}"
            )));
        }
        self.speed_ms = speed_ms;
        Ok(())
    }

    /// # Errors
    /// Returns [`AlgoscopeError::InvalidNode`] if `start` is not a node of the graph.
    pub fn set_start(&mut self, start: Node) -> AlgoscopeResult<()> {
        if !self.graph.has_node(start) {
            return Err(AlgoscopeError::invalid_node(
                start,
                self.graph.number_of_nodes(),
            ));
        }
        self.start = start;
        self.reset();
        Ok(())
    }

    /// Replaces the graph, e.g. by one read from an edge list; the start node falls back to `0`
    /// if it does not exist in the new graph.
    ///
    /// # Errors
    /// Returns [`AlgoscopeError::InvalidInput`] if `graph` has no nodes.
    pub fn set_graph(&mut self, graph: AdjArray) -> AlgoscopeResult<()> {
        if graph.is_empty() {
            return Err(AlgoscopeError::invalid_input("graph must have at least one node"));
        }
        if !graph.has_node(self.start) {
            self.start = 0;
        }
        self.graph = graph;
        self.reset();
        Ok(())
    }

    /// Clears the run history; inputs stay as they are
    pub fn reset(&mut self) {
        self.history.clear();
    }

    /// Restores the default inputs of the current category and draws a new graph
    pub fn regenerate(&mut self) {
        self.array = self.config.array.clone();
        if self.category() == Category::Searching {
            self.array.sort_by(f64::total_cmp);
        }
        self.target = self.config.target;
        self.graph = Self::ring(&self.config, &mut self.rng);
        self.start = self.config.start;
        self.reset();
    }

    /// Creates a runner with the session's speed
    pub fn runner(&self) -> StepRunner {
        StepRunner::new(Duration::from_millis(self.speed_ms))
    }

    /// Runs the selected algorithm with `runner`. Every step is handed to `sink` and recorded in
    /// the history, which is cleared first.
    ///
    /// # Errors
    /// Returns [`AlgoscopeError::Precondition`] if binary or jump search is selected and the array
    /// is not sorted.
    #[tracing::instrument(skip_all, fields(algorithm = self.algorithm.id()))]
    pub fn run<F>(&mut self, runner: &StepRunner, mut sink: F) -> AlgoscopeResult<SessionRun>
    where
        F: FnMut(&StepRecord),
    {
        self.reset();
        let history = &mut self.history;

        if let Some(kind) = self.algorithm.sort_kind() {
            let mut sorter = Sorter::new(kind, self.array.clone());
            let summary = runner.run(&mut sorter, |step, m| {
                let rec = step.record(m.completed());
                sink(&rec);
                history.push(rec);
            });
            self.array = sorter.into_inner();
            return Ok(SessionRun {
                summary,
                outcome: RunOutcome::Array(self.array.clone()),
            });
        }

        if let Some(kind) = self.algorithm.search_kind() {
            let mut searcher = Searcher::new(kind, self.array.clone(), self.target)?;
            let summary = runner.run(&mut searcher, |step, m| {
                let rec = step.record(m.completed());
                sink(&rec);
                history.push(rec);
            });
            return Ok(SessionRun {
                summary,
                outcome: RunOutcome::Search(searcher.outcome()),
            });
        }

        let kind = self
            .algorithm
            .traversal_kind()
            .ok_or_else(|| AlgoscopeError::invalid_input("algorithm has no step machine"))?;
        let mut traverser = Traverser::new(kind, &self.graph, self.start)?;
        let summary = runner.run(&mut traverser, |step, m| {
            let rec = step.record(m.completed());
            sink(&rec);
            history.push(rec);
        });

        Ok(SessionRun {
            summary,
            outcome: RunOutcome::Traversal {
                completed: traverser.completed().to_vec(),
                distances: traverser.dijkstra_result().map(|r| r.distances.clone()),
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;

    use super::*;
    use crate::runner::RunStatus;

    fn session() -> Session {
        Session::new(VisualizerConfig {
            speed_ms: 0,
            seed: Some(1),
            ..Default::default()
        })
        .unwrap()
    }

    #[test]
    fn starts_with_bubble_sort_on_demo_array() {
        let session = session();
        assert_eq!(session.algorithm(), Algorithm::Bubble);
        assert_eq!(session.array().len(), 14);
        assert_eq!(session.array()[0], 15.0);
        assert_eq!(session.target(), 15.0);
        assert_eq!(session.graph().number_of_nodes(), 8);
        assert_eq!(session.graph().number_of_edges(), 16);
        assert_eq!(session.status().0, "Ready to start");
    }

    #[test]
    fn switching_category_regenerates_inputs() {
        let mut session = session();
        session.apply_custom_input("3, 1, 2").unwrap();

        session.select(Algorithm::Quick);
        assert_eq!(session.array(), &[3.0, 1.0, 2.0]);

        session.select(Algorithm::Binary);
        assert!(session.array().is_sorted());
        assert_eq!(session.array().len(), 14);

        session.apply_custom_input("9, 4, 7").unwrap();
        assert_eq!(session.array(), &[4.0, 7.0, 9.0]);
    }

    #[test]
    fn invalid_custom_input_keeps_state() {
        let mut session = session();
        let before = session.array().to_vec();

        for text in ["", "1, x", ",,"] {
            assert!(matches!(
                session.apply_custom_input(text),
                Err(AlgoscopeError::InvalidInput(_))
            ));
        }
        assert_eq!(session.array(), before.as_slice());
    }

    #[test]
    fn run_sorting_records_history() {
        let mut session = session();
        let mut seen = 0;
        let run = session
            .run(&StepRunner::instant(), |_| seen += 1)
            .unwrap();

        assert!(run.summary.is_completed());
        assert_eq!(seen, run.summary.steps);
        assert_eq!(session.history().len(), run.summary.steps);
        assert_eq!(session.history()[0].description, "Comparing 15 and 8");
        assert!(session.array().is_sorted());
        assert_eq!(run.outcome, RunOutcome::Array(session.array().to_vec()));
        assert_eq!(run.summary.metrics.comparisons, 14 * 13 / 2);
    }

    #[test]
    fn cancelled_run_keeps_partial_array() {
        let mut session = session();
        session.select(Algorithm::Insertion);

        let runner = StepRunner::instant();
        let cancel = runner.cancel_flag();
        let mut steps = 0;
        let run = session
            .run(&runner, |_| {
                steps += 1;
                if steps == 10 {
                    cancel.cancel();
                }
            })
            .unwrap();

        assert_eq!(run.summary.status, RunStatus::Cancelled);
        assert_eq!(session.history().len(), 10);
        assert!(!session.array().is_sorted());

        let mut expected = demo_sorted();
        let mut actual = session.array().to_vec();
        actual.sort_by(f64::total_cmp);
        expected.sort_by(f64::total_cmp);
        assert_eq!(actual, expected);
    }

    fn demo_sorted() -> Vec<f64> {
        crate::gens::sorted_demo_array()
    }

    #[test]
    fn run_searches() {
        let mut session = session();
        for algo in [Algorithm::Linear, Algorithm::Binary, Algorithm::Jump] {
            session.select(algo);
            let run = session.run(&StepRunner::instant(), |_| {}).unwrap();
            assert_eq!(run.outcome, RunOutcome::Search(Some(SearchOutcome::Found(5))));
            assert_eq!(session.status().0, "Found 15");
        }

        session.set_target(16.0).unwrap();
        let run = session.run(&StepRunner::instant(), |_| {}).unwrap();
        assert_eq!(run.outcome, RunOutcome::Search(Some(SearchOutcome::NotFound)));
    }

    #[test]
    fn run_traversals_on_ring() {
        let mut session = session();
        for algo in [Algorithm::Bfs, Algorithm::Dfs, Algorithm::Dijkstra] {
            session.select(algo);
            let run = session.run(&StepRunner::instant(), |_| {}).unwrap();
            let RunOutcome::Traversal {
                completed,
                distances,
            } = run.outcome
            else {
                panic!("expected traversal outcome");
            };

            assert_eq!(completed.iter().sorted().copied().collect_vec(), (0..8).collect_vec());
            assert_eq!(distances.is_some(), algo == Algorithm::Dijkstra);
            if let Some(distances) = distances {
                assert_eq!(distances[0], Some(0));
                assert!(distances.iter().all(Option::is_some));
            }
        }
    }

    #[test]
    fn setters_validate() {
        let mut session = session();
        assert!(session.set_speed_ms(2000).is_ok());
        assert!(session.set_speed_ms(2001).is_err());
        assert!(matches!(
            session.set_start(8),
            Err(AlgoscopeError::InvalidNode { node: 8, n: 8 })
        ));

        session.set_start(7).unwrap();
        session
            .set_graph(AdjArray::from_edges(3, [(0, 1), (1, 2)]))
            .unwrap();
        assert_eq!(session.start(), 0);
        assert!(session.set_graph(AdjArray::new(0)).is_err());
    }

    #[test]
    fn non_finite_target_is_rejected() {
        let mut session = session();
        session.select(Algorithm::Binary);

        for target in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            assert!(matches!(
                session.set_target(target),
                Err(AlgoscopeError::InvalidInput(_))
            ));
        }
        assert_eq!(session.target(), 15.0);

        let run = session.run(&StepRunner::instant(), |_| {}).unwrap();
        assert_eq!(run.outcome, RunOutcome::Search(Some(SearchOutcome::Found(5))));
    }
}
