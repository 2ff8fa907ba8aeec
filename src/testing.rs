/// Every graph should behave like a map from `(u, v)` to the first weight added for that pair.
/// Undirected graphs store both orientations; loops once.
macro_rules! test_graph_ops {
    ($env:ident, $graph:ident, $undirected:literal) => {
        #[cfg(test)]
        mod $env {
            use std::collections::BTreeMap;

            use crate::prelude::*;
            use itertools::Itertools;
            use rand::{Rng, SeedableRng};
            use rand_pcg::Pcg64Mcg;

            /// Creates a list of `m` random weighted edges for nodes `0..n`, possibly with duplicates
            fn random_edges<R: Rng>(rng: &mut R, n: NumNodes, m: NumEdges) -> Vec<WeightedEdge> {
                (0..m)
                    .map(|_| {
                        WeightedEdge(
                            rng.random_range(0..n),
                            rng.random_range(0..n),
                            rng.random_range(1..20),
                        )
                    })
                    .collect_vec()
            }

            /// Reference model: first weight per (normalized if undirected) pair
            fn reference(edges: &[WeightedEdge]) -> BTreeMap<(Node, Node), Weight> {
                let mut map = BTreeMap::new();
                for &WeightedEdge(u, v, w) in edges {
                    let key = if $undirected { (u.min(v), u.max(v)) } else { (u, v) };
                    map.entry(key).or_insert(w);
                }
                map
            }

            #[test]
            fn graph_new() {
                for n in 1..50 {
                    let graph = <$graph>::new(n);

                    assert_eq!(graph.number_of_edges(), 0);
                    assert_eq!(graph.number_of_nodes(), n);
                    assert_eq!(graph.vertices().collect_vec(), (0..n).collect_vec());
                    assert!(graph.is_singleton_graph());
                    assert_eq!(<$graph>::is_undirected(), $undirected);
                }
            }

            #[test]
            fn adjacency_list() {
                let rng = &mut Pcg64Mcg::seed_from_u64(3);

                for n in [10 as NumNodes, 20, 50] {
                    for m in [n * 2, n * 5] {
                        for _ in 0..5 {
                            let edges = random_edges(rng, n, m as NumEdges);
                            let expected = reference(&edges);
                            let graph = <$graph>::from_edges(n, edges.iter());

                            assert_eq!(graph.number_of_nodes(), n);
                            assert_eq!(graph.number_of_edges() as usize, expected.len());

                            let stored = graph
                                .ordered_edges($undirected)
                                .into_iter()
                                .map(|WeightedEdge(u, v, w)| ((u, v), w))
                                .collect::<BTreeMap<_, _>>();
                            assert_eq!(stored, expected);

                            for (&(u, v), &w) in &expected {
                                assert_eq!(graph.weight_of(u, v), Some(w));
                                if $undirected {
                                    assert_eq!(graph.weight_of(v, u), Some(w));
                                }
                            }

                            for u in graph.vertices() {
                                assert_eq!(graph.degree_of(u) as usize, graph.neighbors_of(u).count());
                                for i in 0..graph.degree_of(u) {
                                    let (v, w) = graph.ith_neighbor(u, i);
                                    assert_eq!(graph.weight_of(u, v), Some(w));
                                }
                            }
                        }
                    }
                }
            }

            #[test]
            fn edge_editing() {
                let rng = &mut Pcg64Mcg::seed_from_u64(4);
                let n = 30;
                let mut graph = <$graph>::new(n);

                let edges = random_edges(rng, n, 200);
                let expected = reference(&edges);
                let mut seen = std::collections::BTreeSet::new();

                for &WeightedEdge(u, v, w) in &edges {
                    let key = if $undirected { (u.min(v), u.max(v)) } else { (u, v) };
                    assert_eq!(graph.try_add_edge(u, v, w), !seen.insert(key));
                }

                assert_eq!(graph.number_of_edges() as usize, expected.len());
                assert!(graph.max_degree() > 0);
            }
        }
    };
}

pub(crate) use test_graph_ops;

/// Checks a sorting machine on random, sorted and reversed inputs of various sizes:
/// the result is a non-decreasing permutation of the input, every index ends up completed
/// and the machine stays finished.
macro_rules! test_sort_machine {
    ($env:ident, $kind:expr) => {
        mod $env {
            use crate::algo::*;
            use itertools::Itertools;
            use rand::{Rng, SeedableRng};
            use rand_pcg::Pcg64Mcg;

            fn check<T>(data: Vec<T>)
            where
                T: PartialOrd + Copy + std::fmt::Display + std::fmt::Debug,
            {
                let n = data.len();
                let mut expected = data.clone();
                expected.sort_by(|a, b| a.partial_cmp(b).unwrap());

                let mut sorter = Sorter::new($kind, data);
                let mut num_steps = 0;
                while let Some(event) = sorter.advance() {
                    assert!(event.highlighted().iter().all(|&i| i < n));
                    assert!(!event.description().is_empty());
                    num_steps += 1;
                }

                assert!(sorter.is_finished());
                assert!(sorter.advance().is_none());
                assert_eq!(sorter.as_slice(), expected.as_slice());
                assert_eq!(
                    sorter.completed().iter().copied().sorted().collect_vec(),
                    (0..n).collect_vec()
                );

                let metrics = sorter.metrics();
                assert!(num_steps as u64 >= metrics.swaps);
                if n > 1 {
                    assert!(metrics.comparisons > 0);
                }
            }

            #[test]
            fn sorts_random_integers() {
                let rng = &mut Pcg64Mcg::seed_from_u64(5);
                for n in [0, 1, 2, 3, 10, 57] {
                    for _ in 0..5 {
                        let data: Vec<i64> = (0..n).map(|_| rng.random_range(-50..50)).collect();
                        check(data);
                    }
                }
            }

            #[test]
            fn sorts_random_floats() {
                let rng = &mut Pcg64Mcg::seed_from_u64(6);
                for n in [1, 7, 33] {
                    let data: Vec<f64> = (0..n).map(|_| rng.random_range(-1.0..1.0)).collect();
                    check(data);
                }
            }

            #[test]
            fn sorts_sorted_and_reversed() {
                check((0..20i64).collect_vec());
                check((0..20i64).rev().collect_vec());
                check(vec![4i64; 9]);
                check(crate::gens::demo_array::<i64>());
            }
        }
    };
}

pub(crate) use test_sort_machine;

/// Checks a searching machine on random sorted arrays with duplicates: a found index holds the
/// target, a miss means the target is absent, and every non-empty search compares at least once.
macro_rules! test_search_machine {
    ($env:ident, $kind:expr) => {
        mod $env {
            use crate::algo::*;
            use rand::{Rng, SeedableRng};
            use rand_pcg::Pcg64Mcg;

            #[test]
            fn finds_present_and_absent_targets() {
                let rng = &mut Pcg64Mcg::seed_from_u64(7);

                for n in [0, 1, 2, 7, 100] {
                    for _ in 0..3 {
                        let mut data: Vec<i64> = (0..n).map(|_| rng.random_range(0..30)).collect();
                        data.sort_unstable();

                        for target in -1..=31 {
                            let mut searcher = Searcher::new($kind, data.clone(), target).unwrap();
                            let metrics = searcher.run_to_completion();

                            assert!(searcher.is_finished());
                            assert!(searcher.advance().is_none());
                            match searcher.outcome() {
                                Some(SearchOutcome::Found(index)) => {
                                    assert_eq!(data[index], target);
                                    assert_eq!(searcher.completed(), &[index]);
                                }
                                Some(SearchOutcome::NotFound) => {
                                    assert!(!data.contains(&target));
                                }
                                None => panic!("finished search without outcome"),
                            }

                            if n > 0 {
                                assert!(metrics.comparisons > 0);
                            }
                            assert_eq!(metrics.swaps, 0);
                        }
                    }
                }
            }

            #[test]
            fn searches_floats() {
                let data = vec![-1.5, 0.0, 0.25, 3.0, 8.5];
                let mut searcher = Searcher::new($kind, data, 3.0).unwrap();
                searcher.run_to_completion();
                assert_eq!(searcher.outcome(), Some(SearchOutcome::Found(3)));
            }

            #[test]
            fn nan_target_is_never_found() {
                for n in [0usize, 1, 5, 16] {
                    let data = (0..n).map(|i| i as f64).collect::<Vec<_>>();
                    let mut searcher = Searcher::new($kind, data, f64::NAN).unwrap();
                    searcher.run_to_completion();
                    assert_eq!(searcher.outcome(), Some(SearchOutcome::NotFound));
                    assert!(searcher.completed().is_empty());
                }
            }
        }
    };
}

pub(crate) use test_search_machine;
