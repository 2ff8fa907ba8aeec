/*!
Catalog of all algorithms with their display names, descriptions and asymptotic complexity.
*/

use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};

use super::*;

/// Algorithm families; the harness benchmarks one category at a time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Sorting,
    Searching,
    Graph,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Sorting, Category::Searching, Category::Graph];

    pub fn id(&self) -> &'static str {
        match self {
            Category::Sorting => "sorting",
            Category::Searching => "searching",
            Category::Graph => "graph",
        }
    }

    /// Algorithms of this category in catalog order
    pub fn algorithms(&self) -> impl Iterator<Item = Algorithm> + '_ {
        Algorithm::ALL
            .into_iter()
            .filter(move |algo| algo.category() == *self)
    }

    /// The algorithm a session selects when switching to this category
    pub fn default_algorithm(&self) -> Algorithm {
        match self {
            Category::Sorting => Algorithm::Bubble,
            Category::Searching => Algorithm::Linear,
            Category::Graph => Algorithm::Bfs,
        }
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.id())
    }
}

impl FromStr for Category {
    type Err = AlgoscopeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().to_ascii_lowercase();
        Category::ALL
            .into_iter()
            .find(|c| c.id() == s)
            .ok_or_else(|| AlgoscopeError::invalid_input(format!("unknown category `{s}`")))
    }
}

/// Asymptotic running time of an algorithm
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Complexity {
    Quadratic,
    Linearithmic,
    Logarithmic,
    SquareRoot,
    Linear,
    /// Graph traversal over `V` nodes and `E` edges
    NodesPlusEdges,
    /// Heap-based shortest paths
    NodesPlusEdgesLog,
}

/// `log2(n)`, or 0 for inputs too small to split
fn log2(n: usize) -> f64 {
    if n <= 1 { 0.0 } else { (n as f64).log2() }
}

/// Edge estimate of a benchmark graph with `n` nodes
fn estimated_edges(n: usize) -> usize {
    n * 3 / 2
}

impl Complexity {
    pub fn label(&self) -> &'static str {
        match self {
            Complexity::Quadratic => "O(n²)",
            Complexity::Linearithmic => "O(n log n)",
            Complexity::Logarithmic => "O(log n)",
            Complexity::SquareRoot => "O(√n)",
            Complexity::Linear => "O(n)",
            Complexity::NodesPlusEdges => "O(V + E)",
            Complexity::NodesPlusEdgesLog => "O((V + E) log V)",
        }
    }

    /// Number of abstract work units the complexity class predicts for input size `n`.
    /// Graphs with `n` nodes are assumed to have `⌊1.5n⌋` edges.
    pub fn theoretical_units(&self, n: usize) -> f64 {
        let x = n as f64;
        match self {
            Complexity::Quadratic => x * x,
            Complexity::Linearithmic => x * log2(n),
            Complexity::Logarithmic => log2(n),
            Complexity::SquareRoot => x.sqrt(),
            Complexity::Linear => x,
            Complexity::NodesPlusEdges => (n + estimated_edges(n)) as f64,
            Complexity::NodesPlusEdgesLog => (n + estimated_edges(n)) as f64 * log2(n),
        }
    }
}

impl Display for Complexity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Every algorithm the engine can run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    Bubble,
    Insertion,
    Selection,
    Quick,
    Merge,
    Linear,
    Binary,
    Jump,
    Bfs,
    Dfs,
    Dijkstra,
}

impl Algorithm {
    pub const ALL: [Algorithm; 11] = [
        Algorithm::Bubble,
        Algorithm::Insertion,
        Algorithm::Selection,
        Algorithm::Quick,
        Algorithm::Merge,
        Algorithm::Linear,
        Algorithm::Binary,
        Algorithm::Jump,
        Algorithm::Bfs,
        Algorithm::Dfs,
        Algorithm::Dijkstra,
    ];

    /// Short identifier used on the command line and in JSON
    pub fn id(&self) -> &'static str {
        match self {
            Algorithm::Bubble => "bubble",
            Algorithm::Insertion => "insertion",
            Algorithm::Selection => "selection",
            Algorithm::Quick => "quick",
            Algorithm::Merge => "merge",
            Algorithm::Linear => "linear",
            Algorithm::Binary => "binary",
            Algorithm::Jump => "jump",
            Algorithm::Bfs => "bfs",
            Algorithm::Dfs => "dfs",
            Algorithm::Dijkstra => "dijkstra",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Bubble => "Bubble Sort",
            Algorithm::Insertion => "Insertion Sort",
            Algorithm::Selection => "Selection Sort",
            Algorithm::Quick => "Quick Sort",
            Algorithm::Merge => "Merge Sort",
            Algorithm::Linear => "Linear Search",
            Algorithm::Binary => "Binary Search",
            Algorithm::Jump => "Jump Search",
            Algorithm::Bfs => "Breadth-First Search",
            Algorithm::Dfs => "Depth-First Search",
            Algorithm::Dijkstra => "Dijkstra's Algorithm",
        }
    }

    pub fn category(&self) -> Category {
        match self {
            Algorithm::Bubble
            | Algorithm::Insertion
            | Algorithm::Selection
            | Algorithm::Quick
            | Algorithm::Merge => Category::Sorting,
            Algorithm::Linear | Algorithm::Binary | Algorithm::Jump => Category::Searching,
            Algorithm::Bfs | Algorithm::Dfs | Algorithm::Dijkstra => Category::Graph,
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Algorithm::Bubble => {
                "Repeatedly steps through the list, compares adjacent elements and swaps them if they are in the wrong order."
            }
            Algorithm::Insertion => {
                "Builds the final sorted array one item at a time by repeatedly inserting a new element into the sorted portion of the array."
            }
            Algorithm::Selection => {
                "Repeatedly selects the smallest remaining element and swaps it to the front of the unsorted portion."
            }
            Algorithm::Quick => {
                "A divide-and-conquer algorithm that picks a pivot element and partitions the array around it."
            }
            Algorithm::Merge => {
                "A divide-and-conquer algorithm that recursively divides the array and merges sorted subarrays."
            }
            Algorithm::Linear => {
                "Sequentially checks each element in the list until a match is found or the whole list has been searched."
            }
            Algorithm::Binary => {
                "Efficiently finds an item in a sorted list by repeatedly dividing the search interval in half."
            }
            Algorithm::Jump => {
                "Jumps ahead in blocks of √n elements through a sorted list and scans the block that may contain the item."
            }
            Algorithm::Bfs => {
                "Traverses the graph level by level, visiting all neighbors of a vertex before moving to the next level."
            }
            Algorithm::Dfs => {
                "Traverses the graph by exploring as far as possible along each branch before backtracking."
            }
            Algorithm::Dijkstra => {
                "Finds shortest paths from a start vertex by always settling the closest unsettled vertex."
            }
        }
    }

    pub fn complexity(&self) -> Complexity {
        match self {
            Algorithm::Bubble | Algorithm::Insertion | Algorithm::Selection => {
                Complexity::Quadratic
            }
            Algorithm::Quick | Algorithm::Merge => Complexity::Linearithmic,
            Algorithm::Linear => Complexity::Linear,
            Algorithm::Binary => Complexity::Logarithmic,
            Algorithm::Jump => Complexity::SquareRoot,
            Algorithm::Bfs | Algorithm::Dfs => Complexity::NodesPlusEdges,
            Algorithm::Dijkstra => Complexity::NodesPlusEdgesLog,
        }
    }

    /// Returns *true* if the algorithm only accepts non-decreasing input
    pub fn requires_sorted_input(&self) -> bool {
        matches!(self, Algorithm::Binary | Algorithm::Jump)
    }

    pub fn sort_kind(&self) -> Option<SortKind> {
        Some(match self {
            Algorithm::Bubble => SortKind::Bubble,
            Algorithm::Insertion => SortKind::Insertion,
            Algorithm::Selection => SortKind::Selection,
            Algorithm::Quick => SortKind::Quick,
            Algorithm::Merge => SortKind::Merge,
            _ => return None,
        })
    }

    pub fn search_kind(&self) -> Option<SearchKind> {
        Some(match self {
            Algorithm::Linear => SearchKind::Linear,
            Algorithm::Binary => SearchKind::Binary,
            Algorithm::Jump => SearchKind::Jump,
            _ => return None,
        })
    }

    pub fn traversal_kind(&self) -> Option<TraversalKind> {
        Some(match self {
            Algorithm::Bfs => TraversalKind::BreadthFirst,
            Algorithm::Dfs => TraversalKind::DepthFirst,
            Algorithm::Dijkstra => TraversalKind::Dijkstra,
            _ => return None,
        })
    }
}

impl Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Algorithm {
    type Err = AlgoscopeError;

    /// Accepts the id (`bubble`) as well as the display name (`Bubble Sort`, `bubble-sort`)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase().replace(['-', '_'], " ");
        Algorithm::ALL
            .into_iter()
            .find(|algo| algo.id() == key || algo.name().to_ascii_lowercase().replace('-', " ") == key)
            .ok_or_else(|| AlgoscopeError::invalid_input(format!("unknown algorithm `{}`", s.trim())))
    }
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;

    use super::*;

    #[test]
    fn catalog_is_consistent() {
        assert!(Algorithm::ALL.iter().map(|a| a.id()).all_unique());

        for algo in Algorithm::ALL {
            let kinds = [
                algo.sort_kind().is_some(),
                algo.search_kind().is_some(),
                algo.traversal_kind().is_some(),
            ];
            assert_eq!(kinds.iter().filter(|&&k| k).count(), 1, "{algo}");

            let expected = match algo.category() {
                Category::Sorting => kinds[0],
                Category::Searching => kinds[1],
                Category::Graph => kinds[2],
            };
            assert!(expected, "{algo}");
            assert!(algo.category().algorithms().contains(&algo));
        }

        assert_eq!(Category::Sorting.algorithms().count(), 5);
        assert_eq!(Category::Searching.algorithms().count(), 3);
        assert_eq!(Category::Graph.algorithms().count(), 3);
    }

    #[test]
    fn parse_ids_and_names() {
        for algo in Algorithm::ALL {
            assert_eq!(algo.id().parse::<Algorithm>().unwrap(), algo);
            assert_eq!(algo.name().parse::<Algorithm>().unwrap(), algo);
        }
        assert_eq!("breadth-first-search".parse::<Algorithm>().unwrap(), Algorithm::Bfs);
        assert_eq!(" Bubble-Sort ".parse::<Algorithm>().unwrap(), Algorithm::Bubble);
        assert!("bogo".parse::<Algorithm>().is_err());

        assert_eq!("Graph".parse::<Category>().unwrap(), Category::Graph);
        assert!("trees".parse::<Category>().is_err());
    }

    #[test]
    fn theoretical_units() {
        assert_eq!(Complexity::Quadratic.theoretical_units(10), 100.0);
        assert_eq!(Complexity::Linearithmic.theoretical_units(8), 24.0);
        assert_eq!(Complexity::Logarithmic.theoretical_units(1024), 10.0);
        assert_eq!(Complexity::SquareRoot.theoretical_units(49), 7.0);
        assert_eq!(Complexity::Linear.theoretical_units(5), 5.0);
        assert_eq!(Complexity::NodesPlusEdges.theoretical_units(5), 12.0);
        assert_eq!(Complexity::NodesPlusEdgesLog.theoretical_units(4), 20.0);

        assert_eq!(Complexity::Logarithmic.theoretical_units(1), 0.0);
        assert_eq!(Complexity::Linearithmic.theoretical_units(0), 0.0);
    }

    #[test]
    fn serde_uses_ids() {
        assert_eq!(
            serde_json::to_string(&Algorithm::Dijkstra).unwrap(),
            "\"dijkstra\""
        );
        assert_eq!(
            serde_json::from_str::<Category>("\"searching\"").unwrap(),
            Category::Searching
        );
    }
}
