/*!
`algoscope` is an educational algorithm engine. It runs classic algorithms **one discrete step at a
time** so that every comparison, swap, shift or node visit can be shown, and separately benchmarks
the same algorithm families to compare measured running time with theoretical complexity.

# Algorithms

All algorithms are explicit state machines implementing [`algo::StepMachine`]:

- **Sorting**: bubble, insertion, selection, quick (Lomuto) and merge (top-down) sort,
- **Searching**: linear, binary and jump search,
- **Graph traversal**: breadth-first search, depth-first search and Dijkstra's shortest paths.

Each call to `advance()` performs one operation and returns a typed event that renders to a
description and a detail line, e.g. `Comparing 3 and 1` / `Pass 1, Step 1`. Machines count
comparisons and swaps and report which indices (or nodes) are completed.

# Graphs

We represent **nodes** as `u32` in the range `0..n` where `n` is the number of nodes in the graph.
For **edges**, we use the tuple-structs `Edge(Node, Node)` and `WeightedEdge(Node, Node, Weight)`.
See the [`repr`] module for the directed and undirected adjacency arrays.

# Usage

There are a few submodules you probably want to interact with:
- [`prelude`] includes definitions for nodes, edges, basic graph operations, and all graph representations,
- [`algo`] includes the step machines and the [`algo::Algorithm`] catalog, as well as traversal
  traits implemented on graphs itself (`graph.bfs(start_node)`),
- [`runner`] executes a machine with a delay between steps and supports cancellation,
- [`session`] keeps the state of an interactive viewer (selection, inputs, run history),
- [`bench`] benchmarks a whole algorithm family on generated inputs,
- [`gens`] and [`io`] create inputs: random arrays and graphs, custom arrays, and edge lists.

In most use-cases, `use algoscope::{prelude::*, algo::*};` suffices for your needs.

```
use algoscope::{algo::*, runner::StepRunner};

let mut sort = InsertionSort::new(vec![5, 3, 8, 1]);
let summary = StepRunner::instant().run(&mut sort, |_step, _machine| {});

assert!(summary.is_completed());
assert_eq!(sort.as_slice(), &[1, 3, 5, 8]);
```
*/

pub mod algo;
pub mod bench;
pub mod config;
pub mod edge;
pub mod error;
pub mod gens;
pub mod io;
pub mod node;
pub mod ops;
pub mod repr;
pub mod runner;
pub mod session;
pub(crate) mod testing;
pub mod utils;

pub use edge::*;
pub use error::*;
pub use node::*;

/// `algoscope::prelude` includes definitions for nodes and edges, all basic graph operation traits as well as all implemented representations.
pub mod prelude {
    pub use super::{edge::*, node::*, ops::*, repr::*};
}
