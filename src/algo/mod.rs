/*!
# Algorithms

Every algorithm of this crate is available as a step machine (see [`StepMachine`]):
sorting, searching, and graph traversals. All of them are re-exported at the top level of this
module, so you can simply do:
```rust
use algoscope::algo::*;
```
and gain access to the machines, their events and the [`Algorithm`] catalog.
Machines are iterators in disguise: [`StepMachine::steps`] consumes them lazily step by step.
*/

mod catalog;
mod searching;
mod sorting;
mod step;
mod traversal;

use crate::{AlgoscopeError, AlgoscopeResult, prelude::*, utils::*};

pub use catalog::*;
pub use searching::*;
pub use sorting::*;
pub use step::*;
pub use traversal::*;
