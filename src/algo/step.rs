/*!
# Step Machines

Every algorithm in this crate is an explicit state machine implementing [`StepMachine`]:
a call to [`StepMachine::advance`] performs exactly one discrete operation (one comparison,
one shift, one node visit, ...) and returns an event describing it. Animation, timing and
rendering are layered on top, see [`crate::runner`].

Machines count their work in [`Metrics`] and remember which indices (array positions or
nodes) are known to be final in [`StepMachine::completed`].

```
use algoscope::algo::*;

let mut sort = BubbleSort::new(vec![3, 1, 2]);
let steps: Vec<_> = sort.steps().map(|step| step.event.description()).collect();

assert_eq!(steps[0], "Comparing 3 and 1");
assert_eq!(sort.as_slice(), &[1, 2, 3]);
assert_eq!(sort.metrics().comparisons, 3);
```
*/

use std::{
    cmp::Ordering,
    time::{Duration, Instant},
};

use serde::Serialize;
use smallvec::SmallVec;

/// Comparison and swap counters of a run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Metrics {
    pub comparisons: u64,
    pub swaps: u64,
}

impl Metrics {
    /// Counts one comparison and returns `a > b`
    #[inline]
    pub fn greater<T: PartialOrd>(&mut self, a: &T, b: &T) -> bool {
        self.comparisons += 1;
        a > b
    }

    /// Counts one comparison and returns `a < b`
    #[inline]
    pub fn less<T: PartialOrd>(&mut self, a: &T, b: &T) -> bool {
        self.comparisons += 1;
        a < b
    }

    /// Counts one comparison and returns `a <= b`
    #[inline]
    pub fn less_or_equal<T: PartialOrd>(&mut self, a: &T, b: &T) -> bool {
        self.comparisons += 1;
        a <= b
    }

    /// Counts one comparison and returns the ordering of `a` and `b`,
    /// or `None` if they are incomparable (e.g. `NaN`)
    #[inline]
    pub fn three_way<T: PartialOrd>(&mut self, a: &T, b: &T) -> Option<Ordering> {
        self.comparisons += 1;
        a.partial_cmp(b)
    }

    /// Counts a comparison that is not between two values, e.g. a visited-check in a traversal
    #[inline]
    pub fn count_comparison(&mut self) {
        self.comparisons += 1;
    }

    /// Counts one swap and exchanges `data[i]` and `data[j]`
    #[inline]
    pub fn swap<T>(&mut self, data: &mut [T], i: usize, j: usize) {
        self.swaps += 1;
        data.swap(i, j);
    }
}

/// Human readable rendering of a step event
pub trait Describe {
    /// Headline of the step, e.g. `Comparing 3 and 1`
    fn description(&self) -> String;

    /// Secondary line, e.g. `Pass 1, Step 1`
    fn detail(&self) -> String;

    /// Indices (array positions or nodes) the step operates on
    fn highlighted(&self) -> SmallVec<[usize; 2]> {
        SmallVec::new()
    }
}

/// An algorithm that can be executed one discrete operation at a time
pub trait StepMachine {
    type Event: Describe;

    /// Executes exactly one operation and returns what happened.
    /// Returns `None` once the algorithm has finished; further calls keep returning `None`.
    fn advance(&mut self) -> Option<Self::Event>;

    /// Counters accumulated so far
    fn metrics(&self) -> Metrics;

    /// Indices known to be in their final state
    fn completed(&self) -> &[usize];

    /// Returns *true* if no further step will be produced
    fn is_finished(&self) -> bool;

    /// Executes all remaining steps and returns the final counters
    fn run_to_completion(&mut self) -> Metrics {
        while self.advance().is_some() {}
        self.metrics()
    }

    /// Returns an iterator over the remaining steps, each stamped with its index, the counters
    /// after the step and the time elapsed since the iterator was created.
    fn steps(&mut self) -> Steps<'_, Self>
    where
        Self: Sized,
    {
        Steps {
            machine: self,
            started: Instant::now(),
            index: 0,
        }
    }
}

/// A single executed step
#[derive(Debug, Clone)]
pub struct Step<E> {
    /// 0-based position of the step within the run
    pub index: usize,
    pub event: E,
    /// Counters after the step was executed
    pub metrics: Metrics,
    /// Time since the run started
    pub elapsed: Duration,
}

impl<E: Describe> Step<E> {
    /// Renders the step together with the machine's completed indices at that point
    pub fn record(&self, completed: &[usize]) -> StepRecord {
        StepRecord {
            index: self.index,
            description: self.event.description(),
            detail: self.event.detail(),
            highlighted: self.event.highlighted(),
            completed: completed.to_vec(),
            comparisons: self.metrics.comparisons,
            swaps: self.metrics.swaps,
            elapsed_ms: self.elapsed.as_secs_f64() * 1000.0,
        }
    }
}

/// Rendered step as kept in the run history and emitted as JSON
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StepRecord {
    pub index: usize,
    pub description: String,
    pub detail: String,
    pub highlighted: SmallVec<[usize; 2]>,
    pub completed: Vec<usize>,
    pub comparisons: u64,
    pub swaps: u64,
    pub elapsed_ms: f64,
}

/// Iterator over the steps of a [`StepMachine`], see [`StepMachine::steps`]
pub struct Steps<'a, M> {
    machine: &'a mut M,
    started: Instant,
    index: usize,
}

impl<M: StepMachine> Steps<'_, M> {
    /// Returns the machine, e.g. to inspect its state between steps
    pub fn machine(&self) -> &M {
        self.machine
    }
}

impl<M: StepMachine> Iterator for Steps<'_, M> {
    type Item = Step<M::Event>;

    fn next(&mut self) -> Option<Self::Item> {
        let event = self.machine.advance()?;
        let step = Step {
            index: self.index,
            event,
            metrics: self.machine.metrics(),
            elapsed: self.started.elapsed(),
        };
        self.index += 1;
        Some(step)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn metrics_count_every_helper() {
        let mut metrics = Metrics::default();
        assert!(metrics.greater(&2, &1));
        assert!(metrics.less(&1.5, &2.0));
        assert!(metrics.less_or_equal(&2, &2));
        assert_eq!(metrics.three_way(&1.0, &2.0), Some(Ordering::Less));
        assert_eq!(metrics.three_way(&f64::NAN, &1.0), None);
        metrics.count_comparison();

        let mut data = [1, 2, 3];
        metrics.swap(&mut data, 0, 2);

        assert_eq!(data, [3, 2, 1]);
        assert_eq!(metrics, Metrics {
            comparisons: 6,
            swaps: 1
        });
    }

    struct Countdown(u32, Vec<usize>);

    struct Tick(u32);

    impl Describe for Tick {
        fn description(&self) -> String {
            format!("Tick {}", self.0)
        }

        fn detail(&self) -> String {
            String::new()
        }
    }

    impl StepMachine for Countdown {
        type Event = Tick;

        fn advance(&mut self) -> Option<Tick> {
            if self.0 == 0 {
                return None;
            }
            self.0 -= 1;
            self.1.push(self.0 as usize);
            Some(Tick(self.0))
        }

        fn metrics(&self) -> Metrics {
            Metrics {
                comparisons: self.1.len() as u64,
                swaps: 0,
            }
        }

        fn completed(&self) -> &[usize] {
            &self.1
        }

        fn is_finished(&self) -> bool {
            self.0 == 0
        }
    }

    #[test]
    fn steps_are_indexed_and_recorded() {
        let mut machine = Countdown(3, Vec::new());
        let mut steps = machine.steps();

        let first = steps.next().unwrap();
        let record = first.record(steps.machine().completed());
        assert_eq!(record.index, 0);
        assert_eq!(record.description, "Tick 2");
        assert_eq!(record.completed, vec![2]);
        assert_eq!(record.comparisons, 1);

        assert_eq!(steps.map(|s| s.index).collect::<Vec<_>>(), vec![1, 2]);
        assert!(machine.is_finished());
        assert!(machine.advance().is_none());
    }

    #[test]
    fn records_serialize() {
        let record = Step {
            index: 4,
            event: Tick(1),
            metrics: Metrics::default(),
            elapsed: Duration::from_millis(250),
        }
        .record(&[0, 1]);

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["description"], "Tick 1");
        assert_eq!(json["completed"], serde_json::json!([0, 1]));
        assert_eq!(json["elapsed_ms"], 250.0);
    }
}
