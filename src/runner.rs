/*!
# Stepwise Runner

[`StepRunner`] drives any [`StepMachine`] one step at a time and pauses for a configurable delay
between steps, so that each step can be rendered before the next one happens.

A run can be stopped through a [`CancelFlag`]. The flag is checked before every step and while
pausing, i.e. a cancel set from the step callback or from another thread takes effect within a few
milliseconds. Cancelling never interrupts a step halfway; the machine stays in a consistent state.

```
use std::time::Duration;
use algoscope::{algo::*, runner::*};

let mut sort = BubbleSort::new(vec![4, 3, 2, 1]);
let runner = StepRunner::new(Duration::ZERO);
let cancel = runner.cancel_flag();

let summary = runner.run(&mut sort, |step, _| {
    if step.index == 2 {
        cancel.cancel();
    }
});

assert_eq!(summary.status, RunStatus::Cancelled);
assert_eq!(summary.steps, 3);
```
*/

use std::{
    sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
    },
    thread,
    time::{Duration, Instant},
};

use serde::Serialize;
use tracing::{debug, info};

use crate::algo::{Describe, Metrics, Step, StepMachine};

/// Longest delay a viewer may choose between two steps
pub const MAX_DELAY_MS: u64 = 2000;

/// Pauses are split into slices of this length to notice a cancel early
const SLEEP_SLICE: Duration = Duration::from_millis(10);

/// Shared flag to stop a running [`StepRunner`]; clones refer to the same flag
#[derive(Debug, Clone, Default)]
pub struct CancelFlag(Arc<AtomicBool>);

impl CancelFlag {
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests the run to stop before its next step
    pub fn cancel(&self) {
        self.0.store(true, Ordering::Release);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }

    /// Clears the flag so that the next run can start
    pub fn reset(&self) {
        self.0.store(false, Ordering::Release);
    }
}

/// How a run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RunStatus {
    Completed,
    Cancelled,
}

/// Outcome of [`StepRunner::run`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunSummary {
    pub status: RunStatus,
    /// Number of executed steps
    pub steps: usize,
    pub metrics: Metrics,
    pub elapsed: Duration,
}

impl RunSummary {
    pub fn is_completed(&self) -> bool {
        self.status == RunStatus::Completed
    }
}

/// Executes step machines with a delay between consecutive steps
#[derive(Debug, Clone)]
pub struct StepRunner {
    delay: Duration,
    cancel: CancelFlag,
}

impl Default for StepRunner {
    fn default() -> Self {
        Self::new(Duration::from_millis(1000))
    }
}

impl StepRunner {
    /// Creates a runner pausing `delay` after every step
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            cancel: CancelFlag::new(),
        }
    }

    /// Creates a runner without any delay
    pub fn instant() -> Self {
        Self::new(Duration::ZERO)
    }

    /// Creates a runner from a speed setting in milliseconds per step
    pub fn from_speed_ms(speed_ms: u64) -> Self {
        Self::new(Duration::from_millis(speed_ms))
    }

    /// Uses `cancel` instead of the runner's own flag
    pub fn with_cancel_flag(mut self, cancel: CancelFlag) -> Self {
        self.cancel = cancel;
        self
    }

    /// Returns a handle to the flag that stops this runner
    pub fn cancel_flag(&self) -> CancelFlag {
        self.cancel.clone()
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Runs `machine` until it finishes or the run is cancelled.
    ///
    /// `on_step` receives every step together with the machine in its state right after the step.
    /// The cancel flag is checked before each step; a flag that is already set when the run starts
    /// results in a cancelled run without any step.
    #[tracing::instrument(skip_all, fields(delay_ms = self.delay.as_millis() as u64))]
    pub fn run<M, F>(&self, machine: &mut M, mut on_step: F) -> RunSummary
    where
        M: StepMachine,
        F: FnMut(&Step<M::Event>, &M),
    {
        let started = Instant::now();
        let mut steps = 0;

        let status = loop {
            if self.cancel.is_cancelled() {
                break RunStatus::Cancelled;
            }

            let Some(event) = machine.advance() else {
                break RunStatus::Completed;
            };

            let step = Step {
                index: steps,
                event,
                metrics: machine.metrics(),
                elapsed: started.elapsed(),
            };
            debug!(
                index = step.index,
                description = %step.event.description(),
                detail = %step.event.detail(),
                "step"
            );

            on_step(&step, machine);
            steps += 1;

            if !machine.is_finished() {
                self.pause();
            }
        };

        let summary = RunSummary {
            status,
            steps,
            metrics: machine.metrics(),
            elapsed: started.elapsed(),
        };
        info!(
            status = ?summary.status,
            steps = summary.steps,
            comparisons = summary.metrics.comparisons,
            swaps = summary.metrics.swaps,
            "run finished"
        );

        summary
    }

    fn pause(&self) {
        let deadline = Instant::now() + self.delay;
        loop {
            if self.cancel.is_cancelled() {
                return;
            }
            let remaining = deadline.saturating_duration_since(Instant::now());
            if remaining.is_zero() {
                return;
            }
            thread::sleep(remaining.min(SLEEP_SLICE));
        }
    }
}
