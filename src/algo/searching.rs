/*!
# Searching

Stepwise linear, binary and jump search. Every probe of an array element counts as one
comparison. Binary and jump search require non-decreasing input and refuse to start otherwise.

A search first *probes* an element and then, in a separate step, reports what it concluded
(found, move left/right, jump ahead). Linear search and the scan within a block of jump search
conclude directly with the next probe.
*/

use std::{cmp::Ordering, fmt::Display};

use smallvec::{SmallVec, smallvec};

use super::step::*;
use crate::{AlgoscopeError, AlgoscopeResult};

/// Searching algorithms that can run step by step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SearchKind {
    Linear,
    Binary,
    Jump,
}

/// Final result of a search
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchOutcome {
    Found(usize),
    NotFound,
}

impl SearchOutcome {
    pub fn index(&self) -> Option<usize> {
        match self {
            SearchOutcome::Found(i) => Some(*i),
            SearchOutcome::NotFound => None,
        }
    }
}

/// Which element a search looked at
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbeKind {
    /// next element of a sequential scan
    Sequential,
    /// middle of the remaining range
    Middle,
    /// last element of a block
    BlockEnd,
}

/// What a single searching step did
#[derive(Debug, Clone, PartialEq)]
pub enum SearchEvent<T> {
    Probe {
        index: usize,
        value: T,
        target: T,
        kind: ProbeKind,
    },
    /// Binary search discards everything left of and including `index`
    MoveRight { index: usize },
    /// Binary search discards everything right of and including `index`
    MoveLeft { index: usize },
    /// Jump search skips the block ending before `to`
    Jump { to: usize },
    Found { index: usize, target: T },
    NotFound { target: T },
}

impl<T: Display> Describe for SearchEvent<T> {
    fn description(&self) -> String {
        match self {
            SearchEvent::Probe {
                value,
                kind: ProbeKind::Sequential,
                ..
            } => format!("Checking {value}"),
            SearchEvent::Probe {
                value,
                kind: ProbeKind::Middle,
                ..
            } => format!("Checking middle element {value}"),
            SearchEvent::Probe {
                value,
                kind: ProbeKind::BlockEnd,
                ..
            } => format!("Checking block end {value}"),
            SearchEvent::MoveRight { .. } => "Moving right".to_string(),
            SearchEvent::MoveLeft { .. } => "Moving left".to_string(),
            SearchEvent::Jump { to } => format!("Jumping to index {to}"),
            SearchEvent::Found { target, .. } => format!("Found {target}"),
            SearchEvent::NotFound { target } => format!("{target} not found"),
        }
    }

    fn detail(&self) -> String {
        match self {
            SearchEvent::Probe { target, .. } => format!("Comparing with target {target}"),
            SearchEvent::MoveRight { .. } => "Target is larger than middle element".to_string(),
            SearchEvent::MoveLeft { .. } => "Target is smaller than middle element".to_string(),
            SearchEvent::Jump { .. } => "Target is larger than block end".to_string(),
            SearchEvent::Found { index, .. } => format!("Target found at index {index}"),
            SearchEvent::NotFound { .. } => "Target value not present in array".to_string(),
        }
    }

    fn highlighted(&self) -> SmallVec<[usize; 2]> {
        match self {
            SearchEvent::Probe { index, .. }
            | SearchEvent::MoveRight { index }
            | SearchEvent::MoveLeft { index }
            | SearchEvent::Found { index, .. } => smallvec![*index],
            SearchEvent::Jump { to } => smallvec![*to],
            SearchEvent::NotFound { .. } => SmallVec::new(),
        }
    }
}

#[derive(Debug, Clone)]
struct SearchState<T> {
    data: Vec<T>,
    target: T,
    metrics: Metrics,
    completed: Vec<usize>,
    outcome: Option<SearchOutcome>,
}

impl<T: PartialOrd + Copy> SearchState<T> {
    fn new(data: Vec<T>, target: T) -> Self {
        Self {
            data,
            target,
            metrics: Metrics::default(),
            completed: Vec::new(),
            outcome: None,
        }
    }

    fn probe(&mut self, index: usize, kind: ProbeKind) -> (SearchEvent<T>, Ordering) {
        let value = self.data[index];
        // an incomparable element never matches; the search moves past it
        let ordering = self
            .metrics
            .three_way(&value, &self.target)
            .unwrap_or(Ordering::Less);
        (
            SearchEvent::Probe {
                index,
                value,
                target: self.target,
                kind,
            },
            ordering,
        )
    }

    fn found(&mut self, index: usize) -> SearchEvent<T> {
        self.completed = vec![index];
        self.outcome = Some(SearchOutcome::Found(index));
        SearchEvent::Found {
            index,
            target: self.target,
        }
    }

    fn not_found(&mut self) -> SearchEvent<T> {
        self.outcome = Some(SearchOutcome::NotFound);
        SearchEvent::NotFound {
            target: self.target,
        }
    }
}

fn require_sorted<T: PartialOrd>(data: &[T], name: &str) -> AlgoscopeResult<()> {
    if data.is_sorted() {
        Ok(())
    } else {
        Err(AlgoscopeError::precondition(format!(
            "{name} requires the array to be sorted in non-decreasing order"
        )))
    }
}

macro_rules! impl_search_machine {
    ($machine:ident) => {
        impl<T: PartialOrd + Copy> $machine<T> {
            /// The searched array
            pub fn as_slice(&self) -> &[T] {
                &self.state.data
            }

            /// The searched value
            pub fn target(&self) -> T {
                self.state.target
            }

            /// Result of the search, `None` while it is still running
            pub fn outcome(&self) -> Option<SearchOutcome> {
                self.state.outcome
            }
        }

        impl<T: PartialOrd + Copy + Display> StepMachine for $machine<T> {
            type Event = SearchEvent<T>;

            fn advance(&mut self) -> Option<SearchEvent<T>> {
                if self.state.outcome.is_some() {
                    return None;
                }
                Some(self.step())
            }

            fn metrics(&self) -> Metrics {
                self.state.metrics
            }

            fn completed(&self) -> &[usize] {
                &self.state.completed
            }

            fn is_finished(&self) -> bool {
                self.state.outcome.is_some()
            }
        }
    };
}

/// Scans the array from left to right
#[derive(Debug, Clone)]
pub struct LinearSearch<T> {
    state: SearchState<T>,
    next: usize,
    hit: Option<usize>,
}

impl<T: PartialOrd + Copy> LinearSearch<T> {
    pub fn new(data: Vec<T>, target: T) -> Self {
        Self {
            state: SearchState::new(data, target),
            next: 0,
            hit: None,
        }
    }

    fn step(&mut self) -> SearchEvent<T> {
        if let Some(index) = self.hit {
            return self.state.found(index);
        }
        if self.next >= self.state.data.len() {
            return self.state.not_found();
        }

        let index = self.next;
        let (event, ordering) = self.state.probe(index, ProbeKind::Sequential);
        if ordering == Ordering::Equal {
            self.hit = Some(index);
        }
        self.next += 1;
        event
    }
}

impl_search_machine!(LinearSearch);

/// Halves the candidate range `lo..hi` with every probe
#[derive(Debug, Clone)]
pub struct BinarySearch<T> {
    state: SearchState<T>,
    lo: usize,
    hi: usize,
    /// Probed index and its relation to the target, reported in the next step
    pending: Option<(usize, Ordering)>,
}

impl<T: PartialOrd + Copy> BinarySearch<T> {
    /// Creates a binary search over `data`.
    ///
    /// # Errors
    /// Returns [`AlgoscopeError::Precondition`] if `data` is not sorted.
    pub fn new(data: Vec<T>, target: T) -> AlgoscopeResult<Self> {
        require_sorted(&data, "Binary search")?;
        let hi = data.len();
        Ok(Self {
            state: SearchState::new(data, target),
            lo: 0,
            hi,
            pending: None,
        })
    }

    fn step(&mut self) -> SearchEvent<T> {
        match self.pending.take() {
            Some((index, Ordering::Equal)) => self.state.found(index),
            Some((index, Ordering::Less)) => {
                self.lo = index + 1;
                SearchEvent::MoveRight { index }
            }
            Some((index, Ordering::Greater)) => {
                self.hi = index;
                SearchEvent::MoveLeft { index }
            }
            None if self.lo >= self.hi => self.state.not_found(),
            None => {
                let mid = self.lo + (self.hi - self.lo - 1) / 2;
                let (event, ordering) = self.state.probe(mid, ProbeKind::Middle);
                self.pending = Some((mid, ordering));
                event
            }
        }
    }
}

impl_search_machine!(BinarySearch);

#[derive(Debug, Clone, Copy)]
enum JumpPhase {
    /// Probe the last element of the block starting at `start`
    Block { start: usize },
    /// The block end at `end - 1` was smaller than the target
    Skip { end: usize },
    /// Scan the block `next..end` sequentially
    Scan { next: usize, end: usize },
    Hit { index: usize },
}

/// Jumps ahead in blocks of `⌊√n⌋` elements until a block end is not smaller than the target,
/// then scans that block sequentially.
#[derive(Debug, Clone)]
pub struct JumpSearch<T> {
    state: SearchState<T>,
    block: usize,
    phase: JumpPhase,
}

impl<T: PartialOrd + Copy> JumpSearch<T> {
    /// Creates a jump search over `data`.
    ///
    /// # Errors
    /// Returns [`AlgoscopeError::Precondition`] if `data` is not sorted.
    pub fn new(data: Vec<T>, target: T) -> AlgoscopeResult<Self> {
        require_sorted(&data, "Jump search")?;
        let block = data.len().isqrt().max(1);
        Ok(Self {
            state: SearchState::new(data, target),
            block,
            phase: JumpPhase::Block { start: 0 },
        })
    }

    /// Number of elements skipped per jump
    pub fn block_size(&self) -> usize {
        self.block
    }

    fn step(&mut self) -> SearchEvent<T> {
        let n = self.state.data.len();
        match self.phase {
            JumpPhase::Hit { index } => self.state.found(index),
            JumpPhase::Block { start } if start >= n => self.state.not_found(),
            JumpPhase::Block { start } => {
                let end = (start + self.block).min(n);
                let (event, ordering) = self.state.probe(end - 1, ProbeKind::BlockEnd);
                self.phase = match ordering {
                    Ordering::Equal => JumpPhase::Hit { index: end - 1 },
                    Ordering::Less => JumpPhase::Skip { end },
                    Ordering::Greater => JumpPhase::Scan { next: start, end: end - 1 },
                };
                event
            }
            JumpPhase::Skip { end } => {
                self.phase = JumpPhase::Block { start: end };
                SearchEvent::Jump { to: end }
            }
            JumpPhase::Scan { next, end } => {
                if next >= end {
                    return self.state.not_found();
                }
                let (event, ordering) = self.state.probe(next, ProbeKind::Sequential);
                self.phase = match ordering {
                    Ordering::Equal => JumpPhase::Hit { index: next },
                    // passed the position the target would have
                    Ordering::Greater => JumpPhase::Scan { next: end, end },
                    Ordering::Less => JumpPhase::Scan {
                        next: next + 1,
                        end,
                    },
                };
                event
            }
        }
    }
}

impl_search_machine!(JumpSearch);

/// Any of the searching machines, selected at runtime
#[derive(Debug, Clone)]
pub enum Searcher<T> {
    Linear(LinearSearch<T>),
    Binary(BinarySearch<T>),
    Jump(JumpSearch<T>),
}

macro_rules! dispatch_searcher {
    ($self:expr, $m:ident => $body:expr) => {
        match $self {
            Searcher::Linear($m) => $body,
            Searcher::Binary($m) => $body,
            Searcher::Jump($m) => $body,
        }
    };
}

impl<T: PartialOrd + Copy> Searcher<T> {
    /// Creates the machine for `kind`.
    ///
    /// # Errors
    /// Returns [`AlgoscopeError::Precondition`] if `kind` requires sorted input and `data` is not sorted.
    pub fn new(kind: SearchKind, data: Vec<T>, target: T) -> AlgoscopeResult<Self> {
        Ok(match kind {
            SearchKind::Linear => Searcher::Linear(LinearSearch::new(data, target)),
            SearchKind::Binary => Searcher::Binary(BinarySearch::new(data, target)?),
            SearchKind::Jump => Searcher::Jump(JumpSearch::new(data, target)?),
        })
    }

    pub fn as_slice(&self) -> &[T] {
        dispatch_searcher!(self, m => m.as_slice())
    }

    pub fn outcome(&self) -> Option<SearchOutcome> {
        dispatch_searcher!(self, m => m.outcome())
    }
}

impl<T: PartialOrd + Copy + Display> StepMachine for Searcher<T> {
    type Event = SearchEvent<T>;

    fn advance(&mut self) -> Option<SearchEvent<T>> {
        dispatch_searcher!(self, m => m.advance())
    }

    fn metrics(&self) -> Metrics {
        dispatch_searcher!(self, m => m.metrics())
    }

    fn completed(&self) -> &[usize] {
        dispatch_searcher!(self, m => m.completed())
    }

    fn is_finished(&self) -> bool {
        dispatch_searcher!(self, m => m.is_finished())
    }
}

#[cfg(test)]
mod tests {
    use crate::testing::test_search_machine;

    use super::*;

    test_search_machine!(linear_search, SearchKind::Linear);
    test_search_machine!(binary_search, SearchKind::Binary);
    test_search_machine!(jump_search, SearchKind::Jump);

    fn texts<M: StepMachine>(machine: &mut M) -> Vec<(String, String)> {
        machine
            .steps()
            .map(|s| (s.event.description(), s.event.detail()))
            .collect()
    }

    fn owned(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(a, b)| (a.to_string(), b.to_string()))
            .collect()
    }

    #[test]
    fn linear_search_texts() {
        let mut search = LinearSearch::new(vec![15.0, 8.0, 23.0], 8.0);
        assert_eq!(
            texts(&mut search),
            owned(&[
                ("Checking 15", "Comparing with target 8"),
                ("Checking 8", "Comparing with target 8"),
                ("Found 8", "Target found at index 1"),
            ])
        );
        assert_eq!(search.outcome(), Some(SearchOutcome::Found(1)));
        assert_eq!(search.completed(), &[1]);
        assert_eq!(search.metrics().comparisons, 2);
    }

    #[test]
    fn binary_search_texts() {
        let mut search = BinarySearch::new(vec![1, 8, 12, 15, 23], 15).unwrap();
        assert_eq!(
            texts(&mut search),
            owned(&[
                ("Checking middle element 12", "Comparing with target 15"),
                ("Moving right", "Target is larger than middle element"),
                ("Checking middle element 15", "Comparing with target 15"),
                ("Found 15", "Target found at index 3"),
            ])
        );

        let mut search = BinarySearch::new(vec![1, 8, 12], 2).unwrap();
        let last = texts(&mut search).pop().unwrap();
        assert_eq!(
            last,
            owned(&[("2 not found", "Target value not present in array")])[0]
        );
        assert_eq!(search.outcome(), Some(SearchOutcome::NotFound));
        assert!(search.completed().is_empty());
    }

    #[test]
    fn jump_search_jumps_blocks() {
        let data: Vec<i64> = (0..16).map(|x| 2 * x).collect();
        let mut search = JumpSearch::new(data, 21).unwrap();
        assert_eq!(search.block_size(), 4);

        let events = search.steps().map(|s| s.event).collect::<Vec<_>>();
        let jumps = events
            .iter()
            .filter(|e| matches!(e, SearchEvent::Jump { .. }))
            .count();

        assert_eq!(jumps, 2);
        assert_eq!(search.outcome(), Some(SearchOutcome::NotFound));
        // three block ends, then 16, 18 and 20 in front of the block end 22
        assert_eq!(search.metrics().comparisons, 6);
    }

    #[test]
    fn unsorted_input_is_rejected() {
        for kind in [SearchKind::Binary, SearchKind::Jump] {
            let err = Searcher::new(kind, vec![3, 1, 2], 1).unwrap_err();
            assert!(matches!(err, AlgoscopeError::Precondition(_)));
        }
        assert!(Searcher::new(SearchKind::Linear, vec![3, 1, 2], 1).is_ok());
    }

    #[test]
    fn empty_input() {
        for kind in [SearchKind::Linear, SearchKind::Binary, SearchKind::Jump] {
            let mut search = Searcher::new(kind, Vec::<i64>::new(), 1).unwrap();
            assert!(matches!(search.advance(), Some(SearchEvent::NotFound { .. })));
            assert!(search.advance().is_none());
            assert_eq!(search.metrics().comparisons, 0);
        }
    }
}
