/*!
# Sorting

Stepwise bubble, insertion, selection, quick and merge sort. Every machine owns a copy of the
input that always reflects the progress so far ([`BubbleSort::as_slice`] etc.) and can be
taken back with `into_inner`.

Every comparison between two elements is counted. Element exchanges are counted as swaps for
bubble, selection and quick sort; insertion sort shifts and merge sort writes elements instead.
*/

use std::{fmt::Display, ops::Range};

use smallvec::{SmallVec, smallvec};

use super::step::*;

/// Sorting algorithms that can run step by step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortKind {
    Bubble,
    Insertion,
    Selection,
    Quick,
    Merge,
}

/// What a single sorting step did
#[derive(Debug, Clone, PartialEq)]
pub enum SortEvent<T> {
    /// Bubble sort compared `data[index]` and `data[index + 1]` and swapped them if `swapped`
    Adjacent {
        index: usize,
        left: T,
        right: T,
        pass: usize,
        step: usize,
        swapped: bool,
    },
    /// Insertion sort picked up `key` from `index`
    Key { index: usize, key: T },
    /// Insertion sort moved `value` one position to the right, from `from` to `from + 1`
    Shift { from: usize, value: T, key: T },
    /// Insertion sort dropped `key` into its position `index`
    Place { index: usize, key: T },
    /// Selection sort compared `data[candidate]` with the current minimum `data[minimum]`
    ScanMinimum {
        minimum: usize,
        candidate: usize,
        min_value: T,
        value: T,
    },
    /// Selection sort moved the minimum of the unsorted part to `target`
    Swap {
        target: usize,
        source: usize,
        value: T,
    },
    /// Quick sort chose `data[index]` as pivot for `range`
    Pivot {
        index: usize,
        value: T,
        range: Range<usize>,
    },
    /// Quick sort compared `data[index]` with the pivot and moved it to `moved_to` if smaller
    Partition {
        index: usize,
        value: T,
        pivot: T,
        moved_to: Option<usize>,
    },
    /// Quick sort put the pivot to its final position `index`
    PivotPlaced { index: usize, pivot: T },
    /// Merge sort compared the heads of two runs and wrote the smaller one to `index`
    Merge {
        index: usize,
        left: T,
        right: T,
        written: T,
    },
    /// Merge sort copied the rest of a run into `range`
    MergeTail { range: Range<usize> },
}

impl<T: Display> Describe for SortEvent<T> {
    fn description(&self) -> String {
        match self {
            SortEvent::Adjacent { left, right, .. } => format!("Comparing {left} and {right}"),
            SortEvent::Key { key, .. } => format!("Current element: {key}"),
            SortEvent::Shift { value, .. } => format!("Shifting {value} right"),
            SortEvent::Place { key, index } => format!("Placing {key} at index {index}"),
            SortEvent::ScanMinimum {
                min_value, value, ..
            } => format!("Comparing {value} with current minimum {min_value}"),
            SortEvent::Swap { value, target, .. } => {
                format!("Swapping minimum {value} to index {target}")
            }
            SortEvent::Pivot { value, .. } => format!("Choosing pivot {value}"),
            SortEvent::Partition { value, pivot, .. } => {
                format!("Comparing {value} with pivot {pivot}")
            }
            SortEvent::PivotPlaced { pivot, index } => {
                format!("Pivot {pivot} placed at index {index}")
            }
            SortEvent::Merge { left, right, .. } => format!("Comparing {left} and {right}"),
            SortEvent::MergeTail { .. } => "Copying remaining elements".to_string(),
        }
    }

    fn detail(&self) -> String {
        match self {
            SortEvent::Adjacent { pass, step, .. } => format!("Pass {pass}, Step {step}"),
            SortEvent::Key { key, .. } => format!("Finding correct position for {key}"),
            SortEvent::Shift { value, key, .. } => format!("{value} is greater than {key}"),
            SortEvent::Place { key, .. } => format!("{key} is in position"),
            SortEvent::ScanMinimum { .. } => "Finding minimum element".to_string(),
            SortEvent::Swap { .. } => "Extending the sorted prefix".to_string(),
            SortEvent::Pivot { range, .. } => {
                format!("Partitioning indices {} to {}", range.start, range.end - 1)
            }
            SortEvent::Partition {
                value,
                moved_to: Some(target),
                ..
            } => format!("{value} is smaller, moving it to index {target}"),
            SortEvent::Partition { value, .. } => format!("{value} stays right of the pivot"),
            SortEvent::PivotPlaced { .. } => "Sorting left and right parts".to_string(),
            SortEvent::Merge { written, index, .. } => {
                format!("Writing {written} to index {index}")
            }
            SortEvent::MergeTail { range } => {
                format!("Indices {} to {}", range.start, range.end - 1)
            }
        }
    }

    fn highlighted(&self) -> SmallVec<[usize; 2]> {
        match self {
            SortEvent::Adjacent { index, .. } => smallvec![*index, *index + 1],
            SortEvent::Key { index, .. } | SortEvent::Place { index, .. } => smallvec![*index],
            SortEvent::Shift { from, .. } => smallvec![*from, *from + 1],
            SortEvent::ScanMinimum {
                minimum, candidate, ..
            } => smallvec![*minimum, *candidate],
            SortEvent::Swap { target, source, .. } => smallvec![*target, *source],
            SortEvent::Pivot { index, .. } | SortEvent::PivotPlaced { index, .. } => {
                smallvec![*index]
            }
            SortEvent::Partition {
                index,
                moved_to: Some(target),
                ..
            } => smallvec![*target, *index],
            SortEvent::Partition { index, .. } => smallvec![*index],
            SortEvent::Merge { index, .. } => smallvec![*index],
            SortEvent::MergeTail { range } => smallvec![range.start],
        }
    }
}

/// Shared state of all sorting machines
#[derive(Debug, Clone)]
struct SortState<T> {
    data: Vec<T>,
    metrics: Metrics,
    completed: Vec<usize>,
    finished: bool,
}

impl<T> SortState<T> {
    fn new(data: Vec<T>) -> Self {
        Self {
            data,
            metrics: Metrics::default(),
            completed: Vec::new(),
            finished: false,
        }
    }

    fn finish(&mut self) {
        self.finished = true;
        self.completed = (0..self.data.len()).collect();
    }

    fn len(&self) -> usize {
        self.data.len()
    }
}

macro_rules! impl_sort_machine {
    ($machine:ident) => {
        impl<T: PartialOrd + Copy> $machine<T> {
            fn restore_permutation(&mut self) {}
        }

        impl_sort_machine!($machine => restore_permutation);
    };
    ($machine:ident => $restore:ident) => {
        impl<T: PartialOrd + Copy> $machine<T> {
            /// Current state of the array. In the middle of a shift or merge an element may be
            /// held aside and another one shown twice.
            pub fn as_slice(&self) -> &[T] {
                &self.state.data
            }

            /// Returns the (possibly partially) sorted array, which is always a permutation of the
            /// input
            pub fn into_inner(mut self) -> Vec<T> {
                self.$restore();
                self.state.data
            }
        }

        impl<T: PartialOrd + Copy + Display> StepMachine for $machine<T> {
            type Event = SortEvent<T>;

            fn advance(&mut self) -> Option<SortEvent<T>> {
                if self.state.finished {
                    return None;
                }
                let event = self.step();
                if event.is_none() {
                    self.state.finish();
                }
                event
            }

            fn metrics(&self) -> Metrics {
                self.state.metrics
            }

            fn completed(&self) -> &[usize] {
                &self.state.completed
            }

            fn is_finished(&self) -> bool {
                self.state.finished
            }
        }
    };
}

/// Bubble sort without early exit: pass `i` compares all adjacent pairs up to `n - 1 - i`,
/// afterwards index `n - 1 - i` is final.
#[derive(Debug, Clone)]
pub struct BubbleSort<T> {
    state: SortState<T>,
    pass: usize,
    index: usize,
}

impl<T: PartialOrd + Copy> BubbleSort<T> {
    pub fn new(data: Vec<T>) -> Self {
        Self {
            state: SortState::new(data),
            pass: 0,
            index: 0,
        }
    }

    fn step(&mut self) -> Option<SortEvent<T>> {
        let n = self.state.len();
        if n < 2 || self.pass >= n - 1 {
            return None;
        }

        let j = self.index;
        let (left, right) = (self.state.data[j], self.state.data[j + 1]);
        let swapped = self.state.metrics.greater(&left, &right);
        if swapped {
            self.state.metrics.swap(&mut self.state.data, j, j + 1);
        }

        let event = SortEvent::Adjacent {
            index: j,
            left,
            right,
            pass: self.pass + 1,
            step: j + 1,
            swapped,
        };

        self.index += 1;
        if self.index >= n - 1 - self.pass {
            self.state.completed.push(n - 1 - self.pass);
            self.pass += 1;
            self.index = 0;
        }

        Some(event)
    }
}

impl_sort_machine!(BubbleSort);

#[derive(Debug, Clone, Copy)]
enum InsertionPhase<T> {
    PickKey { index: usize },
    Sink { index: usize, hole: usize, key: T },
}

/// Insertion sort: picks up `data[i]` and shifts larger elements of the sorted prefix to the
/// right, one element per step, until the key can be placed.
#[derive(Debug, Clone)]
pub struct InsertionSort<T> {
    state: SortState<T>,
    phase: InsertionPhase<T>,
}

impl<T: PartialOrd + Copy> InsertionSort<T> {
    pub fn new(data: Vec<T>) -> Self {
        Self {
            state: SortState::new(data),
            phase: InsertionPhase::PickKey { index: 1 },
        }
    }

    fn step(&mut self) -> Option<SortEvent<T>> {
        match self.phase {
            InsertionPhase::PickKey { index } => {
                if index >= self.state.len() {
                    return None;
                }
                let key = self.state.data[index];
                self.phase = InsertionPhase::Sink {
                    index,
                    hole: index,
                    key,
                };
                Some(SortEvent::Key { index, key })
            }
            InsertionPhase::Sink { index, hole, key } => {
                if hole > 0 {
                    let value = self.state.data[hole - 1];
                    if self.state.metrics.greater(&value, &key) {
                        self.state.data[hole] = value;
                        self.phase = InsertionPhase::Sink {
                            index,
                            hole: hole - 1,
                            key,
                        };
                        return Some(SortEvent::Shift {
                            from: hole - 1,
                            value,
                            key,
                        });
                    }
                }

                self.state.data[hole] = key;
                self.state.completed.push(index);
                self.phase = InsertionPhase::PickKey { index: index + 1 };
                Some(SortEvent::Place { index: hole, key })
            }
        }
    }
}

impl<T: PartialOrd + Copy> InsertionSort<T> {
    /// Puts a key that is held aside back into its hole
    fn place_key(&mut self) {
        if let InsertionPhase::Sink { hole, key, .. } = self.phase {
            self.state.data[hole] = key;
        }
    }
}

impl_sort_machine!(InsertionSort => place_key);

#[derive(Debug, Clone, Copy)]
enum SelectionPhase {
    Scan {
        target: usize,
        candidate: usize,
        minimum: usize,
    },
    Swap {
        target: usize,
        minimum: usize,
    },
}

/// Selection sort: scans the unsorted suffix for its minimum, one comparison per step, and swaps
/// it to the front of the suffix if it is not already there.
#[derive(Debug, Clone)]
pub struct SelectionSort<T> {
    state: SortState<T>,
    phase: SelectionPhase,
}

impl<T: PartialOrd + Copy> SelectionSort<T> {
    pub fn new(data: Vec<T>) -> Self {
        Self {
            state: SortState::new(data),
            phase: SelectionPhase::Scan {
                target: 0,
                candidate: 1,
                minimum: 0,
            },
        }
    }

    fn next_pass(&mut self, target: usize) {
        self.state.completed.push(target);
        self.phase = SelectionPhase::Scan {
            target: target + 1,
            candidate: target + 2,
            minimum: target + 1,
        };
    }

    fn step(&mut self) -> Option<SortEvent<T>> {
        match self.phase {
            SelectionPhase::Scan {
                target,
                candidate,
                mut minimum,
            } => {
                if candidate >= self.state.len() {
                    return None;
                }

                let (min_value, value) = (self.state.data[minimum], self.state.data[candidate]);
                let event = SortEvent::ScanMinimum {
                    minimum,
                    candidate,
                    min_value,
                    value,
                };

                if self.state.metrics.greater(&min_value, &value) {
                    minimum = candidate;
                }

                if candidate + 1 < self.state.len() {
                    self.phase = SelectionPhase::Scan {
                        target,
                        candidate: candidate + 1,
                        minimum,
                    };
                } else if minimum != target {
                    self.phase = SelectionPhase::Swap { target, minimum };
                } else {
                    self.next_pass(target);
                }

                Some(event)
            }
            SelectionPhase::Swap { target, minimum } => {
                let value = self.state.data[minimum];
                self.state
                    .metrics
                    .swap(&mut self.state.data, target, minimum);
                self.next_pass(target);
                Some(SortEvent::Swap {
                    target,
                    source: minimum,
                    value,
                })
            }
        }
    }
}

impl_sort_machine!(SelectionSort);

#[derive(Debug, Clone)]
enum QuickPhase<T> {
    /// Take the next range from the stack
    Idle,
    /// Lomuto partition of `range` around `pivot = data[range.end - 1]`;
    /// `data[range.start..store]` holds the elements smaller than the pivot
    Partition {
        range: Range<usize>,
        pivot: T,
        store: usize,
        scan: usize,
    },
}

/// Quick sort with Lomuto partitioning and the last element of a range as pivot.
/// Pending ranges are kept on an explicit stack; the left part is processed first.
#[derive(Debug, Clone)]
pub struct QuickSort<T> {
    state: SortState<T>,
    stack: Vec<Range<usize>>,
    phase: QuickPhase<T>,
}

impl<T: PartialOrd + Copy> QuickSort<T> {
    pub fn new(data: Vec<T>) -> Self {
        let n = data.len();
        Self {
            state: SortState::new(data),
            stack: vec![0..n],
            phase: QuickPhase::Idle,
        }
    }

    fn step(&mut self) -> Option<SortEvent<T>> {
        match self.phase.clone() {
            QuickPhase::Idle => loop {
                let range = self.stack.pop()?;
                match range.len() {
                    0 => continue,
                    1 => self.state.completed.push(range.start),
                    _ => {
                        let index = range.end - 1;
                        let pivot = self.state.data[index];
                        self.phase = QuickPhase::Partition {
                            range: range.clone(),
                            pivot,
                            store: range.start,
                            scan: range.start,
                        };
                        return Some(SortEvent::Pivot {
                            index,
                            value: pivot,
                            range,
                        });
                    }
                }
            },
            QuickPhase::Partition {
                range,
                pivot,
                mut store,
                scan,
            } => {
                let last = range.end - 1;
                if scan < last {
                    let value = self.state.data[scan];
                    let mut moved_to = None;
                    if self.state.metrics.less(&value, &pivot) {
                        if store != scan {
                            self.state.metrics.swap(&mut self.state.data, store, scan);
                        }
                        moved_to = Some(store);
                        store += 1;
                    }
                    self.phase = QuickPhase::Partition {
                        range,
                        pivot,
                        store,
                        scan: scan + 1,
                    };
                    return Some(SortEvent::Partition {
                        index: scan,
                        value,
                        pivot,
                        moved_to,
                    });
                }

                if store != last {
                    self.state.metrics.swap(&mut self.state.data, store, last);
                }
                self.state.completed.push(store);
                self.stack.push(store + 1..range.end);
                self.stack.push(range.start..store);
                self.phase = QuickPhase::Idle;

                Some(SortEvent::PivotPlaced {
                    index: store,
                    pivot,
                })
            }
        }
    }
}

impl_sort_machine!(QuickSort);

#[derive(Debug, Clone)]
struct MergeRun<T> {
    left: Vec<T>,
    right: Vec<T>,
    i: usize,
    j: usize,
    /// next index of the array to write
    write: usize,
}

/// Top-down merge sort: a range is split at `lo + len / 2`, both halves are sorted and then
/// merged. The merges run in the order the recursion would finish them. The runs of a merge are
/// copied aside so that the array itself always shows the merged prefix.
#[derive(Debug, Clone)]
pub struct MergeSort<T> {
    state: SortState<T>,
    /// `(lo, mid, hi)` of every merge, in execution order
    plan: Vec<(usize, usize, usize)>,
    next: usize,
    run: Option<MergeRun<T>>,
}

fn plan_merges(lo: usize, hi: usize, plan: &mut Vec<(usize, usize, usize)>) {
    if hi - lo < 2 {
        return;
    }
    let mid = lo + (hi - lo) / 2;
    plan_merges(lo, mid, plan);
    plan_merges(mid, hi, plan);
    plan.push((lo, mid, hi));
}

impl<T: PartialOrd + Copy> MergeSort<T> {
    pub fn new(data: Vec<T>) -> Self {
        let mut plan = Vec::with_capacity(data.len().saturating_sub(1));
        plan_merges(0, data.len(), &mut plan);
        Self {
            state: SortState::new(data),
            plan,
            next: 0,
            run: None,
        }
    }

    /// Returns *true* if the current merge produces the final array
    fn is_last_level(&self) -> bool {
        self.next == self.plan.len()
    }

    /// Prepares the next pair of runs to merge or returns `false` if the array is sorted
    fn next_run(&mut self) -> bool {
        let Some(&(lo, mid, hi)) = self.plan.get(self.next) else {
            return false;
        };
        self.next += 1;
        self.run = Some(MergeRun {
            left: self.state.data[lo..mid].to_vec(),
            right: self.state.data[mid..hi].to_vec(),
            i: 0,
            j: 0,
            write: lo,
        });
        true
    }

    fn step(&mut self) -> Option<SortEvent<T>> {
        if self.run.is_none() && !self.next_run() {
            return None;
        }

        let last_level = self.is_last_level();
        let run = self.run.as_mut()?;

        if run.i < run.left.len() && run.j < run.right.len() {
            let (left, right) = (run.left[run.i], run.right[run.j]);
            let written = if self.state.metrics.less_or_equal(&left, &right) {
                run.i += 1;
                left
            } else {
                run.j += 1;
                right
            };

            let index = run.write;
            self.state.data[index] = written;
            run.write += 1;
            if last_level {
                self.state.completed.push(index);
            }

            return Some(SortEvent::Merge {
                index,
                left,
                right,
                written,
            });
        }

        let rest = if run.i < run.left.len() {
            &run.left[run.i..]
        } else {
            &run.right[run.j..]
        };
        let range = run.write..run.write + rest.len();
        self.state.data[range.clone()].copy_from_slice(rest);
        if last_level {
            self.state.completed.extend(range.clone());
        }
        self.run = None;

        Some(SortEvent::MergeTail { range })
    }
}

impl<T: PartialOrd + Copy> MergeSort<T> {
    /// Writes the not yet merged elements of the current run back behind the merged prefix
    fn flush_run(&mut self) {
        if let Some(run) = self.run.take() {
            let rest = run.left[run.i..].iter().chain(&run.right[run.j..]);
            for (slot, &x) in self.state.data[run.write..].iter_mut().zip(rest) {
                *slot = x;
            }
        }
    }
}

impl_sort_machine!(MergeSort => flush_run);

/// Any of the sorting machines, selected at runtime
#[derive(Debug, Clone)]
pub enum Sorter<T> {
    Bubble(BubbleSort<T>),
    Insertion(InsertionSort<T>),
    Selection(SelectionSort<T>),
    Quick(QuickSort<T>),
    Merge(MergeSort<T>),
}

macro_rules! dispatch_sorter {
    ($self:expr, $m:ident => $body:expr) => {
        match $self {
            Sorter::Bubble($m) => $body,
            Sorter::Insertion($m) => $body,
            Sorter::Selection($m) => $body,
            Sorter::Quick($m) => $body,
            Sorter::Merge($m) => $body,
        }
    };
}

impl<T: PartialOrd + Copy> Sorter<T> {
    pub fn new(kind: SortKind, data: Vec<T>) -> Self {
        match kind {
            SortKind::Bubble => Sorter::Bubble(BubbleSort::new(data)),
            SortKind::Insertion => Sorter::Insertion(InsertionSort::new(data)),
            SortKind::Selection => Sorter::Selection(SelectionSort::new(data)),
            SortKind::Quick => Sorter::Quick(QuickSort::new(data)),
            SortKind::Merge => Sorter::Merge(MergeSort::new(data)),
        }
    }

    pub fn as_slice(&self) -> &[T] {
        dispatch_sorter!(self, m => m.as_slice())
    }

    pub fn into_inner(self) -> Vec<T> {
        dispatch_sorter!(self, m => m.into_inner())
    }
}

impl<T: PartialOrd + Copy + Display> StepMachine for Sorter<T> {
    type Event = SortEvent<T>;

    fn advance(&mut self) -> Option<SortEvent<T>> {
        dispatch_sorter!(self, m => m.advance())
    }

    fn metrics(&self) -> Metrics {
        dispatch_sorter!(self, m => m.metrics())
    }

    fn completed(&self) -> &[usize] {
        dispatch_sorter!(self, m => m.completed())
    }

    fn is_finished(&self) -> bool {
        dispatch_sorter!(self, m => m.is_finished())
    }
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;

    use crate::testing::test_sort_machine;

    use super::*;

    test_sort_machine!(bubble_sort, SortKind::Bubble);
    test_sort_machine!(insertion_sort, SortKind::Insertion);
    test_sort_machine!(selection_sort, SortKind::Selection);
    test_sort_machine!(quick_sort, SortKind::Quick);
    test_sort_machine!(merge_sort, SortKind::Merge);

    #[test]
    fn bubble_sort_counts_every_pair() {
        for n in [0usize, 1, 2, 5, 14] {
            let data: Vec<i64> = (0..n as i64).rev().collect();
            let mut sort = BubbleSort::new(data);
            let metrics = sort.run_to_completion();

            assert_eq!(metrics.comparisons as usize, n * n.saturating_sub(1) / 2);
            assert_eq!(metrics.swaps as usize, n * n.saturating_sub(1) / 2);
        }
    }

    #[test]
    fn bubble_sort_texts_and_completion_order() {
        let mut sort = BubbleSort::new(vec![3.0, 1.0, 2.0]);
        let records = sort
            .steps()
            .map(|s| (s.event.description(), s.event.detail()))
            .collect::<Vec<_>>();

        assert_eq!(records, vec![
            ("Comparing 3 and 1".to_string(), "Pass 1, Step 1".to_string()),
            ("Comparing 3 and 2".to_string(), "Pass 1, Step 2".to_string()),
            ("Comparing 1 and 2".to_string(), "Pass 2, Step 1".to_string()),
        ]);
        assert_eq!(sort.completed(), &[0, 1, 2]);
    }

    #[test]
    fn bubble_sort_marks_suffix_after_each_pass() {
        let mut sort = BubbleSort::new(vec![4, 3, 2, 1]);
        for _ in 0..3 {
            sort.advance();
        }
        assert_eq!(sort.completed(), &[3]);
        for _ in 0..2 {
            sort.advance();
        }
        assert_eq!(sort.completed(), &[3, 2]);
        assert!(!sort.is_finished());
    }

    #[test]
    fn insertion_sort_steps() {
        let mut sort = InsertionSort::new(vec![2, 3, 1]);
        let descriptions = sort
            .steps()
            .map(|s| s.event.description())
            .collect::<Vec<_>>();

        assert_eq!(descriptions, vec![
            "Current element: 3",
            "Placing 3 at index 1",
            "Current element: 1",
            "Shifting 3 right",
            "Shifting 2 right",
            "Placing 1 at index 0",
        ]);
        // the comparison against an empty prefix is skipped
        assert_eq!(sort.metrics().comparisons, 3);
        assert_eq!(sort.metrics().swaps, 0);
    }

    #[test]
    fn selection_sort_swaps_only_when_needed() {
        let mut sort = SelectionSort::new(vec![1, 3, 2]);
        let events = sort.steps().map(|s| s.event).collect::<Vec<_>>();

        assert_eq!(events.len(), 4);
        assert_eq!(events[0].description(), "Comparing 3 with current minimum 1");
        assert_eq!(events[0].detail(), "Finding minimum element");
        assert_eq!(events[3], SortEvent::Swap {
            target: 1,
            source: 2,
            value: 2
        });
        assert_eq!(sort.metrics(), Metrics {
            comparisons: 3,
            swaps: 1
        });
    }

    #[test]
    fn quick_sort_places_pivots() {
        let mut sort = QuickSort::new(vec![3, 1, 2]);
        let events = sort.steps().map(|s| s.event).collect::<Vec<_>>();

        assert_eq!(events[0], SortEvent::Pivot {
            index: 2,
            value: 2,
            range: 0..3
        });
        assert!(events.contains(&SortEvent::PivotPlaced { index: 1, pivot: 2 }));
        assert_eq!(sort.as_slice(), &[1, 2, 3]);
        assert_eq!(sort.metrics().comparisons, 2);
    }

    #[test]
    fn merge_sort_marks_only_the_last_level() {
        let mut sort = MergeSort::new(vec![4, 3, 2, 1]);

        // merges (4, 3) and (2, 1), each followed by a tail copy
        for _ in 0..4 {
            assert!(sort.advance().is_some());
            assert!(sort.completed().is_empty());
        }
        assert_eq!(sort.as_slice(), &[3, 4, 1, 2]);

        assert_eq!(sort.advance(), Some(SortEvent::Merge {
            index: 0,
            left: 3,
            right: 1,
            written: 1
        }));
        assert_eq!(sort.completed(), &[0]);

        sort.run_to_completion();
        assert_eq!(sort.into_inner(), vec![1, 2, 3, 4]);
    }

    #[test]
    fn merge_sort_splits_top_down() {
        let mut plan = Vec::new();
        plan_merges(0, 5, &mut plan);
        assert_eq!(plan, vec![(0, 1, 2), (3, 4, 5), (2, 3, 5), (0, 2, 5)]);

        // 1 + 1 + 2 + 3 comparisons; splitting bottom-up would take 5
        let mut sort = MergeSort::new(vec![5, 4, 3, 2, 1]);
        let metrics = sort.run_to_completion();
        assert_eq!(metrics.comparisons, 7);
        assert_eq!(sort.into_inner(), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn sorter_dispatches() {
        let mut sorter = Sorter::new(SortKind::Quick, vec![5, 4, 3]);
        sorter.run_to_completion();
        assert!(sorter.is_finished());
        assert_eq!(sorter.into_inner(), vec![3, 4, 5]);
    }

    #[test]
    fn interrupted_sorts_return_permutations() {
        let data = crate::gens::demo_array::<i64>();
        let expected = data.iter().copied().sorted().collect_vec();

        for kind in [SortKind::Insertion, SortKind::Merge] {
            for steps in 0..40 {
                let mut sorter = Sorter::new(kind, data.clone());
                for _ in 0..steps {
                    sorter.advance();
                }
                let result = sorter.into_inner().into_iter().sorted().collect_vec();
                assert_eq!(result, expected, "{kind:?} after {steps} steps");
            }
        }
    }
}
