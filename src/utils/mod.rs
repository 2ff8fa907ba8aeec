/*!
# Utilities

Abstractions over [`Set`]s so that traversals can choose how visited nodes are stored,
and [`FromCapacity`] to construct them without knowing the concrete type.
*/

use std::{collections::HashSet, hash::RandomState};

use fxhash::{FxBuildHasher, FxHashSet};

pub mod set;

pub use set::{NodeSet, Set};

/// Helper trait for datastructure that can be initialized with capacity.
/// Can be interpreted as reserved space or guaranteed used space.
pub trait FromCapacity: Sized {
    /// Create a new instance with a given capacity
    fn from_capacity(capacity: usize) -> Self {
        Self::from_total_used_capacity(capacity, capacity)
    }

    /// Creates a new instance from the total capacity (ie. max-value for example) and the actual
    /// capacity that will be used (space-wise).
    ///
    /// If you only have one value as an upper bound, provide it as both arguments.
    fn from_total_used_capacity(total: usize, used: usize) -> Self;
}

impl FromCapacity for NodeSet {
    fn from_total_used_capacity(total: usize, _used: usize) -> Self {
        // Marks are indexed by node and thus need the full range
        Self::new(total as crate::NumNodes)
    }
}

impl<T> FromCapacity for HashSet<T, RandomState> {
    fn from_total_used_capacity(_total: usize, used: usize) -> Self {
        Self::with_capacity(used)
    }
}

impl<T> FromCapacity for FxHashSet<T> {
    fn from_total_used_capacity(_total: usize, used: usize) -> Self {
        Self::with_capacity_and_hasher(used, FxBuildHasher::default())
    }
}
