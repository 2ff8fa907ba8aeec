/*!
# Generalized Sets

Traversals keep track of visited nodes through the [`Set`] trait so that the caller can pick the
data structure:
- dense node ranges -> [`NodeSet`] (default),
- sparse visits in huge graphs -> `HashSet` / `FxHashSet`.
*/

use std::{
    collections::HashSet,
    hash::{BuildHasher, Hash},
};

use crate::node::*;

/// Minimalist trait for a set-like collection.
pub trait Set<T> {
    /// Inserts `value` into the set.
    /// Returns `true` if the element was already present.
    fn insert(&mut self, value: T) -> bool;

    /// Inserts multiple elements from an iterator.
    fn insert_multiple<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = T>,
    {
        for value in iter {
            self.insert(value);
        }
    }

    /// Returns an iterator over all elements in the set.
    fn iter(&self) -> impl Iterator<Item = T> + '_
    where
        T: Clone;

    /// Returns `true` if the set contains `value`.
    fn contains(&self, value: &T) -> bool;

    /// Clears all elements from the set.
    fn clear(&mut self);

    /// Returns the number of elements in the set.
    fn len(&self) -> usize;

    /// Returns `true` if the set is empty.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T, S> Set<T> for HashSet<T, S>
where
    T: Eq + Hash,
    S: BuildHasher,
{
    fn insert(&mut self, value: T) -> bool {
        !HashSet::insert(self, value)
    }

    fn iter(&self) -> impl Iterator<Item = T> + '_
    where
        T: Clone,
    {
        HashSet::iter(self).cloned()
    }

    fn contains(&self, value: &T) -> bool {
        HashSet::contains(self, value)
    }

    fn clear(&mut self) {
        HashSet::clear(self);
    }

    fn len(&self) -> usize {
        HashSet::len(self)
    }
}

/// A set of nodes (0..n). Iteration yields nodes in insertion order.
#[derive(Debug, Clone, Default)]
pub struct NodeSet {
    data: Vec<Node>,
    present: Vec<bool>,
}

impl NodeSet {
    /// Creates an empty node-set of size `n`
    pub fn new(n: NumNodes) -> Self {
        Self {
            data: Vec::new(),
            present: vec![false; n as usize],
        }
    }

    /// Returns the inserted nodes in insertion order
    pub fn as_slice(&self) -> &[Node] {
        &self.data
    }
}

impl Set<Node> for NodeSet {
    fn insert(&mut self, value: Node) -> bool {
        let index = value as usize;
        if index >= self.present.len() {
            self.present.resize(index + 1, false);
        }

        if self.present[index] {
            return true;
        }

        self.present[index] = true;
        self.data.push(value);

        false
    }

    fn iter(&self) -> impl Iterator<Item = Node> + '_ {
        self.data.iter().copied()
    }

    fn contains(&self, value: &Node) -> bool {
        self.present.get(*value as usize).copied().unwrap_or(false)
    }

    fn clear(&mut self) {
        self.data.clear();
        self.present.iter_mut().for_each(|p| *p = false);
    }

    fn len(&self) -> usize {
        self.data.len()
    }
}

#[cfg(test)]
mod tests {
    use fxhash::FxHashSet;
    use itertools::Itertools;

    use super::*;
    use crate::utils::FromCapacity;

    fn check_set<S: Set<Node> + FromCapacity>() {
        let mut set = S::from_capacity(10);
        assert!(set.is_empty());

        assert!(!set.insert(4));
        assert!(!set.insert(7));
        assert!(set.insert(4));
        set.insert_multiple([1, 7, 9]);

        assert_eq!(set.len(), 4);
        assert!(set.contains(&9));
        assert!(!set.contains(&3));
        assert_eq!(set.iter().sorted().collect_vec(), vec![1, 4, 7, 9]);

        set.clear();
        assert!(set.is_empty());
        assert!(!set.contains(&4));
    }

    #[test]
    fn node_set() {
        check_set::<NodeSet>();

        let mut set = NodeSet::new(5);
        set.insert_multiple([3, 0, 4]);
        assert_eq!(set.as_slice(), &[3, 0, 4]);
    }

    #[test]
    fn hash_sets() {
        check_set::<HashSet<Node>>();
        check_set::<FxHashSet<Node>>();
    }
}
