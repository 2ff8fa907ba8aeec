use std::ops::Range;

use num::{NumCast, Zero};
use rand::{Rng, seq::SliceRandom};

/// Array shown when the viewer starts
pub const DEFAULT_ARRAY: [i64; 14] = [15, 8, 23, 12, 34, 67, 8, 34, 56, 23, 1, 23, 12, 90];

/// Default search target for [`DEFAULT_ARRAY`]
pub const DEFAULT_TARGET: i64 = 15;

/// Order of a generated array
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ArrayShape {
    /// Independent uniform values
    #[default]
    Uniform,
    /// Non-decreasing
    Sorted,
    /// Non-increasing
    Reversed,
    /// Sorted, then roughly `len / 20` random pairs swapped
    NearlySorted,
}

/// Generator for random integer arrays.
///
/// ```
/// use algoscope::gens::*;
/// use rand::SeedableRng;
///
/// let rng = &mut rand_pcg::Pcg64Mcg::seed_from_u64(0);
/// let arr: Vec<i64> = ArrayGenerator::new().len(20).shape(ArrayShape::Sorted).generate(rng);
/// assert!(arr.is_sorted());
/// ```
#[derive(Debug, Clone)]
pub struct ArrayGenerator {
    len: usize,
    values: Range<i64>,
    shape: ArrayShape,
}

impl Default for ArrayGenerator {
    fn default() -> Self {
        Self {
            len: DEFAULT_ARRAY.len(),
            values: 0..100,
            shape: ArrayShape::Uniform,
        }
    }
}

impl ArrayGenerator {
    /// Creates a generator for uniform arrays of the demo length with values in `0..100`
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the number of elements
    pub fn len(mut self, len: usize) -> Self {
        self.len = len;
        self
    }

    /// Sets the (half-open) range values are drawn from.
    /// ** Panics if the range is empty **
    pub fn values(mut self, values: Range<i64>) -> Self {
        assert!(!values.is_empty());
        self.values = values;
        self
    }

    /// Sets the order of the generated array
    pub fn shape(mut self, shape: ArrayShape) -> Self {
        self.shape = shape;
        self
    }

    /// Generates an array and converts its values into `T`
    pub fn generate<T, R>(&self, rng: &mut R) -> Vec<T>
    where
        T: NumCast + Zero,
        R: Rng,
    {
        let mut values: Vec<i64> = (0..self.len)
            .map(|_| rng.random_range(self.values.clone()))
            .collect();

        match self.shape {
            ArrayShape::Uniform => {}
            ArrayShape::Sorted => values.sort_unstable(),
            ArrayShape::Reversed => values.sort_unstable_by(|a, b| b.cmp(a)),
            ArrayShape::NearlySorted => {
                values.sort_unstable();
                if values.len() > 1 {
                    for _ in 0..(values.len() / 20).max(1) {
                        let i = rng.random_range(0..values.len());
                        let j = rng.random_range(0..values.len());
                        values.swap(i, j);
                    }
                }
            }
        }

        convert(values)
    }
}

/// Returns the demo array converted into `T`
pub fn demo_array<T: NumCast + Zero>() -> Vec<T> {
    convert(DEFAULT_ARRAY.to_vec())
}

/// Returns the demo array in ascending order, as used for searching
pub fn sorted_demo_array<T: NumCast + Zero>() -> Vec<T> {
    let mut values = DEFAULT_ARRAY.to_vec();
    values.sort_unstable();
    convert(values)
}

/// Randomly permutes the demo array
pub fn shuffled_demo_array<T: NumCast + Zero, R: Rng>(rng: &mut R) -> Vec<T> {
    let mut values = DEFAULT_ARRAY.to_vec();
    values.shuffle(rng);
    convert(values)
}

fn convert<T: NumCast + Zero>(values: Vec<i64>) -> Vec<T> {
    values
        .into_iter()
        .map(|x| T::from(x).unwrap_or_else(T::zero))
        .collect()
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    use super::*;

    #[test]
    fn shapes() {
        let rng = &mut Pcg64Mcg::seed_from_u64(7);
        let generator = ArrayGenerator::new().len(200).values(-50..50);

        let uniform: Vec<i64> = generator.clone().generate(rng);
        assert_eq!(uniform.len(), 200);
        assert!(uniform.iter().all(|x| (-50..50).contains(x)));

        let sorted: Vec<i64> = generator.clone().shape(ArrayShape::Sorted).generate(rng);
        assert!(sorted.is_sorted());

        let reversed: Vec<f64> = generator.clone().shape(ArrayShape::Reversed).generate(rng);
        assert!(reversed.iter().rev().is_sorted());

        let nearly: Vec<i64> = generator.shape(ArrayShape::NearlySorted).generate(rng);
        let inversions = nearly.iter().tuple_windows().filter(|(a, b)| a > b).count();
        // every swap touches at most four adjacent pairs
        assert!(inversions <= 4 * 10);
    }

    #[test]
    fn demo_arrays() {
        let demo: Vec<f64> = demo_array();
        assert_eq!(demo[0], 15.0);
        assert_eq!(demo.len(), 14);

        let sorted: Vec<i64> = sorted_demo_array();
        assert_eq!(sorted.first(), Some(&1));
        assert_eq!(sorted.last(), Some(&90));

        let rng = &mut Pcg64Mcg::seed_from_u64(0);
        let shuffled: Vec<i64> = shuffled_demo_array(rng);
        assert_eq!(shuffled.iter().sorted().collect_vec(), sorted.iter().collect_vec());
    }
}
