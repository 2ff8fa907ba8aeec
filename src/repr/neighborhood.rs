use smallvec::SmallVec;

use super::*;

/// Basic Neighborhood-Impl. using `Vec<(Node, Weight)>`
#[derive(Default, Clone)]
pub struct ArrNeighborhood(pub Vec<(Node, Weight)>);

/// Like [`ArrNeighborhood`] but uses `SmallVec<[(Node, Weight); 4]>` instead.
/// Prefer this if the graph is known to be sparse, e.g. for random out-degree graphs.
#[derive(Default, Clone)]
pub struct SparseNeighborhood(pub SmallVec<[(Node, Weight); 4]>);

macro_rules! impl_vec_neighborhood {
    ($nbs:ident) => {
        impl Neighborhood for $nbs {
            fn num_of_neighbors(&self) -> NumNodes {
                self.0.len() as NumNodes
            }

            fn as_slice(&self) -> &[(Node, Weight)] {
                &self.0
            }

            fn add_neighbor(&mut self, u: Node, w: Weight) {
                self.0.push((u, w));
            }

            fn clear(&mut self) {
                self.0.clear();
            }
        }
    };
}

impl_vec_neighborhood!(ArrNeighborhood);
impl_vec_neighborhood!(SparseNeighborhood);

#[cfg(test)]
mod tests {
    use super::*;

    fn check_neighborhood<N: Neighborhood>() {
        let mut nbs = N::default();
        assert_eq!(nbs.num_of_neighbors(), 0);

        assert!(!nbs.try_add_neighbor(3, 7));
        assert!(!nbs.try_add_neighbor(1, 2));
        assert!(nbs.try_add_neighbor(3, 9));

        assert_eq!(nbs.num_of_neighbors(), 2);
        assert_eq!(nbs.weight_of(3), Some(7));
        assert_eq!(nbs.weight_of(5), None);
        assert_eq!(nbs.neighbors().collect::<Vec<_>>(), vec![3, 1]);
        assert_eq!(nbs.as_slice(), &[(3, 7), (1, 2)]);

        nbs.clear();
        assert_eq!(nbs.num_of_neighbors(), 0);
    }

    #[test]
    fn arr_neighborhood() {
        check_neighborhood::<ArrNeighborhood>();
    }

    #[test]
    fn sparse_neighborhood() {
        check_neighborhood::<SparseNeighborhood>();
    }
}
