//! Random traversal order
//!
//! Uniform Fisher-Yates over playlist positions. The playlist itself is never
//! reordered; random mode walks this permutation instead.

use rand::seq::SliceRandom;
use rand::{thread_rng, Rng};

/// A uniformly random permutation of `0..len`
pub fn shuffled_order(len: usize) -> Vec<usize> {
    shuffled_order_with(len, &mut thread_rng())
}

/// A random permutation of `0..len` drawn from `rng`
pub fn shuffled_order_with<R: Rng + ?Sized>(len: usize, rng: &mut R) -> Vec<usize> {
    let mut order: Vec<usize> = (0..len).collect();
    order.shuffle(rng);
    order
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    #[test]
    fn order_is_a_permutation() {
        let order = shuffled_order(50);
        assert_eq!(order.len(), 50);

        let unique: HashSet<usize> = order.iter().copied().collect();
        assert_eq!(unique.len(), 50);
        assert!(order.iter().all(|&i| i < 50));
    }

    #[test]
    fn empty_and_single() {
        assert!(shuffled_order(0).is_empty());
        assert_eq!(shuffled_order(1), vec![0]);
    }

    #[test]
    fn seeded_rng_is_reproducible() {
        let a = shuffled_order_with(20, &mut StdRng::seed_from_u64(7));
        let b = shuffled_order_with(20, &mut StdRng::seed_from_u64(7));
        assert_eq!(a, b);
    }

    #[test]
    fn shuffle_changes_order() {
        let identity: Vec<usize> = (0..10).collect();
        let changed = (0..5).any(|_| shuffled_order(10) != identity);

        // Five identity draws in a row: probability (1/10!)^5
        assert!(changed);
    }
}
