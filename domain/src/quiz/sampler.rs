//! Non-repeating random selection of pool indexes.

use rand::Rng;
use rand::seq::SliceRandom;

/// Pick `count` distinct indexes from `0..pool_size`, in draw order.
///
/// Shuffles the whole index range and keeps the prefix, so every ordering
/// of every subset is equally likely. `count` is clamped to `pool_size`.
pub fn draw_order<R: Rng + ?Sized>(pool_size: usize, count: usize, rng: &mut R) -> Vec<usize> {
    let mut order: Vec<usize> = (0..pool_size).collect();
    order.as_mut_slice().shuffle(rng);
    order.truncate(count.min(pool_size));
    order
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashSet;

    #[test]
    fn test_draws_distinct_indexes() {
        let mut rng = StdRng::seed_from_u64(7);
        for pool_size in 1..30 {
            for count in 1..=pool_size {
                let order = draw_order(pool_size, count, &mut rng);
                assert_eq!(order.len(), count);
                let unique: HashSet<_> = order.iter().collect();
                assert_eq!(unique.len(), count);
                assert!(order.iter().all(|&i| i < pool_size));
            }
        }
    }

    #[test]
    fn test_count_clamped_to_pool() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut order = draw_order(3, 5, &mut rng);
        order.sort_unstable();
        assert_eq!(order, vec![0, 1, 2]);
    }

    #[test]
    fn test_empty_pool() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(draw_order(0, 5, &mut rng).is_empty());
    }

    #[test]
    fn test_every_index_can_come_first() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut seen = HashSet::new();
        for _ in 0..500 {
            seen.insert(draw_order(4, 1, &mut rng)[0]);
        }
        assert_eq!(seen.len(), 4);
    }
}
