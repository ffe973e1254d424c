use rand::Rng;

/// Picks one element uniformly at random from `items` in a single pass.
///
/// Reservoir sampling with a reservoir of one: the `n`-th element replaces the
/// held candidate with probability `1/n`. The length is never needed up front
/// and memory use is constant. Returns `None` only when `items` is empty.
pub fn reservoir_pick<I, R>(items: I, rng: &mut R) -> Option<I::Item>
where
    I: IntoIterator,
    R: Rng,
{
    let mut picked = None;
    for (seen, item) in items.into_iter().enumerate() {
        if rng.random_range(0..seen + 1) == 0 {
            picked = Some(item);
        }
    }
    picked
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;
    use std::collections::HashMap;

    #[test]
    fn test_empty_yields_none() {
        let mut rng = SmallRng::seed_from_u64(7);
        assert_eq!(reservoir_pick(Vec::<u32>::new(), &mut rng), None);
    }

    #[test]
    fn test_single_item_always_picked() {
        let mut rng = SmallRng::seed_from_u64(7);
        for _ in 0..100 {
            assert_eq!(reservoir_pick(["only"], &mut rng), Some("only"));
        }
    }

    #[test]
    fn test_uniform_chi_square() {
        let k = 10;
        let draws = 20_000;
        let items: Vec<usize> = (0..k).collect();
        let mut rng = SmallRng::seed_from_u64(0x5eed);

        let mut counts = vec![0usize; k];
        for _ in 0..draws {
            let picked = reservoir_pick(items.iter(), &mut rng).unwrap();
            counts[*picked] += 1;
        }

        let expected = draws as f64 / k as f64;
        let chi_square: f64 = counts
            .iter()
            .map(|&observed| {
                let diff = observed as f64 - expected;
                diff * diff / expected
            })
            .sum();

        // 9 degrees of freedom, p = 0.001
        assert!(chi_square < 27.88, "uniformity rejected: chi^2 = {}, counts = {:?}", chi_square, counts);
    }

    #[test]
    fn test_duplicates_weight_selection() {
        let items = ["a", "b", "a"];
        let mut rng = SmallRng::seed_from_u64(42);

        let mut counts: HashMap<&str, usize> = HashMap::new();
        for _ in 0..30_000 {
            *counts.entry(reservoir_pick(items, &mut rng).unwrap()).or_insert(0) += 1;
        }

        let ratio = counts["a"] as f64 / counts["b"] as f64;
        assert!((1.8..2.2).contains(&ratio), "expected roughly 2:1, got {:?}", counts);
    }

    #[test]
    fn test_seeded_is_deterministic() {
        let items: Vec<u32> = (0..50).collect();
        let mut first = SmallRng::seed_from_u64(99);
        let mut second = SmallRng::seed_from_u64(99);
        for _ in 0..100 {
            assert_eq!(reservoir_pick(&items, &mut first), reservoir_pick(&items, &mut second));
        }
    }
}
