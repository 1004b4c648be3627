//! Ranking of screening scores.
//!
//! Provides [`average_rank`], which assigns tie-averaged ranks to score
//! values, and [`rank_order`], which turns those ranks into the visiting
//! order used by the enrichment metrics.

use std::cmp::Ordering;

/// Which end of the score scale ranks first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Lowest score first (e.g. docking energies).
    Ascending,
    /// Highest score first (e.g. similarity or probability scores).
    Descending,
}

impl Direction {
    /// `Descending` when `decreasing` is true, `Ascending` otherwise.
    pub fn from_decreasing(decreasing: bool) -> Self {
        if decreasing {
            Direction::Descending
        } else {
            Direction::Ascending
        }
    }
}

/// Compare two scores, treating every NaN as equal to every other NaN and
/// greater than any number.
pub(crate) fn cmp_scores(a: f64, b: f64) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => a.partial_cmp(&b).unwrap_or(Ordering::Equal),
    }
}

/// Assign 1-based ranks to `scores`, giving tied values the average of the
/// ranks they jointly occupy.
///
/// NaN scores form a single tie group ranked above every number.
///
/// Empty input produces empty output.
pub fn average_rank(scores: &[f64]) -> Vec<f64> {
    let n = scores.len();
    if n == 0 {
        return Vec::new();
    }

    let mut indexed: Vec<(f64, usize)> = scores.iter().copied().enumerate().map(|(i, v)| (v, i)).collect();
    indexed.sort_by(|a, b| cmp_scores(a.0, b.0));

    let mut ranks = vec![0.0; n];
    let mut i = 0;
    while i < n {
        // Find the end of the tie group.
        let mut j = i + 1;
        while j < n && cmp_scores(indexed[j].0, indexed[i].0).is_eq() {
            j += 1;
        }

        // Ranks in the group are (i+1)..=(j), so the mean is their midpoint.
        let rank_val = (i + 1 + j) as f64 / 2.0;
        for &(_, orig_idx) in &indexed[i..j] {
            ranks[orig_idx] = rank_val;
        }

        i = j;
    }

    ranks
}

/// Compute the visiting order of `scores` under `direction`.
///
/// `order[k]` is the original index of the item ranked k-th (k = 0 is the
/// best item). Items sharing an average rank are visited from the highest
/// original index to the lowest, in both directions, so a descending order
/// is not the reverse of the ascending one when ties are present.
///
/// Always a permutation of `0..scores.len()`.
pub fn rank_order(scores: &[f64], direction: Direction) -> Vec<usize> {
    let ranks = average_rank(scores);
    let mut order: Vec<usize> = (0..scores.len()).collect();

    order.sort_by(|&a, &b| {
        let by_rank = match direction {
            Direction::Ascending => ranks[a].total_cmp(&ranks[b]),
            Direction::Descending => ranks[b].total_cmp(&ranks[a]),
        };
        by_rank.then_with(|| b.cmp(&a))
    });

    order
}

// ── Tests ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn average_rank_no_ties() {
        let data = [3.0, 1.0, 2.0];
        assert_eq!(average_rank(&data), vec![3.0, 1.0, 2.0]);
    }

    #[test]
    fn average_rank_with_ties() {
        let data = [3.0, 1.0, 2.0, 2.0];
        // sorted: 1(1), 2(2), 2(3), 3(4) → ties at 2 get (2+3)/2 = 2.5
        assert_eq!(average_rank(&data), vec![4.0, 1.0, 2.5, 2.5]);
    }

    #[test]
    fn average_rank_three_way_tie() {
        let data = [0.0, 7.0, 7.0, 7.0, 9.0];
        assert_eq!(average_rank(&data), vec![1.0, 3.0, 3.0, 3.0, 5.0]);
    }

    #[test]
    fn average_rank_nan_is_largest() {
        let data = [f64::NAN, 1.0, f64::NAN, 2.0];
        assert_eq!(average_rank(&data), vec![3.5, 1.0, 3.5, 2.0]);
    }

    #[test]
    fn average_rank_signed_zero_ties() {
        assert_eq!(average_rank(&[-0.0, 0.0]), vec![1.5, 1.5]);
    }

    #[test]
    fn average_rank_empty() {
        assert_eq!(average_rank(&[]), Vec::<f64>::new());
    }

    #[test]
    fn order_distinct_scores() {
        let data = [3.0, 1.0, 2.0];
        assert_eq!(rank_order(&data, Direction::Ascending), vec![1, 2, 0]);
        assert_eq!(rank_order(&data, Direction::Descending), vec![0, 2, 1]);
    }

    #[test]
    fn order_ties_visit_higher_index_first() {
        let data = [1.0, 2.0, 2.0, 3.0];
        assert_eq!(rank_order(&data, Direction::Ascending), vec![0, 2, 1, 3]);
        assert_eq!(rank_order(&data, Direction::Descending), vec![3, 2, 1, 0]);
    }

    #[test]
    fn order_directions_are_not_mirror_images() {
        let data = [1.0, 2.0, 2.0, 3.0];
        let mut reversed = rank_order(&data, Direction::Ascending);
        reversed.reverse();
        assert_ne!(reversed, rank_order(&data, Direction::Descending));
    }

    #[test]
    fn order_all_equal() {
        let data = [5.0, 5.0, 5.0];
        assert_eq!(rank_order(&data, Direction::Ascending), vec![2, 1, 0]);
        assert_eq!(rank_order(&data, Direction::Descending), vec![2, 1, 0]);
    }

    #[test]
    fn order_nan_ranks_last_when_ascending() {
        let data = [f64::NAN, 1.0, 2.0];
        assert_eq!(rank_order(&data, Direction::Ascending), vec![1, 2, 0]);
        assert_eq!(rank_order(&data, Direction::Descending), vec![0, 2, 1]);
    }

    #[test]
    fn order_empty() {
        assert!(rank_order(&[], Direction::Ascending).is_empty());
        assert!(rank_order(&[], Direction::Descending).is_empty());
    }

    #[test]
    fn direction_from_flag() {
        assert_eq!(Direction::from_decreasing(true), Direction::Descending);
        assert_eq!(Direction::from_decreasing(false), Direction::Ascending);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn is_permutation(order: &[usize], n: usize) -> bool {
        let mut seen = vec![false; n];
        for &i in order {
            if i >= n || seen[i] {
                return false;
            }
            seen[i] = true;
        }
        order.len() == n
    }

    proptest! {
        #[test]
        fn order_is_bijection(scores in proptest::collection::vec(-100.0f64..100.0, 0..200)) {
            let n = scores.len();
            prop_assert!(is_permutation(&rank_order(&scores, Direction::Ascending), n));
            prop_assert!(is_permutation(&rank_order(&scores, Direction::Descending), n));
        }

        #[test]
        fn order_with_heavy_ties_is_bijection(scores in proptest::collection::vec(0u8..4, 0..200)) {
            let scores: Vec<f64> = scores.into_iter().map(f64::from).collect();
            let n = scores.len();
            prop_assert!(is_permutation(&rank_order(&scores, Direction::Ascending), n));
            prop_assert!(is_permutation(&rank_order(&scores, Direction::Descending), n));
        }

        #[test]
        fn ascending_order_is_sorted(scores in proptest::collection::vec(-1e6f64..1e6, 1..200)) {
            let order = rank_order(&scores, Direction::Ascending);
            for w in order.windows(2) {
                prop_assert!(scores[w[0]] <= scores[w[1]]);
            }
        }

        #[test]
        fn ranks_sum_to_triangular(scores in proptest::collection::vec(0u8..10, 0..100)) {
            let scores: Vec<f64> = scores.into_iter().map(f64::from).collect();
            let n = scores.len() as f64;
            let sum: f64 = average_rank(&scores).iter().sum();
            prop_assert!((sum - n * (n + 1.0) / 2.0).abs() < 1e-9);
        }
    }
}
