//! Entropy
//!
//! Binary entropy and information gain over label-count partitions.
use crate::record::Record;
use serde::{Deserialize, Serialize};

/// Size and positive share of one subset produced by a split.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Partition {
    pub count: usize,
    pub positive_probability: f64,
}

impl Partition {
    pub fn new(count: usize, positive_probability: f64) -> Self {
        Partition {
            count,
            positive_probability,
        }
    }
}

/// Binary entropy of a label distribution with positive probability `p`.
///
/// Defined as zero at `p == 0` and `p == 1`. `p` must lie in `[0, 1]`.
#[inline]
pub fn entropy(p: f64) -> f64 {
    debug_assert!((0.0..=1.0).contains(&p), "probability {} outside [0, 1]", p);
    if p == 0.0 || p == 1.0 {
        0.0
    } else {
        -p * p.log2() - (1.0 - p) * (1.0 - p).log2()
    }
}

/// Reduction in entropy obtained by splitting a parent into `partitions`.
///
/// The partitions must hold at least one record in total.
pub fn information_gain(parent_entropy: f64, partitions: &[Partition]) -> f64 {
    let (weighted, total) = partitions.iter().fold((0.0, 0usize), |(w, t), p| {
        (w + p.count as f64 * entropy(p.positive_probability), t + p.count)
    });
    debug_assert!(total > 0, "information gain over zero records");
    parent_entropy - weighted / total as f64
}

/// Share of positive labels, zero for an empty slice.
pub fn positive_fraction<'a, I>(records: I) -> f64
where
    I: IntoIterator<Item = &'a Record>,
{
    let (positive, total) = records
        .into_iter()
        .fold((0usize, 0usize), |(p, t), r| (p + usize::from(r.label), t + 1));
    if total == 0 {
        0.0
    } else {
        positive as f64 / total as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::precision_round;

    #[test]
    fn test_entropy_bounds() {
        assert_eq!(entropy(0.0), 0.0);
        assert_eq!(entropy(1.0), 0.0);
        assert!((entropy(0.5) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_entropy_symmetric() {
        for i in 0..=100 {
            let p = i as f64 / 100.0;
            assert!((entropy(p) - entropy(1.0 - p)).abs() < 1e-12, "asymmetric at {}", p);
        }
    }

    #[test]
    fn test_entropy_one_third() {
        assert_eq!(precision_round(entropy(1.0 / 3.0), 6), 0.918296);
    }

    #[test]
    fn test_gain_uninformative_split() {
        let parent = entropy(0.5);
        let parts = vec![Partition::new(4, 0.5), Partition::new(6, 0.5)];
        assert!(information_gain(parent, &parts).abs() < 1e-12);
    }

    #[test]
    fn test_gain_perfect_split() {
        let parent = entropy(0.25);
        let parts = vec![Partition::new(1, 1.0), Partition::new(3, 0.0)];
        assert!((information_gain(parent, &parts) - parent).abs() < 1e-12);
    }

    #[test]
    fn test_gain_non_negative() {
        // 6 positives out of 10, split into 3/4 and 3/6.
        let parent = entropy(0.6);
        let parts = vec![Partition::new(4, 0.75), Partition::new(6, 0.5)];
        let gain = information_gain(parent, &parts);
        assert!(gain >= 0.0);
        assert!(gain < parent);
    }

    #[test]
    fn test_positive_fraction() {
        let records = vec![Record::new(true), Record::new(false), Record::new(true), Record::new(true)];
        assert_eq!(positive_fraction(&records), 0.75);
        assert_eq!(positive_fraction(&[] as &[Record]), 0.0);
    }
}
