//! Splitter Module
//! Seed-controlled train/test partitioning of a normalized dataset.

use polars::prelude::*;
use rand::prelude::*;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SplitError {
    #[error("test_size must lie strictly between 0 and 1, got {0}")]
    InvalidFraction(f64),
    #[error("failed to split dataset: {0}")]
    Polars(#[from] PolarsError),
}

/// Partitions rows into train/test subsets via a seeded shuffle-and-cut.
pub struct Splitter;

impl Splitter {
    /// Split `df` into `(train, test)`.
    ///
    /// Row indices are Fisher-Yates shuffled with a seeded RNG and the
    /// first `round(test_size * n)` shuffled indices become the test
    /// set, clamped to `[1, n - 1]` whenever `n >= 2` so neither side is
    /// empty. Identical `(df, test_size, seed)` inputs always produce an
    /// identical partition.
    pub fn train_test_split(
        df: &DataFrame,
        test_size: f64,
        seed: u64,
    ) -> Result<(DataFrame, DataFrame), SplitError> {
        if !(test_size > 0.0 && test_size < 1.0) {
            tracing::error!("invalid split fraction: {test_size}");
            return Err(SplitError::InvalidFraction(test_size));
        }

        let n = df.height();
        let mut indices: Vec<IdxSize> = (0..n as IdxSize).collect();
        let mut rng = StdRng::seed_from_u64(seed);
        indices.shuffle(&mut rng);

        let mut test_len = (n as f64 * test_size).round() as usize;
        if n >= 2 {
            test_len = test_len.clamp(1, n - 1);
        }

        let test_idx = IdxCa::from_vec("idx".into(), indices[..test_len].to_vec());
        let train_idx = IdxCa::from_vec("idx".into(), indices[test_len..].to_vec());

        let test = df.take(&test_idx)?;
        let train = df.take(&train_idx)?;
        Ok((train, test))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn numbered_frame(n: i64) -> DataFrame {
        let ids: Vec<i64> = (0..n).collect();
        let texts: Vec<String> = ids.iter().map(|i| format!("message {i}")).collect();
        DataFrame::new(vec![
            Column::new("id".into(), ids),
            Column::new("text".into(), texts),
        ])
        .unwrap()
    }

    fn ids(df: &DataFrame) -> Vec<i64> {
        df.column("id")
            .unwrap()
            .i64()
            .unwrap()
            .into_no_null_iter()
            .collect()
    }

    #[test]
    fn partition_is_complete_and_disjoint() {
        let df = numbered_frame(100);
        let (train, test) = Splitter::train_test_split(&df, 0.2, 42).unwrap();

        assert_eq!(train.height() + test.height(), 100);
        let mut seen: HashSet<i64> = ids(&train).into_iter().collect();
        for id in ids(&test) {
            assert!(seen.insert(id), "row {id} appears in both subsets");
        }
        assert_eq!(seen.len(), 100);
    }

    #[test]
    fn identical_inputs_give_identical_partition() {
        let df = numbered_frame(50);
        let (train_a, test_a) = Splitter::train_test_split(&df, 0.3, 7).unwrap();
        let (train_b, test_b) = Splitter::train_test_split(&df, 0.3, 7).unwrap();

        assert!(train_a.equals(&train_b));
        assert!(test_a.equals(&test_b));
    }

    #[test]
    fn different_seeds_differ() {
        let df = numbered_frame(50);
        let (_, test_a) = Splitter::train_test_split(&df, 0.3, 1).unwrap();
        let (_, test_b) = Splitter::train_test_split(&df, 0.3, 2).unwrap();

        let a: HashSet<i64> = ids(&test_a).into_iter().collect();
        let b: HashSet<i64> = ids(&test_b).into_iter().collect();
        assert_ne!(a, b);
    }

    #[test]
    fn fraction_determines_test_rows() {
        let df = numbered_frame(10);
        let (train, test) = Splitter::train_test_split(&df, 0.3, 2).unwrap();
        assert_eq!(test.height(), 3);
        assert_eq!(train.height(), 7);
    }

    #[test]
    fn two_rows_split_one_each() {
        let df = numbered_frame(2);
        let (train, test) = Splitter::train_test_split(&df, 0.5, 2).unwrap();
        assert_eq!(train.height(), 1);
        assert_eq!(test.height(), 1);
    }

    #[test]
    fn tiny_fraction_still_fills_both_sides() {
        let df = numbered_frame(10);
        let (train, test) = Splitter::train_test_split(&df, 0.01, 2).unwrap();
        assert_eq!(test.height(), 1);
        assert_eq!(train.height(), 9);

        let (train, test) = Splitter::train_test_split(&df, 0.99, 2).unwrap();
        assert_eq!(test.height(), 9);
        assert_eq!(train.height(), 1);
    }

    #[test]
    fn out_of_range_fractions_rejected() {
        let df = numbered_frame(10);
        for bad in [0.0, 1.0, -0.1, 1.5] {
            let err = Splitter::train_test_split(&df, bad, 2).unwrap_err();
            assert!(matches!(err, SplitError::InvalidFraction(_)), "value {bad}");
        }
    }
}
