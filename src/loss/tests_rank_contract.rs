// =========================================================================
// FALSIFY-RL: ranking loss contract (rank hinge + rank cross-entropy)
//
// Invariants:
//   RL-001: both losses are non-negative
//   RL-002: hinge is zero once every positive clears its negatives by margin
//   RL-003: hinge is monotone non-decreasing in margin
//   RL-004: Max and Mean aggregation agree when neg_num == 1
//   RL-005: evaluation is pure (bit-identical on repeat)
//   RL-006: cross-entropy with one-hot labels equals -log p(positive)
//
// References:
//   - Herbrich et al. (2000) "Large Margin Rank Boundaries for Ordinal Regression"
//   - Cao et al. (2007) "Learning to Rank: From Pairwise Approach to Listwise Approach"
// =========================================================================

use super::*;

/// Deterministic pseudo-scores in [-10, 10].
fn scores(seed: u32, n: usize, freq: f32) -> Vec<f32> {
    (0..n)
        .map(|i| ((i as f32 + seed as f32) * freq).sin() * 10.0)
        .collect()
}

/// Labels one-hot at the first position of every group.
fn positive_first_labels(groups: usize, group_size: usize) -> Vec<f32> {
    (0..groups * group_size)
        .map(|i| if i % group_size == 0 { 1.0 } else { 0.0 })
        .collect()
}

/// FALSIFY-RL-002: Hinge is zero when all positives clear the margin
#[test]
fn falsify_rl_002_hinge_zero_when_separated() {
    let y_pred = Vector::from_slice(&[5.0, 1.0, 0.0, 4.5, -1.0, 2.0]);
    let y_true = Vector::from_slice(&positive_first_labels(2, 3));
    let config = RankingConfig::new(2.0, 2).unwrap();

    let loss = rank_hinge_loss(&y_true, &y_pred, &config).unwrap();
    assert!(
        loss == 0.0,
        "FALSIFIED RL-002: separated groups gave hinge = {loss}"
    );
}

/// FALSIFY-RL-006: Cross-entropy with one-hot labels is -log p(positive)
#[test]
fn falsify_rl_006_ce_one_hot_is_nll_of_positive() {
    let y_pred = Vector::from_slice(&[0.3, 1.1, -0.4, 2.0, 0.0, 0.5]);
    let y_true = Vector::from_slice(&positive_first_labels(2, 3));
    let config = RankingConfig::new(1.0, 2).unwrap();

    let first = softmax(&[0.3, 1.1, -0.4])[0];
    let second = softmax(&[2.0, 0.0, 0.5])[0];
    let expected = (-first.ln() - second.ln()) / 2.0;
    let loss = rank_crossentropy_loss(&y_true, &y_pred, &config).unwrap();
    assert!(
        (loss - expected).abs() < 1e-5,
        "FALSIFIED RL-006: CE = {loss}, expected {expected}"
    );
}

mod rl_proptest_falsify {
    use super::*;
    use proptest::prelude::*;

    /// FALSIFY-RL-001-prop: both losses are non-negative
    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn falsify_rl_001_prop_non_negative(
            seed in 0..1000u32,
            groups in 1..=8usize,
            neg_num in 1..=4usize,
            margin in 0.0f32..5.0,
        ) {
            let config = RankingConfig::new(margin, neg_num).unwrap();
            let n = groups * config.group_size();
            let y_pred = Vector::from_vec(scores(seed, n, 0.37));
            let y_true = Vector::from_vec(positive_first_labels(groups, config.group_size()));

            let hinge = rank_hinge_loss(&y_true, &y_pred, &config).unwrap();
            let ce = rank_crossentropy_loss(&y_true, &y_pred, &config).unwrap();
            prop_assert!(hinge >= 0.0, "FALSIFIED RL-001-prop: hinge = {} < 0", hinge);
            prop_assert!(ce >= -1e-6, "FALSIFIED RL-001-prop: CE = {} < 0", ce);
        }
    }

    /// FALSIFY-RL-003-prop: hinge is monotone in margin
    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn falsify_rl_003_prop_hinge_monotone_in_margin(
            seed in 0..1000u32,
            groups in 1..=8usize,
            neg_num in 1..=3usize,
            low in 0.0f32..2.0,
            extra in 0.0f32..2.0,
        ) {
            let small = RankingConfig::new(low, neg_num).unwrap();
            let large = small.with_margin(low + extra);
            let n = groups * small.group_size();
            let y_pred = Vector::from_vec(scores(seed, n, 0.73));
            let y_true = Vector::from_vec(vec![0.0; n]);

            let a = rank_hinge_loss(&y_true, &y_pred, &small).unwrap();
            let b = rank_hinge_loss(&y_true, &y_pred, &large).unwrap();
            prop_assert!(
                b >= a - 1e-5,
                "FALSIFIED RL-003-prop: margin {} -> {}, margin {} -> {}",
                low, a, low + extra, b
            );
        }
    }

    /// FALSIFY-RL-004-prop: aggregation is irrelevant for a single negative
    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn falsify_rl_004_prop_aggregation_agrees_for_pairs(
            seed in 0..1000u32,
            pairs in 1..=16usize,
        ) {
            let max_cfg = RankingConfig::default();
            let mean_cfg = max_cfg.with_negatives(NegativeAggregation::Mean);
            let y_pred = Vector::from_vec(scores(seed, pairs * 2, 0.37));
            let y_true = Vector::from_vec(positive_first_labels(pairs, 2));

            let a = rank_hinge_loss(&y_true, &y_pred, &max_cfg).unwrap();
            let b = rank_hinge_loss(&y_true, &y_pred, &mean_cfg).unwrap();
            prop_assert!(
                a.to_bits() == b.to_bits(),
                "FALSIFIED RL-004-prop: max = {}, mean = {}", a, b
            );
        }
    }

    /// FALSIFY-RL-005-prop: repeated evaluation is bit-identical
    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn falsify_rl_005_prop_pure(
            seed in 0..1000u32,
            groups in 1..=8usize,
            neg_num in 1..=4usize,
        ) {
            let config = RankingConfig::new(1.0, neg_num).unwrap();
            let n = groups * config.group_size();
            let y_pred = Vector::from_vec(scores(seed, n, 0.37));
            let y_true = Vector::from_vec(positive_first_labels(groups, config.group_size()));

            let h1 = rank_hinge_loss(&y_true, &y_pred, &config).unwrap();
            let h2 = rank_hinge_loss(&y_true, &y_pred, &config).unwrap();
            let c1 = rank_crossentropy_loss(&y_true, &y_pred, &config).unwrap();
            let c2 = rank_crossentropy_loss(&y_true, &y_pred, &config).unwrap();
            prop_assert_eq!(h1.to_bits(), h2.to_bits());
            prop_assert_eq!(c1.to_bits(), c2.to_bits());
        }
    }
}
