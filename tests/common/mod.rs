#![allow(dead_code)] // Not every test binary uses every helper

use bike_tricks::tricks::TrickSequence;

/// Per-trick scores are compared with a tolerance: `1 * 1.6 * 3.0` is not
/// bit-identical to the literal `4.8`.
pub const SCORE_EPSILON: f64 = 1e-9;

pub fn assert_scores(seq: &TrickSequence, expected: &[f64]) {
    let actual = seq.scores();
    assert_eq!(
        actual.len(),
        expected.len(),
        "Trick count mismatch: got {:?}, expected {:?}",
        actual,
        expected
    );
    for (i, (a, e)) in actual.iter().zip(expected).enumerate() {
        assert!(
            (a - e).abs() < SCORE_EPSILON,
            "Trick {} scored {}, expected {}",
            i,
            a,
            e
        );
    }
}

/// Left-to-right sum rounded once to 2 decimals.
pub fn rounded_sum(scores: &[f64]) -> f64 {
    let total = scores.iter().fold(0.0_f64, |acc, s| acc + s);
    (total * 100.0).round_ties_even() / 100.0
}
