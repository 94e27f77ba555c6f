/// Score assigned to every entry when the raw scores have no spread.
pub const DEGENERATE_SCORE: f64 = 100.0;

/// Largest `decimals` accepted by [`round_to`]; beyond it `f64` has no digits left.
pub const MAX_ROUND_DECIMALS: u32 = 15;

/// Rescales `scores` in place onto `0..=100` by min-max.
pub fn min_max(scores: &mut [f64]) {
    let Some(&first) = scores.first() else {
        return;
    };

    let (min, max) = scores
        .iter()
        .fold((first, first), |(lo, hi), &value| (lo.min(value), hi.max(value)));

    if max == min {
        scores.fill(DEGENERATE_SCORE);
        return;
    }

    // Halved operands keep the span finite for any pair of finite scores.
    let span = max / 2.0 - min / 2.0;
    for score in scores.iter_mut() {
        *score = (*score / 2.0 - min / 2.0) / span * 100.0;
    }
}

/// Rounds half away from zero to `decimals` places.
pub fn round_to(value: f64, decimals: u32) -> f64 {
    if decimals > MAX_ROUND_DECIMALS {
        return value;
    }
    let factor = 10_f64.powi(decimals as i32);
    (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_extremes_to_zero_and_hundred() {
        let mut scores = vec![57.25, 70.85, 64.05];
        min_max(&mut scores);

        assert_eq!(scores[0], 0.0);
        assert_eq!(scores[1], 100.0);
        assert!((scores[2] - 50.0).abs() < 1e-9);
    }

    #[test]
    fn equal_scores_do_not_divide_by_zero() {
        let mut scores = vec![42.0, 42.0, 42.0];
        min_max(&mut scores);
        assert_eq!(scores, vec![DEGENERATE_SCORE; 3]);

        let mut single = vec![-3.0];
        min_max(&mut single);
        assert_eq!(single, vec![DEGENERATE_SCORE]);
    }

    #[test]
    fn empty_slice_is_untouched() {
        let mut scores: Vec<f64> = Vec::new();
        min_max(&mut scores);
        assert!(scores.is_empty());
    }

    #[test]
    fn extreme_finite_spread_stays_finite() {
        let mut scores = vec![1e308, 0.0, -1e308];
        min_max(&mut scores);

        assert_eq!(scores[0], 100.0);
        assert!((scores[1] - 50.0).abs() < 1e-9);
        assert_eq!(scores[2], 0.0);
    }

    #[test]
    fn rounds_half_away_from_zero() {
        assert_eq!(round_to(70.85, 0), 71.0);
        assert_eq!(round_to(-2.5, 0), -3.0);
        assert_eq!(round_to(57.25, 1), 57.3);
        assert_eq!(round_to(1.0 / 3.0, 40), 1.0 / 3.0);
    }
}
