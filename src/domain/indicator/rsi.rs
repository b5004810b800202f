//! RSI (Relative Strength Index).
//!
//! Uses Wilder's smoothing for average gain/loss:
//! - First average: simple mean of gains/losses over the first n changes
//! - Subsequent: avg = (prev_avg * (n-1) + current) / n
//!
//! Formula: RSI = 100 - (100 / (1 + avg_gain / avg_loss))
//! If avg_loss == 0: RSI saturates to 100 (never a neutral fallback).
//! Output length: max(0, len - n).

/// Compute the RSI over `values`. Empty when there are fewer than
/// `period + 1` values or `period` is 0.
pub fn rsi(values: &[f64], period: usize) -> Vec<f64> {
    if period == 0 || values.len() <= period {
        return Vec::new();
    }

    let changes: Vec<f64> = values.windows(2).map(|w| w[1] - w[0]).collect();

    let mut avg_gain = changes[..period]
        .iter()
        .map(|&c| if c > 0.0 { c } else { 0.0 })
        .sum::<f64>()
        / period as f64;
    let mut avg_loss = changes[..period]
        .iter()
        .map(|&c| if c < 0.0 { -c } else { 0.0 })
        .sum::<f64>()
        / period as f64;

    let mut out = Vec::with_capacity(values.len() - period);
    out.push(rsi_value(avg_gain, avg_loss));

    for &change in &changes[period..] {
        let gain = if change > 0.0 { change } else { 0.0 };
        let loss = if change < 0.0 { -change } else { 0.0 };
        avg_gain = (avg_gain * (period - 1) as f64 + gain) / period as f64;
        avg_loss = (avg_loss * (period - 1) as f64 + loss) / period as f64;
        out.push(rsi_value(avg_gain, avg_loss));
    }

    out
}

fn rsi_value(avg_gain: f64, avg_loss: f64) -> f64 {
    if avg_loss == 0.0 {
        100.0
    } else {
        100.0 - (100.0 / (1.0 + avg_gain / avg_loss))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn rsi_output_length() {
        let values: Vec<f64> = (0..20).map(|i| 100.0 + i as f64).collect();
        assert_eq!(rsi(&values, 14).len(), 6);
    }

    #[test]
    fn rsi_too_few_values() {
        let values: Vec<f64> = (0..14).map(|i| 100.0 + i as f64).collect();
        assert!(rsi(&values, 14).is_empty());
        assert!(rsi(&[], 14).is_empty());
        assert!(rsi(&[100.0], 14).is_empty());
    }

    #[test]
    fn rsi_zero_period() {
        assert!(rsi(&[100.0, 101.0], 0).is_empty());
    }

    #[test]
    fn rsi_all_gains_saturates_to_100() {
        let values: Vec<f64> = (0..30).map(|i| 100.0 + i as f64).collect();
        for &v in &rsi(&values, 14) {
            assert!((v - 100.0).abs() < f64::EPSILON, "RSI {} should be 100", v);
        }
    }

    #[test]
    fn rsi_all_losses_is_0() {
        let values: Vec<f64> = (0..30).map(|i| 100.0 - i as f64).collect();
        for &v in &rsi(&values, 14) {
            assert!((v - 0.0).abs() < f64::EPSILON, "RSI {} should be 0", v);
        }
    }

    #[test]
    fn rsi_flat_series_saturates_to_100() {
        // No losses at all, so avg_loss == 0 even though nothing gained.
        let values = [100.0; 20];
        for &v in &rsi(&values, 14) {
            assert!((v - 100.0).abs() < f64::EPSILON);
        }
    }

    #[test]
    fn rsi_balanced_zigzag() {
        // Alternating +1/-0.5 changes: avg_gain/avg_loss = 2, RSI near 66.7.
        let mut values = vec![100.0];
        for i in 0..30 {
            let step = if i % 2 == 0 { 1.0 } else { -0.5 };
            values.push(values[i] + step);
        }
        for &v in &rsi(&values, 14) {
            assert!(v > 60.0 && v < 70.0, "RSI {} outside expected band", v);
        }
    }

    #[test]
    fn rsi_known_calculation_bullish() {
        let values = [
            44.0, 44.25, 44.50, 43.75, 44.50, 44.25, 44.75, 45.25, 45.50, 45.25, 45.50, 46.0,
            46.25, 46.0, 46.50,
        ];
        let out = rsi(&values, 14);
        assert_eq!(out.len(), 1);
        assert!(
            out[0] > 50.0 && out[0] < 100.0,
            "RSI should be in bullish territory"
        );
    }

    proptest! {
        #[test]
        fn rsi_always_in_range(values in proptest::collection::vec(1.0f64..10_000.0, 15..80)) {
            for &v in &rsi(&values, 14) {
                prop_assert!((0.0..=100.0).contains(&v), "RSI {} out of range", v);
            }
        }
    }
}
