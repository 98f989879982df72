//! Statistics helpers shared by the scoring models

use serde::{Deserialize, Serialize};

/// Population mean and standard deviation of a series
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MeanStd {
    pub mean: f64,
    pub std: f64,
}

/// Population statistics (divide by N, not N-1). Returns None for an
/// empty series.
pub fn mean_std(values: &[f64]) -> Option<MeanStd> {
    if values.is_empty() {
        return None;
    }
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;
    Some(MeanStd {
        mean,
        std: variance.sqrt(),
    })
}

/// Sign with sign(0) = 0. `f64::signum` maps +0.0 to 1.0, which breaks
/// the "no change scores zero" rules; NaN also maps to 0 here.
pub fn sign(x: f64) -> f64 {
    if x > 0.0 {
        1.0
    } else if x < 0.0 {
        -1.0
    } else {
        0.0
    }
}

/// Z-score of `current` against the series. The standard deviation is
/// floored so flat histories don't blow up the ratio. None if the
/// series is empty.
pub fn z_score(current: f64, values: &[f64], std_floor: f64) -> Option<f64> {
    let stats = mean_std(values)?;
    Some((current - stats.mean) / stats.std.max(std_floor))
}

/// Round to 2 decimals for display totals.
pub fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mean_std_empty_is_none() {
        assert!(mean_std(&[]).is_none());
    }

    #[test]
    fn test_mean_std_single_value() {
        let stats = mean_std(&[5.0]).unwrap();
        assert_eq!(stats.mean, 5.0);
        assert_eq!(stats.std, 0.0);
    }

    #[test]
    fn test_mean_std_is_population_std() {
        // Population std of this set is exactly 2 (sample std would be ~2.14)
        let stats = mean_std(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]).unwrap();
        assert_eq!(stats.mean, 5.0);
        assert!((stats.std - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_sign_zero_is_zero() {
        assert_eq!(sign(3.2), 1.0);
        assert_eq!(sign(-0.1), -1.0);
        assert_eq!(sign(0.0), 0.0);
        assert_eq!(sign(-0.0), 0.0);
        assert_eq!(sign(f64::NAN), 0.0);
    }

    #[test]
    fn test_z_score_floors_flat_series() {
        // Flat history: std 0 is floored to 0.1, so z = 1 / 0.1 = 10
        let z = z_score(201.0, &[200.0, 200.0, 200.0], 0.1).unwrap();
        assert!((z - 10.0).abs() < 1e-12);
        assert!(z_score(1.0, &[], 0.1).is_none());
    }

    #[test]
    fn test_round2() {
        assert_eq!(round2(0.125), 0.13);
        assert_eq!(round2(-0.125), -0.13);
        assert_eq!(round2(1.0), 1.0);
        assert_eq!(round2(0.423494), 0.42);
    }
}
