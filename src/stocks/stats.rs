use chrono::{DateTime, TimeDelta, Utc};

use super::types::PriceSample;

/// Samples observed within the trailing `minutes` of `now`, boundary
/// inclusive. Order preserved; `now` is a parameter so the filter stays a
/// pure function.
pub fn filter_to_trailing_window(
    samples: &[PriceSample],
    minutes: u32,
    now: DateTime<Utc>,
) -> Vec<PriceSample> {
    let cutoff = now - TimeDelta::minutes(i64::from(minutes));
    samples
        .iter()
        .filter(|sample| sample.last_updated_at >= cutoff)
        .cloned()
        .collect()
}

/// Mean price across samples. Zero for an empty slice is a
/// division-by-zero guard, not a meaningful statistic.
pub fn average(samples: &[PriceSample]) -> f64 {
    if samples.is_empty() {
        return 0.0;
    }

    samples.iter().map(|sample| sample.price).sum::<f64>() / samples.len() as f64
}

/// Pearson correlation over the first `min(x.len(), y.len())` values. The
/// series are aligned positionally, not by timestamp, which assumes both
/// tickers sample at the same cadence. Returns 0 for empty input or a
/// constant series.
pub fn pearson_correlation(x: &[f64], y: &[f64]) -> f64 {
    let n = x.len().min(y.len());
    if n == 0 {
        return 0.0;
    }

    let mean_x = x[..n].iter().sum::<f64>() / n as f64;
    let mean_y = y[..n].iter().sum::<f64>() / n as f64;

    let mut numerator = 0.0;
    let mut denom_x = 0.0;
    let mut denom_y = 0.0;
    for i in 0..n {
        let dx = x[i] - mean_x;
        let dy = y[i] - mean_y;
        numerator += dx * dy;
        denom_x += dx * dx;
        denom_y += dy * dy;
    }

    if denom_x == 0.0 || denom_y == 0.0 {
        return 0.0;
    }

    numerator / (denom_x * denom_y).sqrt()
}

/// Rounds to `decimals` places for response payloads.
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}
