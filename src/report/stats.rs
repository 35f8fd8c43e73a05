/// Arithmetic mean, `None` for an empty slice.
pub fn mean(values: &[i64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let sum: i128 = values.iter().map(|&v| i128::from(v)).sum();
    Some(sum as f64 / values.len() as f64)
}

/// Median of an ascending slice, `None` for an empty slice.
pub fn median(sorted: &[i64]) -> Option<f64> {
    let n = sorted.len();
    if n == 0 {
        return None;
    }
    debug_assert!(sorted.windows(2).all(|w| w[0] <= w[1]), "median input is not sorted");
    if n % 2 == 0 {
        Some((sorted[n / 2 - 1] as f64 + sorted[n / 2] as f64) / 2.0)
    } else {
        Some(sorted[n / 2] as f64)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceStats {
    pub mean: f64,
    pub median: f64,
    /// `mean - median`, negative when the distribution leans low.
    pub difference: f64,
}

impl PriceStats {
    pub fn from_sorted(prices: &[i64]) -> Option<PriceStats> {
        let mean = mean(prices)?;
        let median = median(prices)?;
        Some(PriceStats {
            mean,
            median,
            difference: mean - median,
        })
    }
}
