//! Descriptive statistics over poly(A) length estimates.

/// Return the median. The input must be nonempty; for an even number of
/// elements, the mean of the two middle elements is returned.
pub fn median(values: &[f64]) -> f64 {
    assert!(!values.is_empty());
    let mut sorted = values.to_vec();
    sorted.sort_by(|x, y| x.partial_cmp(y).unwrap());
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 1 {
        sorted[mid]
    } else {
        (sorted[mid - 1] + sorted[mid]) / 2.
    }
}

/// Return the median absolute deviation, `median(|v - median(values)|)`.
/// The input must be nonempty.
pub fn mad(values: &[f64]) -> f64 {
    let center = median(values);
    let deviations: Vec<f64> = values.iter().map(|v| (v - center).abs()).collect();
    median(&deviations)
}

pub fn mean(values: &[f64]) -> f64 {
    assert!(!values.is_empty());
    values.iter().sum::<f64>() / values.len() as f64
}

/// Return the population standard deviation (divide by N, not N-1).
pub fn stdv(values: &[f64]) -> f64 {
    let center = mean(values);
    let var = values.iter().map(|v| (v - center).powi(2)).sum::<f64>() / values.len() as f64;
    var.sqrt()
}

/// Return the most frequent value. Ties resolve to the lowest value among the
/// tied candidates, i.e. the first mode encountered in sorted order.
pub fn mode(values: &[f64]) -> f64 {
    assert!(!values.is_empty());
    let mut sorted = values.to_vec();
    sorted.sort_by(|x, y| x.partial_cmp(y).unwrap());
    let mut best = sorted[0];
    let mut best_count = 0;
    let mut idx = 0;
    while idx < sorted.len() {
        let run_start = idx;
        while idx < sorted.len() && sorted[idx] == sorted[run_start] {
            idx += 1;
        }
        // Strict comparison keeps the lowest value on ties.
        if idx - run_start > best_count {
            best_count = idx - run_start;
            best = sorted[run_start];
        }
    }
    best
}

/// Percentage of `values` falling strictly inside
/// `(expected - mult * band, expected + mult * band)`.
/// Values exactly on a bound are excluded. The input must be nonempty.
pub fn percent_within(values: &[f64], expected: f64, mult: f64, band: f64) -> f64 {
    assert!(!values.is_empty());
    let lower = expected - mult * band;
    let upper = expected + mult * band;
    let inside = values.iter().filter(|&&v| lower < v && v < upper).count();
    100. * inside as f64 / values.len() as f64
}

/// Summary of one dataset's passing poly(A) estimates against the expected
/// control length. All fields are unrounded; rounding to two decimals happens
/// only when the aggregate table is rendered.
#[derive(Debug, Clone)]
pub struct SummaryStatistics {
    pub count: usize,
    pub mean: f64,
    pub median: f64,
    pub mode: f64,
    pub stdv: f64,
    pub mad: f64,
    pub percent_within_2mad_of_expected: f64,
    pub percent_within_2stdv_of_expected: f64,
}

impl SummaryStatistics {
    /// Compute the full record over a nonempty array of estimates.
    pub fn from_lengths(values: &[f64], expected: f64) -> Self {
        assert!(!values.is_empty());
        let mad_band = mad(values);
        let stdv_band = stdv(values);
        Self {
            count: values.len(),
            mean: mean(values),
            median: median(values),
            mode: mode(values),
            stdv: stdv_band,
            mad: mad_band,
            percent_within_2mad_of_expected: percent_within(values, expected, 2., mad_band),
            percent_within_2stdv_of_expected: percent_within(values, expected, 2., stdv_band),
        }
    }
}
