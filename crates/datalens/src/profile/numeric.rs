//! Descriptive statistics for numeric columns.

use crate::schema::NumericStats;

// =============================================================================
// STREAMING STATISTICS
// =============================================================================
// Welford's online algorithm for computing mean and variance in a single pass.

/// Streaming statistics accumulator using Welford's algorithm.
#[derive(Debug, Clone)]
pub struct StreamingStats {
    count: usize,
    mean: f64,
    m2: f64, // Sum of squared differences from mean
    sum: f64,
    min: f64,
    max: f64,
}

impl StreamingStats {
    /// Create an empty accumulator.
    pub fn new() -> Self {
        Self {
            count: 0,
            mean: 0.0,
            m2: 0.0,
            sum: 0.0,
            min: f64::INFINITY,
            max: f64::NEG_INFINITY,
        }
    }

    /// Add a value using Welford's online algorithm.
    pub fn add(&mut self, value: f64) {
        self.count += 1;
        self.sum += value;

        let delta = value - self.mean;
        self.mean += delta / self.count as f64;
        let delta2 = value - self.mean;
        self.m2 += delta * delta2;

        if value < self.min {
            self.min = value;
        }
        if value > self.max {
            self.max = value;
        }
    }

    /// Number of values seen.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Arithmetic total.
    pub fn sum(&self) -> f64 {
        self.sum
    }

    /// Arithmetic mean (0 when empty).
    pub fn mean(&self) -> f64 {
        self.mean
    }

    /// Population variance (not Bessel-corrected).
    pub fn variance(&self) -> f64 {
        if self.count == 0 {
            0.0
        } else {
            (self.m2 / self.count as f64).max(0.0)
        }
    }

    /// Population standard deviation.
    pub fn std_dev(&self) -> f64 {
        self.variance().sqrt()
    }
}

impl Default for StreamingStats {
    fn default() -> Self {
        Self::new()
    }
}

impl Extend<f64> for StreamingStats {
    fn extend<I: IntoIterator<Item = f64>>(&mut self, iter: I) {
        for value in iter {
            self.add(value);
        }
    }
}

/// Above 2^52 an f64 has no fractional bits left.
const MAX_EXACT_FRACTION: f64 = 4_503_599_627_370_496.0;

/// Round half toward positive infinity at the given number of decimals.
///
/// Rounded statistics are part of the output contract: golden digests
/// depend on this exact rule. Values too large to carry a fractional digit
/// at that precision come back unchanged.
pub fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    let scaled = value * factor;
    if !scaled.is_finite() || scaled.abs() >= MAX_EXACT_FRACTION {
        return value;
    }
    let rounded = (scaled + 0.5).floor() / factor;
    if rounded == 0.0 { 0.0 } else { rounded }
}

/// Median of the full value set: the middle element, or the mean of the two
/// middle elements for even counts.
pub fn median(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }

    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));

    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        // Halve before adding so two values near f64::MAX stay finite.
        Some(sorted[mid - 1] / 2.0 + sorted[mid] / 2.0)
    } else {
        Some(sorted[mid])
    }
}

/// Compute rounded statistics, or `None` when there are no values.
pub fn numeric_stats(values: &[f64]) -> Option<NumericStats> {
    let median = median(values)?;

    let mut stats = StreamingStats::new();
    stats.extend(values.iter().copied());

    Some(NumericStats {
        count: stats.count(),
        min: round_to(stats.min, 2),
        max: round_to(stats.max, 2),
        mean: round_to(stats.mean(), 2),
        median: round_to(median, 2),
        sum: round_to(stats.sum(), 2),
        std_dev: round_to(stats.std_dev(), 2),
    })
}
