//! Pearson correlation between numeric columns.

use crate::input::{Record, cell};
use crate::limits::{MIN_CORRELATION_SAMPLES, SCATTER_SAMPLE_LIMIT};
use crate::profile::round_to;
use crate::schema::{CorrelationResult, ScatterPoint};

/// Correlate two columns over the rows where both hold a number.
///
/// The coefficient is rounded to 3 decimals. The first paired samples, in
/// row order, are kept as the scatter payload.
pub fn correlate(rows: &[Record], x_column: &str, y_column: &str) -> CorrelationResult {
    let (xs, ys): (Vec<f64>, Vec<f64>) = rows
        .iter()
        .filter_map(|row| {
            let x = cell(row, x_column).as_number()?;
            let y = cell(row, y_column).as_number()?;
            Some((x, y))
        })
        .unzip();

    let scatter_data = xs
        .iter()
        .zip(&ys)
        .take(SCATTER_SAMPLE_LIMIT)
        .map(|(&x, &y)| ScatterPoint { x, y })
        .collect();

    CorrelationResult {
        x_column: x_column.to_string(),
        y_column: y_column.to_string(),
        correlation: round_to(pearson(&xs, &ys), 3),
        scatter_data,
    }
}

/// Pearson coefficient of already-paired samples.
///
/// Means are taken over the paired samples only. Fewer than
/// `MIN_CORRELATION_SAMPLES` pairs, or zero variance on either side, yields 0.
/// Deviations are scaled by their largest magnitude first, so squared sums
/// stay finite for any finite input.
pub fn pearson(xs: &[f64], ys: &[f64]) -> f64 {
    let n = xs.len().min(ys.len());
    if n < MIN_CORRELATION_SAMPLES {
        return 0.0;
    }

    let (xs, ys) = (&xs[..n], &ys[..n]);
    let mean_x = mean(xs);
    let mean_y = mean(ys);

    let scale_x = xs.iter().fold(0.0_f64, |m, &x| m.max((x - mean_x).abs()));
    let scale_y = ys.iter().fold(0.0_f64, |m, &y| m.max((y - mean_y).abs()));
    if scale_x == 0.0 || scale_y == 0.0 || !scale_x.is_finite() || !scale_y.is_finite() {
        return 0.0;
    }

    let mut sum_xy = 0.0;
    let mut sum_xx = 0.0;
    let mut sum_yy = 0.0;
    for (&x, &y) in xs.iter().zip(ys) {
        let dx = (x - mean_x) / scale_x;
        let dy = (y - mean_y) / scale_y;
        sum_xy += dx * dy;
        sum_xx += dx * dx;
        sum_yy += dy * dy;
    }

    let denominator = (sum_xx * sum_yy).sqrt();
    if denominator == 0.0 {
        return 0.0;
    }

    (sum_xy / denominator).clamp(-1.0, 1.0)
}

fn mean(values: &[f64]) -> f64 {
    let n = values.len() as f64;
    let total: f64 = values.iter().sum();
    if total.is_finite() {
        total / n
    } else {
        values.iter().map(|v| v / n).sum()
    }
}
