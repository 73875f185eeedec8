//! Descriptive statistics for the reporting views
//!
//! Quantiles, box-plot summaries and correlation over plain `f64` series.
//! Every function is total: empty or single-point input yields a defined
//! degenerate result instead of an error.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Statistical utilities for analytics
pub struct StatisticalAnalyzer;

impl StatisticalAnalyzer {
    /// Sort a copy of the data ascending
    pub fn sorted(data: &[f64]) -> Vec<f64> {
        let mut sorted_data = data.to_vec();
        // NaN values compare equal and keep their relative position
        sorted_data.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));
        sorted_data
    }

    /// Quantile of ascending data by linear interpolation between closest ranks
    ///
    /// `p` is clamped to `[0, 1]`. Returns 0.0 for empty input.
    #[allow(clippy::cast_precision_loss)]
    #[allow(clippy::cast_possible_truncation)]
    #[allow(clippy::cast_sign_loss)]
    pub fn quantile(sorted_data: &[f64], p: f64) -> f64 {
        let count = sorted_data.len();
        if count == 0 {
            return 0.0;
        }

        let p = p.clamp(0.0, 1.0);
        // SAFETY: usize to f64 for rank calculation
        let rank = p * (count - 1) as f64;
        let lower = rank.floor() as usize;
        let upper = rank.ceil() as usize;
        let weight = rank - lower as f64;

        sorted_data[lower] + (sorted_data[upper] - sorted_data[lower]) * weight
    }

    /// Median of ascending data
    pub fn median(sorted_data: &[f64]) -> f64 {
        Self::quantile(sorted_data, 0.5)
    }

    /// Calculate correlation between two series
    #[allow(clippy::cast_precision_loss)]
    pub fn correlation(x: &[f64], y: &[f64]) -> f64 {
        if x.len() != y.len() || x.len() < 2 {
            return 0.0;
        }

        // SAFETY: usize to f64 for statistical calculation
        let n = x.len() as f64;
        let mean_x = x.iter().sum::<f64>() / n;
        let mean_y = y.iter().sum::<f64>() / n;

        let mut numerator = 0.0;
        let mut sum_sq_x = 0.0;
        let mut sum_sq_y = 0.0;

        for (xi, yi) in x.iter().zip(y.iter()) {
            let dx = xi - mean_x;
            let dy = yi - mean_y;
            numerator += dx * dy;
            sum_sq_x += dx * dx;
            sum_sq_y += dy * dy;
        }

        let denominator = (sum_sq_x * sum_sq_y).sqrt();
        if denominator > 0.0 {
            numerator / denominator
        } else {
            0.0
        }
    }
}

/// Five-number summary plus Tukey whiskers and outliers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoxPlotSummary {
    /// Number of observations
    pub count: usize,
    /// Smallest observation
    pub min: f64,
    /// First quartile
    pub q1: f64,
    /// Median
    pub median: f64,
    /// Third quartile
    pub q3: f64,
    /// Largest observation
    pub max: f64,
    /// Smallest observation inside the lower fence
    pub lower_whisker: f64,
    /// Largest observation inside the upper fence
    pub upper_whisker: f64,
    /// Observations outside the fences, ascending
    pub outliers: Vec<f64>,
}

impl Default for BoxPlotSummary {
    fn default() -> Self {
        Self {
            count: 0,
            min: 0.0,
            q1: 0.0,
            median: 0.0,
            q3: 0.0,
            max: 0.0,
            lower_whisker: 0.0,
            upper_whisker: 0.0,
            outliers: Vec::new(),
        }
    }
}

impl BoxPlotSummary {
    /// Summarize a series with fences at `whisker_factor` × IQR beyond the quartiles
    ///
    /// A single observation yields a summary where every statistic equals it.
    pub fn from_values(values: &[f64], whisker_factor: f64) -> Self {
        if values.is_empty() {
            return Self::default();
        }

        let sorted_data = StatisticalAnalyzer::sorted(values);
        let count = sorted_data.len();
        let q1 = StatisticalAnalyzer::quantile(&sorted_data, 0.25);
        let median = StatisticalAnalyzer::median(&sorted_data);
        let q3 = StatisticalAnalyzer::quantile(&sorted_data, 0.75);

        let iqr = q3 - q1;
        let lower_fence = q1 - whisker_factor * iqr;
        let upper_fence = q3 + whisker_factor * iqr;

        let mut outliers = Vec::new();
        let mut lower_whisker = None;
        let mut upper_whisker = None;
        for &value in &sorted_data {
            if value < lower_fence || value > upper_fence {
                outliers.push(value);
            } else {
                lower_whisker.get_or_insert(value);
                upper_whisker = Some(value);
            }
        }

        Self {
            count,
            min: sorted_data[0],
            q1,
            median,
            q3,
            max: sorted_data[count - 1],
            // The quartiles always lie inside the fences, so some value does too
            lower_whisker: lower_whisker.unwrap_or(q1),
            upper_whisker: upper_whisker.unwrap_or(q3),
            outliers,
        }
    }

    /// Interquartile range
    pub fn iqr(&self) -> f64 {
        self.q3 - self.q1
    }
}
