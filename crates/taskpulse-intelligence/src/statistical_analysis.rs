// ABOUTME: Statistical analysis engine for productivity trend calculations
// ABOUTME: Implements least-squares regression, R-squared, significance and guarded summary statistics
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 TaskPulse Contributors

use serde::{Deserialize, Serialize};

use taskpulse_core::errors::{AppError, AppResult};

/// Magnitudes below this are treated as zero in regression arithmetic
const NEAR_ZERO: f64 = 1e-12;

/// Complete linear regression analysis results
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegressionResult {
    /// Slope of the regression line (rate of change per index)
    pub slope: f64,
    /// Y-intercept of the regression line
    pub intercept: f64,
    /// Coefficient of determination (goodness of fit, 0-1)
    pub r_squared: f64,
    /// Pearson correlation coefficient (-1 to 1)
    pub correlation: f64,
    /// Standard error of the estimate
    pub standard_error: f64,
    /// Degrees of freedom (n - 2)
    pub degrees_of_freedom: usize,
    /// P-value for statistical significance testing
    pub p_value: Option<f64>,
}

impl RegressionResult {
    /// Value of the fitted line at `x`
    #[must_use]
    pub fn predict(&self, x: f64) -> f64 {
        self.slope.mul_add(x, self.intercept)
    }
}

/// Statistical significance levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SignificanceLevel {
    /// No statistical significance (p >= 0.1)
    NotSignificant,
    /// Weak significance (p < 0.1)
    Weak,
    /// Moderate significance (p < 0.05)
    Moderate,
    /// Strong significance (p < 0.01)
    Strong,
}

impl SignificanceLevel {
    /// Create significance level from p-value
    #[must_use]
    pub fn from_p_value(p_value: Option<f64>) -> Self {
        match p_value {
            Some(p) if p < 0.01 => Self::Strong,
            Some(p) if p < 0.05 => Self::Moderate,
            Some(p) if p < 0.1 => Self::Weak,
            _ => Self::NotSignificant,
        }
    }
}

/// Statistical analyzer with guarded implementations
///
/// Every function has a defined result for empty input and zero variance.
pub struct StatisticalAnalyzer;

impl StatisticalAnalyzer {
    /// Least-squares regression of `values` against their index (0, 1, 2, ...)
    ///
    /// # Errors
    ///
    /// Returns an error if there are fewer than 2 values or any value is non-finite
    pub fn linear_regression(values: &[f64]) -> AppResult<RegressionResult> {
        if values.len() < 2 {
            return Err(AppError::invalid_input(format!(
                "Insufficient data points for regression: need at least 2, got {}",
                values.len()
            )));
        }

        if values.iter().any(|v| !v.is_finite()) {
            return Err(AppError::invalid_input(
                "Cannot calculate regression over non-finite values",
            ));
        }

        let n = values.len() as f64;
        let x_values: Vec<f64> = (0..values.len()).map(|i| i as f64).collect();

        let sum_x = x_values.iter().sum::<f64>();
        let sum_y = values.iter().sum::<f64>();
        let sum_xx = x_values.iter().map(|x| x * x).sum::<f64>();
        let sum_x_y = x_values
            .iter()
            .zip(values)
            .map(|(x, y)| x * y)
            .sum::<f64>();
        let sum_yy = values.iter().map(|y| y * y).sum::<f64>();

        let mean_x = sum_x / n;
        let mean_y = sum_y / n;

        let denominator = (n * mean_x).mul_add(-mean_x, sum_xx);
        if denominator.abs() < f64::EPSILON {
            return Err(AppError::invalid_input(
                "Cannot calculate regression: zero variance in x",
            ));
        }

        let slope = (n * mean_x).mul_add(-mean_y, sum_x_y) / denominator;
        let intercept = slope.mul_add(-mean_x, mean_y);

        let numerator = (n * mean_x).mul_add(-mean_y, sum_x_y);
        let y_spread = (n * mean_y).mul_add(-mean_y, sum_yy);

        // Flat series: the line fits perfectly but correlation is undefined
        let (correlation, r_squared) = if y_spread.abs() < NEAR_ZERO {
            (0.0, 1.0)
        } else {
            let correlation = (numerator / (denominator * y_spread).sqrt()).clamp(-1.0, 1.0);
            (correlation, correlation * correlation)
        };

        let sse = x_values
            .iter()
            .zip(values)
            .map(|(x, actual)| {
                let diff = actual - slope.mul_add(*x, intercept);
                diff * diff
            })
            .sum::<f64>();

        let degrees_of_freedom = values.len().saturating_sub(2);
        let standard_error = if degrees_of_freedom > 0 {
            (sse / degrees_of_freedom as f64).sqrt()
        } else {
            0.0
        };

        let p_value = if degrees_of_freedom > 0 && standard_error > NEAR_ZERO {
            let se_slope = standard_error / denominator.sqrt();
            let t_stat = slope / se_slope;
            Some(Self::t_test_p_value(t_stat.abs(), degrees_of_freedom))
        } else {
            None
        };

        Ok(RegressionResult {
            slope,
            intercept,
            r_squared,
            correlation,
            standard_error,
            degrees_of_freedom,
            p_value,
        })
    }

    /// Arithmetic mean, 0 for an empty slice
    #[must_use]
    pub fn mean(values: &[f64]) -> f64 {
        if values.is_empty() {
            return 0.0;
        }
        values.iter().sum::<f64>() / values.len() as f64
    }

    /// Sample standard deviation (n - 1), 0 for fewer than 2 values
    #[must_use]
    pub fn std_dev(values: &[f64]) -> f64 {
        if values.len() < 2 {
            return 0.0;
        }
        let mean = Self::mean(values);
        let variance = values
            .iter()
            .map(|v| {
                let diff = v - mean;
                diff * diff
            })
            .sum::<f64>()
            / (values.len() - 1) as f64;
        variance.sqrt()
    }

    /// `numerator / denominator`, or `fallback` when the denominator is zero
    #[must_use]
    pub fn safe_ratio(numerator: f64, denominator: f64, fallback: f64) -> f64 {
        if denominator.abs() < f64::EPSILON {
            return fallback;
        }
        let ratio = numerator / denominator;
        if ratio.is_finite() {
            ratio
        } else {
            fallback
        }
    }

    /// Simplified t-test p-value calculation (two-tailed)
    fn t_test_p_value(t_stat: f64, df: usize) -> f64 {
        if df == 0 {
            return 1.0;
        }

        // Normal approximation of the t distribution
        let z_equivalent = t_stat / (1.0 + t_stat * t_stat / (4.0 * df as f64)).sqrt();

        (2.0 * (1.0 - Self::standard_normal_cdf(z_equivalent.abs()))).clamp(0.0, 1.0)
    }

    /// Standard normal cumulative distribution function approximation
    fn standard_normal_cdf(x: f64) -> f64 {
        // Abramowitz and Stegun 26.2.17
        let x = x.abs();
        let t = 1.0 / 0.231_641_9f64.mul_add(x, 1.0);
        let poly = t.mul_add(
            t.mul_add(
                t.mul_add(t.mul_add(1.330_274_429, -1.821_255_978), 1.781_477_937),
                -0.356_563_782,
            ),
            0.319_381_530,
        );
        (0.398_942_3 * (x * x * -0.5).exp()).mul_add(-(t * poly), 1.0)
    }
}
