//! Per-column summary statistics over an `Array2<f64>`.
//!
//! Columns are independent, so each one is reduced on the rayon pool. The
//! output order always follows the column order of the input.

use rayon::prelude::*;

use crate::math::{Array1, Array2};

/// Mean and population standard deviation of a single column.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColumnMoments {
    pub mean: f64,
    pub spread: f64,
}

impl ColumnMoments {
    /// Returns `None` for an empty column.
    ///
    /// A column whose values are all identical gets a spread of exactly `0.0`
    /// so callers can compare against zero without a tolerance.
    pub fn of(column: &Array1<f64>) -> Option<Self> {
        let mean = column.mean()?;
        let first = column[0];
        let spread = if column.iter().all(|&v| v == first) {
            0.0
        } else {
            column.population_std_dev()?
        };
        Some(ColumnMoments { mean, spread })
    }
}

/// Moments for every column of `x`, or `None` when `x` has no rows.
pub fn column_moments(x: &Array2<f64>) -> Option<Vec<ColumnMoments>> {
    if x.nrows() == 0 {
        return None;
    }
    (0..x.ncols())
        .into_par_iter()
        .map(|c| ColumnMoments::of(&x.column(c)))
        .collect()
}

pub fn column_means(x: &Array2<f64>) -> Option<Vec<f64>> {
    column_moments(x).map(|m| m.into_iter().map(|c| c.mean).collect())
}

/// Population standard deviation (divisor = row count) of every column.
pub fn column_std_devs(x: &Array2<f64>) -> Option<Vec<f64>> {
    column_moments(x).map(|m| m.into_iter().map(|c| c.spread).collect())
}

/// Position `(row, col)` of the first NaN or infinite cell, in row-major order.
pub fn first_non_finite(x: &Array2<f64>) -> Option<(usize, usize)> {
    let cols = x.ncols();
    x.as_slice()
        .iter()
        .position(|v| !v.is_finite())
        .map(|idx| (idx / cols, idx % cols))
}
