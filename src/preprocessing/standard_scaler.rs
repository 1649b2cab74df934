//! Z-score standardization: `(x - mean) / spread` per feature column.
//!
//! ```
//! use zscore_scaler::math::Array2;
//! use zscore_scaler::preprocessing::{Fittable, StandardScaler, Transformable};
//!
//! let x = Array2::from_rows(vec![vec![1.0, 10.0], vec![2.0, 20.0], vec![3.0, 30.0]]).unwrap();
//! let mut scaler = StandardScaler::new();
//! let z = scaler.fit(&x)?.transform(&Array2::from_rows(vec![vec![2.0, 20.0]]).unwrap())?;
//! assert_eq!(z.row_slice(0), &[0.0, 0.0]);
//! # Ok::<(), zscore_scaler::error::ScalerError>(())
//! ```

use serde::{Deserialize, Serialize};

use crate::config::ScalerConfig;
use crate::error::ScalerError;
use crate::math::Array2;
use crate::preprocessing::traits::{Fittable, InverseTransformable, Transformable};
use crate::stats::{column_moments, first_non_finite};

/// Per-column statistics learned by [`StandardScaler`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FittedStatistics {
    mean: Vec<f64>,
    spread: Vec<f64>,
    n_samples_seen: usize,
}

impl FittedStatistics {
    pub fn new(
        mean: Vec<f64>,
        spread: Vec<f64>,
        n_samples_seen: usize,
    ) -> Result<Self, ScalerError> {
        let stats = FittedStatistics {
            mean,
            spread,
            n_samples_seen,
        };
        stats.validate()?;
        Ok(stats)
    }

    /// Check invariants that deserialized data cannot guarantee.
    pub fn validate(&self) -> Result<(), ScalerError> {
        if self.mean.len() != self.spread.len() {
            return Err(ScalerError::InvalidInput(format!(
                "mean has {} entries but spread has {}",
                self.mean.len(),
                self.spread.len()
            )));
        }
        if self.mean.is_empty() {
            return Err(ScalerError::InvalidInput(
                "statistics must cover at least one feature".to_string(),
            ));
        }
        if self.spread.iter().any(|s| !s.is_finite() || *s < 0.0) {
            return Err(ScalerError::InvalidInput(
                "spread values must be finite and non-negative".to_string(),
            ));
        }
        if self.mean.iter().any(|m| !m.is_finite()) {
            return Err(ScalerError::InvalidInput(
                "mean values must be finite".to_string(),
            ));
        }
        Ok(())
    }

    pub fn mean(&self) -> &[f64] {
        &self.mean
    }

    /// Population standard deviation of each column.
    pub fn spread(&self) -> &[f64] {
        &self.spread
    }

    pub fn n_features(&self) -> usize {
        self.mean.len()
    }

    pub fn n_samples_seen(&self) -> usize {
        self.n_samples_seen
    }

    fn check_features(&self, found: usize) -> Result<(), ScalerError> {
        if found != self.n_features() {
            return Err(ScalerError::ShapeMismatch {
                expected: self.n_features(),
                found,
            });
        }
        Ok(())
    }

    fn first_zero_spread(&self) -> Option<usize> {
        self.spread.iter().position(|&s| s == 0.0)
    }
}

/// Standardizes features by removing the mean and dividing by the population
/// standard deviation learned during `fit`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StandardScaler {
    config: ScalerConfig,
    statistics: Option<FittedStatistics>,
}

impl StandardScaler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: ScalerConfig) -> Self {
        StandardScaler {
            config,
            statistics: None,
        }
    }

    pub fn with_mean(mut self, with_mean: bool) -> Self {
        self.config.with_mean = with_mean;
        self
    }

    pub fn with_std(mut self, with_std: bool) -> Self {
        self.config.with_std = with_std;
        self
    }

    /// Rebuild a fitted scaler, e.g. from statistics loaded off disk.
    pub fn from_statistics(
        config: ScalerConfig,
        statistics: FittedStatistics,
    ) -> Result<Self, ScalerError> {
        statistics.validate()?;
        Ok(StandardScaler {
            config,
            statistics: Some(statistics),
        })
    }

    pub fn config(&self) -> &ScalerConfig {
        &self.config
    }

    pub fn statistics(&self) -> Option<&FittedStatistics> {
        self.statistics.as_ref()
    }

    pub fn is_fitted(&self) -> bool {
        self.statistics.is_some()
    }

    pub fn n_features(&self) -> Option<usize> {
        self.statistics.as_ref().map(FittedStatistics::n_features)
    }

    fn fitted(&self) -> Result<&FittedStatistics, ScalerError> {
        self.statistics.as_ref().ok_or(ScalerError::NotFitted)
    }
}

impl Fittable<Array2<f64>> for StandardScaler {
    fn fit(&mut self, x: &Array2<f64>) -> Result<&mut Self, ScalerError> {
        let (nrows, ncols) = x.shape();
        if nrows == 0 {
            return Err(ScalerError::InvalidInput(
                "cannot fit on a dataset with zero rows".to_string(),
            ));
        }
        if ncols == 0 {
            return Err(ScalerError::InvalidInput(
                "cannot fit on a dataset with zero feature columns".to_string(),
            ));
        }
        if let Some((row, col)) = first_non_finite(x) {
            return Err(ScalerError::InvalidInput(format!(
                "non-finite value {} at row {}, column {}",
                x[(row, col)],
                row,
                col
            )));
        }

        let moments = column_moments(x).ok_or_else(|| {
            ScalerError::InvalidInput("cannot fit on a dataset with zero rows".to_string())
        })?;
        let (mean, spread): (Vec<f64>, Vec<f64>) =
            moments.into_iter().map(|m| (m.mean, m.spread)).unzip();

        // Finite inputs can still overflow the accumulators.
        let stats = FittedStatistics::new(mean, spread, nrows).map_err(|_| {
            ScalerError::InvalidInput(
                "column statistics overflow f64; rescale the input before fitting".to_string(),
            )
        })?;
        if self.config.with_std {
            if let Some(col) = stats.first_zero_spread() {
                log::warn!(
                    "Feature column {} is constant; transform will fail until it is removed",
                    col
                );
            }
        }
        log::debug!("Fitted StandardScaler on {} rows x {} features", nrows, ncols);

        self.statistics = Some(stats);
        Ok(self)
    }
}

impl Transformable<Array2<f64>> for StandardScaler {
    type Output = Array2<f64>;

    fn transform(&self, x: &Array2<f64>) -> Result<Array2<f64>, ScalerError> {
        let stats = self.fitted()?;
        stats.check_features(x.ncols())?;
        if self.config.with_std {
            if let Some(column) = stats.first_zero_spread() {
                return Err(ScalerError::DivisionByZero { column });
            }
        }

        let ScalerConfig {
            with_mean,
            with_std,
        } = self.config;
        log::debug!("Transforming {} rows x {} features", x.nrows(), x.ncols());
        Ok(x.map_columns(|c, &v| {
            let centered = if with_mean { v - stats.mean[c] } else { v };
            if with_std {
                centered / stats.spread[c]
            } else {
                centered
            }
        }))
    }
}

impl InverseTransformable<Array2<f64>> for StandardScaler {
    type Output = Array2<f64>;

    fn inverse_transform(&self, x: &Array2<f64>) -> Result<Array2<f64>, ScalerError> {
        let stats = self.fitted()?;
        stats.check_features(x.ncols())?;

        let ScalerConfig {
            with_mean,
            with_std,
        } = self.config;
        Ok(x.map_columns(|c, &v| {
            let scaled = if with_std { v * stats.spread[c] } else { v };
            if with_mean {
                scaled + stats.mean[c]
            } else {
                scaled
            }
        }))
    }
}

impl Fittable<ndarray::Array2<f64>> for StandardScaler {
    fn fit(&mut self, x: &ndarray::Array2<f64>) -> Result<&mut Self, ScalerError> {
        <Self as Fittable<Array2<f64>>>::fit(self, &Array2::from(x))?;
        Ok(self)
    }
}

impl Transformable<ndarray::Array2<f64>> for StandardScaler {
    type Output = ndarray::Array2<f64>;

    fn transform(&self, x: &ndarray::Array2<f64>) -> Result<ndarray::Array2<f64>, ScalerError> {
        <Self as Transformable<Array2<f64>>>::transform(self, &Array2::from(x))
            .map(|out| out.to_ndarray())
    }
}

impl InverseTransformable<ndarray::Array2<f64>> for StandardScaler {
    type Output = ndarray::Array2<f64>;

    fn inverse_transform(
        &self,
        x: &ndarray::Array2<f64>,
    ) -> Result<ndarray::Array2<f64>, ScalerError> {
        <Self as InverseTransformable<Array2<f64>>>::inverse_transform(self, &Array2::from(x))
            .map(|out| out.to_ndarray())
    }
}
