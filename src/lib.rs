//! zscore-scaler: fit/transform feature standardization.
//!
//! A [`StandardScaler`] learns per-column mean and population standard
//! deviation from a reference dataset and rescales any dataset with the same
//! column layout to zero mean and unit spread. Components plug into the
//! [`Fittable`] / [`Transformable`] capability traits, which give
//! `fit_transform` to anything implementing both.
//!
//! Around the core sit small helpers for reading numeric CSV/TSV tables,
//! persisting fitted statistics as JSON and initialising logging.
pub mod config;
pub mod error;
pub mod io;
pub mod logging;
pub mod math;
pub mod preprocessing;
pub mod stats;

pub use config::ScalerConfig;
pub use error::ScalerError;
pub use preprocessing::{
    fit_transform, FitTransform, Fittable, FittedStatistics, InverseTransformable,
    StandardScaler, Transformable,
};
