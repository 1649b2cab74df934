//! Fit/transform preprocessing components.
//!
//! The [`traits`] module holds the capability traits every component
//! implements; [`StandardScaler`] is the Z-score implementation.
pub mod standard_scaler;
pub mod traits;

pub use standard_scaler::{FittedStatistics, StandardScaler};
pub use traits::{fit_transform, FitTransform, Fittable, InverseTransformable, Transformable};
