//! Capability traits for fit/transform components.
//!
//! A component that learns from data implements [`Fittable`]; one that maps
//! data implements [`Transformable`]. Anything that is both gets
//! [`FitTransform::fit_transform`] for free through the blanket impl, so a
//! third-party component only has to provide the two primitives to work with
//! code written against these traits.
//!
//! The traits are generic over the dataset type `X` so one component can
//! accept several table representations (e.g. `math::Array2` and
//! `ndarray::Array2`).

use crate::error::ScalerError;

/// Learn internal state from a reference dataset.
pub trait Fittable<X: ?Sized> {
    /// Replace any previously learned state with state computed from `x`.
    ///
    /// Returns `self` so calls can be chained (`scaler.fit(&x)?.transform(&y)`).
    fn fit(&mut self, x: &X) -> Result<&mut Self, ScalerError>;
}

/// Map a dataset using previously learned state.
pub trait Transformable<X: ?Sized> {
    type Output;

    fn transform(&self, x: &X) -> Result<Self::Output, ScalerError>;
}

/// Undo [`Transformable::transform`].
pub trait InverseTransformable<X: ?Sized> {
    type Output;

    fn inverse_transform(&self, x: &X) -> Result<Self::Output, ScalerError>;
}

/// `fit` followed by `transform` on the same data.
pub trait FitTransform<X: ?Sized>: Fittable<X> + Transformable<X> {
    fn fit_transform(&mut self, x: &X) -> Result<Self::Output, ScalerError> {
        self.fit(x)?;
        self.transform(x)
    }
}

impl<T, X> FitTransform<X> for T
where
    T: Fittable<X> + Transformable<X>,
    X: ?Sized,
{
}

/// Free-function form of [`FitTransform::fit_transform`].
pub fn fit_transform<T, X>(component: &mut T, x: &X) -> Result<T::Output, ScalerError>
where
    T: Fittable<X> + Transformable<X>,
    X: ?Sized,
{
    component.fit(x)?;
    component.transform(x)
}
