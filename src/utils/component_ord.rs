use crate::math::{Matrix, Real, Vector};

/// Component-wise ordering operations on scalars, vectors and matrices.
///
/// Vectors and matrices are compared component by component, so
/// `a.component_min(b)` is not necessarily equal to either `a` or `b`.
pub trait ComponentOrd: Copy {
    /// The component-wise minimum of `self` and `other`.
    fn component_min(self, other: Self) -> Self;

    /// The component-wise maximum of `self` and `other`.
    fn component_max(self, other: Self) -> Self;

    /// Clamps each component of `self` to `[lo, hi]`.
    ///
    /// Computed as `max(lo, min(self, hi))`: if `lo > hi` for some component
    /// the result is `lo` for that component.
    #[inline]
    fn clamp_between(self, lo: Self, hi: Self) -> Self {
        lo.component_max(self.component_min(hi))
    }
}

macro_rules! impl_component_ord_scalar(
    ($($t: ty),*) => {$(
        impl ComponentOrd for $t {
            #[inline]
            fn component_min(self, other: Self) -> Self {
                if self < other { self } else { other }
            }

            #[inline]
            fn component_max(self, other: Self) -> Self {
                if self > other { self } else { other }
            }
        }
    )*}
);

impl_component_ord_scalar!(Real, i32, u32);

impl ComponentOrd for Vector<Real> {
    #[inline]
    fn component_min(self, other: Self) -> Self {
        self.zip_map(&other, ComponentOrd::component_min)
    }

    #[inline]
    fn component_max(self, other: Self) -> Self {
        self.zip_map(&other, ComponentOrd::component_max)
    }
}

impl ComponentOrd for Matrix<Real> {
    #[inline]
    fn component_min(self, other: Self) -> Self {
        self.zip_map(&other, ComponentOrd::component_min)
    }

    #[inline]
    fn component_max(self, other: Self) -> Self {
        self.zip_map(&other, ComponentOrd::component_max)
    }
}

/// The component-wise minimum of `a` and `b`.
#[inline]
pub fn min<T: ComponentOrd>(a: T, b: T) -> T {
    a.component_min(b)
}

/// The component-wise maximum of `a` and `b`.
#[inline]
pub fn max<T: ComponentOrd>(a: T, b: T) -> T {
    a.component_max(b)
}

/// Clamps `a` component-wise to `[lo, hi]`, i.e., `max(lo, min(a, hi))`.
#[inline]
pub fn clamp<T: ComponentOrd>(a: T, lo: T, hi: T) -> T {
    a.clamp_between(lo, hi)
}
