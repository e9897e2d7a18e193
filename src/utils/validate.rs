use crate::math::{Matrix, Point, Real, RigidTransform, Vector};

/// Finiteness check used at the boundaries where corrupted values could leak
/// into the solver.
pub trait Validate {
    /// `false` iff some component is NaN or ±infinity.
    fn is_valid(&self) -> bool;
}

impl Validate for Real {
    #[inline]
    fn is_valid(&self) -> bool {
        self.is_finite()
    }
}

impl Validate for Vector<Real> {
    #[inline]
    fn is_valid(&self) -> bool {
        self.iter().all(|e| e.is_finite())
    }
}

impl Validate for Point<Real> {
    #[inline]
    fn is_valid(&self) -> bool {
        self.coords.is_valid()
    }
}

impl Validate for Matrix<Real> {
    #[inline]
    fn is_valid(&self) -> bool {
        self.iter().all(|e| e.is_finite())
    }
}

impl Validate for RigidTransform {
    #[inline]
    fn is_valid(&self) -> bool {
        self.position.is_valid() && self.rotation.is_valid()
    }
}

/// Is `x` neither NaN nor infinite?
#[inline]
pub fn is_valid(x: Real) -> bool {
    x.is_valid()
}
