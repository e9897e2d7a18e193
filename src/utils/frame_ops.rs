use crate::math::{Matrix, Matrix3, Point, Real, RigidTransform, Vector, Vector3};

/// Change-of-frame products between a frame (matrix or transform) and a
/// quantity expressed in it.
///
/// `mul` maps from the local frame to the enclosing frame. `mul_t` applies
/// the transpose and is the inverse mapping **only** if the rotational part
/// is orthonormal. Nothing checks this at runtime; callers are responsible
/// for passing proper rotations.
pub trait FrameOps<Rhs> {
    /// The result of the product.
    type Output;

    /// Local to enclosing frame.
    fn mul(&self, rhs: &Rhs) -> Self::Output;

    /// Enclosing to local frame (transpose product).
    fn mul_t(&self, rhs: &Rhs) -> Self::Output;
}

impl FrameOps<Vector<Real>> for Matrix<Real> {
    type Output = Vector<Real>;

    /// Uses the columns of `self` as basis vectors.
    #[inline]
    fn mul(&self, v: &Vector<Real>) -> Vector<Real> {
        self.column(0) * v.x + self.column(1) * v.y
    }

    #[inline]
    fn mul_t(&self, v: &Vector<Real>) -> Vector<Real> {
        Vector::new(v.dot(&self.column(0)), v.dot(&self.column(1)))
    }
}

impl FrameOps<Matrix<Real>> for Matrix<Real> {
    type Output = Matrix<Real>;

    /// `self * rhs`.
    #[inline]
    fn mul(&self, rhs: &Matrix<Real>) -> Matrix<Real> {
        self * rhs
    }

    /// `selfᵀ * rhs`.
    #[inline]
    fn mul_t(&self, rhs: &Matrix<Real>) -> Matrix<Real> {
        self.tr_mul(rhs)
    }
}

impl FrameOps<Point<Real>> for RigidTransform {
    type Output = Point<Real>;

    /// `position + rotation * p`.
    #[inline]
    fn mul(&self, p: &Point<Real>) -> Point<Real> {
        self.transform_point(p)
    }

    /// `rotationᵀ * (p - position)`.
    #[inline]
    fn mul_t(&self, p: &Point<Real>) -> Point<Real> {
        self.inverse_transform_point(p)
    }
}

impl FrameOps<Vector<Real>> for RigidTransform {
    type Output = Vector<Real>;

    /// Rotates `v`; directions are not affected by the translation.
    #[inline]
    fn mul(&self, v: &Vector<Real>) -> Vector<Real> {
        self.transform_vector(v)
    }

    #[inline]
    fn mul_t(&self, v: &Vector<Real>) -> Vector<Real> {
        self.inverse_transform_vector(v)
    }
}

impl FrameOps<Vector3<Real>> for Matrix3<Real> {
    type Output = Vector3<Real>;

    /// `v.x * c1 + v.y * c2 + v.z * c3`.
    #[inline]
    fn mul(&self, v: &Vector3<Real>) -> Vector3<Real> {
        self.column(0) * v.x + self.column(1) * v.y + self.column(2) * v.z
    }

    #[inline]
    fn mul_t(&self, v: &Vector3<Real>) -> Vector3<Real> {
        Vector3::new(
            v.dot(&self.column(0)),
            v.dot(&self.column(1)),
            v.dot(&self.column(2)),
        )
    }
}

/// Local to enclosing frame, see [`FrameOps::mul`].
#[inline]
pub fn mul<F: FrameOps<Rhs>, Rhs>(frame: &F, rhs: &Rhs) -> F::Output {
    frame.mul(rhs)
}

/// Enclosing to local frame, see [`FrameOps::mul_t`].
#[inline]
pub fn mul_t<F: FrameOps<Rhs>, Rhs>(frame: &F, rhs: &Rhs) -> F::Output {
    frame.mul_t(rhs)
}
