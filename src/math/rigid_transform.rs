use crate::math::{Matrix, Point, Real, Vector};
use crate::utils;

/// The local-to-world frame of a rigid body: a position and a rotation matrix.
///
/// The rotation must stay orthonormal (a proper rotation). Inverse transforms
/// multiply by the transpose of the rotation, which is only an inverse under
/// that condition. Use [`RigidTransform::new`] to build the rotation from an
/// angle so the invariant holds by construction.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RigidTransform {
    /// The translational part of this transform.
    pub position: Vector<Real>,
    /// The rotational part of this transform.
    pub rotation: Matrix<Real>,
}

impl Default for RigidTransform {
    fn default() -> Self {
        Self::identity()
    }
}

impl RigidTransform {
    /// Creates a transform from a position and a rotation angle in radians.
    #[inline]
    pub fn new(position: Vector<Real>, angle: Real) -> Self {
        Self {
            position,
            rotation: utils::rotation_from_angle(angle),
        }
    }

    /// Creates a transform from a position and an already computed rotation
    /// matrix.
    ///
    /// The caller guarantees `rotation` is orthonormal. This is only checked
    /// in debug builds.
    #[inline]
    pub fn from_parts(position: Vector<Real>, rotation: Matrix<Real>) -> Self {
        debug_assert!(
            relative_eq!(
                rotation.tr_mul(&rotation),
                Matrix::identity(),
                epsilon = 1.0e-4
            ),
            "the rotation of a rigid transform must be orthonormal"
        );
        Self { position, rotation }
    }

    /// The identity transform.
    #[inline]
    pub fn identity() -> Self {
        Self {
            position: Vector::zeros(),
            rotation: Matrix::identity(),
        }
    }

    /// A pure translation.
    #[inline]
    pub fn translation(x: Real, y: Real) -> Self {
        Self {
            position: Vector::new(x, y),
            rotation: Matrix::identity(),
        }
    }

    /// The rotation angle of this transform, in radians.
    #[inline]
    pub fn angle(&self) -> Real {
        utils::rotation_angle(&self.rotation)
    }

    /// Maps a point from this frame to the world frame.
    #[inline]
    pub fn transform_point(&self, pt: &Point<Real>) -> Point<Real> {
        Point::from(self.position + self.rotation * pt.coords)
    }

    /// Maps a vector from this frame to the world frame (rotation only).
    #[inline]
    pub fn transform_vector(&self, v: &Vector<Real>) -> Vector<Real> {
        self.rotation * v
    }

    /// Maps a world-space point into this frame.
    #[inline]
    pub fn inverse_transform_point(&self, pt: &Point<Real>) -> Point<Real> {
        Point::from(self.rotation.tr_mul(&(pt.coords - self.position)))
    }

    /// Maps a world-space vector into this frame (rotation only).
    #[inline]
    pub fn inverse_transform_vector(&self, v: &Vector<Real>) -> Vector<Real> {
        self.rotation.tr_mul(v)
    }

    /// The inverse of this transform.
    #[inline]
    pub fn inverse(&self) -> Self {
        let rotation = self.rotation.transpose();
        Self {
            position: -(rotation * self.position),
            rotation,
        }
    }

    /// Computes `self⁻¹ * rhs`: the frame `rhs` expressed in `self`'s frame.
    #[inline]
    pub fn inv_mul(&self, rhs: &Self) -> Self {
        Self {
            position: self.rotation.tr_mul(&(rhs.position - self.position)),
            rotation: self.rotation.tr_mul(&rhs.rotation),
        }
    }
}

impl core::ops::Mul for RigidTransform {
    type Output = RigidTransform;

    #[inline]
    fn mul(self, rhs: RigidTransform) -> RigidTransform {
        RigidTransform {
            position: self.position + self.rotation * rhs.position,
            rotation: self.rotation * rhs.rotation,
        }
    }
}

impl core::ops::Mul<Point<Real>> for &RigidTransform {
    type Output = Point<Real>;

    #[inline]
    fn mul(self, rhs: Point<Real>) -> Point<Real> {
        self.transform_point(&rhs)
    }
}
