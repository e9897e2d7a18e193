use crate::math::{Matrix, Real, Vector};

/// `1 / val`, or `0` if `val` is exactly zero.
#[inline]
pub fn inv(val: Real) -> Real {
    if val == 0.0 {
        0.0
    } else {
        1.0 / val
    }
}

/// The 2D cross product `a.x * b.y - a.y * b.x`.
#[inline]
pub fn cross(a: &Vector<Real>, b: &Vector<Real>) -> Real {
    a.x * b.y - a.y * b.x
}

/// The cross product of a vector and a scalar (out-of-plane vector):
/// `(s * v.y, -s * v.x)`.
#[inline]
pub fn cross_vs(v: &Vector<Real>, s: Real) -> Vector<Real> {
    Vector::new(s * v.y, -s * v.x)
}

/// The cross product of a scalar (out-of-plane vector) and a vector:
/// `(-s * v.y, s * v.x)`.
#[inline]
pub fn cross_sv(s: Real, v: &Vector<Real>) -> Vector<Real> {
    Vector::new(-s * v.y, s * v.x)
}

/// The rotation matrix of angle `angle` (radians, counterclockwise).
#[inline]
pub fn rotation_from_angle(angle: Real) -> Matrix<Real> {
    let (s, c) = angle.sin_cos();
    Matrix::new(c, -s, s, c)
}

/// The angle of the rotation matrix `rot`, in `[-π, π]`.
#[inline]
pub fn rotation_angle(rot: &Matrix<Real>) -> Real {
    rot[(1, 0)].atan2(rot[(0, 0)])
}

/// The outward normal of the segment `a -> b` for a polygon wound
/// counterclockwise, or `None` if the segment is degenerate.
#[inline]
pub fn ccw_face_normal(a: &Vector<Real>, b: &Vector<Real>) -> Option<Vector<Real>> {
    let ab = b - a;
    let normal = Vector::new(ab.y, -ab.x);
    let length = normal.norm();

    if length > crate::math::DEFAULT_EPSILON {
        Some(normal / length)
    } else {
        None
    }
}
