use crate::math::{Point, Real};

/// A circle, possibly offset from its body's origin.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct Circle {
    /// The center of the circle, in the local frame of its body.
    pub center: Point<Real>,
    /// The radius of the circle.
    pub radius: Real,
}

impl Circle {
    /// Creates a new circle centered at its body's origin.
    #[inline]
    pub fn new(radius: Real) -> Circle {
        Self::with_center(Point::origin(), radius)
    }

    /// Creates a new circle centered at `center`, in the local frame of its body.
    #[inline]
    pub fn with_center(center: Point<Real>, radius: Real) -> Circle {
        Circle { center, radius }
    }
}
