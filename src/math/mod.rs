//! Compilation flags dependent aliases for mathematical types.

pub use self::rigid_transform::RigidTransform;
pub use na::{Matrix2, Matrix3, Point2, Vector2, Vector3};

mod rigid_transform;

/// The scalar type used throughout this crate.
///
/// Single precision is required by [`crate::utils::inv_sqrt`], which relies on
/// the IEEE-754 binary32 layout.
pub type Real = f32;

/// The point type.
pub use Point2 as Point;

/// The vector type.
pub use Vector2 as Vector;

/// The 2×2 matrix type, stored as its two column vectors.
pub use Matrix2 as Matrix;

/// The default tolerance used for geometric operations.
pub const DEFAULT_EPSILON: Real = Real::EPSILON;

/// The dimension of the space.
pub const DIM: usize = 2;

/// Distance below which two center points are considered coincident when
/// computing a contact normal.
///
/// Below this threshold the normal falls back to the `+x` axis.
pub const NORMAL_EPSILON: Real = DEFAULT_EPSILON;

/// Tolerance band around zero separation inside of which shapes are
/// considered touching.
///
/// Contacts with a separation up to this value are still reported so
/// resting contacts do not flicker between touching and separated.
pub const LINEAR_SLOP: Real = 0.005;

/// The maximum number of vertices of a [`crate::shape::Polygon`].
pub const MAX_POLYGON_VERTICES: usize = 8;

/// The maximum number of points of a contact manifold.
pub const MAX_MANIFOLD_POINTS: usize = 2;
