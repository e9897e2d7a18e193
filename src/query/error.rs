use crate::shape::{PackedFeatureId, Shape, ShapeType};

/// A broken invariant of a contact manifold produced by a narrow-phase
/// routine.
///
/// This always indicates a bug in the routine that generated the manifold.
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq, Eq)]
pub enum ManifoldError {
    /// The manifold has more points than its shape pair allows.
    #[error("the manifold has {count} points but at most {max} are allowed for this shape pair.")]
    TooManyPoints {
        /// The number of points found.
        count: usize,
        /// The maximum number of points for the shape pair.
        max: usize,
    },
    /// Two points of the manifold share the same feature identifier.
    #[error("two contact points share the feature identifier ({fid1:?}, {fid2:?}).")]
    DuplicateFeature {
        /// The feature of the first shape.
        fid1: PackedFeatureId,
        /// The feature of the second shape.
        fid2: PackedFeatureId,
    },
}

/// Error returned by a query given shapes of types it does not handle.
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq, Eq)]
#[error("this query expects the shapes ({expected1:?}, {expected2:?}), got ({found1:?}, {found2:?}).")]
pub struct UnsupportedShapes {
    /// The type the first shape was expected to have.
    pub expected1: ShapeType,
    /// The type the second shape was expected to have.
    pub expected2: ShapeType,
    /// The type of the first shape given.
    pub found1: ShapeType,
    /// The type of the second shape given.
    pub found2: ShapeType,
}

impl UnsupportedShapes {
    /// The error for a query expecting the types `expected1` and `expected2`
    /// but given `shape1` and `shape2`.
    pub fn new(expected1: ShapeType, expected2: ShapeType, shape1: &Shape, shape2: &Shape) -> Self {
        Self {
            expected1,
            expected2,
            found1: shape1.shape_type(),
            found2: shape2.shape_type(),
        }
    }
}
