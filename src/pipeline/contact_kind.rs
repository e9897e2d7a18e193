use crate::math::RigidTransform;
use crate::query::details;
use crate::query::{ContactManifold, UnsupportedShapes};
use crate::shape::{Shape, ShapeType};

/// The narrow-phase routine bound to a contact.
///
/// Each kind is associated to a canonical pair of shape types, the smallest
/// type first. A contact keeps the same kind for its whole lifetime.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ContactKind {
    /// Circle against circle.
    CircleCircle,
    /// Circle against convex polygon.
    CirclePolygon,
    /// Circle against edge.
    CircleEdge,
    /// Convex polygon against convex polygon.
    PolygonPolygon,
    /// Convex polygon against edge.
    PolygonEdge,
}

impl ContactKind {
    /// All the contact kinds.
    pub const ALL: [ContactKind; 5] = [
        ContactKind::CircleCircle,
        ContactKind::CirclePolygon,
        ContactKind::CircleEdge,
        ContactKind::PolygonPolygon,
        ContactKind::PolygonEdge,
    ];

    /// The canonical pair of shape types this kind applies to.
    pub fn shape_types(self) -> (ShapeType, ShapeType) {
        match self {
            ContactKind::CircleCircle => (ShapeType::Circle, ShapeType::Circle),
            ContactKind::CirclePolygon => (ShapeType::Circle, ShapeType::Polygon),
            ContactKind::CircleEdge => (ShapeType::Circle, ShapeType::Edge),
            ContactKind::PolygonPolygon => (ShapeType::Polygon, ShapeType::Polygon),
            ContactKind::PolygonEdge => (ShapeType::Polygon, ShapeType::Edge),
        }
    }

    /// The maximum number of points of the manifolds generated by this kind.
    pub fn max_points(self) -> usize {
        match self {
            ContactKind::CircleCircle | ContactKind::CirclePolygon | ContactKind::CircleEdge => 1,
            ContactKind::PolygonPolygon | ContactKind::PolygonEdge => 2,
        }
    }

    /// Computes the contact manifold between two shapes with the routine of
    /// this kind.
    ///
    /// The shapes must be given in the canonical order of
    /// [`Self::shape_types`], otherwise this fails with [`UnsupportedShapes`]
    /// and `manifold` is left empty.
    pub fn evaluate(
        self,
        manifold: &mut ContactManifold,
        shape1: &Shape,
        pos1: &RigidTransform,
        shape2: &Shape,
        pos2: &RigidTransform,
    ) -> Result<(), UnsupportedShapes> {
        match self {
            ContactKind::CircleCircle => {
                details::contact_manifold_circle_circle_shapes(manifold, shape1, pos1, shape2, pos2)
            }
            ContactKind::CirclePolygon => details::contact_manifold_circle_polygon_shapes(
                manifold, shape1, pos1, shape2, pos2,
            ),
            ContactKind::CircleEdge => {
                details::contact_manifold_circle_edge_shapes(manifold, shape1, pos1, shape2, pos2)
            }
            ContactKind::PolygonPolygon => details::contact_manifold_polygon_polygon_shapes(
                manifold, shape1, pos1, shape2, pos2,
            ),
            ContactKind::PolygonEdge => {
                details::contact_manifold_polygon_edge_shapes(manifold, shape1, pos1, shape2, pos2)
            }
        }
    }
}
