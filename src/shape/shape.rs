use crate::math::{Point, Real, RigidTransform};
use crate::shape::{Circle, Edge, Polygon};

/// Enum representing the type of a shape.
///
/// The order of the variants matters: a contact always stores the shape with
/// the smallest type first.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum ShapeType {
    /// A circle shape.
    Circle = 0,
    /// A convex polygon shape.
    Polygon,
    /// A line segment shape.
    Edge,
}

impl ShapeType {
    /// The number of shape types.
    pub const COUNT: usize = 3;

    /// All the shape types, in increasing order.
    pub const ALL: [ShapeType; Self::COUNT] =
        [ShapeType::Circle, ShapeType::Polygon, ShapeType::Edge];

    /// The index of this type in [`Self::ALL`].
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }
}

/// The geometry attached to a fixture.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub enum Shape {
    /// A circle.
    Circle(Circle),
    /// A convex polygon.
    Polygon(Polygon),
    /// A line segment.
    Edge(Edge),
}

impl Shape {
    /// The type tag of this shape.
    #[inline]
    pub fn shape_type(&self) -> ShapeType {
        match self {
            Shape::Circle(_) => ShapeType::Circle,
            Shape::Polygon(_) => ShapeType::Polygon,
            Shape::Edge(_) => ShapeType::Edge,
        }
    }

    /// Converts this shape to a circle, if it is one.
    #[inline]
    pub fn as_circle(&self) -> Option<&Circle> {
        match self {
            Shape::Circle(circle) => Some(circle),
            _ => None,
        }
    }

    /// Converts this shape to a polygon, if it is one.
    #[inline]
    pub fn as_polygon(&self) -> Option<&Polygon> {
        match self {
            Shape::Polygon(polygon) => Some(polygon),
            _ => None,
        }
    }

    /// Converts this shape to an edge, if it is one.
    #[inline]
    pub fn as_edge(&self) -> Option<&Edge> {
        match self {
            Shape::Edge(edge) => Some(edge),
            _ => None,
        }
    }

    /// The world-space axis-aligned bounds `(mins, maxs)` of this shape
    /// placed at `pos`.
    pub fn compute_aabb(&self, pos: &RigidTransform) -> (Point<Real>, Point<Real>) {
        match self {
            Shape::Circle(circle) => {
                let center = pos.transform_point(&circle.center);
                let extents = crate::math::Vector::repeat(circle.radius);
                (center - extents, center + extents)
            }
            Shape::Polygon(polygon) => bounds_of(polygon.vertices(), pos),
            Shape::Edge(edge) => bounds_of(&[edge.a(), edge.b()], pos),
        }
    }
}

fn bounds_of(points: &[Point<Real>], pos: &RigidTransform) -> (Point<Real>, Point<Real>) {
    let mut mins = Point::from([Real::MAX; 2]);
    let mut maxs = Point::from([-Real::MAX; 2]);

    for pt in points {
        let pt = pos.transform_point(pt);
        mins = mins.inf(&pt);
        maxs = maxs.sup(&pt);
    }

    (mins, maxs)
}

impl From<Circle> for Shape {
    fn from(value: Circle) -> Self {
        Shape::Circle(value)
    }
}

impl From<Polygon> for Shape {
    fn from(value: Polygon) -> Self {
        Shape::Polygon(value)
    }
}

impl From<Edge> for Shape {
    fn from(value: Edge) -> Self {
        Shape::Edge(value)
    }
}
