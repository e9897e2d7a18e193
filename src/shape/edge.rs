use crate::math::{Point, Real, Vector};
use crate::shape::{ConvexPolygonal, PolygonError};
use crate::utils;

/// A line segment, usually static level geometry.
///
/// For contact generation an edge behaves like a two-sided polygon with two
/// vertices: face `0` goes from `a` to `b` with normal `n`, face `1` goes back
/// from `b` to `a` with normal `-n`.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct Edge {
    vertices: [Point<Real>; 2],
    normals: [Vector<Real>; 2],
}

impl Edge {
    /// Creates the segment from `a` to `b`.
    pub fn new(a: Point<Real>, b: Point<Real>) -> Result<Self, PolygonError> {
        let normal =
            utils::ccw_face_normal(&a.coords, &b.coords).ok_or(PolygonError::DegenerateEdge(0))?;
        Ok(Self {
            vertices: [a, b],
            normals: [normal, -normal],
        })
    }

    /// The first endpoint.
    #[inline]
    pub fn a(&self) -> Point<Real> {
        self.vertices[0]
    }

    /// The second endpoint.
    #[inline]
    pub fn b(&self) -> Point<Real> {
        self.vertices[1]
    }

    /// The unit normal of the face going from `a` to `b`.
    #[inline]
    pub fn normal(&self) -> Vector<Real> {
        self.normals[0]
    }

    /// The length of this segment.
    #[inline]
    pub fn length(&self) -> Real {
        (self.vertices[1] - self.vertices[0]).norm()
    }
}

impl ConvexPolygonal for Edge {
    #[inline]
    fn vertices(&self) -> &[Point<Real>] {
        &self.vertices
    }

    #[inline]
    fn normals(&self) -> &[Vector<Real>] {
        &self.normals
    }
}

#[cfg(test)]
mod test {
    use super::Edge;
    use crate::math::{Point, Vector};
    use crate::shape::{ConvexPolygonal, PolygonError};

    #[test]
    fn edge_faces_are_opposite() {
        let edge = Edge::new(Point::new(-1.0, 0.0), Point::new(1.0, 0.0)).unwrap();
        assert_eq!(edge.normal(), Vector::new(0.0, -1.0));
        assert_eq!(edge.normals()[1], Vector::new(0.0, 1.0));
        assert_eq!(edge.length(), 2.0);
    }

    #[test]
    fn degenerate_edge() {
        assert_eq!(
            Edge::new(Point::origin(), Point::origin()),
            Err(PolygonError::DegenerateEdge(0))
        );
    }
}
