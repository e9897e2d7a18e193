use crate::math::{Point, Real, Vector, MAX_POLYGON_VERTICES};
use crate::utils;

/// Error returned when building a [`Polygon`] from invalid vertices.
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq, Eq)]
pub enum PolygonError {
    /// Less than three vertices were given.
    #[error("a polygon needs at least 3 vertices, got {0}.")]
    TooFewVertices(usize),
    /// More than [`MAX_POLYGON_VERTICES`] vertices were given.
    #[error("a polygon can have at most {max} vertices, got {count}.", max = MAX_POLYGON_VERTICES)]
    TooManyVertices {
        /// The number of vertices given.
        count: usize,
    },
    /// The edge starting at the given vertex has a zero length.
    #[error("the edge starting at vertex {0} is degenerate.")]
    DegenerateEdge(usize),
    /// The vertices do not describe a strictly convex polygon.
    #[error("the vertex {vertex} lies on the wrong side of the edge starting at vertex {edge}.")]
    NotConvex {
        /// The edge the vertex is tested against.
        edge: usize,
        /// The offending vertex.
        vertex: usize,
    },
}

/// Shapes whose boundary is a closed convex chain of vertices with outward
/// face normals.
///
/// Face `i` goes from vertex `i` to vertex `i + 1` (modulo the number of
/// vertices) and has the outward normal `normals()[i]`.
pub trait ConvexPolygonal {
    /// The vertices, in counterclockwise order.
    fn vertices(&self) -> &[Point<Real>];

    /// The unit outward normal of each face.
    fn normals(&self) -> &[Vector<Real>];

    /// The index of the vertex furthest along `dir`.
    fn support_point_id(&self, dir: &Vector<Real>) -> usize {
        let mut best_dot = -Real::MAX;
        let mut best_i = 0;

        for (i, pt) in self.vertices().iter().enumerate() {
            let dot = pt.coords.dot(dir);

            if dot > best_dot {
                best_dot = dot;
                best_i = i;
            }
        }

        best_i
    }
}

/// A convex polygon with at most [`MAX_POLYGON_VERTICES`] vertices.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct Polygon {
    vertices: Vec<Point<Real>>,
    normals: Vec<Vector<Real>>,
}

impl Polygon {
    /// Builds a convex polygon from its vertices.
    ///
    /// Clockwise input is reversed to counterclockwise order. Collinear
    /// consecutive vertices are rejected as non-convex.
    pub fn new(mut vertices: Vec<Point<Real>>) -> Result<Self, PolygonError> {
        let count = vertices.len();

        if count < 3 {
            return Err(PolygonError::TooFewVertices(count));
        }

        if count > MAX_POLYGON_VERTICES {
            return Err(PolygonError::TooManyVertices { count });
        }

        if signed_area(&vertices) < 0.0 {
            vertices.reverse();
        }

        let mut normals = Vec::with_capacity(count);

        for i1 in 0..count {
            let i2 = (i1 + 1) % count;
            let normal = utils::ccw_face_normal(&vertices[i1].coords, &vertices[i2].coords)
                .ok_or(PolygonError::DegenerateEdge(i1))?;
            normals.push(normal);
        }

        for i1 in 0..count {
            let i2 = (i1 + 1) % count;
            let edge = vertices[i2] - vertices[i1];

            for j in (0..count).filter(|j| *j != i1 && *j != i2) {
                if utils::cross(&edge, &(vertices[j] - vertices[i1])) <= 0.0 {
                    return Err(PolygonError::NotConvex {
                        edge: i1,
                        vertex: j,
                    });
                }
            }
        }

        Ok(Self { vertices, normals })
    }

    /// An axis-aligned box centered at the origin with the given half-extents.
    ///
    /// Both half-extents must be positive.
    pub fn cuboid(half_width: Real, half_height: Real) -> Self {
        debug_assert!(
            half_width > 0.0 && half_height > 0.0,
            "The half-extents of a cuboid must be positive."
        );
        Self {
            vertices: vec![
                Point::new(-half_width, -half_height),
                Point::new(half_width, -half_height),
                Point::new(half_width, half_height),
                Point::new(-half_width, half_height),
            ],
            normals: vec![
                Vector::new(0.0, -1.0),
                Vector::new(1.0, 0.0),
                Vector::new(0.0, 1.0),
                Vector::new(-1.0, 0.0),
            ],
        }
    }

    /// The vertices of this polygon, in counterclockwise order.
    #[inline]
    pub fn vertices(&self) -> &[Point<Real>] {
        &self.vertices
    }

    /// The outward unit normals of the faces of this polygon.
    #[inline]
    pub fn normals(&self) -> &[Vector<Real>] {
        &self.normals
    }

    /// The centroid of the surface of this polygon.
    pub fn centroid(&self) -> Point<Real> {
        let origin = self.vertices[0];
        let mut area = 0.0;
        let mut center = Vector::zeros();

        for i in 1..self.vertices.len() - 1 {
            let e1 = self.vertices[i] - origin;
            let e2 = self.vertices[i + 1] - origin;
            let tri_area = 0.5 * utils::cross(&e1, &e2);
            area += tri_area;
            center += (e1 + e2) * (tri_area / 3.0);
        }

        origin + center * utils::inv(area)
    }
}

impl ConvexPolygonal for Polygon {
    #[inline]
    fn vertices(&self) -> &[Point<Real>] {
        &self.vertices
    }

    #[inline]
    fn normals(&self) -> &[Vector<Real>] {
        &self.normals
    }
}

fn signed_area(vertices: &[Point<Real>]) -> Real {
    let mut area = 0.0;

    for i1 in 0..vertices.len() {
        let i2 = (i1 + 1) % vertices.len();
        area += utils::cross(&vertices[i1].coords, &vertices[i2].coords);
    }

    area * 0.5
}
