//! Application of the Separating Axis Theorem (SAT) for collision detection.
//!
//! Two convex polygons do not intersect if and only if one of their face
//! normals is a separating axis. The face with the largest separation is the
//! reference face used to build the contact manifold.

pub use self::sat_polygon_polygon::polygon_polygon_compute_separation_features;

mod sat_polygon_polygon;
