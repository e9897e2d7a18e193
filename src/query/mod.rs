//! Narrow-phase geometric queries.
//!
//! The main output of this module is the [`ContactManifold`] computed between
//! two shapes by the routines exported in [`details`]. The specific functions
//! have the form `contact_manifold_[shape1]_[shape2]()`.

pub use self::contact_manifolds::{ContactManifold, ManifoldPoint};
pub use self::error::{ManifoldError, UnsupportedShapes};

pub mod clip;
mod contact_manifolds;
mod error;
pub mod sat;

/// Queries dedicated to specific pairs of shapes.
pub mod details {
    pub use super::clip::*;
    pub use super::contact_manifolds::{
        contact_manifold_circle_circle, contact_manifold_circle_circle_shapes,
        contact_manifold_circle_edge, contact_manifold_circle_edge_shapes,
        contact_manifold_circle_polygon, contact_manifold_circle_polygon_shapes,
        contact_manifold_convex_polygonal, contact_manifold_polygon_edge,
        contact_manifold_polygon_edge_shapes, contact_manifold_polygon_polygon,
        contact_manifold_polygon_polygon_shapes, contact_manifold_polygonal_circle,
    };
    pub use super::sat::*;
}
