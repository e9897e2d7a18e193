//! Contact manifolds between pairs of shapes.
//!
//! A **contact manifold** is a set of at most two contact points between two
//! shapes that share the same contact normal. Each point carries the pair of
//! feature ids of the vertices or faces that generated it. The feature ids
//! are what lets the impulses accumulated by the constraint solver on one
//! step be matched to the points recomputed on the next one.
//!
//! Every routine has the form `contact_manifold_[shape1]_[shape2]` and comes
//! in two flavors: one taking the concrete shapes, and a `_shapes` variant
//! taking [`Shape`](crate::shape::Shape)s, which is the signature
//! dispatched to by [`ContactKind`](crate::pipeline::ContactKind).
//!
//! All routines clear the manifold first and report contacts with a
//! separation up to [`LINEAR_SLOP`](crate::math::LINEAR_SLOP).

pub use self::contact_manifold::{ContactManifold, ManifoldPoint};
pub use self::contact_manifolds_circle_circle::{
    contact_manifold_circle_circle, contact_manifold_circle_circle_shapes,
};
pub use self::contact_manifolds_circle_polygon::{
    contact_manifold_circle_edge, contact_manifold_circle_edge_shapes,
    contact_manifold_circle_polygon, contact_manifold_circle_polygon_shapes,
    contact_manifold_polygonal_circle,
};
pub use self::contact_manifolds_polygon_polygon::{
    contact_manifold_convex_polygonal, contact_manifold_polygon_edge,
    contact_manifold_polygon_edge_shapes, contact_manifold_polygon_polygon,
    contact_manifold_polygon_polygon_shapes,
};

mod contact_manifold;
mod contact_manifolds_circle_circle;
mod contact_manifolds_circle_polygon;
mod contact_manifolds_polygon_polygon;
