use crate::math::{Real, RigidTransform, DEFAULT_EPSILON, LINEAR_SLOP};
use crate::query::{ContactManifold, ManifoldPoint, UnsupportedShapes};
use crate::shape::{Circle, ConvexPolygonal, Edge, PackedFeatureId, Polygon, Shape, ShapeType};

/// Computes the contact manifold between a circle and a convex polygon given
/// as [`Shape`]s.
///
/// Fails, leaving `manifold` empty, if the shapes are not a circle and a
/// polygon, in that order.
pub fn contact_manifold_circle_polygon_shapes(
    manifold: &mut ContactManifold,
    shape1: &Shape,
    pos1: &RigidTransform,
    shape2: &Shape,
    pos2: &RigidTransform,
) -> Result<(), UnsupportedShapes> {
    if let (Some(circle1), Some(polygon2)) = (shape1.as_circle(), shape2.as_polygon()) {
        contact_manifold_circle_polygon(manifold, circle1, pos1, polygon2, pos2);
        Ok(())
    } else {
        manifold.clear();
        Err(UnsupportedShapes::new(
            ShapeType::Circle,
            ShapeType::Polygon,
            shape1,
            shape2,
        ))
    }
}

/// Computes the contact manifold between a circle and a convex polygon.
pub fn contact_manifold_circle_polygon(
    manifold: &mut ContactManifold,
    circle1: &Circle,
    pos1: &RigidTransform,
    polygon2: &Polygon,
    pos2: &RigidTransform,
) {
    contact_manifold_polygonal_circle(manifold, polygon2, pos2, circle1, pos1, true);
}

/// Computes the contact manifold between a circle and an edge given as
/// [`Shape`]s.
///
/// Fails, leaving `manifold` empty, if the shapes are not a circle and an
/// edge, in that order.
pub fn contact_manifold_circle_edge_shapes(
    manifold: &mut ContactManifold,
    shape1: &Shape,
    pos1: &RigidTransform,
    shape2: &Shape,
    pos2: &RigidTransform,
) -> Result<(), UnsupportedShapes> {
    if let (Some(circle1), Some(edge2)) = (shape1.as_circle(), shape2.as_edge()) {
        contact_manifold_circle_edge(manifold, circle1, pos1, edge2, pos2);
        Ok(())
    } else {
        manifold.clear();
        Err(UnsupportedShapes::new(
            ShapeType::Circle,
            ShapeType::Edge,
            shape1,
            shape2,
        ))
    }
}

/// Computes the contact manifold between a circle and an edge.
pub fn contact_manifold_circle_edge(
    manifold: &mut ContactManifold,
    circle1: &Circle,
    pos1: &RigidTransform,
    edge2: &Edge,
    pos2: &RigidTransform,
) {
    contact_manifold_polygonal_circle(manifold, edge2, pos2, circle1, pos1, true);
}

/// Computes the contact manifold between a convex polygonal shape and a
/// circle.
///
/// The circle center is classified against the face of maximum separation:
/// inside the polygon, in the Voronoi region of one of the face's vertices,
/// or in the region of the face itself. The polygon feature is reported
/// accordingly as `vertex(i)` or `face(i)`. The circle is always `face(0)`.
///
/// If `flipped` is `true`, the circle is the first shape of the manifold.
pub fn contact_manifold_polygonal_circle<P: ?Sized + ConvexPolygonal>(
    manifold: &mut ContactManifold,
    polygon: &P,
    pos_poly: &RigidTransform,
    circle: &Circle,
    pos_circle: &RigidTransform,
    flipped: bool,
) {
    manifold.clear();

    let vertices = polygon.vertices();
    let normals = polygon.normals();
    let radius = circle.radius;

    // Circle center in the polygon's frame.
    let world_center = pos_circle.transform_point(&circle.center);
    let center = pos_poly.inverse_transform_point(&world_center);

    let mut face = 0;
    let mut max_separation = -Real::MAX;

    for (i, (vertex, normal)) in vertices.iter().zip(normals.iter()).enumerate() {
        let separation = normal.dot(&(center - vertex));

        if separation > radius + LINEAR_SLOP {
            return;
        }

        if separation > max_separation {
            max_separation = separation;
            face = i;
        }
    }

    let i1 = face;
    let i2 = (face + 1) % vertices.len();
    let v1 = vertices[i1];
    let v2 = vertices[i2];

    let (local_normal, local_p_poly, fid_poly) = if max_separation < DEFAULT_EPSILON {
        // The center is inside of the polygon.
        (
            normals[i1],
            center - normals[i1] * max_separation,
            PackedFeatureId::face(i1 as u32),
        )
    } else if (center - v1).dot(&(v2 - v1)) <= 0.0 {
        let Some(normal) = (center - v1).try_normalize(0.0) else {
            return;
        };
        (normal, v1, PackedFeatureId::vertex(i1 as u32))
    } else if (center - v2).dot(&(v1 - v2)) <= 0.0 {
        let Some(normal) = (center - v2).try_normalize(0.0) else {
            return;
        };
        (normal, v2, PackedFeatureId::vertex(i2 as u32))
    } else {
        (
            normals[i1],
            center - normals[i1] * max_separation,
            PackedFeatureId::face(i1 as u32),
        )
    };

    let separation = (center - local_p_poly).dot(&local_normal) - radius;

    if separation > LINEAR_SLOP {
        return;
    }

    let normal = pos_poly.transform_vector(&local_normal);
    let world_p_poly = pos_poly.transform_point(&local_p_poly);
    let world_p_circle = world_center - normal * radius;

    let contact = ManifoldPoint::flipped(
        pos_poly,
        pos_circle,
        world_p_poly,
        world_p_circle,
        normal,
        separation,
        fid_poly,
        PackedFeatureId::face(0),
        flipped,
    );

    let (pos1, normal1) = if flipped {
        (pos_circle, -normal)
    } else {
        (pos_poly, normal)
    };

    manifold.points.push(contact);
    manifold.set_normal(pos1, normal1);
}
