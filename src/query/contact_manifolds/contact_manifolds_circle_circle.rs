use crate::math::{RigidTransform, Vector, LINEAR_SLOP, NORMAL_EPSILON};
use crate::query::{ContactManifold, ManifoldPoint, UnsupportedShapes};
use crate::shape::{Circle, PackedFeatureId, Shape, ShapeType};

/// Computes the contact manifold between two circles given as [`Shape`]s.
///
/// Fails, leaving `manifold` empty, if one of the shapes is not a circle.
pub fn contact_manifold_circle_circle_shapes(
    manifold: &mut ContactManifold,
    shape1: &Shape,
    pos1: &RigidTransform,
    shape2: &Shape,
    pos2: &RigidTransform,
) -> Result<(), UnsupportedShapes> {
    if let (Some(circle1), Some(circle2)) = (shape1.as_circle(), shape2.as_circle()) {
        contact_manifold_circle_circle(manifold, circle1, pos1, circle2, pos2);
        Ok(())
    } else {
        manifold.clear();
        Err(UnsupportedShapes::new(
            ShapeType::Circle,
            ShapeType::Circle,
            shape1,
            shape2,
        ))
    }
}

/// Computes the contact manifold between two circles.
///
/// Produces at most one point. Circles only have one feature, so the point
/// is always identified by `(face(0), face(0))`. Coincident centers fall back
/// to the `+x` normal.
pub fn contact_manifold_circle_circle(
    manifold: &mut ContactManifold,
    circle1: &Circle,
    pos1: &RigidTransform,
    circle2: &Circle,
    pos2: &RigidTransform,
) {
    manifold.clear();

    let center1 = pos1.transform_point(&circle1.center);
    let center2 = pos2.transform_point(&circle2.center);
    let dcenter = center2 - center1;
    let distance = dcenter.norm();
    let separation = distance - (circle1.radius + circle2.radius);

    if separation > LINEAR_SLOP {
        return;
    }

    let normal = if distance > NORMAL_EPSILON {
        dcenter / distance
    } else {
        Vector::x()
    };

    let world_p1 = center1 + normal * circle1.radius;
    let world_p2 = center2 - normal * circle2.radius;

    manifold.points.push(ManifoldPoint::from_world_points(
        pos1,
        pos2,
        world_p1,
        world_p2,
        normal,
        separation,
        PackedFeatureId::face(0),
        PackedFeatureId::face(0),
    ));
    manifold.set_normal(pos1, normal);
}
