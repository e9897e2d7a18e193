use approx::assert_relative_eq;
use contact2d::math::{Point, RigidTransform, Vector};
use contact2d::query::details::contact_manifold_circle_circle_shapes;
use contact2d::query::ContactManifold;
use contact2d::shape::{Circle, PackedFeatureId, Polygon, Shape, ShapeType};

#[test]
fn overlapping_unit_circles() {
    let circle = Shape::from(Circle::new(1.0));
    let mut manifold = ContactManifold::new();
    contact_manifold_circle_circle_shapes(
        &mut manifold,
        &circle,
        &RigidTransform::identity(),
        &circle,
        &RigidTransform::translation(1.5, 0.0),
    )
    .unwrap();

    assert_eq!(manifold.len(), 1);
    let pt = &manifold.points[0];
    assert_relative_eq!(pt.separation, -0.5, epsilon = 1.0e-6);
    assert_relative_eq!(pt.normal, Vector::x(), epsilon = 1.0e-6);
    assert_relative_eq!(pt.point, Point::new(0.75, 0.0), epsilon = 1.0e-6);
    assert_eq!(pt.feature_id(), (PackedFeatureId::face(0), PackedFeatureId::face(0)));
    assert_eq!(pt.normal_impulse, 0.0);
    assert_eq!(pt.tangent_impulse, 0.0);
}

#[test]
fn distant_unit_circles() {
    let circle = Shape::from(Circle::new(1.0));
    let mut manifold = ContactManifold::new();
    contact_manifold_circle_circle_shapes(
        &mut manifold,
        &circle,
        &RigidTransform::identity(),
        &circle,
        &RigidTransform::translation(3.0, 0.0),
    )
    .unwrap();

    assert!(manifold.is_empty());
}

#[test]
fn stale_points_are_cleared() {
    let circle = Shape::from(Circle::new(1.0));
    let mut manifold = ContactManifold::new();
    let pos1 = RigidTransform::identity();

    contact_manifold_circle_circle_shapes(
        &mut manifold,
        &circle,
        &pos1,
        &circle,
        &RigidTransform::translation(0.0, 1.0),
    )
    .unwrap();
    assert_eq!(manifold.len(), 1);

    contact_manifold_circle_circle_shapes(
        &mut manifold,
        &circle,
        &pos1,
        &circle,
        &RigidTransform::translation(0.0, 10.0),
    )
    .unwrap();
    assert!(manifold.is_empty());
}

#[test]
fn normal_is_unit_for_random_placements() {
    use rand::{Rng, SeedableRng};

    let mut rng = rand::rngs::StdRng::seed_from_u64(0);
    let mut manifold = ContactManifold::new();

    for _ in 0..100 {
        let circle1 = Shape::from(Circle::new(rng.gen_range(0.1..2.0)));
        let circle2 = Shape::from(Circle::new(rng.gen_range(0.1..2.0)));
        let pos1 = RigidTransform::new(
            Vector::new(rng.gen_range(-1.0..1.0), rng.gen_range(-1.0..1.0)),
            rng.gen_range(-3.0..3.0),
        );
        let pos2 = RigidTransform::new(
            Vector::new(rng.gen_range(-1.0..1.0), rng.gen_range(-1.0..1.0)),
            rng.gen_range(-3.0..3.0),
        );

        contact_manifold_circle_circle_shapes(&mut manifold, &circle1, &pos1, &circle2, &pos2)
            .unwrap();
        assert!(manifold.len() <= 1);

        if let Some(pt) = manifold.points.first() {
            assert_relative_eq!(pt.normal.norm(), 1.0, epsilon = 1.0e-5);
            assert_eq!(pt.normal, manifold.normal);
            assert!(manifold.is_valid());
        }
    }
}

#[test]
fn non_circle_shapes_are_rejected() {
    let circle = Shape::from(Circle::new(1.0));
    let cuboid = Shape::from(Polygon::cuboid(1.0, 1.0));
    let pos = RigidTransform::identity();
    let mut manifold = ContactManifold::new();

    contact_manifold_circle_circle_shapes(&mut manifold, &circle, &pos, &circle, &pos).unwrap();
    assert_eq!(manifold.len(), 1);

    let err = contact_manifold_circle_circle_shapes(&mut manifold, &circle, &pos, &cuboid, &pos)
        .unwrap_err();
    assert_eq!(err.found1, ShapeType::Circle);
    assert_eq!(err.found2, ShapeType::Polygon);
    assert!(manifold.is_empty());
}
