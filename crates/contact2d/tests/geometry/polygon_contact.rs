use approx::assert_relative_eq;
use contact2d::math::{Point, RigidTransform, Vector};
use contact2d::pipeline::{BodyHandle, ContactKind, ContactSet, Fixture, FixtureSet};
use contact2d::shape::{Edge, Polygon};

#[test]
fn box_stack_on_ground() {
    let mut fixtures = FixtureSet::new();
    let mut contacts = ContactSet::default();
    let ground = Edge::new(Point::new(-10.0, 0.0), Point::new(10.0, 0.0)).unwrap();
    let ground = fixtures.insert(Fixture::new(ground, BodyHandle(0)));
    let box1 = fixtures.insert(Fixture::new(Polygon::cuboid(0.5, 0.5), BodyHandle(1)));
    let box2 = fixtures.insert(Fixture::new(Polygon::cuboid(0.5, 0.5), BodyHandle(2)));

    let on_ground = contacts
        .begin_overlap(&mut fixtures, ground, box1)
        .unwrap()
        .unwrap();
    let stacked = contacts
        .begin_overlap(&mut fixtures, box1, box2)
        .unwrap()
        .unwrap();
    assert_eq!(contacts.get(on_ground).unwrap().kind(), ContactKind::PolygonEdge);
    assert_eq!(contacts.get(stacked).unwrap().kind(), ContactKind::PolygonPolygon);

    let transforms = vec![
        RigidTransform::identity(),
        RigidTransform::translation(0.0, 0.499),
        RigidTransform::translation(0.05, 1.498),
    ];
    let events = contacts.update(&fixtures, &transforms).unwrap();
    assert_eq!(events.len(), 2);
    assert_eq!(contacts.touching_contacts().count(), 2);

    for handle in [on_ground, stacked] {
        let manifold = &contacts.get(handle).unwrap().manifold;
        assert_eq!(manifold.len(), 2);
        assert_ne!(
            manifold.points[0].feature_id(),
            manifold.points[1].feature_id()
        );
        for pt in &manifold.points {
            assert!(pt.separation <= 0.0);
            assert_relative_eq!(pt.separation, -0.001, epsilon = 1.0e-4);
        }
    }

    // The box is the first shape of the box-ground contact.
    let manifold = &contacts.get(on_ground).unwrap().manifold;
    assert_relative_eq!(manifold.normal, -Vector::y(), epsilon = 1.0e-6);
    let manifold = &contacts.get(stacked).unwrap().manifold;
    assert_relative_eq!(manifold.normal, Vector::y(), epsilon = 1.0e-6);
}

#[test]
fn tilted_box_touches_with_one_corner() {
    let mut fixtures = FixtureSet::new();
    let mut contacts = ContactSet::default();
    let ground = fixtures.insert(Fixture::new(Polygon::cuboid(5.0, 0.5), BodyHandle(0)));
    let tilted = fixtures.insert(Fixture::new(Polygon::cuboid(0.5, 0.5), BodyHandle(1)));
    let handle = contacts
        .begin_overlap(&mut fixtures, ground, tilted)
        .unwrap()
        .unwrap();

    let lowest = 0.5 * (0.3f32.cos() + 0.3f32.sin());
    let transforms = vec![
        RigidTransform::identity(),
        RigidTransform::new(Vector::new(0.0, 0.5 + lowest - 0.01), 0.3),
    ];
    let _ = contacts.update(&fixtures, &transforms).unwrap();

    let manifold = &contacts.get(handle).unwrap().manifold;
    assert_eq!(manifold.len(), 1);
    assert_relative_eq!(manifold.points[0].separation, -0.01, epsilon = 1.0e-4);
    assert!(manifold.points[0].fid2.is_vertex());
}
