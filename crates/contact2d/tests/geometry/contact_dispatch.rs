use contact2d::math::{Point, RigidTransform};
use contact2d::pipeline::{
    BodyHandle, ContactKind, ContactRegistry, ContactSet, Fixture, FixtureSet, RegistryError,
};
use contact2d::shape::{Circle, Edge, Polygon, ShapeType};

#[test]
fn both_orders_resolve_to_the_same_kind() {
    let registry = ContactRegistry::with_default_routines();

    assert_eq!(
        registry.resolve(ShapeType::Polygon, ShapeType::Circle),
        Some((ContactKind::CirclePolygon, true))
    );
    assert_eq!(
        registry.resolve(ShapeType::Circle, ShapeType::Polygon),
        Some((ContactKind::CirclePolygon, false))
    );
    assert_eq!(
        registry.resolve(ShapeType::Edge, ShapeType::Polygon),
        Some((ContactKind::PolygonEdge, true))
    );
}

#[test]
fn contacts_store_fixtures_in_canonical_order() {
    let mut fixtures = FixtureSet::new();
    let mut contacts = ContactSet::default();
    let polygon = fixtures.insert(Fixture::new(Polygon::cuboid(1.0, 1.0), BodyHandle(0)));
    let circle = fixtures.insert(Fixture::new(Circle::new(0.5), BodyHandle(1)));

    let handle = contacts
        .begin_overlap(&mut fixtures, polygon, circle)
        .unwrap()
        .unwrap();
    let contact = contacts.get(handle).unwrap();
    assert_eq!(contact.kind(), ContactKind::CirclePolygon);
    assert_eq!(contact.fixture1(), circle);
    assert_eq!(contact.fixture2(), polygon);

    // The circle sits above the box; the normal goes from the circle to the box.
    let transforms = [RigidTransform::identity(), RigidTransform::translation(0.0, 1.4)];
    let _ = contacts.update(&fixtures, &transforms[..]).unwrap();
    let contact = contacts.get(handle).unwrap();
    assert_eq!(contact.manifold.len(), 1);
    assert!(contact.manifold.normal.y < 0.0);
}

#[test]
fn edges_never_collide_with_edges() {
    let mut fixtures = FixtureSet::new();
    let mut contacts = ContactSet::default();
    let edge = Edge::new(Point::new(-1.0, 0.0), Point::new(1.0, 0.0)).unwrap();
    let e1 = fixtures.insert(Fixture::new(edge, BodyHandle(0)));
    let e2 = fixtures.insert(Fixture::new(edge, BodyHandle(1)));

    assert_eq!(contacts.begin_overlap(&mut fixtures, e1, e2), Ok(None));
    assert!(contacts.is_empty());
    assert!(fixtures.get(e1).unwrap().contacts().is_empty());
}

#[test]
fn incomplete_registry_is_rejected_at_startup() {
    let mut registry = ContactRegistry::empty();
    for kind in ContactKind::ALL {
        registry.register(kind).unwrap();
    }

    assert_eq!(
        ContactSet::new(registry.clone()).err(),
        Some(RegistryError::MissingPair {
            shape1: ShapeType::Edge,
            shape2: ShapeType::Edge,
        })
    );

    registry
        .ignore_pair(ShapeType::Edge, ShapeType::Edge)
        .unwrap();
    assert!(ContactSet::new(registry).is_ok());
}
