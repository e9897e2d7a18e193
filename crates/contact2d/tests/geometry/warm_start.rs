use contact2d::math::RigidTransform;
use contact2d::pipeline::{BodyHandle, ContactSet, Fixture, FixtureSet};
use contact2d::shape::{Circle, Polygon};

#[test]
fn impulses_persist_while_features_persist() {
    let mut fixtures = FixtureSet::new();
    let mut contacts = ContactSet::default();
    let f1 = fixtures.insert(Fixture::new(Circle::new(1.0), BodyHandle(0)));
    let f2 = fixtures.insert(Fixture::new(Circle::new(1.0), BodyHandle(1)));
    let handle = contacts
        .begin_overlap(&mut fixtures, f1, f2)
        .unwrap()
        .unwrap();

    let mut transforms = vec![RigidTransform::identity(), RigidTransform::translation(1.5, 0.0)];
    let _ = contacts.update(&fixtures, &transforms).unwrap();

    // What a constraint solver would store after solving the step.
    {
        let pt = &mut contacts.get_mut(handle).unwrap().manifold.points[0];
        pt.normal_impulse = 2.0;
        pt.tangent_impulse = -0.25;
    }

    transforms[1] = RigidTransform::new(transforms[1].position, 1.0);
    transforms[1].position.x = 1.6;
    let _ = contacts.update(&fixtures, &transforms).unwrap();

    let pt = &contacts.get(handle).unwrap().manifold.points[0];
    assert_eq!(pt.normal_impulse, 2.0);
    assert_eq!(pt.tangent_impulse, -0.25);

    // Separating loses the cached impulses for good.
    transforms[1].position.x = 3.0;
    let _ = contacts.update(&fixtures, &transforms).unwrap();
    transforms[1].position.x = 1.5;
    let _ = contacts.update(&fixtures, &transforms).unwrap();

    let pt = &contacts.get(handle).unwrap().manifold.points[0];
    assert_eq!(pt.normal_impulse, 0.0);
    assert_eq!(pt.tangent_impulse, 0.0);
}

#[test]
fn impulses_reset_when_features_change() {
    let mut fixtures = FixtureSet::new();
    let mut contacts = ContactSet::default();
    let circle = fixtures.insert(Fixture::new(Circle::new(0.5), BodyHandle(0)));
    let cuboid = fixtures.insert(Fixture::new(Polygon::cuboid(1.0, 1.0), BodyHandle(1)));
    let handle = contacts
        .begin_overlap(&mut fixtures, circle, cuboid)
        .unwrap()
        .unwrap();

    // Resting on the top face.
    let mut transforms = vec![RigidTransform::translation(0.5, 1.45), RigidTransform::identity()];
    let _ = contacts.update(&fixtures, &transforms).unwrap();
    let face_fid = {
        let pt = &mut contacts.get_mut(handle).unwrap().manifold.points[0];
        pt.normal_impulse = 1.0;
        pt.tangent_impulse = 0.5;
        pt.fid2
    };
    assert!(face_fid.is_face());

    // Rolled past the top-right corner.
    transforms[0] = RigidTransform::translation(1.3, 1.3);
    let _ = contacts.update(&fixtures, &transforms).unwrap();

    let pt = &contacts.get(handle).unwrap().manifold.points[0];
    assert!(pt.fid2.is_vertex());
    assert_eq!(pt.normal_impulse, 0.0);
    assert_eq!(pt.tangent_impulse, 0.0);
}

#[test]
fn each_box_corner_keeps_its_own_impulse() {
    let mut fixtures = FixtureSet::new();
    let mut contacts = ContactSet::default();
    let ground = fixtures.insert(Fixture::new(Polygon::cuboid(5.0, 0.5), BodyHandle(0)));
    let cuboid = fixtures.insert(Fixture::new(Polygon::cuboid(0.5, 0.5), BodyHandle(1)));
    let handle = contacts
        .begin_overlap(&mut fixtures, ground, cuboid)
        .unwrap()
        .unwrap();

    let mut transforms = vec![RigidTransform::identity(), RigidTransform::translation(0.0, 0.99)];
    let _ = contacts.update(&fixtures, &transforms).unwrap();

    {
        let manifold = &mut contacts.get_mut(handle).unwrap().manifold;
        assert_eq!(manifold.len(), 2);
        for (i, pt) in manifold.points.iter_mut().enumerate() {
            pt.normal_impulse = i as f32 + 1.0;
        }
    }
    let before: Vec<_> = contacts
        .get(handle)
        .unwrap()
        .manifold
        .points
        .iter()
        .map(|pt| (pt.feature_id(), pt.normal_impulse))
        .collect();

    transforms[1] = RigidTransform::translation(0.1, 0.992);
    let _ = contacts.update(&fixtures, &transforms).unwrap();

    let manifold = &contacts.get(handle).unwrap().manifold;
    assert_eq!(manifold.len(), 2);
    for pt in &manifold.points {
        let (_, impulse) = before
            .iter()
            .find(|(fid, _)| *fid == pt.feature_id())
            .unwrap();
        assert_eq!(pt.normal_impulse, *impulse);
    }
}
