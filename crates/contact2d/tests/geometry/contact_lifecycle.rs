use contact2d::math::{RigidTransform, Vector};
use contact2d::pipeline::{
    BodyHandle, ContactError, ContactEvent, ContactSet, Fixture, FixtureHandle, FixtureSet,
};
use contact2d::shape::Circle;
use hashbrown::HashMap;

fn two_circles() -> (FixtureSet, FixtureHandle, FixtureHandle) {
    let mut fixtures = FixtureSet::new();
    let f1 = fixtures.insert(Fixture::new(Circle::new(1.0), BodyHandle(0)));
    let f2 = fixtures.insert(Fixture::new(Circle::new(1.0), BodyHandle(1)));
    (fixtures, f1, f2)
}

#[test]
fn created_contact_is_enabled_and_not_touching() {
    let (mut fixtures, f1, f2) = two_circles();
    let mut contacts = ContactSet::default();

    let handle = contacts
        .begin_overlap(&mut fixtures, f1, f2)
        .unwrap()
        .unwrap();
    let contact = contacts.get(handle).unwrap();
    assert!(contact.is_enabled());
    assert!(!contact.is_touching());
    assert!(contact.manifold.is_empty());
    assert_eq!(fixtures.get(f1).unwrap().contacts(), &[handle]);
    assert_eq!(fixtures.get(f2).unwrap().contacts(), &[handle]);

    // Reporting the same overlap again, in any order, reuses the contact.
    assert_eq!(contacts.begin_overlap(&mut fixtures, f2, f1), Ok(Some(handle)));
    assert_eq!(contacts.len(), 1);
    assert_eq!(contacts.contact_between(f2, f1).map(|(h, _)| h), Some(handle));
}

#[test]
fn invalid_overlaps() {
    let (mut fixtures, f1, _) = two_circles();
    let same_body = fixtures.insert(Fixture::new(Circle::new(1.0), BodyHandle(0)));
    let mut contacts = ContactSet::default();

    assert_eq!(
        contacts.begin_overlap(&mut fixtures, f1, f1),
        Err(ContactError::SelfContact(f1))
    );
    assert_eq!(contacts.begin_overlap(&mut fixtures, f1, same_body), Ok(None));

    let removed = contacts.remove_fixture(&mut fixtures, same_body);
    assert!(removed.is_some());
    assert_eq!(
        contacts.begin_overlap(&mut fixtures, f1, same_body),
        Err(ContactError::InvalidFixture(same_body))
    );
    assert!(contacts.is_empty());
}

#[test]
fn end_overlap_clears_both_fixtures() {
    let (mut fixtures, f1, f2) = two_circles();
    let mut contacts = ContactSet::default();
    let handle = contacts
        .begin_overlap(&mut fixtures, f1, f2)
        .unwrap()
        .unwrap();

    let contact = contacts.end_overlap(&mut fixtures, f2, f1).unwrap();
    assert_eq!((contact.fixture1(), contact.fixture2()), (f1, f2));
    assert!(contacts.get(handle).is_none());
    assert!(contacts.contact_between(f1, f2).is_none());
    assert!(fixtures.get(f1).unwrap().contacts().is_empty());
    assert!(fixtures.get(f2).unwrap().contacts().is_empty());
    assert!(contacts.end_overlap(&mut fixtures, f1, f2).is_none());
}

#[test]
fn removing_a_fixture_destroys_its_contacts() {
    let (mut fixtures, f1, f2) = two_circles();
    let f3 = fixtures.insert(Fixture::new(Circle::new(1.0), BodyHandle(2)));
    let mut contacts = ContactSet::default();
    let c12 = contacts.begin_overlap(&mut fixtures, f1, f2).unwrap().unwrap();
    let c13 = contacts.begin_overlap(&mut fixtures, f1, f3).unwrap().unwrap();
    let c23 = contacts.begin_overlap(&mut fixtures, f2, f3).unwrap().unwrap();

    assert_eq!(fixtures.get(f1).unwrap().contacts(), &[c12, c13]);
    let removed = contacts.remove_fixture(&mut fixtures, f1).unwrap();
    assert!(removed.contacts().is_empty());
    assert_eq!(fixtures.len(), 2);
    assert_eq!(contacts.len(), 1);
    assert!(contacts.get(c23).is_some());
    assert_eq!(fixtures.get(f2).unwrap().contacts(), &[c23]);
    assert_eq!(fixtures.get(f3).unwrap().contacts(), &[c23]);
}

#[test]
fn started_and_stopped_events() {
    let (mut fixtures, f1, f2) = two_circles();
    let mut contacts = ContactSet::default();
    let handle = contacts
        .begin_overlap(&mut fixtures, f1, f2)
        .unwrap()
        .unwrap();
    let mut transforms = HashMap::new();
    let _ = transforms.insert(BodyHandle(0), RigidTransform::identity());
    let _ = transforms.insert(BodyHandle(1), RigidTransform::translation(3.0, 0.0));

    assert_eq!(contacts.update(&fixtures, &transforms), Ok(vec![]));
    assert_eq!(contacts.touching_contacts().count(), 0);

    let _ = transforms.insert(BodyHandle(1), RigidTransform::translation(1.5, 0.0));
    assert_eq!(
        contacts.update(&fixtures, &transforms),
        Ok(vec![ContactEvent::Started {
            contact: handle,
            fixture1: f1,
            fixture2: f2,
        }])
    );
    assert_eq!(contacts.touching_contacts().count(), 1);

    // Staying in contact does not report anything.
    assert_eq!(contacts.update(&fixtures, &transforms), Ok(vec![]));

    let _ = transforms.insert(BodyHandle(1), RigidTransform::translation(2.5, 0.0));
    assert_eq!(
        contacts.update(&fixtures, &transforms),
        Ok(vec![ContactEvent::Stopped {
            contact: handle,
            fixture1: f1,
            fixture2: f2,
        }])
    );
    assert!(!contacts.get(handle).unwrap().is_touching());
}

#[test]
fn disabled_contacts_are_enabled_again_by_update() {
    let (mut fixtures, f1, f2) = two_circles();
    let mut contacts = ContactSet::default();
    let handle = contacts
        .begin_overlap(&mut fixtures, f1, f2)
        .unwrap()
        .unwrap();
    let transforms = vec![RigidTransform::identity(), RigidTransform::translation(1.5, 0.0)];

    let _ = contacts.update(&fixtures, &transforms).unwrap();
    contacts.get_mut(handle).unwrap().set_enabled(false);
    assert_eq!(contacts.touching_contacts().count(), 0);

    let _ = contacts.update(&fixtures, &transforms).unwrap();
    assert!(contacts.get(handle).unwrap().is_enabled());
    assert_eq!(contacts.touching_contacts().count(), 1);
}

#[test]
fn missing_transform_aborts_update() {
    let (mut fixtures, f1, f2) = two_circles();
    let mut contacts = ContactSet::default();
    let _ = contacts.begin_overlap(&mut fixtures, f1, f2).unwrap();
    let transforms = vec![RigidTransform::identity()];

    assert_eq!(
        contacts.update(&fixtures, &transforms),
        Err(ContactError::MissingBodyTransform(BodyHandle(1)))
    );
}

#[test]
fn numeric_fault_clears_the_manifold() {
    let (mut fixtures, f1, f2) = two_circles();
    let mut contacts = ContactSet::default();
    let handle = contacts
        .begin_overlap(&mut fixtures, f1, f2)
        .unwrap()
        .unwrap();
    let mut transforms = vec![RigidTransform::identity(), RigidTransform::translation(1.5, 0.0)];
    let _ = contacts.update(&fixtures, &transforms).unwrap();
    assert!(contacts.get(handle).unwrap().is_touching());

    transforms[1] = RigidTransform::new(Vector::new(f32::NAN, 0.0), 0.0);
    let events = contacts.update(&fixtures, &transforms).unwrap();
    assert_eq!(
        events,
        vec![
            ContactEvent::NumericFault {
                contact: handle,
                fixture1: f1,
                fixture2: f2,
            },
            ContactEvent::Stopped {
                contact: handle,
                fixture1: f1,
                fixture2: f2,
            },
        ]
    );
    let contact = contacts.get(handle).unwrap();
    assert!(contact.has_numeric_fault());
    assert!(contact.manifold.is_empty());

    // The fault is cleared as soon as the transforms are finite again.
    transforms[1] = RigidTransform::translation(1.5, 0.0);
    let _ = contacts.update(&fixtures, &transforms).unwrap();
    assert!(!contacts.get(handle).unwrap().has_numeric_fault());
}
