use crate::pipeline::{
    BodyHandle, BodyTransforms, Contact, ContactHandle, ContactRegistry, Fixture, FixtureHandle,
    FixtureSet, RegistryError,
};
use crate::query::{ContactManifold, ManifoldError, UnsupportedShapes};
use crate::utils::{SortedPair, Validate};
use hashbrown::HashMap;
use slab::Slab;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Error returned by the operations of a [`ContactSet`].
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq, Eq)]
pub enum ContactError {
    /// The fixture does not exist.
    #[error("the fixture {0:?} does not exist.")]
    InvalidFixture(FixtureHandle),
    /// A fixture cannot be in contact with itself.
    #[error("the fixture {0:?} cannot be in contact with itself.")]
    SelfContact(FixtureHandle),
    /// No transform was given for a body with fixtures in contact.
    #[error("no transform was given for the body {0:?}.")]
    MissingBodyTransform(BodyHandle),
    /// A narrow-phase routine produced a manifold breaking its invariants.
    #[error("the manifold computed for the contact {contact:?} is invalid: {source}")]
    InvalidManifold {
        /// The contact being updated.
        contact: ContactHandle,
        /// The broken invariant.
        source: ManifoldError,
    },
    /// The routine of a contact does not apply to the shapes of its fixtures.
    #[error("the routine of the contact {contact:?} cannot handle its shapes: {source}")]
    UnsupportedShapes {
        /// The contact being updated.
        contact: ContactHandle,
        /// The mismatching shape types.
        source: UnsupportedShapes,
    },
}

/// A change of status of a contact, reported by [`ContactSet::update`].
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ContactEvent {
    /// The fixtures started touching.
    Started {
        /// The contact whose manifold became non-empty.
        contact: ContactHandle,
        /// The first fixture of the contact.
        fixture1: FixtureHandle,
        /// The second fixture of the contact.
        fixture2: FixtureHandle,
    },
    /// The fixtures stopped touching.
    Stopped {
        /// The contact whose manifold became empty.
        contact: ContactHandle,
        /// The first fixture of the contact.
        fixture1: FixtureHandle,
        /// The second fixture of the contact.
        fixture2: FixtureHandle,
    },
    /// Non-finite values were met while updating the contact. Its manifold
    /// has been cleared.
    NumericFault {
        /// The faulty contact.
        contact: ContactHandle,
        /// The first fixture of the contact.
        fixture1: FixtureHandle,
        /// The second fixture of the contact.
        fixture2: FixtureHandle,
    },
}

/// The set of all the contacts between overlapping fixtures.
///
/// Contacts are created and destroyed from the overlap reports of a
/// broad-phase, and their manifolds are recomputed by [`Self::update`] once
/// per step.
#[derive(Clone, Debug)]
pub struct ContactSet {
    contacts: Slab<Contact>,
    pairs: HashMap<SortedPair<FixtureHandle>, ContactHandle>,
    registry: ContactRegistry,
}

impl Default for ContactSet {
    fn default() -> Self {
        Self {
            contacts: Slab::new(),
            pairs: HashMap::default(),
            registry: ContactRegistry::with_default_routines(),
        }
    }
}

impl ContactSet {
    /// An empty contact set dispatching with `registry`.
    ///
    /// Fails if `registry` does not cover every pair of shape types.
    pub fn new(registry: ContactRegistry) -> Result<Self, RegistryError> {
        registry.validate()?;
        Ok(Self {
            contacts: Slab::new(),
            pairs: HashMap::default(),
            registry,
        })
    }

    /// The routines used by this set.
    pub fn registry(&self) -> &ContactRegistry {
        &self.registry
    }

    /// Creates the contact between the fixtures `h1` and `h2`, whose bounding
    /// volumes started overlapping.
    ///
    /// Returns the handle of the contact, or `None` if the fixtures belong
    /// to the same body or their shape types are ignored. If the contact
    /// already exists, its handle is returned.
    pub fn begin_overlap(
        &mut self,
        fixtures: &mut FixtureSet,
        h1: FixtureHandle,
        h2: FixtureHandle,
    ) -> Result<Option<ContactHandle>, ContactError> {
        if h1 == h2 {
            return Err(ContactError::SelfContact(h1));
        }

        let fixture1 = fixtures.get(h1).ok_or(ContactError::InvalidFixture(h1))?;
        let fixture2 = fixtures.get(h2).ok_or(ContactError::InvalidFixture(h2))?;

        if fixture1.body() == fixture2.body() {
            return Ok(None);
        }

        let key = SortedPair::new(h1, h2);

        if let Some(handle) = self.pairs.get(&key) {
            return Ok(Some(*handle));
        }

        let Some((kind, swapped)) = self
            .registry
            .resolve(fixture1.shape_type(), fixture2.shape_type())
        else {
            log::debug!(
                "Ignoring the overlap between {:?} ({:?}) and {:?} ({:?}).",
                h1,
                fixture1.shape_type(),
                h2,
                fixture2.shape_type()
            );
            return Ok(None);
        };

        let (fixture1, fixture2) = if swapped { (h2, h1) } else { (h1, h2) };
        let handle = ContactHandle(self.contacts.insert(Contact::new(fixture1, fixture2, kind)));
        let _ = self.pairs.insert(key, handle);

        for fixture in [fixture1, fixture2] {
            if let Some(fixture) = fixtures.get_mut(fixture) {
                fixture.contacts.push(handle);
            }
        }

        log::trace!(
            "Created {:?} contact {:?} between {:?} and {:?}.",
            kind,
            handle,
            fixture1,
            fixture2
        );

        Ok(Some(handle))
    }

    /// Destroys the contact between the fixtures `h1` and `h2`, whose
    /// bounding volumes stopped overlapping.
    ///
    /// Returns the destroyed contact, if it existed.
    pub fn end_overlap(
        &mut self,
        fixtures: &mut FixtureSet,
        h1: FixtureHandle,
        h2: FixtureHandle,
    ) -> Option<Contact> {
        let handle = *self.pairs.get(&SortedPair::new(h1, h2))?;
        self.destroy(fixtures, handle)
    }

    /// Removes a fixture from `fixtures`, destroying all its contacts first.
    pub fn remove_fixture(
        &mut self,
        fixtures: &mut FixtureSet,
        handle: FixtureHandle,
    ) -> Option<Fixture> {
        let contacts = fixtures.get(handle)?.contacts.clone();

        for contact in contacts {
            let _ = self.destroy(fixtures, contact);
        }

        fixtures.remove(handle)
    }

    fn destroy(&mut self, fixtures: &mut FixtureSet, handle: ContactHandle) -> Option<Contact> {
        let contact = self.contacts.try_remove(handle.0)?;
        let _ = self
            .pairs
            .remove(&SortedPair::new(contact.fixture1(), contact.fixture2()));

        for fixture in [contact.fixture1(), contact.fixture2()] {
            if let Some(fixture) = fixtures.get_mut(fixture) {
                fixture.contacts.retain(|h| *h != handle);
            }
        }

        log::trace!(
            "Destroyed contact {:?} between {:?} and {:?}.",
            handle,
            contact.fixture1(),
            contact.fixture2()
        );

        Some(contact)
    }

    /// Recomputes the manifold of every contact from the current body
    /// transforms.
    ///
    /// Each contact is re-enabled, its routine evaluated into a fresh
    /// manifold, and the solver impulses of the previous manifold carried
    /// over to the points with the same feature ids. Returns the contacts
    /// that started or stopped touching.
    ///
    /// Non-finite transforms or manifolds do not abort the update: the
    /// manifold of the faulty contact is cleared and a
    /// [`ContactEvent::NumericFault`] is reported. A manifold breaking its
    /// structural invariants aborts the update before any contact is
    /// modified.
    pub fn update<T: ?Sized + BodyTransforms>(
        &mut self,
        fixtures: &FixtureSet,
        transforms: &T,
    ) -> Result<Vec<ContactEvent>, ContactError> {
        let handles: Vec<_> = self
            .contacts
            .iter()
            .map(|(key, _)| ContactHandle(key))
            .collect();
        let contacts = &self.contacts;
        let evaluate = |handle: &ContactHandle| {
            evaluate_contact(*handle, &contacts[handle.0], fixtures, transforms)
        };

        #[cfg(not(feature = "parallel"))]
        let manifolds: Result<Vec<_>, _> = handles.iter().map(evaluate).collect();
        #[cfg(feature = "parallel")]
        let manifolds: Result<Vec<_>, _> = handles.par_iter().map(evaluate).collect();

        let manifolds = manifolds?;
        let mut events = Vec::new();

        for (handle, manifold) in handles.into_iter().zip(manifolds) {
            let contact = &mut self.contacts[handle.0];
            let was_touching = contact.is_touching();
            let fixture1 = contact.fixture1();
            let fixture2 = contact.fixture2();

            contact.set_enabled(true);

            if let Some(manifold) = manifold {
                contact.replace_manifold(manifold);
            } else {
                log::warn!(
                    "Non-finite values met while updating the contact {:?} between {:?} and {:?}.",
                    handle,
                    fixture1,
                    fixture2
                );
                contact.mark_numeric_fault();
                events.push(ContactEvent::NumericFault {
                    contact: handle,
                    fixture1,
                    fixture2,
                });
            }

            match (was_touching, contact.is_touching()) {
                (false, true) => events.push(ContactEvent::Started {
                    contact: handle,
                    fixture1,
                    fixture2,
                }),
                (true, false) => events.push(ContactEvent::Stopped {
                    contact: handle,
                    fixture1,
                    fixture2,
                }),
                _ => {}
            }
        }

        Ok(events)
    }

    /// The contact identified by `handle`.
    pub fn get(&self, handle: ContactHandle) -> Option<&Contact> {
        self.contacts.get(handle.0)
    }

    /// The contact identified by `handle`, for the constraint solver to
    /// store its impulses.
    pub fn get_mut(&mut self, handle: ContactHandle) -> Option<&mut Contact> {
        self.contacts.get_mut(handle.0)
    }

    /// The contact between the fixtures `h1` and `h2`, in any order.
    pub fn contact_between(
        &self,
        h1: FixtureHandle,
        h2: FixtureHandle,
    ) -> Option<(ContactHandle, &Contact)> {
        let handle = *self.pairs.get(&SortedPair::new(h1, h2))?;
        Some((handle, &self.contacts[handle.0]))
    }

    /// Iterates through all the contacts, touching or not.
    pub fn iter(&self) -> impl Iterator<Item = (ContactHandle, &Contact)> {
        self.contacts
            .iter()
            .map(|(key, contact)| (ContactHandle(key), contact))
    }

    /// Iterates through the contacts the constraint solver must handle: the
    /// touching and enabled ones.
    pub fn touching_contacts(&self) -> impl Iterator<Item = (ContactHandle, &Contact)> {
        self.iter()
            .filter(|(_, contact)| contact.is_touching() && contact.is_enabled())
    }

    /// The number of contacts, touching or not.
    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    /// Does this set contain no contact at all?
    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }
}

/// Evaluates the routine of a contact into a fresh manifold.
///
/// Returns `Ok(None)` if a transform or the resulting manifold is not finite.
fn evaluate_contact<T: ?Sized + BodyTransforms>(
    handle: ContactHandle,
    contact: &Contact,
    fixtures: &FixtureSet,
    transforms: &T,
) -> Result<Option<ContactManifold>, ContactError> {
    let fixture1 = fixtures
        .get(contact.fixture1())
        .ok_or(ContactError::InvalidFixture(contact.fixture1()))?;
    let fixture2 = fixtures
        .get(contact.fixture2())
        .ok_or(ContactError::InvalidFixture(contact.fixture2()))?;
    let pos1 = transforms
        .body_transform(fixture1.body())
        .ok_or(ContactError::MissingBodyTransform(fixture1.body()))?;
    let pos2 = transforms
        .body_transform(fixture2.body())
        .ok_or(ContactError::MissingBodyTransform(fixture2.body()))?;

    if !pos1.is_valid() || !pos2.is_valid() {
        return Ok(None);
    }

    let mut manifold = ContactManifold::new();
    contact
        .kind()
        .evaluate(&mut manifold, fixture1.shape(), pos1, fixture2.shape(), pos2)
        .map_err(|source| {
            log::error!(
                "The {:?} routine of the contact {:?} was given mismatching shapes: {}",
                contact.kind(),
                handle,
                source
            );
            ContactError::UnsupportedShapes {
                contact: handle,
                source,
            }
        })?;

    if let Err(source) = manifold.validate(contact.kind().max_points()) {
        log::error!(
            "The {:?} routine produced an invalid manifold for the contact {:?}: {}",
            contact.kind(),
            handle,
            source
        );
        return Err(ContactError::InvalidManifold {
            contact: handle,
            source,
        });
    }

    if !manifold.is_valid() {
        return Ok(None);
    }

    Ok(Some(manifold))
}
