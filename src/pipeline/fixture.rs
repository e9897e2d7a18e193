use crate::pipeline::{BodyHandle, ContactHandle};
use crate::shape::{Shape, ShapeType};
use slab::Slab;
use smallvec::SmallVec;

/// The handle of a fixture stored in a [`FixtureSet`].
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FixtureHandle(pub(crate) usize);

impl FixtureHandle {
    /// The index of this fixture in its set.
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

/// A shape attached to a rigid body.
#[derive(Clone, Debug)]
pub struct Fixture {
    shape: Shape,
    shape_type: ShapeType,
    body: BodyHandle,
    pub(crate) contacts: SmallVec<[ContactHandle; 4]>,
}

impl Fixture {
    /// Attaches `shape` to `body`.
    pub fn new(shape: impl Into<Shape>, body: BodyHandle) -> Self {
        let shape = shape.into();
        Self {
            shape_type: shape.shape_type(),
            shape,
            body,
            contacts: SmallVec::new(),
        }
    }

    /// The geometry of this fixture.
    #[inline]
    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    /// The type of [`Self::shape`].
    #[inline]
    pub fn shape_type(&self) -> ShapeType {
        self.shape_type
    }

    /// The body this fixture is attached to.
    #[inline]
    pub fn body(&self) -> BodyHandle {
        self.body
    }

    /// The contacts this fixture is currently involved in.
    #[inline]
    pub fn contacts(&self) -> &[ContactHandle] {
        &self.contacts
    }
}

/// The set of all the fixtures of a simulation.
///
/// Fixtures are removed through [`ContactSet::remove_fixture`](crate::pipeline::ContactSet::remove_fixture)
/// so that no contact outlives them.
#[derive(Clone, Debug, Default)]
pub struct FixtureSet {
    fixtures: Slab<Fixture>,
}

impl FixtureSet {
    /// An empty set of fixtures.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a fixture to this set.
    pub fn insert(&mut self, mut fixture: Fixture) -> FixtureHandle {
        fixture.contacts.clear();
        FixtureHandle(self.fixtures.insert(fixture))
    }

    /// The fixture identified by `handle`.
    pub fn get(&self, handle: FixtureHandle) -> Option<&Fixture> {
        self.fixtures.get(handle.0)
    }

    pub(crate) fn get_mut(&mut self, handle: FixtureHandle) -> Option<&mut Fixture> {
        self.fixtures.get_mut(handle.0)
    }

    pub(crate) fn remove(&mut self, handle: FixtureHandle) -> Option<Fixture> {
        self.fixtures.try_remove(handle.0)
    }

    /// Does this set contain the fixture `handle`?
    pub fn contains(&self, handle: FixtureHandle) -> bool {
        self.fixtures.contains(handle.0)
    }

    /// Iterates through all the fixtures and their handles.
    pub fn iter(&self) -> impl Iterator<Item = (FixtureHandle, &Fixture)> {
        self.fixtures
            .iter()
            .map(|(key, fixture)| (FixtureHandle(key), fixture))
    }

    /// The number of fixtures.
    pub fn len(&self) -> usize {
        self.fixtures.len()
    }

    /// Is this set empty?
    pub fn is_empty(&self) -> bool {
        self.fixtures.is_empty()
    }
}
