use crate::pipeline::{ContactKind, FixtureHandle};
use crate::query::ContactManifold;

/// The handle of a contact stored in a [`ContactSet`](crate::pipeline::ContactSet).
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ContactHandle(pub(crate) usize);

impl ContactHandle {
    /// The index of this contact in its set.
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
/// Flags indicating the status of a [`Contact`].
pub struct ContactFlags(u8);

bitflags::bitflags! {
    impl ContactFlags: u8 {
        /// Set if the manifold of the contact has at least one point.
        const TOUCHING = 1;
        /// Set if the contact should be handed to the constraint solver.
        ///
        /// Reset on every update.
        const ENABLED = 1 << 1;
        /// Set if the last update met a non-finite transform or manifold.
        const NUMERIC_FAULT = 1 << 2;
    }
}

/// A potential contact between two fixtures whose bounding volumes overlap.
///
/// The fixtures are stored in the canonical order of [`Self::kind`]: the
/// shape type of `fixture1` is never larger than the shape type of
/// `fixture2`. The manifold normal points from `fixture1` toward `fixture2`.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct Contact {
    fixture1: FixtureHandle,
    fixture2: FixtureHandle,
    kind: ContactKind,
    /// The contact manifold computed by the last update.
    ///
    /// The constraint solver stores its accumulated impulses in its points.
    pub manifold: ContactManifold,
    pub(crate) flags: ContactFlags,
}

impl Contact {
    pub(crate) fn new(fixture1: FixtureHandle, fixture2: FixtureHandle, kind: ContactKind) -> Self {
        Self {
            fixture1,
            fixture2,
            kind,
            manifold: ContactManifold::new(),
            flags: ContactFlags::ENABLED,
        }
    }

    /// The first fixture involved in this contact.
    #[inline]
    pub fn fixture1(&self) -> FixtureHandle {
        self.fixture1
    }

    /// The second fixture involved in this contact.
    #[inline]
    pub fn fixture2(&self) -> FixtureHandle {
        self.fixture2
    }

    /// The narrow-phase routine of this contact.
    #[inline]
    pub fn kind(&self) -> ContactKind {
        self.kind
    }

    /// The status flags of this contact.
    #[inline]
    pub fn flags(&self) -> ContactFlags {
        self.flags
    }

    /// Does the manifold of this contact have at least one point?
    #[inline]
    pub fn is_touching(&self) -> bool {
        self.flags.contains(ContactFlags::TOUCHING)
    }

    /// Is this contact handed to the constraint solver?
    #[inline]
    pub fn is_enabled(&self) -> bool {
        self.flags.contains(ContactFlags::ENABLED)
    }

    /// Did the last update of this contact meet non-finite values?
    #[inline]
    pub fn has_numeric_fault(&self) -> bool {
        self.flags.contains(ContactFlags::NUMERIC_FAULT)
    }

    /// Enables or disables this contact until the next update.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.flags.set(ContactFlags::ENABLED, enabled);
    }

    /// Replaces the manifold, carrying the solver impulses over to the new
    /// points with the same feature ids.
    pub(crate) fn replace_manifold(&mut self, mut manifold: ContactManifold) {
        manifold.match_contacts(&self.manifold.points);
        self.manifold = manifold;
        self.flags.remove(ContactFlags::NUMERIC_FAULT);
        self.flags.set(ContactFlags::TOUCHING, !self.manifold.is_empty());
    }

    pub(crate) fn mark_numeric_fault(&mut self) {
        self.manifold.clear();
        self.flags.insert(ContactFlags::NUMERIC_FAULT);
        self.flags.remove(ContactFlags::TOUCHING);
    }
}
