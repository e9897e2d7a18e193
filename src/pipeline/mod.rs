//! Persistent contacts between the fixtures of rigid bodies.
//!
//! The [`ContactSet`] owns one [`Contact`] per pair of fixtures reported as
//! overlapping by a broad-phase. Each contact is bound at creation to the
//! [`ContactKind`] resolved by the [`ContactRegistry`] from the shape types
//! of its fixtures, and its manifold is recomputed on every
//! [`ContactSet::update`].

pub use self::body_transforms::{BodyHandle, BodyTransforms};
pub use self::contact::{Contact, ContactFlags, ContactHandle};
pub use self::contact_kind::ContactKind;
pub use self::contact_registry::{ContactRegistry, PairRoutine, RegistryError};
pub use self::contact_set::{ContactError, ContactEvent, ContactSet};
pub use self::fixture::{Fixture, FixtureHandle, FixtureSet};

mod body_transforms;
mod contact;
mod contact_kind;
mod contact_registry;
mod contact_set;
mod fixture;
