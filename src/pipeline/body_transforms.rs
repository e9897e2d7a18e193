use crate::math::RigidTransform;
use hashbrown::HashMap;

/// The handle of a rigid body owned by the caller.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BodyHandle(pub u32);

/// Read access to the world transform of every body, frozen for the duration
/// of a step.
pub trait BodyTransforms: Sync {
    /// The world transform of the body `handle`, if it exists.
    fn body_transform(&self, handle: BodyHandle) -> Option<&RigidTransform>;
}

impl BodyTransforms for [RigidTransform] {
    #[inline]
    fn body_transform(&self, handle: BodyHandle) -> Option<&RigidTransform> {
        self.get(handle.0 as usize)
    }
}

impl BodyTransforms for Vec<RigidTransform> {
    #[inline]
    fn body_transform(&self, handle: BodyHandle) -> Option<&RigidTransform> {
        self.as_slice().body_transform(handle)
    }
}

impl<S: core::hash::BuildHasher + Sync> BodyTransforms for HashMap<BodyHandle, RigidTransform, S> {
    #[inline]
    fn body_transform(&self, handle: BodyHandle) -> Option<&RigidTransform> {
        self.get(&handle)
    }
}
