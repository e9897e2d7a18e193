use crate::math::{Point, Real, RigidTransform, Vector, MAX_MANIFOLD_POINTS};
use crate::query::ManifoldError;
use crate::shape::PackedFeatureId;
use crate::utils::Validate;
use arrayvec::ArrayVec;

/// A single contact point between two shapes.
///
/// The pair `(fid1, fid2)` identifies the geometric features that generated
/// this point. Narrow-phase routines derive it deterministically from vertex
/// and face indices so that the same physical contact gets the same pair on
/// the next step, which is what allows the accumulated impulses to be carried
/// over.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ManifoldPoint {
    /// The contact point on the first shape, in the local frame of its body.
    pub local_p1: Point<Real>,
    /// The contact point on the second shape, in the local frame of its body.
    pub local_p2: Point<Real>,
    /// The world-space contact position: the midpoint between the two
    /// surface points.
    pub point: Point<Real>,
    /// The world-space contact normal, pointing from the first shape toward
    /// the second.
    pub normal: Vector<Real>,
    /// Signed distance between the shapes along `normal`.
    ///
    /// Negative if the shapes are penetrating.
    pub separation: Real,
    /// The impulse accumulated along the normal by the constraint solver.
    pub normal_impulse: Real,
    /// The impulse accumulated along the tangent by the constraint solver.
    pub tangent_impulse: Real,
    /// The feature of the first shape involved in this contact.
    pub fid1: PackedFeatureId,
    /// The feature of the second shape involved in this contact.
    pub fid2: PackedFeatureId,
}

impl ManifoldPoint {
    /// Builds a contact point from the world-space surface points of both
    /// shapes. Impulses start at zero.
    pub fn from_world_points(
        pos1: &RigidTransform,
        pos2: &RigidTransform,
        world_p1: Point<Real>,
        world_p2: Point<Real>,
        normal: Vector<Real>,
        separation: Real,
        fid1: PackedFeatureId,
        fid2: PackedFeatureId,
    ) -> Self {
        Self {
            local_p1: pos1.inverse_transform_point(&world_p1),
            local_p2: pos2.inverse_transform_point(&world_p2),
            point: na::center(&world_p1, &world_p2),
            normal,
            separation,
            normal_impulse: 0.0,
            tangent_impulse: 0.0,
            fid1,
            fid2,
        }
    }

    /// Same as [`Self::from_world_points`], but with the role of both shapes
    /// exchanged if `flipped` is `true`.
    ///
    /// The arguments are always given from the point of view of the shape
    /// the routine treated as first (`pos_a`, surface point `world_pa`,
    /// normal pointing from `a` to `b`).
    pub fn flipped(
        pos_a: &RigidTransform,
        pos_b: &RigidTransform,
        world_pa: Point<Real>,
        world_pb: Point<Real>,
        normal_ab: Vector<Real>,
        separation: Real,
        fid_a: PackedFeatureId,
        fid_b: PackedFeatureId,
        flipped: bool,
    ) -> Self {
        if !flipped {
            Self::from_world_points(
                pos_a, pos_b, world_pa, world_pb, normal_ab, separation, fid_a, fid_b,
            )
        } else {
            Self::from_world_points(
                pos_b, pos_a, world_pb, world_pa, -normal_ab, separation, fid_b, fid_a,
            )
        }
    }

    /// The identifier of this point: the pair of features it comes from.
    #[inline]
    pub fn feature_id(&self) -> (PackedFeatureId, PackedFeatureId) {
        (self.fid1, self.fid2)
    }

    /// Are all the geometric and impulse values of this point finite?
    pub fn is_valid(&self) -> bool {
        self.local_p1.is_valid()
            && self.local_p2.is_valid()
            && self.point.is_valid()
            && self.normal.is_valid()
            && self.separation.is_valid()
            && self.normal_impulse.is_valid()
            && self.tangent_impulse.is_valid()
    }
}

/// A contact manifold between two shapes.
///
/// A contact manifold describes a set of at most two contact points sharing
/// the same contact normal.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContactManifold {
    /// The contact points. The capacity bounds the point count to `[0, 2]`.
    pub points: ArrayVec<ManifoldPoint, MAX_MANIFOLD_POINTS>,
    /// The world-space contact normal shared by all points, pointing from the
    /// first shape toward the second.
    pub normal: Vector<Real>,
    /// The contact normal in the local frame of the first body.
    pub local_n1: Vector<Real>,
}

impl ContactManifold {
    /// Create a new empty contact-manifold.
    pub fn new() -> Self {
        Self::default()
    }

    /// The slice of all the contacts, active or not, on this contact manifold.
    #[inline]
    pub fn contacts(&self) -> &[ManifoldPoint] {
        &self.points
    }

    /// The number of contact points.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Does this manifold contain no point at all?
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Removes all the points and resets the normals.
    pub fn clear(&mut self) {
        self.points.clear();
        self.normal = Vector::zeros();
        self.local_n1 = Vector::zeros();
    }

    /// Sets the shared normal of this manifold from its world-space value.
    #[inline]
    pub fn set_normal(&mut self, pos1: &RigidTransform, normal: Vector<Real>) {
        self.normal = normal;
        self.local_n1 = pos1.inverse_transform_vector(&normal);
    }

    /// Transfers the solver impulses from `old_points` to the points of
    /// `self` with the same feature identifier.
    ///
    /// Points without a match keep a zero impulse.
    pub fn match_contacts(&mut self, old_points: &[ManifoldPoint]) {
        for contact in &mut self.points {
            for old_contact in old_points {
                if contact.fid1 == old_contact.fid1 && contact.fid2 == old_contact.fid2 {
                    // Transfer impulse cache.
                    contact.normal_impulse = old_contact.normal_impulse;
                    contact.tangent_impulse = old_contact.tangent_impulse;
                }
            }
        }
    }

    /// Checks the structural invariants a narrow-phase routine must uphold:
    /// at most `max_points` points, and no two points with the same feature
    /// identifier.
    pub fn validate(&self, max_points: usize) -> Result<(), ManifoldError> {
        if self.points.len() > max_points {
            return Err(ManifoldError::TooManyPoints {
                count: self.points.len(),
                max: max_points,
            });
        }

        for (i, pt) in self.points.iter().enumerate() {
            if self.points[i + 1..]
                .iter()
                .any(|other| other.feature_id() == pt.feature_id())
            {
                return Err(ManifoldError::DuplicateFeature {
                    fid1: pt.fid1,
                    fid2: pt.fid2,
                });
            }
        }

        Ok(())
    }

    /// Are all the values stored by this manifold finite?
    pub fn is_valid(&self) -> bool {
        self.normal.is_valid()
            && self.local_n1.is_valid()
            && self.points.iter().all(ManifoldPoint::is_valid)
    }

    /// Returns the contact with the smallest separation.
    pub fn find_deepest_contact(&self) -> Option<&ManifoldPoint> {
        self.points
            .iter()
            .min_by(|a, b| a.separation.total_cmp(&b.separation))
    }
}
