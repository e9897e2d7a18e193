use crate::math::{Point, Real, Vector};
use crate::shape::PackedFeatureId;
use arrayvec::ArrayVec;

/// A vertex of a segment being clipped, tagged with the features of the
/// reference and incident shapes it comes from.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ClipVertex {
    /// The position of the vertex.
    pub point: Point<Real>,
    /// The feature of the reference shape.
    pub fid_ref: PackedFeatureId,
    /// The feature of the incident shape.
    pub fid_inc: PackedFeatureId,
}

impl ClipVertex {
    /// A clip vertex at `point` with the given features.
    pub fn new(point: Point<Real>, fid_ref: PackedFeatureId, fid_inc: PackedFeatureId) -> Self {
        Self {
            point,
            fid_ref,
            fid_inc,
        }
    }
}

/// Clips the segment `input` against the half-plane `normal.dot(p) <= offset`.
///
/// The vertices inside of the half-plane are kept as-is. If the segment
/// crosses the line, the intersection point is added and tagged with
/// `(clip_fid_ref, clip_fid_inc)`. Returns less than two points only if the
/// segment lies entirely outside of the half-plane.
pub fn clip_segment_to_line(
    input: &[ClipVertex; 2],
    normal: &Vector<Real>,
    offset: Real,
    clip_fid_ref: PackedFeatureId,
    clip_fid_inc: PackedFeatureId,
) -> ArrayVec<ClipVertex, 2> {
    let mut result = ArrayVec::new();

    let distance0 = normal.dot(&input[0].point.coords) - offset;
    let distance1 = normal.dot(&input[1].point.coords) - offset;

    if distance0 <= 0.0 {
        result.push(input[0]);
    }

    if distance1 <= 0.0 {
        result.push(input[1]);
    }

    if distance0 * distance1 < 0.0 {
        // The points are on different sides of the line, so at most one
        // of them was pushed.
        let interp = distance0 / (distance0 - distance1);
        let point = input[0].point + (input[1].point - input[0].point) * interp;
        result.push(ClipVertex::new(point, clip_fid_ref, clip_fid_inc));
    }

    result
}
