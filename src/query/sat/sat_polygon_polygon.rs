use crate::math::{Real, RigidTransform};
use crate::shape::ConvexPolygonal;

/// Computes the face of `p1` along which `p2` is the most separated from it.
///
/// `pos12` is the position of `p2` relative to `p1`. Returns the separation
/// along the best face, the index of that face on `p1`, and the index of the
/// vertex of `p2` deepest along the face's normal.
pub fn polygon_polygon_compute_separation_features<P1, P2>(
    p1: &P1,
    p2: &P2,
    pos12: &RigidTransform,
) -> (Real, usize, usize)
where
    P1: ?Sized + ConvexPolygonal,
    P2: ?Sized + ConvexPolygonal,
{
    let mut max_separation = -Real::MAX;
    let mut separation_features = (0, 0);
    let vertices2 = p2.vertices();

    for (i, (v1, n1)) in p1.vertices().iter().zip(p1.normals().iter()).enumerate() {
        let j = p2.support_point_id(&pos12.inverse_transform_vector(&-n1));
        let dpt = pos12.transform_point(&vertices2[j]) - v1;
        let separation = dpt.dot(n1);

        if separation > max_separation {
            max_separation = separation;
            separation_features = (i, j);
        }
    }

    (max_separation, separation_features.0, separation_features.1)
}
