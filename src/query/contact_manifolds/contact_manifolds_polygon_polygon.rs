use crate::math::{Real, RigidTransform, LINEAR_SLOP};
use crate::query::clip::{self, ClipVertex};
use crate::query::sat;
use crate::query::{ContactManifold, ManifoldPoint, UnsupportedShapes};
use crate::shape::{ConvexPolygonal, Edge, PackedFeatureId, Polygon, Shape, ShapeType};

/// Computes the contact manifold between two convex polygons given as
/// [`Shape`]s.
///
/// Fails, leaving `manifold` empty, if one of the shapes is not a polygon.
pub fn contact_manifold_polygon_polygon_shapes(
    manifold: &mut ContactManifold,
    shape1: &Shape,
    pos1: &RigidTransform,
    shape2: &Shape,
    pos2: &RigidTransform,
) -> Result<(), UnsupportedShapes> {
    if let (Some(polygon1), Some(polygon2)) = (shape1.as_polygon(), shape2.as_polygon()) {
        contact_manifold_polygon_polygon(manifold, polygon1, pos1, polygon2, pos2);
        Ok(())
    } else {
        manifold.clear();
        Err(UnsupportedShapes::new(
            ShapeType::Polygon,
            ShapeType::Polygon,
            shape1,
            shape2,
        ))
    }
}

/// Computes the contact manifold between two convex polygons.
pub fn contact_manifold_polygon_polygon(
    manifold: &mut ContactManifold,
    polygon1: &Polygon,
    pos1: &RigidTransform,
    polygon2: &Polygon,
    pos2: &RigidTransform,
) {
    contact_manifold_convex_polygonal(manifold, polygon1, pos1, polygon2, pos2);
}

/// Computes the contact manifold between a convex polygon and an edge given
/// as [`Shape`]s.
///
/// Fails, leaving `manifold` empty, if the shapes are not a polygon and an
/// edge, in that order.
pub fn contact_manifold_polygon_edge_shapes(
    manifold: &mut ContactManifold,
    shape1: &Shape,
    pos1: &RigidTransform,
    shape2: &Shape,
    pos2: &RigidTransform,
) -> Result<(), UnsupportedShapes> {
    if let (Some(polygon1), Some(edge2)) = (shape1.as_polygon(), shape2.as_edge()) {
        contact_manifold_polygon_edge(manifold, polygon1, pos1, edge2, pos2);
        Ok(())
    } else {
        manifold.clear();
        Err(UnsupportedShapes::new(
            ShapeType::Polygon,
            ShapeType::Edge,
            shape1,
            shape2,
        ))
    }
}

/// Computes the contact manifold between a convex polygon and an edge.
///
/// The edge is handled as a two-sided polygon, so a polygon can rest on
/// either of its sides.
pub fn contact_manifold_polygon_edge(
    manifold: &mut ContactManifold,
    polygon1: &Polygon,
    pos1: &RigidTransform,
    edge2: &Edge,
    pos2: &RigidTransform,
) {
    contact_manifold_convex_polygonal(manifold, polygon1, pos1, edge2, pos2);
}

/// Computes the contact manifold between two convex polygonal shapes.
///
/// The reference face is the face of maximum separation found by SAT on
/// both shapes, with a small bias toward the first shape so that the choice
/// does not flicker between steps. The incident face is the face of the other
/// shape most anti-parallel to it. The incident face is clipped against the
/// side planes of the reference face, and the clipped points with a
/// separation up to [`LINEAR_SLOP`] are kept.
///
/// Unclipped points are identified by `(face(ref), vertex(inc))` and clipped
/// points by `(vertex(ref), face(inc))`, each feature being reported on the
/// side of the shape it belongs to.
pub fn contact_manifold_convex_polygonal<P1, P2>(
    manifold: &mut ContactManifold,
    p1: &P1,
    pos1: &RigidTransform,
    p2: &P2,
    pos2: &RigidTransform,
) where
    P1: ?Sized + ConvexPolygonal,
    P2: ?Sized + ConvexPolygonal,
{
    manifold.clear();

    let pos12 = pos1.inv_mul(pos2);
    let pos21 = pos12.inverse();

    let (sep1, face1, _) = sat::polygon_polygon_compute_separation_features(p1, p2, &pos12);
    if sep1 > LINEAR_SLOP {
        return;
    }

    let (sep2, face2, _) = sat::polygon_polygon_compute_separation_features(p2, p1, &pos21);
    if sep2 > LINEAR_SLOP {
        return;
    }

    if sep2 > sep1 + 0.1 * LINEAR_SLOP {
        clip_reference_face(manifold, p2, pos2, face2, p1, pos1, true);
    } else {
        clip_reference_face(manifold, p1, pos1, face1, p2, pos2, false);
    }
}

fn clip_reference_face<R, I>(
    manifold: &mut ContactManifold,
    reference: &R,
    pos_ref: &RigidTransform,
    ref_face: usize,
    incident: &I,
    pos_inc: &RigidTransform,
    flipped: bool,
) where
    R: ?Sized + ConvexPolygonal,
    I: ?Sized + ConvexPolygonal,
{
    // All the computations are done in the local frame of the reference shape.
    let pos_ri = pos_ref.inv_mul(pos_inc);
    let ref_vertices = reference.vertices();
    let ref_normal = reference.normals()[ref_face];
    let inc_vertices = incident.vertices();
    let inc_normals = incident.normals();

    // Find the incident face.
    let local_ref_normal = pos_ri.inverse_transform_vector(&ref_normal);
    let mut inc_face = 0;
    let mut min_dot = Real::MAX;

    for (i, normal) in inc_normals.iter().enumerate() {
        let dot = local_ref_normal.dot(normal);

        if dot < min_dot {
            min_dot = dot;
            inc_face = i;
        }
    }

    let i11 = inc_face;
    let i12 = (inc_face + 1) % inc_vertices.len();
    let incident_segment = [
        ClipVertex::new(
            pos_ri.transform_point(&inc_vertices[i11]),
            PackedFeatureId::face(ref_face as u32),
            PackedFeatureId::vertex(i11 as u32),
        ),
        ClipVertex::new(
            pos_ri.transform_point(&inc_vertices[i12]),
            PackedFeatureId::face(ref_face as u32),
            PackedFeatureId::vertex(i12 as u32),
        ),
    ];

    let iv1 = ref_face;
    let iv2 = (ref_face + 1) % ref_vertices.len();
    let v11 = ref_vertices[iv1];
    let v12 = ref_vertices[iv2];
    let Some(tangent) = (v12 - v11).try_normalize(0.0) else {
        return;
    };

    let front_offset = ref_normal.dot(&v11.coords);
    let side_offset1 = -tangent.dot(&v11.coords);
    let side_offset2 = tangent.dot(&v12.coords);

    let clipped1 = clip::clip_segment_to_line(
        &incident_segment,
        &-tangent,
        side_offset1,
        PackedFeatureId::vertex(iv1 as u32),
        PackedFeatureId::face(i11 as u32),
    );

    let Ok(clipped1) = clipped1.into_inner() else {
        return;
    };

    let clipped2 = clip::clip_segment_to_line(
        &clipped1,
        &tangent,
        side_offset2,
        PackedFeatureId::vertex(iv2 as u32),
        PackedFeatureId::face(i11 as u32),
    );

    if clipped2.len() < 2 {
        return;
    }

    let normal = pos_ref.transform_vector(&ref_normal);

    for cv in &clipped2 {
        let separation = ref_normal.dot(&cv.point.coords) - front_offset;

        if separation <= LINEAR_SLOP {
            let world_p_inc = pos_ref.transform_point(&cv.point);
            let world_p_ref = pos_ref.transform_point(&(cv.point - ref_normal * separation));

            manifold.points.push(ManifoldPoint::flipped(
                pos_ref,
                pos_inc,
                world_p_ref,
                world_p_inc,
                normal,
                separation,
                cv.fid_ref,
                cv.fid_inc,
                flipped,
            ));
        }
    }

    if manifold.is_empty() {
        return;
    }

    if flipped {
        manifold.set_normal(pos_inc, -normal);
    } else {
        manifold.set_normal(pos_ref, normal);
    }
}
