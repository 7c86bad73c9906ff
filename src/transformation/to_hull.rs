use crate::math::{Point, Real, Vector, DEFAULT_EPSILON};
use crate::shape::SupportMap;
use alloc::vec::Vec;

#[cfg(feature = "dim3")]
use na::Unit;

/// Tessellates the boundary of a convex shape using only its support mapping.
///
/// In 3D, the eight faces of the octahedron spanned by the coordinate axes are recursively
/// split into four triangles whose vertices are the support points along the normalized
/// mid-directions. Each emitted triangle appends three points to `out`, counter-clockwise
/// when seen from outside of the shape.
///
/// In 2D, the four quarter-arcs between consecutive coordinate axes are recursively split in
/// two. Each emitted segment appends two points to `out`.
///
/// The subdivision of an element stops after `generation_threshold` generations, or as soon
/// as all its support points coincide. Degenerate elements are not emitted.
pub fn support_map_to_hull<S: SupportMap + ?Sized>(
    shape: &S,
    out: &mut Vec<Point<Real>>,
    generation_threshold: usize,
) {
    #[cfg(feature = "dim3")]
    {
        let (x, y, z) = (Vector::x_axis(), Vector::y_axis(), Vector::z_axis());
        let faces = [
            [x, y, z],
            [y, -x, z],
            [-x, -y, z],
            [-y, x, z],
            [y, x, -z],
            [-x, y, -z],
            [-y, -x, -z],
            [x, -y, -z],
        ];

        for [a, b, c] in faces {
            let pts = [
                shape.local_support_point_toward(&a),
                shape.local_support_point_toward(&b),
                shape.local_support_point_toward(&c),
            ];
            subdivide_triangle(shape, [a, b, c], pts, generation_threshold, out);
        }
    }

    #[cfg(feature = "dim2")]
    {
        let (x, y) = (Vector::x_axis(), Vector::y_axis());
        let arcs = [[x, y], [y, -x], [-x, -y], [-y, x]];

        for [a, b] in arcs {
            let pts = [
                shape.local_support_point_toward(&a),
                shape.local_support_point_toward(&b),
            ];
            let dirs = [a.into_inner(), b.into_inner()];
            subdivide_arc(shape, dirs, pts, generation_threshold, out);
        }
    }
}

fn coincide(a: &Point<Real>, b: &Point<Real>) -> bool {
    na::distance_squared(a, b) <= DEFAULT_EPSILON * DEFAULT_EPSILON
}

#[cfg(feature = "dim3")]
fn subdivide_triangle<S: SupportMap + ?Sized>(
    shape: &S,
    dirs: [Unit<Vector<Real>>; 3],
    pts: [Point<Real>; 3],
    generations_left: usize,
    out: &mut Vec<Point<Real>>,
) {
    let [p1, p2, p3] = pts;

    if coincide(&p1, &p2) && coincide(&p1, &p3) {
        return;
    }

    if generations_left == 0 {
        let normal = (p2 - p1).cross(&(p3 - p1));
        if normal.norm_squared() > DEFAULT_EPSILON * DEFAULT_EPSILON {
            out.extend_from_slice(&pts);
        }
        return;
    }

    let [d1, d2, d3] = dirs;
    let mid = |a: &Unit<Vector<Real>>, b: &Unit<Vector<Real>>| {
        Unit::new_normalize(a.into_inner() + b.into_inner())
    };
    let (d12, d23, d31) = (mid(&d1, &d2), mid(&d2, &d3), mid(&d3, &d1));
    let p12 = shape.local_support_point_toward(&d12);
    let p23 = shape.local_support_point_toward(&d23);
    let p31 = shape.local_support_point_toward(&d31);
    let next = generations_left - 1;

    subdivide_triangle(shape, [d1, d12, d31], [p1, p12, p31], next, out);
    subdivide_triangle(shape, [d12, d2, d23], [p12, p2, p23], next, out);
    subdivide_triangle(shape, [d31, d23, d3], [p31, p23, p3], next, out);
    subdivide_triangle(shape, [d12, d23, d31], [p12, p23, p31], next, out);
}

#[cfg(feature = "dim2")]
fn subdivide_arc<S: SupportMap + ?Sized>(
    shape: &S,
    dirs: [Vector<Real>; 2],
    pts: [Point<Real>; 2],
    generations_left: usize,
    out: &mut Vec<Point<Real>>,
) {
    let [p1, p2] = pts;

    if coincide(&p1, &p2) {
        return;
    }

    if generations_left == 0 {
        out.extend_from_slice(&pts);
        return;
    }

    let [d1, d2] = dirs;
    let d12 = (d1 + d2).normalize();
    let p12 = shape.local_support_point(&d12);
    let next = generations_left - 1;

    subdivide_arc(shape, [d1, d12], [p1, p12], next, out);
    subdivide_arc(shape, [d12, d2], [p12, p2], next, out);
}
