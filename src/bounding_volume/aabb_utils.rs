use crate::bounding_volume::Aabb;
use crate::math::{Matrix, Point, Real, Vector, DIM};
use crate::shape::SupportMap;

/// Computes the AABB of a support mapped shape rotated by the orientation matrix `orientation`.
///
/// Each axis of the resulting box is obtained by probing the support mapping along the
/// corresponding row of `orientation` in both directions: `2 * DIM` support queries in total.
pub fn support_map_aabb<G>(orientation: &Matrix<Real>, shape: &G) -> Aabb
where
    G: SupportMap + ?Sized,
{
    let mut mins = Point::origin();
    let mut maxs = Point::origin();

    for d in 0..DIM {
        // The world axis `d` expressed in the shape's local frame.
        let axis: Vector<Real> = orientation.row(d).transpose();
        maxs[d] = axis.dot(&shape.local_support_point(&axis).coords);
        mins[d] = axis.dot(&shape.local_support_point(&-axis).coords);
    }

    Aabb::new(mins, maxs)
}

/// Computes the AABB of a set of points.
///
/// Returns `None` if the iterator is empty.
pub fn point_cloud_aabb<'a, I>(pts: I) -> Option<Aabb>
where
    I: IntoIterator<Item = &'a Point<Real>>,
{
    let mut it = pts.into_iter();
    let p0 = it.next()?;
    let mut aabb = Aabb::new(*p0, *p0);

    for pt in it {
        aabb.take_point(*pt);
    }

    Some(aabb)
}
