//! Traits for support mapping based shapes.

use crate::math::{Matrix, Point, Real, Vector};
use na::Unit;

/// Traits of convex shapes representable by a support mapping function.
///
/// This is the only geometric primitive collision algorithms like GJK and EPA need from a
/// convex shape.
pub trait SupportMap {
    /// Evaluates the support function of this shape.
    ///
    /// A support function is a function associating a vector to the shape point which maximizes
    /// their dot product. A zero `dir` must not produce NaN coordinates.
    fn local_support_point(&self, dir: &Vector<Real>) -> Point<Real>;

    /// Same as `self.local_support_point` except that `dir` is normalized.
    fn local_support_point_toward(&self, dir: &Unit<Vector<Real>>) -> Point<Real> {
        self.local_support_point(dir.as_ref())
    }

    /// Evaluates the support function of this shape rotated by `orientation` then translated
    /// by `position`.
    fn support_point(
        &self,
        position: &Vector<Real>,
        orientation: &Matrix<Real>,
        dir: &Vector<Real>,
    ) -> Point<Real> {
        let local_dir = orientation.transpose() * dir;
        Point::from(orientation * self.local_support_point(&local_dir).coords + position)
    }
}
