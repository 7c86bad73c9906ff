use crate::bounding_volume::Aabb;
use crate::math::{Matrix, Point, Real, Vector};
use crate::shape::Ball;

/// Computes the Axis-Aligned Bounding Box of a ball centered at `center`.
#[inline]
pub fn ball_aabb(center: &Point<Real>, radius: Real) -> Aabb {
    Aabb::new(
        *center + Vector::repeat(-radius),
        *center + Vector::repeat(radius),
    )
}

impl Ball {
    /// Computes the AABB of this ball rotated by `orientation`.
    ///
    /// A ball is invariant under rotation, so `orientation` is ignored.
    #[inline]
    pub fn aabb(&self, _orientation: &Matrix<Real>) -> Aabb {
        self.local_aabb()
    }

    /// Computes the local-space AABB of this ball.
    #[inline]
    pub fn local_aabb(&self) -> Aabb {
        ball_aabb(&Point::origin(), self.radius())
    }
}
