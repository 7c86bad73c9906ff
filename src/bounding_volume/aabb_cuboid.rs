use crate::bounding_volume::Aabb;
use crate::math::{Matrix, Point, Real};
use crate::shape::Cuboid;
use crate::utils::OrientationOps;

impl Cuboid {
    /// Computes the AABB of this cuboid rotated by `orientation`.
    #[inline]
    pub fn aabb(&self, orientation: &Matrix<Real>) -> Aabb {
        let ws_half_extents = orientation.absolute_transform_vector(self.half_extents());

        Aabb::from_half_extents(Point::origin(), ws_half_extents)
    }

    /// Computes the local-space AABB of this cuboid.
    #[inline]
    pub fn local_aabb(&self) -> Aabb {
        let half_extents = Point::from(*self.half_extents());

        Aabb::new(-half_extents, half_extents)
    }
}
