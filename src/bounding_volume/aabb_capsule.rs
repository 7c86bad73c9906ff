use crate::bounding_volume::Aabb;
use crate::math::{Matrix, Real, Vector};
use crate::shape::Capsule;

impl Capsule {
    /// The axis-aligned bounding box of this capsule rotated by `orientation`.
    #[inline]
    pub fn aabb(&self, orientation: &Matrix<Real>) -> Aabb {
        let b = orientation * (Vector::y() * self.half_height());
        let a = -b;
        let mins = a.inf(&b) - Vector::repeat(self.radius());
        let maxs = a.sup(&b) + Vector::repeat(self.radius());
        Aabb::new(mins.into(), maxs.into())
    }

    /// The local-space axis-aligned bounding box of this capsule.
    #[inline]
    pub fn local_aabb(&self) -> Aabb {
        self.aabb(&Matrix::identity())
    }
}
