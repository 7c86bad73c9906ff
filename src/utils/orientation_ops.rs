use crate::math::{Matrix, Real, Rotation, Vector};

/// Extra operations with orientation matrices.
pub trait OrientationOps {
    /// Transform a vector by the component-wise absolute value of `self`.
    ///
    /// Applied to the half-extents of a box, this yields the half-extents of the
    /// axis-aligned box enclosing the rotated box.
    fn absolute_transform_vector(&self, v: &Vector<Real>) -> Vector<Real>;
}

impl OrientationOps for Matrix<Real> {
    #[inline]
    fn absolute_transform_vector(&self, v: &Vector<Real>) -> Vector<Real> {
        self.abs() * *v
    }
}

/// The orientation matrix equivalent to the rotation `rot`.
#[inline]
pub fn orientation_matrix(rot: &Rotation<Real>) -> Matrix<Real> {
    rot.to_rotation_matrix().into_inner()
}
