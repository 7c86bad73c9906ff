use crate::bounding_volume::Aabb;
use crate::mass_properties::MassProperties;
use crate::math::{Matrix, Point, Real, Vector};
use crate::shape::{ShapeError, SharedShape};

/// A convex shape placed in the local-space of a multishape.
///
/// The shape is first rotated by `orientation`, then translated by `position`. The AABB of
/// the transformed shape is cached and recomputed by every setter.
#[derive(Clone, Debug)]
pub struct TransformedShape {
    shape: SharedShape,
    position: Vector<Real>,
    orientation: Matrix<Real>,
    inv_orientation: Matrix<Real>,
    aabb: Aabb,
}

impl TransformedShape {
    /// Places `shape` with the given orientation matrix and position.
    ///
    /// `orientation` must be a rotation matrix: its inverse is taken to be its transpose.
    pub fn new(shape: SharedShape, orientation: Matrix<Real>, position: Vector<Real>) -> Self {
        let aabb = shape.compute_aabb(&orientation).translated(&position);
        Self {
            shape,
            position,
            inv_orientation: orientation.transpose(),
            orientation,
            aabb,
        }
    }

    /// The placed shape.
    #[inline]
    pub fn shape(&self) -> &SharedShape {
        &self.shape
    }

    /// The position of the shape in the multishape's local-space.
    #[inline]
    pub fn position(&self) -> &Vector<Real> {
        &self.position
    }

    /// The orientation of the shape in the multishape's local-space.
    #[inline]
    pub fn orientation(&self) -> &Matrix<Real> {
        &self.orientation
    }

    /// The inverse of the orientation of this shape.
    #[inline]
    pub fn inv_orientation(&self) -> &Matrix<Real> {
        &self.inv_orientation
    }

    /// The AABB of the transformed shape.
    #[inline]
    pub fn aabb(&self) -> &Aabb {
        &self.aabb
    }

    /// Moves the shape and recomputes its AABB.
    pub fn set_position(&mut self, position: Vector<Real>) {
        self.position = position;
        self.update_aabb();
    }

    /// Rotates the shape and recomputes its AABB.
    pub fn set_orientation(&mut self, orientation: Matrix<Real>) {
        self.orientation = orientation;
        self.inv_orientation = orientation.transpose();
        self.update_aabb();
    }

    /// Recomputes the cached AABB from the current geometry of the shape.
    pub fn update_aabb(&mut self) {
        self.aabb = self
            .shape
            .compute_aabb(&self.orientation)
            .translated(&self.position);
    }

    /// Maps a point from the local-space of the shape to the multishape's local-space.
    #[inline]
    pub fn transform_point(&self, pt: &Point<Real>) -> Point<Real> {
        Point::from(self.orientation * pt.coords + self.position)
    }

    /// Maps a point from the multishape's local-space to the local-space of the shape.
    #[inline]
    pub fn inverse_transform_point(&self, pt: &Point<Real>) -> Point<Real> {
        Point::from(self.inv_orientation * (pt.coords - self.position))
    }

    /// Maps a vector from the multishape's local-space to the local-space of the shape.
    #[inline]
    pub fn inverse_transform_vector(&self, v: &Vector<Real>) -> Vector<Real> {
        self.inv_orientation * v
    }

    /// Is `pt`, expressed in the multishape's local-space, inside of the transformed shape?
    pub fn contains_local_point(&self, pt: &Point<Real>) -> bool {
        self.shape
            .contains_local_point(&self.inverse_transform_point(pt))
    }

    /// The geometric center of the shape in the multishape's local-space.
    pub fn center(&self) -> Result<Point<Real>, ShapeError> {
        Ok(self.transform_point(&self.shape.geometric_center()?))
    }

    /// The mass properties of the shape, expressed about the origin of the multishape.
    pub fn mass_properties(&self) -> Result<MassProperties, ShapeError> {
        Ok(self
            .shape
            .mass_properties()?
            .transformed(&self.position, &self.orientation))
    }
}
