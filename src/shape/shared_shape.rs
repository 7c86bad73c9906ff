use crate::math::{Matrix, Real, Vector};
use crate::shape::{Ball, Capsule, CompoundShape, Cuboid, Shape, ShapeError, TransformedShape};
use alloc::sync::Arc;
use alloc::vec::Vec;
use core::fmt;
use core::ops::Deref;

/// The shape of a collider, shared between every owner of a clone of this handle.
///
/// The same shape instance may appear as a part of several compound shapes.
#[derive(Clone)]
pub struct SharedShape(pub Arc<dyn Shape>);

impl Deref for SharedShape {
    type Target = dyn Shape;
    fn deref(&self) -> &dyn Shape {
        &*self.0
    }
}

impl AsRef<dyn Shape> for SharedShape {
    fn as_ref(&self) -> &dyn Shape {
        &*self.0
    }
}

impl fmt::Debug for SharedShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let shape_type = self.0.shape_type();
        write!(f, "SharedShape ( Arc<{shape_type:?}> )")
    }
}

impl SharedShape {
    /// Wraps the given shape as a shared shape.
    pub fn new(shape: impl Shape) -> Self {
        Self(Arc::new(shape))
    }

    /// If this shape is shared, then the content of `self` is cloned into a unique instance,
    /// and a mutable reference to that instance is returned.
    pub fn make_mut(&mut self) -> &mut dyn Shape {
        if Arc::get_mut(&mut self.0).is_none() {
            let unique_self = self.0.clone_dyn();
            self.0 = unique_self.into();
        }
        Arc::get_mut(&mut self.0).unwrap()
    }

    /// Do `self` and `other` point to the same shape instance?
    pub fn ptr_eq(&self, other: &SharedShape) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }

    /// Initialize a compound shape defined by its parts' shapes, orientations and positions.
    pub fn compound(
        shapes: Vec<(SharedShape, Matrix<Real>, Vector<Real>)>,
    ) -> Result<Self, ShapeError> {
        let compound = CompoundShape::from_shapes(shapes)?;
        Ok(SharedShape(Arc::new(compound)))
    }

    /// Initialize a ball shape defined by its radius.
    pub fn ball(radius: Real) -> Self {
        SharedShape(Arc::new(Ball::new(radius)))
    }

    /// Initialize a cuboid shape defined by its half-extents.
    pub fn cuboid(half_extents: Vector<Real>) -> Self {
        SharedShape(Arc::new(Cuboid::new(half_extents)))
    }

    /// Initialize a capsule shape aligned with the `y` axis.
    pub fn capsule_y(half_height: Real, radius: Real) -> Self {
        SharedShape(Arc::new(Capsule::new(half_height, radius)))
    }

    /// Places this shape as a part of a multishape.
    pub fn transformed(
        self,
        orientation: Matrix<Real>,
        position: Vector<Real>,
    ) -> TransformedShape {
        TransformedShape::new(self, orientation, position)
    }
}
