use crate::bounding_volume::{details::support_map_aabb, Aabb};
use crate::mass_properties::MassProperties;
use crate::math::{AngularInertia, Matrix, Point, Real, Vector};
use crate::shape::{
    Ball, Capsule, CompoundShape, Cuboid, Multishape, ShapeError, ShapeObserver, ShapeProperties,
    SupportMap,
};
use crate::transformation;
use alloc::boxed::Box;
use alloc::sync::Arc;
use alloc::vec::Vec;
use downcast_rs::{impl_downcast, DowncastSync};

/// The default number of subdivision generations used by [`Shape::make_hull`].
pub const DEFAULT_HULL_GENERATIONS: usize = 4;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
/// Enum representing the type of a shape.
pub enum ShapeType {
    /// A ball shape.
    Ball = 0,
    /// A cuboid shape.
    Cuboid,
    /// A capsule shape.
    Capsule,
    /// A compound shape.
    Compound,
    /// A shape defined outside of this crate.
    Custom,
}

/// Trait implemented by shapes usable by this crate.
///
/// Every shape owns a [`ShapeProperties`] block caching its mass properties, local AABB and
/// geometric center. Mutating a shape marks this block stale; [`Shape::update_shape`]
/// recomputes and commits it.
pub trait Shape: DowncastSync {
    /// Gets the type tag of this shape.
    fn shape_type(&self) -> ShapeType;

    /// The cached properties of this shape.
    fn properties(&self) -> &ShapeProperties;

    /// The cached properties of this shape, mutably.
    fn properties_mut(&mut self) -> &mut ShapeProperties;

    /// Clones `self`.
    fn clone_dyn(&self) -> Box<dyn Shape>;

    /// Computes the mass properties of this shape given its current geometry and density.
    fn compute_mass_properties(&self) -> Result<MassProperties, ShapeError>;

    /// Is the local-space point `point` inside of this shape?
    fn contains_local_point(&self, point: &Point<Real>) -> bool;

    /// Converts this shape into its support mapping, if it has one.
    fn as_support_map(&self) -> Option<&dyn SupportMap> {
        None
    }

    /// Converts this shape into a multishape, if it is one.
    fn as_multishape(&self) -> Option<&dyn Multishape> {
        None
    }

    /// Computes the AABB of this shape rotated by `orientation`.
    ///
    /// By default, this probes the support mapping along the axes of `orientation`. Shapes
    /// without support mapping fall back to the rotated box of their last committed local AABB.
    ///
    /// This does not check whether the shape is stale. Queries go through the checked
    /// `bounding_box` method of `dyn Shape` instead.
    fn compute_aabb(&self, orientation: &Matrix<Real>) -> Aabb {
        match self.as_support_map() {
            Some(support_map) => support_map_aabb(orientation, support_map),
            None => self
                .properties()
                .last_local_aabb()
                .transform_by(&Vector::zeros(), orientation),
        }
    }

    /// Computes the AABB of this shape in its local-space.
    fn compute_local_aabb(&self) -> Aabb {
        self.compute_aabb(&Matrix::identity())
    }

    /// Is `point` inside of this shape rotated by `orientation` then translated by `position`?
    fn contains_point(
        &self,
        position: &Vector<Real>,
        orientation: &Matrix<Real>,
        point: &Point<Real>,
    ) -> bool {
        let local_point = Point::from(orientation.transpose() * (point.coords - position));
        self.contains_local_point(&local_point)
    }

    /// Appends to `out` a tessellation of the boundary of this shape.
    ///
    /// In 3D, each consecutive triplet of points is a triangle. In 2D, each consecutive pair
    /// of points is a segment. See [`transformation::support_map_to_hull`] for the details of
    /// the default implementation.
    fn make_hull(&self, out: &mut Vec<Point<Real>>, generation_threshold: usize) {
        if let Some(support_map) = self.as_support_map() {
            transformation::support_map_to_hull(support_map, out, generation_threshold);
        }
    }

    /// Recomputes and commits every cached property of this shape.
    ///
    /// On error, the previously committed properties and the stale flag are left untouched.
    fn update_shape(&mut self) -> Result<(), ShapeError> {
        let mass_properties = self.compute_mass_properties()?;
        let local_aabb = self.compute_local_aabb();
        self.properties_mut()
            .commit(mass_properties, local_aabb, Point::origin());
        Ok(())
    }
}

impl_downcast!(sync Shape);

impl dyn Shape {
    /// Converts this abstract shape to the given shape, if it is one.
    pub fn as_shape<T: Shape>(&self) -> Option<&T> {
        self.downcast_ref()
    }
    /// Converts this abstract shape to the given mutable shape, if it is one.
    pub fn as_shape_mut<T: Shape>(&mut self) -> Option<&mut T> {
        self.downcast_mut()
    }

    /// Converts this abstract shape to a ball, if it is one.
    pub fn as_ball(&self) -> Option<&Ball> {
        self.downcast_ref()
    }

    /// Converts this abstract shape to a cuboid, if it is one.
    pub fn as_cuboid(&self) -> Option<&Cuboid> {
        self.downcast_ref()
    }

    /// Converts this abstract shape to a capsule, if it is one.
    pub fn as_capsule(&self) -> Option<&Capsule> {
        self.downcast_ref()
    }

    /// Converts this abstract shape to a compound shape, if it is one.
    pub fn as_compound(&self) -> Option<&CompoundShape> {
        self.downcast_ref()
    }

    /// The mass of this shape.
    pub fn mass(&self) -> Result<Real, ShapeError> {
        self.properties().mass()
    }

    /// The angular inertia of this shape about its local origin.
    pub fn inertia(&self) -> Result<AngularInertia<Real>, ShapeError> {
        self.properties().inertia()
    }

    /// The mass properties of this shape.
    pub fn mass_properties(&self) -> Result<MassProperties, ShapeError> {
        self.properties().mass_properties()
    }

    /// The local-space AABB of this shape, as committed by its last update.
    pub fn local_aabb(&self) -> Result<Aabb, ShapeError> {
        self.properties().local_aabb()
    }

    /// The geometric center of this shape in its local-space.
    pub fn geometric_center(&self) -> Result<Point<Real>, ShapeError> {
        self.properties().geometric_center()
    }

    /// Has this shape been modified since its last update?
    pub fn is_stale(&self) -> bool {
        self.properties().is_stale()
    }

    /// The number of completed update cycles of this shape.
    pub fn revision(&self) -> u64 {
        self.properties().revision()
    }

    /// Subscribes an observer to the update cycles of this shape.
    pub fn subscribe(&mut self, observer: Arc<dyn ShapeObserver>) {
        self.properties_mut().subscribe(observer)
    }

    /// The AABB of this shape rotated by `orientation`.
    ///
    /// This is the entry point of narrow-phase queries: it fails with [`ShapeError::Stale`]
    /// if the shape was modified since its last update.
    pub fn bounding_box(&self, orientation: &Matrix<Real>) -> Result<Aabb, ShapeError> {
        self.properties().ensure_up_to_date()?;
        Ok(self.compute_aabb(orientation))
    }

    /// Evaluates the local support function of this shape.
    ///
    /// Multishapes have no support mapping of their own: they must be queried part by part
    /// through [`Multishape::working_clone`].
    pub fn support_mapping(&self, dir: &Vector<Real>) -> Result<Point<Real>, ShapeError> {
        let support_map = self.as_support_map().ok_or(ShapeError::NoSupportMap)?;
        self.properties().ensure_up_to_date()?;
        Ok(support_map.local_support_point(dir))
    }
}

macro_rules! impl_shape_for_convex(
    ($t: ty, $shape_type: ident) => {
        impl Shape for $t {
            fn shape_type(&self) -> ShapeType {
                ShapeType::$shape_type
            }

            fn properties(&self) -> &ShapeProperties {
                &self.props
            }

            fn properties_mut(&mut self) -> &mut ShapeProperties {
                &mut self.props
            }

            fn clone_dyn(&self) -> Box<dyn Shape> {
                Box::new(self.clone())
            }

            fn compute_mass_properties(&self) -> Result<MassProperties, ShapeError> {
                Ok(self.mass_properties(self.props.density()))
            }

            fn contains_local_point(&self, point: &Point<Real>) -> bool {
                self.contains_local_point(point)
            }

            fn as_support_map(&self) -> Option<&dyn SupportMap> {
                Some(self as &dyn SupportMap)
            }

            fn compute_aabb(&self, orientation: &Matrix<Real>) -> Aabb {
                self.aabb(orientation)
            }

            fn compute_local_aabb(&self) -> Aabb {
                self.local_aabb()
            }
        }
    }
);

impl_shape_for_convex!(Ball, Ball);
impl_shape_for_convex!(Cuboid, Cuboid);
impl_shape_for_convex!(Capsule, Capsule);

impl Shape for CompoundShape {
    fn shape_type(&self) -> ShapeType {
        ShapeType::Compound
    }

    fn properties(&self) -> &ShapeProperties {
        &self.props
    }

    fn properties_mut(&mut self) -> &mut ShapeProperties {
        &mut self.props
    }

    fn clone_dyn(&self) -> Box<dyn Shape> {
        Box::new(self.clone())
    }

    fn compute_mass_properties(&self) -> Result<MassProperties, ShapeError> {
        CompoundShape::aggregate_mass_properties(self.parts())
    }

    fn contains_local_point(&self, point: &Point<Real>) -> bool {
        self.parts().iter().any(|part| part.contains_local_point(point))
    }

    fn as_multishape(&self) -> Option<&dyn Multishape> {
        Some(self as &dyn Multishape)
    }

    fn compute_aabb(&self, orientation: &Matrix<Real>) -> Aabb {
        self.aabb().transform_by(&Vector::zeros(), orientation)
    }

    fn make_hull(&self, out: &mut Vec<Point<Real>>, generation_threshold: usize) {
        self.make_parts_hull(out, generation_threshold)
    }

    fn update_shape(&mut self) -> Result<(), ShapeError> {
        self.update_parts()
    }
}
