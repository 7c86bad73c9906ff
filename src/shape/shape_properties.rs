use crate::bounding_volume::Aabb;
use crate::mass_properties::MassProperties;
use crate::math::{AngularInertia, Point, Real};
use crate::shape::ShapeError;
use alloc::sync::Arc;
use alloc::vec::Vec;
use core::fmt;
use num::Zero;

/// An observer notified each time a shape completes an update cycle.
///
/// Observers are called in subscription order, after all the cached properties of the
/// shape have been committed.
pub trait ShapeObserver: Send + Sync {
    /// Called after the observed shape committed new cached properties.
    fn shape_updated(&self);
}

/// The cached properties owned by every shape.
///
/// The mass properties, local AABB and geometric center are only ever written together by
/// [`ShapeProperties::commit`]. Any mutation of the shape in between marks them stale, and the
/// checked getters then report [`ShapeError::Stale`].
pub struct ShapeProperties {
    density: Real,
    mass_properties: MassProperties,
    local_aabb: Aabb,
    geometric_center: Point<Real>,
    dirty: bool,
    revision: u64,
    observers: Vec<Arc<dyn ShapeObserver>>,
}

impl Default for ShapeProperties {
    fn default() -> Self {
        Self::new(1.0)
    }
}

impl Clone for ShapeProperties {
    /// Clones the cached values. Observers stay subscribed to the original shape only.
    fn clone(&self) -> Self {
        Self {
            density: self.density,
            mass_properties: self.mass_properties,
            local_aabb: self.local_aabb,
            geometric_center: self.geometric_center,
            dirty: self.dirty,
            revision: self.revision,
            observers: Vec::new(),
        }
    }
}

impl fmt::Debug for ShapeProperties {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ShapeProperties")
            .field("density", &self.density)
            .field("mass_properties", &self.mass_properties)
            .field("local_aabb", &self.local_aabb)
            .field("geometric_center", &self.geometric_center)
            .field("dirty", &self.dirty)
            .field("revision", &self.revision)
            .field("observers", &self.observers.len())
            .finish()
    }
}

impl ShapeProperties {
    /// Creates stale properties for a shape with the given density.
    pub fn new(density: Real) -> Self {
        Self {
            density,
            mass_properties: MassProperties::zero(),
            local_aabb: Aabb::new_invalid(),
            geometric_center: Point::origin(),
            dirty: true,
            revision: 0,
            observers: Vec::new(),
        }
    }

    /// The density used to compute the mass of the shape.
    #[inline]
    pub fn density(&self) -> Real {
        self.density
    }

    /// Sets the density of the shape and marks its cached properties as stale.
    pub fn set_density(&mut self, density: Real) {
        self.density = density;
        self.mark_dirty();
    }

    /// Has the shape been modified since its last committed update?
    #[inline]
    pub fn is_stale(&self) -> bool {
        self.dirty
    }

    /// Marks the cached properties as stale.
    #[inline]
    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// The number of completed update cycles.
    ///
    /// Polling this counter is an alternative to subscribing an observer.
    #[inline]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Subscribes an observer to the update cycles of this shape.
    pub fn subscribe(&mut self, observer: Arc<dyn ShapeObserver>) {
        self.observers.push(observer);
    }

    /// Unsubscribes an observer. Returns `false` if it wasn't subscribed.
    pub fn unsubscribe(&mut self, observer: &Arc<dyn ShapeObserver>) -> bool {
        let len = self.observers.len();
        self.observers.retain(|o| !Arc::ptr_eq(o, observer));
        self.observers.len() != len
    }

    /// The number of observers subscribed to this shape.
    #[inline]
    pub fn num_observers(&self) -> usize {
        self.observers.len()
    }

    /// Returns [`ShapeError::Stale`] if the shape was modified since its last update.
    #[inline]
    pub fn ensure_up_to_date(&self) -> Result<(), ShapeError> {
        if self.dirty {
            Err(ShapeError::Stale)
        } else {
            Ok(())
        }
    }

    #[inline]
    fn fresh(&self) -> Result<&Self, ShapeError> {
        self.ensure_up_to_date().map(|_| self)
    }

    /// The mass of the shape.
    pub fn mass(&self) -> Result<Real, ShapeError> {
        Ok(self.fresh()?.mass_properties.mass)
    }

    /// The angular inertia of the shape about its local origin.
    pub fn inertia(&self) -> Result<AngularInertia<Real>, ShapeError> {
        Ok(self.fresh()?.mass_properties.inertia)
    }

    /// The mass properties of the shape.
    pub fn mass_properties(&self) -> Result<MassProperties, ShapeError> {
        Ok(self.fresh()?.mass_properties)
    }

    /// The AABB of the shape in its local-space.
    pub fn local_aabb(&self) -> Result<Aabb, ShapeError> {
        Ok(self.fresh()?.local_aabb)
    }

    /// The geometric center of the shape in its local-space.
    pub fn geometric_center(&self) -> Result<Point<Real>, ShapeError> {
        Ok(self.fresh()?.geometric_center)
    }

    /// The last committed local AABB, whether it is stale or not.
    #[inline]
    pub(crate) fn last_local_aabb(&self) -> &Aabb {
        &self.local_aabb
    }

    /// Commits a complete set of cached properties.
    ///
    /// This clears the stale flag, bumps the revision, then notifies every observer.
    pub fn commit(
        &mut self,
        mass_properties: MassProperties,
        local_aabb: Aabb,
        geometric_center: Point<Real>,
    ) {
        self.mass_properties = mass_properties;
        self.local_aabb = local_aabb;
        self.geometric_center = geometric_center;
        self.dirty = false;
        self.revision += 1;

        log::trace!(
            "shape properties committed (revision {}, {} observers)",
            self.revision,
            self.observers.len()
        );

        for observer in &self.observers {
            observer.shape_updated();
        }
    }
}
