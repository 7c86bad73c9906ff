//! Support mapping based Cuboid shape.

use crate::mass_properties::MassProperties;
use crate::math::{Point, Real, Vector, DIM};
use crate::shape::{ShapeProperties, SupportMap};

/// Shape of a box, centered at the origin of its local-space.
#[derive(Debug, Clone)]
pub struct Cuboid {
    half_extents: Vector<Real>,
    pub(crate) props: ShapeProperties,
}

impl Cuboid {
    /// Creates a new box from its half-extents and a unit density. Half-extents are the box
    /// half-width along each axis. Each half-extent must be positive.
    #[inline]
    pub fn new(half_extents: Vector<Real>) -> Cuboid {
        Self::with_density(half_extents, 1.0)
    }

    /// Creates a new box from its half-extents and density.
    pub fn with_density(half_extents: Vector<Real>, density: Real) -> Cuboid {
        let mut cuboid = Cuboid {
            half_extents,
            props: ShapeProperties::new(density),
        };
        let mprops = cuboid.mass_properties(density);
        let aabb = cuboid.local_aabb();
        cuboid.props.commit(mprops, aabb, Point::origin());
        cuboid
    }

    /// The half-extents of this box.
    #[inline]
    pub fn half_extents(&self) -> &Vector<Real> {
        &self.half_extents
    }

    /// Sets the half-extents of this box.
    ///
    /// This marks the cached properties of this box stale until the next `update_shape`.
    pub fn set_half_extents(&mut self, half_extents: Vector<Real>) {
        self.half_extents = half_extents;
        self.props.mark_dirty();
    }

    /// Computes the mass properties of this box for the given density.
    pub fn mass_properties(&self, density: Real) -> MassProperties {
        MassProperties::from_cuboid(density, self.half_extents)
    }

    /// Is the local point `point` inside of this box?
    pub fn contains_local_point(&self, point: &Point<Real>) -> bool {
        (0..DIM).all(|i| point[i].abs() <= self.half_extents[i])
    }
}

impl SupportMap for Cuboid {
    #[inline]
    fn local_support_point(&self, dir: &Vector<Real>) -> Point<Real> {
        self.half_extents
            .zip_map(dir, |he, d| if d < 0.0 { -he } else { he })
            .into()
    }
}
