use na::Unit;

use crate::mass_properties::MassProperties;
use crate::math::{Point, Real, Vector};
use crate::shape::{ShapeProperties, SupportMap};

/// A Ball shape, centered at the origin of its local-space.
#[derive(Debug, Clone)]
pub struct Ball {
    radius: Real,
    pub(crate) props: ShapeProperties,
}

impl Ball {
    /// Creates a new ball with the given radius and a unit density.
    #[inline]
    pub fn new(radius: Real) -> Ball {
        Self::with_density(radius, 1.0)
    }

    /// Creates a new ball with the given radius and density.
    pub fn with_density(radius: Real, density: Real) -> Ball {
        let mut ball = Ball {
            radius,
            props: ShapeProperties::new(density),
        };
        let mprops = ball.mass_properties(density);
        let aabb = ball.local_aabb();
        ball.props.commit(mprops, aabb, Point::origin());
        ball
    }

    /// The radius of this ball.
    #[inline]
    pub fn radius(&self) -> Real {
        self.radius
    }

    /// Sets the radius of this ball.
    ///
    /// This marks the cached properties of this ball stale until the next `update_shape`.
    pub fn set_radius(&mut self, radius: Real) {
        self.radius = radius;
        self.props.mark_dirty();
    }

    /// Computes the mass properties of this ball for the given density.
    pub fn mass_properties(&self, density: Real) -> MassProperties {
        MassProperties::from_ball(density, self.radius)
    }

    /// Is the local point `point` inside of this ball?
    #[inline]
    pub fn contains_local_point(&self, point: &Point<Real>) -> bool {
        point.coords.norm_squared() <= self.radius * self.radius
    }
}

impl SupportMap for Ball {
    #[inline]
    fn local_support_point(&self, dir: &Vector<Real>) -> Point<Real> {
        let dir = Unit::try_new(*dir, 0.0).unwrap_or(Vector::y_axis());
        self.local_support_point_toward(&dir)
    }

    #[inline]
    fn local_support_point_toward(&self, dir: &Unit<Vector<Real>>) -> Point<Real> {
        Point::from(**dir * self.radius)
    }
}
