use crate::mass_properties::MassProperties;
use crate::math::{Point, Real, Vector};
use crate::shape::{ShapeProperties, SupportMap};
use na::Unit;

/// A capsule shape, also known as a pill.
///
/// The capsule is centered at the origin of its local-space and its axis is the `y` axis:
/// it is the set of points at a distance smaller than `radius` from the segment joining
/// `(0, -half_height)` and `(0, half_height)`.
#[derive(Debug, Clone)]
pub struct Capsule {
    half_height: Real,
    radius: Real,
    pub(crate) props: ShapeProperties,
}

impl Capsule {
    /// Creates a new capsule aligned with the `y` axis, with a unit density.
    pub fn new(half_height: Real, radius: Real) -> Self {
        Self::with_density(half_height, radius, 1.0)
    }

    /// Creates a new capsule aligned with the `y` axis with the given density.
    pub fn with_density(half_height: Real, radius: Real, density: Real) -> Self {
        let mut capsule = Capsule {
            half_height,
            radius,
            props: ShapeProperties::new(density),
        };
        let mprops = capsule.mass_properties(density);
        let aabb = capsule.local_aabb();
        capsule.props.commit(mprops, aabb, Point::origin());
        capsule
    }

    /// The half-length of the segment at the core of this capsule.
    #[inline]
    pub fn half_height(&self) -> Real {
        self.half_height
    }

    /// The radius of this capsule.
    #[inline]
    pub fn radius(&self) -> Real {
        self.radius
    }

    /// Sets the half-height of this capsule, marking its cached properties stale.
    pub fn set_half_height(&mut self, half_height: Real) {
        self.half_height = half_height;
        self.props.mark_dirty();
    }

    /// Sets the radius of this capsule, marking its cached properties stale.
    pub fn set_radius(&mut self, radius: Real) {
        self.radius = radius;
        self.props.mark_dirty();
    }

    /// The end-points of the segment at the core of this capsule.
    pub fn segment(&self) -> (Point<Real>, Point<Real>) {
        let b = Point::from(Vector::y() * self.half_height);
        (-b, b)
    }

    /// Computes the mass properties of this capsule for the given density.
    pub fn mass_properties(&self, density: Real) -> MassProperties {
        MassProperties::from_capsule(density, self.half_height, self.radius)
    }

    /// Is the local point `point` inside of this capsule?
    pub fn contains_local_point(&self, point: &Point<Real>) -> bool {
        let on_axis = Vector::y() * point.y.clamp(-self.half_height, self.half_height);
        (point.coords - on_axis).norm_squared() <= self.radius * self.radius
    }
}

impl SupportMap for Capsule {
    fn local_support_point(&self, dir: &Vector<Real>) -> Point<Real> {
        let dir = Unit::try_new(*dir, 0.0).unwrap_or(Vector::y_axis());
        self.local_support_point_toward(&dir)
    }

    fn local_support_point_toward(&self, dir: &Unit<Vector<Real>>) -> Point<Real> {
        let (a, b) = self.segment();

        if dir.dot(&a.coords) > dir.dot(&b.coords) {
            a + **dir * self.radius
        } else {
            b + **dir * self.radius
        }
    }
}
