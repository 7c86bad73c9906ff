use crate::math::{AngularInertia, Matrix, Point, PrincipalAngularInertia, Real, Vector};
use approx::{AbsDiffEq, RelativeEq};
use core::iter::Sum;
use core::ops::{Add, AddAssign};
use num::Zero;

#[derive(Copy, Clone, Debug, PartialEq)]
/// The local mass properties of a shape.
///
/// The angular inertia is expressed about the local origin of the shape, in the
/// axes of its local frame. This is what makes the properties of several parts
/// summable once they are expressed in the same frame (see [`Self::transformed`]).
pub struct MassProperties {
    /// The mass of the shape.
    pub mass: Real,
    /// The angular inertia tensor of the shape about its local origin.
    ///
    /// This is a scalar in 2D.
    pub inertia: AngularInertia<Real>,
    /// The center of mass of the shape, expressed in its local-space.
    pub center: Point<Real>,
}

impl MassProperties {
    /// Initializes the mass properties with the given center of mass, mass, and angular inertia
    /// about the local origin.
    pub fn new(center: Point<Real>, mass: Real, inertia: AngularInertia<Real>) -> Self {
        Self {
            mass,
            inertia,
            center,
        }
    }

    /// Initializes the mass properties of a shape centered at the origin from its principal
    /// angular inertia, i.e., its angular inertia along each of the local coordinate axes.
    pub fn with_principal_inertia(
        mass: Real,
        principal_inertia: PrincipalAngularInertia<Real>,
    ) -> Self {
        #[cfg(feature = "dim2")]
        let inertia = principal_inertia;
        #[cfg(feature = "dim3")]
        let inertia = AngularInertia::from_diagonal(&principal_inertia);

        Self::new(Point::origin(), mass, inertia)
    }

    /// The term added to an angular inertia when its reference point moves by `shift`.
    ///
    /// In 3D, diagonal terms gain `m` times the sum of squares of the two other offset
    /// components, and off-diagonal terms lose `m` times the product of their two offset
    /// components. In 2D the scalar inertia gains `m * |shift|²`.
    #[cfg(feature = "dim2")]
    pub fn parallel_axis_shift(mass: Real, shift: &Vector<Real>) -> AngularInertia<Real> {
        shift.norm_squared() * mass
    }

    /// The term added to an angular inertia when its reference point moves by `shift`.
    ///
    /// In 3D, diagonal terms gain `m` times the sum of squares of the two other offset
    /// components, and off-diagonal terms lose `m` times the product of their two offset
    /// components. In 2D the scalar inertia gains `m * |shift|²`.
    #[cfg(feature = "dim3")]
    pub fn parallel_axis_shift(mass: Real, shift: &Vector<Real>) -> AngularInertia<Real> {
        let diag = AngularInertia::from_diagonal_element(shift.norm_squared());
        (diag - shift * shift.transpose()) * mass
    }

    /// The angular inertia of this shape about its center of mass.
    pub fn inertia_about_center(&self) -> AngularInertia<Real> {
        self.inertia - Self::parallel_axis_shift(self.mass, &self.center.coords)
    }

    /// Expresses these mass properties in a parent frame where the shape is rotated by
    /// `orientation` and then translated by `position`.
    ///
    /// The tensor is rotated into the parent axes (`R I Rᵀ`) and the parallel-axis theorem
    /// moves its reference point from the shape's origin to the parent's origin.
    pub fn transformed(&self, position: &Vector<Real>, orientation: &Matrix<Real>) -> Self {
        let center = Point::from(orientation * self.center.coords + position);

        #[cfg(feature = "dim2")]
        let rotated = self.inertia_about_center();
        #[cfg(feature = "dim3")]
        let rotated = orientation * self.inertia_about_center() * orientation.transpose();

        Self {
            mass: self.mass,
            inertia: rotated + Self::parallel_axis_shift(self.mass, &center.coords),
            center,
        }
    }
}

impl Zero for MassProperties {
    fn zero() -> Self {
        Self {
            mass: 0.0,
            inertia: na::zero(),
            center: Point::origin(),
        }
    }

    fn is_zero(&self) -> bool {
        *self == Self::zero()
    }
}

impl Add<MassProperties> for MassProperties {
    type Output = Self;

    /// Sums two mass properties expressed about the same origin.
    fn add(self, other: MassProperties) -> Self {
        let mass = self.mass + other.mass;
        let center = if mass > 0.0 {
            Point::from((self.center.coords * self.mass + other.center.coords * other.mass) / mass)
        } else {
            na::center(&self.center, &other.center)
        };

        Self {
            mass,
            inertia: self.inertia + other.inertia,
            center,
        }
    }
}

impl AddAssign<MassProperties> for MassProperties {
    fn add_assign(&mut self, rhs: MassProperties) {
        *self = *self + rhs
    }
}

impl Sum<MassProperties> for MassProperties {
    fn sum<I>(iter: I) -> Self
    where
        I: Iterator<Item = Self>,
    {
        let mut total_mass = 0.0;
        let mut total_com = Vector::zeros();
        let mut total_inertia: AngularInertia<Real> = na::zero();

        for props in iter {
            total_mass += props.mass;
            total_com += props.center.coords * props.mass;
            total_inertia += props.inertia;
        }

        if total_mass > 0.0 {
            total_com /= total_mass;
        }

        Self::new(Point::from(total_com), total_mass, total_inertia)
    }
}

impl AbsDiffEq for MassProperties {
    type Epsilon = Real;
    fn default_epsilon() -> Self::Epsilon {
        Real::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.mass.abs_diff_eq(&other.mass, epsilon)
            && self.inertia.abs_diff_eq(&other.inertia, epsilon)
            && self.center.abs_diff_eq(&other.center, epsilon)
    }
}

impl RelativeEq for MassProperties {
    fn default_max_relative() -> Self::Epsilon {
        Real::default_max_relative()
    }

    fn relative_eq(
        &self,
        other: &Self,
        epsilon: Self::Epsilon,
        max_relative: Self::Epsilon,
    ) -> bool {
        self.mass.relative_eq(&other.mass, epsilon, max_relative)
            && self
                .inertia
                .relative_eq(&other.inertia, epsilon, max_relative)
            && self
                .center
                .relative_eq(&other.center, epsilon, max_relative)
    }
}
