use crate::mass_properties::MassProperties;
#[cfg(feature = "dim3")]
use crate::math::Vector;
use crate::math::{PrincipalAngularInertia, Real};
use na::RealField;

impl MassProperties {
    pub(crate) fn ball_volume_unit_angular_inertia(
        radius: Real,
    ) -> (Real, PrincipalAngularInertia<Real>) {
        #[cfg(feature = "dim2")]
        {
            let volume = Real::pi() * radius * radius;
            let i = radius * radius / 2.0;
            (volume, i)
        }
        #[cfg(feature = "dim3")]
        {
            let volume = Real::pi() * radius * radius * radius * 4.0 / 3.0;
            let i = radius * radius * 2.0 / 5.0;

            (volume, Vector::repeat(i))
        }
    }

    /// Computes the mass properties of a ball (sphere in 3D, disk in 2D) centered at the origin.
    ///
    /// In 3D the angular inertia is `2/5 m r²` about every axis, in 2D it is `1/2 m r²`.
    ///
    /// # Example
    ///
    /// ```
    /// # #[cfg(all(feature = "dim3", feature = "f32"))] {
    /// use multishape3d::mass_properties::MassProperties;
    /// use nalgebra::Point3;
    ///
    /// let props = MassProperties::from_ball(1000.0, 0.5);
    /// assert!((props.mass - 523.6).abs() < 1.0);
    /// assert_eq!(props.center, Point3::origin());
    /// # }
    /// ```
    pub fn from_ball(density: Real, radius: Real) -> Self {
        let (vol, unit_i) = Self::ball_volume_unit_angular_inertia(radius);
        let mass = vol * density;
        Self::with_principal_inertia(mass, unit_i * mass)
    }
}
