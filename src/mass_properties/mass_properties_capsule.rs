use crate::mass_properties::MassProperties;
use crate::math::{PrincipalAngularInertia, Real};
#[cfg(feature = "dim2")]
use crate::math::Vector;
#[cfg(feature = "dim3")]
use {crate::math::Vector, na::RealField};

impl MassProperties {
    pub(crate) fn cylinder_y_volume_unit_inertia(
        half_height: Real,
        radius: Real,
    ) -> (Real, PrincipalAngularInertia<Real>) {
        #[cfg(feature = "dim2")]
        {
            Self::cuboid_volume_unit_inertia(Vector::new(radius, half_height))
        }

        #[cfg(feature = "dim3")]
        {
            let volume = half_height * radius * radius * Real::pi() * 2.0;
            let sq_radius = radius * radius;
            let sq_height = half_height * half_height * 4.0;
            let off_principal = (sq_radius * 3.0 + sq_height) / 12.0;

            let inertia = Vector::new(off_principal, sq_radius / 2.0, off_principal);
            (volume, inertia)
        }
    }

    /// Computes the mass properties of a capsule centered at the origin and aligned with the
    /// `y` axis.
    ///
    /// The capsule is split into a cylinder (a rectangle in 2D) of height `2 * half_height`
    /// and the two hemispherical caps, which are accounted for as one ball moved away from
    /// the center along the axis.
    pub fn from_capsule(density: Real, half_height: Real, radius: Real) -> Self {
        let (cyl_vol, cyl_unit_i) = Self::cylinder_y_volume_unit_inertia(half_height, radius);
        let (ball_vol, ball_unit_i) = Self::ball_volume_unit_angular_inertia(radius);
        let cap_vol = cyl_vol + ball_vol;
        let cap_mass = cap_vol * density;
        #[allow(unused_mut)] // `mut` is only needed in 3D.
        let mut cap_i = (cyl_unit_i * cyl_vol + ball_unit_i * ball_vol) * density;
        let h = half_height * 2.0;
        let extra = (h * h * 0.25 + h * radius * 3.0 / 8.0) * ball_vol * density;

        #[cfg(feature = "dim2")]
        {
            Self::with_principal_inertia(cap_mass, cap_i + extra)
        }

        #[cfg(feature = "dim3")]
        {
            cap_i.x += extra;
            cap_i.z += extra;
            Self::with_principal_inertia(cap_mass, cap_i)
        }
    }
}
