use multishape3d::math::{Matrix, Vector};
use multishape3d::shape::{CompoundShape, Cuboid, Shape, SharedShape};
use multishape3d::utils::orientation_matrix;
use na::{Matrix3, UnitQuaternion, Vector3};
use std::f32::consts::FRAC_PI_2;

fn unit_cube() -> SharedShape {
    SharedShape::cuboid(Vector::repeat(0.5))
}

#[test]
fn two_unit_cubes_weigh_two() {
    let compound = CompoundShape::from_shapes([
        (unit_cube(), Matrix::identity(), Vector::zeros()),
        (unit_cube(), Matrix::identity(), Vector::x() * 3.0),
    ])
    .unwrap();

    let shape: &dyn Shape = &compound;
    assert_relative_eq!(shape.mass().unwrap(), 2.0, epsilon = 1.0e-5);
}

#[test]
fn part_density_scales_the_mass() {
    let heavy = SharedShape::new(Cuboid::with_density(Vector::repeat(0.5), 3.0));
    let compound = CompoundShape::from_shapes([
        (unit_cube(), Matrix::identity(), Vector::zeros()),
        (heavy, Matrix::identity(), Vector::y() * 2.0),
    ])
    .unwrap();

    assert_relative_eq!(compound.properties().mass().unwrap(), 4.0, epsilon = 1.0e-5);
}

#[test]
fn symmetric_pair_follows_the_parallel_axis_theorem() {
    let r = Vector3::new(1.0, 2.0, 3.0);
    let compound = CompoundShape::from_shapes([
        (unit_cube(), Matrix::identity(), r),
        (unit_cube(), Matrix::identity(), -r),
    ])
    .unwrap();

    // The pair is already centered, so the parts stay where they are.
    assert_relative_eq!(*compound.shift(), Vector::zeros(), epsilon = 1.0e-6);

    let cube_inertia = Matrix3::from_diagonal_element(1.0 / 6.0);
    let offset_term = Matrix3::from_diagonal_element(r.norm_squared()) - r * r.transpose();
    let expected = (cube_inertia + offset_term) * 2.0;

    let inertia = compound.properties().inertia().unwrap();
    assert_relative_eq!(inertia, expected, epsilon = 1.0e-3);
    // Off-diagonal terms lose m * (product of the two offset components) for each cube.
    assert_relative_eq!(inertia.m12, -4.0, epsilon = 1.0e-3);
    assert_relative_eq!(inertia.m11, 2.0 / 6.0 + 26.0, epsilon = 1.0e-3);
}

#[test]
fn rotated_parts_contribute_a_rotated_tensor() {
    let he = Vector3::new(0.5, 1.0, 1.5);
    let rot = orientation_matrix(&UnitQuaternion::from_axis_angle(&Vector3::z_axis(), FRAC_PI_2));
    let rotated = CompoundShape::from_shapes([(SharedShape::cuboid(he), rot, Vector::zeros())])
        .unwrap();
    let swapped = Cuboid::new(Vector3::new(he.y, he.x, he.z));

    let shape: &dyn Shape = &swapped;
    assert_relative_eq!(
        rotated.properties().inertia().unwrap(),
        shape.inertia().unwrap(),
        epsilon = 1.0e-4
    );
    assert_relative_eq!(rotated.properties().mass().unwrap(), 6.0, epsilon = 1.0e-4);
}

#[test]
fn recentering_is_idempotent() {
    let mut compound = CompoundShape::from_shapes([
        (SharedShape::ball(0.5), Matrix::identity(), Vector3::new(1.0, 0.0, 0.0)),
        (unit_cube(), Matrix::identity(), Vector3::new(5.0, 2.0, 0.0)),
    ])
    .unwrap();

    assert_relative_eq!(*compound.shift(), Vector3::new(3.0, 1.0, 0.0), epsilon = 1.0e-6);
    let positions: Vec<_> = compound.parts().iter().map(|p| *p.position()).collect();
    let mass = compound.properties().mass_properties().unwrap();

    compound.update_shape().unwrap();

    assert_relative_eq!(*compound.shift(), Vector::zeros(), epsilon = 1.0e-6);
    for (part, position) in compound.parts().iter().zip(positions.iter()) {
        assert_relative_eq!(*part.position(), *position, epsilon = 1.0e-6);
    }
    assert_relative_eq!(compound.properties().mass_properties().unwrap(), mass, epsilon = 1.0e-5);
    assert_eq!(compound.properties().geometric_center(), Ok(na::Point3::origin()));
}
