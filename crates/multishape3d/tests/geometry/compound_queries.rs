use crate::three_boxes;
use multishape3d::bounding_volume::{Aabb, BoundingVolume};
use multishape3d::math::{Matrix, Point, Vector};
use multishape3d::shape::{
    Ball, CompoundShape, Multishape, QueryState, Shape, ShapeError, SharedShape, TransformedShape,
};
use multishape3d::utils::orientation_matrix;
use na::{Point3, UnitQuaternion, Vector3};

#[test]
fn tight_query_selects_the_middle_box() {
    let compound = three_boxes();
    let mut query = compound.working_clone();
    assert_eq!(query.state(), QueryState::Uninitialized);

    let around_origin = Aabb::from_half_extents(Point::origin(), Vector::repeat(0.5));
    assert_eq!(query.prepare(&around_origin), Ok(1));
    assert_eq!(query.state(), QueryState::Prepared { candidates: 1 });
    assert_eq!(query.candidates(), &[1]);

    query.set_current_shape(0).unwrap();
    assert_eq!(query.state(), QueryState::ShapeSelected { index: 1 });
    assert_eq!(query.geometric_center(), Point::origin());

    let support = query.support_point(&Vector::x()).unwrap();
    assert!(support.x >= -1.0 && support.x <= 1.0);
    assert_relative_eq!(support.x, 1.0);

    query.reset();
    assert_eq!(query.state(), QueryState::Uninitialized);
    assert_eq!(query.support_point(&Vector::x()), Err(ShapeError::NoCurrentShape));
}

#[test]
fn touching_boxes_are_candidates() {
    let compound = three_boxes();
    let mut query = compound.working_clone();
    // The middle box spans [-1, 1] along x.
    let touching = Aabb::new(Point3::new(1.0, -0.1, -0.1), Point3::new(2.0, 0.1, 0.1));
    assert_eq!(query.prepare(&touching), Ok(1));
    let far = Aabb::new(Point3::new(1.5, -0.1, -0.1), Point3::new(2.0, 0.1, 0.1));
    assert_eq!(query.prepare(&far), Ok(0));
}

#[test]
fn ray_query_selects_the_crossed_parts() {
    let compound = three_boxes();
    let mut query = compound.working_clone();

    let crossing = query.prepare_ray(&Point3::new(-20.0, 0.0, 0.0), &Point3::new(5.0, 0.0, 0.0));
    assert_eq!(crossing, Ok(2));
    assert_eq!(query.candidates(), &[0, 1]);

    query.set_current_shape(1).unwrap();
    assert_eq!(query.current_index(), Some(1));

    let above = query.prepare_ray(&Point3::new(-20.0, 5.0, 0.0), &Point3::new(20.0, 5.0, 0.0));
    assert_eq!(above, Ok(0));
    assert_eq!(query.current_index(), None);
}

#[test]
fn selection_errors_are_reported() {
    let compound = three_boxes();
    let mut query = compound.working_clone();

    assert_eq!(
        query.set_current_shape(0),
        Err(ShapeError::IndexOutOfRange { index: 0, count: 0 })
    );
    assert_eq!(query.support_point(&Vector::x()), Err(ShapeError::NoCurrentShape));
    assert!(matches!(query.current_part(), Err(ShapeError::NoCurrentShape)));

    let _ = query.prepare(compound.aabb()).unwrap();
    assert_eq!(
        query.set_current_shape(3),
        Err(ShapeError::IndexOutOfRange { index: 3, count: 3 })
    );
}

#[test]
fn compound_aabb_is_the_union_of_part_aabbs() {
    let rot = orientation_matrix(&UnitQuaternion::from_euler_angles(0.5, 0.2, -0.4));
    let compound = CompoundShape::from_shapes([
        (SharedShape::ball(0.5), Matrix::identity(), Vector3::new(3.0, 1.0, 0.0)),
        (SharedShape::cuboid(Vector3::new(1.0, 0.5, 0.25)), rot, Vector3::new(-2.0, 0.0, 1.0)),
        (SharedShape::capsule_y(2.0, 0.3), rot, Vector3::new(0.0, -4.0, 2.0)),
    ])
    .unwrap();

    let mut union = Aabb::new_invalid();
    for part in compound.parts() {
        let expected = part
            .shape()
            .compute_aabb(part.orientation())
            .translated(part.position());
        assert_eq!(*part.aabb(), expected);
        union.merge(&expected);
    }

    assert_relative_eq!(compound.aabb().mins, union.mins, epsilon = 1.0e-5);
    assert_relative_eq!(compound.aabb().maxs, union.maxs, epsilon = 1.0e-5);
    assert_eq!(compound.properties().local_aabb(), Ok(*compound.aabb()));
}

#[test]
fn rotated_compound_aabb_encloses_every_part() {
    let compound = three_boxes();
    let rot = orientation_matrix(&UnitQuaternion::from_euler_angles(0.0, 0.0, 0.3));
    let shape: &dyn Shape = &compound;
    let aabb = shape.bounding_box(&rot).unwrap();

    for part in compound.parts() {
        let rotated_part = part
            .shape()
            .compute_aabb(&(rot * part.orientation()))
            .translated(&(rot * part.position()));
        assert!(aabb.loosened(1.0e-4).contains(&rotated_part));
    }
}

#[test]
fn nested_multishapes_are_rejected() {
    let inner = SharedShape::new(three_boxes());
    let parts = vec![
        TransformedShape::new(SharedShape::ball(1.0), Matrix::identity(), Vector::zeros()),
        TransformedShape::new(inner.clone(), Matrix::identity(), Vector::x()),
    ];
    assert_eq!(
        CompoundShape::new(parts).map(|_| ()),
        Err(ShapeError::NestedMultishape(1))
    );

    let mut compound = three_boxes();
    let nested = TransformedShape::new(inner, Matrix::identity(), Vector::zeros());
    assert_eq!(compound.add_shape(nested), Err(ShapeError::NestedMultishape(3)));
    assert_eq!(compound.num_parts(), 3);
    assert!(!compound.properties().is_stale());

    assert_eq!(
        CompoundShape::new(Vec::new()).map(|_| ()),
        Err(ShapeError::EmptyCompound)
    );
}

#[test]
fn stale_compounds_refuse_queries() {
    let mut compound = three_boxes();
    compound
        .add_shape(TransformedShape::new(
            SharedShape::ball(1.0),
            Matrix::identity(),
            Vector::y() * 10.0,
        ))
        .unwrap();

    {
        let shape: &dyn Shape = &compound;
        assert_eq!(shape.mass(), Err(ShapeError::Stale));
        assert_eq!(shape.local_aabb(), Err(ShapeError::Stale));
        assert_eq!(shape.support_mapping(&Vector::x()), Err(ShapeError::NoSupportMap));
    }

    let mut query = compound.working_clone();
    assert_eq!(query.prepare(&Aabb::new_invalid()), Err(ShapeError::Stale));

    compound.update_shape().unwrap();
    let shape: &dyn Shape = &compound;
    assert!(shape.mass().is_ok());
    assert_eq!(shape.as_compound().map(|c| c.num_parts()), Some(4));
}

#[test]
fn stale_compounds_refuse_bounding_box_queries() {
    let mut compound = CompoundShape::from_shapes([
        (SharedShape::ball(1.0), Matrix::identity(), Vector::x() * -5.0),
        (SharedShape::ball(1.0), Matrix::identity(), Vector::x() * 5.0),
    ])
    .unwrap();
    compound.clear_shapes();

    {
        let shape: &dyn Shape = &compound;
        assert!(shape.is_stale());
        assert_eq!(shape.bounding_box(&Matrix::identity()), Err(ShapeError::Stale));
    }

    compound
        .add_shape(TransformedShape::new(
            SharedShape::ball(2.0),
            Matrix::identity(),
            Vector::y() * 3.0,
        ))
        .unwrap();
    {
        let shape: &dyn Shape = &compound;
        assert_eq!(shape.bounding_box(&Matrix::identity()), Err(ShapeError::Stale));
    }

    compound.update_shape().unwrap();
    let shape: &dyn Shape = &compound;
    let aabb = shape.bounding_box(&Matrix::identity()).unwrap();
    assert_relative_eq!(aabb.mins, Point3::new(-2.0, -2.0, -2.0), epsilon = 1.0e-6);
    assert_relative_eq!(aabb.maxs, Point3::new(2.0, 2.0, 2.0), epsilon = 1.0e-6);
}

#[test]
fn stale_convex_shapes_refuse_bounding_box_queries() {
    let mut ball = Ball::new(1.0);
    ball.set_radius(3.0);

    {
        let shape: &dyn Shape = &ball;
        assert_eq!(shape.bounding_box(&Matrix::identity()), Err(ShapeError::Stale));
        assert_eq!(shape.support_mapping(&Vector::x()), Err(ShapeError::Stale));
    }

    ball.update_shape().unwrap();
    let shape: &dyn Shape = &ball;
    let aabb = shape.bounding_box(&Matrix::identity()).unwrap();
    assert_relative_eq!(aabb.maxs, Point3::new(3.0, 3.0, 3.0), epsilon = 1.0e-6);
    assert_eq!(shape.support_mapping(&Vector::x()), Ok(Point3::new(3.0, 0.0, 0.0)));
}

#[test]
fn containment_tests_every_part() {
    let compound = three_boxes();
    assert!(compound.contains_local_point(&Point3::new(10.5, 0.0, 0.0)));
    assert!(compound.contains_local_point(&Point3::new(-9.5, 0.9, -0.9)));
    assert!(!compound.contains_local_point(&Point3::new(5.0, 0.0, 0.0)));

    let shift = Vector3::new(0.0, 0.0, 100.0);
    assert!(compound.contains_point(&shift, &Matrix::identity(), &Point3::new(0.0, 0.0, 100.5)));
}
