use crate::three_boxes;
use multishape2d::bounding_volume::details::support_map_aabb;
use multishape2d::bounding_volume::{Aabb, BoundingVolume};
use multishape2d::math::{Matrix, Point, Vector};
use multishape2d::shape::{
    Capsule, CompoundShape, Cuboid, Multishape, Shape, ShapeError, SharedShape, TransformedShape,
};
use multishape2d::utils::orientation_matrix;
use na::{Point2, UnitComplex, Vector2};

#[test]
fn compound_aabb_is_the_union_of_part_aabbs() {
    let rot = orientation_matrix(&UnitComplex::new(0.6));
    let compound = CompoundShape::from_shapes([
        (SharedShape::ball(0.5), Matrix::identity(), Vector2::new(3.0, 1.0)),
        (SharedShape::cuboid(Vector2::new(1.0, 0.5)), rot, Vector2::new(-2.0, 0.0)),
        (SharedShape::capsule_y(2.0, 0.3), rot, Vector2::new(0.0, -4.0)),
    ])
    .unwrap();

    let mut union = Aabb::new_invalid();
    for part in compound.parts() {
        union.merge(part.aabb());
    }

    assert_relative_eq!(compound.aabb().mins, union.mins, epsilon = 1.0e-5);
    assert_relative_eq!(compound.aabb().maxs, union.maxs, epsilon = 1.0e-5);

    let shape: &dyn Shape = &compound;
    let aabb = shape.bounding_box(&Matrix::identity()).unwrap();
    assert_relative_eq!(aabb.mins, compound.aabb().mins, epsilon = 1.0e-5);
    assert_relative_eq!(aabb.maxs, compound.aabb().maxs, epsilon = 1.0e-5);
}

#[test]
fn support_mapped_boxes_match_the_analytic_ones() {
    let cuboid = Cuboid::new(Vector2::new(0.5, 2.0));
    let capsule = Capsule::new(1.5, 0.4);

    for i in 0..16 {
        let rot = orientation_matrix(&UnitComplex::new(i as f32 * 0.4));
        let (sampled, analytic) = (support_map_aabb(&rot, &cuboid), cuboid.aabb(&rot));
        assert_relative_eq!(sampled.mins, analytic.mins, epsilon = 1.0e-5);
        assert_relative_eq!(sampled.maxs, analytic.maxs, epsilon = 1.0e-5);
        let (sampled, analytic) = (support_map_aabb(&rot, &capsule), capsule.aabb(&rot));
        assert_relative_eq!(sampled.mins, analytic.mins, epsilon = 1.0e-5);
        assert_relative_eq!(sampled.maxs, analytic.maxs, epsilon = 1.0e-5);
    }
}

#[test]
fn stale_compounds_refuse_queries() {
    let mut compound = three_boxes();
    compound.clear_shapes();

    {
        let shape: &dyn Shape = &compound;
        assert_eq!(shape.bounding_box(&Matrix::identity()), Err(ShapeError::Stale));
        assert_eq!(shape.mass(), Err(ShapeError::Stale));
    }
    assert_eq!(compound.update_shape(), Err(ShapeError::EmptyCompound));

    compound
        .add_shape(TransformedShape::new(
            SharedShape::ball(1.0),
            Matrix::identity(),
            Vector::y() * 4.0,
        ))
        .unwrap();
    {
        let mut query = compound.working_clone();
        assert_eq!(query.prepare(&Aabb::new_invalid()), Err(ShapeError::Stale));
    }

    compound.update_shape().unwrap();
    let shape: &dyn Shape = &compound;
    let aabb = shape.bounding_box(&Matrix::identity()).unwrap();
    assert_relative_eq!(aabb.maxs, Point2::new(1.0, 1.0), epsilon = 1.0e-6);
}

fn sweep_region(compound: &CompoundShape, center_x: f32, iterations: usize) -> Option<usize> {
    let mut query = compound.working_clone();
    let region = Aabb::from_half_extents(Point::from(Vector::x() * center_x), Vector::repeat(0.5));

    for _ in 0..iterations {
        assert_eq!(query.prepare(&region), Ok(1));
        query.set_current_shape(0).unwrap();
        let right = query.support_point(&Vector::x()).unwrap();
        assert_relative_eq!(right.x, center_x + 1.0, epsilon = 1.0e-5);
    }

    query.current_index()
}

#[test]
fn concurrent_working_clones_are_independent() {
    let compound = three_boxes();

    std::thread::scope(|s| {
        let left = s.spawn(|| sweep_region(&compound, -10.0, 1000));
        let right = s.spawn(|| sweep_region(&compound, 10.0, 1000));

        assert_eq!(left.join().unwrap(), Some(0));
        assert_eq!(right.join().unwrap(), Some(2));
    });
}
