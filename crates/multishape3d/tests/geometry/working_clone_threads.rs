use crate::three_boxes;
use multishape3d::bounding_volume::Aabb;
use multishape3d::math::{Point, Vector};
use multishape3d::shape::{CompoundShape, Multishape};

fn sweep_region(compound: &CompoundShape, center_x: f32, iterations: usize) -> Option<usize> {
    let mut query = compound.working_clone();
    let region = Aabb::from_half_extents(Point::from(Vector::x() * center_x), Vector::repeat(0.5));

    for _ in 0..iterations {
        assert_eq!(query.prepare(&region), Ok(1));
        query.set_current_shape(0).unwrap();
        assert_relative_eq!(query.geometric_center().x, center_x, epsilon = 1.0e-5);

        let right = query.support_point(&Vector::x()).unwrap();
        let left = query.support_point(&-Vector::x()).unwrap();
        assert_relative_eq!(right.x, center_x + 1.0, epsilon = 1.0e-5);
        assert_relative_eq!(left.x, center_x - 1.0, epsilon = 1.0e-5);
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

    // The shared geometry is untouched by the queries.
    let mut query = compound.working_clone();
    assert_eq!(query.prepare(compound.aabb()), Ok(3));
}
