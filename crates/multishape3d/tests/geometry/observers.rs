use crate::three_boxes;
use multishape3d::math::Vector;
use multishape3d::shape::{Ball, Shape, ShapeError, ShapeObserver};
use std::sync::{Arc, Mutex};

struct Recorder {
    id: usize,
    log: Arc<Mutex<Vec<usize>>>,
}

impl ShapeObserver for Recorder {
    fn shape_updated(&self) {
        self.log.lock().unwrap().push(self.id);
    }
}

#[test]
fn observers_are_notified_in_subscription_order() {
    let log = Arc::new(Mutex::new(Vec::new()));
    let mut compound = three_boxes();

    for id in 0..3 {
        compound.properties_mut().subscribe(Arc::new(Recorder {
            id,
            log: log.clone(),
        }));
    }

    let revision = compound.properties().revision();
    compound.set_part_position(0, Vector::x() * -20.0).unwrap();
    assert!(log.lock().unwrap().is_empty());

    compound.update_shape().unwrap();
    assert_eq!(*log.lock().unwrap(), vec![0, 1, 2]);
    assert_eq!(compound.properties().revision(), revision + 1);

    // A failed update cycle notifies nobody.
    compound.clear_shapes();
    assert_eq!(compound.update_shape(), Err(ShapeError::EmptyCompound));
    assert_eq!(log.lock().unwrap().len(), 3);
    assert_eq!(compound.properties().revision(), revision + 1);
}

#[test]
fn convex_shape_updates_are_observable_by_polling() {
    let log = Arc::new(Mutex::new(Vec::new()));
    let mut ball = Ball::new(1.0);
    let shape: &mut dyn Shape = &mut ball;
    shape.subscribe(Arc::new(Recorder {
        id: 7,
        log: log.clone(),
    }));
    let revision = shape.revision();

    let mass = shape.mass().unwrap();
    shape.as_shape_mut::<Ball>().unwrap().set_radius(2.0);
    assert!(shape.is_stale());
    assert_eq!(shape.support_mapping(&Vector::x()), Err(ShapeError::Stale));

    shape.update_shape().unwrap();
    assert_eq!(shape.revision(), revision + 1);
    assert_relative_eq!(shape.mass().unwrap(), mass * 8.0, epsilon = 1.0e-3);
    assert_eq!(*log.lock().unwrap(), vec![7]);
}
