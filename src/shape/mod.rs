//! Convex shapes and multishapes.

pub use self::ball::Ball;
pub use self::capsule::Capsule;
pub use self::compound::CompoundShape;
pub use self::cuboid::Cuboid;
pub use self::multishape::{CurrentPart, Multishape, MultishapeQuery, QueryState};
#[doc(inline)]
pub use self::shape::{Shape, ShapeType, DEFAULT_HULL_GENERATIONS};
pub use self::shape_error::ShapeError;
pub use self::shape_properties::{ShapeObserver, ShapeProperties};
pub use self::shared_shape::SharedShape;
#[doc(inline)]
pub use self::support_map::SupportMap;
pub use self::transformed_shape::TransformedShape;

mod ball;
mod capsule;
mod compound;
mod cuboid;
mod multishape;
mod shape;
mod shape_error;
mod shape_properties;
mod shared_shape;
#[doc(hidden)]
pub mod support_map;
mod transformed_shape;
