//! Various unsorted geometrical and logical operators.

pub use self::center::center;
pub use self::orientation_ops::{orientation_matrix, OrientationOps};

mod center;
mod orientation_ops;
