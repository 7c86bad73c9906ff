//! Tessellation of shape boundaries.

pub use self::to_hull::support_map_to_hull;

mod to_hull;
