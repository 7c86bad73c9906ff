/// Errors reported by shape construction, update and query operations.
///
/// All of them are programming errors: none of them is transient.
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq, Eq)]
pub enum ShapeError {
    /// A compound shape was built or updated without any part.
    #[error("a compound shape needs at least one part")]
    EmptyCompound,
    /// The part at this index is itself a multishape. Multishapes cannot be nested.
    #[error("the part {0} is a multishape, multishapes cannot be nested")]
    NestedMultishape(usize),
    /// The part at this index has no support mapping.
    #[error("the part {0} has no support mapping")]
    NotConvex(usize),
    /// An index outside of the valid range was given.
    #[error("index {index} is out of range (count: {count})")]
    IndexOutOfRange {
        /// The invalid index.
        index: usize,
        /// The number of valid indices.
        count: usize,
    },
    /// A support point was requested before any part was selected.
    #[error("no part was selected with `set_current_shape`")]
    NoCurrentShape,
    /// The shape has no support mapping of its own (for example, a multishape that must be
    /// queried through a working clone).
    #[error("this shape has no support mapping of its own")]
    NoSupportMap,
    /// The shape was modified since its last `update_shape` so its cached properties are stale.
    #[error("the shape was modified since its last update")]
    Stale,
}
