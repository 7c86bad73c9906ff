use crate::bounding_volume::{Aabb, BoundingVolume};
use crate::math::{Point, Real, Vector};
use crate::shape::{Shape, ShapeError, SupportMap, TransformedShape};
use smallvec::SmallVec;

/// A shape made of several convex parts, queried one part at a time.
///
/// A multishape has no support mapping of its own. Collision algorithms first obtain a
/// [`MultishapeQuery`] from [`Multishape::working_clone`], select the relevant parts with
/// [`MultishapeQuery::prepare`], then run against each selected part exactly as they would
/// against a single convex shape.
pub trait Multishape: Shape {
    /// The number of parts of this multishape.
    fn num_parts(&self) -> usize;

    /// The `i`-th part of this multishape, if it exists.
    fn part(&self, i: usize) -> Option<&TransformedShape>;

    /// A new query cursor over this multishape.
    ///
    /// The cursor shares the geometry of `self` and owns its own selection state, so several
    /// cursors may be used at the same time, e.g., by different threads.
    fn working_clone(&self) -> MultishapeQuery<'_>;
}

/// The state of a [`MultishapeQuery`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum QueryState {
    /// No `prepare` was issued since the creation or the last reset of the query.
    Uninitialized,
    /// The query has a candidate list but no current part.
    Prepared {
        /// The number of candidate parts.
        candidates: usize,
    },
    /// A part is selected for support queries.
    ShapeSelected {
        /// The index of the selected part in the multishape.
        index: usize,
    },
}

/// A query cursor over the parts of a multishape: the working clone of a multishape.
///
/// The cursor follows a three-step protocol:
/// 1. [`Self::prepare`] collects the parts whose AABB intersects a query box.
/// 2. [`Self::set_current_shape`] selects one of these candidates.
/// 3. [`Self::support_point`] and [`Self::current_part`] query the selected part.
///
/// Each new `prepare` replaces the previous candidate list and clears the selection.
#[derive(Clone)]
pub struct MultishapeQuery<'a> {
    multishape: &'a dyn Multishape,
    candidates: SmallVec<[usize; 8]>,
    prepared: bool,
    current: Option<usize>,
    geometric_center: Point<Real>,
}

impl<'a> MultishapeQuery<'a> {
    /// Creates a new cursor over `multishape`.
    pub fn new(multishape: &'a dyn Multishape) -> Self {
        Self {
            multishape,
            candidates: SmallVec::new(),
            prepared: false,
            current: None,
            geometric_center: Point::origin(),
        }
    }

    /// The multishape queried by this cursor.
    #[inline]
    pub fn multishape(&self) -> &'a dyn Multishape {
        self.multishape
    }

    /// Collects the parts whose AABB intersects `aabb`, and returns their number.
    ///
    /// Boxes that merely touch are considered intersecting. This clears the current part.
    pub fn prepare(&mut self, aabb: &Aabb) -> Result<usize, ShapeError> {
        self.multishape.properties().ensure_up_to_date()?;

        self.candidates.clear();
        self.current = None;
        self.prepared = true;

        let multishape = self.multishape;
        let intersecting = (0..multishape.num_parts()).filter(|i| {
            multishape
                .part(*i)
                .is_some_and(|part| part.aabb().intersects(aabb))
        });
        self.candidates.extend(intersecting);

        log::trace!(
            "multishape query prepared: {} candidates out of {} parts",
            self.candidates.len(),
            multishape.num_parts()
        );
        Ok(self.candidates.len())
    }

    /// Collects the parts potentially hit by the segment `[origin, end]`.
    pub fn prepare_ray(
        &mut self,
        origin: &Point<Real>,
        end: &Point<Real>,
    ) -> Result<usize, ShapeError> {
        self.prepare(&Aabb::from_segment(origin, end))
    }

    /// Selects the `local_index`-th candidate of the last `prepare` as the current part.
    pub fn set_current_shape(&mut self, local_index: usize) -> Result<(), ShapeError> {
        let index = *self
            .candidates
            .get(local_index)
            .ok_or(ShapeError::IndexOutOfRange {
                index: local_index,
                count: self.candidates.len(),
            })?;
        let part = self.multishape.part(index).ok_or(ShapeError::IndexOutOfRange {
            index,
            count: self.multishape.num_parts(),
        })?;

        self.geometric_center = part.center()?;
        self.current = Some(index);
        log::trace!("multishape query selected part {}", index);
        Ok(())
    }

    /// The index, in the multishape, of the current part.
    #[inline]
    pub fn current_index(&self) -> Option<usize> {
        self.current
    }

    /// The indices, in the multishape, of the candidates of the last `prepare`.
    #[inline]
    pub fn candidates(&self) -> &[usize] {
        &self.candidates
    }

    /// The geometric center of the current part, in the multishape's local-space.
    ///
    /// This is the origin until a part is selected.
    #[inline]
    pub fn geometric_center(&self) -> Point<Real> {
        self.geometric_center
    }

    /// The state of this query.
    pub fn state(&self) -> QueryState {
        match self.current {
            Some(index) => QueryState::ShapeSelected { index },
            None if self.prepared => QueryState::Prepared {
                candidates: self.candidates.len(),
            },
            None => QueryState::Uninitialized,
        }
    }

    /// Goes back to the [`QueryState::Uninitialized`] state.
    pub fn reset(&mut self) {
        self.candidates.clear();
        self.prepared = false;
        self.current = None;
        self.geometric_center = Point::origin();
    }

    /// The current part, usable as any convex shape by support-mapping based algorithms.
    pub fn current_part(&self) -> Result<CurrentPart<'a>, ShapeError> {
        let index = self.current.ok_or(ShapeError::NoCurrentShape)?;
        let part = self.multishape.part(index).ok_or(ShapeError::NoCurrentShape)?;
        let support_map = part
            .shape()
            .as_support_map()
            .ok_or(ShapeError::NotConvex(index))?;

        Ok(CurrentPart {
            index,
            part,
            support_map,
        })
    }

    /// The support point of the current part along `dir`, in the multishape's local-space.
    pub fn support_point(&self, dir: &Vector<Real>) -> Result<Point<Real>, ShapeError> {
        Ok(self.current_part()?.local_support_point(dir))
    }
}

/// The part currently selected by a [`MultishapeQuery`].
///
/// Its support mapping is expressed in the multishape's local-space.
#[derive(Copy, Clone)]
pub struct CurrentPart<'a> {
    index: usize,
    part: &'a TransformedShape,
    support_map: &'a dyn SupportMap,
}

impl<'a> CurrentPart<'a> {
    /// The index of this part in its multishape.
    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    /// This part with its placement in the multishape.
    #[inline]
    pub fn part(&self) -> &'a TransformedShape {
        self.part
    }
}

impl SupportMap for CurrentPart<'_> {
    fn local_support_point(&self, dir: &Vector<Real>) -> Point<Real> {
        let local_dir = self.part.inverse_transform_vector(dir);
        self.part
            .transform_point(&self.support_map.local_support_point(&local_dir))
    }
}
