//!
//! Shape composed from the union of convex parts.
//!

use crate::bounding_volume::{Aabb, BoundingVolume};
use crate::mass_properties::MassProperties;
use crate::math::{Matrix, Point, Real, Vector};
use crate::shape::{
    Multishape, MultishapeQuery, ShapeError, ShapeProperties, SharedShape, TransformedShape,
};
use crate::utils;
use alloc::vec::Vec;

/// A compound shape: the union of several convex parts, each with its own placement.
///
/// Every update cycle recenters the compound so that the unweighted mean of the positions
/// of its parts is its local origin, merges the AABB of every part and aggregates their mass
/// properties. The parts are never multishapes themselves.
///
/// Structural edits ([`CompoundShape::add_shape`], [`CompoundShape::clear_shapes`], and the
/// part setters) only mark the compound stale:
/// [`Shape::update_shape`](crate::shape::Shape::update_shape) must be called before the
/// compound can be queried again.
///
/// # Example
///
/// ```
/// # #[cfg(all(feature = "dim3", feature = "f32"))]
/// # {
/// use multishape3d::math::{Matrix, Vector};
/// use multishape3d::shape::{CompoundShape, Multishape, SharedShape};
///
/// let parts = vec![
///     (SharedShape::ball(0.5), Matrix::identity(), Vector::x() * -2.0),
///     (SharedShape::cuboid(Vector::new(2.0, 0.2, 0.2)), Matrix::identity(), Vector::zeros()),
///     (SharedShape::ball(0.5), Matrix::identity(), Vector::x() * 2.0),
/// ];
///
/// let dumbbell = CompoundShape::from_shapes(parts).unwrap();
/// assert_eq!(dumbbell.num_parts(), 3);
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct CompoundShape {
    parts: Vec<TransformedShape>,
    shift: Vector<Real>,
    aabb: Aabb,
    pub(crate) props: ShapeProperties,
}

impl CompoundShape {
    /// Builds a new compound shape from its parts, and runs its first update cycle.
    ///
    /// Fails if `parts` is empty, if any part is a multishape, or if any part has no
    /// support mapping.
    pub fn new(parts: Vec<TransformedShape>) -> Result<Self, ShapeError> {
        if parts.is_empty() {
            log::debug!("rejected the construction of an empty compound shape");
            return Err(ShapeError::EmptyCompound);
        }

        for (i, part) in parts.iter().enumerate() {
            Self::validate_part(i, part)?;
        }

        let mut compound = CompoundShape {
            parts,
            shift: Vector::zeros(),
            aabb: Aabb::new_invalid(),
            props: ShapeProperties::default(),
        };
        compound.update_parts()?;
        Ok(compound)
    }

    /// Builds a new compound shape from a list of shapes with their orientation and position.
    pub fn from_shapes(
        shapes: impl IntoIterator<Item = (SharedShape, Matrix<Real>, Vector<Real>)>,
    ) -> Result<Self, ShapeError> {
        let parts = shapes
            .into_iter()
            .map(|(shape, orientation, position)| {
                TransformedShape::new(shape, orientation, position)
            })
            .collect();
        Self::new(parts)
    }

    fn validate_part(i: usize, part: &TransformedShape) -> Result<(), ShapeError> {
        if part.shape().as_multishape().is_some() {
            log::debug!("rejected the nested multishape at index {}", i);
            Err(ShapeError::NestedMultishape(i))
        } else if part.shape().as_support_map().is_none() {
            log::debug!("rejected the non-convex part at index {}", i);
            Err(ShapeError::NotConvex(i))
        } else {
            Ok(())
        }
    }

    /// The parts of this compound shape.
    #[inline]
    pub fn parts(&self) -> &[TransformedShape] {
        &self.parts
    }

    /// The translation subtracted from every part position by the last update cycle.
    #[inline]
    pub fn shift(&self) -> &Vector<Real> {
        &self.shift
    }

    /// The union of the AABBs of every part, as computed by the last update cycle.
    #[inline]
    pub fn aabb(&self) -> &Aabb {
        &self.aabb
    }

    /// Appends a part to this compound shape and marks it stale.
    pub fn add_shape(&mut self, part: TransformedShape) -> Result<(), ShapeError> {
        Self::validate_part(self.parts.len(), &part)?;
        self.parts.push(part);
        self.props.mark_dirty();
        Ok(())
    }

    /// Removes every part of this compound shape and marks it stale.
    ///
    /// The compound cannot be updated again until a part is added.
    pub fn clear_shapes(&mut self) {
        self.parts.clear();
        self.props.mark_dirty();
    }

    fn part_mut(&mut self, i: usize) -> Result<&mut TransformedShape, ShapeError> {
        let count = self.parts.len();
        self.parts
            .get_mut(i)
            .ok_or(ShapeError::IndexOutOfRange { index: i, count })
    }

    /// Moves the `i`-th part of this compound shape and marks it stale.
    pub fn set_part_position(
        &mut self,
        i: usize,
        position: Vector<Real>,
    ) -> Result<(), ShapeError> {
        self.part_mut(i)?.set_position(position);
        self.props.mark_dirty();
        Ok(())
    }

    /// Rotates the `i`-th part of this compound shape and marks it stale.
    pub fn set_part_orientation(
        &mut self,
        i: usize,
        orientation: Matrix<Real>,
    ) -> Result<(), ShapeError> {
        self.part_mut(i)?.set_orientation(orientation);
        self.props.mark_dirty();
        Ok(())
    }

    /// The sum of the mass properties of `parts`, expressed about the common origin.
    pub fn aggregate_mass_properties(
        parts: &[TransformedShape],
    ) -> Result<MassProperties, ShapeError> {
        parts.iter().map(TransformedShape::mass_properties).sum()
    }

    /// Runs the update cycle of this compound shape.
    ///
    /// Every value is computed on a copy of the parts first, so a failure leaves the compound
    /// exactly as it was.
    pub(crate) fn update_parts(&mut self) -> Result<(), ShapeError> {
        let mut parts = self.parts.clone();
        let shift = utils::center(parts.iter().map(|part| part.position()))
            .ok_or(ShapeError::EmptyCompound)?;

        let mut aabb = Aabb::new_invalid();
        for part in &mut parts {
            part.set_position(part.position() - shift);
            aabb.merge(part.aabb());
        }

        let mass_properties = Self::aggregate_mass_properties(&parts)?;

        log::debug!(
            "compound shape updated: {} parts, shift {:?}, mass {}",
            parts.len(),
            shift,
            mass_properties.mass
        );

        self.parts = parts;
        self.shift = shift;
        self.aabb = aabb;
        self.props.commit(mass_properties, aabb, Point::origin());
        Ok(())
    }

    pub(crate) fn make_parts_hull(&self, out: &mut Vec<Point<Real>>, generation_threshold: usize) {
        let mut part_hull = Vec::new();

        for part in &self.parts {
            part_hull.clear();
            part.shape().make_hull(&mut part_hull, generation_threshold);
            out.extend(part_hull.iter().map(|pt| part.transform_point(pt)));
        }
    }
}

impl Multishape for CompoundShape {
    fn num_parts(&self) -> usize {
        self.parts.len()
    }

    fn part(&self, i: usize) -> Option<&TransformedShape> {
        self.parts.get(i)
    }

    fn working_clone(&self) -> MultishapeQuery<'_> {
        MultishapeQuery::new(self)
    }
}

static_assertions::assert_impl_all!(CompoundShape: Send, Sync);
