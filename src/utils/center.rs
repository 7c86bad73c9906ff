use crate::math::{Real, Vector};

/// Computes the unweighted mean of a set of vectors.
///
/// Returns `None` if `pts` is empty.
#[inline]
pub fn center<'a, I>(pts: I) -> Option<Vector<Real>>
where
    I: IntoIterator<Item = &'a Vector<Real>>,
{
    let mut count = 0usize;
    let mut res = Vector::zeros();

    for pt in pts {
        res += pt;
        count += 1;
    }

    if count == 0 {
        None
    } else {
        let denom: Real = na::convert::<f64, Real>(1.0 / (count as f64));
        Some(res * denom)
    }
}
