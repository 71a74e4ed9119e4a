use crate::math::{Point, Real};
use crate::query::IntersectResult;
use crate::shape::Segment;

impl Segment {
    /// Computes the intersection of this segment with the plane orthogonal to the `axis`-th
    /// canonical axis and passing through the point with `axis`-th coordinate equal to `bias`.
    ///
    /// The intersection point is always interpolated from the endpoint lying in the negative
    /// half-space toward the endpoint lying in the positive half-space. It is therefore
    /// bit-identical for `Segment::new(a, b)` and `Segment::new(b, a)`.
    ///
    /// # Example
    ///
    /// ```
    /// # #[cfg(all(feature = "dim3", feature = "f32"))] {
    /// use metalvox3d::math::Point;
    /// use metalvox3d::query::IntersectResult;
    /// use metalvox3d::shape::Segment;
    ///
    /// let segment = Segment::new(Point::new(0.0, 0.0, 0.0), Point::new(4.0, 2.0, 0.0));
    /// assert_eq!(
    ///     segment.canonical_intersection_with_plane(1, 1.0),
    ///     IntersectResult::Intersect(Point::new(2.0, 1.0, 0.0))
    /// );
    ///
    /// // The endpoint on the plane belongs to the negative side.
    /// assert_eq!(
    ///     segment.canonical_intersection_with_plane(1, 2.0),
    ///     IntersectResult::Negative
    /// );
    /// # }
    /// ```
    pub fn canonical_intersection_with_plane(
        &self,
        axis: usize,
        bias: Real,
    ) -> IntersectResult<Point<Real>> {
        let a_below = self.a[axis] <= bias;
        let b_below = self.b[axis] <= bias;

        match (a_below, b_below) {
            (true, true) => IntersectResult::Negative,
            (false, false) => IntersectResult::Positive,
            (true, false) => {
                IntersectResult::Intersect(plane_crossing(&self.a, &self.b, axis, bias))
            }
            (false, true) => {
                IntersectResult::Intersect(plane_crossing(&self.b, &self.a, axis, bias))
            }
        }
    }
}

/// The point where the segment `[below, above]` crosses the plane `X[axis] = bias`.
///
/// Requires `below[axis] <= bias < above[axis]`.
#[inline]
pub(crate) fn plane_crossing(
    below: &Point<Real>,
    above: &Point<Real>,
    axis: usize,
    bias: Real,
) -> Point<Real> {
    let t = (bias - below[axis]) / (above[axis] - below[axis]);
    let mut pt = *below + (*above - *below) * t;
    pt[axis] = bias;
    pt
}
