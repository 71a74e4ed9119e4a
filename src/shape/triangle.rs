//! Definition of the triangle shape.

use crate::math::{Point, Real};

/// A triangle shape.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[repr(C)]
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct Triangle {
    /// The triangle first point.
    pub a: Point<Real>,
    /// The triangle second point.
    pub b: Point<Real>,
    /// The triangle third point.
    pub c: Point<Real>,
}

impl Triangle {
    /// Creates a triangle from three points.
    #[inline]
    pub fn new(a: Point<Real>, b: Point<Real>, c: Point<Real>) -> Triangle {
        Triangle { a, b, c }
    }

    /// The three vertices of this triangle.
    #[inline]
    pub fn vertices(&self) -> [Point<Real>; 3] {
        [self.a, self.b, self.c]
    }

    /// The min and max coordinates of the vertices of this triangle along the `axis`-th
    /// canonical axis.
    #[inline]
    pub fn extents_on_axis(&self, axis: usize) -> (Real, Real) {
        let (a, b, c) = (self.a[axis], self.b[axis], self.c[axis]);
        (a.min(b).min(c), a.max(b).max(c))
    }
}
