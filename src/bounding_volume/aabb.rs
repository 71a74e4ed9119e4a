//! Axis Aligned Bounding Box.

use crate::math::{Point, Real, Vector};
use crate::shape::Cuboid;
use na;
use num::Bounded;

/// An Axis-Aligned Bounding Box (AABB).
///
/// An AABB is defined by its minimum and maximum corners. Its edges are always
/// parallel to the coordinate axes.
///
/// - **mins**: The point with the smallest coordinates on each axis.
/// - **maxs**: The point with the largest coordinates on each axis.
/// - **Invariant**: `mins.x ≤ maxs.x`, `mins.y ≤ maxs.y`, `mins.z ≤ maxs.z` for a valid AABB.
///
/// Voxelization bounds are usually given as a flat `[xmin, xmax, ymin, ymax, zmin, zmax]`
/// array; see [`Aabb::from_xyz_bounds`] and [`Aabb::xyz_bounds`] for the conversions.
///
/// # Example
///
/// ```rust
/// # #[cfg(all(feature = "dim3", feature = "f32"))] {
/// use metalvox3d::bounding_volume::Aabb;
/// use nalgebra::Point3;
///
/// let aabb = Aabb::from_xyz_bounds(&[0.0, 10.0, -1.0, 1.0, 2.0, 3.0]);
/// assert_eq!(aabb.mins, Point3::new(0.0, -1.0, 2.0));
/// assert_eq!(aabb.maxs, Point3::new(10.0, 1.0, 3.0));
/// assert_eq!(aabb.xyz_bounds(), [0.0, 10.0, -1.0, 1.0, 2.0, 3.0]);
/// # }
/// ```
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Debug, PartialEq, Copy, Clone)]
#[repr(C)]
pub struct Aabb {
    /// The point with minimum coordinates.
    pub mins: Point<Real>,
    /// The point with maximum coordinates.
    pub maxs: Point<Real>,
}

impl Aabb {
    /// Creates a new AABB from its minimum and maximum corners.
    #[inline]
    pub fn new(mins: Point<Real>, maxs: Point<Real>) -> Aabb {
        Aabb { mins, maxs }
    }

    /// Creates an invalid AABB with inverted bounds.
    ///
    /// This is the neutral element of [`Aabb::take_point`].
    #[inline]
    pub fn new_invalid() -> Self {
        Self::new(
            Vector::repeat(Real::max_value()).into(),
            Vector::repeat(-Real::max_value()).into(),
        )
    }

    /// Creates a new AABB from a flat `[xmin, xmax, ymin, ymax, zmin, zmax]` array.
    ///
    /// No reordering is performed: inverted bounds yield an invalid AABB.
    #[inline]
    pub fn from_xyz_bounds(bounds: &[Real; 6]) -> Self {
        Self::new(
            Point::new(bounds[0], bounds[2], bounds[4]),
            Point::new(bounds[1], bounds[3], bounds[5]),
        )
    }

    /// The bounds of this AABB as a flat `[xmin, xmax, ymin, ymax, zmin, zmax]` array.
    #[inline]
    pub fn xyz_bounds(&self) -> [Real; 6] {
        [
            self.mins.x,
            self.maxs.x,
            self.mins.y,
            self.maxs.y,
            self.mins.z,
            self.maxs.z,
        ]
    }

    /// Creates a new AABB that tightly encloses a set of points.
    ///
    /// Returns [`Aabb::new_invalid`] if the iterator is empty.
    pub fn from_points<'a, I>(pts: I) -> Self
    where
        I: IntoIterator<Item = &'a Point<Real>>,
    {
        let mut result = Self::new_invalid();

        for pt in pts {
            result.take_point(*pt);
        }

        result
    }

    /// Returns the center point of this AABB.
    #[inline]
    pub fn center(&self) -> Point<Real> {
        na::center(&self.mins, &self.maxs)
    }

    /// Returns the half-extents of this AABB.
    #[inline]
    pub fn half_extents(&self) -> Vector<Real> {
        let half: Real = na::convert::<f64, Real>(0.5);
        (self.maxs - self.mins) * half
    }

    /// The extents of this `Aabb`.
    #[inline]
    pub fn extents(&self) -> Vector<Real> {
        self.maxs - self.mins
    }

    /// Enlarges this `Aabb` so it also contains the point `pt`.
    pub fn take_point(&mut self, pt: Point<Real>) {
        self.mins = self.mins.coords.inf(&pt.coords).into();
        self.maxs = self.maxs.coords.sup(&pt.coords).into();
    }

    /// Do `self` and `other` overlap (touching counts as overlapping)?
    #[inline]
    pub fn intersects(&self, other: &Aabb) -> bool {
        na::partial_le(&self.mins, &other.maxs) && na::partial_ge(&self.maxs, &other.mins)
    }

    /// Discretize the boundary of this AABB as a triangle-mesh.
    pub fn to_trimesh(&self) -> (Vec<Point<Real>>, Vec<[u32; 3]>) {
        let center = self.center();
        let mut cube_mesh = Cuboid::new(self.half_extents()).to_trimesh();
        cube_mesh.0.iter_mut().for_each(|p| *p += center.coords);
        cube_mesh
    }
}
