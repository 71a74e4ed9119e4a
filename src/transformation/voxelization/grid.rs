use super::VoxelizationError;
use crate::bounding_volume::Aabb;
use crate::math::{Point, Real, Vector, DIM};
use std::ops::RangeInclusive;

/// An inclusive range of integer sample indices along each axis of a regular grid.
///
/// This follows the "whole extent" convention of image processing libraries: a grid with
/// `n` samples along the `x` axis starting at index 0 has `mins.x == 0` and `maxs.x == n - 1`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct GridExtent {
    /// The smallest sample index along each axis.
    pub mins: Point<i32>,
    /// The largest sample index along each axis (inclusive).
    pub maxs: Point<i32>,
}

impl GridExtent {
    /// Creates a new extent from its inclusive bounds.
    #[inline]
    pub fn new(mins: Point<i32>, maxs: Point<i32>) -> Self {
        Self { mins, maxs }
    }

    /// The extent of a grid with `dims[i]` samples along the `i`-th axis, starting at index 0.
    ///
    /// Returns `None` if one of the dimensions cannot be indexed with an `i32`.
    pub fn from_dims(dims: [usize; 3]) -> Option<Self> {
        let mut maxs = Point::origin();

        for i in 0..DIM {
            maxs[i] = i32::try_from(dims[i]).ok()? - 1;
        }

        Some(Self::new(Point::origin(), maxs))
    }

    /// The number of samples along each axis.
    #[inline]
    pub fn dims(&self) -> [usize; 3] {
        let mut dims = [0; 3];

        for i in 0..DIM {
            dims[i] = (self.maxs[i] as i64 - self.mins[i] as i64 + 1).max(0) as usize;
        }

        dims
    }

    /// The total number of samples in this extent.
    #[inline]
    pub fn num_points(&self) -> usize {
        self.dims().iter().product()
    }

    /// Does this extent contain no sample at all?
    #[inline]
    pub fn is_empty(&self) -> bool {
        (0..DIM).any(|i| self.maxs[i] < self.mins[i])
    }

    /// Does this extent contain the sample `(i, j, k)`?
    #[inline]
    pub fn contains(&self, i: i32, j: i32, k: i32) -> bool {
        i >= self.mins.x
            && i <= self.maxs.x
            && j >= self.mins.y
            && j <= self.maxs.y
            && k >= self.mins.z
            && k <= self.maxs.z
    }

    /// The position of the sample `(i, j, k)` in a buffer laid out with `x` varying the fastest
    /// and `z` the slowest.
    ///
    /// The sample must be contained by this extent.
    #[inline]
    pub fn point_index(&self, i: i32, j: i32, k: i32) -> usize {
        let [nx, ny, _] = self.dims();
        let di = (i - self.mins.x) as usize;
        let dj = (j - self.mins.y) as usize;
        let dk = (k - self.mins.z) as usize;
        di + nx * (dj + ny * dk)
    }

    /// The sample indices along the `axis`-th axis.
    #[inline]
    pub fn axis_range(&self, axis: usize) -> RangeInclusive<i32> {
        self.mins[axis]..=self.maxs[axis]
    }
}

/// The geometry of a regular voxel grid covering a bounding box.
///
/// The grid has `voxel_dims()[i] = ceil(extent[i] / spacing[i])` voxels along the `i`-th axis,
/// so it always covers the requested bounds. It is sampled on a point grid with one extra
/// sample per axis, starting at the lower corner of the bounds.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct VolumeGrid {
    origin: Point<Real>,
    spacing: Vector<Real>,
    voxel_dims: [usize; 3],
}

impl VolumeGrid {
    /// Computes the grid covering the flat `[xmin, xmax, ymin, ymax, zmin, zmax]` bounds.
    ///
    /// # Example
    ///
    /// ```
    /// # #[cfg(all(feature = "dim3", feature = "f32"))] {
    /// use metalvox3d::math::Vector;
    /// use metalvox3d::transformation::voxelization::{VolumeGrid, VoxelizationError};
    ///
    /// let spacing = Vector::new(1.0, 0.5, 2.0);
    /// let grid = VolumeGrid::from_xyz_bounds(&spacing, &[0.0, 10.5, 0.0, 2.0, -1.0, 4.0]).unwrap();
    /// assert_eq!(grid.voxel_dims(), [11, 4, 3]);
    /// assert_eq!(grid.point_dims(), [12, 5, 4]);
    ///
    /// let inverted = VolumeGrid::from_xyz_bounds(&spacing, &[1.0, 0.0, 0.0, 2.0, 0.0, 1.0]);
    /// assert!(matches!(inverted, Err(VoxelizationError::DegenerateGeometry { axis: 0, .. })));
    /// # }
    /// ```
    pub fn from_xyz_bounds(
        spacing: &Vector<Real>,
        bounds: &[Real; 6],
    ) -> Result<Self, VoxelizationError> {
        Self::from_aabb(spacing, &Aabb::from_xyz_bounds(bounds))
    }

    /// Computes the grid covering the given AABB.
    ///
    /// # Errors
    /// - [`VoxelizationError::DegenerateGeometry`] if the spacing is not strictly positive
    ///   or if the bounds yield no voxel along an axis.
    /// - [`VoxelizationError::GridTooLarge`] if the point grid cannot be indexed or its
    ///   buffer exceeds the maximum allocation size.
    pub fn from_aabb(spacing: &Vector<Real>, bounds: &Aabb) -> Result<Self, VoxelizationError> {
        let extents = bounds.extents();
        let mut voxel_dims = [0; 3];

        for i in 0..DIM {
            let count = (extents[i] / spacing[i]).ceil();

            if !(spacing[i] > 0.0) || !(count > 0.0) || !count.is_finite() {
                return Err(VoxelizationError::DegenerateGeometry {
                    axis: i,
                    extent: extents[i],
                    spacing: spacing[i],
                });
            }

            // The point grid has `count + 1` samples, indexed with an i32.
            if count >= i32::MAX as Real {
                return Err(VoxelizationError::GridTooLarge {
                    dims: [usize::MAX; 3],
                });
            }

            voxel_dims[i] = count as usize;
        }

        // The point grid is allocated as a single `f32` buffer.
        let num_bytes = voxel_dims
            .iter()
            .try_fold(1usize, |acc, n| acc.checked_mul(n + 1))
            .and_then(|num_points| num_points.checked_mul(size_of::<f32>()));

        if !matches!(num_bytes, Some(n) if n <= isize::MAX as usize) {
            return Err(VoxelizationError::GridTooLarge { dims: voxel_dims });
        }

        Ok(Self {
            origin: bounds.mins,
            spacing: *spacing,
            voxel_dims,
        })
    }

    /// The location of the first grid sample, i.e., the lower corner of the bounds.
    #[inline]
    pub fn origin(&self) -> &Point<Real> {
        &self.origin
    }

    /// The distance between two consecutive samples along each axis.
    #[inline]
    pub fn spacing(&self) -> &Vector<Real> {
        &self.spacing
    }

    /// The number of voxels `(nx, ny, nz)` along each axis.
    #[inline]
    pub fn voxel_dims(&self) -> [usize; 3] {
        self.voxel_dims
    }

    /// The number of point samples `(nx + 1, ny + 1, nz + 1)` along each axis.
    #[inline]
    pub fn point_dims(&self) -> [usize; 3] {
        self.voxel_dims.map(|n| n + 1)
    }

    /// The whole extent `(0..=nx, 0..=ny, 0..=nz)` of the point grid.
    #[inline]
    pub fn point_extent(&self) -> GridExtent {
        let maxs = Point::new(
            self.voxel_dims[0] as i32,
            self.voxel_dims[1] as i32,
            self.voxel_dims[2] as i32,
        );
        GridExtent::new(Point::origin(), maxs)
    }

    /// The total number of voxels of this grid.
    #[inline]
    pub fn num_voxels(&self) -> usize {
        self.voxel_dims.iter().product()
    }

    /// The total number of point samples of this grid.
    #[inline]
    pub fn num_points(&self) -> usize {
        self.point_dims().iter().product()
    }
}

/// The indices `k` within `lo..=hi` such that the sample `origin + k * spacing` may lie
/// within `[min, max]`.
///
/// The returned range is conservative: it may contain a few extra samples on each side.
pub(crate) fn sample_range(
    min: Real,
    max: Real,
    origin: Real,
    spacing: Real,
    lo: i32,
    hi: i32,
) -> Option<RangeInclusive<i32>> {
    let first = (((min - origin) / spacing).floor() as i64).max(lo as i64);
    let last = (((max - origin) / spacing).ceil() as i64).min(hi as i64);
    (first <= last).then(|| first as i32..=last as i32)
}
