use crate::math::{Point, Real, Vector};
use std::ops::Index;

/// A dense scalar volume indexed as `[z, y, x]`.
///
/// This is the output of the voxelization: one value per voxel, stored in `(z, y, x)`
/// row-major order (`x` varies the fastest). The voxel `[k, j, i]` is sampled at
/// `origin + (i, j, k) * spacing`, i.e., at its lower corner.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct Volume {
    shape: [usize; 3],
    origin: Point<Real>,
    spacing: Vector<Real>,
    data: Vec<f32>,
}

impl Volume {
    /// Creates a volume from its `[nz, ny, nx]` shape and its `(z, y, x)` ordered values.
    ///
    /// # Panics
    /// Panics if `data.len()` does not match the shape.
    pub fn new(
        shape: [usize; 3],
        origin: Point<Real>,
        spacing: Vector<Real>,
        data: Vec<f32>,
    ) -> Self {
        assert_eq!(
            shape.iter().product::<usize>(),
            data.len(),
            "the volume data does not match its shape"
        );
        Self {
            shape,
            origin,
            spacing,
            data,
        }
    }

    /// The `[nz, ny, nx]` number of voxels along each axis.
    #[inline]
    pub fn shape(&self) -> [usize; 3] {
        self.shape
    }

    /// The number of voxels along the `z` axis.
    #[inline]
    pub fn nz(&self) -> usize {
        self.shape[0]
    }

    /// The number of voxels along the `y` axis.
    #[inline]
    pub fn ny(&self) -> usize {
        self.shape[1]
    }

    /// The number of voxels along the `x` axis.
    #[inline]
    pub fn nx(&self) -> usize {
        self.shape[2]
    }

    /// The total number of voxels.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Does this volume contain no voxel?
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    #[inline]
    fn linear_index(&self, z: usize, y: usize, x: usize) -> usize {
        x + self.shape[2] * (y + self.shape[1] * z)
    }

    /// The value of the voxel `[z, y, x]`, or `None` if it is out of bounds.
    #[inline]
    pub fn get(&self, z: usize, y: usize, x: usize) -> Option<f32> {
        if z < self.shape[0] && y < self.shape[1] && x < self.shape[2] {
            Some(self.data[self.linear_index(z, y, x)])
        } else {
            None
        }
    }

    /// The voxel values, in `(z, y, x)` row-major order.
    #[inline]
    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }

    /// Consumes this volume, returning its `(z, y, x)` ordered values.
    #[inline]
    pub fn into_raw_vec(self) -> Vec<f32> {
        self.data
    }

    /// The location of the sample of the voxel `[0, 0, 0]`.
    #[inline]
    pub fn origin(&self) -> &Point<Real> {
        &self.origin
    }

    /// The size of a voxel along each axis.
    #[inline]
    pub fn spacing(&self) -> &Vector<Real> {
        &self.spacing
    }

    /// The location where the voxel `[z, y, x]` was sampled.
    #[inline]
    pub fn sample_point(&self, z: usize, y: usize, x: usize) -> Point<Real> {
        self.origin
            + Vector::new(x as Real, y as Real, z as Real).component_mul(&self.spacing)
    }

    /// The volume of a single voxel.
    #[inline]
    pub fn voxel_volume(&self) -> Real {
        self.spacing.product()
    }

    /// The number of voxels with a value equal to `value`.
    pub fn count_equal(&self, value: f32) -> usize {
        self.data.iter().filter(|v| **v == value).count()
    }

    /// The physical volume of the voxels with a value equal to `fill`.
    ///
    /// With `fill` set to the value used to fill the inside of the envelope, this is the
    /// discretized metal volume of the part.
    pub fn filled_volume(&self, fill: f32) -> Real {
        self.count_equal(fill) as Real * self.voxel_volume()
    }
}

impl Index<[usize; 3]> for Volume {
    type Output = f32;

    #[inline]
    fn index(&self, [z, y, x]: [usize; 3]) -> &f32 {
        assert!(
            z < self.shape[0] && y < self.shape[1] && x < self.shape[2],
            "voxel index [{z}, {y}, {x}] out of bounds for a volume of shape {:?}",
            self.shape
        );
        &self.data[self.linear_index(z, y, x)]
    }
}
