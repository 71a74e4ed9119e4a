use super::{GridExtent, ImageStencil, Volume, VolumeGrid};
use crate::math::{Point, Real, Vector};

/// A scalar field sampled on the points of a regular grid.
///
/// Values are stored with `x` varying the fastest and `z` the slowest. The sample `(i, j, k)`
/// of the extent is located at `origin + (i, j, k) * spacing`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct ScalarImage {
    origin: Point<Real>,
    spacing: Vector<Real>,
    extent: GridExtent,
    data: Vec<f32>,
}

impl ScalarImage {
    /// Allocates an image with all its samples set to zero.
    pub fn new(origin: Point<Real>, spacing: Vector<Real>, extent: GridExtent) -> Self {
        Self {
            origin,
            spacing,
            extent,
            data: vec![0.0; extent.num_points()],
        }
    }

    /// Allocates an image sampling every point of `grid`.
    pub fn from_grid(grid: &VolumeGrid) -> Self {
        Self::new(*grid.origin(), *grid.spacing(), grid.point_extent())
    }

    /// The location of the sample with index `(0, 0, 0)`.
    #[inline]
    pub fn origin(&self) -> &Point<Real> {
        &self.origin
    }

    /// The distance between two consecutive samples along each axis.
    #[inline]
    pub fn spacing(&self) -> &Vector<Real> {
        &self.spacing
    }

    /// The index range of the samples of this image.
    #[inline]
    pub fn extent(&self) -> &GridExtent {
        &self.extent
    }

    /// Sets every sample of this image to `value`.
    pub fn fill(&mut self, value: f32) {
        self.data.fill(value);
    }

    /// The value of the sample `(i, j, k)`, or `None` if it is outside of the extent.
    #[inline]
    pub fn value(&self, i: i32, j: i32, k: i32) -> Option<f32> {
        self.extent
            .contains(i, j, k)
            .then(|| self.data[self.extent.point_index(i, j, k)])
    }

    /// The location of the sample `(i, j, k)`.
    #[inline]
    pub fn point_at(&self, i: i32, j: i32, k: i32) -> Point<Real> {
        self.origin + Vector::new(i as Real, j as Real, k as Real).component_mul(&self.spacing)
    }

    /// The samples of this image, `x` varying the fastest.
    #[inline]
    pub fn data(&self) -> &[f32] {
        &self.data
    }

    /// Writes `background` to every sample outside of `stencil`.
    ///
    /// If `reverse` is `true`, the samples inside of the stencil are overwritten instead.
    /// Samples outside of the stencil extent are considered outside.
    pub fn apply_stencil(&mut self, stencil: &ImageStencil, background: f32, reverse: bool) {
        if self.extent.is_empty() {
            return;
        }

        let (lo, hi) = (self.extent.mins.x, self.extent.maxs.x);

        for k in self.extent.axis_range(2) {
            for j in self.extent.axis_range(1) {
                let row_start = self.extent.point_index(lo, j, k);
                let row = &mut self.data[row_start..=row_start + (hi - lo) as usize];
                let mut cursor = lo;

                for [first, last] in stencil.row_runs(j, k) {
                    let first = (*first).max(cursor);
                    let last = (*last).min(hi);

                    if first > last {
                        continue;
                    }

                    if !reverse {
                        row[(cursor - lo) as usize..(first - lo) as usize].fill(background);
                    } else {
                        row[(first - lo) as usize..=(last - lo) as usize].fill(background);
                    }

                    cursor = last + 1;

                    if cursor > hi {
                        break;
                    }
                }

                if !reverse && cursor <= hi {
                    row[(cursor - lo) as usize..].fill(background);
                }
            }
        }
    }

    /// Converts this image into a voxel volume, dropping the last sample along each axis.
    ///
    /// An image with `(nx + 1, ny + 1, nz + 1)` samples yields a `[nz, ny, nx]` volume whose
    /// voxel `[k, j, i]` holds the value of the sample `(i, j, k)`.
    pub fn into_cropped_volume(self) -> Volume {
        let [px, py, pz] = self.extent.dims();
        let (nx, ny, nz) = (
            px.saturating_sub(1),
            py.saturating_sub(1),
            pz.saturating_sub(1),
        );
        let mut data = Vec::with_capacity(nx * ny * nz);

        for k in 0..nz {
            for j in 0..ny {
                let row_start = px * (j + py * k);
                data.extend_from_slice(&self.data[row_start..row_start + nx]);
            }
        }

        let origin = self.point_at(self.extent.mins.x, self.extent.mins.y, self.extent.mins.z);
        Volume::new([nz, ny, nx], origin, self.spacing, data)
    }
}
