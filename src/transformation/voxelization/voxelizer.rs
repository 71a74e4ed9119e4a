use super::{
    MeshRasterizer, ScalarImage, ScanlineRasterizer, Volume, VolumeGrid, VoxelizationError,
};
use crate::bounding_volume::Aabb;
use crate::math::{Isometry, Real, Vector};
use crate::shape::TriMesh;

/// The values written to the voxels by a [`Voxelizer`].
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct VoxelizationOptions {
    /// The value of the voxels inside of the envelope.
    pub fill_value: f32,
    /// The value of the voxels outside of the envelope.
    pub background_value: f32,
    /// If `true`, the voxels inside of the envelope take the background value and the voxels
    /// outside of it keep the fill value.
    pub reverse_stencil: bool,
}

impl Default for VoxelizationOptions {
    fn default() -> Self {
        Self {
            fill_value: 1.0,
            background_value: 0.0,
            reverse_stencil: false,
        }
    }
}

/// Converts a closed triangle mesh into a regular scalar volume.
///
/// The grid is allocated over the requested bounds and filled with
/// [`VoxelizationOptions::fill_value`]. The envelope is then rasterized with `R`, and every
/// grid point outside of it is reset to [`VoxelizationOptions::background_value`].
#[derive(Clone, Debug, Default)]
pub struct Voxelizer<R = ScanlineRasterizer> {
    options: VoxelizationOptions,
    rasterizer: R,
}

impl Voxelizer {
    /// A voxelizer relying on the [`ScanlineRasterizer`].
    pub fn new(options: VoxelizationOptions) -> Self {
        Self::with_rasterizer(options, ScanlineRasterizer)
    }
}

impl<R: MeshRasterizer> Voxelizer<R> {
    /// A voxelizer relying on a custom rasterization backend.
    pub fn with_rasterizer(options: VoxelizationOptions, rasterizer: R) -> Self {
        Self {
            options,
            rasterizer,
        }
    }

    /// The values written by this voxelizer.
    #[inline]
    pub fn options(&self) -> &VoxelizationOptions {
        &self.options
    }

    /// The rasterization backend of this voxelizer.
    #[inline]
    pub fn rasterizer(&self) -> &R {
        &self.rasterizer
    }

    /// Voxelizes `envelope` over the flat `[xmin, xmax, ymin, ymax, zmin, zmax]` bounds.
    ///
    /// See [`metal_volume`] for details on the arguments and the output layout.
    pub fn voxelize(
        &self,
        spacing: &Vector<Real>,
        xyz_bounds: &[Real; 6],
        envelope: &TriMesh,
        cores: &[TriMesh],
        core_transforms: &[Isometry<Real>],
    ) -> Result<Volume, VoxelizationError> {
        self.voxelize_aabb(
            spacing,
            &Aabb::from_xyz_bounds(xyz_bounds),
            envelope,
            cores,
            core_transforms,
        )
    }

    /// Voxelizes `envelope` over the given AABB.
    pub fn voxelize_aabb(
        &self,
        spacing: &Vector<Real>,
        bounds: &Aabb,
        envelope: &TriMesh,
        cores: &[TriMesh],
        core_transforms: &[Isometry<Real>],
    ) -> Result<Volume, VoxelizationError> {
        let grid = VolumeGrid::from_aabb(spacing, bounds)?;

        if cores.len() != core_transforms.len() {
            return Err(VoxelizationError::MismatchedInputLists {
                num_cores: cores.len(),
                num_transforms: core_transforms.len(),
            });
        }

        if !cores.is_empty() {
            log::debug!(
                "{} core meshes are not applied to the voxelized volume.",
                cores.len()
            );
        }

        let [nx, ny, nz] = grid.voxel_dims();
        log::debug!(
            "Voxelizing {} triangles on a {}x{}x{} grid.",
            envelope.num_triangles(),
            nx,
            ny,
            nz
        );

        let mut image = ScalarImage::from_grid(&grid);
        image.fill(self.options.fill_value);

        let stencil = self.rasterizer.rasterize(
            envelope,
            grid.origin(),
            grid.spacing(),
            &grid.point_extent(),
        )?;
        image.apply_stencil(
            &stencil,
            self.options.background_value,
            self.options.reverse_stencil,
        );

        Ok(image.into_cropped_volume())
    }
}

/// Computes the voxelized volume of the metal enclosed by `envelope`.
///
/// The bounds `xyz_bounds = [xmin, xmax, ymin, ymax, zmin, zmax]` are split into
/// `nx = ceil((xmax - xmin) / vol_spacing.x)` voxels along `x` (and similarly for `y` and `z`).
/// The returned volume has the shape `[nz, ny, nx]`. Its voxel `[k, j, i]` is set to
/// `fill_in_value` if the point `(xmin + i * sx, ymin + j * sy, zmin + k * sz)` is inside of
/// the envelope, and to `0.0` otherwise.
///
/// The `cores` meshes, positioned by `core_transforms`, are validated but not subtracted
/// from the volume.
///
/// # Errors
/// - [`VoxelizationError::DegenerateGeometry`] if the grid has no voxel along an axis.
/// - [`VoxelizationError::GridTooLarge`] if the grid cannot be indexed.
/// - [`VoxelizationError::MismatchedInputLists`] if `cores` and `core_transforms` do not
///   have the same length.
/// - [`VoxelizationError::Rasterization`] if the envelope cannot be rasterized.
///
/// # Example
///
/// ```
/// # #[cfg(all(feature = "dim3", feature = "f32"))] {
/// use metalvox3d::bounding_volume::Aabb;
/// use metalvox3d::math::{Point, Vector};
/// use metalvox3d::shape::TriMesh;
/// use metalvox3d::transformation::voxelization::metal_volume;
///
/// let (vertices, indices) = Aabb::new(Point::new(2.0, 2.0, 2.0), Point::new(6.0, 6.0, 6.0)).to_trimesh();
/// let envelope = TriMesh::new(vertices, indices).unwrap();
/// let bounds = [0.0, 10.0, 0.0, 10.0, 0.0, 10.0];
///
/// let volume = metal_volume(&Vector::repeat(1.0), &bounds, &envelope, &[], &[], 7.0).unwrap();
/// assert_eq!(volume.shape(), [10, 10, 10]);
/// assert_eq!(volume.count_equal(7.0), 64);
/// assert_eq!(volume[[2, 2, 2]], 7.0);
/// assert_eq!(volume[[6, 2, 2]], 0.0);
/// # }
/// ```
pub fn metal_volume(
    vol_spacing: &Vector<Real>,
    xyz_bounds: &[Real; 6],
    envelope: &TriMesh,
    cores: &[TriMesh],
    core_transforms: &[Isometry<Real>],
    fill_in_value: f32,
) -> Result<Volume, VoxelizationError> {
    let options = VoxelizationOptions {
        fill_value: fill_in_value,
        ..VoxelizationOptions::default()
    };

    Voxelizer::new(options).voxelize(vol_spacing, xyz_bounds, envelope, cores, core_transforms)
}
