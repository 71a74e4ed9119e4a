use super::GridExtent;
use crate::math::Real;

fn axis_name(axis: &usize) -> char {
    match axis {
        0 => 'x',
        1 => 'y',
        _ => 'z',
    }
}

/// Errors that can occur while voxelizing an envelope mesh.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum VoxelizationError {
    /// The requested grid has no voxel along one of its axes.
    ///
    /// This usually means the bounds are inverted or flat, or that the spacing and the bounds
    /// are not expressed with the same units.
    #[error("degenerate bounds along the {} axis: an extent of {extent} with a spacing of {spacing} yields no voxel. Check the mesh units or geometry.", axis_name(.axis))]
    DegenerateGeometry {
        /// The offending axis (0 for `x`, 1 for `y`, 2 for `z`).
        axis: usize,
        /// The extent of the bounds along that axis.
        extent: Real,
        /// The voxel spacing along that axis.
        spacing: Real,
    },
    /// The requested grid cannot be indexed or allocated.
    #[error("the voxel grid of dimensions {dims:?} is too large")]
    GridTooLarge {
        /// The number of voxels along each axis.
        dims: [usize; 3],
    },
    /// The core meshes and their transforms are not given pairwise.
    #[error("the core meshes ({num_cores} elements) and the core transforms ({num_transforms} elements) must have the same length")]
    MismatchedInputLists {
        /// The number of core meshes.
        num_cores: usize,
        /// The number of core transforms.
        num_transforms: usize,
    },
    /// The rasterization backend failed.
    #[error(transparent)]
    Rasterization(#[from] RasterizationError),
}

/// Errors reported by a [`MeshRasterizer`](super::MeshRasterizer).
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum RasterizationError {
    /// The envelope has a vertex with a NaN or infinite coordinate.
    #[error("the envelope vertex {0} has a non-finite coordinate")]
    NonFiniteVertex(u32),
    /// The stencil spacing is not strictly positive on every axis.
    #[error("the stencil spacing {0:?} must be strictly positive and finite on every axis")]
    InvalidSpacing([Real; 3]),
    /// The stencil extent contains no grid point.
    #[error("the stencil extent {0:?} is empty")]
    EmptyExtent(GridExtent),
    /// A third-party rasterization backend failed.
    #[error("rasterization backend failure: {0}")]
    Backend(String),
}
