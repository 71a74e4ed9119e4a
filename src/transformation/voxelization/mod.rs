//! Conversion of a closed triangle mesh into a regular scalar volume.
//!
//! The pipeline is split into small pieces that can be used independently:
//! - [`VolumeGrid`] computes the grid covering a bounding box for a given voxel spacing.
//! - A [`MeshRasterizer`], by default the [`ScanlineRasterizer`], computes the
//!   [`ImageStencil`] of the grid points inside of the mesh.
//! - A [`ScalarImage`] holds the sampled values and is cropped into the final [`Volume`].
//!
//! Most users only need [`metal_volume`], or a [`Voxelizer`] to customize the written values
//! or the rasterization backend.

pub use self::error::{RasterizationError, VoxelizationError};
pub use self::grid::{GridExtent, VolumeGrid};
pub use self::image::ScalarImage;
pub use self::rasterizer::{MeshRasterizer, ScanlineRasterizer};
pub use self::stencil::ImageStencil;
pub use self::volume::Volume;
pub use self::voxelizer::{metal_volume, VoxelizationOptions, Voxelizer};

mod error;
mod grid;
mod image;
mod rasterizer;
mod stencil;
mod volume;
mod voxelizer;
