//! Mesh generation and voxelization.

mod to_trimesh;
pub mod utils;
pub mod voxelization;
