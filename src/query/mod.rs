//! Geometric queries used by the voxelization pipeline.

pub use self::split::IntersectResult;

mod split;
