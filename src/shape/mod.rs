//! Shapes supported by metalvox3d.

pub use self::ball::Ball;
pub use self::cuboid::Cuboid;
pub use self::segment::Segment;
pub use self::triangle::Triangle;
pub use self::trimesh::{TriMesh, TriMeshBuilderError};

mod ball;
mod cuboid;
mod segment;
mod triangle;
mod trimesh;
