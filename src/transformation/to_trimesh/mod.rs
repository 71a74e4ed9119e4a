//! Triangle mesh generation from geometric shapes.
//!
//! Each shape here implements a `to_trimesh()` method that discretizes its boundary into
//! a closed triangle mesh, returned as a pair `(Vec<Point<Real>>, Vec<[u32; 3]>)` of vertex
//! and index buffers. These are convenient envelopes for voxelization:
//!
//! ```
//! # #[cfg(all(feature = "dim3", feature = "f32"))] {
//! use metalvox3d::math::Vector;
//! use metalvox3d::shape::{Ball, Cuboid, TriMesh};
//!
//! let (vertices, indices) = Cuboid::new(Vector::new(1.0, 2.0, 3.0)).to_trimesh();
//! assert_eq!(vertices.len(), 8);
//! assert_eq!(indices.len(), 12);
//!
//! let (vertices, indices) = Ball::new(5.0).to_trimesh(16, 8);
//! let envelope = TriMesh::new(vertices, indices).unwrap();
//! assert_eq!(envelope.num_triangles(), 2 * 16 * 7);
//! # }
//! ```
//!
//! The triangles follow a counter-clockwise winding order when viewed from outside the shape.
//! Vertices are never duplicated along seams or at the poles, so the generated meshes are
//! watertight.

mod ball_to_trimesh;
mod cuboid_to_trimesh;
