/*!
metalvox3d
==========

**metalvox3d** turns a closed triangle mesh into a regular scalar volume
written with the rust programming language.

The volume is allocated over a user-provided bounding box, filled with a
constant, then every grid sample lying outside of the mesh is reset to a
background value using a polygon-to-image stencil. The result is returned
as a `(z, y, x)` ordered array of `f32`, ready for wall-thickness analysis.

```
# #[cfg(all(feature = "dim3", feature = "f32"))] {
use metalvox3d::math::Vector;
use metalvox3d::shape::{Ball, TriMesh};
use metalvox3d::transformation::voxelization::metal_volume;

let (vertices, indices) = Ball::new(5.0).to_trimesh(32, 16);
let envelope = TriMesh::new(vertices, indices).unwrap();
let bounds = [-5.0, 5.0, -5.0, 5.0, -5.0, 5.0];

let volume = metal_volume(&Vector::repeat(1.0), &bounds, &envelope, &[], &[], 1.0).unwrap();
assert_eq!(volume.shape(), [10, 10, 10]);
assert_eq!(volume[[0, 0, 0]], 0.0);
assert_eq!(volume[[5, 5, 5]], 1.0);
# }
```
*/

#![deny(non_camel_case_types)]
#![deny(unused_parens)]
#![deny(non_upper_case_globals)]
#![deny(unused_results)]
#![deny(missing_docs)]
#![warn(unused_imports)]
#![allow(missing_copy_implementations)]
#![allow(clippy::too_many_arguments)]
#![allow(clippy::module_inception)]
#![allow(clippy::manual_range_contains)] // This usually makes it way more verbose that it could be.
#![deny(unused_qualifications)]

#[cfg(all(feature = "f32", feature = "f64"))]
std::compile_error!("The `f32` and `f64` features are mutually exclusive.");

#[cfg(feature = "serde-serialize")]
#[macro_use]
extern crate serde;
#[macro_use]
extern crate approx;
extern crate num_traits as num;

pub extern crate nalgebra as na;

pub mod bounding_volume;
pub mod query;
pub mod shape;
pub mod transformation;

mod real {
    /// The scalar type used throughout this crate.
    #[cfg(feature = "f64")]
    pub use f64 as Real;

    /// The scalar type used throughout this crate.
    #[cfg(feature = "f32")]
    pub use f32 as Real;
}

/// Compilation flags dependent aliases for mathematical types.
#[cfg(feature = "dim3")]
pub mod math {
    pub use super::real::*;
    pub use na::{Isometry3, Point3, Vector3};

    /// The dimension of the space.
    pub const DIM: usize = 3;

    /// The point type.
    pub use Point3 as Point;

    /// The vector type.
    pub use Vector3 as Vector;

    /// The transformation matrix type.
    pub use Isometry3 as Isometry;
}
