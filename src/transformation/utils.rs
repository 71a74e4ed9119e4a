//! Low-level utilities for mesh generation.
//!
//! These are the building blocks of the shape-to-mesh conversions of
//! [`to_trimesh`](crate::transformation) and are exposed for users who want to build their
//! own envelopes.

use crate::math::{Point, Real, Vector};
use na::ComplexField;

/// Returns the scaled version of a vector of points.
///
/// # Example
///
/// ```
/// # #[cfg(all(feature = "dim3", feature = "f32"))] {
/// use metalvox3d::transformation::utils::scaled;
/// use metalvox3d::math::{Point, Vector};
///
/// let points = vec![Point::new(1.0, 2.0, 3.0), Point::new(4.0, 5.0, 6.0)];
/// let result = scaled(points, Vector::new(2.0, 3.0, 0.5));
///
/// assert_eq!(result[0], Point::new(2.0, 6.0, 1.5));
/// assert_eq!(result[1], Point::new(8.0, 15.0, 3.0));
/// # }
/// ```
pub fn scaled(mut points: Vec<Point<Real>>, scale: Vector<Real>) -> Vec<Point<Real>> {
    points
        .iter_mut()
        .for_each(|p| p.coords.component_mul_assign(&scale));
    points
}

/// Pushes a discretized counterclockwise circle to a buffer.
///
/// The circle lies on the plane `Y = y` and its first point is `(radius, y, 0)`.
#[inline]
pub fn push_circle(radius: Real, nsubdiv: u32, dtheta: Real, y: Real, out: &mut Vec<Point<Real>>) {
    for i in 0..nsubdiv {
        let curr_theta = dtheta * (i as Real);
        out.push(Point::new(
            ComplexField::cos(curr_theta) * radius,
            y,
            ComplexField::sin(curr_theta) * radius,
        ));
    }
}

/// Creates the triangle faces connecting two circles with the same discretization.
///
/// The ring wraps around completely, connecting the last points back to the first.
///
/// # Example
///
/// ```
/// # #[cfg(all(feature = "dim3", feature = "f32"))] {
/// use metalvox3d::transformation::utils::{push_circle, push_ring_indices};
/// use std::f32::consts::PI;
///
/// let mut vertices = Vec::new();
/// let mut indices = Vec::new();
/// let nsubdiv = 8;
/// let dtheta = 2.0 * PI / nsubdiv as f32;
///
/// push_circle(2.0, nsubdiv, dtheta, 0.0, &mut vertices);
/// push_circle(2.0, nsubdiv, dtheta, 5.0, &mut vertices);
/// push_ring_indices(0, nsubdiv, nsubdiv, &mut indices);
///
/// assert_eq!(indices.len(), 2 * nsubdiv as usize);
/// # }
/// ```
#[inline]
pub fn push_ring_indices(
    base_lower_circle: u32,
    base_upper_circle: u32,
    nsubdiv: u32,
    out: &mut Vec<[u32; 3]>,
) {
    push_open_ring_indices(base_lower_circle, base_upper_circle, nsubdiv, out);

    // adjust the last two triangles
    push_rectangle_indices(
        base_upper_circle,
        base_upper_circle + nsubdiv - 1,
        base_lower_circle,
        base_lower_circle + nsubdiv - 1,
        out,
    );
}

/// Creates the triangle faces connecting two circles, leaving the ring open.
///
/// # Panics
/// Panics if `nsubdiv` is 0.
#[inline]
pub fn push_open_ring_indices(
    base_lower_circle: u32,
    base_upper_circle: u32,
    nsubdiv: u32,
    out: &mut Vec<[u32; 3]>,
) {
    assert!(nsubdiv > 0);

    for i in 0..nsubdiv - 1 {
        let bli = base_lower_circle + i;
        let bui = base_upper_circle + i;
        push_rectangle_indices(bui + 1, bui, bli + 1, bli, out);
    }
}

/// Creates the faces from a circle and a point above it that is shared by all triangles.
#[inline]
pub fn push_degenerate_top_ring_indices(
    base_circle: u32,
    point: u32,
    nsubdiv: u32,
    out: &mut Vec<[u32; 3]>,
) {
    assert!(nsubdiv > 0);

    for i in 0..nsubdiv - 1 {
        out.push([base_circle + i, point, base_circle + i + 1]);
    }

    out.push([base_circle + nsubdiv - 1, point, base_circle]);
}

/// Creates the faces from a circle and a point below it that is shared by all triangles.
///
/// The faces are wound in the opposite order of [`push_degenerate_top_ring_indices`] so
/// that they face away from the circle's upper side.
#[inline]
pub fn push_degenerate_bottom_ring_indices(
    base_circle: u32,
    point: u32,
    nsubdiv: u32,
    out: &mut Vec<[u32; 3]>,
) {
    assert!(nsubdiv > 0);

    for i in 0..nsubdiv - 1 {
        out.push([base_circle + i + 1, point, base_circle + i]);
    }

    out.push([base_circle, point, base_circle + nsubdiv - 1]);
}

/// Pushes two triangles forming a rectangle to the index buffer.
///
/// # Example
///
/// ```
/// # #[cfg(all(feature = "dim3", feature = "f32"))] {
/// use metalvox3d::transformation::utils::push_rectangle_indices;
///
/// let mut indices = Vec::new();
///
/// // Layout:  0 --- 1
/// //          |     |
/// //          2 --- 3
/// push_rectangle_indices(0, 1, 2, 3, &mut indices);
///
/// assert_eq!(indices, vec![[0, 2, 3], [3, 1, 0]]);
/// # }
/// ```
#[inline]
pub fn push_rectangle_indices(ul: u32, ur: u32, dl: u32, dr: u32, out: &mut Vec<[u32; 3]>) {
    out.push([ul, dl, dr]);
    out.push([dr, ur, ul]);
}
