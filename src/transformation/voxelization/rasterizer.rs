use super::grid::sample_range;
use super::{GridExtent, ImageStencil, RasterizationError};
use crate::bounding_volume::Aabb;
use crate::math::{Point, Real, Vector};
use crate::query::IntersectResult;
use crate::shape::TriMesh;
use ordered_float::OrderedFloat;
use smallvec::SmallVec;

/// A method for computing which points of a regular grid lie inside of a triangle mesh.
///
/// This is the only geometric operation needed by the [`Voxelizer`](super::Voxelizer).
/// Implement this trait to plug a different mesh-to-stencil backend.
pub trait MeshRasterizer {
    /// Computes the stencil of the grid points inside of `envelope`.
    ///
    /// The grid point `(i, j, k)` of `extent` is located at `origin + (i, j, k) * spacing`.
    /// The returned stencil must cover `extent`.
    fn rasterize(
        &self,
        envelope: &TriMesh,
        origin: &Point<Real>,
        spacing: &Vector<Real>,
        extent: &GridExtent,
    ) -> Result<ImageStencil, RasterizationError>;
}

impl<R: MeshRasterizer + ?Sized> MeshRasterizer for &R {
    fn rasterize(
        &self,
        envelope: &TriMesh,
        origin: &Point<Real>,
        spacing: &Vector<Real>,
        extent: &GridExtent,
    ) -> Result<ImageStencil, RasterizationError> {
        (**self).rasterize(envelope, origin, spacing, extent)
    }
}

/// A scan-conversion rasterizer based on the even-odd rule.
///
/// The mesh is sliced by every `z = const` plane of the grid. Each slice is a set of 2D
/// segments which are then intersected with every `y = const` line of the grid. Sorted
/// crossings along a line are paired into `[x_in, x_out)` spans, and the grid points with
/// `x_in <= x < x_out` are inside.
///
/// Planes and lines use a half-open convention: a vertex lying exactly on a plane is
/// considered below it. As a result, grid points exactly on a lower face of the mesh are
/// inside while grid points exactly on an upper face are outside.
///
/// The mesh is expected to be closed. If a line crosses the mesh an odd number of times, the
/// last crossing is ignored and a warning is logged.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct ScanlineRasterizer;

impl ScanlineRasterizer {
    /// Creates a new scan-conversion rasterizer.
    pub fn new() -> Self {
        Self
    }
}

impl MeshRasterizer for ScanlineRasterizer {
    fn rasterize(
        &self,
        envelope: &TriMesh,
        origin: &Point<Real>,
        spacing: &Vector<Real>,
        extent: &GridExtent,
    ) -> Result<ImageStencil, RasterizationError> {
        if let Some(vid) = envelope
            .vertices()
            .iter()
            .position(|pt| pt.coords.iter().any(|c| !c.is_finite()))
        {
            return Err(RasterizationError::NonFiniteVertex(vid as u32));
        }

        if spacing.iter().any(|s| !(*s > 0.0) || !s.is_finite()) {
            return Err(RasterizationError::InvalidSpacing([
                spacing.x, spacing.y, spacing.z,
            ]));
        }

        if extent.is_empty() {
            return Err(RasterizationError::EmptyExtent(*extent));
        }

        let mut stencil = ImageStencil::empty(*extent);
        let grid_point = |pt: &Point<i32>| {
            *origin + Vector::new(pt.x as Real, pt.y as Real, pt.z as Real).component_mul(spacing)
        };
        let grid_aabb = Aabb::new(grid_point(&extent.mins), grid_point(&extent.maxs));

        if !envelope.local_aabb().intersects(&grid_aabb) {
            log::debug!("The envelope does not overlap the voxel grid.");
            return Ok(stencil);
        }

        let num_slices = extent.dims()[2];
        let num_rows = extent.dims()[1];

        // The triangles possibly crossing each `z = const` plane.
        let mut slice_triangles = vec![vec![]; num_slices];

        for (tri_id, tri) in envelope.triangles().enumerate() {
            let (zmin, zmax) = tri.extents_on_axis(2);

            if let Some(range) = sample_range(
                zmin,
                zmax,
                origin.z,
                spacing.z,
                extent.mins.z,
                extent.maxs.z,
            ) {
                for k in range {
                    slice_triangles[(k - extent.mins.z) as usize].push(tri_id as u32);
                }
            }
        }

        let mut segments = vec![];
        let mut row_segments: Vec<Vec<u32>> = vec![vec![]; num_rows];
        let mut crossings: SmallVec<[OrderedFloat<Real>; 8]> = SmallVec::new();
        let mut runs: SmallVec<[[i32; 2]; 4]> = SmallVec::new();
        let mut num_open_rows = 0;

        for k in extent.axis_range(2) {
            let slice_id = (k - extent.mins.z) as usize;

            if slice_triangles[slice_id].is_empty() {
                continue;
            }

            let z = origin.z + k as Real * spacing.z;
            segments.clear();
            row_segments.iter_mut().for_each(|row| row.clear());

            for tri_id in &slice_triangles[slice_id] {
                if let IntersectResult::Intersect(segment) = envelope
                    .triangle(*tri_id)
                    .canonical_intersection_with_plane(2, z)
                {
                    segments.push(segment);
                }
            }

            for (seg_id, segment) in segments.iter().enumerate() {
                let ymin = segment.a.y.min(segment.b.y);
                let ymax = segment.a.y.max(segment.b.y);

                if let Some(range) = sample_range(
                    ymin,
                    ymax,
                    origin.y,
                    spacing.y,
                    extent.mins.y,
                    extent.maxs.y,
                ) {
                    for j in range {
                        row_segments[(j - extent.mins.y) as usize].push(seg_id as u32);
                    }
                }
            }

            for j in extent.axis_range(1) {
                let row = &row_segments[(j - extent.mins.y) as usize];

                if row.is_empty() {
                    continue;
                }

                let y = origin.y + j as Real * spacing.y;
                crossings.clear();
                crossings.extend(row.iter().filter_map(|seg_id| {
                    match segments[*seg_id as usize].canonical_intersection_with_plane(1, y) {
                        IntersectResult::Intersect(pt) => Some(OrderedFloat(pt.x)),
                        _ => None,
                    }
                }));

                if crossings.is_empty() {
                    continue;
                }

                crossings.sort_unstable();

                if crossings.len() % 2 == 1 {
                    let _ = crossings.pop();
                    num_open_rows += 1;
                }

                runs.clear();
                runs.extend(crossings.chunks_exact(2).filter_map(|span| {
                    span_to_run(span[0].0, span[1].0, origin.x, spacing.x, extent)
                }));

                if !runs.is_empty() {
                    stencil.push_row(j, k, runs.drain(..));
                }
            }
        }

        if num_open_rows > 0 {
            log::warn!(
                "The envelope is not closed: {} grid rows crossed it an odd number of times.",
                num_open_rows
            );
        }

        log::debug!(
            "Rasterized {} triangles: {} of {} grid points are inside.",
            envelope.num_triangles(),
            stencil.num_inside(),
            extent.num_points()
        );

        Ok(stencil)
    }
}

/// The inclusive index range of the grid points `x` such that `x_in <= x < x_out`.
fn span_to_run(
    x_in: Real,
    x_out: Real,
    origin: Real,
    spacing: Real,
    extent: &GridExtent,
) -> Option<[i32; 2]> {
    let lo = extent.mins.x as i64;
    let hi = extent.maxs.x as i64;
    let first = (((x_in - origin) / spacing).ceil() as i64).max(lo);
    let last = ((((x_out - origin) / spacing).ceil() as i64) - 1).min(hi);
    (first <= last).then_some([first as i32, last as i32])
}
