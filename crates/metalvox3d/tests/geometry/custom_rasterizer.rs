use metalvox3d::bounding_volume::Aabb;
use metalvox3d::math::{Point, Real, Vector};
use metalvox3d::shape::TriMesh;
use metalvox3d::transformation::voxelization::{
    GridExtent, ImageStencil, MeshRasterizer, RasterizationError, ScanlineRasterizer,
    VoxelizationError, VoxelizationOptions, Voxelizer,
};
use std::cell::Cell;

/// Marks every grid point as inside, and records the extents it was called with.
#[derive(Default)]
struct FullRasterizer {
    calls: Cell<usize>,
    last_extent: Cell<Option<GridExtent>>,
}

impl MeshRasterizer for FullRasterizer {
    fn rasterize(
        &self,
        _envelope: &TriMesh,
        _origin: &Point<Real>,
        _spacing: &Vector<Real>,
        extent: &GridExtent,
    ) -> Result<ImageStencil, RasterizationError> {
        self.calls.set(self.calls.get() + 1);
        self.last_extent.set(Some(*extent));
        Ok(ImageStencil::full(*extent))
    }
}

/// Reports the runs of each row in decreasing order.
struct UnsortedRasterizer;

impl MeshRasterizer for UnsortedRasterizer {
    fn rasterize(
        &self,
        _envelope: &TriMesh,
        _origin: &Point<Real>,
        _spacing: &Vector<Real>,
        extent: &GridExtent,
    ) -> Result<ImageStencil, RasterizationError> {
        let mut stencil = ImageStencil::empty(*extent);

        for k in extent.mins.z..=extent.maxs.z {
            for j in extent.mins.y..=extent.maxs.y {
                stencil.push_row(j, k, [[2, 3], [0, 1]]);
            }
        }

        Ok(stencil)
    }
}

struct FailingRasterizer;

impl MeshRasterizer for FailingRasterizer {
    fn rasterize(
        &self,
        _envelope: &TriMesh,
        _origin: &Point<Real>,
        _spacing: &Vector<Real>,
        _extent: &GridExtent,
    ) -> Result<ImageStencil, RasterizationError> {
        Err(RasterizationError::Backend("license expired".to_string()))
    }
}

fn envelope() -> TriMesh {
    let (vtx, idx) = Aabb::new(Point::new(1.0, 1.0, 1.0), Point::new(2.0, 2.0, 2.0)).to_trimesh();
    TriMesh::new(vtx, idx).unwrap()
}

#[test]
fn custom_rasterizer_is_used() {
    let voxelizer = Voxelizer::with_rasterizer(VoxelizationOptions::default(), FullRasterizer::default());
    let volume = voxelizer
        .voxelize(
            &Vector::new(1.0, 0.5, 0.25),
            &[0.0, 3.0, 0.0, 3.0, 0.0, 3.0],
            &envelope(),
            &[],
            &[],
        )
        .unwrap();

    assert_eq!(voxelizer.rasterizer().calls.get(), 1);
    assert_eq!(
        voxelizer.rasterizer().last_extent.get(),
        Some(GridExtent::new(Point::origin(), Point::new(3, 6, 12)))
    );
    assert_eq!(volume.shape(), [12, 6, 3]);
    assert!(volume.as_slice().iter().all(|v| *v == 1.0));
}

#[test]
fn unsorted_runs_are_accepted() {
    let voxelizer = Voxelizer::with_rasterizer(VoxelizationOptions::default(), UnsortedRasterizer);
    let volume = voxelizer
        .voxelize(
            &Vector::repeat(1.0),
            &[0.0, 6.0, 0.0, 2.0, 0.0, 2.0],
            &envelope(),
            &[],
            &[],
        )
        .unwrap();

    assert_eq!(volume.shape(), [2, 2, 6]);
    for k in 0..2 {
        for j in 0..2 {
            let row: Vec<_> = (0..6).map(|i| volume[[k, j, i]]).collect();
            assert_eq!(row, vec![1.0, 1.0, 1.0, 1.0, 0.0, 0.0]);
        }
    }
}

#[test]
fn rasterizer_errors_propagate() {
    let voxelizer = Voxelizer::with_rasterizer(VoxelizationOptions::default(), FailingRasterizer);
    let err = voxelizer
        .voxelize(
            &Vector::repeat(1.0),
            &[0.0, 3.0, 0.0, 3.0, 0.0, 3.0],
            &envelope(),
            &[],
            &[],
        )
        .unwrap_err();

    assert_eq!(
        err,
        VoxelizationError::Rasterization(RasterizationError::Backend(
            "license expired".to_string()
        ))
    );
    assert_eq!(err.to_string(), "rasterization backend failure: license expired");
}

#[test]
fn validation_happens_before_rasterization() {
    let voxelizer = Voxelizer::with_rasterizer(VoxelizationOptions::default(), FullRasterizer::default());
    let err = voxelizer
        .voxelize(
            &Vector::repeat(1.0),
            &[0.0, 3.0, 0.0, 3.0, 0.0, 3.0],
            &envelope(),
            &[envelope()],
            &[],
        )
        .unwrap_err();

    assert!(matches!(err, VoxelizationError::MismatchedInputLists { .. }));
    assert_eq!(voxelizer.rasterizer().calls.get(), 0);
}

#[test]
fn rasterizer_by_reference() {
    let rasterizer = ScanlineRasterizer::new();
    let by_ref = Voxelizer::with_rasterizer(VoxelizationOptions::default(), &rasterizer);
    let by_value = Voxelizer::new(VoxelizationOptions::default());
    let bounds = [0.0, 3.0, 0.0, 3.0, 0.0, 3.0];

    assert_eq!(
        by_ref.voxelize(&Vector::repeat(1.0), &bounds, &envelope(), &[], &[]),
        by_value.voxelize(&Vector::repeat(1.0), &bounds, &envelope(), &[], &[])
    );
}
