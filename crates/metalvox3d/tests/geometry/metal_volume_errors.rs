use metalvox3d::bounding_volume::Aabb;
use metalvox3d::math::{Isometry, Point, Real, Vector};
use metalvox3d::shape::TriMesh;
use metalvox3d::transformation::voxelization::{
    metal_volume, RasterizationError, VoxelizationError,
};

fn envelope() -> TriMesh {
    let (vtx, idx) = Aabb::new(Point::origin(), Point::new(2.0, 2.0, 2.0)).to_trimesh();
    TriMesh::new(vtx, idx).unwrap()
}

#[test]
fn degenerate_bounds() {
    let spacing = Vector::repeat(1.0);

    for (bounds, axis) in [
        ([0.0, 0.0, 0.0, 2.0, 0.0, 2.0], 0),
        ([0.0, 2.0, 2.0, 0.0, 0.0, 2.0], 1),
        ([0.0, 2.0, 0.0, 2.0, 5.0, 1.0], 2),
    ] {
        let err = metal_volume(&spacing, &bounds, &envelope(), &[], &[], 1.0).unwrap_err();

        match err {
            VoxelizationError::DegenerateGeometry { axis: a, .. } => assert_eq!(a, axis),
            _ => panic!("unexpected error: {err:?}"),
        }

        assert!(err.to_string().contains("Check the mesh units or geometry"));
    }
}

#[test]
fn invalid_spacing() {
    let bounds = [0.0, 2.0, 0.0, 2.0, 0.0, 2.0];

    for spacing in [
        Vector::new(0.0, 1.0, 1.0),
        Vector::new(1.0, -0.5, 1.0),
        Vector::new(1.0, 1.0, Real::INFINITY),
    ] {
        let err = metal_volume(&spacing, &bounds, &envelope(), &[], &[], 1.0).unwrap_err();
        assert!(
            matches!(err, VoxelizationError::DegenerateGeometry { .. }),
            "{err:?}"
        );
    }
}

#[test]
fn mismatched_core_lists() {
    let bounds = [0.0, 2.0, 0.0, 2.0, 0.0, 2.0];
    let err = metal_volume(
        &Vector::repeat(1.0),
        &bounds,
        &envelope(),
        &[envelope()],
        &[Isometry::identity(), Isometry::translation(1.0, 0.0, 0.0)],
        1.0,
    )
    .unwrap_err();

    assert_eq!(
        err,
        VoxelizationError::MismatchedInputLists {
            num_cores: 1,
            num_transforms: 2
        }
    );

    let err = metal_volume(
        &Vector::repeat(1.0),
        &bounds,
        &envelope(),
        &[],
        &[Isometry::identity()],
        1.0,
    )
    .unwrap_err();
    assert!(matches!(
        err,
        VoxelizationError::MismatchedInputLists {
            num_cores: 0,
            num_transforms: 1
        }
    ));
}

#[test]
fn non_finite_envelope() {
    let mut vertices = envelope().vertices().to_vec();
    vertices[0].x = Real::NAN;
    let broken = TriMesh::new(vertices, envelope().indices().to_vec()).unwrap();

    let err = metal_volume(
        &Vector::repeat(1.0),
        &[0.0, 2.0, 0.0, 2.0, 0.0, 2.0],
        &broken,
        &[],
        &[],
        1.0,
    )
    .unwrap_err();

    assert_eq!(
        err,
        VoxelizationError::Rasterization(RasterizationError::NonFiniteVertex(0))
    );
    assert_eq!(
        err.to_string(),
        RasterizationError::NonFiniteVertex(0).to_string()
    );
}

#[test]
fn unallocatable_grid() {
    let err = metal_volume(
        &Vector::repeat(4.0e-7),
        &[0.0, 1.0, 0.0, 1.0, 0.0, 1.0],
        &envelope(),
        &[],
        &[],
        1.0,
    )
    .unwrap_err();

    assert!(
        matches!(err, VoxelizationError::GridTooLarge { .. }),
        "{err:?}"
    );
}
