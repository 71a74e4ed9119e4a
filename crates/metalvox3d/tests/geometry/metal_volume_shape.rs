use metalvox3d::bounding_volume::Aabb;
use metalvox3d::math::{Point, Real, Vector};
use metalvox3d::shape::{Ball, TriMesh};
use metalvox3d::transformation::voxelization::{metal_volume, VoxelizationOptions, Voxelizer};

fn box_mesh(bounds: [Real; 6]) -> TriMesh {
    let (vtx, idx) = Aabb::from_xyz_bounds(&bounds).to_trimesh();
    TriMesh::new(vtx, idx).unwrap()
}

#[test]
fn shape_rounds_up_non_integer_ratios() {
    let bounds = [0.0, 10.5, 0.0, 3.0, 0.0, 2.2];
    let volume = metal_volume(
        &Vector::repeat(1.0),
        &bounds,
        &box_mesh(bounds),
        &[],
        &[],
        1.0,
    )
    .unwrap();

    assert_eq!(volume.shape(), [3, 3, 11]);
    assert_eq!((volume.nz(), volume.ny(), volume.nx()), (3, 3, 11));
    assert_eq!(volume.len(), 99);
    // Every sample point is within the envelope.
    assert_eq!(volume.count_equal(1.0), 99);
}

#[test]
fn shape_with_anisotropic_spacing() {
    let bounds = [0.0, 4.0, 0.0, 4.0, 0.0, 4.0];
    let volume = metal_volume(
        &Vector::new(0.5, 1.0, 2.0),
        &bounds,
        &box_mesh(bounds),
        &[],
        &[],
        1.0,
    )
    .unwrap();

    assert_eq!(volume.shape(), [2, 4, 8]);
    assert_eq!(volume.voxel_volume(), 1.0);
    assert_eq!(volume.filled_volume(1.0), 64.0);
    assert_eq!(volume.sample_point(1, 3, 7), Point::new(3.5, 3.0, 2.0));
}

#[test]
fn exact_fit_envelope_is_full() {
    let bounds = [0.0, 10.0, 0.0, 10.0, 0.0, 10.0];
    let volume = metal_volume(
        &Vector::repeat(1.0),
        &bounds,
        &box_mesh(bounds),
        &[],
        &[],
        2.0,
    )
    .unwrap();

    assert_eq!(volume.shape(), [10, 10, 10]);
    assert!(volume.as_slice().iter().all(|v| *v == 2.0));
}

#[test]
fn offset_envelope() {
    let volume = metal_volume(
        &Vector::repeat(1.0),
        &[0.0, 10.0, 0.0, 10.0, 0.0, 10.0],
        &box_mesh([2.0, 6.0, 2.0, 6.0, 2.0, 6.0]),
        &[],
        &[],
        1.0,
    )
    .unwrap();

    assert_eq!(volume.count_equal(1.0), 64);
    assert_eq!(volume.count_equal(0.0), 1000 - 64);

    for k in 0..10 {
        for j in 0..10 {
            for i in 0..10 {
                let inside = (2..6).contains(&i) && (2..6).contains(&j) && (2..6).contains(&k);
                let expected = if inside { 1.0 } else { 0.0 };
                assert_eq!(volume[[k, j, i]], expected, "voxel [{k}, {j}, {i}]");
            }
        }
    }
}

#[test]
fn envelope_outside_of_bounds() {
    let volume = metal_volume(
        &Vector::repeat(1.0),
        &[0.0, 4.0, 0.0, 4.0, 0.0, 4.0],
        &box_mesh([10.0, 12.0, 10.0, 12.0, 10.0, 12.0]),
        &[],
        &[],
        1.0,
    )
    .unwrap();

    assert_eq!(volume.count_equal(0.0), 64);
}

#[test]
fn sphere_volume() {
    let (vtx, idx) = Ball::new(5.0).to_trimesh(32, 16);
    let envelope = TriMesh::new(vtx, idx).unwrap();
    let bounds = [-6.0, 6.0, -6.0, 6.0, -6.0, 6.0];
    let volume = metal_volume(&Vector::repeat(0.5), &bounds, &envelope, &[], &[], 1.0).unwrap();

    assert_eq!(volume.shape(), [24, 24, 24]);
    assert_eq!(volume.origin(), &Point::new(-6.0, -6.0, -6.0));

    // Corners are outside, the center is inside.
    for corner in [[0, 0, 0], [0, 0, 23], [0, 23, 0], [23, 0, 0], [23, 23, 23]] {
        assert_eq!(volume[corner], 0.0);
    }
    assert_eq!(volume[[12, 12, 12]], 1.0);

    let expected = 4.0 / 3.0 * std::f64::consts::PI * 125.0;
    let actual = volume.filled_volume(1.0) as f64;
    assert!(
        (actual - expected).abs() < expected * 0.1,
        "{actual} vs. {expected}"
    );
}

#[test]
fn custom_values() {
    let bounds = [0.0, 6.0, 0.0, 6.0, 0.0, 6.0];
    let envelope = box_mesh([1.0, 5.0, 1.0, 5.0, 1.0, 5.0]);

    let voxelizer = Voxelizer::new(VoxelizationOptions {
        fill_value: 3.0,
        background_value: -1.0,
        reverse_stencil: false,
    });
    let volume = voxelizer
        .voxelize(&Vector::repeat(1.0), &bounds, &envelope, &[], &[])
        .unwrap();
    assert_eq!(volume.count_equal(3.0), 64);
    assert_eq!(volume.count_equal(-1.0), 216 - 64);
    assert_eq!(volume[[0, 0, 0]], -1.0);
    assert_eq!(volume[[1, 1, 1]], 3.0);

    let reversed = Voxelizer::new(VoxelizationOptions {
        reverse_stencil: true,
        ..VoxelizationOptions::default()
    })
    .voxelize(&Vector::repeat(1.0), &bounds, &envelope, &[], &[])
    .unwrap();
    assert_eq!(reversed.count_equal(0.0), 64);
    assert_eq!(reversed.count_equal(1.0), 216 - 64);
    assert_eq!(reversed[[0, 0, 0]], 1.0);
    assert_eq!(reversed[[1, 1, 1]], 0.0);
}

#[test]
fn voxelize_aabb_matches_flat_bounds() {
    let bounds = [-1.0, 3.0, 0.0, 2.0, 0.5, 4.5];
    let envelope = box_mesh([0.0, 2.0, 0.0, 2.0, 1.0, 3.0]);
    let voxelizer: Voxelizer = Voxelizer::default();
    let spacing = Vector::new(0.5, 0.5, 1.0);

    let from_flat = voxelizer
        .voxelize(&spacing, &bounds, &envelope, &[], &[])
        .unwrap();
    let from_aabb = voxelizer
        .voxelize_aabb(&spacing, &Aabb::from_xyz_bounds(&bounds), &envelope, &[], &[])
        .unwrap();

    assert_eq!(from_flat, from_aabb);
    assert_eq!(from_flat.shape(), [4, 4, 8]);
}

#[test]
fn sphere_fitting_the_bounds() {
    let (vtx, idx) = Ball::new(5.0).to_trimesh(32, 16);
    let envelope = TriMesh::new(vtx, idx).unwrap();
    let bounds = [-5.0, 5.0, -5.0, 5.0, -5.0, 5.0];
    let volume = metal_volume(&Vector::repeat(1.0), &bounds, &envelope, &[], &[], 4.0).unwrap();

    assert_eq!(volume.shape(), [10, 10, 10]);
    for z in [0, 9] {
        for y in [0, 9] {
            for x in [0, 9] {
                assert_eq!(volume[[z, y, x]], 0.0);
            }
        }
    }
    assert_eq!(volume[[5, 5, 5]], 4.0);
    assert!(volume.as_slice().iter().all(|v| *v == 0.0 || *v == 4.0));
}
