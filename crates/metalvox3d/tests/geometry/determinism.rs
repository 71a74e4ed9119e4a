use metalvox3d::math::{Real, Vector};
use metalvox3d::shape::{Ball, TriMesh};
use metalvox3d::transformation::voxelization::metal_volume;

#[test]
fn repeated_calls_are_bit_identical() {
    let (vtx, idx) = Ball::new(2.0).to_trimesh(24, 12);
    let envelope = TriMesh::new(vtx, idx).unwrap();
    let mut rng = oorandom::Rand32::new(42);

    for _ in 0..10 {
        let spacing = Vector::new(
            0.2 + rng.rand_float() as Real,
            0.2 + rng.rand_float() as Real,
            0.2 + rng.rand_float() as Real,
        );
        let offset = rng.rand_float() as Real - 0.5;
        let bounds = [
            -3.0 + offset,
            3.0,
            -3.0,
            3.0 + offset,
            -2.5,
            2.5,
        ];

        let first = metal_volume(&spacing, &bounds, &envelope, &[], &[], 1.0).unwrap();
        let second = metal_volume(&spacing, &bounds, &envelope, &[], &[], 1.0).unwrap();

        assert_eq!(first.shape(), second.shape());
        assert!(first
            .as_slice()
            .iter()
            .zip(second.as_slice())
            .all(|(a, b)| a.to_bits() == b.to_bits()));
        // Only the fill and background values are ever written.
        assert!(first.as_slice().iter().all(|v| *v == 0.0 || *v == 1.0));
        assert!(first.count_equal(1.0) > 0);
    }
}
