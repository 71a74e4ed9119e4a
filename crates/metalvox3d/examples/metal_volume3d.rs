use metalvox3d::math::{Isometry, Vector};
use metalvox3d::shape::{Ball, Cuboid, TriMesh};
use metalvox3d::transformation::voxelization::metal_volume;

fn main() {
    /*
     * Build the envelope of a part and one core.
     */
    let (vertices, indices) = Ball::new(10.0).to_trimesh(64, 32);
    let envelope = TriMesh::new(vertices, indices).expect("the ball mesh is valid");
    let (vertices, indices) = Cuboid::new(Vector::new(2.0, 2.0, 2.0)).to_trimesh();
    let core = TriMesh::new(vertices, indices).expect("the cuboid mesh is valid");

    /*
     * Voxelize the part over its bounding box.
     */
    let bounds = envelope.local_aabb().xyz_bounds();
    let spacing = Vector::new(0.5, 0.5, 0.5);
    let volume = metal_volume(
        &spacing,
        &bounds,
        &envelope,
        &[core],
        &[Isometry::identity()],
        1.0,
    )
    .expect("voxelization failed");

    let [nz, ny, nx] = volume.shape();
    let expected = 4.0 / 3.0 * std::f32::consts::PI * 1000.0;
    println!("Volume shape (z, y, x): ({nz}, {ny}, {nx})");
    println!(
        "Metal volume: {:.1} (analytic ball volume: {:.1})",
        volume.filled_volume(1.0),
        expected
    );

    // Print the middle slice.
    for j in 0..ny {
        let row: String = (0..nx)
            .map(|i| if volume[[nz / 2, j, i]] == 1.0 { '#' } else { '.' })
            .collect();
        println!("{row}");
    }
}
