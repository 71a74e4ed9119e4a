use crate::math::{Point, Real, Vector};
use crate::shape::Ball;
use crate::transformation::utils;
use na::{ComplexField, RealField};

impl Ball {
    /// Discretize the boundary of this ball as a triangle-mesh.
    ///
    /// The sphere is made of `nphi_subdiv - 1` horizontal rings of `ntheta_subdiv` vertices
    /// each, closed by a single vertex at each pole.
    ///
    /// # Panics
    /// Panics if `ntheta_subdiv < 3` or `nphi_subdiv < 2`.
    pub fn to_trimesh(
        &self,
        ntheta_subdiv: u32,
        nphi_subdiv: u32,
    ) -> (Vec<Point<Real>>, Vec<[u32; 3]>) {
        let diameter = self.radius * 2.0;
        let (vtx, idx) = unit_sphere(ntheta_subdiv, nphi_subdiv);
        (utils::scaled(vtx, Vector::repeat(diameter)), idx)
    }
}

/// Creates a closed sphere with a diameter of 1.
fn unit_sphere(ntheta_subdiv: u32, nphi_subdiv: u32) -> (Vec<Point<Real>>, Vec<[u32; 3]>) {
    assert!(ntheta_subdiv >= 3 && nphi_subdiv >= 2);

    let dtheta = Real::two_pi() / (ntheta_subdiv as Real);
    let dphi = Real::pi() / (nphi_subdiv as Real);

    let mut coords = Vec::new();
    coords.push(Point::new(0.0, -1.0, 0.0));

    for i in 1..nphi_subdiv {
        let curr_phi = -Real::frac_pi_2() + dphi * (i as Real);
        utils::push_circle(
            ComplexField::cos(curr_phi),
            ntheta_subdiv,
            dtheta,
            ComplexField::sin(curr_phi),
            &mut coords,
        );
    }

    coords.push(Point::new(0.0, 1.0, 0.0));

    let num_rings = nphi_subdiv - 1;
    let ring_base = |ring: u32| 1 + ring * ntheta_subdiv;
    let mut idx = Vec::new();

    utils::push_degenerate_bottom_ring_indices(ring_base(0), 0, ntheta_subdiv, &mut idx);

    for ring in 0..num_rings - 1 {
        utils::push_ring_indices(ring_base(ring), ring_base(ring + 1), ntheta_subdiv, &mut idx);
    }

    utils::push_degenerate_top_ring_indices(
        ring_base(num_rings - 1),
        coords.len() as u32 - 1,
        ntheta_subdiv,
        &mut idx,
    );

    (utils::scaled(coords, Vector::repeat(0.5)), idx)
}
