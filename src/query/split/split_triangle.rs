use super::split_segment::plane_crossing;
use crate::math::Real;
use crate::query::IntersectResult;
use crate::shape::{Segment, Triangle};

impl Triangle {
    /// Computes the intersection of this triangle with the plane orthogonal to the `axis`-th
    /// canonical axis and passing through the point with `axis`-th coordinate equal to `bias`.
    ///
    /// Vertices lying exactly on the plane are considered part of the negative half-space
    /// (see [`IntersectResult`]), so a triangle with one vertex on the plane and the other two
    /// below it does not intersect the plane. Each edge crossing is computed with
    /// [`Segment::canonical_intersection_with_plane`], so two triangles sharing an edge
    /// generate bit-identical intersection points on that edge.
    pub fn canonical_intersection_with_plane(
        &self,
        axis: usize,
        bias: Real,
    ) -> IntersectResult<Segment> {
        let vertices = self.vertices();
        let below = vertices.map(|pt| pt[axis] <= bias);

        if below.iter().all(|b| *b) {
            return IntersectResult::Negative;
        }

        if !below.iter().any(|b| *b) {
            return IntersectResult::Positive;
        }

        // Exactly two edges cross the plane.
        let mut crossings = [vertices[0]; 2];
        let mut num_crossings = 0;

        for i in 0..3 {
            let j = (i + 1) % 3;

            if below[i] != below[j] {
                let (lo, hi) = if below[i] {
                    (&vertices[i], &vertices[j])
                } else {
                    (&vertices[j], &vertices[i])
                };
                crossings[num_crossings] = plane_crossing(lo, hi, axis, bias);
                num_crossings += 1;
            }
        }

        IntersectResult::Intersect(Segment::new(crossings[0], crossings[1]))
    }
}
