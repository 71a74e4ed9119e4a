/// The result of a plane-intersection operation.
///
/// A point lying exactly on the plane is considered part of the negative half-space. With
/// this half-open convention, two shapes sharing a vertex or an edge always agree on which
/// side of the plane that vertex or edge lies.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum IntersectResult<T> {
    /// The intersect operation yielded a result, lying in the plane.
    Intersect(T),
    /// The shape being intersected is fully contained in the closed negative half-space of the plane.
    Negative,
    /// The shape being intersected is fully contained in the open positive half-space of the plane.
    Positive,
}
