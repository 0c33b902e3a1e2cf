use crate::{
    math::{axis::AxisDirection, num::closest_to_zero, FloatNum},
    shape::Shape,
};

/// Signed clearance from `a` to `b` along `axis`, positive when `b` lies
/// further along the axis.
///
/// Every vertex of `a` is measured against every edge of `b`, then every
/// vertex of `b` against every edge of `a` with the sign flipped back into
/// `a`'s frame. Both passes are needed, the closest approach may sit on a
/// vertex of either shape. The candidate closest to zero wins, the earliest
/// one on ties. `INFINITY` when the shapes never line up on `axis`.
pub fn axis_distance<A, B>(a: &A, b: &B, axis: AxisDirection) -> FloatNum
where
    A: Shape,
    B: Shape,
{
    let towards_b = a.vertices_iter().flat_map(|vertex| {
        b.edge_iter()
            .map(move |edge| edge.distance_on_axis(vertex, axis))
    });

    let from_b = b.vertices_iter().flat_map(|vertex| {
        a.edge_iter()
            .map(move |edge| -edge.distance_on_axis(vertex, axis))
    });

    closest_to_zero(towards_b.chain(from_b)).unwrap_or(FloatNum::INFINITY)
}
