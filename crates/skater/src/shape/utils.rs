use crate::math::{edge::Edge, point::Point, vector::Vector, FloatNum};

/// Pairs every vertex with its successor, the last one with the first.
pub(crate) struct VerticesToEdgeIter<'a> {
    vertices: &'a [Point],
    index: usize,
}

impl<'a> VerticesToEdgeIter<'a> {
    pub(crate) fn new(vertices: &'a [Point]) -> Self {
        Self { vertices, index: 0 }
    }
}

impl<'a> Iterator for VerticesToEdgeIter<'a> {
    type Item = Edge;

    fn next(&mut self) -> Option<Self::Item> {
        let start_point = self.vertices.get(self.index)?;
        let end_point = self.vertices.get(self.index + 1).or(self.vertices.first())?;
        self.index += 1;
        Some(Edge::new(*start_point, *end_point))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.vertices.len().saturating_sub(self.index);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for VerticesToEdgeIter<'_> {}

/// Arithmetic mean of the vertices, only the true centroid for symmetric shapes.
pub(crate) fn compute_vertex_center_point<'a>(
    point_iter: impl Iterator<Item = &'a Point>,
    vertex_count: usize,
) -> Point {
    let (sum_x, sum_y) = point_iter.fold((0., 0.), |(sum_x, sum_y), p| {
        (sum_x + p.x(), sum_y + p.y())
    });
    let inv = (vertex_count as FloatNum).recip();
    (sum_x * inv, sum_y * inv).into()
}

pub(crate) fn translate_polygon<'a>(
    point_iter_mut: impl Iterator<Item = &'a mut Point>,
    delta: &Vector,
) {
    point_iter_mut.for_each(|p| *p += delta);
}

// cast a ray from point towards +x, the point is inside when it crosses an odd number of edges
pub(crate) fn is_point_inside_polygon(
    point: &Point,
    edge_iter: impl Iterator<Item = Edge>,
) -> bool {
    let mut cross_count: usize = 0;

    for edge in edge_iter {
        let (p1, p2) = (edge.start_point(), edge.end_point());

        if (p1.y() > point.y()) == (p2.y() > point.y()) {
            continue;
        }

        let cross_point_x = p1.x() + (point.y() - p1.y()) * (p2.x() - p1.x()) / (p2.y() - p1.y());
        if point.x() < cross_point_x {
            cross_count += 1;
        }
    }

    cross_count % 2 != 0
}
