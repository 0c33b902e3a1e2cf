use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::{
    collision::axis_distance,
    errors::ShapeError,
    math::{
        axis::AxisDirection, edge::Edge, num::round_to_pixel, point::Point, vector::Vector,
        FloatNum,
    },
};

use super::{
    mask::SurfaceMask,
    utils::{compute_vertex_center_point, translate_polygon, VerticesToEdgeIter},
    Bounding, CenterPoint, EdgeIterable, GeometryTransformer, Shape, VerticesIter,
};

/// A closed boundary through `vertices`, in order. Never empty.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Point>", into = "Vec<Point>")]
pub struct Polygon {
    vertices: Vec<Point>,
}

impl TryFrom<Vec<Point>> for Polygon {
    type Error = ShapeError;

    fn try_from(vertices: Vec<Point>) -> Result<Self, Self::Error> {
        if vertices.is_empty() {
            return Err(ShapeError::EmptyPolygon);
        }
        Ok(Self { vertices })
    }
}

impl From<Polygon> for Vec<Point> {
    fn from(polygon: Polygon) -> Self {
        polygon.vertices
    }
}

impl Display for Polygon {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Polygon: [")?;
        for (i, vertex) in self.vertices.iter().enumerate() {
            if i != 0 {
                f.write_str(", ")?;
            }
            write!(f, "{vertex}")?;
        }
        f.write_str("]")
    }
}

impl Polygon {
    /// # Panics
    ///
    /// Panics when `vertices` is empty, use [`Polygon::try_new`] for untrusted input.
    pub fn new(vertices: impl Into<Vec<Point>>) -> Self {
        let vertices = vertices.into();
        assert!(!vertices.is_empty(), "{}", ShapeError::EmptyPolygon);
        Self { vertices }
    }

    pub fn try_new(vertices: impl Into<Vec<Point>>) -> Result<Self, ShapeError> {
        vertices.into().try_into()
    }

    #[inline]
    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    pub fn edges(&self) -> Vec<Edge> {
        VerticesToEdgeIter::new(&self.vertices).collect()
    }

    pub fn centre(&self) -> Point {
        compute_vertex_center_point(self.vertices.iter(), self.vertices.len())
    }

    /// Distance from [`Polygon::centre`] to the farthest vertex, rounded up.
    ///
    /// Saturates at `usize::MAX` and is `0` for non-finite coordinates.
    pub fn radius(&self) -> usize {
        let centre = self.centre();
        let farthest = self
            .vertices
            .iter()
            .map(|&vertex| Vector::from((centre, vertex)).abs())
            .fold(0., FloatNum::max);
        farthest.ceil() as usize
    }

    pub fn translate(&mut self, delta: &Vector) {
        translate_polygon(self.vertices_iter_mut(), delta);
    }

    /// Same as [`Bounding::left`].
    #[inline]
    pub fn x(&self) -> FloatNum {
        self.left()
    }

    /// Same as [`Bounding::top`].
    #[inline]
    pub fn y(&self) -> FloatNum {
        self.top()
    }

    /// Moves the polygon horizontally so its left side lands on `x` rounded to a pixel.
    pub fn set_x(&mut self, x: FloatNum) -> &mut Self {
        let shift = round_to_pixel(x) - self.x();
        self.translate(&(shift, 0.).into());
        self
    }

    /// Moves the polygon vertically so its top lands on `y` rounded to a pixel.
    pub fn set_y(&mut self, y: FloatNum) -> &mut Self {
        let shift = round_to_pixel(y) - self.y();
        self.translate(&(0., shift).into());
        self
    }

    /// Moves the polygon vertically so its bottom lands on `bottom` rounded to a pixel.
    pub fn set_bottom(&mut self, bottom: FloatNum) -> &mut Self {
        let shift = round_to_pixel(bottom) - self.bottom();
        self.translate(&(0., shift).into());
        self
    }

    /// A copy re-placed by the given offsets, subject to the same pixel rounding.
    pub fn shifted(&self, x_shift: FloatNum, y_shift: FloatNum) -> Self {
        let mut result = self.clone();
        result.set_x(self.x() + x_shift);
        result.set_y(self.y() + y_shift);
        result
    }

    /// Signed horizontal clearance from `self` to `other`, positive when
    /// `other` lies to the right; `INFINITY` when the shapes never share a row.
    pub fn distance_x(&self, other: &impl Shape) -> FloatNum {
        axis_distance(self, other, AxisDirection::X)
    }

    /// Signed vertical clearance from `self` to `other`, positive when
    /// `other` lies below; `INFINITY` when the shapes never share a column.
    pub fn distance_y(&self, other: &impl Shape) -> FloatNum {
        axis_distance(self, other, AxisDirection::Y)
    }

    pub fn build_surface_mask(&self) -> SurfaceMask {
        SurfaceMask::from_shape(self, self.radius().saturating_mul(2))
    }

    fn coordinate_range(&self, coordinate: impl Fn(&Point) -> FloatNum) -> (FloatNum, FloatNum) {
        // non-empty by construction
        let first = coordinate(&self.vertices[0]);
        self.vertices[1..]
            .iter()
            .map(coordinate)
            .fold((first, first), |(min, max), value| (min.min(value), max.max(value)))
    }
}

impl VerticesIter for Polygon {
    fn vertices_iter(&self) -> impl Iterator<Item = &Point> {
        self.vertices.iter()
    }

    fn vertices_iter_mut(&mut self) -> impl Iterator<Item = &mut Point> {
        self.vertices.iter_mut()
    }
}

impl EdgeIterable for Polygon {
    fn edge_iter(&self) -> Box<dyn Iterator<Item = Edge> + '_> {
        Box::new(VerticesToEdgeIter::new(&self.vertices))
    }
}

impl CenterPoint for Polygon {
    fn center_point(&self) -> Point {
        self.centre()
    }
}

impl Bounding for Polygon {
    fn left(&self) -> FloatNum {
        self.coordinate_range(Point::x).0
    }

    fn right(&self) -> FloatNum {
        self.coordinate_range(Point::x).1
    }

    fn top(&self) -> FloatNum {
        self.coordinate_range(Point::y).0
    }

    fn bottom(&self) -> FloatNum {
        self.coordinate_range(Point::y).1
    }
}

impl GeometryTransformer for Polygon {
    fn translate(&mut self, delta: &Vector) {
        Polygon::translate(self, delta)
    }
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, Rng, SeedableRng};

    use super::*;
    use crate::shape::rect::rectangle;

    //  A---B
    //  -----
    //  --C--
    //  -----
    //  D---E
    const A: Point = Point::new(0., 0.);
    const B: Point = Point::new(4., 0.);
    const C: Point = Point::new(2., 2.);
    const D: Point = Point::new(0., 4.);
    const E: Point = Point::new(4., 4.);

    #[test]
    fn test_centre() {
        let polygon = Polygon::new([A, B, E, D]);
        assert_eq!(polygon.centre(), C);
    }

    #[test]
    fn test_radius() {
        let polygon = Polygon::new([A, B, E, D]);
        // 2 * sqrt(2) rounded up
        assert_eq!(polygon.radius(), 3);
    }

    #[test]
    fn test_radius_out_of_range() {
        let huge = Polygon::new([Point::new(-1e300, 0.), Point::new(1e300, 0.)]);
        assert_eq!(huge.radius(), usize::MAX);

        let broken = Polygon::new([Point::new(FloatNum::NAN, 0.)]);
        assert_eq!(broken.radius(), 0);
    }

    #[test]
    fn test_edges() {
        let polygon = Polygon::new([A, B, C]);
        assert_eq!(
            polygon.edges(),
            vec![Edge::new(A, B), Edge::new(B, C), Edge::new(C, A)]
        );
        assert_eq!(polygon.edge_iter().count(), polygon.vertices().len());
    }

    #[test]
    fn test_bounding() {
        let polygon = Polygon::new([B, C, D]);
        assert_eq!(polygon.left(), 0.);
        assert_eq!(polygon.right(), 4.);
        assert_eq!(polygon.top(), 0.);
        assert_eq!(polygon.bottom(), 4.);
        assert_eq!(polygon.width(), 4.);
        assert_eq!(polygon.height(), 4.);
        assert_eq!((polygon.x(), polygon.y()), (0., 0.));
    }

    #[test]
    fn test_distance_x_positive() {
        let first = Polygon::new([A, D]);
        let other = Polygon::new([B, C, E]);
        assert_eq!(first.distance_x(&other), 2.);
        assert_eq!(other.distance_x(&first), -2.);
    }

    #[test]
    fn test_distance_x_negative() {
        let first = Polygon::new([B, E]);
        let other = Polygon::new([A, C, D]);
        assert_eq!(first.distance_x(&other), -2.);
    }

    #[test]
    fn test_distance_y_positive() {
        let first = Polygon::new([A, B]);
        let other = Polygon::new([C, E, D]);
        assert_eq!(first.distance_y(&other), 2.);
    }

    #[test]
    fn test_distance_without_overlap_is_infinite() {
        let first = rectangle(A, B + Vector::new(0., 1.));
        let other = rectangle(Point::new(10., 10.), Point::new(12., 12.));
        assert_eq!(first.distance_x(&other), FloatNum::INFINITY);
        assert_eq!(first.distance_y(&other), FloatNum::INFINITY);
    }

    #[test]
    fn test_translate() {
        let mut polygon = Polygon::new([A, B, E, D]);
        polygon.translate(&Vector::new(3., -1.));
        assert_eq!(polygon.left(), 3.);
        assert_eq!(polygon.top(), -1.);
        assert_eq!(polygon.centre(), Point::new(5., 1.));
    }

    #[test]
    fn test_position_setters_round() {
        let mut polygon = rectangle(A, E);
        polygon.set_x(10.4).set_y(2.5);
        assert_eq!((polygon.x(), polygon.y()), (10., 2.));

        polygon.set_bottom(20.6);
        assert_eq!(polygon.bottom(), 21.);
        assert_eq!(polygon.top(), 17.);
        assert_eq!(polygon.height(), 4.);
    }

    #[test]
    fn test_shifted_leaves_original() {
        let polygon = rectangle(A, E);
        let shifted = polygon.shifted(5., -2.);
        assert_eq!(polygon.x(), 0.);
        assert_eq!((shifted.x(), shifted.y()), (5., -2.));
        assert_eq!(shifted.width(), polygon.width());
    }

    #[test]
    fn test_zero_translation_is_idempotent() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..50 {
            let vertices: Vec<Point> = (0..rng.gen_range(1..6))
                .map(|_| {
                    Point::new(
                        rng.gen_range(-20..20) as FloatNum,
                        rng.gen_range(-20..20) as FloatNum,
                    )
                })
                .collect();
            let other = rectangle(Point::new(-5., -5.), Point::new(5., 5.));
            let mut polygon = Polygon::new(vertices);
            let before = polygon.clone();

            polygon.translate(&Vector::default());

            assert_eq!(polygon, before);
            assert_eq!(polygon.edges(), before.edges());
            assert_eq!(polygon.distance_x(&other), before.distance_x(&other));
            assert_eq!(polygon.distance_y(&other), before.distance_y(&other));
        }
    }

    #[test]
    fn test_try_new_empty() {
        assert_eq!(Polygon::try_new(Vec::<Point>::new()), Err(ShapeError::EmptyPolygon));
        assert!(Polygon::try_new([A]).is_ok());
    }

    #[test]
    #[should_panic(expected = "at least one vertex")]
    fn test_new_empty_panics() {
        Polygon::new(Vec::<Point>::new());
    }

    #[test]
    fn test_serde_rejects_empty() {
        let polygon: Polygon = serde_json::from_str(r#"[{"x":0,"y":0},{"x":4,"y":0}]"#).unwrap();
        assert_eq!(polygon, Polygon::new([A, B]));
        assert!(serde_json::from_str::<Polygon>("[]").is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(
            Polygon::new([A, C]).to_string(),
            "Polygon: [(x:0, y:0), (x:2, y:2)]"
        );
    }
}
