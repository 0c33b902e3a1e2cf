use crate::math::point::Point;

use super::polygon::Polygon;

/// Axis-aligned rectangle spanned by two opposite corners, as a clockwise
/// polygon starting at `top_left`.
pub fn rectangle(top_left: impl Into<Point>, bottom_right: impl Into<Point>) -> Polygon {
    let top_left = top_left.into();
    let bottom_right = bottom_right.into();

    let top_right = Point::new(bottom_right.x(), top_left.y());
    let bottom_left = Point::new(top_left.x(), bottom_right.y());

    Polygon::new([top_left, top_right, bottom_right, bottom_left])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shape::Bounding;

    #[test]
    fn test_creates_a_polygon() {
        let polygon = rectangle((0., 0.), (4., 4.));
        assert_eq!(
            polygon,
            Polygon::new([
                Point::new(0., 0.),
                Point::new(4., 0.),
                Point::new(4., 4.),
                Point::new(0., 4.),
            ])
        );
    }

    #[test]
    fn test_extent() {
        let polygon = rectangle((-3., 2.), (5., 9.));
        assert_eq!(polygon.width(), 8.);
        assert_eq!(polygon.height(), 7.);
        assert_eq!(polygon.right(), 5.);
        assert_eq!(polygon.bottom(), 9.);
    }
}
