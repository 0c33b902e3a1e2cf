use serde::{Deserialize, Serialize};

use super::{axis::AxisDirection, point::Point, FloatNum};

/// Vertical tolerance of [`Edge::contains`]; absorbs the rounding of earlier
/// pixel placements.
pub const CONTAINS_TOLERANCE: FloatNum = 0.5;

/// A bounded line segment. Equality follows construction order, geometry does not.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    start_point: Point,
    end_point: Point,
}

/// `y = slope * x + intercept` restricted to `x_bounds` and `y_bounds`.
///
/// Vertical edges carry `slope == FloatNum::INFINITY` and store their x in
/// `intercept`, so the line reads `x = intercept`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearEquation {
    pub slope: FloatNum,
    pub intercept: FloatNum,
    pub x_bounds: (FloatNum, FloatNum),
    pub y_bounds: (FloatNum, FloatNum),
}

impl LinearEquation {
    #[inline]
    pub fn is_vertical(&self) -> bool {
        self.slope.is_infinite()
    }

    #[inline]
    pub fn is_horizontal(&self) -> bool {
        self.slope == 0.
    }
}

impl From<(Point, Point)> for Edge {
    fn from((start_point, end_point): (Point, Point)) -> Self {
        Self::new(start_point, end_point)
    }
}

impl Edge {
    #[inline]
    pub fn new(start_point: impl Into<Point>, end_point: impl Into<Point>) -> Self {
        Self {
            start_point: start_point.into(),
            end_point: end_point.into(),
        }
    }

    #[inline]
    pub fn start_point(&self) -> &Point {
        &self.start_point
    }

    #[inline]
    pub fn end_point(&self) -> &Point {
        &self.end_point
    }

    pub fn equation(&self) -> LinearEquation {
        // order by x so the slope sign does not depend on the edge direction
        let (left, right) = if self.end_point.x < self.start_point.x {
            (self.end_point, self.start_point)
        } else {
            (self.start_point, self.end_point)
        };

        let x_bounds = (left.x, right.x);
        let y_bounds = (left.y.min(right.y), left.y.max(right.y));

        if left.x == right.x {
            return LinearEquation {
                slope: FloatNum::INFINITY,
                intercept: left.x,
                x_bounds,
                y_bounds,
            };
        }

        let slope = (right.y - left.y) / (right.x - left.x);
        let intercept = left.y - slope * left.x;

        LinearEquation {
            slope,
            intercept,
            x_bounds,
            y_bounds,
        }
    }

    pub fn contains(&self, point: &Point) -> bool {
        let equation = self.equation();
        self.contains_with(&equation, point)
    }

    fn contains_with(&self, equation: &LinearEquation, point: &Point) -> bool {
        if !point.within(equation.x_bounds, equation.y_bounds) {
            return false;
        }

        let difference = if equation.is_vertical() {
            point.x - equation.intercept
        } else {
            point.y - (equation.slope * point.x + equation.intercept)
        };

        difference.abs() <= CONTAINS_TOLERANCE
    }

    /// Signed horizontal offset from `point` to the edge, positive when the
    /// edge lies to the right. `INFINITY` when no horizontal line through
    /// `point` meets the edge.
    pub fn distance_x(&self, point: &Point) -> FloatNum {
        let equation = self.equation();

        if self.contains_with(&equation, point) {
            return 0.;
        }

        let (y_min, y_max) = equation.y_bounds;
        if point.y < y_min || point.y > y_max {
            return FloatNum::INFINITY;
        }

        if equation.is_vertical() {
            return equation.intercept - point.x;
        }

        if equation.is_horizontal() {
            let (x_min, x_max) = equation.x_bounds;
            return nearest_of(x_min - point.x, x_max - point.x);
        }

        // floor keeps the reported clearance pessimistic in pixel space
        let matching_x = ((point.y - equation.intercept) / equation.slope).floor();
        matching_x - point.x
    }

    /// Signed vertical offset from `point` to the edge, positive when the
    /// edge lies below (larger y). `INFINITY` when no vertical line through
    /// `point` meets the edge.
    pub fn distance_y(&self, point: &Point) -> FloatNum {
        let equation = self.equation();

        if self.contains_with(&equation, point) {
            return 0.;
        }

        let (x_min, x_max) = equation.x_bounds;
        if point.x < x_min || point.x > x_max {
            return FloatNum::INFINITY;
        }

        if equation.is_vertical() {
            let (y_min, y_max) = equation.y_bounds;
            return nearest_of(y_min - point.y, y_max - point.y);
        }

        if equation.is_horizontal() {
            return equation.intercept - point.y;
        }

        let matching_y = (equation.slope * point.x + equation.intercept).floor();
        matching_y - point.y
    }

    #[inline]
    pub fn distance_on_axis(&self, point: &Point, axis: AxisDirection) -> FloatNum {
        match axis {
            AxisDirection::X => self.distance_x(point),
            AxisDirection::Y => self.distance_y(point),
        }
    }
}

fn nearest_of(first: FloatNum, second: FloatNum) -> FloatNum {
    if second.abs() < first.abs() {
        second
    } else {
        first
    }
}
