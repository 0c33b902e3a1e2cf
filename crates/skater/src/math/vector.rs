use std::fmt::Display;

use serde::{Deserialize, Serialize};

use super::{point::Point, FloatNum};

/// A translation delta.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Vector {
    pub(crate) x: FloatNum,
    pub(crate) y: FloatNum,
}

impl Display for Vector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&format!("{{ x: {}, y: {} }}", self.x, self.y))
    }
}

impl Vector {
    #[inline]
    pub const fn new(x: FloatNum, y: FloatNum) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn x(&self) -> FloatNum {
        self.x
    }

    #[inline]
    pub fn y(&self) -> FloatNum {
        self.y
    }

    #[inline]
    pub fn abs(&self) -> FloatNum {
        self.x.hypot(self.y)
    }
}

impl From<(FloatNum, FloatNum)> for Vector {
    fn from((x, y): (FloatNum, FloatNum)) -> Self {
        Self { x, y }
    }
}

impl From<[FloatNum; 2]> for Vector {
    fn from([x, y]: [FloatNum; 2]) -> Self {
        Self { x, y }
    }
}

// vector pointing from the first point to the second
impl From<(Point, Point)> for Vector {
    fn from((from, to): (Point, Point)) -> Self {
        (to.x - from.x, to.y - from.y).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vector_between_points() {
        let vector: Vector = (Point::new(1., 1.), Point::new(4., 5.)).into();
        assert_eq!(vector, Vector::new(3., 4.));
        assert_eq!(vector.abs(), 5.);
    }
}
