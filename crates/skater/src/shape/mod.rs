pub mod mask;
pub mod polygon;
pub mod rect;
pub(crate) mod utils;

use crate::math::{edge::Edge, point::Point, vector::Vector, FloatNum};

pub use mask::SurfaceMask;
pub use polygon::Polygon;
pub use rect::rectangle;

pub trait VerticesIter {
    fn vertices_iter(&self) -> impl Iterator<Item = &Point>;

    fn vertices_iter_mut(&mut self) -> impl Iterator<Item = &mut Point>;
}

/// Boundary edges in vertex order, closing back on the first vertex.
pub trait EdgeIterable {
    fn edge_iter(&self) -> Box<dyn Iterator<Item = Edge> + '_>;
}

pub trait CenterPoint {
    fn center_point(&self) -> Point;
}

/// Axis-aligned extent. `top` is the smallest y, screen coordinates grow downwards.
pub trait Bounding {
    fn left(&self) -> FloatNum;

    fn right(&self) -> FloatNum;

    fn top(&self) -> FloatNum;

    fn bottom(&self) -> FloatNum;

    fn width(&self) -> FloatNum {
        self.right() - self.left()
    }

    fn height(&self) -> FloatNum {
        self.bottom() - self.top()
    }
}

pub trait GeometryTransformer {
    fn translate(&mut self, delta: &Vector);
}

/// Anything the clearance queries can measure. [`Polygon`] is the only shape for now.
pub trait Shape: VerticesIter + EdgeIterable + CenterPoint + Bounding {}

impl<T> Shape for T where T: VerticesIter + EdgeIterable + CenterPoint + Bounding {}
