pub mod collision;
pub mod element;
pub mod errors;
pub mod math;
pub mod scene;
pub mod shape;
pub mod surface;

pub mod prelude {
    pub use super::collision::axis_distance;
    pub use super::element::{Hitbox, Obstacle, RelativePosition};
    pub use super::errors::{ConfigError, ShapeError};
    pub use super::math::{
        axis::AxisDirection,
        edge::{Edge, LinearEquation},
        point::Point,
        vector::Vector,
        FloatNum,
    };
    pub use super::scene::{
        config::{MAX_POSITION, MIN_POSITION},
        BoardConfig, BoardConfigBuilder, GameBoard, MovementLimits,
    };
    pub use super::shape::{
        rectangle, Bounding, CenterPoint, EdgeIterable, GeometryTransformer, Polygon, Shape,
        SurfaceMask, VerticesIter,
    };
    pub use super::surface::{Color, Surface};
}
