pub mod axis;
pub mod edge;
pub mod point;
pub mod vector;

pub(crate) mod num;

pub type FloatNum = f64;
