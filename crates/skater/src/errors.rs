use thiserror::Error;

use crate::math::FloatNum;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ShapeError {
    #[error("polygon requires at least one vertex")]
    EmptyPolygon,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("malformed board config: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("min_position {min} must be below max_position {max}")]
    InvalidRange { min: FloatNum, max: FloatNum },

    #[error("clearance_margin must not be negative, got {0}")]
    NegativeMargin(FloatNum),
}
