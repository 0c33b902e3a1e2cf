use serde::{Deserialize, Serialize};
use skater_macro_tools::{Builder, Fields};
use tracing::{debug, warn};

use crate::{errors::ConfigError, math::FloatNum};

/// Stands in for "nothing limits movement in the negative direction".
pub const MIN_POSITION: FloatNum = -2_147_483_648.;

/// Stands in for "nothing limits movement in the positive direction".
pub const MAX_POSITION: FloatNum = 2_147_483_648.;

pub const CLEARANCE_MARGIN: FloatNum = 1.;

#[derive(Clone, Debug, PartialEq, Fields, Builder, Serialize, Deserialize)]
#[r]
#[serde(default)]
pub struct BoardConfig {
    #[default(MIN_POSITION)]
    min_position: FloatNum,
    #[default(MAX_POSITION)]
    max_position: FloatNum,
    // kept between the actor and a wall, the floor limit never applies it
    #[default(CLEARANCE_MARGIN)]
    clearance_margin: FloatNum,
}

impl BoardConfig {
    pub fn from_json(source: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(source)?;
        config.validate()?;
        debug!(?config, "board config loaded");
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let result = if self.min_position >= self.max_position {
            Err(ConfigError::InvalidRange {
                min: self.min_position,
                max: self.max_position,
            })
        } else if self.clearance_margin < 0. {
            Err(ConfigError::NegativeMargin(self.clearance_margin))
        } else {
            Ok(())
        };

        if let Err(err) = &result {
            warn!(%err, "rejected board config");
        }
        result
    }
}
