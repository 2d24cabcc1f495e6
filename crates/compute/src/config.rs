use foundation::math::{MAX_ALLOWED_LATITUDE, MAX_LATITUDE, MIN_ALLOWED_LATITUDE};
use serde::{Deserialize, Serialize};

use crate::error::BoundsError;

/// Half-width of the interval substituted for near-identical inputs (degrees).
pub const EPSILON: f64 = 1e-5;

/// Tunables shared by the latitude and longitude estimators.
///
/// The latitude clamp defaults to the range the map renderer supports; wider
/// renderers can raise it up to the poles.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoundsConfig {
    pub epsilon: f64,
    pub min_latitude: f64,
    pub max_latitude: f64,
}

impl Default for BoundsConfig {
    fn default() -> Self {
        Self {
            epsilon: EPSILON,
            min_latitude: MIN_ALLOWED_LATITUDE,
            max_latitude: MAX_ALLOWED_LATITUDE,
        }
    }
}

impl BoundsConfig {
    pub fn with_latitude_limits(min_latitude: f64, max_latitude: f64) -> Self {
        Self {
            min_latitude,
            max_latitude,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), BoundsError> {
        if !(self.epsilon.is_finite() && self.epsilon > 0.0 && self.epsilon < 1.0) {
            return Err(BoundsError::InvalidConfig(format!(
                "epsilon must lie in (0, 1), got {}",
                self.epsilon
            )));
        }
        let geographic = -MAX_LATITUDE..=MAX_LATITUDE;
        if !geographic.contains(&self.min_latitude) || !geographic.contains(&self.max_latitude) {
            return Err(BoundsError::InvalidConfig(format!(
                "latitude limits [{}, {}] exceed [-90, 90]",
                self.min_latitude, self.max_latitude
            )));
        }
        // Clamping keeps a 2 * epsilon wide interval, which must fit.
        if self.max_latitude - self.min_latitude < 2.0 * self.epsilon {
            return Err(BoundsError::InvalidConfig(format!(
                "latitude limits [{}, {}] leave no room for a {} wide interval",
                self.min_latitude,
                self.max_latitude,
                2.0 * self.epsilon
            )));
        }
        Ok(())
    }
}
