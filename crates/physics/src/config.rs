//! Plant configuration.
//!
//! Cost weights are stored already negated and scaled by `dt`, so the
//! quadratic form in [`PlantModel::reward`](crate::PlantModel::reward)
//! decreases as the state and action move away from the goal.

use serde::{Deserialize, Serialize};

use crate::error::PlantError;
use crate::types::{ACTION_DIM, STATE_DIM};

/// Configuration for a [`PlantModel`](crate::PlantModel)
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlantConfig {
    /// Integration timestep in seconds
    pub dt: f64,
    /// Diagonal state-cost weights
    pub state_weights: [f64; STATE_DIM],
    /// Diagonal action-cost weights
    pub action_weights: [f64; ACTION_DIM],
    /// Goal state. The angle is `2π`, the upright orientation one turn past
    /// the hanging start.
    pub goal: [f64; STATE_DIM],
    /// Diagonal scale of the process-noise covariance
    pub process_noise: f64,
}

impl Default for PlantConfig {
    fn default() -> Self {
        let dt = 0.01;
        Self {
            dt,
            state_weights: [-dt * 1e-1, -dt * 1e1, -dt * 1e-1, -dt * 1e-1],
            action_weights: [-dt * 1e-3],
            goal: [0.0, 2.0 * std::f64::consts::PI, 0.0, 0.0],
            process_noise: 1e-4,
        }
    }
}

impl PlantConfig {
    /// Parse a JSON document and validate it. Missing fields take their
    /// default values.
    ///
    /// # Errors
    ///
    /// Returns [`PlantError::Parse`] for malformed JSON and
    /// [`PlantError::InvalidConfig`] when validation fails.
    pub fn from_json_str(json: &str) -> Result<Self, PlantError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check the invariants the plant relies on.
    ///
    /// # Errors
    ///
    /// Returns [`PlantError::InvalidConfig`] naming the first offending field.
    pub fn validate(&self) -> Result<(), PlantError> {
        let dt = self.dt;
        if !(dt.is_finite() && dt > 0.0) {
            return Err(PlantError::InvalidConfig(format!(
                "dt must be finite and positive, got {dt}"
            )));
        }
        check_finite("state_weights", &self.state_weights)?;
        check_finite("action_weights", &self.action_weights)?;
        check_finite("goal", &self.goal)?;
        let noise = self.process_noise;
        if !(noise.is_finite() && noise > 0.0) {
            return Err(PlantError::InvalidConfig(format!(
                "process_noise must be finite and positive, got {noise}"
            )));
        }
        Ok(())
    }
}

fn check_finite(field: &str, values: &[f64]) -> Result<(), PlantError> {
    match values.iter().enumerate().find(|(_, v)| !v.is_finite()) {
        Some((i, v)) => Err(PlantError::InvalidConfig(format!(
            "{field}[{i}] must be finite, got {v}"
        ))),
        None => Ok(()),
    }
}
