//! Declared bounds for observations and actions.
//!
//! Spaces are descriptive metadata for consumers. Nothing in the environment
//! clamps or rejects values that fall outside them.

use crate::error::EnvError;

/// Axis-aligned box `[low, high]`. Bounds may be infinite.
#[derive(Clone, Debug, PartialEq)]
pub struct BoxSpace {
    low: Vec<f64>,
    high: Vec<f64>,
}

impl BoxSpace {
    /// # Errors
    ///
    /// Returns [`EnvError::InvalidSpace`] if the bounds differ in length or
    /// any `low[i] > high[i]` (NaN bounds included).
    pub fn new(low: Vec<f64>, high: Vec<f64>) -> Result<Self, EnvError> {
        let (n_low, n_high) = (low.len(), high.len());
        if n_low != n_high {
            return Err(EnvError::InvalidSpace(format!(
                "low has {n_low} entries but high has {n_high}"
            )));
        }
        if let Some(i) = low
            .iter()
            .zip(&high)
            .position(|(l, h)| l.is_nan() || h.is_nan() || l > h)
        {
            let (lo, hi) = (low[i], high[i]);
            return Err(EnvError::InvalidSpace(format!(
                "low[{i}] = {lo} exceeds high[{i}] = {hi}"
            )));
        }
        Ok(Self { low, high })
    }

    /// Box `[-bound, bound]` in every dimension.
    ///
    /// # Errors
    ///
    /// Returns [`EnvError::InvalidSpace`] if any bound is negative or NaN.
    pub fn symmetric(bound: &[f64]) -> Result<Self, EnvError> {
        Self::new(bound.iter().map(|b| -b).collect(), bound.to_vec())
    }

    #[must_use]
    pub fn shape(&self) -> usize {
        self.low.len()
    }

    #[must_use]
    pub fn low(&self) -> &[f64] {
        &self.low
    }

    #[must_use]
    pub fn high(&self) -> &[f64] {
        &self.high
    }

    /// Whether `value` has the right length and lies inside the bounds.
    #[must_use]
    pub fn contains(&self, value: &[f64]) -> bool {
        value.len() == self.shape()
            && value
                .iter()
                .zip(self.low.iter().zip(&self.high))
                .all(|(v, (l, h))| l <= v && v <= h)
    }
}
