//! Multivariate normal sampling over the cart-pole state.

use cartpole_physics::{Covariance, State};
use nalgebra::{Cholesky, Matrix4};
use rand::Rng;
use rand_distr::StandardNormal;

use crate::error::EnvError;

/// Gaussian with a fixed covariance, factorised once at construction.
#[derive(Clone, Debug)]
pub struct MultivariateNormal {
    mean: State,
    factor: Matrix4<f64>,
}

impl MultivariateNormal {
    /// `name` labels the covariance in errors and logs.
    ///
    /// # Errors
    ///
    /// Returns [`EnvError::InvalidCovariance`] if `covariance` is not
    /// symmetric positive definite.
    pub fn new(name: &'static str, mean: State, covariance: Covariance) -> Result<Self, EnvError> {
        if !covariance.iter().all(|v| v.is_finite())
            || (covariance - covariance.transpose()).amax() > 1e-12
        {
            return Err(EnvError::InvalidCovariance(name));
        }
        let factor = Cholesky::new(covariance)
            .ok_or(EnvError::InvalidCovariance(name))?
            .unpack();
        tracing::debug!(name, "covariance factorised");
        Ok(Self { mean, factor })
    }

    /// Draw a sample centred on the stored mean.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> State {
        self.sample_around(&self.mean, rng)
    }

    /// Draw a sample with this covariance centred on `mean`.
    pub fn sample_around<R: Rng + ?Sized>(&self, mean: &State, rng: &mut R) -> State {
        let z = State::from_fn(|_, _| rng.sample(StandardNormal));
        mean + self.factor * z
    }
}
