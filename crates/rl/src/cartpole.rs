//! # Cart-Pole Environment
//!
//! A reset/step session around [`PlantModel`]. Every transition applies the
//! nominal dynamics and then perturbs the result with Gaussian process noise
//! drawn from the session's own seeded random stream.
//!
//! The session starts uninitialized. [`Env::reset`] samples a starting state
//! from the plant's initial distribution; from then on [`Env::step`] is
//! available. Reward is deliberately not computed here: [`Step::reward`] is
//! always `None`, and callers that need it evaluate
//! [`PlantModel::reward`] themselves through [`CartpoleEnv::model`].

use cartpole_physics::{action_from_slice, PlantConfig, PlantModel, State, ACTION_DIM, STATE_DIM};
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::env::{Env, Info, Step};
use crate::error::EnvError;
use crate::sampling::MultivariateNormal;
use crate::space::BoxSpace;

/// Stateful cart-pole session.
pub struct CartpoleEnv {
    model: PlantModel,
    initial: MultivariateNormal,
    process_noise: MultivariateNormal,
    action_space: BoxSpace,
    observation_space: BoxSpace,
    rng: ChaCha8Rng,
    state: Option<State>,
}

impl CartpoleEnv {
    /// Default plant, seeded from operating-system entropy.
    ///
    /// # Errors
    ///
    /// Fails only if the default covariances are rejected, which does not
    /// happen for the built-in constants.
    pub fn new() -> Result<Self, EnvError> {
        Self::with_model(PlantModel::default())
    }

    /// # Errors
    ///
    /// Returns [`EnvError::Plant`] for an invalid configuration and
    /// [`EnvError::InvalidCovariance`] if either covariance cannot be sampled.
    pub fn with_config(config: PlantConfig) -> Result<Self, EnvError> {
        Self::with_model(PlantModel::new(config)?)
    }

    /// # Errors
    ///
    /// Returns [`EnvError::InvalidCovariance`] if the initial or process-noise
    /// covariance is not symmetric positive definite.
    pub fn with_model(model: PlantModel) -> Result<Self, EnvError> {
        let (mean, cov) = model.initialize();
        let initial = MultivariateNormal::new("initial state", mean, cov)?;
        let process_noise =
            MultivariateNormal::new("process noise", State::zeros(), *model.sigma())?;

        let umax = model.umax();
        let action_space = BoxSpace::symmetric(&[umax; ACTION_DIM])?;
        let observation_space = BoxSpace::symmetric(model.xmax().as_slice())?;

        let mut env = Self {
            model,
            initial,
            process_noise,
            action_space,
            observation_space,
            rng: ChaCha8Rng::seed_from_u64(0),
            state: None,
        };
        env.seed(None);
        Ok(env)
    }

    #[must_use]
    pub fn model(&self) -> &PlantModel {
        &self.model
    }

    /// Current state, or `None` before the first reset.
    #[must_use]
    pub fn state(&self) -> Option<&State> {
        self.state.as_ref()
    }

    #[must_use]
    pub fn action_space(&self) -> &BoxSpace {
        &self.action_space
    }

    #[must_use]
    pub fn observation_space(&self) -> &BoxSpace {
        &self.observation_space
    }

    /// [`Env::step`] for a one-element action vector.
    ///
    /// # Errors
    ///
    /// Returns a dimension mismatch unless `action` holds exactly one entry,
    /// and [`EnvError::NotReset`] before the first reset.
    pub fn step_slice(&mut self, action: &[f64]) -> Result<Step<State>, EnvError> {
        let u = action_from_slice(action)?;
        self.step(u)
    }
}

impl Env for CartpoleEnv {
    type Observation = State;
    type Action = f64;

    fn seed(&mut self, seed: Option<u64>) -> Vec<u64> {
        let seed = seed.unwrap_or_else(|| rand::rngs::OsRng.next_u64());
        self.rng = ChaCha8Rng::seed_from_u64(seed);
        tracing::debug!(seed, "random stream seeded");
        vec![seed]
    }

    fn reset(&mut self) -> State {
        let state = self.initial.sample(&mut self.rng);
        tracing::debug!(?state, "episode reset");
        self.state = Some(state);
        state
    }

    fn step(&mut self, action: f64) -> Result<Step<State>, EnvError> {
        let current = self.state.as_ref().ok_or(EnvError::NotReset)?;
        let nominal = self.model.dynamics(current, action);
        let next = self.process_noise.sample_around(&nominal, &mut self.rng);
        tracing::trace!(action, ?next, "step");
        self.state = Some(next);
        Ok(Step {
            observation: next,
            reward: None,
            done: false,
            info: Info::new(),
        })
    }

    fn obs_size(&self) -> usize {
        STATE_DIM
    }

    fn action_size(&self) -> usize {
        ACTION_DIM
    }
}
