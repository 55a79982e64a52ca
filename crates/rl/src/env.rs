use std::collections::BTreeMap;

use crate::error::EnvError;

/// Reinforcement learning environment trait.
///
/// Inspired by classic frameworks like `OpenAI Gym`, this trait defines the core
/// interface an environment must provide. [`reset`] must be called before the
/// first [`step`]; each call to [`step`] advances the simulation by one action
/// and returns the new observation together with the auxiliary outputs
/// bundled in [`Step`].
///
/// [`reset`]: Env::reset
/// [`step`]: Env::step
pub trait Env {
    type Observation;
    type Action;

    /// Reinitialize the random stream. With `None` a seed is drawn from the
    /// operating system. Returns the seeds actually used, one per stream.
    fn seed(&mut self, seed: Option<u64>) -> Vec<u64>;

    /// Draw a fresh starting state and return it as the initial observation.
    fn reset(&mut self) -> Self::Observation;

    /// Advance the environment by one action.
    ///
    /// # Errors
    ///
    /// Returns [`EnvError::NotReset`] if no episode has been started.
    fn step(&mut self, action: Self::Action) -> Result<Step<Self::Observation>, EnvError>;

    /// Size of the observation vector.
    fn obs_size(&self) -> usize;

    /// Size of the action space.
    fn action_size(&self) -> usize;
}

/// Output of a single [`Env::step`].
#[derive(Clone, Debug, PartialEq)]
pub struct Step<O> {
    pub observation: O,
    /// `None` when the environment leaves reward computation to the caller.
    pub reward: Option<f64>,
    pub done: bool,
    pub info: Info,
}

/// Auxiliary per-step diagnostics, keyed by name. The cart-pole session
/// reports none.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Info {
    entries: BTreeMap<String, f64>,
}

impl Info {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
