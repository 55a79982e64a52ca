//! # Cart-Pole Plant Model
//!
//! The plant bundles the physical constants, the discretized dynamics, the
//! quadratic reward and the initial-state distribution. It holds no mutable
//! state; stepping a trajectory forward is the job of the environment session.

use nalgebra::{Matrix4, Vector4};

use crate::config::PlantConfig;
use crate::error::PlantError;
use crate::types::{
    initial_mean, ActionWeights, Covariance, State, ACTION_DIM, GRAVITY, INITIAL_NOISE, POLE_LENGTH,
    POLE_MASS, STATE_DIM, TOTAL_MASS, U_MAX, X_MAX,
};

/// Smallest magnitude allowed for the angular-acceleration denominator.
const MIN_DENOMINATOR: f64 = 1e-12;

/// Immutable cart-pole plant.
#[derive(Clone, Debug, PartialEq)]
pub struct PlantModel {
    config: PlantConfig,
    goal: State,
    state_weights: State,
    action_weights: ActionWeights,
    sigma: Covariance,
    xmax: State,
    umax: f64,
}

impl Default for PlantModel {
    fn default() -> Self {
        Self::from_valid(PlantConfig::default())
    }
}

impl PlantModel {
    /// Build a plant from a configuration.
    ///
    /// # Errors
    ///
    /// Returns [`PlantError::InvalidConfig`] if the configuration fails
    /// [`PlantConfig::validate`].
    pub fn new(config: PlantConfig) -> Result<Self, PlantError> {
        config.validate()?;
        Ok(Self::from_valid(config))
    }

    fn from_valid(config: PlantConfig) -> Self {
        let goal = State::from(config.goal);
        let state_weights = State::from(config.state_weights);
        let action_weights = ActionWeights::from(config.action_weights);
        let sigma = Matrix4::identity() * config.process_noise;
        tracing::debug!(
            dt = config.dt,
            process_noise = config.process_noise,
            "plant model built"
        );
        Self {
            config,
            goal,
            state_weights,
            action_weights,
            sigma,
            xmax: State::from(X_MAX),
            umax: U_MAX,
        }
    }

    #[must_use]
    pub fn dt(&self) -> f64 {
        self.config.dt
    }

    #[must_use]
    pub fn goal(&self) -> &State {
        &self.goal
    }

    /// Diagonal state-cost weights, already negated and scaled by `dt`.
    #[must_use]
    pub fn state_weights(&self) -> &State {
        &self.state_weights
    }

    /// Diagonal action-cost weights, already negated and scaled by `dt`.
    #[must_use]
    pub fn action_weights(&self) -> &ActionWeights {
        &self.action_weights
    }

    /// Process-noise covariance added on every transition.
    #[must_use]
    pub fn sigma(&self) -> &Covariance {
        &self.sigma
    }

    /// Advisory state bound; the observation space is `[-xmax, xmax]`.
    #[must_use]
    pub fn xmax(&self) -> &State {
        &self.xmax
    }

    /// Advisory force bound; the action space is `[-umax, umax]`.
    #[must_use]
    pub fn umax(&self) -> f64 {
        self.umax
    }

    /// Advance `state` by one timestep under force `action`.
    ///
    /// Velocities are updated from the accelerations and the positions are
    /// advanced with the updated velocities, i.e. `x' = x + dt·(ẋ + dt·ẍ)`.
    /// The action is not clamped to `umax`.
    #[must_use]
    pub fn dynamics(&self, state: &State, action: f64) -> State {
        let dt = self.config.dt;
        let th = state[1];
        let dth2 = state[3].powi(2);
        let (sin_th, cos_th) = th.sin_cos();

        let num = -POLE_MASS * POLE_LENGTH * sin_th * dth2
            + TOTAL_MASS * GRAVITY * sin_th
            - action * cos_th;
        let denom = guard_denominator(
            POLE_LENGTH * ((4.0 / 3.0) * TOTAL_MASS - POLE_MASS * cos_th.powi(2)),
        );
        let th_acc = num / denom;
        let x_acc = (POLE_MASS * POLE_LENGTH * sin_th * dth2
            - POLE_MASS * POLE_LENGTH * th_acc * cos_th
            + action)
            / TOTAL_MASS;

        Vector4::new(
            state[0] + dt * (state[2] + dt * x_acc),
            state[1] + dt * (state[3] + dt * th_acc),
            state[2] + dt * x_acc,
            state[3] + dt * th_acc,
        )
    }

    /// Signed quadratic reward.
    ///
    /// With `state_cost` set the result is
    /// `(x − g)ᵀ·diag(wx)·(x − g) + uᵀ·diag(wu)·u`; otherwise only the action
    /// term is returned. The caller decides when the state term applies.
    #[must_use]
    pub fn reward(&self, state: &State, action: f64, state_cost: bool) -> f64 {
        let action_term = action * self.action_weights[0] * action;
        if state_cost {
            let err = state - self.goal;
            err.component_mul(&self.state_weights).dot(&err) + action_term
        } else {
            action_term
        }
    }

    /// Mean and covariance of the initial-state distribution.
    #[must_use]
    pub fn initialize(&self) -> (State, Covariance) {
        (initial_mean(), Matrix4::identity() * INITIAL_NOISE)
    }
}

/// Convert a slice into a [`State`].
///
/// # Errors
///
/// Returns [`PlantError::DimensionMismatch`] unless the slice holds exactly
/// four entries.
pub fn state_from_slice(values: &[f64]) -> Result<State, PlantError> {
    if values.len() != STATE_DIM {
        return Err(PlantError::DimensionMismatch {
            expected: STATE_DIM,
            found: values.len(),
        });
    }
    Ok(State::from_column_slice(values))
}

/// Convert a one-element slice into a scalar action.
///
/// # Errors
///
/// Returns [`PlantError::DimensionMismatch`] unless the slice holds exactly
/// one entry.
pub fn action_from_slice(values: &[f64]) -> Result<f64, PlantError> {
    match values {
        [u] => Ok(*u),
        _ => Err(PlantError::DimensionMismatch {
            expected: ACTION_DIM,
            found: values.len(),
        }),
    }
}

fn guard_denominator(denom: f64) -> f64 {
    if denom.abs() >= MIN_DENOMINATOR {
        return denom;
    }
    tracing::warn!(denom, "denominator near zero, clamping");
    if denom.is_sign_negative() {
        -MIN_DENOMINATOR
    } else {
        MIN_DENOMINATOR
    }
}
