//! # Plant Types and Constants
//!
//! State and covariance aliases plus the fixed physical constants of the
//! cart-pole. The state layout is `[x, θ, ẋ, θ̇]` with `θ = 0` meaning the
//! pole hangs straight down.

use nalgebra::{Matrix4, Vector1, Vector4};

/// Cart-pole state `[x, θ, ẋ, θ̇]`.
pub type State = Vector4<f64>;

/// Per-dimension action weights (the plant has a single actuator).
pub type ActionWeights = Vector1<f64>;

/// Covariance over the four state dimensions.
pub type Covariance = Matrix4<f64>;

/// Number of state dimensions.
pub const STATE_DIM: usize = 4;

/// Number of action dimensions.
pub const ACTION_DIM: usize = 1;

/// Gravitational acceleration in m/s².
pub const GRAVITY: f64 = 9.81;

/// Cart mass in kg.
pub const CART_MASS: f64 = 0.37;

/// Pole mass in kg.
pub const POLE_MASS: f64 = 0.127;

/// Combined cart and pole mass in kg.
pub const TOTAL_MASS: f64 = CART_MASS + POLE_MASS;

/// Half-length parameter of the pole in meters.
pub const POLE_LENGTH: f64 = 0.3365;

/// Advisory state bounds. Infinite entries are unbounded.
pub const X_MAX: [f64; STATE_DIM] = [f64::INFINITY, 100.0, f64::INFINITY, 25.0];

/// Advisory symmetric bound on the applied force.
pub const U_MAX: f64 = 5.0;

/// Scale of the initial-state covariance `σ₀ · I`.
pub const INITIAL_NOISE: f64 = 1e-4;

/// Mean of the initial-state distribution: cart at rest, pole hanging down.
#[must_use]
pub fn initial_mean() -> State {
    State::new(0.0, std::f64::consts::PI, 0.0, 0.0)
}
