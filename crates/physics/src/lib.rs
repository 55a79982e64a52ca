#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
//! # Cart-Pole Plant
//!
//! The physical plant behind the cart-pole environment: a cart on a track
//! with a pole hinged on top, driven by a horizontal force.
//!
//! ## Key Components
//!
//! -   **Plant:** [`PlantModel`] holds the timestep, cost weights, goal and
//!     noise covariance, and exposes the discretized [`PlantModel::dynamics`],
//!     the quadratic [`PlantModel::reward`] and the initial-state distribution
//!     [`PlantModel::initialize`].
//! -   **Configuration:** [`PlantConfig`] carries the tunable parameters and
//!     can be loaded from JSON.
//! -   **Types:** the [`types`] module fixes the state layout and the physical
//!     constants.
//!
//! ## Usage
//!
//! ```rust
//! use cartpole_physics::{PlantModel, State};
//!
//! let plant = PlantModel::default();
//! let (mean, _cov) = plant.initialize();
//! let next: State = plant.dynamics(&mean, 0.0);
//! let reward = plant.reward(&next, 0.0, true);
//! assert!(reward <= 0.0);
//! ```

pub mod config;
pub mod error;
pub mod model;
pub mod types;

pub use config::PlantConfig;
pub use error::PlantError;
pub use model::{action_from_slice, state_from_slice, PlantModel};
pub use types::{
    ActionWeights, Covariance, State, ACTION_DIM, CART_MASS, GRAVITY, INITIAL_NOISE, POLE_LENGTH,
    POLE_MASS, STATE_DIM, TOTAL_MASS, U_MAX, X_MAX,
};
