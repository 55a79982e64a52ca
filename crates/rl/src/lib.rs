#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
//! # Cart-Pole Environment Session
//!
//! The agent-facing side of the cart-pole: a seedable environment that
//! follows the `seed` / `reset` / `step` protocol of Gym-style frameworks and
//! drives the [`cartpole_physics::PlantModel`] with additive Gaussian process
//! noise.
//!
//! ## Key Components
//!
//! -   **Protocol:** the [`Env`] trait and its [`Step`] / [`Info`] outputs.
//! -   **Session:** [`CartpoleEnv`] owns the current state and a private
//!     `ChaCha8` random stream. Same seed and same actions give the same
//!     trajectory.
//! -   **Spaces:** [`BoxSpace`] describes the advisory action and observation
//!     bounds.
//! -   **Sampling:** [`MultivariateNormal`] draws correlated Gaussian vectors
//!     from a Cholesky factor computed once at construction.
//!
//! ## Usage
//!
//! ```rust
//! use cartpole_rl::{CartpoleEnv, Env};
//!
//! # fn main() -> Result<(), cartpole_rl::EnvError> {
//! let mut env = CartpoleEnv::new()?;
//! env.seed(Some(0));
//! let start = env.reset();
//! let step = env.step(0.0)?;
//! let reward = env.model().reward(&step.observation, 0.0, true);
//! assert!(step.reward.is_none() && !step.done);
//! assert!(reward < 0.0 && (start[1] - std::f64::consts::PI).abs() < 0.1);
//! # Ok(())
//! # }
//! ```

pub mod cartpole;
pub mod env;
pub mod error;
pub mod sampling;
pub mod space;

pub use cartpole::CartpoleEnv;
pub use env::{Env, Info, Step};
pub use error::EnvError;
pub use sampling::MultivariateNormal;
pub use space::BoxSpace;
