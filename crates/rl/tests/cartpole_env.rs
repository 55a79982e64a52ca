//! Reset/step protocol of the cart-pole session.

mod common;

use anyhow::Result;
use approx::assert_relative_eq;
use cartpole_physics::{PlantConfig, PlantError, INITIAL_NOISE};
use cartpole_rl::{CartpoleEnv, Env, EnvError};
use std::f64::consts::PI;

use common::{init_tracing, seeded_env};

#[test]
fn step_before_reset_is_rejected() -> Result<()> {
    init_tracing();
    let mut env = CartpoleEnv::new()?;
    assert!(env.state().is_none());
    assert_eq!(env.step(0.0).unwrap_err(), EnvError::NotReset);
    Ok(())
}

// Four standard deviations of the 1e-4 start covariance. The seed is fixed,
// so this only guards against a broken sampler.
fn reset_tolerance() -> f64 {
    4.0 * INITIAL_NOISE.sqrt()
}

#[test]
fn seeded_reset_starts_near_hanging_rest() {
    let mut env = seeded_env(0);
    let obs = env.reset();
    let expected = [0.0, PI, 0.0, 0.0];
    for i in 0..4 {
        assert_relative_eq!(obs[i], expected[i], epsilon = reset_tolerance());
    }
    assert_eq!(env.state(), Some(&obs));
}

#[test]
fn zero_action_step_stays_near_rest() -> Result<()> {
    let mut env = seeded_env(0);
    env.reset();
    let step = env.step(0.0)?;
    // Start and process noise add up, so the spread grows by √2.
    let tolerance = reset_tolerance() * 2.0_f64.sqrt();
    let expected = [0.0, PI, 0.0, 0.0];
    for i in 0..4 {
        assert_relative_eq!(step.observation[i], expected[i], epsilon = tolerance);
    }
    assert!(!step.done);
    assert!(step.reward.is_none());
    assert!(step.info.is_empty());
    Ok(())
}

#[test]
fn same_seed_reproduces_first_observation() {
    let mut env = seeded_env(42);
    let first = env.reset();
    env.seed(Some(42));
    let second = env.reset();
    assert_eq!(first, second);
}

#[test]
fn same_seed_and_actions_reproduce_trajectory() -> Result<()> {
    let actions = [0.0, 1.0, -2.5, 5.0, 0.3];
    let rollout = |seed| -> Result<Vec<_>> {
        let mut env = seeded_env(seed);
        let mut states = vec![env.reset()];
        for &u in &actions {
            states.push(env.step(u)?.observation);
        }
        Ok(states)
    };
    assert_eq!(rollout(9)?, rollout(9)?);
    assert_ne!(rollout(9)?, rollout(10)?);
    Ok(())
}

#[test]
fn seed_returns_the_seed_used() {
    let mut env = seeded_env(0);
    assert_eq!(env.seed(Some(1234)), vec![1234]);
    let drawn = env.seed(None);
    assert_eq!(drawn.len(), 1);

    // Reseeding with the reported value replays the stream.
    let a = env.reset();
    env.seed(Some(drawn[0]));
    assert_eq!(env.reset(), a);
}

#[test]
fn step_adds_process_noise_to_nominal_dynamics() -> Result<()> {
    let mut env = seeded_env(3);
    let start = env.reset();
    let nominal = env.model().dynamics(&start, 2.0);
    let observed = env.step(2.0)?.observation;
    let deviation = observed - nominal;
    assert!(deviation.amax() > 0.0);
    // Process noise standard deviation is 1e-2.
    assert!(deviation.amax() < 0.1);
    Ok(())
}

#[test]
fn episodes_never_terminate() -> Result<()> {
    let mut env = seeded_env(5);
    env.reset();
    for i in 0..500 {
        let u = if i % 2 == 0 { 5.0 } else { -5.0 };
        let step = env.step(u)?;
        assert!(!step.done);
        assert!(step.observation.iter().all(|v| v.is_finite()));
    }
    Ok(())
}

#[test]
fn reward_is_left_to_the_caller() -> Result<()> {
    let mut env = seeded_env(8);
    env.reset();
    let step = env.step(1.0)?;
    assert_eq!(step.reward, None);
    let reward = env.model().reward(&step.observation, 1.0, true);
    assert!(reward < 0.0);
    Ok(())
}

#[test]
fn reset_restarts_an_episode() -> Result<()> {
    let mut env = seeded_env(11);
    env.reset();
    for _ in 0..100 {
        env.step(5.0)?;
    }
    let pushed = *env.state().expect("episode in progress");
    assert!(pushed[0] > 0.1);
    let fresh = env.reset();
    assert!(fresh[0].abs() < 0.1);
    Ok(())
}

#[test]
fn slice_actions_must_have_one_entry() -> Result<()> {
    let mut env = seeded_env(1);
    env.reset();
    let obs = env.step_slice(&[0.5])?.observation;
    assert!(obs.iter().all(|v| v.is_finite()));
    assert_eq!(
        env.step_slice(&[0.5, 0.5]).unwrap_err(),
        EnvError::Plant(PlantError::DimensionMismatch {
            expected: 1,
            found: 2
        })
    );
    assert!(env.step_slice(&[]).is_err());
    Ok(())
}

#[test]
fn invalid_config_fails_at_construction() {
    init_tracing();
    let config = PlantConfig {
        dt: 0.0,
        ..PlantConfig::default()
    };
    assert!(matches!(
        CartpoleEnv::with_config(config),
        Err(EnvError::Plant(PlantError::InvalidConfig(_)))
    ));
}

#[test]
fn custom_config_flows_into_the_model() -> Result<()> {
    init_tracing();
    let config = PlantConfig {
        dt: 0.02,
        ..PlantConfig::default()
    };
    let env = CartpoleEnv::with_config(config)?;
    assert_eq!(env.model().dt(), 0.02);
    Ok(())
}
