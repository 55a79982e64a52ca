use cartpole_rl::{CartpoleEnv, Env};

/// Route library logs through the test harness. Safe to call from every test.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::DEBUG)
        .try_init();
}

pub fn seeded_env(seed: u64) -> CartpoleEnv {
    init_tracing();
    let mut env = CartpoleEnv::new().expect("default environment");
    env.seed(Some(seed));
    env
}
