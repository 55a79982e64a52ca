use cartpole_physics::PlantError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum EnvError {
    #[error("step called before reset")]
    NotReset,
    #[error("covariance for {0} is not symmetric positive definite")]
    InvalidCovariance(&'static str),
    #[error("invalid space: {0}")]
    InvalidSpace(String),
    #[error(transparent)]
    Plant(#[from] PlantError),
}
