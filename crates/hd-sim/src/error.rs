use hd_core::HdError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Core(#[from] HdError),
}

pub type SimResult<T> = Result<T, SimError>;
