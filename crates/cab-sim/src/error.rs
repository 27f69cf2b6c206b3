use cab_core::CabError;
use cab_network::NetworkError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Core(#[from] CabError),

    #[error("road network error: {0}")]
    Network(#[from] NetworkError),
}

pub type SimResult<T> = Result<T, SimError>;
