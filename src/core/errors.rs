use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StationError {
    #[error("Invalid simulation config: {0}")]
    InvalidConfig(String),

    #[error("Invalid station topology: {0}")]
    InvalidTopology(String),

    #[error("Failed to spawn vehicle thread: {0}")]
    Spawn(String),
}

pub type Result<T> = std::result::Result<T, StationError>;
