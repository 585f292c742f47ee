use thiserror::Error;

/// Errors surfaced while bringing a harvest subsystem up.
///
/// The detection and launch path itself is infallible; these only come
/// from loading palettes and tunables.
#[derive(Debug, Error)]
pub enum TimberfallError {
    #[error("Failed to load data: {0}")]
    DataLoad(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
