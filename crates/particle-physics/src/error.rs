use thiserror::Error;

/// Crate-wide result type alias.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while building a simulation.
///
/// Stepping never fails; everything here is reported at construction time.
#[derive(Debug, Error)]
pub enum Error {
    /// Particle count, type count or a tuning parameter is out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Attraction matrix is not square or holds a value outside [-1, 1].
    #[error("invalid attraction matrix: {0}")]
    InvalidMatrix(String),

    /// Per-particle input does not line up with the matrix or with itself.
    #[error("invalid particle: {0}")]
    InvalidParticle(String),

    /// Reading a configuration file failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// A configuration file could not be parsed.
    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),
}
