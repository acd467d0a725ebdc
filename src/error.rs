use thiserror::Error;

/// Crate-wide result type alias.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while loading or validating a scenario.
///
/// The simulation core itself never fails; these only come from the
/// configuration boundary.
#[derive(Debug, Error)]
pub enum Error {
    /// Invalid value in a scenario file.
    #[error("invalid parameter: {0}")]
    InvalidParam(String),

    /// Scenario file could not be read.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Scenario file is not valid YAML for `ScenarioConfig`.
    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),
}
