use thiserror::Error;

/// Core error type shared across demoseed crates.
#[derive(Debug, Error)]
pub enum Error {
    /// The generation config violates a precondition.
    #[error("invalid config: {0}")]
    InvalidConfig(String),
    /// The config file is not valid TOML for `SeedConfig`.
    #[error("config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience alias for results returned by demoseed crates.
pub type Result<T> = std::result::Result<T, Error>;
