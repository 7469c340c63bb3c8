//! Errors raised while persisting `config.ron`.

/// Failure to load, save or parse the generator configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// `config.ron` exists but could not be read.
    #[error("failed to read config.ron: {0}")]
    ReadError(#[source] std::io::Error),

    /// The config directory or `config.ron` could not be written.
    #[error("failed to write config.ron: {0}")]
    WriteError(#[source] std::io::Error),

    /// `config.ron` is not valid RON for [`crate::Config`].
    #[error("invalid config.ron: {0}")]
    ParseError(#[source] ron::error::SpannedError),

    /// The in-memory config could not be rendered as RON.
    #[error("failed to serialize config: {0}")]
    SerializeError(#[source] ron::Error),
}
