use thiserror::Error;

/// Faults surfaced to the caller. Configuration warnings are not errors, see
/// [`crate::Diagnostic`].
#[derive(Debug, Error)]
pub enum UiError {
    #[error("no element with id `{0}` is attached to the document")]
    ElementNotFound(String),
    #[error("no callback named `{0}` is registered")]
    UnknownCallback(String),
    #[error("invalid ui config: {0}")]
    Config(#[from] toml::de::Error),
    #[error("failed to serialize ui config: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[cfg(feature = "web")]
    #[error("browser call failed: {0}")]
    Browser(String),
}

pub type Result<T> = std::result::Result<T, UiError>;
