//! Error type for the convenience layer.

use anka_config::ConfigError;
use anka_numerology::NumerologyError;
use thiserror::Error;

/// Errors from the convenience API.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AnkaError {
    #[error(transparent)]
    Numerology(#[from] NumerologyError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("report JSON error: {0}")]
    Report(#[from] serde_json::Error),

    #[error("malformed report: {0}")]
    MalformedReport(&'static str),

    #[error("no birth profile given and no default profile configured")]
    NoProfile,
}
