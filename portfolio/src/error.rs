//! Error types shared across the site core.

use thiserror::Error;

/// Reasons a site configuration is rejected.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse site config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("typewriter needs at least one role")]
    NoRoles,

    #[error("typewriter role #{0} is empty")]
    EmptyRole(usize),

    #[error("`{0}` must be greater than zero")]
    ZeroDuration(&'static str),
}
