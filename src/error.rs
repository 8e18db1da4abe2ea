//! Error taxonomy for Smart Coach

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoachError {
    #[error("Trial block is empty: at least one trial outcome is required")]
    EmptyBlock,

    #[error("Current SNR must be a finite number, got {value}")]
    NonFiniteLevel { value: f64 },

    #[error("Unrecognised trial outcome '{token}'")]
    InvalidTrial { token: String },

    #[error("Configuration error: {message}")]
    InvalidConfig { message: String },

    #[error("Invalid request: {message}")]
    InvalidRequest { message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl CoachError {
    /// True for errors caused by the caller's input rather than the service
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            Self::EmptyBlock
                | Self::NonFiniteLevel { .. }
                | Self::InvalidTrial { .. }
                | Self::InvalidRequest { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, CoachError>;
