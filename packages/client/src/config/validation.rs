//! Configuration validation

use thiserror::Error;

use super::types::HandshakeConfig;

/// Configuration validation result type
pub type ConfigResult<T> = Result<T, ConfigurationError>;

/// Configuration error types
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    #[error("Invalid buffer size: {0}")]
    InvalidBufferSize(String),

    #[error("Configuration conflict: {0}")]
    Conflict(String),
}

/// Configuration validation trait
pub trait Validator {
    /// Validates the configuration settings
    ///
    /// # Errors
    ///
    /// Returns a `ConfigurationError` variant if any validation fails.
    fn validate(&self) -> ConfigResult<()>;
}

impl Validator for HandshakeConfig {
    /// # Errors
    ///
    /// - `InvalidBufferSize` if either size is zero
    /// - `Conflict` if a single read is larger than the whole response limit
    fn validate(&self) -> ConfigResult<()> {
        if self.max_response_bytes == 0 {
            return Err(ConfigurationError::InvalidBufferSize(
                "max_response_bytes cannot be zero".to_string(),
            ));
        }
        if self.read_buffer_size == 0 {
            return Err(ConfigurationError::InvalidBufferSize(
                "read_buffer_size cannot be zero".to_string(),
            ));
        }
        if self.read_buffer_size > self.max_response_bytes {
            return Err(ConfigurationError::Conflict(format!(
                "read_buffer_size ({}) exceeds max_response_bytes ({})",
                self.read_buffer_size, self.max_response_bytes
            )));
        }
        Ok(())
    }
}

impl From<ConfigurationError> for crate::error::Error {
    fn from(err: ConfigurationError) -> Self {
        crate::error::builder(err)
    }
}
