//! Handshake configuration
//!
//! Read limits for the CONNECT handshake drivers. The protocol core itself
//! (build, parse, validate) takes no configuration.

pub mod builders;
pub mod defaults;
pub mod types;
pub mod validation;


pub use types::HandshakeConfig;
pub use validation::{ConfigResult, ConfigurationError, Validator};
