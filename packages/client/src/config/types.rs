//! Core handshake configuration structure

use serde::{Deserialize, Serialize};

/// CONNECT handshake configuration
///
/// Bounds how much of the proxy's answer the handshake drivers will buffer.
/// Timeouts are not configured here; they belong to the caller's transport.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HandshakeConfig {
    /// Maximum response bytes (status line, headers and body) to buffer
    pub max_response_bytes: usize,

    /// Size of each read from the stream
    pub read_buffer_size: usize,

    /// Keep reading a rejected response's declared body for diagnostics
    pub read_rejection_body: bool,
}
