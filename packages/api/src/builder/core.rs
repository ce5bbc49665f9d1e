//! Core builder type
//!
//! [`TunnelBuilder`] collects the target host, extra headers and handshake
//! limits, then serializes or runs the CONNECT handshake.

use bytes::Bytes;
use connect_tunnel_client::error;
use connect_tunnel_client::{HandshakeConfig, HeaderSet, Result};

/// Fluent builder for one CONNECT handshake.
#[derive(Debug, Clone)]
pub struct TunnelBuilder {
    pub(crate) host: String,
    pub(crate) headers: HeaderSet,
    pub(crate) config: HandshakeConfig,
}

impl TunnelBuilder {
    /// Create a builder for `host`, used verbatim as CONNECT target and `Host`.
    pub fn new(host: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            headers: HeaderSet::new(),
            config: HandshakeConfig::default(),
        }
    }

    /// Replace the handshake configuration
    #[must_use]
    pub fn config(mut self, config: HandshakeConfig) -> Self {
        self.config = config;
        self
    }

    #[must_use]
    pub fn host(&self) -> &str {
        &self.host
    }

    #[must_use]
    pub fn header_set(&self) -> &HeaderSet {
        &self.headers
    }

    /// Serialize the request as ISO-8859-1 bytes.
    ///
    /// # Errors
    ///
    /// `Kind::Builder` when the host is empty.
    pub fn to_bytes(&self) -> Result<Bytes> {
        self.check_host()?;
        Ok(connect_tunnel_client::build_request(&self.host, &self.headers))
    }

    /// Serialize the request as text.
    ///
    /// # Errors
    ///
    /// `Kind::Builder` when the host is empty.
    pub fn to_request_string(&self) -> Result<String> {
        self.check_host()?;
        Ok(connect_tunnel_client::build_request_string(
            &self.host,
            &self.headers,
        ))
    }

    pub(crate) fn check_host(&self) -> Result<()> {
        if self.host.trim().is_empty() {
            return Err(error::builder("CONNECT target host cannot be empty"));
        }
        Ok(())
    }
}
