//! Handshake execution
//!
//! Runs the CONNECT handshake over a stream the caller already connected to
//! the proxy.

use std::io::{Read, Write};

use connect_tunnel_client::{RawProxyResponse, Result, establish_tunnel, establish_tunnel_async};
use tokio::io::{AsyncRead, AsyncWrite};

use crate::builder::core::TunnelBuilder;

impl TunnelBuilder {
    /// Perform the handshake over a blocking stream.
    ///
    /// # Errors
    ///
    /// `Kind::Builder` for an empty host, otherwise see
    /// [`connect_tunnel_client::establish_tunnel`].
    pub fn establish<S>(&self, stream: &mut S) -> Result<RawProxyResponse>
    where
        S: Read + Write + ?Sized,
    {
        self.check_host()?;
        tracing::debug!(host = %self.host, "opening CONNECT tunnel");
        establish_tunnel(stream, &self.host, &self.headers, &self.config)
    }

    /// Perform the handshake over a `tokio` stream.
    ///
    /// # Errors
    ///
    /// `Kind::Builder` for an empty host, otherwise see
    /// [`connect_tunnel_client::establish_tunnel_async`].
    pub async fn establish_async<S>(&self, stream: &mut S) -> Result<RawProxyResponse>
    where
        S: AsyncRead + AsyncWrite + Unpin + ?Sized,
    {
        self.check_host()?;
        tracing::debug!(host = %self.host, "opening CONNECT tunnel");
        establish_tunnel_async(stream, &self.host, &self.headers, &self.config).await
    }
}
