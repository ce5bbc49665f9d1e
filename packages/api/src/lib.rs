//! Connect Tunnel Public API
//!
//! Opens an HTTP/1.1 `CONNECT` tunnel through a proxy on a stream the caller
//! already owns, then hands the stream back for TLS/AMQP to run on top.
//!
//! ```rust
//! use connect_tunnel::tunnel;
//!
//! let request = tunnel("broker.example.com:5671")
//!     .proxy_authorization("Basic dXNlcjpwYXNz")
//!     .header("X-Request-Id", "42")
//!     .to_request_string()
//!     .expect("host is set");
//!
//! assert!(request.starts_with("CONNECT broker.example.com:5671 HTTP/1.1\r\n"));
//! assert!(request.ends_with("X-Request-Id: 42\r\n\r\n"));
//! ```

#![deny(unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]

pub mod builder;
pub mod prelude;

pub use builder::{PROXY_AUTHORIZATION, TunnelBuilder};

// Re-export important types from client package
pub use connect_tunnel_client::{
    Error, HandshakeConfig, HeaderSet, Kind, ProxyResponse, RawProxyResponse, Result,
    ResponseValidator, StatusLine, StatusLineError, TunnelOutcome, build_request,
    build_request_string, inspect_proxy_response, parse_status_line, validate_proxy_response,
};

/// Start a CONNECT tunnel builder for `host` (`host:port` form).
///
/// Shorthand for `TunnelBuilder::new(host)`
pub fn tunnel(host: impl Into<String>) -> TunnelBuilder {
    TunnelBuilder::new(host)
}
