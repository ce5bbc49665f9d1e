//! # Connect Tunnel Client
//!
//! Client side of the HTTP/1.1 `CONNECT` handshake used to open a proxied TCP
//! tunnel before another protocol (AMQP, TLS, ...) is layered on top.
//!
//! ## Features
//!
//! - **Exact request serialization** with required and caller-supplied headers
//! - **Status line parsing** that never panics on malformed input
//! - **Response validation** with a diagnostic for every rejected tunnel
//! - **Handshake drivers** for blocking and `tokio` streams owned by the caller
//!
//! ## Usage
//!
//! ```rust
//! use connect_tunnel_client::{HeaderSet, RawProxyResponse, build_request, validate_proxy_response};
//!
//! let mut headers = HeaderSet::new();
//! headers.insert("Proxy-Authorization", "Basic dXNlcjpwYXNz");
//!
//! let request = build_request("broker.example.com:5671", &headers);
//! assert!(request.starts_with(b"CONNECT broker.example.com:5671 HTTP/1.1\r\n"));
//!
//! let response = RawProxyResponse::parse(b"HTTP/1.1 200 Connection Established\r\n\r\n");
//! assert!(validate_proxy_response(&response));
//! ```

#![deny(unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]

pub mod config;
pub mod connect;
pub mod error;
pub mod http;

// Prelude with canonical types
pub mod prelude;

pub use crate::prelude::*;

/// Protocol version written on the request line.
pub const HTTP_VERSION: &str = "HTTP/1.1";

/// Default upper bound on response bytes read during a handshake.
pub const MAX_RESPONSE_BYTES: usize = 64 * 1024;
