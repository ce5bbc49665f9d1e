//! Connect Tunnel Prelude
//!
//! Essential types for building a CONNECT request and judging the proxy's reply.

// Request side
pub use crate::connect::tunnel::request::{build_request, build_request_string};
pub use crate::http::headers::HeaderSet;

// Response side
pub use crate::connect::tunnel::response::{ProxyResponse, RawProxyResponse};
pub use crate::connect::tunnel::status::{StatusLine, StatusLineError, parse_status_line};
pub use crate::connect::tunnel::validate::{
    ResponseValidator, TunnelOutcome, inspect_proxy_response, validate_proxy_response,
};

// Handshake drivers
pub use crate::connect::tcp::http_connect::{establish_tunnel, establish_tunnel_async};
pub use crate::config::HandshakeConfig;

// Error types
pub use crate::error::{Error, Kind, Result};
