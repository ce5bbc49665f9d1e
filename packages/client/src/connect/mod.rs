//! CONNECT tunnel establishment
//!
//! `tunnel` holds the protocol core (request bytes, status line, response
//! validation); `tcp` drives that core over a stream the caller already owns.

pub mod tcp;
pub mod tunnel;

pub use tcp::http_connect::{establish_tunnel, establish_tunnel_async};
pub use tunnel::{
    ProxyResponse, RawProxyResponse, ResponseValidator, StatusLine, StatusLineError,
    TunnelOutcome, build_request, build_request_string,
};
