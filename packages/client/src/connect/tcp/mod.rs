//! Stream-level CONNECT handshake
//!
//! Drives the protocol core over a stream the caller has already connected to
//! the proxy. Opening, timing out and closing that stream stay with the caller.

pub mod http_connect;


pub use http_connect::{establish_tunnel, establish_tunnel_async};
