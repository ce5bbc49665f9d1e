//! Tunnel Builder API modules
//!
//! Fluent construction of a CONNECT request and the handshake that sends it.

pub mod core;
pub mod establish;
pub mod headers;


pub use self::core::*;
pub use headers::*;
