//! HTTP utilities and helpers
//!
//! Header containers shared by the request builder and the response parser.

pub mod headers;


pub use headers::*;
