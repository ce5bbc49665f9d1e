//! HTTP CONNECT protocol core
//!
//! Pure functions only: nothing here blocks, allocates sockets or keeps state
//! between calls.

pub mod request;
pub mod response;
pub mod status;
pub mod validate;

#[cfg(test)]
mod response_tests;
#[cfg(test)]
mod validate_tests;

pub use request::{build_request, build_request_string};
pub use response::{ProxyResponse, RawProxyResponse};
pub use status::{StatusLine, StatusLineError, parse_status_line};
pub use validate::{ResponseValidator, TunnelOutcome, inspect_proxy_response, validate_proxy_response};
