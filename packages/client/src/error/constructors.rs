use super::BoxError;
use super::types::{Error, Kind};

/// Creates an `Error` for a builder error.
pub fn builder<E: Into<BoxError>>(e: E) -> Error {
    Error::new(Kind::Builder).with(e.into())
}

/// Creates an `Error` for an unparseable status line.
pub fn malformed_status_line<E: Into<BoxError>>(e: E) -> Error {
    Error::new(Kind::MalformedStatusLine).with(e.into())
}

/// Creates an `Error` for a non-2xx proxy answer.
pub fn proxy_rejected(status_code: u16, diagnostic: impl Into<String>) -> Error {
    Error::new(Kind::ProxyRejected { status_code }).with_diagnostic(diagnostic)
}

/// Creates an `Error` for a response without a usable status line.
pub fn empty_or_incomplete(diagnostic: impl Into<String>) -> Error {
    Error::new(Kind::EmptyOrIncompleteResponse).with_diagnostic(diagnostic)
}

/// Creates an `Error` for a response that outgrew the read limit.
pub fn response_too_large(limit: usize) -> Error {
    Error::new(Kind::ResponseTooLarge)
        .with_diagnostic(format!("more than {limit} bytes received without a complete response"))
}

/// Creates an `Error` for a transport failure.
pub fn io<E: Into<BoxError>>(e: E) -> Error {
    Error::new(Kind::Io).with(e.into())
}
