use std::error::Error as StdError;
use std::io;

use super::types::{Error, Kind};

impl Error {
    /// Returns true if the error is from a builder or configuration check.
    #[must_use]
    pub fn is_builder(&self) -> bool {
        matches!(self.inner.kind, Kind::Builder)
    }

    /// Returns true if the proxy answered with a non-2xx status.
    #[must_use]
    pub fn is_rejected(&self) -> bool {
        matches!(self.inner.kind, Kind::ProxyRejected { .. })
    }

    /// Returns true if the proxy answer had no usable status line.
    #[must_use]
    pub fn is_malformed(&self) -> bool {
        matches!(
            self.inner.kind,
            Kind::MalformedStatusLine | Kind::EmptyOrIncompleteResponse
        )
    }

    /// Returns true if the read limit was exceeded.
    #[must_use]
    pub fn is_too_large(&self) -> bool {
        matches!(self.inner.kind, Kind::ResponseTooLarge)
    }

    /// Returns true if the error is related to a timeout reported by the transport.
    #[must_use]
    pub fn is_timeout(&self) -> bool {
        let mut source = self.source();

        while let Some(err) = source {
            if let Some(io) = err.downcast_ref::<io::Error>()
                && matches!(io.kind(), io::ErrorKind::TimedOut | io::ErrorKind::WouldBlock)
            {
                return true;
            }
            source = err.source();
        }

        false
    }

    /// Returns true if the error came from the stream.
    #[must_use]
    pub fn is_io(&self) -> bool {
        matches!(self.inner.kind, Kind::Io)
    }

    /// Returns the proxy's status code, if the error was generated from a rejection.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self.inner.kind {
            Kind::ProxyRejected { status_code } => Some(status_code),
            _ => None,
        }
    }
}
