use std::error::Error as StdError;
use std::fmt;

/// A Result alias where the Err case is `connect_tunnel_client::Error`.
pub type Result<T> = std::result::Result<T, Error>;

/// Represents errors that can occur while establishing a CONNECT tunnel.
pub struct Error {
    pub inner: Box<Inner>,
}

pub struct Inner {
    pub kind: Kind,
    pub source: Option<Box<dyn StdError + Send + Sync>>,
    /// Human-readable text describing what the proxy sent back.
    pub diagnostic: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Kind {
    /// Invalid builder input or configuration
    Builder,
    /// Status line did not match `HTTP/<version> <code> <reason>`
    MalformedStatusLine,
    /// Proxy answered with a status outside 2xx
    ProxyRejected { status_code: u16 },
    /// No usable status line and no or blank content
    EmptyOrIncompleteResponse,
    /// Response grew past the configured read limit
    ResponseTooLarge,
    /// Transport failure on the caller's stream
    Io,
}

impl Error {
    pub fn new(kind: Kind) -> Error {
        Error {
            inner: Box::new(Inner {
                kind,
                source: None,
                diagnostic: None,
            }),
        }
    }

    #[must_use = "Error builder methods return a new Error and should be used"]
    pub fn with<E: Into<Box<dyn StdError + Send + Sync>>>(mut self, source: E) -> Error {
        self.inner.source = Some(source.into());
        self
    }

    #[must_use]
    pub fn with_diagnostic(mut self, diagnostic: impl Into<String>) -> Self {
        self.inner.diagnostic = Some(diagnostic.into());
        self
    }

    #[must_use]
    pub fn kind(&self) -> &Kind {
        &self.inner.kind
    }

    /// Get the diagnostic text associated with this error, if any
    #[must_use]
    pub fn diagnostic(&self) -> Option<&str> {
        self.inner.diagnostic.as_deref()
    }
}

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut f = f.debug_struct("connect_tunnel::Error");

        f.field("kind", &self.inner.kind);

        if let Some(ref source) = self.inner.source {
            f.field("source", source);
        }

        if let Some(ref diagnostic) = self.inner.diagnostic {
            f.field("diagnostic", diagnostic);
        }

        f.finish()
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.inner.kind {
            Kind::Builder => f.write_str("builder error")?,
            Kind::MalformedStatusLine => f.write_str("malformed proxy status line")?,
            Kind::ProxyRejected { status_code } => {
                write!(f, "proxy rejected CONNECT request ({status_code})")?;
            }
            Kind::EmptyOrIncompleteResponse => f.write_str("empty or incomplete proxy response")?,
            Kind::ResponseTooLarge => f.write_str("proxy response exceeds read limit")?,
            Kind::Io => f.write_str("i/o error during CONNECT handshake")?,
        }

        if let Some(ref diagnostic) = self.inner.diagnostic {
            write!(f, ": {}", diagnostic.trim_end())?;
        }

        Ok(())
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.inner
            .source
            .as_ref()
            .map(|err| &**err as &(dyn StdError + 'static))
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::new(Kind::Io).with(err)
    }
}

impl From<crate::connect::tunnel::status::StatusLineError> for Error {
    fn from(err: crate::connect::tunnel::status::StatusLineError) -> Self {
        Error::new(Kind::MalformedStatusLine).with(err)
    }
}
