//! Proxy response validation
//!
//! Decides whether the proxy opened the tunnel. Every non-success answer comes
//! back with a diagnostic; nothing here panics or mutates the response.

use std::borrow::Cow;

use super::response::ProxyResponse;
use super::status::StatusLine;
use crate::error::{self, Error};

/// Diagnostic used when a response carries neither error text nor content.
pub const EMPTY_RESPONSE_DIAGNOSTIC: &str = "<empty response>";

/// Verdict on a proxy's answer to a CONNECT request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TunnelOutcome {
    /// 2xx status, the tunnel is open.
    Established(StatusLine),
    /// Valid status line outside 2xx.
    Rejected {
        status: StatusLine,
        diagnostic: String,
    },
    /// No usable status line.
    Malformed { diagnostic: String },
}

impl TunnelOutcome {
    #[must_use]
    pub fn is_established(&self) -> bool {
        matches!(self, TunnelOutcome::Established(_))
    }

    #[must_use]
    pub fn status(&self) -> Option<&StatusLine> {
        match self {
            TunnelOutcome::Established(status) | TunnelOutcome::Rejected { status, .. } => {
                Some(status)
            }
            TunnelOutcome::Malformed { .. } => None,
        }
    }

    /// Diagnostic text, present for every outcome except `Established`.
    #[must_use]
    pub fn diagnostic(&self) -> Option<&str> {
        match self {
            TunnelOutcome::Established(_) => None,
            TunnelOutcome::Rejected { diagnostic, .. } | TunnelOutcome::Malformed { diagnostic } => {
                Some(diagnostic)
            }
        }
    }

    /// Convert into a `Result`, mapping failures onto the crate error kinds.
    ///
    /// # Errors
    ///
    /// `Rejected` becomes `Kind::ProxyRejected`, `Malformed` becomes
    /// `Kind::EmptyOrIncompleteResponse`.
    pub fn into_result(self) -> Result<StatusLine, Error> {
        match self {
            TunnelOutcome::Established(status) => Ok(status),
            TunnelOutcome::Rejected { status, diagnostic } => {
                Err(error::proxy_rejected(status.status_code(), diagnostic))
            }
            TunnelOutcome::Malformed { diagnostic } => Err(error::empty_or_incomplete(diagnostic)),
        }
    }
}

/// Stateless validator for proxy responses.
#[derive(Debug, Clone, Copy, Default)]
pub struct ResponseValidator;

impl ResponseValidator {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// True iff a status line is present and its code is in `200..=299`.
    #[must_use]
    pub fn validate(&self, response: &dyn ProxyResponse) -> bool {
        self.inspect(response).is_established()
    }

    /// Classify the response and build its diagnostic.
    #[must_use]
    pub fn inspect(&self, response: &dyn ProxyResponse) -> TunnelOutcome {
        let Some(status) = response.status() else {
            let diagnostic = malformed_diagnostic(response);
            tracing::warn!(
                missing_content = response.is_missing_content(),
                diagnostic = ?diagnostic,
                "proxy response does not contain a status line"
            );
            return TunnelOutcome::Malformed { diagnostic };
        };

        if status.is_success() {
            tracing::debug!(
                status_code = status.status_code(),
                reason = %status.reason_phrase(),
                "proxy accepted CONNECT request"
            );
            return TunnelOutcome::Established(status.clone());
        }

        let diagnostic = rejected_diagnostic(status, response);
        tracing::warn!(
            status_code = status.status_code(),
            diagnostic = %diagnostic,
            "proxy rejected CONNECT request"
        );
        TunnelOutcome::Rejected {
            status: status.clone(),
            diagnostic,
        }
    }
}

/// Validate with the default validator.
#[must_use]
pub fn validate_proxy_response(response: &dyn ProxyResponse) -> bool {
    ResponseValidator::new().validate(response)
}

/// Inspect with the default validator.
#[must_use]
pub fn inspect_proxy_response(response: &dyn ProxyResponse) -> TunnelOutcome {
    ResponseValidator::new().inspect(response)
}

/// Pre-supplied error text first, then the decoded body.
fn detail(response: &dyn ProxyResponse) -> Option<Cow<'_, str>> {
    if let Some(error) = response.error().filter(|e| !e.is_empty()) {
        return Some(Cow::Borrowed(error));
    }
    response
        .contents()
        .filter(|c| !c.is_empty())
        .map(String::from_utf8_lossy)
}

fn malformed_diagnostic(response: &dyn ProxyResponse) -> String {
    detail(response).map_or_else(|| EMPTY_RESPONSE_DIAGNOSTIC.to_owned(), Cow::into_owned)
}

fn rejected_diagnostic(status: &StatusLine, response: &dyn ProxyResponse) -> String {
    let mut diagnostic = status.status_code().to_string();
    if !status.reason_phrase().is_empty() {
        diagnostic.push(' ');
        diagnostic.push_str(status.reason_phrase());
    }

    if let Some(detail) = detail(response) {
        diagnostic.push_str(": ");
        diagnostic.push_str(&detail);
    }

    if response.is_missing_content() {
        diagnostic.push_str(" (incomplete body)");
    }

    diagnostic
}
