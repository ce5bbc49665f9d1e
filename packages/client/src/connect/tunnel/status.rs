//! Proxy response status line
//!
//! Parses the first line of the proxy's answer, `HTTP/<version> <code> <reason>`.
//! Splitting happens on the first two whitespace runs, so the reason phrase
//! keeps its inner spaces and may be empty.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

const HTTP_PREFIX: &str = "HTTP/";

/// Reasons a status line could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StatusLineError {
    #[error("status line is empty")]
    Empty,
    #[error("status line does not start with `HTTP/`")]
    MissingPrefix,
    #[error("status line has no protocol version")]
    MissingVersion,
    #[error("status line has no status code")]
    MissingStatusCode,
    #[error("invalid status code `{0}`")]
    InvalidStatusCode(String),
}

/// Parsed first line of a proxy response.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StatusLine {
    http_version: String,
    status_code: u16,
    reason_phrase: String,
}

impl StatusLine {
    /// Parse a single raw status line. Trailing CR/LF is ignored.
    ///
    /// Fields are separated by whitespace runs, so whitespace leading the
    /// reason phrase is dropped: `HTTP/1.1 200  padded` has reason `padded`
    /// and does not survive a `Display` round trip byte for byte.
    ///
    /// # Errors
    ///
    /// Returns a [`StatusLineError`] when the line is empty, lacks the
    /// `HTTP/` prefix or a version, or carries a non-integer status code.
    pub fn parse(raw: &str) -> Result<Self, StatusLineError> {
        let line = raw.trim_end_matches(['\r', '\n']);
        if line.trim().is_empty() {
            return Err(StatusLineError::Empty);
        }

        let rest = line
            .strip_prefix(HTTP_PREFIX)
            .ok_or(StatusLineError::MissingPrefix)?;

        let (version, rest) = split_token(rest);
        if version.is_empty() {
            return Err(StatusLineError::MissingVersion);
        }

        let (code, reason) = split_token(rest);
        if code.is_empty() {
            return Err(StatusLineError::MissingStatusCode);
        }

        let status_code = code
            .parse::<u16>()
            .map_err(|_| StatusLineError::InvalidStatusCode(code.to_owned()))?;

        Ok(Self {
            http_version: version.to_owned(),
            status_code,
            reason_phrase: reason.to_owned(),
        })
    }

    /// Protocol version without the `HTTP/` prefix, e.g. `"1.1"`.
    #[must_use]
    pub fn http_version(&self) -> &str {
        &self.http_version
    }

    #[must_use]
    pub fn status_code(&self) -> u16 {
        self.status_code
    }

    #[must_use]
    pub fn reason_phrase(&self) -> &str {
        &self.reason_phrase
    }

    /// True for codes in `200..=299`.
    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..=299).contains(&self.status_code)
    }

    /// The code as an `http::StatusCode`, when it is within `100..=999`.
    #[must_use]
    pub fn to_http_status(&self) -> Option<::http::StatusCode> {
        ::http::StatusCode::from_u16(self.status_code).ok()
    }
}

/// Parse a status line that may be absent.
///
/// # Errors
///
/// Absent input yields [`StatusLineError::Empty`]; otherwise as [`StatusLine::parse`].
pub fn parse_status_line(raw: Option<&str>) -> Result<StatusLine, StatusLineError> {
    raw.map_or(Err(StatusLineError::Empty), StatusLine::parse)
}

/// Split off the leading token; the remainder starts after the whitespace run.
fn split_token(s: &str) -> (&str, &str) {
    match s.find(char::is_whitespace) {
        Some(pos) => (&s[..pos], s[pos..].trim_start()),
        None => (s, ""),
    }
}

impl FromStr for StatusLine {
    type Err = StatusLineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for StatusLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{HTTP_PREFIX}{} {} {}",
            self.http_version, self.status_code, self.reason_phrase
        )
    }
}
