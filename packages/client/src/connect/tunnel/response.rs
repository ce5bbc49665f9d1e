//! Proxy response capability set
//!
//! The validator only ever sees a proxy answer through [`ProxyResponse`].
//! [`RawProxyResponse`] is the owned implementation built from the bytes a
//! transport read off the wire; test doubles implement the trait directly.

use bytes::{Bytes, BytesMut};

use super::status::StatusLine;
use crate::http::headers::HeaderSet;

const HEAD_TERMINATOR: &[u8] = b"\r\n\r\n";
const BARE_LF_TERMINATOR: &[u8] = b"\n\n";
const CONTENT_LENGTH: &str = "Content-Length";

/// Read-only view of a proxy's answer to a CONNECT request.
pub trait ProxyResponse {
    /// Parsed status line, absent when the answer had none.
    fn status(&self) -> Option<&StatusLine>;

    /// True when the declared body has not fully arrived.
    fn is_missing_content(&self) -> bool;

    /// Body bytes, if any were received.
    fn contents(&self) -> Option<&[u8]>;

    /// Pre-rendered diagnostic text supplied by the transport.
    fn error(&self) -> Option<&str>;
}

/// Proxy answer parsed from raw response bytes.
#[derive(Debug, Clone, Default)]
pub struct RawProxyResponse {
    status: Option<StatusLine>,
    headers: HeaderSet,
    contents: BytesMut,
    expected_length: Option<usize>,
    head_complete: bool,
    error: Option<String>,
}

impl RawProxyResponse {
    /// Parse whatever part of a response has been received.
    ///
    /// Never fails: an unparseable first line leaves the status absent and
    /// keeps the whole input as contents for diagnostics.
    #[must_use]
    pub fn parse(raw: &[u8]) -> Self {
        let (head, body, head_complete) = match find_head_end(raw) {
            Some((end, body_start)) => (&raw[..end], &raw[body_start..], true),
            None => (raw, &raw[raw.len()..], false),
        };

        let head_text = String::from_utf8_lossy(head);
        let mut lines = head_text.lines();
        let status = lines.next().and_then(|line| match StatusLine::parse(line) {
            Ok(status) => Some(status),
            Err(e) => {
                tracing::trace!(error = %e, "proxy response has no usable status line");
                None
            }
        });

        let mut response = Self {
            head_complete,
            ..Self::default()
        };

        if status.is_some() {
            response.headers = lines.filter_map(split_header).collect();
            response.expected_length = response
                .headers
                .get_ignore_case(CONTENT_LENGTH)
                .and_then(|v| v.trim().parse::<usize>().ok());
            response.contents.extend_from_slice(body);
        } else {
            response.contents.extend_from_slice(raw);
        }

        response.status = status;
        response.refresh_error();
        response
    }

    /// Append body bytes that arrived after the initial parse.
    pub fn add_content(&mut self, chunk: &[u8]) {
        self.contents.extend_from_slice(chunk);
        self.refresh_error();
    }

    /// Response headers; empty when the status line was absent.
    #[must_use]
    pub fn headers(&self) -> &HeaderSet {
        &self.headers
    }

    /// Declared `Content-Length`, if any.
    #[must_use]
    pub fn content_length(&self) -> Option<usize> {
        self.expected_length
    }

    /// True once the blank line ending the header section was seen.
    #[must_use]
    pub fn is_head_complete(&self) -> bool {
        self.head_complete
    }

    /// Number of body bytes still expected according to `Content-Length`.
    #[must_use]
    pub fn remaining_content(&self) -> usize {
        self.expected_length
            .map_or(0, |len| len.saturating_sub(self.contents.len()))
    }

    /// Snapshot of the body bytes.
    #[must_use]
    pub fn body(&self) -> Bytes {
        Bytes::copy_from_slice(&self.contents)
    }

    fn refresh_error(&mut self) {
        self.error = if self.contents.is_empty() {
            None
        } else {
            Some(String::from_utf8_lossy(&self.contents).into_owned())
        };
    }
}

impl ProxyResponse for RawProxyResponse {
    fn status(&self) -> Option<&StatusLine> {
        self.status.as_ref()
    }

    fn is_missing_content(&self) -> bool {
        !self.head_complete || self.remaining_content() > 0
    }

    fn contents(&self) -> Option<&[u8]> {
        if self.contents.is_empty() {
            None
        } else {
            Some(&self.contents)
        }
    }

    fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}

/// Locate the blank line ending the header section as `(head_end, body_start)`.
///
/// Accepts `\r\n\r\n` and, for proxies that send bare line feeds, `\n\n`.
pub(crate) fn find_head_end(buf: &[u8]) -> Option<(usize, usize)> {
    (0..buf.len()).find_map(|pos| {
        let rest = &buf[pos..];
        if rest.starts_with(HEAD_TERMINATOR) {
            Some((pos, pos + HEAD_TERMINATOR.len()))
        } else if rest.starts_with(BARE_LF_TERMINATOR) {
            Some((pos, pos + BARE_LF_TERMINATOR.len()))
        } else {
            None
        }
    })
}

fn split_header(line: &str) -> Option<(String, String)> {
    line.split_once(':')
        .map(|(name, value)| (name.trim().to_owned(), value.trim().to_owned()))
        .filter(|(name, _)| !name.is_empty())
}
