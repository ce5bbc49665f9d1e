//! CONNECT request serialization
//!
//! One formatting routine produces the request text; the byte form is that
//! text encoded as ISO-8859-1, so the two representations cannot drift apart.

use std::fmt::Write as _;

use bytes::{BufMut, Bytes, BytesMut};

use crate::HTTP_VERSION;
use crate::http::headers::HeaderSet;

const CRLF: &str = "\r\n";

/// Substitute for characters outside ISO-8859-1.
const LATIN1_REPLACEMENT: u8 = b'?';

/// Serialize a CONNECT request for `host` as ISO-8859-1 bytes.
///
/// `host` is written verbatim as both the request target and the `Host`
/// header, so callers pass `host:port` when a port is needed. Header names
/// and values are written exactly as supplied, in the set's order.
#[must_use]
pub fn build_request(host: &str, headers: &HeaderSet) -> Bytes {
    let text = build_request_string(host, headers);
    encode_latin1(&text)
}

/// Serialize a CONNECT request for `host` as text.
#[must_use]
pub fn build_request_string(host: &str, headers: &HeaderSet) -> String {
    tracing::trace!(host = %host, header_count = headers.len(), "building CONNECT request");

    let mut request = String::with_capacity(64 + host.len() * 2 + headers.len() * 32);

    // Writing into a String cannot fail.
    let _ = write!(request, "CONNECT {host} {HTTP_VERSION}{CRLF}");
    let _ = write!(request, "Host: {host}{CRLF}");
    let _ = write!(request, "Connection: Keep-Alive{CRLF}");

    for (name, value) in headers {
        let _ = write!(request, "{name}: {value}{CRLF}");
    }

    request.push_str(CRLF);
    request
}

/// One byte per character; anything above U+00FF becomes `?`.
fn encode_latin1(text: &str) -> Bytes {
    let mut buf = BytesMut::with_capacity(text.len());
    for ch in text.chars() {
        let byte = u8::try_from(u32::from(ch)).unwrap_or(LATIN1_REPLACEMENT);
        buf.put_u8(byte);
    }
    buf.freeze()
}
