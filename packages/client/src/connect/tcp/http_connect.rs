//! HTTP CONNECT tunnel establishment
//!
//! Sends the CONNECT request, reads the proxy's answer up to the end of its
//! header section (plus the declared body of a rejection), and validates it.
//! Reads are chunked, so for a 2xx answer any bytes the target already pushed
//! through the tunnel end up in [`RawProxyResponse::body`].

use std::io::{self, Read, Write};

use bytes::BytesMut;
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};

use crate::config::{HandshakeConfig, Validator};
use crate::connect::tunnel::request::build_request;
use crate::connect::tunnel::response::{ProxyResponse, RawProxyResponse, find_head_end};
use crate::connect::tunnel::validate::inspect_proxy_response;
use crate::error::{self, Result};
use crate::http::headers::HeaderSet;

/// Establish an HTTP CONNECT tunnel over a blocking stream.
///
/// On success the stream is positioned right after the proxy's header
/// section and the parsed answer is returned.
///
/// # Errors
///
/// - `Kind::Builder` for an invalid `config`
/// - `Kind::Io` when writing or reading the stream fails
/// - `Kind::ResponseTooLarge` when the answer outgrows `max_response_bytes`
/// - `Kind::ProxyRejected` / `Kind::EmptyOrIncompleteResponse` from validation
pub fn establish_tunnel<S>(
    stream: &mut S,
    host: &str,
    headers: &HeaderSet,
    config: &HandshakeConfig,
) -> Result<RawProxyResponse>
where
    S: Read + Write + ?Sized,
{
    config.validate()?;

    let request = build_request(host, headers);
    stream.write_all(&request).map_err(error::io)?;
    stream.flush().map_err(error::io)?;
    tracing::debug!(host = %host, bytes = request.len(), "sent CONNECT request");

    let mut head = BytesMut::with_capacity(config.read_buffer_size);
    let mut chunk = vec![0u8; config.read_buffer_size];

    while find_head_end(&head).is_none() {
        let n = read_blocking(stream, &mut chunk)?;
        if n == 0 {
            tracing::debug!(received = head.len(), "proxy closed stream before end of headers");
            break;
        }
        append_within_limit(&mut head, &chunk[..n], config)?;
    }

    let mut response = RawProxyResponse::parse(&head);
    let mut received = head.len();

    if wants_rejection_body(&response, config) {
        while response.remaining_content() > 0 {
            let want = response.remaining_content().min(chunk.len());
            let n = read_blocking(stream, &mut chunk[..want])?;
            if n == 0 {
                break;
            }
            received = checked_total(received, n, config)?;
            response.add_content(&chunk[..n]);
        }
    }

    finish(host, response)
}

/// Establish an HTTP CONNECT tunnel over a `tokio` stream.
///
/// Same contract as [`establish_tunnel`]. Cancelling the future leaves the
/// stream in an unspecified position; callers should drop it.
///
/// # Errors
///
/// See [`establish_tunnel`].
pub async fn establish_tunnel_async<S>(
    stream: &mut S,
    host: &str,
    headers: &HeaderSet,
    config: &HandshakeConfig,
) -> Result<RawProxyResponse>
where
    S: AsyncRead + AsyncWrite + Unpin + ?Sized,
{
    config.validate()?;

    let request = build_request(host, headers);
    stream.write_all(&request).await.map_err(error::io)?;
    stream.flush().await.map_err(error::io)?;
    tracing::debug!(host = %host, bytes = request.len(), "sent CONNECT request");

    let mut head = BytesMut::with_capacity(config.read_buffer_size);
    let mut chunk = vec![0u8; config.read_buffer_size];

    while find_head_end(&head).is_none() {
        let n = stream.read(&mut chunk).await.map_err(error::io)?;
        if n == 0 {
            tracing::debug!(received = head.len(), "proxy closed stream before end of headers");
            break;
        }
        append_within_limit(&mut head, &chunk[..n], config)?;
    }

    let mut response = RawProxyResponse::parse(&head);
    let mut received = head.len();

    if wants_rejection_body(&response, config) {
        while response.remaining_content() > 0 {
            let want = response.remaining_content().min(chunk.len());
            let n = stream.read(&mut chunk[..want]).await.map_err(error::io)?;
            if n == 0 {
                break;
            }
            received = checked_total(received, n, config)?;
            response.add_content(&chunk[..n]);
        }
    }

    finish(host, response)
}

fn read_blocking<S: Read + ?Sized>(stream: &mut S, buf: &mut [u8]) -> Result<usize> {
    loop {
        match stream.read(buf) {
            Ok(n) => return Ok(n),
            Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
            Err(e) => return Err(error::io(e)),
        }
    }
}

fn append_within_limit(buf: &mut BytesMut, data: &[u8], config: &HandshakeConfig) -> Result<()> {
    checked_total(buf.len(), data.len(), config)?;
    buf.extend_from_slice(data);
    Ok(())
}

fn checked_total(received: usize, more: usize, config: &HandshakeConfig) -> Result<usize> {
    let total = received.saturating_add(more);
    if total > config.max_response_bytes {
        tracing::warn!(
            limit = config.max_response_bytes,
            received = total,
            "proxy response exceeds read limit"
        );
        return Err(error::response_too_large(config.max_response_bytes));
    }
    Ok(total)
}

fn wants_rejection_body(response: &RawProxyResponse, config: &HandshakeConfig) -> bool {
    config.read_rejection_body
        && response.is_head_complete()
        && response.status().is_some_and(|s| !s.is_success())
}

fn finish(host: &str, response: RawProxyResponse) -> Result<RawProxyResponse> {
    let status = inspect_proxy_response(&response).into_result()?;
    tracing::debug!(
        host = %host,
        status_code = status.status_code(),
        "CONNECT tunnel established"
    );
    Ok(response)
}
