//! Header management for the CONNECT request
//!
//! Values are forwarded verbatim; credentials are computed by the caller.

use crate::builder::core::TunnelBuilder;

/// Header name used for proxy credentials
pub const PROXY_AUTHORIZATION: &str = "Proxy-Authorization";

impl TunnelBuilder {
    /// Add or replace a custom header
    ///
    /// # Examples
    /// ```
    /// use connect_tunnel::TunnelBuilder;
    ///
    /// let builder = TunnelBuilder::new("host:443").header("X-Custom", "value");
    /// assert_eq!(builder.header_set().get("X-Custom"), Some("value"));
    /// ```
    #[must_use]
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name, value);
        self
    }

    /// Add several headers, in iteration order
    #[must_use]
    pub fn headers<I, K, V>(mut self, headers: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.headers.extend(headers);
        self
    }

    /// Add headers from an `http::HeaderMap` (names arrive lowercased)
    #[must_use]
    pub fn header_map(mut self, map: &http::HeaderMap) -> Self {
        let set = connect_tunnel_client::HeaderSet::from(map);
        self.headers.extend(set.iter());
        self
    }

    /// Set `Proxy-Authorization` to a pre-computed value such as `Basic <b64>`
    #[must_use]
    pub fn proxy_authorization(self, value: impl Into<String>) -> Self {
        self.header(PROXY_AUTHORIZATION, value)
    }
}
