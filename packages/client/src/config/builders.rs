//! Builder methods for handshake configuration

use super::types::HandshakeConfig;

impl HandshakeConfig {
    /// Set the maximum number of response bytes to buffer
    ///
    /// # Examples
    /// ```
    /// use connect_tunnel_client::HandshakeConfig;
    ///
    /// let config = HandshakeConfig::default().with_max_response_bytes(8192);
    /// assert_eq!(config.max_response_bytes, 8192);
    /// ```
    #[must_use]
    pub fn with_max_response_bytes(mut self, max: usize) -> Self {
        self.max_response_bytes = max;
        self
    }

    /// Set the size of each read from the stream
    #[must_use]
    pub fn with_read_buffer_size(mut self, size: usize) -> Self {
        self.read_buffer_size = size;
        self
    }

    /// Enable or disable reading the body of a rejected response
    ///
    /// Proxies often explain a 407 in the body. Disabling this stops reading
    /// right after the header section.
    #[must_use]
    pub fn with_rejection_body(mut self, enabled: bool) -> Self {
        self.read_rejection_body = enabled;
        self
    }
}
