//! Default values for `HandshakeConfig`

use super::types::HandshakeConfig;
use crate::MAX_RESPONSE_BYTES;

impl Default for HandshakeConfig {
    fn default() -> Self {
        Self {
            max_response_bytes: MAX_RESPONSE_BYTES,
            read_buffer_size: 4096,
            read_rejection_body: true,
        }
    }
}
