//! Connect Tunnel Prelude

pub use crate::builder::TunnelBuilder;
pub use crate::tunnel;
pub use connect_tunnel_client::prelude::*;
