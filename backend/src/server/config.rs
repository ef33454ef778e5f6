//! What the server needs to start: where to listen and which store to use.

use std::net::SocketAddr;

use backend::outbound::persistence::DbPool;

/// Bind address and database pool handed to [`create_server`](super::create_server).
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) pool: DbPool,
}

impl ServerConfig {
    /// Pair a bind address with the pool the repository will draw from.
    #[must_use]
    pub fn new(bind_addr: SocketAddr, pool: DbPool) -> Self {
        Self { bind_addr, pool }
    }
}
