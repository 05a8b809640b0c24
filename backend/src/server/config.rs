//! HTTP server configuration object.

use std::net::SocketAddr;
use std::sync::Arc;

use accounts::domain::ports::{AccessTokenVerifier, AccountService};
use accounts::outbound::memory::InMemoryAccounts;

/// Adapters and listener address used to build the server.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) accounts: Arc<dyn AccountService>,
    pub(crate) verifier: Arc<dyn AccessTokenVerifier>,
}

impl ServerConfig {
    /// Configure a server backed by a fresh in-memory account store.
    #[must_use]
    pub fn new(bind_addr: SocketAddr) -> Self {
        let store = Arc::new(InMemoryAccounts::default());
        Self {
            bind_addr,
            accounts: store.clone(),
            verifier: store,
        }
    }
}
