//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on the account façade and remain testable without I/O.

use std::sync::Arc;

use crate::domain::AccountOperations;
use crate::domain::ports::AccountService;

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub accounts: AccountOperations,
}

impl HttpState {
    /// Construct state over an account service adapter.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use accounts::inbound::http::state::HttpState;
    /// use accounts::outbound::memory::InMemoryAccounts;
    ///
    /// let state = HttpState::new(Arc::new(InMemoryAccounts::default()));
    /// let _accounts = state.accounts.clone();
    /// ```
    pub fn new(service: Arc<dyn AccountService>) -> Self {
        Self {
            accounts: AccountOperations::new(service),
        }
    }
}
