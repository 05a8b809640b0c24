//! Test helpers for inbound HTTP components.

use std::collections::HashMap;
use std::sync::Arc;

use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, web};
use async_trait::async_trait;
use serde_json::Value;

use crate::domain::SessionClaim;
use crate::domain::ports::{AccessTokenError, AccessTokenVerifier, AccountService};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::users;
use crate::middleware::BearerAuth;

/// Verifier resolving a fixed set of tokens to raw claims.
#[derive(Debug, Default, Clone)]
pub struct FixedClaims(HashMap<String, Value>);

impl FixedClaims {
    /// Accept `token` and attach `claim` for it.
    pub fn with(mut self, token: &str, claim: impl Into<Value>) -> Self {
        self.0.insert(token.to_owned(), claim.into());
        self
    }
}

#[async_trait]
impl AccessTokenVerifier for FixedClaims {
    async fn verify(&self, token: &str) -> Result<SessionClaim, AccessTokenError> {
        self.0
            .get(token)
            .cloned()
            .map(SessionClaim::new)
            .ok_or_else(AccessTokenError::invalid)
    }
}

/// Build the users app over the given service and token verifier.
pub fn users_app(
    service: Arc<dyn AccountService>,
    verifier: Arc<dyn AccessTokenVerifier>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(web::Data::new(HttpState::new(service)))
        .wrap(BearerAuth::new(verifier))
        .configure(users::configure)
}
