//! Bearer token middleware attaching the verified session claim.
//!
//! For each request carrying `Authorization: Bearer <token>` the token is
//! verified through the [`AccessTokenVerifier`] port and the resulting
//! [`SessionClaim`] is inserted into the request extensions. The middleware
//! never rejects a request itself: handlers that need an identity read the
//! claim through [`SessionContext`](crate::inbound::http::session::SessionContext)
//! and report its absence.

use std::rc::Rc;
use std::sync::Arc;
use std::task::{Context, Poll};

use actix_web::dev::{Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::http::header::AUTHORIZATION;
use actix_web::{Error, HttpMessage};
use futures_util::future::{LocalBoxFuture, Ready, ready};
use tracing::warn;

use crate::domain::ports::AccessTokenVerifier;

const BEARER_SCHEME: &str = "Bearer";

/// Extract the bearer token from the `Authorization` header, if any.
///
/// The scheme name is matched case-insensitively.
fn bearer_token(req: &ServiceRequest) -> Option<String> {
    let header = req.headers().get(AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = header.trim_start().split_once(' ')?;
    if !scheme.eq_ignore_ascii_case(BEARER_SCHEME) {
        return None;
    }
    let token = token.trim();
    (!token.is_empty()).then(|| token.to_owned())
}

/// Middleware verifying bearer tokens and attaching their claim.
///
/// # Examples
/// ```
/// use std::sync::Arc;
///
/// use actix_web::App;
/// use accounts::middleware::BearerAuth;
/// use accounts::outbound::memory::InMemoryAccounts;
///
/// let accounts = Arc::new(InMemoryAccounts::default());
/// let _app = App::new().wrap(BearerAuth::new(accounts));
/// ```
#[derive(Clone)]
pub struct BearerAuth {
    verifier: Arc<dyn AccessTokenVerifier>,
}

impl BearerAuth {
    pub fn new(verifier: Arc<dyn AccessTokenVerifier>) -> Self {
        Self { verifier }
    }
}

impl<S, B> Transform<S, ServiceRequest> for BearerAuth
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = BearerAuthMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(BearerAuthMiddleware {
            service: Rc::new(service),
            verifier: Arc::clone(&self.verifier),
        }))
    }
}

/// Service wrapper produced by [`BearerAuth`].
pub struct BearerAuthMiddleware<S> {
    service: Rc<S>,
    verifier: Arc<dyn AccessTokenVerifier>,
}

impl<S, B> Service<ServiceRequest> for BearerAuthMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(cx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);
        let verifier = Arc::clone(&self.verifier);
        Box::pin(async move {
            if let Some(token) = bearer_token(&req) {
                match verifier.verify(&token).await {
                    Ok(claim) => {
                        req.extensions_mut().insert(claim);
                    }
                    Err(error) => {
                        warn!(%error, path = %req.path(), "bearer token rejected");
                    }
                }
            }
            service.call(req).await
        })
    }
}
