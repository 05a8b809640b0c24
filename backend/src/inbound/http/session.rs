//! Session extractor keeping handlers free of framework-specific logic.
//!
//! [`BearerAuth`](crate::middleware::BearerAuth) stores the verified
//! [`SessionClaim`] in the request extensions. [`SessionContext`] lifts it
//! into a [`CallerIdentity`] that handlers pass explicitly to the façade.

use actix_web::{FromRequest, HttpMessage, HttpRequest, dev::Payload};
use futures_util::future::{Ready, ready};

use crate::domain::{CallerIdentity, SessionClaim};

/// Caller identity extracted from the current request.
///
/// Extraction never fails; an anonymous caller is reported by the façade
/// when an operation needs an identity.
#[derive(Debug, Clone, Default)]
pub struct SessionContext(CallerIdentity);

impl SessionContext {
    /// Borrow the caller identity.
    pub fn caller(&self) -> &CallerIdentity {
        &self.0
    }

    pub fn into_caller(self) -> CallerIdentity {
        self.0
    }
}

impl FromRequest for SessionContext {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let claim = req.extensions().get::<SessionClaim>().cloned();
        ready(Ok(Self(CallerIdentity::from(claim))))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{AccountError, UserId};
    use actix_web::test::TestRequest;
    use rstest::rstest;
    use serde_json::json;

    async fn extract(claim: Option<SessionClaim>) -> SessionContext {
        let req = TestRequest::default().to_http_request();
        if let Some(claim) = claim {
            req.extensions_mut().insert(claim);
        }
        SessionContext::extract(&req).await.expect("extraction is infallible")
    }

    #[actix_web::test]
    async fn missing_claim_yields_anonymous_caller() {
        let session = extract(None).await;
        assert_eq!(session.caller(), &CallerIdentity::anonymous());
        assert_eq!(
            session.caller().require_user_id(),
            Err(AccountError::Unauthenticated)
        );
    }

    #[rstest]
    #[case(json!(7), Ok(7))]
    #[case(json!(7.0), Ok(7))]
    #[case(json!("7"), Err(AccountError::MalformedSession))]
    #[actix_web::test]
    async fn attached_claim_is_passed_through(
        #[case] raw: serde_json::Value,
        #[case] expected: Result<u64, AccountError>,
    ) {
        let session = extract(Some(SessionClaim::new(raw))).await;
        let caller = session.into_caller();
        assert_eq!(caller.require_user_id().map(UserId::get), expected);
    }
}
