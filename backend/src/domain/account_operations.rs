//! Account operations façade.
//!
//! Inbound adapters call [`AccountOperations`] for every account use-case.
//! The façade validates input, resolves the caller, applies the ownership
//! guard and delegates to the [`AccountService`] port. Every failure is
//! reported as exactly one [`AccountError`] variant.

use std::sync::Arc;

use tracing::{error, warn};

use crate::domain::ports::{AccountService, AccountServiceError};
use crate::domain::{
    AccessToken, AccountError, CallerIdentity, SignInRequest, SignUpDraft, UpdateDraft, User,
    UserId, authorize_self_action,
};

fn downstream(operation: &'static str, err: AccountServiceError) -> AccountError {
    error!(operation, error = %err, "account service call failed");
    AccountError::Downstream(err.to_string())
}

fn rejected<T>(operation: &'static str, err: AccountError) -> Result<T, AccountError> {
    warn!(operation, error = %err, "account request rejected");
    Err(err)
}

/// Orchestrates account use-cases over the account service port.
#[derive(Clone)]
pub struct AccountOperations {
    service: Arc<dyn AccountService>,
}

impl AccountOperations {
    /// Build the façade over an account service adapter.
    pub fn new(service: Arc<dyn AccountService>) -> Self {
        Self { service }
    }

    /// List every account.
    pub async fn list_users(&self) -> Result<Vec<User>, AccountError> {
        self.service
            .list_users()
            .await
            .map_err(|err| downstream("list_users", err))
    }

    /// Fetch one account by id.
    pub async fn get_user_by_id(&self, id: UserId) -> Result<User, AccountError> {
        match self.service.get_by_id(id).await {
            Ok(Some(user)) => Ok(user),
            Ok(None) => rejected("get_user_by_id", AccountError::NotFound),
            Err(err) => Err(downstream("get_user_by_id", err)),
        }
    }

    /// Validate a sign-up draft and create the account.
    ///
    /// The service is not called when validation fails.
    pub async fn sign_up(&self, draft: SignUpDraft) -> Result<User, AccountError> {
        let request = match draft.validate() {
            Ok(request) => request,
            Err(errors) => return rejected("sign_up", errors.into()),
        };
        self.service
            .create(&request)
            .await
            .map_err(|err| downstream("sign_up", err))
    }

    /// Authenticate credentials and issue an access token.
    ///
    /// Any authentication failure is reported as
    /// [`AccountError::AuthenticationFailed`] carrying the service message;
    /// a token issuance failure is a downstream fault.
    pub async fn sign_in(&self, credentials: SignInRequest) -> Result<AccessToken, AccountError> {
        let user = match self.service.authenticate(&credentials).await {
            Ok(user) => user,
            Err(err) => {
                return rejected("sign_in", AccountError::AuthenticationFailed(err.to_string()));
            }
        };
        self.service
            .issue_access_token(&user)
            .await
            .map_err(|err| downstream("issue_access_token", err))
    }

    /// Update the caller's own account.
    pub async fn update_self(
        &self,
        caller: &CallerIdentity,
        draft: UpdateDraft,
    ) -> Result<User, AccountError> {
        let caller_id = match caller.require_user_id() {
            Ok(id) => id,
            Err(err) => return rejected("update_self", err),
        };
        self.apply_update(caller_id, draft).await
    }

    /// Update the account at `target`, which must be the caller's own.
    pub async fn update_by_id(
        &self,
        target: UserId,
        caller: &CallerIdentity,
        draft: UpdateDraft,
    ) -> Result<User, AccountError> {
        let caller_id = match caller.require_user_id() {
            Ok(id) => id,
            Err(err) => return rejected("update_by_id", err),
        };
        authorize_self_action(target, caller_id)?;
        self.apply_update(caller_id, draft).await
    }

    /// Delete the account at `target`, which must be the caller's own.
    pub async fn delete_by_id(
        &self,
        target: UserId,
        caller: &CallerIdentity,
    ) -> Result<User, AccountError> {
        let caller_id = match caller.require_user_id() {
            Ok(id) => id,
            Err(err) => return rejected("delete_by_id", err),
        };
        authorize_self_action(target, caller_id)?;
        match self.service.delete_by_id(target).await {
            Ok(Some(user)) => Ok(user),
            Ok(None) => rejected("delete_by_id", AccountError::NotFound),
            Err(err) => Err(downstream("delete_by_id", err)),
        }
    }

    async fn apply_update(&self, id: UserId, draft: UpdateDraft) -> Result<User, AccountError> {
        let request = match draft.validate() {
            Ok(request) => request,
            Err(errors) => return rejected("update", errors.into()),
        };
        self.service
            .update_by_id(id, &request)
            .await
            .map_err(|err| downstream("update", err))
    }
}

#[cfg(test)]
#[path = "account_operations_tests.rs"]
mod tests;
