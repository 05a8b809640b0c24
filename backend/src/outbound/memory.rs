//! In-memory account service and token verifier.
//!
//! `InMemoryAccounts` backs both driven ports with a single mutex-guarded
//! store. Ids are assigned sequentially from 1, emails are unique
//! (case-insensitive), passwords are kept as salted SHA-256 digests and bearer
//! tokens are random UUIDs mapped to the owning user's id. Deleting a user
//! revokes its tokens.

use std::collections::{BTreeMap, HashMap};
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use chrono::Utc;
use sha2::{Digest, Sha256};
use tracing::debug;
use uuid::Uuid;

use crate::domain::ports::{
    AccessTokenError, AccessTokenVerifier, AccountService, AccountServiceError,
};
use crate::domain::{
    AccessToken, Email, SessionClaim, SignInRequest, SignUpRequest, UpdateRequest, User, UserId,
};

struct StoredAccount {
    user: User,
    salt: String,
    password_digest: String,
}

#[derive(Default)]
struct Store {
    last_id: u64,
    accounts: BTreeMap<UserId, StoredAccount>,
    tokens: HashMap<String, UserId>,
}

impl Store {
    fn email_owner(&self, email: &str) -> Option<UserId> {
        self.accounts
            .values()
            .find(|account| account.user.email.as_ref().eq_ignore_ascii_case(email))
            .map(|account| account.user.id)
    }

    fn next_id(&mut self) -> Result<UserId, AccountServiceError> {
        let id = self
            .last_id
            .checked_add(1)
            .ok_or_else(|| AccountServiceError::query("account id space exhausted"))?;
        let id = UserId::new(id).map_err(|err| AccountServiceError::query(err.to_string()))?;
        self.last_id = id.get();
        Ok(id)
    }
}

fn digest(salt: &str, password: &str) -> String {
    hex::encode(
        Sha256::new()
            .chain_update(salt.as_bytes())
            .chain_update(password.as_bytes())
            .finalize(),
    )
}

fn ensure_unique_email(
    store: &Store,
    email: &Email,
    owner: Option<UserId>,
) -> Result<(), AccountServiceError> {
    match store.email_owner(email.as_ref()) {
        Some(existing) if Some(existing) != owner => {
            Err(AccountServiceError::conflict("email already registered"))
        }
        _ => Ok(()),
    }
}

/// Mutex-guarded in-memory implementation of the account ports.
#[derive(Default)]
pub struct InMemoryAccounts {
    store: Mutex<Store>,
}

impl InMemoryAccounts {
    fn lock(&self) -> Result<MutexGuard<'_, Store>, AccountServiceError> {
        self.store
            .lock()
            .map_err(|_| AccountServiceError::connection("account store lock poisoned"))
    }
}

#[async_trait]
impl AccountService for InMemoryAccounts {
    async fn list_users(&self) -> Result<Vec<User>, AccountServiceError> {
        let store = self.lock()?;
        Ok(store
            .accounts
            .values()
            .map(|account| account.user.clone())
            .collect())
    }

    async fn get_by_id(&self, id: UserId) -> Result<Option<User>, AccountServiceError> {
        let store = self.lock()?;
        Ok(store.accounts.get(&id).map(|account| account.user.clone()))
    }

    async fn create(&self, request: &SignUpRequest) -> Result<User, AccountServiceError> {
        let mut store = self.lock()?;
        ensure_unique_email(&store, request.email(), None)?;
        let id = store.next_id()?;
        let now = Utc::now();
        let user = User {
            id,
            username: request.username().clone(),
            email: request.email().clone(),
            age: request.age(),
            created_at: now,
            updated_at: now,
        };
        let salt = Uuid::new_v4().simple().to_string();
        let password_digest = digest(&salt, request.password());
        store.accounts.insert(
            id,
            StoredAccount {
                user: user.clone(),
                salt,
                password_digest,
            },
        );
        debug!(%id, "account created");
        Ok(user)
    }

    async fn authenticate(&self, request: &SignInRequest) -> Result<User, AccountServiceError> {
        let store = self.lock()?;
        store
            .email_owner(request.email())
            .and_then(|id| store.accounts.get(&id))
            .filter(|account| digest(&account.salt, request.password()) == account.password_digest)
            .map(|account| account.user.clone())
            .ok_or_else(AccountServiceError::invalid_credentials)
    }

    async fn issue_access_token(&self, user: &User) -> Result<AccessToken, AccountServiceError> {
        let mut store = self.lock()?;
        if !store.accounts.contains_key(&user.id) {
            return Err(AccountServiceError::token_issuance(format!(
                "user {} does not exist",
                user.id
            )));
        }
        let token = Uuid::new_v4().to_string();
        store.tokens.insert(token.clone(), user.id);
        Ok(AccessToken::new(token))
    }

    async fn update_by_id(
        &self,
        id: UserId,
        request: &UpdateRequest,
    ) -> Result<User, AccountServiceError> {
        let mut store = self.lock()?;
        if let Some(email) = &request.email {
            ensure_unique_email(&store, email, Some(id))?;
        }
        let account = store
            .accounts
            .get_mut(&id)
            .ok_or_else(|| AccountServiceError::query(format!("user {id} does not exist")))?;
        if let Some(username) = &request.username {
            account.user.username = username.clone();
        }
        if let Some(email) = &request.email {
            account.user.email = email.clone();
        }
        if let Some(age) = request.age {
            account.user.age = age;
        }
        if !request.is_empty() {
            account.user.updated_at = Utc::now();
        }
        Ok(account.user.clone())
    }

    async fn delete_by_id(&self, id: UserId) -> Result<Option<User>, AccountServiceError> {
        let mut store = self.lock()?;
        let removed = store.accounts.remove(&id).map(|account| account.user);
        if removed.is_some() {
            store.tokens.retain(|_, owner| *owner != id);
            debug!(%id, "account deleted and tokens revoked");
        }
        Ok(removed)
    }
}

#[async_trait]
impl AccessTokenVerifier for InMemoryAccounts {
    async fn verify(&self, token: &str) -> Result<SessionClaim, AccessTokenError> {
        let store = self
            .store
            .lock()
            .map_err(|_| AccessTokenError::unavailable("account store lock poisoned"))?;
        store
            .tokens
            .get(token)
            .map(|id| SessionClaim::new(id.get()))
            .ok_or_else(AccessTokenError::invalid)
    }
}

#[cfg(test)]
#[path = "memory_tests.rs"]
mod tests;
