//! Users API handlers.
//!
//! ```text
//! GET    /users
//! GET    /users/{id}
//! POST   /users/signup {"username":"ada","email":"ada@example.com","password":"analytical","age":36}
//! POST   /users/signin {"email":"ada@example.com","password":"analytical"}
//! PUT    /users/{id}   {"age":37}            (Authorization: Bearer <token>)
//! DELETE /users/{id}                         (Authorization: Bearer <token>)
//! ```

use actix_web::{delete, get, post, put, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{AccountError, Error, SignInRequest, SignUpDraft, UpdateDraft, UserId};
use crate::inbound::http::ApiResult;
use crate::inbound::http::error::{ErrorBody, json_error_handler};
use crate::inbound::http::responses::{AccountReply, TokenResponse};
use crate::inbound::http::schemas::UserSchema;
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;

/// Sign-up request body for `POST /users/signup`.
///
/// Missing fields deserialise as empty so validation can report them.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct SignUpBody {
    #[schema(example = "ada")]
    pub username: String,
    #[schema(example = "ada@example.com")]
    pub email: String,
    #[schema(example = "analytical", min_length = 6)]
    pub password: String,
    #[schema(example = 36, minimum = 8)]
    pub age: Option<u8>,
}

impl From<SignUpBody> for SignUpDraft {
    fn from(value: SignUpBody) -> Self {
        Self {
            username: value.username,
            email: value.email,
            password: value.password,
            age: value.age,
        }
    }
}

/// Sign-in request body for `POST /users/signin`.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct SignInBody {
    #[schema(example = "ada@example.com")]
    pub email: String,
    #[schema(example = "analytical")]
    pub password: String,
}

/// Partial update body for `PUT /users/{id}`; absent fields are unchanged.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct UpdateBody {
    #[schema(example = "ada")]
    pub username: Option<String>,
    #[schema(example = "ada@example.com")]
    pub email: Option<String>,
    #[schema(example = 37, minimum = 8)]
    pub age: Option<u8>,
}

impl From<UpdateBody> for UpdateDraft {
    fn from(value: UpdateBody) -> Self {
        Self {
            username: value.username,
            email: value.email,
            age: value.age,
        }
    }
}

fn path_id(raw: &str) -> Result<UserId, AccountError> {
    UserId::from_path_param(raw).ok_or(AccountError::InvalidParam)
}

/// Register the users endpoints and the JSON body error handler.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use accounts::inbound::http::users;
///
/// let _app = App::new().configure(users::configure);
/// ```
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .service(sign_up)
        .service(sign_in)
        .service(list_users)
        .service(get_user)
        .service(update_user)
        .service(delete_user);
}

/// List every account.
#[utoipa::path(
    get,
    path = "/users",
    responses(
        (status = 200, description = "Users", body = [UserSchema]),
        (status = 500, description = "Account service failure", body = ErrorBody)
    ),
    tags = ["users"],
    operation_id = "listUsers",
    security([])
)]
#[get("/users")]
pub async fn list_users(state: web::Data<HttpState>) -> ApiResult<AccountReply> {
    let users = state.accounts.list_users().await?;
    Ok(AccountReply::Users(users))
}

/// Fetch one account.
#[utoipa::path(
    get,
    path = "/users/{id}",
    params(("id" = u64, Path, description = "Positive account id")),
    responses(
        (status = 200, description = "User", body = UserSchema),
        (status = 400, description = "Invalid id", body = ErrorBody),
        (status = 404, description = "User not found", body = ErrorBody),
        (status = 500, description = "Account service failure", body = ErrorBody)
    ),
    tags = ["users"],
    operation_id = "getUser",
    security([])
)]
#[get("/users/{id}")]
pub async fn get_user(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<AccountReply> {
    let id = path_id(&path)?;
    let user = state.accounts.get_user_by_id(id).await?;
    Ok(AccountReply::User(user))
}

/// Create an account.
#[utoipa::path(
    post,
    path = "/users/signup",
    request_body = SignUpBody,
    responses(
        (status = 201, description = "Account created", body = UserSchema),
        (status = 400, description = "Validation failed", body = ErrorBody),
        (status = 500, description = "Account service failure", body = ErrorBody)
    ),
    tags = ["users"],
    operation_id = "signUp",
    security([])
)]
#[post("/users/signup")]
pub async fn sign_up(
    state: web::Data<HttpState>,
    payload: web::Json<SignUpBody>,
) -> ApiResult<AccountReply> {
    let user = state
        .accounts
        .sign_up(SignUpDraft::from(payload.into_inner()))
        .await?;
    Ok(AccountReply::Created(user))
}

/// Authenticate and issue a bearer token.
#[utoipa::path(
    post,
    path = "/users/signin",
    request_body = SignInBody,
    responses(
        (status = 200, description = "Token issued", body = TokenResponse),
        (status = 400, description = "Missing credentials", body = ErrorBody),
        (status = 401, description = "Invalid credentials", body = ErrorBody),
        (status = 500, description = "Token issuance failed", body = ErrorBody)
    ),
    tags = ["users"],
    operation_id = "signIn",
    security([])
)]
#[post("/users/signin")]
pub async fn sign_in(
    state: web::Data<HttpState>,
    payload: web::Json<SignInBody>,
) -> ApiResult<AccountReply> {
    let SignInBody { email, password } = payload.into_inner();
    let credentials = SignInRequest::try_from_parts(&email, &password).map_err(AccountError::from)?;
    let token = state.accounts.sign_in(credentials).await?;
    Ok(AccountReply::Token(token))
}

/// Recover the domain error a deferred body extractor failed with.
fn body_error(err: actix_web::Error) -> Error {
    match err.as_error::<Error>() {
        Some(error) => error.clone(),
        None => Error::from(err),
    }
}

/// Update the caller's own account.
#[utoipa::path(
    put,
    path = "/users/{id}",
    params(("id" = u64, Path, description = "Caller's account id")),
    request_body = UpdateBody,
    responses(
        (status = 200, description = "Updated user", body = UserSchema),
        (status = 400, description = "Invalid id, session or body", body = ErrorBody),
        (status = 401, description = "Missing session or not the caller's account", body = ErrorBody),
        (status = 500, description = "Account service failure", body = ErrorBody)
    ),
    tags = ["users"],
    operation_id = "updateUser"
)]
#[put("/users/{id}")]
pub async fn update_user(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<String>,
    payload: Result<web::Json<UpdateBody>, actix_web::Error>,
) -> ApiResult<AccountReply> {
    let id = path_id(&path)?;
    // The session is checked before the body is looked at.
    session.caller().require_user_id()?;
    let payload = payload.map_err(body_error)?;
    let user = state
        .accounts
        .update_by_id(id, session.caller(), UpdateDraft::from(payload.into_inner()))
        .await?;
    Ok(AccountReply::User(user))
}

/// Delete the caller's own account.
#[utoipa::path(
    delete,
    path = "/users/{id}",
    params(("id" = u64, Path, description = "Caller's account id")),
    responses(
        (status = 200, description = "Deleted user", body = UserSchema),
        (status = 400, description = "Invalid id or session", body = ErrorBody),
        (status = 401, description = "Missing session or not the caller's account", body = ErrorBody),
        (status = 404, description = "User not found", body = ErrorBody),
        (status = 500, description = "Account service failure", body = ErrorBody)
    ),
    tags = ["users"],
    operation_id = "deleteUser"
)]
#[delete("/users/{id}")]
pub async fn delete_user(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<String>,
) -> ApiResult<AccountReply> {
    let id = path_id(&path)?;
    let user = state.accounts.delete_by_id(id, session.caller()).await?;
    Ok(AccountReply::User(user))
}
