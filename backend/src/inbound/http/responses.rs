//! Successful account replies.
//!
//! Every handler that succeeds returns one [`AccountReply`]; the variant
//! decides the status code and payload shape.

use actix_web::body::BoxBody;
use actix_web::{HttpRequest, HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{AccessToken, User};

/// Body returned by `POST /users/signin`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TokenResponse {
    /// Opaque bearer token for the `Authorization` header.
    #[schema(value_type = String, example = "0f1e2d3c-4b5a-6978-8796-a5b4c3d2e1f0")]
    pub token: AccessToken,
}

/// Successful outcome of an account operation.
#[derive(Debug)]
pub enum AccountReply {
    /// `200` with a list of users.
    Users(Vec<User>),
    /// `200` with a single user.
    User(User),
    /// `201` with the newly created user.
    Created(User),
    /// `200` with `{"token": ...}`.
    Token(AccessToken),
}

impl Responder for AccountReply {
    type Body = BoxBody;

    fn respond_to(self, _req: &HttpRequest) -> HttpResponse<Self::Body> {
        match self {
            Self::Users(users) => HttpResponse::Ok().json(users),
            Self::User(user) => HttpResponse::Ok().json(user),
            Self::Created(user) => HttpResponse::Created().json(user),
            Self::Token(token) => HttpResponse::Ok().json(TokenResponse { token }),
        }
    }
}
