//! Tests for HTTP error mapping.

use super::*;
use crate::domain::AccountError;
use actix_web::body::to_bytes;
use actix_web::{App, HttpResponse, test as actix_test, web};
use rstest::rstest;
use serde_json::{Value, json};

async fn body_of(error: &Error) -> (StatusCode, Value) {
    let response = ResponseError::error_response(error);
    let status = response.status();
    let bytes = to_bytes(response.into_body())
        .await
        .expect("reading response body succeeds");
    let value = serde_json::from_slice(&bytes).expect("error body is JSON");
    (status, value)
}

#[rstest]
#[case(Error::invalid_request("bad"), StatusCode::BAD_REQUEST)]
#[case(Error::unauthorized("no auth"), StatusCode::UNAUTHORIZED)]
#[case(Error::not_found("missing"), StatusCode::NOT_FOUND)]
#[case(Error::internal("boom"), StatusCode::INTERNAL_SERVER_ERROR)]
fn status_code_matches_error_code(#[case] error: Error, #[case] status: StatusCode) {
    assert_eq!(ResponseError::status_code(&error), status);
}

#[rstest]
#[case(AccountError::InvalidParam, StatusCode::BAD_REQUEST, "invalid required param")]
#[case(AccountError::Unauthenticated, StatusCode::UNAUTHORIZED, "invalid user session")]
#[case(AccountError::MalformedSession, StatusCode::BAD_REQUEST, "invalid user id session")]
#[case(AccountError::Forbidden, StatusCode::UNAUTHORIZED, "invalid user request")]
#[case(AccountError::NotFound, StatusCode::NOT_FOUND, "user not found")]
#[case(
    AccountError::Downstream("account store offline".into()),
    StatusCode::INTERNAL_SERVER_ERROR,
    "account store offline"
)]
#[actix_web::test]
async fn outcomes_render_message_only_bodies(
    #[case] outcome: AccountError,
    #[case] status: StatusCode,
    #[case] message: &str,
) {
    let (actual_status, body) = body_of(&Error::from(outcome)).await;
    assert_eq!(actual_status, status);
    assert_eq!(body, json!({ "message": message }));
}

#[actix_web::test]
async fn actix_errors_are_not_leaked() {
    let err = actix_web::error::ErrorBadGateway("upstream secret");
    let mapped = Error::from(err);
    assert_eq!(mapped.code(), ErrorCode::InternalError);
    assert_eq!(mapped.message(), "Internal server error");
}

#[derive(Debug, serde::Deserialize)]
struct Payload {
    #[expect(dead_code, reason = "shape only")]
    name: String,
}

#[actix_web::test]
async fn malformed_json_is_a_bad_request() {
    let app = actix_test::init_service(
        App::new()
            .app_data(web::JsonConfig::default().error_handler(json_error_handler))
            .route(
                "/",
                web::post().to(|_: web::Json<Payload>| async { HttpResponse::Ok().finish() }),
            ),
    )
    .await;
    let req = actix_test::TestRequest::post()
        .uri("/")
        .insert_header(("content-type", "application/json"))
        .set_payload("{not json")
        .to_request();
    let res = actix_test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: ErrorBody = actix_test::read_body_json(res).await;
    assert!(!body.message.is_empty());
}
