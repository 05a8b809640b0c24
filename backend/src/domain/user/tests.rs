//! Tests for the domain user model.

use super::*;
use chrono::TimeZone;
use rstest::{fixture, rstest};
use serde_json::{Value, json};

#[fixture]
fn user() -> User {
    let at = Utc
        .with_ymd_and_hms(2024, 3, 1, 12, 0, 0)
        .single()
        .expect("fixture timestamp");
    User {
        id: UserId::new(7).expect("fixture id"),
        username: Username::new("ada").expect("fixture username"),
        email: Email::new("ada@example.com").expect("fixture email"),
        age: 36,
        created_at: at,
        updated_at: at,
    }
}

#[rstest]
#[case("1", Some(1))]
#[case("42", Some(42))]
#[case("0", None)]
#[case("-3", None)]
#[case("abc", None)]
#[case("", None)]
#[case(" 7", None)]
#[case("18446744073709551616", None)]
fn path_param_accepts_only_positive_integers(#[case] raw: &str, #[case] expected: Option<u64>) {
    assert_eq!(UserId::from_path_param(raw).map(UserId::get), expected);
}

#[rstest]
fn zero_id_is_rejected() {
    assert_eq!(UserId::new(0), Err(UserValidationError::ZeroId));
}

#[rstest]
#[case("   ".to_owned(), UserValidationError::EmptyUsername)]
#[case("x".repeat(USERNAME_MAX + 1), UserValidationError::UsernameTooLong { max: USERNAME_MAX })]
fn invalid_usernames(#[case] raw: String, #[case] expected: UserValidationError) {
    assert_eq!(Username::new(raw), Err(expected));
}

#[rstest]
fn username_is_trimmed() {
    let username = Username::new("  ada  ").expect("valid username");
    assert_eq!(username.as_ref(), "ada");
}

#[rstest]
#[case("", UserValidationError::EmptyEmail)]
#[case("not-an-email", UserValidationError::InvalidEmail)]
#[case("ada@localhost", UserValidationError::InvalidEmail)]
#[case("ada lovelace@example.com", UserValidationError::InvalidEmail)]
#[case("@example.com", UserValidationError::InvalidEmail)]
fn invalid_emails(#[case] raw: &str, #[case] expected: UserValidationError) {
    assert_eq!(Email::new(raw), Err(expected));
}

#[rstest]
#[case("ada@example.com")]
#[case(" grace.hopper@navy.mil.us ")]
fn valid_emails(#[case] raw: &str) {
    let email = Email::new(raw).expect("valid email");
    assert_eq!(email.as_ref(), raw.trim());
}

#[rstest]
fn user_serialises_camel_case(user: User) {
    let value = serde_json::to_value(&user).expect("serialise user");
    assert_eq!(value.get("id").and_then(Value::as_u64), Some(7));
    assert_eq!(value.get("username").and_then(Value::as_str), Some("ada"));
    assert_eq!(
        value.get("createdAt").and_then(Value::as_str),
        Some("2024-03-01T12:00:00Z")
    );
    assert!(value.get("created_at").is_none());
}

#[rstest]
fn user_rejects_zero_id_on_deserialise(user: User) {
    let mut value = serde_json::to_value(&user).expect("serialise user");
    value["id"] = json!(0);
    let result: Result<User, _> = serde_json::from_value(value);
    assert!(result.is_err());
}
