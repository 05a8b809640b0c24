//! OpenAPI schema definitions for domain types.
//!
//! Domain types stay framework-agnostic by not deriving `ToSchema`. The
//! wrappers here mirror their serialised shape and are registered with
//! utoipa under the domain type's name.

use utoipa::ToSchema;

/// OpenAPI schema for [`crate::domain::User`].
#[derive(ToSchema)]
#[schema(as = User)]
#[schema(rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct UserSchema {
    /// Positive account identifier.
    #[schema(example = 7, minimum = 1)]
    id: u64,
    /// Trimmed display handle.
    #[schema(example = "ada", max_length = 64)]
    username: String,
    /// Contact address, unique per account.
    #[schema(example = "ada@example.com")]
    email: String,
    /// Age in years.
    #[schema(example = 36, minimum = 8)]
    age: u8,
    /// Creation time (RFC 3339, UTC).
    #[schema(value_type = String, format = DateTime, example = "2024-03-01T12:00:00Z")]
    created_at: String,
    /// Last update time (RFC 3339, UTC).
    #[schema(value_type = String, format = DateTime, example = "2024-03-01T12:00:00Z")]
    updated_at: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use utoipa::PartialSchema;

    #[test]
    fn user_schema_uses_domain_name_and_camel_case() {
        assert_eq!(UserSchema::name(), "User");
        let json = serde_json::to_string(&UserSchema::schema()).expect("schema serialises");
        for field in ["\"id\"", "\"username\"", "\"email\"", "\"age\"", "\"createdAt\"", "\"updatedAt\""]
        {
            assert!(json.contains(field), "schema should contain {field}");
        }
        assert!(!json.contains("created_at"));
    }
}
