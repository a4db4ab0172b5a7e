//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers the five users endpoints together with the schema
//! wrappers from [`crate::inbound::http::schemas`], which keep domain types
//! free of utoipa derives. The document is served by Swagger UI outside
//! production and printed by the `openapi-dump` binary.

use crate::inbound::http::schemas::{ErrorCodeSchema, ErrorSchema, UserResponseSchema};
use crate::inbound::http::users::{CreateUserBody, UpdateUserBody};
use utoipa::OpenApi;

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "User directory API",
        description = "Create, read, update and delete users backed by PostgreSQL."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::users::list_users,
        crate::inbound::http::users::get_user,
        crate::inbound::http::users::create_user,
        crate::inbound::http::users::update_user,
        crate::inbound::http::users::delete_user,
    ),
    components(schemas(
        UserResponseSchema,
        ErrorSchema,
        ErrorCodeSchema,
        CreateUserBody,
        UpdateUserBody
    )),
    tags(
        (name = "users", description = "User management")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use utoipa::openapi::RefOr;
    use utoipa::openapi::schema::Schema;

    fn assert_object_schema_has_field(schema: &RefOr<Schema>, field: &str) {
        match schema {
            RefOr::T(Schema::Object(obj)) => {
                assert!(
                    obj.properties.contains_key(field),
                    "schema should have field '{field}'"
                );
            }
            _ => panic!("expected Object schema"),
        }
    }

    #[rstest]
    #[case("/users")]
    #[case("/users/{id}")]
    fn documents_user_paths(#[case] path: &str) {
        let doc = ApiDoc::openapi();
        assert!(doc.paths.paths.contains_key(path), "missing {path}");
    }

    #[test]
    fn item_path_documents_get_patch_and_delete() {
        let doc = ApiDoc::openapi();
        let item = doc.paths.paths.get("/users/{id}").expect("item path");

        assert!(item.get.is_some());
        assert!(item.patch.is_some());
        assert!(item.delete.is_some());
    }

    #[test]
    fn error_schema_uses_envelope_fields() {
        let doc = ApiDoc::openapi();
        let schemas = &doc.components.as_ref().expect("components").schemas;
        let error_schema = schemas.get("Error").expect("Error schema");

        assert_object_schema_has_field(error_schema, "code");
        assert_object_schema_has_field(error_schema, "error");
        assert_object_schema_has_field(error_schema, "traceId");
    }

    #[test]
    fn user_schema_exposes_public_fields_only() {
        let doc = ApiDoc::openapi();
        let schemas = &doc.components.as_ref().expect("components").schemas;
        let user_schema = schemas.get("UserResponse").expect("UserResponse schema");

        for field in ["uuid", "name", "email"] {
            assert_object_schema_has_field(user_schema, field);
        }
        match user_schema {
            RefOr::T(Schema::Object(obj)) => assert_eq!(obj.properties.len(), 3),
            _ => panic!("expected Object schema"),
        }
    }
}
