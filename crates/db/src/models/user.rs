//! User model and DTO. Users are keyed by a server-generated UUID.

use serde::{Deserialize, Serialize};
use souk_core::criteria::{FieldKind, FieldSpec};
use souk_core::types::EntityUuid;
use souk_core::validation::validate_login;
use sqlx::FromRow;
use validator::Validate;

/// A row from the `users` table.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: EntityUuid,
    pub login: String,
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub activated: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    pub id: Option<EntityUuid>,
    #[validate(required, length(min = 1, max = 50), custom(function = "validate_login"))]
    pub login: Option<String>,
    #[validate(email, length(max = 254))]
    pub email: Option<String>,
    #[validate(length(max = 50))]
    pub first_name: Option<String>,
    #[validate(length(max = 50))]
    pub last_name: Option<String>,
    #[validate(required)]
    pub activated: Option<bool>,
}

impl From<User> for UserDto {
    fn from(row: User) -> Self {
        Self {
            id: Some(row.id),
            login: Some(row.login),
            email: row.email,
            first_name: row.first_name,
            last_name: row.last_name,
            activated: Some(row.activated),
        }
    }
}

pub const USER_FIELDS: &[FieldSpec] = &[
    FieldSpec::own("id", "id", FieldKind::Uuid),
    FieldSpec::own("login", "login", FieldKind::Text),
    FieldSpec::own("email", "email", FieldKind::Text),
    FieldSpec::own("firstName", "first_name", FieldKind::Text),
    FieldSpec::own("lastName", "last_name", FieldKind::Text),
    FieldSpec::own("activated", "activated", FieldKind::Boolean),
];
