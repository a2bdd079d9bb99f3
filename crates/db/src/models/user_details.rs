//! Extended profile for a user (one-to-one on `user_id`).

use serde::{Deserialize, Serialize};
use souk_core::criteria::{FieldKind, FieldSpec};
use souk_core::types::{DbId, EntityUuid, LocalDate};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `user_details` table.
#[derive(Debug, Clone, FromRow)]
pub struct UserDetails {
    pub id: DbId,
    pub phone: Option<String>,
    pub address_line: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
    pub birth_date: Option<LocalDate>,
    pub user_id: EntityUuid,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UserDetailsDto {
    pub id: Option<DbId>,
    #[validate(length(max = 32))]
    pub phone: Option<String>,
    #[validate(length(max = 255))]
    pub address_line: Option<String>,
    #[validate(length(max = 100))]
    pub city: Option<String>,
    #[validate(length(max = 100))]
    pub country: Option<String>,
    pub birth_date: Option<LocalDate>,
    #[validate(required)]
    pub user_id: Option<EntityUuid>,
}

impl From<UserDetails> for UserDetailsDto {
    fn from(row: UserDetails) -> Self {
        Self {
            id: Some(row.id),
            phone: row.phone,
            address_line: row.address_line,
            city: row.city,
            country: row.country,
            birth_date: row.birth_date,
            user_id: Some(row.user_id),
        }
    }
}

pub const USER_DETAILS_FIELDS: &[FieldSpec] = &[
    FieldSpec::own("id", "id", FieldKind::Long),
    FieldSpec::own("phone", "phone", FieldKind::Text),
    FieldSpec::own("addressLine", "address_line", FieldKind::Text),
    FieldSpec::own("city", "city", FieldKind::Text),
    FieldSpec::own("country", "country", FieldKind::Text),
    FieldSpec::own("birthDate", "birth_date", FieldKind::Date),
    FieldSpec::own("userId", "user_id", FieldKind::Uuid),
];
