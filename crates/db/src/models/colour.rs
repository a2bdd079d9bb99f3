//! Colour entity model and DTO.

use serde::{Deserialize, Serialize};
use souk_core::criteria::{FieldKind, FieldSpec};
use souk_core::types::DbId;
use souk_core::validation::validate_hex_colour;
use sqlx::FromRow;
use validator::Validate;

/// A row from the `colours` table.
#[derive(Debug, Clone, FromRow)]
pub struct Colour {
    pub id: DbId,
    pub name: String,
    pub hex_code: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ColourDto {
    pub id: Option<DbId>,
    #[validate(required, length(min = 1, max = 50))]
    pub name: Option<String>,
    /// `#RRGGBB`.
    #[validate(custom(function = "validate_hex_colour"))]
    pub hex_code: Option<String>,
}

impl From<Colour> for ColourDto {
    fn from(row: Colour) -> Self {
        Self {
            id: Some(row.id),
            name: Some(row.name),
            hex_code: row.hex_code,
        }
    }
}

pub const COLOUR_FIELDS: &[FieldSpec] = &[
    FieldSpec::own("id", "id", FieldKind::Long),
    FieldSpec::own("name", "name", FieldKind::Text),
    FieldSpec::own("hexCode", "hex_code", FieldKind::Text),
];
