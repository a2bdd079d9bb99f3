//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` entity struct matching the database row
//! - A camelCase `Serialize` + `Deserialize` + `Validate` DTO used for both
//!   request and response bodies (required fields are `Option` so a missing
//!   field is reported as a validation error rather than a parse error)
//! - A `From<Row> for Dto` mapper
//! - The `*_FIELDS` table of filterable / sortable fields

pub mod colour;
pub mod comment;
pub mod conversation;
pub mod message;
pub mod participant;
pub mod product;
pub mod product_category;
pub mod product_image;
pub mod search;
pub mod status;
pub mod tag;
pub mod user;
pub mod user_details;
