//! Lookup statuses for orders, invoices and shipments.
//!
//! The three tables share one shape (`id`, unique `code`, `description`),
//! so a single row type and DTO serve all of them and [`StatusTable`]
//! selects which table a query runs against.

use serde::{Deserialize, Serialize};
use souk_core::criteria::{FieldKind, FieldSpec};
use souk_core::types::DbId;
use sqlx::FromRow;
use validator::Validate;

/// Which status lookup table an operation targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusTable {
    Order,
    Invoice,
    Shipment,
}

impl StatusTable {
    pub fn table(self) -> &'static str {
        match self {
            Self::Order => "order_statuses",
            Self::Invoice => "invoice_statuses",
            Self::Shipment => "shipment_statuses",
        }
    }

    /// Entity name reported in error bodies.
    pub fn entity_name(self) -> &'static str {
        match self {
            Self::Order => "orderStatus",
            Self::Invoice => "invoiceStatus",
            Self::Shipment => "shipmentStatus",
        }
    }
}

/// A row from any of the status tables.
#[derive(Debug, Clone, FromRow)]
pub struct Status {
    pub id: DbId,
    pub code: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct StatusDto {
    pub id: Option<DbId>,
    #[validate(required, length(min = 1, max = 32))]
    pub code: Option<String>,
    #[validate(length(max = 255))]
    pub description: Option<String>,
}

impl From<Status> for StatusDto {
    fn from(row: Status) -> Self {
        Self {
            id: Some(row.id),
            code: Some(row.code),
            description: row.description,
        }
    }
}

pub const STATUS_FIELDS: &[FieldSpec] = &[
    FieldSpec::own("id", "id", FieldKind::Long),
    FieldSpec::own("code", "code", FieldKind::Text),
    FieldSpec::own("description", "description", FieldKind::Text),
];
