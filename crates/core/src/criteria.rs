//! Criteria filters for list and count endpoints.
//!
//! Every filterable field `f` of a resource accepts suffixed query
//! parameters (`f.equals`, `f.in`, `f.contains`, ...). This module turns the
//! raw query-string pairs into a typed [`Criteria`] value; rendering it into
//! SQL is the job of the `db` crate.
//!
//! Parsing rules:
//! - Unknown fields, and operators that do not apply to a field's type, are
//!   ignored.
//! - A value that does not parse for the field's type is a validation error.
//! - `in` / `notIn` take comma-separated values; repeating the parameter
//!   extends the same list.

use uuid::Uuid;

use crate::error::CoreError;
use crate::types::{LocalDate, Timestamp};

/// Query parameters that are never interpreted as filters.
pub const RESERVED_PARAMS: &[&str] = &["sort", "page", "size", "eagerload", "distinct", "query"];

// ---------------------------------------------------------------------------
// Field metadata
// ---------------------------------------------------------------------------

/// Value type of a filterable field. Decides which operators apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Long,
    Integer,
    Double,
    Boolean,
    Uuid,
    Instant,
    Date,
}

impl FieldKind {
    /// Whether range operators (`greaterThan`, ...) apply.
    pub fn is_orderable(self) -> bool {
        matches!(
            self,
            FieldKind::Long
                | FieldKind::Integer
                | FieldKind::Double
                | FieldKind::Instant
                | FieldKind::Date
        )
    }
}

/// Where a field's value lives relative to the resource table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    /// A column of the resource's own table.
    Own(&'static str),
    /// A column of a many-to-many join table.
    ///
    /// `owner` references the resource's primary key, `target` is the
    /// column the filter compares against.
    Joined {
        table: &'static str,
        owner: &'static str,
        target: &'static str,
    },
}

/// A filterable (and possibly sortable) field of a resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    /// Name as it appears in query parameters (camelCase).
    pub name: &'static str,
    pub column: Column,
    pub kind: FieldKind,
}

impl FieldSpec {
    pub const fn own(name: &'static str, column: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            column: Column::Own(column),
            kind,
        }
    }

    pub const fn joined(
        name: &'static str,
        table: &'static str,
        owner: &'static str,
        target: &'static str,
        kind: FieldKind,
    ) -> Self {
        Self {
            name,
            column: Column::Joined {
                table,
                owner,
                target,
            },
            kind,
        }
    }

    /// The own-table column, if the field is not reached through a join.
    pub fn own_column(&self) -> Option<&'static str> {
        match self.column {
            Column::Own(column) => Some(column),
            Column::Joined { .. } => None,
        }
    }
}

/// Look up a field by its query-parameter name.
pub fn find_field<'a>(fields: &'a [FieldSpec], name: &str) -> Option<&'a FieldSpec> {
    fields.iter().find(|f| f.name == name)
}

// ---------------------------------------------------------------------------
// Operators and values
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterOp {
    Equals,
    NotEquals,
    Specified,
    In,
    NotIn,
    Contains,
    DoesNotContain,
    GreaterThan,
    GreaterThanOrEqual,
    LessThan,
    LessThanOrEqual,
}

impl FilterOp {
    /// Parse the suffix after the field name (`name.contains` -> `contains`).
    pub fn parse(suffix: &str) -> Option<Self> {
        let op = match suffix {
            "equals" => FilterOp::Equals,
            "notEquals" => FilterOp::NotEquals,
            "specified" => FilterOp::Specified,
            "in" => FilterOp::In,
            "notIn" => FilterOp::NotIn,
            "contains" => FilterOp::Contains,
            "doesNotContain" => FilterOp::DoesNotContain,
            "greaterThan" => FilterOp::GreaterThan,
            "greaterThanOrEqual" => FilterOp::GreaterThanOrEqual,
            "lessThan" => FilterOp::LessThan,
            "lessThanOrEqual" => FilterOp::LessThanOrEqual,
            _ => return None,
        };
        Some(op)
    }

    pub fn applies_to(self, kind: FieldKind) -> bool {
        match self {
            FilterOp::Equals
            | FilterOp::NotEquals
            | FilterOp::Specified
            | FilterOp::In
            | FilterOp::NotIn => true,
            FilterOp::Contains | FilterOp::DoesNotContain => kind == FieldKind::Text,
            FilterOp::GreaterThan
            | FilterOp::GreaterThanOrEqual
            | FilterOp::LessThan
            | FilterOp::LessThanOrEqual => kind.is_orderable(),
        }
    }
}

/// A typed filter operand.
#[derive(Debug, Clone, PartialEq)]
pub enum FilterValue {
    Text(String),
    Long(i64),
    Integer(i32),
    Double(f64),
    Boolean(bool),
    Uuid(Uuid),
    Instant(Timestamp),
    Date(LocalDate),
}

impl FilterValue {
    /// Parse a raw query-string value for a field of the given kind.
    ///
    /// Text values are taken verbatim; everything else is trimmed first.
    pub fn parse(kind: FieldKind, raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        let value = match kind {
            FieldKind::Text => FilterValue::Text(raw.to_string()),
            FieldKind::Long => FilterValue::Long(trimmed.parse().ok()?),
            FieldKind::Integer => FilterValue::Integer(trimmed.parse().ok()?),
            FieldKind::Double => {
                let v: f64 = trimmed.parse().ok()?;
                if !v.is_finite() {
                    return None;
                }
                FilterValue::Double(v)
            }
            FieldKind::Boolean => FilterValue::Boolean(parse_bool(trimmed)?),
            FieldKind::Uuid => FilterValue::Uuid(trimmed.parse().ok()?),
            FieldKind::Instant => FilterValue::Instant(
                chrono::DateTime::parse_from_rfc3339(trimmed)
                    .ok()?
                    .with_timezone(&chrono::Utc),
            ),
            FieldKind::Date => FilterValue::Date(trimmed.parse().ok()?),
        };
        Some(value)
    }
}

/// Right-hand side of a condition.
#[derive(Debug, Clone, PartialEq)]
pub enum Operand {
    Value(FilterValue),
    List(Vec<FilterValue>),
    /// `specified=true|false`.
    Flag(bool),
}

/// One `field.op=value` predicate.
#[derive(Debug, Clone, PartialEq)]
pub struct Condition {
    pub field: FieldSpec,
    pub op: FilterOp,
    pub operand: Operand,
}

// ---------------------------------------------------------------------------
// Criteria
// ---------------------------------------------------------------------------

/// The AND-ed set of conditions requested by a list or count call.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Criteria {
    pub conditions: Vec<Condition>,
    pub distinct: bool,
}

impl Criteria {
    /// Build criteria from raw query pairs against a resource's field list.
    pub fn from_params(fields: &[FieldSpec], params: &[(String, String)]) -> Result<Self, CoreError> {
        let mut criteria = Criteria::default();

        for (key, raw) in params {
            if key == "distinct" {
                criteria.distinct = parse_bool(raw.trim())
                    .ok_or_else(|| invalid_value(key, raw))?;
                continue;
            }
            if RESERVED_PARAMS.contains(&key.as_str()) {
                continue;
            }

            let Some((name, suffix)) = key.rsplit_once('.') else {
                continue;
            };
            let (Some(field), Some(op)) = (find_field(fields, name), FilterOp::parse(suffix)) else {
                continue;
            };
            if !op.applies_to(field.kind) {
                continue;
            }

            let operand = match op {
                FilterOp::Specified => {
                    Operand::Flag(parse_bool(raw.trim()).ok_or_else(|| invalid_value(key, raw))?)
                }
                FilterOp::In | FilterOp::NotIn => {
                    let values = raw
                        .split(',')
                        .filter(|v| !v.is_empty())
                        .map(|v| FilterValue::parse(field.kind, v).ok_or_else(|| invalid_value(key, raw)))
                        .collect::<Result<Vec<_>, _>>()?;
                    if let Some(existing) = criteria
                        .conditions
                        .iter_mut()
                        .find(|c| c.field.name == field.name && c.op == op)
                    {
                        if let Operand::List(list) = &mut existing.operand {
                            list.extend(values);
                        }
                        continue;
                    }
                    Operand::List(values)
                }
                _ => Operand::Value(
                    FilterValue::parse(field.kind, raw).ok_or_else(|| invalid_value(key, raw))?,
                ),
            };

            criteria.conditions.push(Condition {
                field: *field,
                op,
                operand,
            });
        }

        Ok(criteria)
    }

    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

pub(crate) fn parse_bool(raw: &str) -> Option<bool> {
    if raw.eq_ignore_ascii_case("true") {
        Some(true)
    } else if raw.eq_ignore_ascii_case("false") {
        Some(false)
    } else {
        None
    }
}

fn invalid_value(key: &str, raw: &str) -> CoreError {
    CoreError::Validation(format!("Invalid value '{raw}' for filter '{key}'"))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
