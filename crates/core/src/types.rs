/// Numeric primary keys are PostgreSQL BIGSERIAL.
pub type DbId = i64;

/// UUID primary keys are generated server-side (v4).
pub type EntityUuid = uuid::Uuid;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Calendar dates without a time zone (e.g. birth dates).
pub type LocalDate = chrono::NaiveDate;
