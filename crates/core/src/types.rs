/// All database primary keys are PostgreSQL `UUID`s generated by `gen_random_uuid()`.
pub type DbId = uuid::Uuid;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Prices are stored as a count of minor currency units (e.g. cents).
pub type MinorUnits = i64;
