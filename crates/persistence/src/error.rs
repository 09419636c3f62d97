// Copyright (C) 2026 Campstay Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur during persistence operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PersistenceError {
    /// A database error occurred.
    DatabaseError(String),
    /// Database connection failed.
    DatabaseConnectionFailed(String),
    /// Database migration failed.
    MigrationFailed(String),
    /// Query execution failed.
    QueryFailed(String),
    /// Initialization error.
    InitializationError(String),
    /// Foreign key enforcement is not enabled.
    ForeignKeyEnforcementNotEnabled,
    /// The requested camp was not found.
    CampNotFound(i64),
    /// The requested zone was not found for the camp.
    ZoneNotFound {
        /// The requested zone id.
        zone_id: i64,
        /// The camp the zone was expected to belong to.
        camp_id: i64,
    },
    /// The requested reservation was not found.
    ReservationNotFound(i64),
    /// The requested blocked range was not found.
    BlockedRangeNotFound(i64),
    /// The commit-time overlap re-check found a conflicting reservation or
    /// block; the insert was rolled back.
    OverlapConflict {
        /// The camp the insert targeted.
        camp_id: i64,
    },
    /// The commit-time overlap re-check found a conflicting host block;
    /// the block insert was rolled back.
    BlockOverlapConflict {
        /// The camp the insert targeted.
        camp_id: i64,
    },
    /// A status update was rejected by the reservation lifecycle.
    TransitionRejected {
        /// The stored status.
        from: String,
        /// The requested status.
        to: String,
    },
    /// A stored row failed validation into its domain type.
    RowValidation(String),
    /// The requested resource was not found.
    NotFound(String),
}

impl std::fmt::Display for PersistenceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DatabaseError(msg) => write!(f, "Database error: {msg}"),
            Self::DatabaseConnectionFailed(msg) => {
                write!(f, "Database connection failed: {msg}")
            }
            Self::MigrationFailed(msg) => write!(f, "Migration failed: {msg}"),
            Self::QueryFailed(msg) => write!(f, "Query failed: {msg}"),
            Self::InitializationError(msg) => write!(f, "Initialization error: {msg}"),
            Self::ForeignKeyEnforcementNotEnabled => {
                write!(f, "Foreign key enforcement is not enabled")
            }
            Self::CampNotFound(id) => write!(f, "Camp not found: {id}"),
            Self::ZoneNotFound { zone_id, camp_id } => {
                write!(f, "Zone {zone_id} not found for camp {camp_id}")
            }
            Self::ReservationNotFound(id) => write!(f, "Reservation not found: {id}"),
            Self::BlockedRangeNotFound(id) => write!(f, "Blocked range not found: {id}"),
            Self::OverlapConflict { camp_id } => {
                write!(
                    f,
                    "Insert rejected: dates overlap an existing reservation or block for camp {camp_id}"
                )
            }
            Self::BlockOverlapConflict { camp_id } => {
                write!(
                    f,
                    "Insert rejected: range overlaps an existing block for camp {camp_id}"
                )
            }
            Self::TransitionRejected { from, to } => {
                write!(f, "Status update rejected: cannot move from {from} to {to}")
            }
            Self::RowValidation(msg) => write!(f, "Stored row failed validation: {msg}"),
            Self::NotFound(msg) => write!(f, "Not found: {msg}"),
        }
    }
}

impl std::error::Error for PersistenceError {}

impl From<diesel::result::Error> for PersistenceError {
    fn from(err: diesel::result::Error) -> Self {
        match err {
            diesel::result::Error::NotFound => Self::NotFound("Record not found".to_string()),
            _ => Self::DatabaseError(err.to_string()),
        }
    }
}

impl From<diesel::ConnectionError> for PersistenceError {
    fn from(err: diesel::ConnectionError) -> Self {
        Self::DatabaseConnectionFailed(err.to_string())
    }
}
