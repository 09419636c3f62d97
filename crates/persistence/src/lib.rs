// Copyright (C) 2026 Campstay Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Persistence layer for the Campstay booking core.
//!
//! This crate stores camps, zones, reservations, and host blocks in
//! `SQLite` via Diesel. Dates are stored as ISO 8601 text, which compares
//! lexicographically in the same order as chronologically, so half-open
//! overlap checks run directly in SQL.
//!
//! ## Concurrency
//!
//! The no-double-booking invariant is enforced here, not in callers.
//! Reservation and block inserts run inside `immediate_transaction`, which
//! takes the `SQLite` write lock before re-running the overlap query
//! against committed state. An availability check done before calling into
//! this crate is advisory; the transaction's re-check is authoritative.
//!
//! ## Testing
//!
//! `new_in_memory` hands out an isolated shared in-memory database per
//! call, named from an atomic counter so parallel tests never collide.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};

use diesel::SqliteConnection;

use campstay_domain::{BlockedRange, Camp, DateRange, Reservation, Zone};

/// Atomic counter for generating unique in-memory database names.
///
/// This ensures deterministic test isolation by eliminating time-based
/// collisions. Each call to `new_in_memory()` receives a unique sequential
/// ID.
static DB_COUNTER: AtomicU64 = AtomicU64::new(0);

mod backend;
mod data_models;
mod diesel_schema;
mod error;
mod mutations;
mod queries;

#[cfg(test)]
mod tests;

pub use error::PersistenceError;
pub use mutations::CreateReservationOutcome;

/// Persistence adapter for the booking store.
///
/// Owns a single `SQLite` connection; callers that need concurrent access
/// wrap the adapter in their own synchronization.
pub struct Persistence {
    pub(crate) conn: SqliteConnection,
}

impl Persistence {
    /// Creates a new persistence adapter with an in-memory `SQLite`
    /// database.
    ///
    /// Each call receives a unique database instance via atomic counter,
    /// ensuring deterministic test isolation without time-based
    /// collisions.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be initialized.
    pub fn new_in_memory() -> Result<Self, PersistenceError> {
        // Unique shared in-memory database name per call so tests are
        // isolated.
        let db_id = DB_COUNTER.fetch_add(1, Ordering::SeqCst);
        let db_name = format!("memdb_test_{db_id}");
        let shared_memory_url = format!("file:{db_name}?mode=memory&cache=shared");

        let mut conn: SqliteConnection = backend::initialize_database(&shared_memory_url)?;

        backend::verify_foreign_key_enforcement(&mut conn)?;

        Ok(Self { conn })
    }

    /// Creates a new persistence adapter with a file-based `SQLite`
    /// database.
    ///
    /// # Arguments
    ///
    /// * `path` - The path to the `SQLite` database file
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or initialized.
    pub fn new_with_file<P: AsRef<Path>>(path: P) -> Result<Self, PersistenceError> {
        let path_str = path.as_ref().to_str().ok_or_else(|| {
            PersistenceError::InitializationError("Invalid database path".to_string())
        })?;

        let mut conn: SqliteConnection = backend::initialize_database(path_str)?;

        // WAL mode for better read concurrency on file databases.
        backend::enable_wal_mode(&mut conn)?;

        backend::verify_foreign_key_enforcement(&mut conn)?;

        Ok(Self { conn })
    }

    /// Verifies that foreign key enforcement is enabled.
    ///
    /// This is a startup-time check required to ensure referential
    /// integrity constraints are enforced.
    ///
    /// # Errors
    ///
    /// Returns an error if foreign key enforcement is not enabled.
    pub fn verify_foreign_key_enforcement(&mut self) -> Result<(), PersistenceError> {
        backend::verify_foreign_key_enforcement(&mut self.conn)
    }

    // ========================================================================
    // Camp & Zone
    // ========================================================================

    /// Retrieves the trusted camp record.
    ///
    /// # Errors
    ///
    /// Returns `CampNotFound` if no such camp exists.
    pub fn fetch_camp(&mut self, camp_id: i64) -> Result<Camp, PersistenceError> {
        queries::camps::find_camp(&mut self.conn, camp_id)
    }

    /// Retrieves a zone, verifying it belongs to the given camp.
    ///
    /// # Errors
    ///
    /// Returns `ZoneNotFound` if the zone does not exist under the camp.
    pub fn fetch_zone(&mut self, zone_id: i64, camp_id: i64) -> Result<Zone, PersistenceError> {
        queries::camps::find_zone(&mut self.conn, zone_id, camp_id)
    }

    /// Inserts a new camp record and returns it with its assigned id.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails.
    pub fn create_camp(&mut self, camp: &Camp) -> Result<Camp, PersistenceError> {
        mutations::camps::create_camp(&mut self.conn, camp)
    }

    /// Inserts a new zone and returns it with its assigned id.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails, including a foreign key
    /// violation when the camp does not exist.
    pub fn create_zone(&mut self, zone: &Zone) -> Result<Zone, PersistenceError> {
        mutations::camps::create_zone(&mut self.conn, zone)
    }

    // ========================================================================
    // Reservations
    // ========================================================================

    /// Retrieves all reservations that still hold their dates for a camp.
    ///
    /// # Arguments
    ///
    /// * `camp_id` - The camp to load reservations for
    /// * `exclude_reservation_id` - Skips one reservation, used when
    ///   re-checking an existing reservation against its own row
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or any row is malformed.
    pub fn fetch_active_reservations(
        &mut self,
        camp_id: i64,
        exclude_reservation_id: Option<i64>,
    ) -> Result<Vec<Reservation>, PersistenceError> {
        queries::reservations::active_reservations_for_camp(
            &mut self.conn,
            camp_id,
            exclude_reservation_id,
        )
    }

    /// Retrieves the active reservations overlapping a candidate range.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or any row is malformed.
    pub fn fetch_overlapping_reservations(
        &mut self,
        camp_id: i64,
        range: &DateRange,
    ) -> Result<Vec<Reservation>, PersistenceError> {
        queries::reservations::overlapping_active_reservations(&mut self.conn, camp_id, range)
    }

    /// Retrieves a single reservation by id.
    ///
    /// # Errors
    ///
    /// Returns `ReservationNotFound` if no such reservation exists.
    pub fn fetch_reservation(
        &mut self,
        reservation_id: i64,
    ) -> Result<Reservation, PersistenceError> {
        queries::reservations::find_reservation(&mut self.conn, reservation_id)
    }

    /// Retrieves the reservation previously created under an idempotency
    /// key, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or the row is malformed.
    pub fn fetch_by_idempotency_key(
        &mut self,
        key: &str,
    ) -> Result<Option<Reservation>, PersistenceError> {
        queries::reservations::find_by_idempotency_key(&mut self.conn, key)
    }

    /// Retrieves the stored payment client secret for a reservation, if
    /// payment has been initiated.
    ///
    /// # Errors
    ///
    /// Returns `ReservationNotFound` if no such reservation exists.
    pub fn fetch_client_secret(
        &mut self,
        reservation_id: i64,
    ) -> Result<Option<String>, PersistenceError> {
        queries::reservations::client_secret(&mut self.conn, reservation_id)
    }

    /// Stores the payment client secret issued for a reservation.
    ///
    /// # Errors
    ///
    /// Returns `ReservationNotFound` if no such reservation exists.
    pub fn store_client_secret(
        &mut self,
        reservation_id: i64,
        secret: &str,
    ) -> Result<(), PersistenceError> {
        mutations::reservations::set_client_secret(&mut self.conn, reservation_id, secret)
    }

    /// Returns whether a guest has any reservations on record.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn guest_has_reservations(&mut self, guest_id: &str) -> Result<bool, PersistenceError> {
        queries::reservations::guest_has_reservations(&mut self.conn, guest_id)
    }

    /// Inserts a new reservation, re-checking availability at commit time.
    ///
    /// Distinguishes a genuinely new row from an idempotency-key replay so
    /// callers can skip side effects (such as starting a payment) on
    /// replays.
    ///
    /// # Errors
    ///
    /// Returns `OverlapConflict` if a concurrent writer took the dates
    /// first.
    pub fn create_reservation(
        &mut self,
        reservation: &Reservation,
    ) -> Result<CreateReservationOutcome, PersistenceError> {
        mutations::reservations::create_reservation(&mut self.conn, reservation)
    }

    /// Applies a lifecycle transition to a stored reservation.
    ///
    /// # Errors
    ///
    /// Returns `ReservationNotFound` if the id does not exist, or
    /// `TransitionRejected` if the lifecycle forbids the move.
    pub fn update_reservation_status(
        &mut self,
        reservation_id: i64,
        target: &str,
    ) -> Result<Reservation, PersistenceError> {
        mutations::reservations::update_reservation_status(&mut self.conn, reservation_id, target)
    }

    // ========================================================================
    // Blocked Ranges
    // ========================================================================

    /// Retrieves all host blocks for a camp.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or any row is malformed.
    pub fn fetch_blocked_ranges(
        &mut self,
        camp_id: i64,
    ) -> Result<Vec<BlockedRange>, PersistenceError> {
        queries::blocked::blocked_ranges_for_camp(&mut self.conn, camp_id)
    }

    /// Inserts a new host block, re-checking block overlap at commit time.
    ///
    /// # Errors
    ///
    /// Returns `BlockOverlapConflict` if an existing block already covers
    /// any of the dates.
    pub fn create_blocked_range(
        &mut self,
        block: &BlockedRange,
    ) -> Result<BlockedRange, PersistenceError> {
        mutations::blocked::create_blocked_range(&mut self.conn, block)
    }

    /// Deletes a host block by id.
    ///
    /// # Errors
    ///
    /// Returns `BlockedRangeNotFound` if no such block exists.
    pub fn delete_blocked_range(&mut self, blocked_range_id: i64) -> Result<(), PersistenceError> {
        mutations::blocked::delete_blocked_range(&mut self.conn, blocked_range_id)
    }
}
