// Copyright (C) 2026 Campstay Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Reservation queries.

use diesel::prelude::*;
use tracing::debug;

use campstay_domain::{DateRange, Reservation, ReservationStatus};

use crate::data_models::ReservationRow;
use crate::diesel_schema::reservations;
use crate::error::PersistenceError;

/// Retrieves all reservations that still hold their dates for a camp.
///
/// Cancelled reservations are filtered out in SQL; every returned row is
/// validated into a domain `Reservation`.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `camp_id` - The camp to load reservations for
/// * `exclude_reservation_id` - Skips one reservation, used when
///   re-checking an existing reservation against its own row
///
/// # Errors
///
/// Returns an error if the query fails or any row is malformed.
pub fn active_reservations_for_camp(
    conn: &mut SqliteConnection,
    camp_id: i64,
    exclude_reservation_id: Option<i64>,
) -> Result<Vec<Reservation>, PersistenceError> {
    let mut query = reservations::table
        .filter(reservations::camp_id.eq(camp_id))
        .filter(reservations::status.ne(ReservationStatus::Cancelled.as_str()))
        .into_boxed();

    if let Some(excluded) = exclude_reservation_id {
        query = query.filter(reservations::reservation_id.ne(excluded));
    }

    let rows: Vec<ReservationRow> = query
        .order(reservations::start_date.asc())
        .select(ReservationRow::as_select())
        .load(conn)?;

    debug!(camp_id, count = rows.len(), "Loaded active reservations");

    rows.into_iter().map(ReservationRow::into_domain).collect()
}

/// Retrieves the active reservations overlapping a candidate range.
///
/// The half-open overlap filter runs in SQL (`start < :end AND
/// end > :start` on ISO date text); this is the commit-time re-check used
/// inside the insert transaction.
///
/// # Errors
///
/// Returns an error if the query fails or any row is malformed.
pub fn overlapping_active_reservations(
    conn: &mut SqliteConnection,
    camp_id: i64,
    range: &DateRange,
) -> Result<Vec<Reservation>, PersistenceError> {
    let rows: Vec<ReservationRow> = reservations::table
        .filter(reservations::camp_id.eq(camp_id))
        .filter(reservations::status.ne(ReservationStatus::Cancelled.as_str()))
        .filter(reservations::start_date.lt(range.end().to_string()))
        .filter(reservations::end_date.gt(range.start().to_string()))
        .select(ReservationRow::as_select())
        .load(conn)?;

    rows.into_iter().map(ReservationRow::into_domain).collect()
}

/// Retrieves a single reservation by id.
///
/// # Errors
///
/// Returns `ReservationNotFound` if no such reservation exists.
pub fn find_reservation(
    conn: &mut SqliteConnection,
    reservation_id: i64,
) -> Result<Reservation, PersistenceError> {
    let row: ReservationRow = reservations::table
        .filter(reservations::reservation_id.eq(reservation_id))
        .select(ReservationRow::as_select())
        .first(conn)
        .optional()?
        .ok_or(PersistenceError::ReservationNotFound(reservation_id))?;

    row.into_domain()
}

/// Returns whether a guest has any reservations on record, in any status.
///
/// Backs the first-booking discount decision.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn guest_has_reservations(
    conn: &mut SqliteConnection,
    guest_id: &str,
) -> Result<bool, PersistenceError> {
    let count: i64 = reservations::table
        .filter(reservations::guest_id.eq(guest_id))
        .count()
        .get_result(conn)?;

    Ok(count > 0)
}

/// Retrieves the stored payment client secret for a reservation.
///
/// Returns `Ok(None)` when payment has not been initiated for the row.
///
/// # Errors
///
/// Returns `ReservationNotFound` if the reservation does not exist.
pub fn client_secret(
    conn: &mut SqliteConnection,
    reservation_id: i64,
) -> Result<Option<String>, PersistenceError> {
    reservations::table
        .filter(reservations::reservation_id.eq(reservation_id))
        .select(reservations::client_secret)
        .first::<Option<String>>(conn)
        .optional()?
        .ok_or(PersistenceError::ReservationNotFound(reservation_id))
}

/// Retrieves the reservation previously created under an idempotency key.
///
/// # Errors
///
/// Returns an error if the query fails or the row is malformed.
/// Returns `Ok(None)` if the key has not been used.
pub fn find_by_idempotency_key(
    conn: &mut SqliteConnection,
    key: &str,
) -> Result<Option<Reservation>, PersistenceError> {
    let row: Option<ReservationRow> = reservations::table
        .filter(reservations::idempotency_key.eq(key))
        .select(ReservationRow::as_select())
        .first(conn)
        .optional()?;

    row.map(ReservationRow::into_domain).transpose()
}
