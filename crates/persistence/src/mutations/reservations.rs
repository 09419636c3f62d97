// Copyright (C) 2026 Campstay Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Reservation mutations.

use std::str::FromStr;

use diesel::dsl::sql;
use diesel::prelude::*;
use diesel::sql_types::BigInt;
use tracing::debug;

use campstay_domain::{Reservation, ReservationStatus, is_range_free};

use crate::diesel_schema::reservations;
use crate::error::PersistenceError;
use crate::queries::blocked::overlapping_blocks;
use crate::queries::reservations::{
    find_by_idempotency_key, find_reservation, overlapping_active_reservations,
};

/// The result of a reservation insert attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CreateReservationOutcome {
    /// A new row was inserted.
    Created(Reservation),
    /// The idempotency key was seen before; the original reservation is
    /// returned and no row was inserted.
    Replayed(Reservation),
}

impl CreateReservationOutcome {
    /// Returns the reservation regardless of how it was obtained.
    #[must_use]
    pub fn into_reservation(self) -> Reservation {
        match self {
            Self::Created(r) | Self::Replayed(r) => r,
        }
    }
}

/// Inserts a new reservation, re-checking availability at commit time.
///
/// The idempotency lookup, the overlap re-check against reservations and
/// blocks, and the insert all run in one immediate transaction. A
/// pre-check done by the caller is advisory only; this re-check is the
/// authoritative one.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `reservation` - The planned reservation (no persisted id, status
///   `pending`, server-computed total)
///
/// # Errors
///
/// Returns `OverlapConflict` if a concurrent writer took the dates first,
/// or a database error if the transaction fails.
pub fn create_reservation(
    conn: &mut SqliteConnection,
    reservation: &Reservation,
) -> Result<CreateReservationOutcome, PersistenceError> {
    let camp_id = reservation.camp_id;

    conn.immediate_transaction(|conn| {
        if let Some(key) = &reservation.idempotency_key
            && let Some(existing) = find_by_idempotency_key(conn, key)?
        {
            debug!(
                camp_id,
                reservation_id = existing.reservation_id,
                "Idempotency key replay; returning original reservation"
            );
            return Ok(CreateReservationOutcome::Replayed(existing));
        }

        // Authoritative re-check against committed state, under the write
        // lock taken by the immediate transaction.
        let conflicting = overlapping_active_reservations(conn, camp_id, &reservation.range)?;
        let blocks = overlapping_blocks(conn, camp_id, &reservation.range)?;
        if !is_range_free(&reservation.range, &conflicting, &blocks, None) {
            return Err(PersistenceError::OverlapConflict { camp_id });
        }

        diesel::insert_into(reservations::table)
            .values((
                reservations::camp_id.eq(camp_id),
                reservations::guest_id.eq(&reservation.guest_id),
                reservations::start_date.eq(reservation.range.start().to_string()),
                reservations::end_date.eq(reservation.range.end().to_string()),
                reservations::adults.eq(i32::try_from(reservation.guests.adults()).unwrap_or(0)),
                reservations::children
                    .eq(i32::try_from(reservation.guests.children()).unwrap_or(0)),
                reservations::status.eq(reservation.status.as_str()),
                reservations::total_cents.eq(reservation.total_cents),
                reservations::payment_method.eq(reservation.payment_method.as_str()),
                reservations::idempotency_key.eq(reservation.idempotency_key.as_deref()),
            ))
            .execute(conn)?;

        let reservation_id: i64 =
            diesel::select(sql::<BigInt>("last_insert_rowid()")).get_result(conn)?;

        debug!(
            camp_id,
            reservation_id,
            range = %reservation.range,
            total_cents = reservation.total_cents,
            "Inserted reservation"
        );

        let mut created = reservation.clone();
        created.reservation_id = Some(reservation_id);
        Ok(CreateReservationOutcome::Created(created))
    })
}

/// Stores the payment client secret issued for a reservation.
///
/// Written once, right after payment initiation; replays read it back
/// instead of initiating a second intent.
///
/// # Errors
///
/// Returns `ReservationNotFound` if the id does not exist.
pub fn set_client_secret(
    conn: &mut SqliteConnection,
    reservation_id: i64,
    secret: &str,
) -> Result<(), PersistenceError> {
    let updated =
        diesel::update(reservations::table.filter(reservations::reservation_id.eq(reservation_id)))
            .set(reservations::client_secret.eq(secret))
            .execute(conn)?;

    if updated == 0 {
        return Err(PersistenceError::ReservationNotFound(reservation_id));
    }

    debug!(reservation_id, "Stored payment client secret");
    Ok(())
}

/// Applies a lifecycle transition to a stored reservation.
///
/// The current row is loaded and the transition validated inside the same
/// transaction as the update, so two racing status changes cannot both
/// pass the check.
///
/// # Errors
///
/// Returns `ReservationNotFound` if the id does not exist, or
/// `TransitionRejected` if the lifecycle forbids the move.
pub fn update_reservation_status(
    conn: &mut SqliteConnection,
    reservation_id: i64,
    target: &str,
) -> Result<Reservation, PersistenceError> {
    let target_status =
        ReservationStatus::from_str(target).map_err(|_| PersistenceError::TransitionRejected {
            from: String::from("?"),
            to: target.to_string(),
        })?;

    conn.immediate_transaction(|conn| {
        let current = find_reservation(conn, reservation_id)?;

        if !current.status.can_transition_to(target_status) {
            return Err(PersistenceError::TransitionRejected {
                from: current.status.as_str().to_string(),
                to: target_status.as_str().to_string(),
            });
        }

        diesel::update(
            reservations::table.filter(reservations::reservation_id.eq(reservation_id)),
        )
        .set(reservations::status.eq(target_status.as_str()))
        .execute(conn)?;

        debug!(
            reservation_id,
            from = current.status.as_str(),
            to = target_status.as_str(),
            "Updated reservation status"
        );

        let mut updated = current;
        updated.status = target_status;
        Ok(updated)
    })
}
