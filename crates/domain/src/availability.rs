// Copyright (C) 2026 Campstay Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The availability oracle: pure predicates over already-fetched rows.
//!
//! These functions have no side effects and never touch the database; the
//! caller fetches the candidate camp's reservations and blocked ranges and
//! asks whether a requested range is free. If the fetch itself fails the
//! caller must fail closed and report the range as unavailable.

use crate::date_range::DateRange;
use crate::types::{BlockedRange, Reservation};

/// Reports whether a candidate range is free of conflicts.
///
/// Only reservations that still hold their dates (pending, processing, or
/// confirmed) conflict; cancelled reservations free their range. Ranges
/// that merely touch at a boundary do not conflict.
///
/// # Arguments
///
/// * `candidate` - The requested range
/// * `reservations` - All reservations fetched for the camp
/// * `blocked` - All host blocks fetched for the camp
/// * `exclude_reservation_id` - Skips one reservation, used when
///   re-checking an existing reservation against its own row
#[must_use]
pub fn is_range_free(
    candidate: &DateRange,
    reservations: &[Reservation],
    blocked: &[BlockedRange],
    exclude_reservation_id: Option<i64>,
) -> bool {
    find_conflict(candidate, reservations, blocked, exclude_reservation_id).is_none()
}

/// Describes what a candidate range collided with, for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Conflict {
    /// An active reservation with the given id (if persisted).
    Reservation(Option<i64>),
    /// A host block with the given id (if persisted).
    BlockedRange(Option<i64>),
}

/// Returns the first conflict a candidate range has, if any.
///
/// Reservations are checked before blocks; within each list, rows are
/// checked in the order the caller fetched them.
#[must_use]
pub fn find_conflict(
    candidate: &DateRange,
    reservations: &[Reservation],
    blocked: &[BlockedRange],
    exclude_reservation_id: Option<i64>,
) -> Option<Conflict> {
    for reservation in reservations {
        if let (Some(excluded), Some(id)) = (exclude_reservation_id, reservation.reservation_id)
            && excluded == id
        {
            continue;
        }
        if reservation.holds_dates() && candidate.overlaps(&reservation.range) {
            return Some(Conflict::Reservation(reservation.reservation_id));
        }
    }
    for block in blocked {
        if candidate.overlaps(&block.range) {
            return Some(Conflict::BlockedRange(block.blocked_range_id));
        }
    }
    None
}

/// Reports whether a candidate host block collides with an existing block.
///
/// Block creation runs only against other blocks, never reservations; the
/// distinct `OverlappingBlock` rejection lets hosts see an actionable
/// message.
#[must_use]
pub fn blocks_conflict(candidate: &DateRange, blocked: &[BlockedRange]) -> bool {
    blocked.iter().any(|b| candidate.overlaps(&b.range))
}
