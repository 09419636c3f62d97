// Copyright (C) 2026 Campstay Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Pure booking decisions.
//!
//! Each function here takes trusted rows the caller already fetched plus a
//! request payload and returns either a fully validated value ready to
//! persist, or a typed rejection. Nothing in this module performs I/O; the
//! persistence layer re-runs the overlap check inside its own transaction
//! before committing, so a plan produced here is advisory until the insert
//! succeeds.

use crate::error::CoreError;
use campstay_domain::{
    BlockedRange, Camp, DateRange, DomainError, GuestCount, PaymentMethod, PriceQuote,
    QuoteContext, Reservation, ReservationStatus, Zone, compute_quote, is_range_free,
};

/// The validated payload of a booking request, after shape validation at
/// the API boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingRequest {
    /// The authenticated guest creating the booking.
    pub guest_id: String,
    /// The requested stay.
    pub range: DateRange,
    /// The party size.
    pub guests: GuestCount,
    /// How the guest intends to pay.
    pub payment_method: PaymentMethod,
    /// Optional idempotency key for safe retries.
    pub idempotency_key: Option<String>,
}

/// The outcome of a successful booking plan: a reservation ready to
/// persist and the quote that priced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingPlan {
    /// The reservation to insert, in status `Pending`, carrying the
    /// server-computed total.
    pub reservation: Reservation,
    /// The quote breakdown, for the response body.
    pub quote: PriceQuote,
}

/// Plans a new booking against the current view of a camp's calendar.
///
/// Runs the coordinator's validation pipeline: capacity and duration are
/// checked by the pricing calculator, availability by the oracle. The
/// resulting reservation carries the recomputed total; client-submitted
/// totals never enter this path.
///
/// # Arguments
///
/// * `camp` - The trusted camp record
/// * `zone` - The targeted sub-zone, if any
/// * `reservations` - The camp's reservations as fetched
/// * `blocked` - The camp's host blocks as fetched
/// * `request` - The validated request payload
/// * `ctx` - Booking-time pricing context
///
/// # Errors
///
/// Returns `CoreError::DomainViolation` wrapping:
/// - `CapacityExceeded`, `InvalidDuration`, or
///   `InvalidPriceConfiguration` from the pricing calculator
/// - `DatesUnavailable` if the oracle finds a conflict
pub fn plan_booking(
    camp: &Camp,
    zone: Option<&Zone>,
    reservations: &[Reservation],
    blocked: &[BlockedRange],
    request: BookingRequest,
    ctx: &QuoteContext,
) -> Result<BookingPlan, CoreError> {
    // Pricing first: capacity and duration failures carry more specific
    // information than a bare availability rejection.
    let quote = compute_quote(camp, zone, &request.range, &request.guests, ctx)?;

    if !is_range_free(&request.range, reservations, blocked, None) {
        return Err(CoreError::DomainViolation(DomainError::DatesUnavailable {
            camp_id: camp.camp_id.unwrap_or_default(),
        }));
    }

    let reservation = Reservation::new(
        camp.camp_id.unwrap_or_default(),
        request.guest_id,
        request.range,
        request.guests,
        quote.total_cents,
        request.payment_method,
        request.idempotency_key,
    );

    Ok(BookingPlan { reservation, quote })
}

/// Plans a new host block against the camp's existing blocks.
///
/// Blocks are checked only against other blocks, never reservations, and
/// reject with the distinct `OverlappingBlock` failure so hosts get an
/// actionable message.
///
/// # Errors
///
/// Returns `CoreError::DomainViolation(OverlappingBlock)` if the range
/// collides with an existing block.
pub fn plan_blocked_range(
    camp_id: i64,
    existing: &[BlockedRange],
    range: DateRange,
    reason: String,
    created_by: String,
) -> Result<BlockedRange, CoreError> {
    if campstay_domain::blocks_conflict(&range, existing) {
        return Err(CoreError::DomainViolation(DomainError::OverlappingBlock {
            camp_id,
        }));
    }
    Ok(BlockedRange::new(camp_id, range, reason, created_by))
}

/// Plans a status transition for an existing reservation.
///
/// # Errors
///
/// Returns `CoreError::DomainViolation(InvalidStatusTransition)` if the
/// lifecycle forbids the move (terminal states are immutable).
pub fn plan_transition(
    current: &Reservation,
    target: ReservationStatus,
) -> Result<Reservation, CoreError> {
    if !current.status.can_transition_to(target) {
        return Err(CoreError::DomainViolation(
            DomainError::InvalidStatusTransition {
                from: current.status,
                to: target,
            },
        ));
    }
    let mut updated = current.clone();
    updated.status = target;
    Ok(updated)
}
