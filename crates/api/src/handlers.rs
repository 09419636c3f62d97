// Copyright (C) 2026 Campstay Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API handler functions for booking, quoting, and block management.
//!
//! Handlers validate wire input into domain values, fetch trusted rows,
//! delegate the decision to the core planners, and hand the result to
//! persistence. The availability pre-check done here is advisory; the
//! insert transaction re-checks and is authoritative.

use std::str::FromStr;

use time::Date;
use tracing::{error, info};

use campstay::{BookingRequest, plan_blocked_range, plan_booking, plan_transition};
use campstay_domain::{
    Camp, DateRange, GuestCount, PaymentMethod, PriceQuote, QuoteContext, Reservation,
    ReservationStatus, Zone, is_range_free,
};
use campstay_persistence::{CreateReservationOutcome, Persistence};

use crate::auth::AuthenticatedPrincipal;
use crate::error::{
    ApiError, translate_core_error, translate_domain_error, translate_persistence_error,
};
use crate::payment::PaymentProcessor;
use crate::request_response::{
    AppliedDiscountInfo, AvailabilityResponse, BlockedRangeResponse, BookingStatusResponse,
    CreateBlockedRangeRequest, CreateBookingRequest, CreateBookingResponse, DateRangePayload,
    GuestsPayload, QuoteRequest, QuoteResponse, TransitionBookingRequest,
};

fn parse_range(payload: &DateRangePayload) -> Result<DateRange, ApiError> {
    DateRange::parse(&payload.from, &payload.to).map_err(translate_domain_error)
}

fn parse_guests(payload: GuestsPayload) -> Result<GuestCount, ApiError> {
    GuestCount::new(payload.adults, payload.children).map_err(translate_domain_error)
}

fn fetch_camp_and_zone(
    persistence: &mut Persistence,
    camp_id: i64,
    zone_id: Option<i64>,
) -> Result<(Camp, Option<Zone>), ApiError> {
    let camp = persistence
        .fetch_camp(camp_id)
        .map_err(translate_persistence_error)?;
    let zone = zone_id
        .map(|id| persistence.fetch_zone(id, camp_id))
        .transpose()
        .map_err(translate_persistence_error)?;
    Ok((camp, zone))
}

fn quote_context(
    persistence: &mut Persistence,
    booking_date: Date,
    guest_id: Option<&str>,
) -> Result<QuoteContext, ApiError> {
    let first_booking = match guest_id {
        Some(id) => !persistence
            .guest_has_reservations(id)
            .map_err(translate_persistence_error)?,
        None => false,
    };
    Ok(QuoteContext {
        booking_date,
        first_booking,
    })
}

const fn price_per_night(total_cents: i64, nights: i64) -> i64 {
    if nights == 0 { 0 } else { total_cents / nights }
}

/// Creates a booking: validate, price, pre-check availability, persist.
///
/// The stored total is always the server-side quote; nothing the client
/// submits can influence it. On an idempotency-key replay the original
/// reservation and its stored payment intent are returned; the processor
/// is never asked for a second intent.
///
/// # Arguments
///
/// * `persistence` - The booking store
/// * `payment` - The payment collaborator
/// * `principal` - The authenticated guest
/// * `request` - The wire request
/// * `booking_date` - The calendar date the booking is being made
///
/// # Errors
///
/// Returns the full taxonomy: invalid input, capacity, duration,
/// `DatesUnavailable` (including when a concurrent writer wins the insert
/// race), and not-found for camp or zone.
pub fn create_booking(
    persistence: &mut Persistence,
    payment: &dyn PaymentProcessor,
    principal: &AuthenticatedPrincipal,
    request: &CreateBookingRequest,
    booking_date: Date,
) -> Result<CreateBookingResponse, ApiError> {
    let payload = &request.booking;

    // Replay before planning: the original reservation already occupies
    // its dates, so the availability pre-check would otherwise reject the
    // retry.
    if let Some(key) = &payload.idempotency_key
        && let Some(existing) = persistence
            .fetch_by_idempotency_key(key)
            .map_err(translate_persistence_error)?
    {
        info!(
            camp_id = payload.camp_id,
            reservation_id = existing.reservation_id,
            "Replayed booking for repeated idempotency key"
        );
        return booking_response(persistence, payment, &existing);
    }

    let range = parse_range(&payload.date_range)?;
    let guests = parse_guests(payload.guests)?;
    let payment_method =
        PaymentMethod::parse(&payload.payment_method).map_err(translate_domain_error)?;

    let (camp, zone) = fetch_camp_and_zone(persistence, payload.camp_id, payload.zone_id)?;
    let ctx = quote_context(persistence, booking_date, Some(&principal.id))?;

    let reservations = persistence
        .fetch_active_reservations(payload.camp_id, None)
        .map_err(translate_persistence_error)?;
    let blocked = persistence
        .fetch_blocked_ranges(payload.camp_id)
        .map_err(translate_persistence_error)?;

    let plan = plan_booking(
        &camp,
        zone.as_ref(),
        &reservations,
        &blocked,
        BookingRequest {
            guest_id: principal.id.clone(),
            range,
            guests,
            payment_method,
            idempotency_key: payload.idempotency_key.clone(),
        },
        &ctx,
    )
    .map_err(translate_core_error)?;

    let outcome = persistence
        .create_reservation(&plan.reservation)
        .map_err(translate_persistence_error)?;

    let reservation = match outcome {
        CreateReservationOutcome::Created(r) => {
            info!(
                camp_id = payload.camp_id,
                reservation_id = r.reservation_id,
                total_cents = r.total_cents,
                "Created booking"
            );
            r
        }
        CreateReservationOutcome::Replayed(r) => {
            info!(
                camp_id = payload.camp_id,
                reservation_id = r.reservation_id,
                "Replayed booking for repeated idempotency key"
            );
            r
        }
    };

    booking_response(persistence, payment, &reservation)
}

fn booking_response(
    persistence: &mut Persistence,
    payment: &dyn PaymentProcessor,
    reservation: &Reservation,
) -> Result<CreateBookingResponse, ApiError> {
    let reservation_id = reservation.reservation_id.ok_or_else(|| {
        error!("Persisted reservation is missing its assigned id");
        ApiError::Internal {
            message: String::from("storage failure"),
        }
    })?;

    // Payment is initiated once per reservation. A replay finds the stored
    // secret and returns the original intent.
    let client_secret = match persistence
        .fetch_client_secret(reservation_id)
        .map_err(translate_persistence_error)?
    {
        Some(secret) => secret,
        None => {
            let intent = payment.initiate(reservation_id, reservation.total_cents)?;
            persistence
                .store_client_secret(reservation_id, &intent.client_secret)
                .map_err(translate_persistence_error)?;
            intent.client_secret
        }
    };

    let nights = reservation.range.nights();

    Ok(CreateBookingResponse {
        client_secret,
        calculated_total: reservation.total_cents,
        nights,
        price_per_night: price_per_night(reservation.total_cents, nights),
        guests: reservation.guests.total(),
    })
}

/// Computes an advisory price quote without persisting anything.
///
/// Backs the client's price preview; the booking path recomputes its own
/// quote and never trusts this one.
///
/// # Errors
///
/// Returns the pricing taxonomy plus not-found for camp or zone.
pub fn quote_price(
    persistence: &mut Persistence,
    request: &QuoteRequest,
    booking_date: Date,
    guest_id: Option<&str>,
) -> Result<QuoteResponse, ApiError> {
    let range = parse_range(&request.date_range)?;
    let guests = parse_guests(request.guests)?;

    let (camp, zone) = fetch_camp_and_zone(persistence, request.camp_id, request.zone_id)?;
    let ctx = quote_context(persistence, booking_date, guest_id)?;

    let quote = campstay_domain::compute_quote(&camp, zone.as_ref(), &range, &guests, &ctx)
        .map_err(translate_domain_error)?;

    Ok(quote_response(&quote))
}

fn quote_response(quote: &PriceQuote) -> QuoteResponse {
    QuoteResponse {
        nights: quote.nights,
        subtotal: quote.subtotal_cents,
        applied_discounts: quote
            .applied_discounts
            .iter()
            .map(|d| AppliedDiscountInfo {
                kind: d.kind.as_str().to_string(),
                percent: d.percent,
                amount_cents: d.amount_cents,
            })
            .collect(),
        total: quote.total_cents,
        price_per_night: price_per_night(quote.total_cents, quote.nights),
    }
}

/// Checks whether a range is free to book.
///
/// Fails closed: if the calendar cannot be read, the range is reported
/// unavailable rather than risking a double booking on stale data.
///
/// # Errors
///
/// Returns `InvalidInput` only for an unparseable range; read failures
/// are mapped to `available: false`, not errors.
pub fn check_availability(
    persistence: &mut Persistence,
    camp_id: i64,
    from: &str,
    to: &str,
) -> Result<AvailabilityResponse, ApiError> {
    let range = DateRange::parse(from, to).map_err(translate_domain_error)?;

    let reservations = match persistence.fetch_active_reservations(camp_id, None) {
        Ok(rows) => rows,
        Err(e) => {
            error!(camp_id, error = %e, "Failed to read reservations; reporting unavailable");
            return Ok(AvailabilityResponse { available: false });
        }
    };
    let blocked = match persistence.fetch_blocked_ranges(camp_id) {
        Ok(rows) => rows,
        Err(e) => {
            error!(camp_id, error = %e, "Failed to read blocks; reporting unavailable");
            return Ok(AvailabilityResponse { available: false });
        }
    };

    Ok(AvailabilityResponse {
        available: is_range_free(&range, &reservations, &blocked, None),
    })
}

/// Applies a lifecycle transition to a reservation.
///
/// This is the payment collaborator's callback surface: `processing` when
/// payment starts, `confirmed` on settlement, `cancelled` on abandonment.
///
/// # Errors
///
/// Returns `InvalidInput` for an unknown status, `ResourceNotFound` for a
/// missing reservation, and `TransitionNotAllowed` when the lifecycle
/// forbids the move.
pub fn transition_booking(
    persistence: &mut Persistence,
    reservation_id: i64,
    request: &TransitionBookingRequest,
) -> Result<BookingStatusResponse, ApiError> {
    let target = ReservationStatus::from_str(&request.status).map_err(translate_domain_error)?;

    let current = persistence
        .fetch_reservation(reservation_id)
        .map_err(translate_persistence_error)?;

    // Decide in core; the update re-validates inside its transaction.
    let planned = plan_transition(&current, target).map_err(translate_core_error)?;

    let updated = persistence
        .update_reservation_status(reservation_id, planned.status.as_str())
        .map_err(translate_persistence_error)?;

    info!(
        reservation_id,
        status = updated.status.as_str(),
        "Transitioned booking"
    );

    Ok(BookingStatusResponse {
        reservation_id,
        status: updated.status.as_str().to_string(),
    })
}

/// Cancels a reservation.
///
/// Shorthand for a transition to `cancelled`; terminal reservations are
/// rejected by the same lifecycle check.
///
/// # Errors
///
/// Same as [`transition_booking`].
pub fn cancel_booking(
    persistence: &mut Persistence,
    reservation_id: i64,
) -> Result<BookingStatusResponse, ApiError> {
    transition_booking(
        persistence,
        reservation_id,
        &TransitionBookingRequest {
            status: ReservationStatus::Cancelled.as_str().to_string(),
        },
    )
}

/// Creates a host block on a camp's calendar.
///
/// # Errors
///
/// Returns `OverlappingBlock` if the range collides with an existing
/// block, and not-found if the camp does not exist.
pub fn add_blocked_range(
    persistence: &mut Persistence,
    principal: &AuthenticatedPrincipal,
    request: &CreateBlockedRangeRequest,
) -> Result<BlockedRangeResponse, ApiError> {
    let range = parse_range(&request.date_range)?;

    // The camp must exist before anything is planned against it.
    persistence
        .fetch_camp(request.camp_id)
        .map_err(translate_persistence_error)?;

    let existing = persistence
        .fetch_blocked_ranges(request.camp_id)
        .map_err(translate_persistence_error)?;

    let planned = plan_blocked_range(
        request.camp_id,
        &existing,
        range,
        request.reason.clone(),
        principal.id.clone(),
    )
    .map_err(translate_core_error)?;

    let created = persistence
        .create_blocked_range(&planned)
        .map_err(translate_persistence_error)?;

    let blocked_range_id = created.blocked_range_id.ok_or_else(|| {
        error!("Persisted block is missing its assigned id");
        ApiError::Internal {
            message: String::from("storage failure"),
        }
    })?;

    info!(
        camp_id = request.camp_id,
        blocked_range_id, "Created blocked range"
    );

    Ok(BlockedRangeResponse {
        blocked_range_id,
        camp_id: created.camp_id,
        date_range: DateRangePayload {
            from: created.range.start().to_string(),
            to: created.range.end().to_string(),
        },
        reason: created.reason,
    })
}

/// Removes a host block.
///
/// Removing an id that does not exist is a clean not-found, never a
/// crash, and performs no retroactive validation of other bookings.
///
/// # Errors
///
/// Returns `ResourceNotFound` if the block does not exist.
pub fn remove_blocked_range(
    persistence: &mut Persistence,
    blocked_range_id: i64,
) -> Result<(), ApiError> {
    persistence
        .delete_blocked_range(blocked_range_id)
        .map_err(translate_persistence_error)?;

    info!(blocked_range_id, "Removed blocked range");
    Ok(())
}
