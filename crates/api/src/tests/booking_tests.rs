// Copyright (C) 2026 Campstay Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Booking handler tests.

use crate::auth::authenticate;
use crate::error::ApiError;
use crate::handlers::{cancel_booking, check_availability, create_booking, transition_booking};
use crate::payment::MockPaymentProcessor;
use crate::request_response::TransitionBookingRequest;
use crate::tests::helpers::{
    BOOKING_DATE, booking_request, principal, seed_camp, test_persistence,
};

#[test]
fn authentication_rejects_empty_principal() {
    let result = authenticate("   ");
    assert!(matches!(
        result,
        Err(ApiError::AuthenticationRequired { .. })
    ));
}

#[test]
fn friday_to_sunday_stay_costs_2200() {
    let mut persistence = test_persistence();
    let camp_id = seed_camp(&mut persistence);

    // 2026-07-10 is a Friday; nights are Fri (1000) and Sat (1000 + 200).
    let response = create_booking(
        &mut persistence,
        &MockPaymentProcessor,
        &principal("guest-1"),
        &booking_request(camp_id, "2026-07-10", "2026-07-12"),
        BOOKING_DATE,
    )
    .unwrap();

    assert_eq!(response.calculated_total, 2200);
    assert_eq!(response.nights, 2);
    assert_eq!(response.price_per_night, 1100);
    assert_eq!(response.guests, 3);
    assert!(response.client_secret.starts_with("pi_"));
}

#[test]
fn second_booking_for_same_dates_is_rejected() {
    let mut persistence = test_persistence();
    let camp_id = seed_camp(&mut persistence);

    create_booking(
        &mut persistence,
        &MockPaymentProcessor,
        &principal("guest-1"),
        &booking_request(camp_id, "2026-07-10", "2026-07-15"),
        BOOKING_DATE,
    )
    .unwrap();

    let result = create_booking(
        &mut persistence,
        &MockPaymentProcessor,
        &principal("guest-2"),
        &booking_request(camp_id, "2026-07-12", "2026-07-14"),
        BOOKING_DATE,
    );

    assert!(matches!(
        result,
        Err(ApiError::DatesUnavailable { camp_id: id }) if id == camp_id
    ));
}

#[test]
fn back_to_back_bookings_succeed() {
    let mut persistence = test_persistence();
    let camp_id = seed_camp(&mut persistence);

    create_booking(
        &mut persistence,
        &MockPaymentProcessor,
        &principal("guest-1"),
        &booking_request(camp_id, "2026-07-10", "2026-07-12"),
        BOOKING_DATE,
    )
    .unwrap();

    create_booking(
        &mut persistence,
        &MockPaymentProcessor,
        &principal("guest-2"),
        &booking_request(camp_id, "2026-07-12", "2026-07-14"),
        BOOKING_DATE,
    )
    .unwrap();
}

#[test]
fn capacity_is_rejected_before_availability() {
    let mut persistence = test_persistence();
    let camp_id = seed_camp(&mut persistence);

    // Occupy the dates so both rejections are in play; capacity must win.
    create_booking(
        &mut persistence,
        &MockPaymentProcessor,
        &principal("guest-1"),
        &booking_request(camp_id, "2026-07-10", "2026-07-12"),
        BOOKING_DATE,
    )
    .unwrap();

    let mut request = booking_request(camp_id, "2026-07-10", "2026-07-12");
    request.booking.guests.adults = 5;

    let result = create_booking(
        &mut persistence,
        &MockPaymentProcessor,
        &principal("guest-2"),
        &request,
        BOOKING_DATE,
    );

    assert!(matches!(
        result,
        Err(ApiError::CapacityExceeded {
            requested: 5,
            limit: 4
        })
    ));
}

#[test]
fn zero_night_stay_is_rejected() {
    let mut persistence = test_persistence();
    let camp_id = seed_camp(&mut persistence);

    let result = create_booking(
        &mut persistence,
        &MockPaymentProcessor,
        &principal("guest-1"),
        &booking_request(camp_id, "2026-07-10", "2026-07-10"),
        BOOKING_DATE,
    );

    assert!(matches!(result, Err(ApiError::InvalidDuration { .. })));
}

#[test]
fn overlong_stay_is_rejected() {
    let mut persistence = test_persistence();
    let camp_id = seed_camp(&mut persistence);

    // 400 nights.
    let result = create_booking(
        &mut persistence,
        &MockPaymentProcessor,
        &principal("guest-1"),
        &booking_request(camp_id, "2026-07-10", "2027-08-14"),
        BOOKING_DATE,
    );

    assert!(matches!(
        result,
        Err(ApiError::InvalidDuration { nights: 400, .. })
    ));
}

#[test]
fn unknown_camp_reports_not_found() {
    let mut persistence = test_persistence();
    seed_camp(&mut persistence);

    let result = create_booking(
        &mut persistence,
        &MockPaymentProcessor,
        &principal("guest-1"),
        &booking_request(999, "2026-07-10", "2026-07-12"),
        BOOKING_DATE,
    );

    assert!(matches!(result, Err(ApiError::ResourceNotFound { .. })));
}

#[test]
fn unknown_payment_method_is_invalid_input() {
    let mut persistence = test_persistence();
    let camp_id = seed_camp(&mut persistence);

    let mut request = booking_request(camp_id, "2026-07-10", "2026-07-12");
    request.booking.payment_method = "cheque".to_string();

    let result = create_booking(
        &mut persistence,
        &MockPaymentProcessor,
        &principal("guest-1"),
        &request,
        BOOKING_DATE,
    );

    assert!(matches!(
        result,
        Err(ApiError::InvalidInput { ref field, .. }) if field == "paymentMethod"
    ));
}

#[test]
fn repeated_idempotency_key_returns_original_booking() {
    let mut persistence = test_persistence();
    let camp_id = seed_camp(&mut persistence);

    let mut request = booking_request(camp_id, "2026-07-10", "2026-07-12");
    request.booking.idempotency_key = Some("retry-1".to_string());

    let first = create_booking(
        &mut persistence,
        &MockPaymentProcessor,
        &principal("guest-1"),
        &request,
        BOOKING_DATE,
    )
    .unwrap();

    let second = create_booking(
        &mut persistence,
        &MockPaymentProcessor,
        &principal("guest-1"),
        &request,
        BOOKING_DATE,
    )
    .unwrap();

    assert_eq!(second.calculated_total, first.calculated_total);
    // The replay returns the original payment intent rather than
    // initiating a new one.
    assert_eq!(second.client_secret, first.client_secret);

    let active = persistence.fetch_active_reservations(camp_id, None).unwrap();
    assert_eq!(active.len(), 1);

    let reservation_id = active[0].reservation_id.unwrap();
    assert_eq!(
        persistence.fetch_client_secret(reservation_id).unwrap(),
        Some(first.client_secret)
    );
}

#[test]
fn booking_walks_payment_lifecycle() {
    let mut persistence = test_persistence();
    let camp_id = seed_camp(&mut persistence);

    create_booking(
        &mut persistence,
        &MockPaymentProcessor,
        &principal("guest-1"),
        &booking_request(camp_id, "2026-07-10", "2026-07-12"),
        BOOKING_DATE,
    )
    .unwrap();
    let reservation_id = persistence.fetch_active_reservations(camp_id, None).unwrap()[0]
        .reservation_id
        .unwrap();

    let processing = transition_booking(
        &mut persistence,
        reservation_id,
        &TransitionBookingRequest {
            status: "processing".to_string(),
        },
    )
    .unwrap();
    assert_eq!(processing.status, "processing");

    let confirmed = transition_booking(
        &mut persistence,
        reservation_id,
        &TransitionBookingRequest {
            status: "confirmed".to_string(),
        },
    )
    .unwrap();
    assert_eq!(confirmed.status, "confirmed");

    let cancelled = cancel_booking(&mut persistence, reservation_id).unwrap();
    assert_eq!(cancelled.status, "cancelled");

    // Cancelled is terminal.
    let result = cancel_booking(&mut persistence, reservation_id);
    assert!(matches!(
        result,
        Err(ApiError::TransitionNotAllowed { ref from, .. }) if from == "cancelled"
    ));
}

#[test]
fn skipping_lifecycle_states_is_rejected() {
    let mut persistence = test_persistence();
    let camp_id = seed_camp(&mut persistence);

    create_booking(
        &mut persistence,
        &MockPaymentProcessor,
        &principal("guest-1"),
        &booking_request(camp_id, "2026-07-10", "2026-07-12"),
        BOOKING_DATE,
    )
    .unwrap();
    let reservation_id = persistence.fetch_active_reservations(camp_id, None).unwrap()[0]
        .reservation_id
        .unwrap();

    let result = transition_booking(
        &mut persistence,
        reservation_id,
        &TransitionBookingRequest {
            status: "confirmed".to_string(),
        },
    );

    assert!(matches!(
        result,
        Err(ApiError::TransitionNotAllowed { ref from, ref to })
            if from == "pending" && to == "confirmed"
    ));
}

#[test]
fn availability_reflects_bookings_and_cancellations() {
    let mut persistence = test_persistence();
    let camp_id = seed_camp(&mut persistence);

    let free = check_availability(&mut persistence, camp_id, "2026-07-10", "2026-07-12").unwrap();
    assert!(free.available);

    create_booking(
        &mut persistence,
        &MockPaymentProcessor,
        &principal("guest-1"),
        &booking_request(camp_id, "2026-07-10", "2026-07-12"),
        BOOKING_DATE,
    )
    .unwrap();

    let taken = check_availability(&mut persistence, camp_id, "2026-07-11", "2026-07-13").unwrap();
    assert!(!taken.available);

    // The shared boundary date is free to book.
    let boundary =
        check_availability(&mut persistence, camp_id, "2026-07-12", "2026-07-14").unwrap();
    assert!(boundary.available);

    let reservation_id = persistence.fetch_active_reservations(camp_id, None).unwrap()[0]
        .reservation_id
        .unwrap();
    cancel_booking(&mut persistence, reservation_id).unwrap();

    let freed = check_availability(&mut persistence, camp_id, "2026-07-11", "2026-07-13").unwrap();
    assert!(freed.available);
}
