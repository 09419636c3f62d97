// Copyright (C) 2026 Campstay Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::{
    create_existing_block, create_existing_reservation, create_test_camp, create_test_context,
    create_test_request,
};
use crate::{CoreError, plan_blocked_range, plan_booking, plan_transition};
use campstay_domain::{
    DateRange, DomainError, GuestCount, PaymentMethod, Reservation, ReservationStatus,
};
use time::macros::date;

#[test]
fn test_plan_booking_on_free_calendar() {
    let camp = create_test_camp();
    let range = DateRange::new(date!(2024 - 06 - 07), date!(2024 - 06 - 09)).unwrap();
    let request = create_test_request(range);

    let plan = plan_booking(&camp, None, &[], &[], request, &create_test_context()).unwrap();

    assert_eq!(plan.reservation.status, ReservationStatus::Pending);
    assert_eq!(plan.reservation.reservation_id, None);
    assert_eq!(plan.reservation.camp_id, 1);
    // Friday night at base, Saturday night with the premium.
    assert_eq!(plan.quote.total_cents, 2200);
    assert_eq!(plan.reservation.total_cents, plan.quote.total_cents);
}

#[test]
fn test_plan_booking_rejects_conflicting_reservation() {
    let camp = create_test_camp();
    let existing = create_existing_reservation(date!(2024 - 06 - 01), date!(2024 - 06 - 05));
    let range = DateRange::new(date!(2024 - 06 - 03), date!(2024 - 06 - 06)).unwrap();
    let request = create_test_request(range);

    let result = plan_booking(
        &camp,
        None,
        &[existing],
        &[],
        request,
        &create_test_context(),
    );
    assert_eq!(
        result,
        Err(CoreError::DomainViolation(DomainError::DatesUnavailable {
            camp_id: 1
        }))
    );
}

#[test]
fn test_plan_booking_allows_back_to_back_stays() {
    let camp = create_test_camp();
    let existing = create_existing_reservation(date!(2024 - 06 - 01), date!(2024 - 06 - 05));
    let range = DateRange::new(date!(2024 - 06 - 05), date!(2024 - 06 - 08)).unwrap();
    let request = create_test_request(range);

    let result = plan_booking(
        &camp,
        None,
        &[existing],
        &[],
        request,
        &create_test_context(),
    );
    assert!(result.is_ok());
}

#[test]
fn test_plan_booking_rejects_blocked_dates() {
    let camp = create_test_camp();
    let block = create_existing_block(date!(2024 - 06 - 10), date!(2024 - 06 - 20));
    let range = DateRange::new(date!(2024 - 06 - 12), date!(2024 - 06 - 14)).unwrap();
    let request = create_test_request(range);

    let result = plan_booking(
        &camp,
        None,
        &[],
        &[block],
        request,
        &create_test_context(),
    );
    assert_eq!(
        result,
        Err(CoreError::DomainViolation(DomainError::DatesUnavailable {
            camp_id: 1
        }))
    );
}

#[test]
fn test_plan_booking_capacity_failure_beats_availability() {
    // Even on a conflicted calendar, an oversize party gets the capacity
    // error so the UI can highlight the guest picker.
    let camp = create_test_camp();
    let existing = create_existing_reservation(date!(2024 - 06 - 01), date!(2024 - 06 - 05));
    let range = DateRange::new(date!(2024 - 06 - 03), date!(2024 - 06 - 06)).unwrap();
    let mut request = create_test_request(range);
    request.guests = GuestCount::new(5, 0).unwrap();

    let result = plan_booking(
        &camp,
        None,
        &[existing],
        &[],
        request,
        &create_test_context(),
    );
    assert_eq!(
        result,
        Err(CoreError::DomainViolation(DomainError::CapacityExceeded {
            requested: 5,
            limit: 4
        }))
    );
}

#[test]
fn test_plan_blocked_range_rejects_overlap_distinctly() {
    let existing = create_existing_block(date!(2024 - 06 - 10), date!(2024 - 06 - 20));
    let range = DateRange::new(date!(2024 - 06 - 15), date!(2024 - 06 - 25)).unwrap();

    let result = plan_blocked_range(
        1,
        &[existing],
        range,
        String::from("repairs"),
        String::from("host-1"),
    );
    assert_eq!(
        result,
        Err(CoreError::DomainViolation(DomainError::OverlappingBlock {
            camp_id: 1
        }))
    );
}

#[test]
fn test_plan_blocked_range_ignores_reservations() {
    // Blocks only collide with blocks; an overlapping reservation is not
    // this function's concern.
    let range = DateRange::new(date!(2024 - 06 - 01), date!(2024 - 06 - 05)).unwrap();
    let result = plan_blocked_range(
        1,
        &[],
        range,
        String::from("repairs"),
        String::from("host-1"),
    );
    assert!(result.is_ok());
    let block = result.unwrap();
    assert_eq!(block.blocked_range_id, None);
    assert_eq!(block.camp_id, 1);
}

#[test]
fn test_plan_transition_walks_the_lifecycle() {
    let pending = make_reservation(ReservationStatus::Pending);

    let processing = plan_transition(&pending, ReservationStatus::Processing).unwrap();
    assert_eq!(processing.status, ReservationStatus::Processing);

    let confirmed = plan_transition(&processing, ReservationStatus::Confirmed).unwrap();
    assert_eq!(confirmed.status, ReservationStatus::Confirmed);

    let cancelled = plan_transition(&confirmed, ReservationStatus::Cancelled).unwrap();
    assert_eq!(cancelled.status, ReservationStatus::Cancelled);
}

#[test]
fn test_plan_transition_rejects_skipping_ahead() {
    let pending = make_reservation(ReservationStatus::Pending);
    let result = plan_transition(&pending, ReservationStatus::Confirmed);
    assert_eq!(
        result,
        Err(CoreError::DomainViolation(
            DomainError::InvalidStatusTransition {
                from: ReservationStatus::Pending,
                to: ReservationStatus::Confirmed,
            }
        ))
    );
}

#[test]
fn test_plan_transition_rejects_leaving_terminal_state() {
    let cancelled = make_reservation(ReservationStatus::Cancelled);
    let result = plan_transition(&cancelled, ReservationStatus::Pending);
    assert!(matches!(
        result,
        Err(CoreError::DomainViolation(
            DomainError::InvalidStatusTransition { .. }
        ))
    ));
}

fn make_reservation(status: ReservationStatus) -> Reservation {
    Reservation::with_id(
        9,
        1,
        String::from("guest-1"),
        DateRange::new(date!(2024 - 06 - 01), date!(2024 - 06 - 05)).unwrap(),
        GuestCount::new(2, 0).unwrap(),
        status,
        4000,
        PaymentMethod::Card,
        None,
    )
}
