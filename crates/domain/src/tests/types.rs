// Copyright (C) 2026 Campstay Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{
    DateRange, GuestCount, GuestPricing, PaymentMethod, Reservation, ReservationStatus,
    WeekendDays,
};
use std::str::FromStr;
use time::Weekday;
use time::macros::date;

#[test]
fn test_status_transition_table() {
    use ReservationStatus::{Cancelled, Confirmed, Pending, Processing};

    assert!(Pending.can_transition_to(Processing));
    assert!(Processing.can_transition_to(Confirmed));
    assert!(Pending.can_transition_to(Cancelled));
    assert!(Processing.can_transition_to(Cancelled));
    assert!(Confirmed.can_transition_to(Cancelled));

    // No skipping ahead, no resurrection, no self-loops.
    assert!(!Pending.can_transition_to(Confirmed));
    assert!(!Confirmed.can_transition_to(Pending));
    assert!(!Confirmed.can_transition_to(Processing));
    assert!(!Cancelled.can_transition_to(Pending));
    assert!(!Cancelled.can_transition_to(Processing));
    assert!(!Cancelled.can_transition_to(Confirmed));
    assert!(!Pending.can_transition_to(Pending));
}

#[test]
fn test_status_activity_and_terminality() {
    assert!(ReservationStatus::Pending.is_active());
    assert!(ReservationStatus::Processing.is_active());
    assert!(ReservationStatus::Confirmed.is_active());
    assert!(!ReservationStatus::Cancelled.is_active());
    assert!(ReservationStatus::Cancelled.is_terminal());
    assert!(!ReservationStatus::Confirmed.is_terminal());
}

#[test]
fn test_status_string_round_trip() {
    for status in [
        ReservationStatus::Pending,
        ReservationStatus::Processing,
        ReservationStatus::Confirmed,
        ReservationStatus::Cancelled,
    ] {
        assert_eq!(
            ReservationStatus::from_str(status.as_str()),
            Ok(status),
            "status {status} should survive storage"
        );
    }
    assert!(ReservationStatus::from_str("archived").is_err());
}

#[test]
fn test_guest_count_requires_an_adult() {
    assert!(GuestCount::new(0, 2).is_err());
    let party = GuestCount::new(2, 3).unwrap();
    assert_eq!(party.total(), 5);
}

#[test]
fn test_payment_method_parse() {
    assert_eq!(PaymentMethod::parse("card"), Ok(PaymentMethod::Card));
    assert_eq!(PaymentMethod::parse("paypal"), Ok(PaymentMethod::PayPal));
    assert_eq!(
        PaymentMethod::parse("on_arrival"),
        Ok(PaymentMethod::OnArrival)
    );
    assert!(PaymentMethod::parse("iou").is_err());
}

#[test]
fn test_weekend_days_parse_and_storage_round_trip() {
    let days = WeekendDays::parse("Friday,Saturday").unwrap();
    assert!(days.contains(Weekday::Friday));
    assert!(days.contains(Weekday::Saturday));
    assert!(!days.contains(Weekday::Sunday));
    assert_eq!(days.to_storage_string(), "Friday,Saturday");
}

#[test]
fn test_weekend_days_empty_set_allowed() {
    let days = WeekendDays::parse("").unwrap();
    assert!(!days.contains(Weekday::Saturday));
    assert_eq!(days.to_storage_string(), "");
}

#[test]
fn test_weekend_days_rejects_unknown_day() {
    assert!(WeekendDays::parse("Saturday,Caturday").is_err());
}

#[test]
fn test_guest_pricing_parse() {
    assert_eq!(
        GuestPricing::parse("flat_per_booking"),
        Ok(GuestPricing::FlatPerBooking)
    );
    assert_eq!(GuestPricing::parse("per_adult"), Ok(GuestPricing::PerAdult));
    assert!(GuestPricing::parse("per_tent").is_err());
}

#[test]
fn test_new_reservation_starts_pending_without_id() {
    let range = DateRange::new(date!(2024 - 06 - 01), date!(2024 - 06 - 05)).unwrap();
    let guests = GuestCount::new(2, 1).unwrap();
    let reservation = Reservation::new(
        1,
        String::from("guest-1"),
        range,
        guests,
        4000,
        PaymentMethod::Card,
        Some(String::from("key-1")),
    );
    assert_eq!(reservation.reservation_id, None);
    assert_eq!(reservation.status, ReservationStatus::Pending);
    assert!(reservation.holds_dates());
}
