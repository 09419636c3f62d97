// Copyright (C) 2026 Campstay Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Test fixtures shared by the core tests.

use crate::BookingRequest;
use campstay_domain::{
    BlockedRange, Camp, DateRange, DiscountConfig, GuestCount, GuestPricing, PaymentMethod,
    QuoteContext, Reservation, ReservationStatus, WeekendDays,
};
use time::Weekday;
use time::macros::date;

pub fn create_test_camp() -> Camp {
    Camp::with_id(
        1,
        String::from("Pine Hollow"),
        String::from("host-1"),
        1000,
        4,
        WeekendDays::new(vec![Weekday::Saturday]),
        200,
        GuestPricing::FlatPerBooking,
        DiscountConfig::default(),
    )
}

pub fn create_test_context() -> QuoteContext {
    QuoteContext {
        booking_date: date!(2024 - 05 - 01),
        first_booking: false,
    }
}

pub fn create_test_request(range: DateRange) -> BookingRequest {
    BookingRequest {
        guest_id: String::from("guest-1"),
        range,
        guests: GuestCount::new(2, 0).unwrap(),
        payment_method: PaymentMethod::Card,
        idempotency_key: None,
    }
}

pub fn create_existing_reservation(from: time::Date, to: time::Date) -> Reservation {
    Reservation::with_id(
        42,
        1,
        String::from("guest-2"),
        DateRange::new(from, to).unwrap(),
        GuestCount::new(2, 0).unwrap(),
        ReservationStatus::Confirmed,
        4000,
        PaymentMethod::Card,
        None,
    )
}

pub fn create_existing_block(from: time::Date, to: time::Date) -> BlockedRange {
    BlockedRange::with_id(
        7,
        1,
        DateRange::new(from, to).unwrap(),
        String::from("maintenance"),
        String::from("host-1"),
    )
}
