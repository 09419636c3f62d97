// Copyright (C) 2026 Campstay Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Shared fixtures for persistence tests.

use time::Weekday;

use campstay_domain::{
    BlockedRange, Camp, DateRange, DiscountConfig, GuestCount, GuestPricing, PaymentMethod,
    Reservation, WeekendDays,
};

use crate::Persistence;

/// Creates an isolated in-memory store.
pub fn test_persistence() -> Persistence {
    Persistence::new_in_memory().unwrap()
}

/// Inserts a standard camp and returns it with its assigned id.
///
/// Base price 1000 cents, weekend premium 200 on Saturdays, capacity 4,
/// flat pricing, no discounts.
pub fn seed_camp(persistence: &mut Persistence) -> Camp {
    let camp = Camp {
        camp_id: None,
        name: "Pine Hollow".to_string(),
        host_id: "host-1".to_string(),
        base_price_cents: 1000,
        max_guests: 4,
        weekend_days: WeekendDays::new(vec![Weekday::Saturday]),
        weekend_premium_cents: 200,
        guest_pricing: GuestPricing::FlatPerBooking,
        discounts: DiscountConfig::default(),
    };
    persistence.create_camp(&camp).unwrap()
}

/// Builds an unpersisted pending reservation for the camp.
pub fn pending_reservation(camp_id: i64, from: &str, to: &str) -> Reservation {
    Reservation::new(
        camp_id,
        "guest-1".to_string(),
        DateRange::parse(from, to).unwrap(),
        GuestCount::new(2, 1).unwrap(),
        2200,
        PaymentMethod::Card,
        None,
    )
}

/// Builds an unpersisted host block for the camp.
pub fn host_block(camp_id: i64, from: &str, to: &str) -> BlockedRange {
    BlockedRange::new(
        camp_id,
        DateRange::parse(from, to).unwrap(),
        "maintenance".to_string(),
        "host-1".to_string(),
    )
}
