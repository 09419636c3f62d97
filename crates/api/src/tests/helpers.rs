// Copyright (C) 2026 Campstay Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Shared fixtures for API tests.

use time::macros::date;
use time::{Date, Weekday};

use campstay_domain::{Camp, DiscountConfig, GuestPricing, WeekendDays};
use campstay_persistence::Persistence;

use crate::auth::AuthenticatedPrincipal;
use crate::request_response::{
    BookingPayload, CreateBookingRequest, DateRangePayload, GuestsPayload,
};

/// A booking date well outside any last-minute window for July stays.
pub const BOOKING_DATE: Date = date!(2026 - 05 - 01);

pub fn test_persistence() -> Persistence {
    Persistence::new_in_memory().unwrap()
}

pub fn principal(id: &str) -> AuthenticatedPrincipal {
    AuthenticatedPrincipal::new(id.to_string())
}

/// Seeds a camp with base 1000, weekend premium 200 on Saturdays,
/// capacity 4, flat pricing, no discounts. Returns its id.
pub fn seed_camp(persistence: &mut Persistence) -> i64 {
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
    persistence.create_camp(&camp).unwrap().camp_id.unwrap()
}

/// Seeds a camp with every discount rule enabled. Returns its id.
pub fn seed_discount_camp(persistence: &mut Persistence) -> i64 {
    let camp = Camp {
        camp_id: None,
        name: "Birch Meadow".to_string(),
        host_id: "host-2".to_string(),
        base_price_cents: 1000,
        max_guests: 6,
        weekend_days: WeekendDays::new(Vec::new()),
        weekend_premium_cents: 0,
        guest_pricing: GuestPricing::FlatPerBooking,
        discounts: DiscountConfig {
            last_minute_percent: Some(10),
            weekly_percent: Some(10),
            monthly_percent: Some(20),
            first_time_percent: Some(5),
        },
    };
    persistence.create_camp(&camp).unwrap().camp_id.unwrap()
}

/// Builds a booking request for the given camp and dates.
pub fn booking_request(camp_id: i64, from: &str, to: &str) -> CreateBookingRequest {
    CreateBookingRequest {
        booking: BookingPayload {
            camp_id,
            zone_id: None,
            date_range: DateRangePayload {
                from: from.to_string(),
                to: to.to_string(),
            },
            guests: GuestsPayload {
                adults: 2,
                children: 1,
            },
            payment_method: "card".to_string(),
            idempotency_key: None,
        },
    }
}
