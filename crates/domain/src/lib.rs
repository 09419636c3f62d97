// Copyright (C) 2026 Campstay Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod availability;
mod date_range;
mod error;
mod pricing;
mod types;

#[cfg(test)]
mod tests;

pub use availability::{Conflict, blocks_conflict, find_conflict, is_range_free};
pub use date_range::DateRange;
pub use error::DomainError;
pub use pricing::{
    AppliedDiscount, DiscountKind, MAX_NIGHTS, NightRate, PriceQuote, QuoteContext, compute_quote,
};
pub use types::{
    BlockedRange, Camp, DiscountConfig, GuestCount, GuestPricing, PaymentMethod, Reservation,
    ReservationStatus, WeekendDays, Zone,
};
