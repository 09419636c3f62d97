// Copyright (C) 2026 Campstay Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Nightly price computation for booking requests.
//!
//! ## Invariants
//!
//! - All prices are integer minor currency units (cents); percentage
//!   modifiers use floor division, so identical inputs always produce an
//!   identical total.
//! - Pricing never reads the clock. "Today" arrives as an explicit
//!   [`QuoteContext`] input, so quotes are reproducible.
//! - Pricing inputs come from the trusted [`Camp`] record, never from
//!   client-supplied numbers.
//! - A quote is ephemeral: it is recomputed on every request and is never
//!   persisted as a source of truth.
//!
//! ## Discount precedence
//!
//! Discounts stack as sequential percentage reductions in a fixed order:
//!
//! 1. last-minute (stay starts within [`LAST_MINUTE_WINDOW_DAYS`] of the
//!    booking date)
//! 2. weekly or monthly (mutually exclusive; the longer duration wins)
//! 3. first-time guest
//!
//! ## Example
//!
//! ```text
//! base = 1000, weekend premium = 200, weekend days = {Saturday}
//! stay Friday 2024-06-07 → Sunday 2024-06-09 (nights: Fri, Sat)
//!
//! Fri 2024-06-07: 1000
//! Sat 2024-06-08: 1000 + 200 = 1200
//! total = 2200
//! ```

use crate::date_range::DateRange;
use crate::error::DomainError;
use crate::types::{Camp, GuestCount, GuestPricing, Zone};
use serde::{Deserialize, Serialize};
use time::Date;

/// Sanity ceiling on the length of a single stay.
pub const MAX_NIGHTS: i64 = 365;

/// A stay qualifies as last-minute when it starts within this many days of
/// the booking date.
pub const LAST_MINUTE_WINDOW_DAYS: i64 = 3;

/// Minimum nights for the weekly discount.
pub const WEEKLY_MIN_NIGHTS: i64 = 7;

/// Minimum nights for the monthly discount.
pub const MONTHLY_MIN_NIGHTS: i64 = 28;

/// The discount rules that can reduce a quote.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DiscountKind {
    /// Stay starts within the last-minute window.
    LastMinute,
    /// Stay of at least 7 nights.
    Weekly,
    /// Stay of at least 28 nights.
    Monthly,
    /// The guest's first booking.
    FirstTime,
}

impl DiscountKind {
    /// Returns the string representation of this discount kind.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::LastMinute => "last_minute",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
            Self::FirstTime => "first_time",
        }
    }
}

/// The rate charged for a single night of the stay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NightRate {
    /// The night's date.
    pub date: Date,
    /// The rate for that night in minor currency units, after the weekend
    /// premium and zone modifier.
    pub rate_cents: i64,
}

/// A discount that was applied to a quote.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppliedDiscount {
    /// Which rule fired.
    pub kind: DiscountKind,
    /// The percentage reduction.
    pub percent: u8,
    /// The amount removed from the running total, in minor units.
    pub amount_cents: i64,
}

/// Caller-supplied context a quote depends on besides the stay itself.
///
/// Keeping these explicit keeps the calculator deterministic: two calls
/// with identical inputs always produce identical totals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuoteContext {
    /// The calendar date the booking is being made.
    pub booking_date: Date,
    /// Whether this is the guest's first booking.
    pub first_booking: bool,
}

/// An ephemeral price computation result.
///
/// Not stored; recomputed on every request so a stale or tampered client
/// total can never reach the payment collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceQuote {
    /// Number of nights (always at least 1).
    pub nights: i64,
    /// The camp's advertised base nightly price in minor units.
    pub base_price_cents: i64,
    /// Per-night breakdown for display.
    pub nightly: Vec<NightRate>,
    /// Sum of nightly rates after guest scaling, before discounts.
    pub subtotal_cents: i64,
    /// The party the quote was computed for.
    pub guests: GuestCount,
    /// Discounts applied, in precedence order.
    pub applied_discounts: Vec<AppliedDiscount>,
    /// The final total in minor units.
    pub total_cents: i64,
}

/// Computes the authoritative price for a stay.
///
/// # Arguments
///
/// * `camp` - The trusted camp record
/// * `zone` - The targeted sub-zone, if the booking names one
/// * `range` - The requested stay
/// * `guests` - The party size
/// * `ctx` - Booking-time context (booking date, first-booking flag)
///
/// # Errors
///
/// Returns an error if:
/// - the camp's price configuration is unusable
///   (`InvalidPriceConfiguration`)
/// - the adult count exceeds the camp capacity (`CapacityExceeded`)
/// - the stay is longer than [`MAX_NIGHTS`] (`InvalidDuration`)
pub fn compute_quote(
    camp: &Camp,
    zone: Option<&Zone>,
    range: &DateRange,
    guests: &GuestCount,
    ctx: &QuoteContext,
) -> Result<PriceQuote, DomainError> {
    validate_price_configuration(camp, zone)?;

    // Capacity is rejected before any total is computed.
    if guests.adults() > camp.max_guests {
        return Err(DomainError::CapacityExceeded {
            requested: guests.adults(),
            limit: camp.max_guests,
        });
    }

    let nights = range.nights();
    if nights < 1 || nights > MAX_NIGHTS {
        return Err(DomainError::InvalidDuration {
            nights,
            max: MAX_NIGHTS,
        });
    }

    let zone_modifier: i64 = zone.map_or(0, |z| i64::from(z.price_modifier_percent));

    let mut nightly: Vec<NightRate> = Vec::with_capacity(usize::try_from(nights).unwrap_or(0));
    let mut subtotal: i64 = 0;
    for date in range.iter_nights() {
        let mut rate = camp.base_price_cents;
        if camp.weekend_days.contains(date.weekday()) {
            rate += camp.weekend_premium_cents;
        }
        rate += rate * zone_modifier / 100;
        nightly.push(NightRate {
            date,
            rate_cents: rate,
        });
        subtotal += rate;
    }

    if camp.guest_pricing == GuestPricing::PerAdult {
        subtotal *= i64::from(guests.adults());
    }

    let mut total = subtotal;
    let mut applied: Vec<AppliedDiscount> = Vec::new();

    let lead_days = (range.start() - ctx.booking_date).whole_days();
    if let Some(pct) = camp.discounts.last_minute_percent
        && (0..=LAST_MINUTE_WINDOW_DAYS).contains(&lead_days)
    {
        apply_discount(&mut total, &mut applied, DiscountKind::LastMinute, pct);
    }

    // Weekly and monthly are mutually exclusive; the longer duration wins.
    if nights >= MONTHLY_MIN_NIGHTS {
        if let Some(pct) = camp.discounts.monthly_percent {
            apply_discount(&mut total, &mut applied, DiscountKind::Monthly, pct);
        }
    } else if nights >= WEEKLY_MIN_NIGHTS
        && let Some(pct) = camp.discounts.weekly_percent
    {
        apply_discount(&mut total, &mut applied, DiscountKind::Weekly, pct);
    }

    if ctx.first_booking
        && let Some(pct) = camp.discounts.first_time_percent
    {
        apply_discount(&mut total, &mut applied, DiscountKind::FirstTime, pct);
    }

    Ok(PriceQuote {
        nights,
        base_price_cents: camp.base_price_cents,
        nightly,
        subtotal_cents: subtotal,
        guests: *guests,
        applied_discounts: applied,
        total_cents: total,
    })
}

/// Applies one percentage reduction to the running total.
fn apply_discount(
    total: &mut i64,
    applied: &mut Vec<AppliedDiscount>,
    kind: DiscountKind,
    percent: u8,
) {
    let amount = *total * i64::from(percent) / 100;
    *total -= amount;
    applied.push(AppliedDiscount {
        kind,
        percent,
        amount_cents: amount,
    });
}

/// Rejects camps whose trusted pricing fields are internally inconsistent.
fn validate_price_configuration(camp: &Camp, zone: Option<&Zone>) -> Result<(), DomainError> {
    if camp.base_price_cents < 0 {
        return Err(DomainError::InvalidPriceConfiguration {
            reason: format!("negative base price: {}", camp.base_price_cents),
        });
    }
    if camp.weekend_premium_cents < 0 {
        return Err(DomainError::InvalidPriceConfiguration {
            reason: format!("negative weekend premium: {}", camp.weekend_premium_cents),
        });
    }
    if let Some(z) = zone
        && z.price_modifier_percent <= -100
    {
        return Err(DomainError::InvalidPriceConfiguration {
            reason: format!(
                "zone modifier {}% would make nightly rates non-positive",
                z.price_modifier_percent
            ),
        });
    }
    for (name, pct) in [
        ("last_minute", camp.discounts.last_minute_percent),
        ("weekly", camp.discounts.weekly_percent),
        ("monthly", camp.discounts.monthly_percent),
        ("first_time", camp.discounts.first_time_percent),
    ] {
        if let Some(p) = pct
            && p > 100
        {
            return Err(DomainError::InvalidPriceConfiguration {
                reason: format!("{name} discount of {p}% exceeds 100%"),
            });
        }
    }
    Ok(())
}
