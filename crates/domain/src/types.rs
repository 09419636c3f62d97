// Copyright (C) 2026 Campstay Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::date_range::DateRange;
use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use time::Weekday;

/// Represents the lifecycle state of a reservation.
///
/// Explicit lifecycle states govern which status changes are permitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ReservationStatus {
    /// Initial state after creation. Awaiting payment initiation.
    #[default]
    Pending,
    /// Payment in flight with the payment collaborator.
    Processing,
    /// Payment completed. The stay is booked.
    Confirmed,
    /// Terminal state. The reservation no longer holds its dates.
    Cancelled,
}

impl FromStr for ReservationStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "processing" => Ok(Self::Processing),
            "confirmed" => Ok(Self::Confirmed),
            "cancelled" => Ok(Self::Cancelled),
            _ => Err(DomainError::InvalidStatus(s.to_string())),
        }
    }
}

impl std::fmt::Display for ReservationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl ReservationStatus {
    /// Converts this status to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Processing => "processing",
            Self::Confirmed => "confirmed",
            Self::Cancelled => "cancelled",
        }
    }

    /// Checks if a transition from this status to another is valid.
    ///
    /// Valid transitions are:
    /// - Pending → Processing
    /// - Processing → Confirmed
    /// - Pending | Processing | Confirmed → Cancelled
    #[must_use]
    pub const fn can_transition_to(&self, target: Self) -> bool {
        matches!(
            (self, target),
            (Self::Pending, Self::Processing)
                | (Self::Processing, Self::Confirmed)
                | (
                    Self::Pending | Self::Processing | Self::Confirmed,
                    Self::Cancelled
                )
        )
    }

    /// Returns whether a reservation in this status holds its dates.
    ///
    /// Active reservations participate in overlap checks; cancelled
    /// reservations free their range.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        matches!(self, Self::Pending | Self::Processing | Self::Confirmed)
    }

    /// Returns whether this status permits no further transitions.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Cancelled)
    }
}

/// Represents how a guest intends to pay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentMethod {
    /// Card payment captured by the payment collaborator.
    Card,
    /// `PayPal` payment captured by the payment collaborator.
    #[serde(rename = "paypal")]
    PayPal,
    /// Payment settled with the host on arrival.
    #[serde(rename = "on_arrival")]
    OnArrival,
}

impl PaymentMethod {
    /// Parses a payment method from a string.
    ///
    /// # Errors
    ///
    /// Returns an error if the string does not match a known method.
    pub fn parse(s: &str) -> Result<Self, DomainError> {
        match s {
            "card" => Ok(Self::Card),
            "paypal" => Ok(Self::PayPal),
            "on_arrival" => Ok(Self::OnArrival),
            _ => Err(DomainError::InvalidPaymentMethod(s.to_string())),
        }
    }

    /// Returns the string representation of this payment method.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Card => "card",
            Self::PayPal => "paypal",
            Self::OnArrival => "on_arrival",
        }
    }
}

/// Represents the party size of a booking request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuestCount {
    /// The number of adults (at least 1).
    adults: u32,
    /// The number of children.
    children: u32,
}

impl GuestCount {
    /// Creates a new `GuestCount`.
    ///
    /// # Arguments
    ///
    /// * `adults` - The number of adults (must be at least 1)
    /// * `children` - The number of children
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidGuestCount` if `adults` is zero.
    pub const fn new(adults: u32, children: u32) -> Result<Self, DomainError> {
        if adults == 0 {
            return Err(DomainError::InvalidGuestCount { adults });
        }
        Ok(Self { adults, children })
    }

    /// Returns the number of adults.
    #[must_use]
    pub const fn adults(&self) -> u32 {
        self.adults
    }

    /// Returns the number of children.
    #[must_use]
    pub const fn children(&self) -> u32 {
        self.children
    }

    /// Returns the total party size.
    #[must_use]
    pub const fn total(&self) -> u32 {
        self.adults + self.children
    }
}

/// Represents a guest's claim on a camp for a date range.
///
/// `reservation_id` is the canonical database identifier; `None` indicates
/// the reservation has not been persisted yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reservation {
    /// The canonical numeric identifier assigned by the database.
    pub reservation_id: Option<i64>,
    /// The camp this reservation targets.
    pub camp_id: i64,
    /// The principal that created the reservation.
    pub guest_id: String,
    /// The booked date range.
    pub range: DateRange,
    /// The party size.
    pub guests: GuestCount,
    /// The lifecycle status.
    pub status: ReservationStatus,
    /// The server-computed total in minor currency units.
    ///
    /// Never sourced from client input; always the pricing calculator's
    /// own result.
    pub total_cents: i64,
    /// How the guest intends to pay.
    pub payment_method: PaymentMethod,
    /// Caller-supplied idempotency key, if any. Repeating a key must not
    /// create a second reservation.
    pub idempotency_key: Option<String>,
}

impl Reservation {
    /// Creates a new `Reservation` without a persisted ID, in status
    /// `Pending`.
    #[must_use]
    pub const fn new(
        camp_id: i64,
        guest_id: String,
        range: DateRange,
        guests: GuestCount,
        total_cents: i64,
        payment_method: PaymentMethod,
        idempotency_key: Option<String>,
    ) -> Self {
        Self {
            reservation_id: None,
            camp_id,
            guest_id,
            range,
            guests,
            status: ReservationStatus::Pending,
            total_cents,
            payment_method,
            idempotency_key,
        }
    }

    /// Creates a `Reservation` with an existing persisted ID.
    #[must_use]
    #[allow(clippy::too_many_arguments)]
    pub const fn with_id(
        reservation_id: i64,
        camp_id: i64,
        guest_id: String,
        range: DateRange,
        guests: GuestCount,
        status: ReservationStatus,
        total_cents: i64,
        payment_method: PaymentMethod,
        idempotency_key: Option<String>,
    ) -> Self {
        Self {
            reservation_id: Some(reservation_id),
            camp_id,
            guest_id,
            range,
            guests,
            status,
            total_cents,
            payment_method,
            idempotency_key,
        }
    }

    /// Returns whether this reservation currently holds its dates.
    #[must_use]
    pub const fn holds_dates(&self) -> bool {
        self.status.is_active()
    }
}

/// Represents a host-imposed unavailability window, independent of guest
/// bookings. Blocks never expire automatically.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockedRange {
    /// The canonical numeric identifier assigned by the database.
    pub blocked_range_id: Option<i64>,
    /// The camp this block applies to.
    pub camp_id: i64,
    /// The blocked date range.
    pub range: DateRange,
    /// Free-text reason supplied by the host.
    pub reason: String,
    /// The principal that created the block.
    pub created_by: String,
}

impl BlockedRange {
    /// Creates a new `BlockedRange` without a persisted ID.
    #[must_use]
    pub const fn new(camp_id: i64, range: DateRange, reason: String, created_by: String) -> Self {
        Self {
            blocked_range_id: None,
            camp_id,
            range,
            reason,
            created_by,
        }
    }

    /// Creates a `BlockedRange` with an existing persisted ID.
    #[must_use]
    pub const fn with_id(
        blocked_range_id: i64,
        camp_id: i64,
        range: DateRange,
        reason: String,
        created_by: String,
    ) -> Self {
        Self {
            blocked_range_id: Some(blocked_range_id),
            camp_id,
            range,
            reason,
            created_by,
        }
    }
}

/// Represents how a camp's price relates to the party size.
///
/// This is a deliberate per-camp configuration choice: the marketplace UI
/// historically charged a flat rate per booking while the payment path
/// multiplied by adult count. Both behaviors are supported and the camp
/// record picks one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum GuestPricing {
    /// One price per booking regardless of party size. Capacity is still
    /// validated.
    #[default]
    FlatPerBooking,
    /// The nightly subtotal is multiplied by the number of adults.
    PerAdult,
}

impl GuestPricing {
    /// Parses a guest pricing mode from a string.
    ///
    /// # Errors
    ///
    /// Returns an error if the string does not match a known mode.
    pub fn parse(s: &str) -> Result<Self, DomainError> {
        match s {
            "flat_per_booking" => Ok(Self::FlatPerBooking),
            "per_adult" => Ok(Self::PerAdult),
            _ => Err(DomainError::InvalidGuestPricing(s.to_string())),
        }
    }

    /// Returns the string representation of this mode.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::FlatPerBooking => "flat_per_booking",
            Self::PerAdult => "per_adult",
        }
    }
}

/// The set of weekdays a camp treats as weekend nights.
///
/// A night falls on the weekend when the night's own date (not checkout
/// day) is one of these weekdays.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekendDays {
    days: Vec<Weekday>,
}

impl WeekendDays {
    /// Creates a weekend day set from an explicit list of weekdays.
    #[must_use]
    pub const fn new(days: Vec<Weekday>) -> Self {
        Self { days }
    }

    /// Parses a comma-separated day list, e.g. `"Friday,Saturday"`.
    ///
    /// An empty string yields an empty set (no weekend premium nights).
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidWeekendDays` if any entry is not an
    /// English weekday name.
    pub fn parse(s: &str) -> Result<Self, DomainError> {
        if s.trim().is_empty() {
            return Ok(Self { days: Vec::new() });
        }
        let mut days: Vec<Weekday> = Vec::new();
        for part in s.split(',') {
            let day = match part.trim() {
                "Monday" => Weekday::Monday,
                "Tuesday" => Weekday::Tuesday,
                "Wednesday" => Weekday::Wednesday,
                "Thursday" => Weekday::Thursday,
                "Friday" => Weekday::Friday,
                "Saturday" => Weekday::Saturday,
                "Sunday" => Weekday::Sunday,
                _ => return Err(DomainError::InvalidWeekendDays(s.to_string())),
            };
            if !days.contains(&day) {
                days.push(day);
            }
        }
        Ok(Self { days })
    }

    /// Returns whether a weekday belongs to the weekend set.
    #[must_use]
    pub fn contains(&self, day: Weekday) -> bool {
        self.days.contains(&day)
    }

    /// Serializes the set back to its comma-separated form.
    #[must_use]
    pub fn to_storage_string(&self) -> String {
        self.days
            .iter()
            .map(|d| match d {
                Weekday::Monday => "Monday",
                Weekday::Tuesday => "Tuesday",
                Weekday::Wednesday => "Wednesday",
                Weekday::Thursday => "Thursday",
                Weekday::Friday => "Friday",
                Weekday::Saturday => "Saturday",
                Weekday::Sunday => "Sunday",
            })
            .collect::<Vec<&str>>()
            .join(",")
    }
}

/// Active discount configuration for a camp.
///
/// Each field is a percentage reduction (0-100); `None` disables the rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct DiscountConfig {
    /// Applied when the stay starts within the last-minute window.
    pub last_minute_percent: Option<u8>,
    /// Applied to stays of at least 7 nights.
    pub weekly_percent: Option<u8>,
    /// Applied to stays of at least 28 nights; mutually exclusive with the
    /// weekly discount (the longer duration wins).
    pub monthly_percent: Option<u8>,
    /// Applied for a guest's first booking.
    pub first_time_percent: Option<u8>,
}

/// A priced sub-zone of a camp.
///
/// The modifier is a signed percentage applied to each nightly rate when a
/// booking targets the zone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Zone {
    /// The canonical numeric identifier assigned by the database.
    pub zone_id: Option<i64>,
    /// The camp this zone belongs to.
    pub camp_id: i64,
    /// Display name, e.g. "Riverside".
    pub name: String,
    /// Signed percentage rate modifier, e.g. `15` or `-10`.
    pub price_modifier_percent: i32,
}

impl Zone {
    /// Creates a `Zone` with an existing persisted ID.
    #[must_use]
    pub const fn with_id(
        zone_id: i64,
        camp_id: i64,
        name: String,
        price_modifier_percent: i32,
    ) -> Self {
        Self {
            zone_id: Some(zone_id),
            camp_id,
            name,
            price_modifier_percent,
        }
    }
}

/// The trusted resource record for a bookable camp.
///
/// Pricing inputs are always read from this record, never from client
/// input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Camp {
    /// The canonical numeric identifier assigned by the database.
    pub camp_id: Option<i64>,
    /// Display name.
    pub name: String,
    /// The principal that owns (hosts) the camp.
    pub host_id: String,
    /// Base nightly price in minor currency units.
    pub base_price_cents: i64,
    /// Capacity limit validated against the adult count.
    pub max_guests: u32,
    /// Days whose nights attract the weekend premium.
    pub weekend_days: WeekendDays,
    /// Flat premium added to weekend nights, in minor currency units.
    pub weekend_premium_cents: i64,
    /// How price relates to party size.
    pub guest_pricing: GuestPricing,
    /// Active discount rules.
    pub discounts: DiscountConfig,
}

impl Camp {
    /// Creates a `Camp` with an existing persisted ID.
    #[must_use]
    #[allow(clippy::too_many_arguments)]
    pub const fn with_id(
        camp_id: i64,
        name: String,
        host_id: String,
        base_price_cents: i64,
        max_guests: u32,
        weekend_days: WeekendDays,
        weekend_premium_cents: i64,
        guest_pricing: GuestPricing,
        discounts: DiscountConfig,
    ) -> Self {
        Self {
            camp_id: Some(camp_id),
            name,
            host_id,
            base_price_cents,
            max_guests,
            weekend_days,
            weekend_premium_cents,
            guest_pricing,
            discounts,
        }
    }
}
