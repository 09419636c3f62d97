// Copyright (C) 2026 Campstay Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Request and response DTOs for the API boundary.
//!
//! These types are the wire contract and are distinct from domain types.
//! Field names follow the client's camelCase convention.

use serde::{Deserialize, Serialize};

/// Wire form of a half-open date range. `from` is check-in, `to` is
/// checkout; the checkout day itself is not occupied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRangePayload {
    /// Check-in date, ISO 8601.
    pub from: String,
    /// Checkout date, ISO 8601.
    pub to: String,
}

/// Wire form of the party size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuestsPayload {
    /// Number of adults (at least 1).
    pub adults: u32,
    /// Number of children.
    pub children: u32,
}

/// The booking payload nested under `"booking"` in the create request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingPayload {
    /// The camp to book.
    pub camp_id: i64,
    /// The targeted sub-zone, if any.
    #[serde(default)]
    pub zone_id: Option<i64>,
    /// The requested stay.
    pub date_range: DateRangePayload,
    /// The party size.
    pub guests: GuestsPayload,
    /// Payment method tag: `card`, `paypal`, or `on_arrival`.
    pub payment_method: String,
    /// Optional idempotency key; repeating a key never creates a second
    /// reservation.
    #[serde(default)]
    pub idempotency_key: Option<String>,
}

/// API request to create a booking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateBookingRequest {
    /// The booking payload.
    pub booking: BookingPayload,
}

/// API response for a successful booking creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookingResponse {
    /// Opaque payment handle for the client to complete payment with.
    pub client_secret: String,
    /// The server-computed total in minor units. Client-submitted totals
    /// are ignored.
    pub calculated_total: i64,
    /// Number of nights in the stay.
    pub nights: i64,
    /// Average per-night price in minor units (floor of total / nights).
    pub price_per_night: i64,
    /// Total party size the price was computed for.
    pub guests: u32,
}

/// API request for an advisory price quote.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteRequest {
    /// The camp to quote.
    pub camp_id: i64,
    /// The targeted sub-zone, if any.
    #[serde(default)]
    pub zone_id: Option<i64>,
    /// The requested stay.
    pub date_range: DateRangePayload,
    /// The party size.
    pub guests: GuestsPayload,
}

/// One applied discount in a quote response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppliedDiscountInfo {
    /// Which rule fired: `last_minute`, `weekly`, `monthly`, `first_time`.
    pub kind: String,
    /// The percentage reduction.
    pub percent: u8,
    /// The amount removed from the running total, in minor units.
    pub amount_cents: i64,
}

/// API response for an advisory price quote.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteResponse {
    /// Number of nights in the stay.
    pub nights: i64,
    /// Sum of nightly rates after guest scaling, before discounts.
    pub subtotal: i64,
    /// Discounts applied, in precedence order.
    pub applied_discounts: Vec<AppliedDiscountInfo>,
    /// The final total in minor units.
    pub total: i64,
    /// Average per-night price in minor units.
    pub price_per_night: i64,
}

/// API response for an availability check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailabilityResponse {
    /// Whether the requested range is free to book.
    pub available: bool,
}

/// API request to transition a reservation's status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransitionBookingRequest {
    /// The target status: `processing`, `confirmed`, or `cancelled`.
    pub status: String,
}

/// API response for a status transition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingStatusResponse {
    /// The reservation that was updated.
    pub reservation_id: i64,
    /// The status after the transition.
    pub status: String,
}

/// API request to create a host block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBlockedRangeRequest {
    /// The camp to block.
    pub camp_id: i64,
    /// The blocked date range.
    pub date_range: DateRangePayload,
    /// Free-text reason for the block.
    pub reason: String,
}

/// API response for a created host block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockedRangeResponse {
    /// The assigned block id.
    pub blocked_range_id: i64,
    /// The camp the block applies to.
    pub camp_id: i64,
    /// The blocked date range.
    pub date_range: DateRangePayload,
    /// The reason supplied by the host.
    pub reason: String,
}
