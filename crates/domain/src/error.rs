// Copyright (C) 2026 Campstay Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::types::ReservationStatus;

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The end date is not after the start date.
    InvalidDateRange {
        /// The offending start date.
        start: time::Date,
        /// The offending end date.
        end: time::Date,
    },
    /// The stay length is outside the allowed bounds.
    InvalidDuration {
        /// The computed number of nights.
        nights: i64,
        /// The maximum number of nights allowed.
        max: i64,
    },
    /// The requested guest count exceeds the camp's capacity.
    CapacityExceeded {
        /// The number of adults requested.
        requested: u32,
        /// The camp's capacity limit.
        limit: u32,
    },
    /// The guest count is malformed (no adults).
    InvalidGuestCount {
        /// The number of adults supplied.
        adults: u32,
    },
    /// The camp's price configuration is unusable.
    InvalidPriceConfiguration {
        /// Description of the configuration problem.
        reason: String,
    },
    /// The requested dates collide with an existing reservation or block.
    DatesUnavailable {
        /// The camp the request targeted.
        camp_id: i64,
    },
    /// A host block collides with an existing block for the same camp.
    OverlappingBlock {
        /// The camp the block targeted.
        camp_id: i64,
    },
    /// The requested status change is not permitted by the lifecycle.
    InvalidStatusTransition {
        /// The current status.
        from: ReservationStatus,
        /// The requested status.
        to: ReservationStatus,
    },
    /// Reservation status string is not recognized.
    InvalidStatus(String),
    /// Payment method string is not recognized.
    InvalidPaymentMethod(String),
    /// Weekend day set string is not recognized.
    InvalidWeekendDays(String),
    /// Guest pricing mode string is not recognized.
    InvalidGuestPricing(String),
    /// Failed to parse a date from a string.
    DateParseError {
        /// The invalid date string.
        date_string: String,
        /// The parsing error message.
        error: String,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidDateRange { start, end } => {
                write!(f, "End date {end} must be after start date {start}")
            }
            Self::InvalidDuration { nights, max } => {
                write!(f, "Stay of {nights} nights is invalid: must be between 1 and {max}")
            }
            Self::CapacityExceeded { requested, limit } => {
                write!(
                    f,
                    "Guest count {requested} exceeds the camp capacity of {limit}"
                )
            }
            Self::InvalidGuestCount { adults } => {
                write!(f, "Invalid guest count: at least one adult required, got {adults}")
            }
            Self::InvalidPriceConfiguration { reason } => {
                write!(f, "Invalid price configuration: {reason}")
            }
            Self::DatesUnavailable { camp_id } => {
                write!(f, "Requested dates are not available for camp {camp_id}")
            }
            Self::OverlappingBlock { camp_id } => {
                write!(f, "Blocked range overlaps an existing block for camp {camp_id}")
            }
            Self::InvalidStatusTransition { from, to } => {
                write!(f, "Reservation cannot move from {from} to {to}")
            }
            Self::InvalidStatus(s) => write!(f, "Unknown reservation status: {s}"),
            Self::InvalidPaymentMethod(s) => write!(f, "Unknown payment method: {s}"),
            Self::InvalidWeekendDays(s) => write!(f, "Unknown weekend day set: {s}"),
            Self::InvalidGuestPricing(s) => write!(f, "Unknown guest pricing mode: {s}"),
            Self::DateParseError { date_string, error } => {
                write!(f, "Failed to parse date '{date_string}': {error}")
            }
        }
    }
}

impl std::error::Error for DomainError {}
