// Copyright (C) 2026 Campstay Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.
//!
//! Domain, core, and persistence errors are translated explicitly so
//! internal detail (SQL text, file paths, row contents) never reaches a
//! client. Unexpected failures are logged in full here and surfaced as a
//! generic internal error.

use tracing::error;

use campstay::CoreError;
use campstay_domain::DomainError;
use campstay_persistence::PersistenceError;

/// API-level errors.
///
/// These are distinct from domain/core errors and represent the API
/// contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// No usable principal was presented.
    AuthenticationRequired {
        /// The reason authentication failed.
        reason: String,
    },
    /// Invalid input was provided.
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },
    /// The party exceeds the camp's capacity.
    CapacityExceeded {
        /// The number of adults requested.
        requested: u32,
        /// The camp's capacity limit.
        limit: u32,
    },
    /// The stay length is outside the permitted bounds.
    InvalidDuration {
        /// The requested number of nights.
        nights: i64,
        /// The maximum permitted number of nights.
        max: i64,
    },
    /// The requested dates are not available for booking.
    DatesUnavailable {
        /// The camp whose dates were requested.
        camp_id: i64,
    },
    /// The requested dates overlap an existing host block.
    OverlappingBlock {
        /// The camp whose dates were requested.
        camp_id: i64,
    },
    /// The reservation lifecycle forbids the requested status change.
    TransitionNotAllowed {
        /// The current status.
        from: String,
        /// The requested status.
        to: String,
    },
    /// A requested resource was not found.
    ResourceNotFound {
        /// The type of resource that was not found.
        resource_type: String,
        /// A human-readable description of what was not found.
        message: String,
    },
    /// An internal error occurred. The message is already sanitized.
    Internal {
        /// A client-safe description of the internal error.
        message: String,
    },
}

impl ApiError {
    /// Returns the stable machine-readable error code for this error.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::AuthenticationRequired { .. } => "authentication_required",
            Self::InvalidInput { .. } => "invalid_input",
            Self::CapacityExceeded { .. } => "capacity_exceeded",
            Self::InvalidDuration { .. } => "invalid_duration",
            Self::DatesUnavailable { .. } => "dates_unavailable",
            Self::OverlappingBlock { .. } => "overlapping_block",
            Self::TransitionNotAllowed { .. } => "transition_not_allowed",
            Self::ResourceNotFound { .. } => "not_found",
            Self::Internal { .. } => "internal",
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AuthenticationRequired { reason } => {
                write!(f, "Authentication required: {reason}")
            }
            Self::InvalidInput { field, message } => {
                write!(f, "Invalid input for field '{field}': {message}")
            }
            Self::CapacityExceeded { requested, limit } => {
                write!(f, "Party of {requested} adults exceeds capacity of {limit}")
            }
            Self::InvalidDuration { nights, max } => {
                write!(f, "Stay of {nights} nights is outside 1..={max}")
            }
            Self::DatesUnavailable { camp_id } => {
                write!(f, "Requested dates are not available for camp {camp_id}")
            }
            Self::OverlappingBlock { camp_id } => {
                write!(
                    f,
                    "Requested dates overlap an existing block for camp {camp_id}"
                )
            }
            Self::TransitionNotAllowed { from, to } => {
                write!(f, "Cannot transition reservation from {from} to {to}")
            }
            Self::ResourceNotFound {
                resource_type,
                message,
            } => {
                write!(f, "{resource_type} not found: {message}")
            }
            Self::Internal { message } => {
                write!(f, "Internal error: {message}")
            }
        }
    }
}

impl std::error::Error for ApiError {}

/// Translates a domain error into an API error.
///
/// This translation is explicit and ensures domain errors are not leaked
/// directly.
#[must_use]
pub fn translate_domain_error(err: DomainError) -> ApiError {
    match err {
        DomainError::InvalidDateRange { start, end } => ApiError::InvalidInput {
            field: String::from("dateRange"),
            message: format!("start {start} must fall before end {end}"),
        },
        DomainError::InvalidDuration { nights, max } => ApiError::InvalidDuration { nights, max },
        DomainError::CapacityExceeded { requested, limit } => {
            ApiError::CapacityExceeded { requested, limit }
        }
        DomainError::InvalidGuestCount { .. } => ApiError::InvalidInput {
            field: String::from("guests"),
            message: String::from("at least one adult is required"),
        },
        DomainError::InvalidPriceConfiguration { reason } => {
            // Misconfigured camp records are an operator problem, not a
            // client one.
            error!(reason = %reason, "Camp has an invalid price configuration");
            ApiError::Internal {
                message: String::from("camp is not currently bookable"),
            }
        }
        DomainError::DatesUnavailable { camp_id } => ApiError::DatesUnavailable { camp_id },
        DomainError::OverlappingBlock { camp_id } => ApiError::OverlappingBlock { camp_id },
        DomainError::InvalidStatusTransition { from, to } => ApiError::TransitionNotAllowed {
            from: from.as_str().to_string(),
            to: to.as_str().to_string(),
        },
        DomainError::InvalidStatus(value) => ApiError::InvalidInput {
            field: String::from("status"),
            message: format!("unknown status '{value}'"),
        },
        DomainError::InvalidPaymentMethod(value) => ApiError::InvalidInput {
            field: String::from("paymentMethod"),
            message: format!("unknown payment method '{value}'"),
        },
        DomainError::InvalidWeekendDays(value) => ApiError::InvalidInput {
            field: String::from("weekendDays"),
            message: format!("unparseable weekend day list '{value}'"),
        },
        DomainError::InvalidGuestPricing(value) => ApiError::InvalidInput {
            field: String::from("guestPricing"),
            message: format!("unknown guest pricing mode '{value}'"),
        },
        DomainError::DateParseError { date_string, error } => ApiError::InvalidInput {
            field: String::from("dateRange"),
            message: format!("unparseable date '{date_string}': {error}"),
        },
    }
}

/// Translates a core error into an API error.
#[must_use]
pub fn translate_core_error(err: CoreError) -> ApiError {
    match err {
        CoreError::DomainViolation(domain_err) => translate_domain_error(domain_err),
    }
}

/// Translates a persistence error into an API error.
///
/// Storage-level failures are logged with full detail and mapped to a
/// sanitized internal error.
#[must_use]
pub fn translate_persistence_error(err: PersistenceError) -> ApiError {
    match err {
        PersistenceError::CampNotFound(camp_id) => ApiError::ResourceNotFound {
            resource_type: String::from("Camp"),
            message: format!("no camp with id {camp_id}"),
        },
        PersistenceError::ZoneNotFound { zone_id, camp_id } => ApiError::ResourceNotFound {
            resource_type: String::from("Zone"),
            message: format!("no zone {zone_id} under camp {camp_id}"),
        },
        PersistenceError::ReservationNotFound(reservation_id) => ApiError::ResourceNotFound {
            resource_type: String::from("Reservation"),
            message: format!("no reservation with id {reservation_id}"),
        },
        PersistenceError::BlockedRangeNotFound(blocked_range_id) => ApiError::ResourceNotFound {
            resource_type: String::from("BlockedRange"),
            message: format!("no blocked range with id {blocked_range_id}"),
        },
        PersistenceError::OverlapConflict { camp_id } => ApiError::DatesUnavailable { camp_id },
        PersistenceError::BlockOverlapConflict { camp_id } => {
            ApiError::OverlappingBlock { camp_id }
        }
        PersistenceError::TransitionRejected { from, to } => {
            ApiError::TransitionNotAllowed { from, to }
        }
        other => {
            error!(error = %other, "Persistence failure");
            ApiError::Internal {
                message: String::from("storage failure"),
            }
        }
    }
}
