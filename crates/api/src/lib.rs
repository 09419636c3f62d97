// Copyright (C) 2026 Campstay Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API boundary layer for the Campstay booking core.
//!
//! This crate owns the request/response contract, principal
//! authentication, the error taxonomy presented to clients, and the
//! orchestration of domain, core, and persistence. The HTTP server crate
//! is a thin adapter over the handler functions here.

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
#![allow(clippy::multiple_crate_versions)]

mod auth;
mod error;
mod handlers;
mod payment;
mod request_response;

#[cfg(test)]
mod tests;

pub use auth::{AuthenticatedPrincipal, authenticate};
pub use error::{
    ApiError, translate_core_error, translate_domain_error, translate_persistence_error,
};
pub use handlers::{
    add_blocked_range, cancel_booking, check_availability, create_booking, quote_price,
    remove_blocked_range, transition_booking,
};
pub use payment::{MockPaymentProcessor, PaymentIntent, PaymentProcessor};
pub use request_response::{
    AppliedDiscountInfo, AvailabilityResponse, BlockedRangeResponse, BookingPayload,
    BookingStatusResponse, CreateBlockedRangeRequest, CreateBookingRequest, CreateBookingResponse,
    DateRangePayload, GuestsPayload, QuoteRequest, QuoteResponse, TransitionBookingRequest,
};
