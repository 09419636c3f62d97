// Copyright (C) 2026 Campstay Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Payment collaborator seam.
//!
//! The processor only ever receives the server-computed total; a
//! client-submitted amount has no path to this module.

use rand::Rng;
use tracing::info;

use crate::error::ApiError;

/// An initiated payment, identified to the client by an opaque secret.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentIntent {
    /// Opaque handle the client uses to complete the payment.
    pub client_secret: String,
    /// The amount the payment was initiated for, in minor units.
    pub amount_cents: i64,
}

/// The seam to the external payment provider.
pub trait PaymentProcessor {
    /// Initiates a payment for a reservation.
    ///
    /// # Arguments
    ///
    /// * `reservation_id` - The reservation the payment settles
    /// * `amount_cents` - The server-computed total in minor units
    ///
    /// # Errors
    ///
    /// Returns an error if the provider rejects the initiation.
    fn initiate(&self, reservation_id: i64, amount_cents: i64) -> Result<PaymentIntent, ApiError>;
}

/// In-process processor used in development and tests.
///
/// Generates a random opaque secret and accepts every initiation.
#[derive(Debug, Clone, Copy, Default)]
pub struct MockPaymentProcessor;

impl PaymentProcessor for MockPaymentProcessor {
    fn initiate(&self, reservation_id: i64, amount_cents: i64) -> Result<PaymentIntent, ApiError> {
        let mut rng = rand::thread_rng();
        let token: u128 = rng.r#gen();
        let client_secret = format!("pi_{reservation_id}_secret_{token:032x}");

        info!(reservation_id, amount_cents, "Initiated mock payment");

        Ok(PaymentIntent {
            client_secret,
            amount_cents,
        })
    }
}
