// Copyright (C) 2026 Campstay Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Principal authentication for the API boundary.
//!
//! Booking creation and host-side block management require an
//! authenticated principal. The principal id becomes the reservation's
//! `guest_id` (or the block's `created_by`), so it must never be empty.

use crate::error::ApiError;

/// An authenticated caller of the API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedPrincipal {
    /// The unique identifier for this principal.
    pub id: String,
}

impl AuthenticatedPrincipal {
    /// Creates a new authenticated principal.
    #[must_use]
    pub const fn new(id: String) -> Self {
        Self { id }
    }
}

/// Authenticates a caller from its presented principal id.
///
/// This validates presence and shape only; credential verification
/// belongs to the identity provider in front of this service.
///
/// # Errors
///
/// Returns `AuthenticationRequired` if no usable principal id was
/// presented.
pub fn authenticate(principal_id: &str) -> Result<AuthenticatedPrincipal, ApiError> {
    let trimmed = principal_id.trim();
    if trimmed.is_empty() {
        return Err(ApiError::AuthenticationRequired {
            reason: String::from("principal id cannot be empty"),
        });
    }
    Ok(AuthenticatedPrincipal::new(trimmed.to_string()))
}
