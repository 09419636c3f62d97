// Copyright (C) 2026 Campstay Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Write-side persistence operations.
//!
//! Every mutation that could violate the no-overlap invariant runs inside
//! a single `immediate_transaction`: SQLite takes the write lock up front,
//! the overlap query re-runs against committed state, and only then does
//! the insert happen. Two concurrent writers for the same dates therefore
//! serialize at the database and the loser is rejected with a typed
//! conflict instead of silently double-booking.

pub mod blocked;
pub mod camps;
pub mod reservations;

pub use reservations::CreateReservationOutcome;
