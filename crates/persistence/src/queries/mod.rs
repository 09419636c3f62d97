// Copyright (C) 2026 Campstay Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Read-side persistence operations.
//!
//! All queries use Diesel DSL and validate rows into domain types at the
//! boundary. Overlap filters use the half-open convention: ISO 8601 date
//! text compares lexicographically exactly like the dates themselves.

pub mod blocked;
pub mod camps;
pub mod reservations;
