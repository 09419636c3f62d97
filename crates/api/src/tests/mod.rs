// Copyright (C) 2026 Campstay Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API test suite.

#![allow(clippy::expect_used, clippy::unwrap_used)]

mod helpers;

mod booking_tests;
