// Copyright (C) 2026 Campstay Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Persistence test suite.
//!
//! Tests run against isolated in-memory `SQLite` databases, except the
//! concurrency tests, which need two independent connections and use a
//! temporary file database.

#![allow(clippy::expect_used, clippy::unwrap_used)]

mod helpers;
