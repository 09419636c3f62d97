// Copyright (C) 2026 Campstay Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Blocked range queries.

use diesel::prelude::*;
use tracing::debug;

use campstay_domain::{BlockedRange, DateRange};

use crate::data_models::BlockedRangeRow;
use crate::diesel_schema::blocked_ranges;
use crate::error::PersistenceError;

/// Retrieves all host blocks for a camp.
///
/// # Errors
///
/// Returns an error if the query fails or any row is malformed.
pub fn blocked_ranges_for_camp(
    conn: &mut SqliteConnection,
    camp_id: i64,
) -> Result<Vec<BlockedRange>, PersistenceError> {
    let rows: Vec<BlockedRangeRow> = blocked_ranges::table
        .filter(blocked_ranges::camp_id.eq(camp_id))
        .order(blocked_ranges::start_date.asc())
        .select(BlockedRangeRow::as_select())
        .load(conn)?;

    debug!(camp_id, count = rows.len(), "Loaded blocked ranges");

    rows.into_iter().map(BlockedRangeRow::into_domain).collect()
}

/// Retrieves the host blocks overlapping a candidate range.
///
/// The half-open overlap filter runs in SQL; this is the commit-time
/// re-check used inside insert transactions.
///
/// # Errors
///
/// Returns an error if the query fails or any row is malformed.
pub fn overlapping_blocks(
    conn: &mut SqliteConnection,
    camp_id: i64,
    range: &DateRange,
) -> Result<Vec<BlockedRange>, PersistenceError> {
    let rows: Vec<BlockedRangeRow> = blocked_ranges::table
        .filter(blocked_ranges::camp_id.eq(camp_id))
        .filter(blocked_ranges::start_date.lt(range.end().to_string()))
        .filter(blocked_ranges::end_date.gt(range.start().to_string()))
        .select(BlockedRangeRow::as_select())
        .load(conn)?;

    rows.into_iter().map(BlockedRangeRow::into_domain).collect()
}
