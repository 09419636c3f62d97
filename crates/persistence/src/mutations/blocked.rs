// Copyright (C) 2026 Campstay Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Blocked range mutations.

use diesel::dsl::sql;
use diesel::prelude::*;
use diesel::sql_types::BigInt;
use tracing::debug;

use campstay_domain::BlockedRange;

use crate::diesel_schema::blocked_ranges;
use crate::error::PersistenceError;
use crate::queries::blocked::overlapping_blocks;

/// Inserts a new host block, re-checking block overlap at commit time.
///
/// Blocks may overlap guest reservations (the host decides what to do
/// about an already-booked stay), but never one another.
///
/// # Errors
///
/// Returns `BlockOverlapConflict` if an existing block already covers any
/// of the dates, or a database error if the transaction fails.
pub fn create_blocked_range(
    conn: &mut SqliteConnection,
    block: &BlockedRange,
) -> Result<BlockedRange, PersistenceError> {
    let camp_id = block.camp_id;

    conn.immediate_transaction(|conn| {
        let existing = overlapping_blocks(conn, camp_id, &block.range)?;
        if !existing.is_empty() {
            return Err(PersistenceError::BlockOverlapConflict { camp_id });
        }

        diesel::insert_into(blocked_ranges::table)
            .values((
                blocked_ranges::camp_id.eq(camp_id),
                blocked_ranges::start_date.eq(block.range.start().to_string()),
                blocked_ranges::end_date.eq(block.range.end().to_string()),
                blocked_ranges::reason.eq(&block.reason),
                blocked_ranges::created_by.eq(&block.created_by),
            ))
            .execute(conn)?;

        let blocked_range_id: i64 =
            diesel::select(sql::<BigInt>("last_insert_rowid()")).get_result(conn)?;

        debug!(camp_id, blocked_range_id, range = %block.range, "Inserted blocked range");

        let mut created = block.clone();
        created.blocked_range_id = Some(blocked_range_id);
        Ok(created)
    })
}

/// Deletes a host block by id.
///
/// # Errors
///
/// Returns `BlockedRangeNotFound` if no row was deleted, so a repeated
/// delete reports what happened instead of silently succeeding.
pub fn delete_blocked_range(
    conn: &mut SqliteConnection,
    blocked_range_id: i64,
) -> Result<(), PersistenceError> {
    let deleted = diesel::delete(
        blocked_ranges::table.filter(blocked_ranges::blocked_range_id.eq(blocked_range_id)),
    )
    .execute(conn)?;

    if deleted == 0 {
        return Err(PersistenceError::BlockedRangeNotFound(blocked_range_id));
    }

    debug!(blocked_range_id, "Deleted blocked range");
    Ok(())
}
