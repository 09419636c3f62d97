// Copyright (C) 2026 Campstay Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Camp and zone lookup queries.

use diesel::prelude::*;
use tracing::debug;

use campstay_domain::{Camp, Zone};

use crate::data_models::{CampRow, ZoneRow};
use crate::diesel_schema::{camp_zones, camps};
use crate::error::PersistenceError;

/// Retrieves the trusted camp record.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `camp_id` - The camp to load
///
/// # Errors
///
/// Returns `CampNotFound` if no such camp exists, or `RowValidation` if
/// the stored row is malformed.
pub fn find_camp(conn: &mut SqliteConnection, camp_id: i64) -> Result<Camp, PersistenceError> {
    debug!(camp_id, "Loading camp record");

    let row: CampRow = camps::table
        .filter(camps::camp_id.eq(camp_id))
        .select(CampRow::as_select())
        .first(conn)
        .optional()?
        .ok_or(PersistenceError::CampNotFound(camp_id))?;

    row.into_domain()
}

/// Retrieves a zone and verifies it belongs to the expected camp.
///
/// # Errors
///
/// Returns `ZoneNotFound` if the zone does not exist or belongs to a
/// different camp.
pub fn find_zone(
    conn: &mut SqliteConnection,
    zone_id: i64,
    camp_id: i64,
) -> Result<Zone, PersistenceError> {
    let row: Option<ZoneRow> = camp_zones::table
        .filter(camp_zones::zone_id.eq(zone_id))
        .filter(camp_zones::camp_id.eq(camp_id))
        .select(ZoneRow::as_select())
        .first(conn)
        .optional()?;

    row.map(ZoneRow::into_domain)
        .ok_or(PersistenceError::ZoneNotFound { zone_id, camp_id })
}
