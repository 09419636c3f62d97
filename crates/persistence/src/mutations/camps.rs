// Copyright (C) 2026 Campstay Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Camp and zone creation, used by onboarding and test fixtures.

use diesel::dsl::sql;
use diesel::prelude::*;
use diesel::sql_types::BigInt;
use tracing::debug;

use campstay_domain::{Camp, Zone};

use crate::diesel_schema::{camp_zones, camps};
use crate::error::PersistenceError;

/// Inserts a new camp record.
///
/// # Errors
///
/// Returns a database error if the insert fails.
pub fn create_camp(conn: &mut SqliteConnection, camp: &Camp) -> Result<Camp, PersistenceError> {
    let max_guests = i32::try_from(camp.max_guests)
        .map_err(|_| PersistenceError::RowValidation(format!(
            "camp max_guests {} exceeds storage range",
            camp.max_guests
        )))?;

    diesel::insert_into(camps::table)
        .values((
            camps::name.eq(&camp.name),
            camps::host_id.eq(&camp.host_id),
            camps::base_price_cents.eq(camp.base_price_cents),
            camps::max_guests.eq(max_guests),
            camps::weekend_days.eq(camp.weekend_days.to_storage_string()),
            camps::weekend_premium_cents.eq(camp.weekend_premium_cents),
            camps::guest_pricing.eq(camp.guest_pricing.as_str()),
            camps::last_minute_percent.eq(camp.discounts.last_minute_percent.map(i32::from)),
            camps::weekly_percent.eq(camp.discounts.weekly_percent.map(i32::from)),
            camps::monthly_percent.eq(camp.discounts.monthly_percent.map(i32::from)),
            camps::first_time_percent.eq(camp.discounts.first_time_percent.map(i32::from)),
        ))
        .execute(conn)?;

    let camp_id: i64 = diesel::select(sql::<BigInt>("last_insert_rowid()")).get_result(conn)?;

    debug!(camp_id, name = %camp.name, "Inserted camp");

    let mut created = camp.clone();
    created.camp_id = Some(camp_id);
    Ok(created)
}

/// Inserts a new zone under an existing camp.
///
/// # Errors
///
/// Returns a database error if the insert fails, including a foreign key
/// violation when the camp does not exist.
pub fn create_zone(conn: &mut SqliteConnection, zone: &Zone) -> Result<Zone, PersistenceError> {
    diesel::insert_into(camp_zones::table)
        .values((
            camp_zones::camp_id.eq(zone.camp_id),
            camp_zones::name.eq(&zone.name),
            camp_zones::price_modifier_percent.eq(zone.price_modifier_percent),
        ))
        .execute(conn)?;

    let zone_id: i64 = diesel::select(sql::<BigInt>("last_insert_rowid()")).get_result(conn)?;

    debug!(zone_id, camp_id = zone.camp_id, "Inserted zone");

    let mut created = zone.clone();
    created.zone_id = Some(zone_id);
    Ok(created)
}
