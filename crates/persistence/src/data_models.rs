// Copyright (C) 2026 Campstay Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Diesel row structs and row→domain validation.
//!
//! Rows are validated into strongly typed domain values immediately after
//! retrieval. A malformed row (unknown status, inverted dates, negative
//! guest count) is rejected with `RowValidation` instead of propagating
//! loosely typed data into the coordinator.

use std::str::FromStr;

use diesel::prelude::*;

use campstay_domain::{
    BlockedRange, Camp, DateRange, DiscountConfig, GuestCount, GuestPricing, PaymentMethod,
    Reservation, ReservationStatus, WeekendDays, Zone,
};

use crate::diesel_schema::{blocked_ranges, camp_zones, camps, reservations};
use crate::error::PersistenceError;

/// Diesel Queryable struct for camp rows.
#[derive(Queryable, Selectable)]
#[diesel(table_name = camps)]
pub struct CampRow {
    pub camp_id: i64,
    pub name: String,
    pub host_id: String,
    pub base_price_cents: i64,
    pub max_guests: i32,
    pub weekend_days: String,
    pub weekend_premium_cents: i64,
    pub guest_pricing: String,
    pub last_minute_percent: Option<i32>,
    pub weekly_percent: Option<i32>,
    pub monthly_percent: Option<i32>,
    pub first_time_percent: Option<i32>,
}

impl CampRow {
    /// Validates this row into a domain `Camp`.
    ///
    /// # Errors
    ///
    /// Returns `RowValidation` if any stored field is outside its domain.
    pub fn into_domain(self) -> Result<Camp, PersistenceError> {
        let weekend_days = WeekendDays::parse(&self.weekend_days)
            .map_err(|e| PersistenceError::RowValidation(e.to_string()))?;
        let guest_pricing = GuestPricing::parse(&self.guest_pricing)
            .map_err(|e| PersistenceError::RowValidation(e.to_string()))?;
        let max_guests = u32::try_from(self.max_guests).map_err(|_| {
            PersistenceError::RowValidation(format!(
                "camp {} has negative max_guests {}",
                self.camp_id, self.max_guests
            ))
        })?;
        let discounts = DiscountConfig {
            last_minute_percent: validate_percent(self.camp_id, self.last_minute_percent)?,
            weekly_percent: validate_percent(self.camp_id, self.weekly_percent)?,
            monthly_percent: validate_percent(self.camp_id, self.monthly_percent)?,
            first_time_percent: validate_percent(self.camp_id, self.first_time_percent)?,
        };
        Ok(Camp::with_id(
            self.camp_id,
            self.name,
            self.host_id,
            self.base_price_cents,
            max_guests,
            weekend_days,
            self.weekend_premium_cents,
            guest_pricing,
            discounts,
        ))
    }
}

/// Diesel Queryable struct for zone rows.
#[derive(Queryable, Selectable)]
#[diesel(table_name = camp_zones)]
pub struct ZoneRow {
    pub zone_id: i64,
    pub camp_id: i64,
    pub name: String,
    pub price_modifier_percent: i32,
}

impl ZoneRow {
    /// Converts this row into a domain `Zone`.
    #[must_use]
    pub fn into_domain(self) -> Zone {
        Zone::with_id(
            self.zone_id,
            self.camp_id,
            self.name,
            self.price_modifier_percent,
        )
    }
}

/// Diesel Queryable struct for reservation rows.
#[derive(Queryable, Selectable)]
#[diesel(table_name = reservations)]
pub struct ReservationRow {
    pub reservation_id: i64,
    pub camp_id: i64,
    pub guest_id: String,
    pub start_date: String,
    pub end_date: String,
    pub adults: i32,
    pub children: i32,
    pub status: String,
    pub total_cents: i64,
    pub payment_method: String,
    pub idempotency_key: Option<String>,
    pub created_at: Option<String>,
}

impl ReservationRow {
    /// Validates this row into a domain `Reservation`.
    ///
    /// # Errors
    ///
    /// Returns `RowValidation` if the stored status, payment method, date
    /// range, or guest counts are outside their domains.
    pub fn into_domain(self) -> Result<Reservation, PersistenceError> {
        let range = DateRange::parse(&self.start_date, &self.end_date).map_err(|e| {
            PersistenceError::RowValidation(format!(
                "reservation {}: {e}",
                self.reservation_id
            ))
        })?;
        let status = ReservationStatus::from_str(&self.status).map_err(|e| {
            PersistenceError::RowValidation(format!(
                "reservation {}: {e}",
                self.reservation_id
            ))
        })?;
        let payment_method = PaymentMethod::parse(&self.payment_method).map_err(|e| {
            PersistenceError::RowValidation(format!(
                "reservation {}: {e}",
                self.reservation_id
            ))
        })?;
        let adults = u32::try_from(self.adults).map_err(|_| {
            PersistenceError::RowValidation(format!(
                "reservation {} has negative adults {}",
                self.reservation_id, self.adults
            ))
        })?;
        let children = u32::try_from(self.children).map_err(|_| {
            PersistenceError::RowValidation(format!(
                "reservation {} has negative children {}",
                self.reservation_id, self.children
            ))
        })?;
        let guests = GuestCount::new(adults, children).map_err(|e| {
            PersistenceError::RowValidation(format!(
                "reservation {}: {e}",
                self.reservation_id
            ))
        })?;
        Ok(Reservation::with_id(
            self.reservation_id,
            self.camp_id,
            self.guest_id,
            range,
            guests,
            status,
            self.total_cents,
            payment_method,
            self.idempotency_key,
        ))
    }
}

/// Diesel Queryable struct for blocked range rows.
#[derive(Queryable, Selectable)]
#[diesel(table_name = blocked_ranges)]
pub struct BlockedRangeRow {
    pub blocked_range_id: i64,
    pub camp_id: i64,
    pub start_date: String,
    pub end_date: String,
    pub reason: String,
    pub created_by: String,
    pub created_at: Option<String>,
}

impl BlockedRangeRow {
    /// Validates this row into a domain `BlockedRange`.
    ///
    /// # Errors
    ///
    /// Returns `RowValidation` if the stored date range is malformed.
    pub fn into_domain(self) -> Result<BlockedRange, PersistenceError> {
        let range = DateRange::parse(&self.start_date, &self.end_date).map_err(|e| {
            PersistenceError::RowValidation(format!(
                "blocked range {}: {e}",
                self.blocked_range_id
            ))
        })?;
        Ok(BlockedRange::with_id(
            self.blocked_range_id,
            self.camp_id,
            range,
            self.reason,
            self.created_by,
        ))
    }
}

fn validate_percent(camp_id: i64, value: Option<i32>) -> Result<Option<u8>, PersistenceError> {
    value
        .map(|v| {
            u8::try_from(v).map_err(|_| {
                PersistenceError::RowValidation(format!(
                    "camp {camp_id} has out-of-range discount percent {v}"
                ))
            })
        })
        .transpose()
}
