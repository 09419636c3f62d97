// Copyright (C) 2026 Campstay Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

diesel::table! {
    camps (camp_id) {
        camp_id -> BigInt,
        name -> Text,
        host_id -> Text,
        base_price_cents -> BigInt,
        max_guests -> Integer,
        weekend_days -> Text,
        weekend_premium_cents -> BigInt,
        guest_pricing -> Text,
        last_minute_percent -> Nullable<Integer>,
        weekly_percent -> Nullable<Integer>,
        monthly_percent -> Nullable<Integer>,
        first_time_percent -> Nullable<Integer>,
    }
}

diesel::table! {
    camp_zones (zone_id) {
        zone_id -> BigInt,
        camp_id -> BigInt,
        name -> Text,
        price_modifier_percent -> Integer,
    }
}

diesel::table! {
    reservations (reservation_id) {
        reservation_id -> BigInt,
        camp_id -> BigInt,
        guest_id -> Text,
        start_date -> Text,
        end_date -> Text,
        adults -> Integer,
        children -> Integer,
        status -> Text,
        total_cents -> BigInt,
        payment_method -> Text,
        idempotency_key -> Nullable<Text>,
        client_secret -> Nullable<Text>,
        created_at -> Nullable<Text>,
    }
}

diesel::table! {
    blocked_ranges (blocked_range_id) {
        blocked_range_id -> BigInt,
        camp_id -> BigInt,
        start_date -> Text,
        end_date -> Text,
        reason -> Text,
        created_by -> Text,
        created_at -> Nullable<Text>,
    }
}

diesel::allow_tables_to_appear_in_same_query!(camps, camp_zones, reservations, blocked_ranges);
