// Copyright (C) 2026 Campstay Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Half-open calendar date ranges.
//!
//! All booking math uses the half-open convention `[start, end)`: the start
//! date is the first night of the stay and the end date is checkout day,
//! which is never itself a night. Two ranges that merely touch at a boundary
//! (one ends on the day the other starts) therefore do not overlap, so a
//! checkout day and the next guest's check-in day may coincide.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use time::Date;
use time::macros::format_description;

/// A half-open range of calendar dates `[start, end)`.
///
/// Invariant: `start < end`, enforced at construction. A range always
/// covers at least one night.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    start: Date,
    end: Date,
}

impl DateRange {
    /// Creates a new `DateRange`.
    ///
    /// # Arguments
    ///
    /// * `start` - The first night of the range (inclusive)
    /// * `end` - The checkout day (exclusive)
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidDuration` if `start == end` (a stay of
    /// zero nights) and `DomainError::InvalidDateRange` if `start > end`.
    pub fn new(start: Date, end: Date) -> Result<Self, DomainError> {
        if start == end {
            return Err(DomainError::InvalidDuration {
                nights: 0,
                max: crate::pricing::MAX_NIGHTS,
            });
        }
        if start > end {
            return Err(DomainError::InvalidDateRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// Parses a range from two ISO 8601 date strings (`YYYY-MM-DD`).
    ///
    /// # Errors
    ///
    /// Returns `DomainError::DateParseError` if either string is not a
    /// valid calendar date, or the constructor errors for an empty or
    /// inverted range.
    pub fn parse(from: &str, to: &str) -> Result<Self, DomainError> {
        Self::new(parse_date(from)?, parse_date(to)?)
    }

    /// Returns the first night of the range.
    #[must_use]
    pub const fn start(&self) -> Date {
        self.start
    }

    /// Returns the checkout day (exclusive bound).
    #[must_use]
    pub const fn end(&self) -> Date {
        self.end
    }

    /// Returns the number of nights covered by the range.
    ///
    /// Always at least 1 for a constructed range.
    #[must_use]
    pub fn nights(&self) -> i64 {
        (self.end - self.start).whole_days()
    }

    /// Standard half-open interval overlap test.
    ///
    /// `[s1, e1)` and `[s2, e2)` conflict iff `s1 < e2 && s2 < e1`.
    /// Symmetric: `a.overlaps(b) == b.overlaps(a)`.
    #[must_use]
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start < other.end && other.start < self.end
    }

    /// Returns whether a date is one of the nights in this range.
    #[must_use]
    pub fn contains(&self, date: Date) -> bool {
        self.start <= date && date < self.end
    }

    /// Iterates the nights of the stay, from `start` up to but not
    /// including `end`.
    pub fn iter_nights(&self) -> NightIter {
        NightIter {
            current: Some(self.start),
            end: self.end,
        }
    }
}

impl std::fmt::Display for DateRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {})", self.start, self.end)
    }
}

/// Iterator over the nights of a `DateRange`.
#[derive(Debug, Clone)]
pub struct NightIter {
    current: Option<Date>,
    end: Date,
}

impl Iterator for NightIter {
    type Item = Date;

    fn next(&mut self) -> Option<Date> {
        let date = self.current?;
        if date >= self.end {
            self.current = None;
            return None;
        }
        self.current = date.next_day();
        Some(date)
    }
}

/// Parses a single ISO 8601 calendar date string.
///
/// # Errors
///
/// Returns `DomainError::DateParseError` if the string is not `YYYY-MM-DD`.
pub fn parse_date(s: &str) -> Result<Date, DomainError> {
    let format = format_description!("[year]-[month]-[day]");
    Date::parse(s, &format).map_err(|e| DomainError::DateParseError {
        date_string: s.to_string(),
        error: e.to_string(),
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use time::macros::date;

    #[test]
    fn test_new_rejects_zero_nights() {
        let result = DateRange::new(date!(2024 - 06 - 01), date!(2024 - 06 - 01));
        assert!(matches!(
            result,
            Err(DomainError::InvalidDuration { nights: 0, .. })
        ));
    }

    #[test]
    fn test_new_rejects_inverted_range() {
        let result = DateRange::new(date!(2024 - 06 - 05), date!(2024 - 06 - 01));
        assert!(matches!(result, Err(DomainError::InvalidDateRange { .. })));
    }

    #[test]
    fn test_nights() {
        let range = DateRange::new(date!(2024 - 06 - 01), date!(2024 - 06 - 05)).unwrap();
        assert_eq!(range.nights(), 4);
    }

    #[test]
    fn test_overlap_is_symmetric() {
        let a = DateRange::new(date!(2024 - 06 - 01), date!(2024 - 06 - 05)).unwrap();
        let b = DateRange::new(date!(2024 - 06 - 03), date!(2024 - 06 - 06)).unwrap();
        let c = DateRange::new(date!(2024 - 07 - 01), date!(2024 - 07 - 02)).unwrap();
        assert_eq!(a.overlaps(&b), b.overlaps(&a));
        assert_eq!(a.overlaps(&c), c.overlaps(&a));
    }

    #[test]
    fn test_touching_boundaries_do_not_overlap() {
        // Checkout day and check-in day may coincide.
        let existing = DateRange::new(date!(2024 - 06 - 01), date!(2024 - 06 - 05)).unwrap();
        let candidate = DateRange::new(date!(2024 - 06 - 05), date!(2024 - 06 - 08)).unwrap();
        assert!(!existing.overlaps(&candidate));
        assert!(!candidate.overlaps(&existing));
    }

    #[test]
    fn test_partial_overlap_detected() {
        let existing = DateRange::new(date!(2024 - 06 - 01), date!(2024 - 06 - 05)).unwrap();
        let candidate = DateRange::new(date!(2024 - 06 - 03), date!(2024 - 06 - 06)).unwrap();
        assert!(existing.overlaps(&candidate));
    }

    #[test]
    fn test_contained_range_overlaps() {
        let outer = DateRange::new(date!(2024 - 06 - 01), date!(2024 - 06 - 30)).unwrap();
        let inner = DateRange::new(date!(2024 - 06 - 10), date!(2024 - 06 - 12)).unwrap();
        assert!(outer.overlaps(&inner));
        assert!(inner.overlaps(&outer));
    }

    #[test]
    fn test_iter_nights_excludes_checkout_day() {
        let range = DateRange::new(date!(2024 - 06 - 01), date!(2024 - 06 - 04)).unwrap();
        let nights: Vec<Date> = range.iter_nights().collect();
        assert_eq!(
            nights,
            vec![
                date!(2024 - 06 - 01),
                date!(2024 - 06 - 02),
                date!(2024 - 06 - 03)
            ]
        );
    }

    #[test]
    fn test_contains() {
        let range = DateRange::new(date!(2024 - 06 - 01), date!(2024 - 06 - 04)).unwrap();
        assert!(range.contains(date!(2024 - 06 - 01)));
        assert!(range.contains(date!(2024 - 06 - 03)));
        assert!(!range.contains(date!(2024 - 06 - 04)));
    }

    #[test]
    fn test_parse_valid_dates() {
        let range = DateRange::parse("2024-06-01", "2024-06-05").unwrap();
        assert_eq!(range.start(), date!(2024 - 06 - 01));
        assert_eq!(range.end(), date!(2024 - 06 - 05));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        let result = DateRange::parse("not-a-date", "2024-06-05");
        assert!(matches!(result, Err(DomainError::DateParseError { .. })));
    }
}
