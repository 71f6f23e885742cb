//! Stay interval: the calendar date range a booking occupies.
//!
//! A stay covers the nights `[check_in, check_out)` — the guest sleeps on
//! every night from `check_in` up to but not including `check_out`. The
//! checkout day itself is free for the next arrival (same-day turnover).

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};
use crate::value_object::ValueObject;

/// Inclusive check-in / exclusive check-out calendar interval.
///
/// Construction validates `check_in < check_out`, so every `StayRange` in
/// the system covers at least one night.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StayRange {
    check_in: NaiveDate,
    check_out: NaiveDate,
}

impl StayRange {
    /// Build a stay, rejecting empty or inverted ranges.
    pub fn new(check_in: NaiveDate, check_out: NaiveDate) -> DomainResult<Self> {
        if check_out <= check_in {
            return Err(DomainError::validation(format!(
                "check_out ({check_out}) must be after check_in ({check_in})"
            )));
        }
        Ok(Self {
            check_in,
            check_out,
        })
    }

    pub fn check_in(&self) -> NaiveDate {
        self.check_in
    }

    pub fn check_out(&self) -> NaiveDate {
        self.check_out
    }

    /// Number of nights covered. Always >= 1 by construction.
    pub fn nights(&self) -> i64 {
        (self.check_out - self.check_in).num_days()
    }

    /// Half-open overlap test: two stays conflict iff they share a night.
    ///
    /// A stay ending on the day another begins does NOT conflict; the room
    /// turns over the same day.
    pub fn overlaps(&self, other: &StayRange) -> bool {
        self.check_in < other.check_out && self.check_out > other.check_in
    }

    /// Whether `day` falls inside the inclusive `[check_in, check_out]` span.
    ///
    /// Used by occupancy reporting, which counts a room as occupied on the
    /// checkout day as well.
    pub fn spans_inclusive(&self, day: NaiveDate) -> bool {
        self.check_in <= day && day <= self.check_out
    }
}

impl ValueObject for StayRange {}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn stay(a: NaiveDate, b: NaiveDate) -> StayRange {
        StayRange::new(a, b).unwrap()
    }

    #[test]
    fn rejects_empty_and_inverted_ranges() {
        let day = d(2026, 3, 10);
        assert!(matches!(
            StayRange::new(day, day),
            Err(DomainError::Validation(_))
        ));
        assert!(matches!(
            StayRange::new(d(2026, 3, 12), d(2026, 3, 10)),
            Err(DomainError::Validation(_))
        ));
    }

    #[test]
    fn counts_nights() {
        assert_eq!(stay(d(2026, 3, 10), d(2026, 3, 11)).nights(), 1);
        assert_eq!(stay(d(2026, 3, 10), d(2026, 3, 12)).nights(), 2);
        assert_eq!(stay(d(2026, 2, 27), d(2026, 3, 2)).nights(), 3);
    }

    #[test]
    fn detects_shared_nights() {
        let existing = stay(d(2026, 3, 10), d(2026, 3, 13));

        assert!(existing.overlaps(&stay(d(2026, 3, 11), d(2026, 3, 12))));
        assert!(existing.overlaps(&stay(d(2026, 3, 9), d(2026, 3, 11))));
        assert!(existing.overlaps(&stay(d(2026, 3, 12), d(2026, 3, 15))));
        assert!(existing.overlaps(&stay(d(2026, 3, 8), d(2026, 3, 20))));
    }

    #[test]
    fn same_day_turnover_does_not_conflict() {
        let existing = stay(d(2026, 3, 10), d(2026, 3, 13));

        // Next guest arrives the day the previous one leaves.
        assert!(!existing.overlaps(&stay(d(2026, 3, 13), d(2026, 3, 15))));
        // Previous guest leaves the day this one arrives.
        assert!(!existing.overlaps(&stay(d(2026, 3, 8), d(2026, 3, 10))));
        // Fully disjoint.
        assert!(!existing.overlaps(&stay(d(2026, 3, 20), d(2026, 3, 22))));
    }

    #[test]
    fn inclusive_span_includes_checkout_day() {
        let s = stay(d(2026, 3, 10), d(2026, 3, 13));
        assert!(s.spans_inclusive(d(2026, 3, 10)));
        assert!(s.spans_inclusive(d(2026, 3, 12)));
        assert!(s.spans_inclusive(d(2026, 3, 13)));
        assert!(!s.spans_inclusive(d(2026, 3, 9)));
        assert!(!s.spans_inclusive(d(2026, 3, 14)));
    }

    fn arb_stay() -> impl Strategy<Value = StayRange> {
        // Offsets from a fixed epoch keep the space small and readable.
        (0i64..365, 1i64..30).prop_map(|(start, len)| {
            let base = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
            let check_in = base + chrono::Duration::days(start);
            let check_out = check_in + chrono::Duration::days(len);
            StayRange::new(check_in, check_out).unwrap()
        })
    }

    proptest! {
        #[test]
        fn overlap_is_symmetric(a in arb_stay(), b in arb_stay()) {
            prop_assert_eq!(a.overlaps(&b), b.overlaps(&a));
        }

        #[test]
        fn overlap_matches_shared_night_count(a in arb_stay(), b in arb_stay()) {
            // Count of nights both stays occupy, computed independently.
            let start = a.check_in().max(b.check_in());
            let end = a.check_out().min(b.check_out());
            let shared = (end - start).num_days().max(0);
            prop_assert_eq!(a.overlaps(&b), shared > 0);
        }

        #[test]
        fn a_stay_overlaps_itself(a in arb_stay()) {
            prop_assert!(a.overlaps(&a));
        }
    }
}
