//! # Calendar Date Seam
//!
//! Eras never compute calendar dates themselves. They consume an opaque,
//! totally ordered date value through the [`CalendarDate`] trait, which
//! supplies the three things era arithmetic needs:
//!
//! - the fixed UTC epoch reference date (1972-01-01) used for ordinal scaling,
//! - whole-year distance between two dates, truncated toward zero,
//! - shifting a date by whole years.
//!
//! "Year" here always means a proleptic Gregorian year, independent of the
//! year length of the calendar embedding the era.
//!
//! [`chrono::NaiveDate`] is the provided implementation.
//!
//! ## Leap days
//!
//! A February 29 shifted into a common year lands on February 28. Year
//! distance is defined through the same shift, so `years_between` and
//! `add_years` always agree: `a.add_years(years_between(a, b)) <= b`
//! whenever `a <= b`.

use std::fmt;

use chrono::{Datelike, Months, NaiveDate};

/// The UTC epoch reference date, 1972-01-01 (proleptic Gregorian).
pub const UTC_EPOCH: NaiveDate = match NaiveDate::from_ymd_opt(1972, 1, 1) {
    Some(date) => date,
    None => panic!("1972-01-01 is a valid date"),
};

/// A comparable calendar date that eras can be anchored to.
pub trait CalendarDate: Ord + Clone + fmt::Debug + fmt::Display {
    /// The UTC epoch reference date, 1972-01-01.
    fn utc_epoch() -> Self;

    /// Whole calendar years elapsed from `from` to `to`, truncated toward
    /// zero. Negative when `to` precedes `from`.
    fn years_between(from: &Self, to: &Self) -> i64;

    /// Shift by a signed number of whole years.
    ///
    /// Returns `None` when the result is not representable.
    fn add_years(&self, years: i64) -> Option<Self>;
}

impl CalendarDate for NaiveDate {
    fn utc_epoch() -> Self {
        UTC_EPOCH
    }

    fn years_between(from: &Self, to: &Self) -> i64 {
        if to >= from {
            forward_years(from, to)
        } else {
            -forward_years(to, from)
        }
    }

    fn add_years(&self, years: i64) -> Option<Self> {
        let months = u32::try_from(years.checked_abs()?.checked_mul(12)?).ok()?;
        if years >= 0 {
            self.checked_add_months(Months::new(months))
        } else {
            self.checked_sub_months(Months::new(months))
        }
    }
}

/// Whole years from `earlier` to `later`, where `earlier <= later`.
fn forward_years(earlier: &NaiveDate, later: &NaiveDate) -> i64 {
    let years = i64::from(later.year()) - i64::from(earlier.year());
    match earlier.add_years(years) {
        Some(anniversary) if anniversary <= *later => years,
        _ => years - 1,
    }
}

/// Largest `m` such that `from.add_years(m) <= to`.
///
/// Equals `years_between` when `to >= from`. For `to < from` it rounds
/// toward negative infinity instead of toward zero. A shift below the
/// representable range precedes every `to`, so it satisfies the bound.
/// `None` only when the year count itself overflows.
pub(crate) fn floor_years<D: CalendarDate>(from: &D, to: &D) -> Option<i64> {
    let mut years = D::years_between(from, to);
    while matches!(from.add_years(years), Some(shifted) if shifted > *to) {
        years = years.checked_sub(1)?;
    }
    loop {
        let next = years.checked_add(1)?;
        match from.add_years(next) {
            Some(shifted) if shifted <= *to => years = next,
            _ => break,
        }
    }
    Some(years)
}
