//! # Era Value
//!
//! An [`Era`] is an immutable, named epoch of a calendar system. It is
//! anchored to a reference date that marks either its first instant
//! (a *starting* era) or its last instant (an *ending* era), and carries an
//! ordinal rank scaled so that the era containing 1972-01-01 has ordinal 1.
//!
//! ## Year numbering
//!
//! Years within an era are always `>= 1`. Year boundaries fall on
//! anniversaries of the reference date `R`, and each year is closed at its
//! chronologically earlier end:
//!
//! ```text
//! starting era:   [R, R+1y) = 1   [R+1y, R+2y) = 2   ...
//! ending era:     ... [R-2y, R-1y) = 2   [R-1y, R] = 1
//! ```
//!
//! In an ending era year 1 is the *last* year of the era and numbers grow
//! moving backward in time. Dates on the wrong side of `R` are range
//! errors, never clamped.
//!
//! Ending-era year 1 holds both `R - 1y` and `R`, so it spans one year plus
//! one day. With BC ending on 0000-12-31, -0001-12-31 is still BC 1 while
//! -0001-12-30 is BC 2. Every later year is an exact anniversary interval.
//!
//! Ordinal and ordering invariants span several eras and are therefore
//! checked by [`EraSystem`](crate::system::EraSystem), not here.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::date::{floor_years, CalendarDate};
use crate::error::{ConfigurationError, EraError, RangeError};

/// Canonical, locale-independent era identifier.
///
/// Non-empty, with no leading or trailing whitespace.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct EraName(String);

impl EraName {
    /// Validate and wrap a canonical era name.
    pub fn new(name: impl Into<String>) -> Result<Self, ConfigurationError> {
        let name = name.into();
        if name.is_empty() {
            return Err(ConfigurationError::InvalidName {
                name,
                reason: "name must not be empty",
            });
        }
        if name.trim() != name {
            return Err(ConfigurationError::InvalidName {
                name,
                reason: "name must not have surrounding whitespace",
            });
        }
        Ok(Self(name))
    }

    /// Access the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for EraName {
    type Error = ConfigurationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<EraName> for String {
    fn from(name: EraName) -> Self {
        name.0
    }
}

impl AsRef<str> for EraName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EraName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}

/// A named epoch redefining year numbering within a calendar system.
///
/// Generic over the date representation; defaults to the proleptic
/// Gregorian [`NaiveDate`]. Fields are read back exactly as constructed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Era<D = NaiveDate> {
    name: EraName,
    ordinal: i32,
    reference_date: D,
    is_starting: bool,
}

impl<D> Era<D> {
    /// Construct an era, validating its name.
    ///
    /// # Errors
    ///
    /// [`ConfigurationError::InvalidName`] if `name` is empty or padded.
    pub fn new(
        name: impl Into<String>,
        ordinal: i32,
        reference_date: D,
        is_starting: bool,
    ) -> Result<Self, EraError> {
        let name = EraName::new(name)?;
        Ok(Self::from_parts(name, ordinal, reference_date, is_starting))
    }

    /// An era whose reference date is its first instant.
    pub fn starting(name: impl Into<String>, ordinal: i32, start: D) -> Result<Self, EraError> {
        Self::new(name, ordinal, start, true)
    }

    /// An era whose reference date is its last instant.
    pub fn ending(name: impl Into<String>, ordinal: i32, end: D) -> Result<Self, EraError> {
        Self::new(name, ordinal, end, false)
    }

    /// Assemble an era from an already validated name.
    pub fn from_parts(name: EraName, ordinal: i32, reference_date: D, is_starting: bool) -> Self {
        Self {
            name,
            ordinal,
            reference_date,
            is_starting,
        }
    }

    /// The canonical name.
    pub fn name(&self) -> &EraName {
        &self.name
    }

    /// The epoch-scaled ordinal rank.
    pub fn ordinal_value(&self) -> i32 {
        self.ordinal
    }

    /// The boundary date: first instant if starting, last instant if ending.
    pub fn reference_date(&self) -> &D {
        &self.reference_date
    }

    /// Whether the reference date is the start of this era.
    pub fn is_starting(&self) -> bool {
        self.is_starting
    }
}

impl<D: CalendarDate> Era<D> {
    /// Whether `date` lies on this era's side of its reference date.
    ///
    /// The opposite bound (where a following era takes over) is only known
    /// to the enclosing era system.
    pub fn contains(&self, date: &D) -> bool {
        if self.is_starting {
            *date >= self.reference_date
        } else {
            *date <= self.reference_date
        }
    }

    /// Year-within-era of `date`, always `>= 1`.
    ///
    /// # Errors
    ///
    /// [`RangeError::BeforeStart`] / [`RangeError::AfterEnd`] if `date` is on
    /// the wrong side of the reference date, [`RangeError::Overflow`] if the
    /// year does not fit.
    pub fn year_of_era(&self, date: &D) -> Result<i32, EraError> {
        if !self.contains(date) {
            return Err(self.outside(date).into());
        }
        let elapsed = floor_years(&self.reference_date, date).ok_or_else(|| self.overflow())?;
        // Starting: elapsed >= 0. Ending: elapsed <= 0, and R itself is year 1.
        let year = if self.is_starting {
            elapsed.checked_add(1)
        } else {
            elapsed.checked_neg().map(|y| y.max(1))
        };
        year.and_then(|y| i32::try_from(y).ok())
            .ok_or_else(|| self.overflow().into())
    }

    /// Chronologically first date of year-of-era `year`.
    ///
    /// Does not know where a following era begins; use
    /// [`EraSystem::year_start`](crate::system::EraSystem::year_start) for a
    /// bounded answer.
    pub fn year_start(&self, year: i32) -> Result<D, EraError> {
        if year < 1 {
            return Err(RangeError::YearOutOfRange {
                era: self.name.to_string(),
                year: i64::from(year),
            }
            .into());
        }
        let shift = if self.is_starting {
            i64::from(year) - 1
        } else {
            -i64::from(year)
        };
        self.reference_date
            .add_years(shift)
            .ok_or_else(|| self.overflow().into())
    }

    fn outside(&self, date: &D) -> RangeError {
        let (era, date, reference) = (
            self.name.to_string(),
            date.to_string(),
            self.reference_date.to_string(),
        );
        if self.is_starting {
            RangeError::BeforeStart {
                era,
                date,
                reference,
            }
        } else {
            RangeError::AfterEnd {
                era,
                date,
                reference,
            }
        }
    }

    fn overflow(&self) -> RangeError {
        RangeError::Overflow {
            era: self.name.to_string(),
        }
    }
}

impl<D> fmt::Display for Era<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name.as_str())
    }
}
