//! # Error Types — Configuration vs. Range
//!
//! Two failure classes exist in this crate:
//!
//! - [`ConfigurationError`] — an era or era system was assembled with
//!   inconsistent data. Raised only at construction time and fatal to the
//!   build; nothing is ever silently corrected.
//! - [`RangeError`] — a query asked about a date or year that lies outside
//!   an era's span. Returned per call so the caller decides what to do.
//!
//! Both carry the offending era name and ordinal where one exists.

use thiserror::Error;

/// Top-level error type for era construction and queries.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EraError {
    /// Era or era system construction rejected.
    #[error("era configuration error: {0}")]
    Configuration(#[from] ConfigurationError),

    /// Query outside the valid span of an era.
    #[error("era range error: {0}")]
    Range(#[from] RangeError),
}

impl EraError {
    /// Whether this is a construction-time configuration error.
    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::Configuration(_))
    }

    /// Whether this is a query-time range error.
    pub fn is_range(&self) -> bool {
        matches!(self, Self::Range(_))
    }
}

/// An era system (or a single era) violates a structural invariant.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigurationError {
    /// Era names must be non-empty and carry no surrounding whitespace.
    #[error("invalid era name {name:?}: {reason}")]
    InvalidName {
        /// The rejected name.
        name: String,
        /// Why it was rejected.
        reason: &'static str,
    },

    /// Two eras in one system share a canonical name.
    #[error("duplicate era name {name:?} in era system")]
    DuplicateName {
        /// The repeated name.
        name: String,
    },

    /// More than one era has its reference date as its end.
    #[error("era {name:?} is a second ending era; at most one is permitted (first was {first:?})")]
    MultipleEndingEras {
        /// The first ending era encountered.
        first: String,
        /// The second ending era.
        name: String,
    },

    /// An ending era appears after another era.
    #[error("ending era {name:?} (ordinal {ordinal}) must be the earliest era, found at position {position}")]
    EndingEraNotFirst {
        /// Offending era name.
        name: String,
        /// Offending era ordinal.
        ordinal: i32,
        /// Zero-based position in the supplied sequence.
        position: usize,
    },

    /// Reference dates do not advance strictly with sequence order.
    #[error("era {name:?} has reference date {date} which does not follow {previous:?} ({previous_date})")]
    NonChronological {
        /// Offending era name.
        name: String,
        /// Offending reference date, rendered.
        date: String,
        /// The preceding era.
        previous: String,
        /// The preceding era's reference date, rendered.
        previous_date: String,
    },

    /// Ordinals do not increase strictly with chronological order.
    #[error("era {name:?} has ordinal {ordinal} which is not greater than {previous:?} (ordinal {previous_ordinal})")]
    NonMonotonicOrdinal {
        /// Offending era name.
        name: String,
        /// Offending ordinal.
        ordinal: i32,
        /// The preceding era.
        previous: String,
        /// The preceding era's ordinal.
        previous_ordinal: i32,
    },

    /// The era containing 1972-01-01 is not scaled to ordinal 1.
    #[error("era {name:?} contains the UTC epoch 1972-01-01 but has ordinal {ordinal}, expected 1")]
    EpochOrdinal {
        /// Offending era name.
        name: String,
        /// Its ordinal.
        ordinal: i32,
    },

    /// No era of a non-empty system contains 1972-01-01.
    #[error("no era contains the UTC epoch 1972-01-01; ordinals cannot be scaled")]
    EpochNotCovered,
}

/// A date or year-of-era lies outside the span of the era it was asked about.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RangeError {
    /// Date precedes the start of a starting era.
    #[error("date {date} is before the start of era {era:?} ({reference})")]
    BeforeStart {
        /// Era name.
        era: String,
        /// Queried date, rendered.
        date: String,
        /// Era reference date, rendered.
        reference: String,
    },

    /// Date follows the end of an era.
    #[error("date {date} is after the end of era {era:?} ({reference})")]
    AfterEnd {
        /// Era name.
        era: String,
        /// Queried date, rendered.
        date: String,
        /// Era end boundary, rendered.
        reference: String,
    },

    /// No era of the system claims the date.
    #[error("no era contains date {date}")]
    NoEra {
        /// Queried date, rendered.
        date: String,
    },

    /// The named era is not part of the system.
    #[error("unknown era {name:?}")]
    UnknownEra {
        /// The requested name.
        name: String,
    },

    /// Year-of-era is not within the era's span.
    #[error("year {year} is outside the span of era {era:?}")]
    YearOutOfRange {
        /// Era name.
        era: String,
        /// Requested year-of-era.
        year: i64,
    },

    /// The computation overflowed the representable date or year range.
    #[error("year arithmetic overflow in era {era:?}")]
    Overflow {
        /// Era name.
        era: String,
    },
}
