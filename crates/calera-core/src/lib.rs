//! # calera-core — Calendar Era Primitives
//!
//! Defines the era abstraction shared by every calendar that numbers its
//! years relative to a named epoch. Calendars without eras (ISO-8601), with
//! a single proleptic era, and with many chronologically ordered eras are
//! all expressed through the same two types:
//!
//! - [`Era`] — an immutable value: canonical name, epoch-scaled ordinal,
//!   reference date, and a direction flag saying whether the reference date
//!   starts or ends the era.
//! - [`EraSystem`] — an ordered, validated set of eras that resolves which
//!   era a date belongs to and its year-of-era.
//!
//! ## Key Design Principles
//!
//! 1. **Dates are an external seam.** Era arithmetic consumes dates only
//!    through [`CalendarDate`]; `chrono::NaiveDate` is the provided
//!    proleptic Gregorian implementation.
//!
//! 2. **Validate at construction, never at query time.** Ordinal scaling
//!    (the era containing 1972-01-01 has ordinal 1), strict ordering, and
//!    the single-ending-era rule are checked once in [`EraSystem::new`].
//!
//! 3. **Years are never clamped.** Year-of-era is always `>= 1`; asking for
//!    a date outside an era's span is a [`RangeError`].
//!
//! ## Crate Policy
//!
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - All public types derive `Debug` and `Clone`; values implement
//!   `Serialize`/`Deserialize` with validation on the way in.

pub mod date;
pub mod era;
pub mod error;
pub mod system;

// Re-export primary types for ergonomic imports.
pub use date::{CalendarDate, UTC_EPOCH};
pub use era::{Era, EraName};
pub use error::{ConfigurationError, EraError, RangeError};
pub use system::EraSystem;
