//! # calera-cli — Era Table Command-Line Interface
//!
//! Provides the `calera` binary for working with calendar era tables
//! stored as YAML. All era semantics live in `calera-core`; this crate
//! only loads tables, dispatches, and formats output.
//!
//! ## Subcommands
//!
//! - `calera validate <table>` — run every era system check and list eras.
//! - `calera resolve <table> <date>` — era and year-of-era of a date.
//! - `calera start <table> <era> <year>` — first date of an era year.
//!
//! ```bash
//! calera validate eras/bc-ad.yaml
//! calera resolve eras/bc-ad.yaml -- -0043-03-15
//! calera start eras/japanese.yaml Heisei 31
//! ```

pub mod resolve;
pub mod start;
pub mod table;
pub mod validate;
