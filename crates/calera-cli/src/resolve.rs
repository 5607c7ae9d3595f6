//! # Resolve Subcommand
//!
//! Finds the era a date falls into and its year-of-era.
//!
//! ```bash
//! calera resolve eras/japanese.yaml 2019-05-01
//! Reiwa 1
//! calera resolve eras/japanese.yaml 2019-05-01 --json
//! {"era":"Reiwa","ordinal":3,"year":1,"date":"2019-05-01"}
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::Args;
use serde::Serialize;

use calera_core::EraSystem;

use crate::table::load_table;

/// Arguments for the resolve subcommand.
#[derive(Args, Debug)]
pub struct ResolveArgs {
    /// Era table YAML file.
    pub table: PathBuf,

    /// Proleptic Gregorian date, `YYYY-MM-DD`.
    pub date: NaiveDate,

    /// Emit JSON instead of `<era> <year>`.
    #[arg(long)]
    pub json: bool,
}

/// A resolved era-qualified year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Resolution {
    /// Canonical era name.
    pub era: String,
    /// Era ordinal.
    pub ordinal: i32,
    /// Year-of-era, `>= 1`.
    pub year: i32,
    /// The queried date.
    pub date: NaiveDate,
}

/// Resolve `date` against an era system.
pub fn resolve(system: &EraSystem, date: NaiveDate) -> Result<Resolution> {
    let (era, year) = system
        .year_of_era(&date)
        .with_context(|| format!("cannot resolve {date}"))?;
    Ok(Resolution {
        era: era.name().to_string(),
        ordinal: era.ordinal_value(),
        year,
        date,
    })
}

/// Execute the resolve subcommand.
pub fn run_resolve(args: &ResolveArgs) -> Result<u8> {
    let table = load_table(&args.table)?;
    let resolution = resolve(&table.eras, args.date)?;
    tracing::info!(era = %resolution.era, year = resolution.year, "resolved date");

    if args.json {
        println!("{}", serde_json::to_string(&resolution)?);
    } else {
        println!("{} {}", resolution.era, resolution.year);
    }
    Ok(0)
}
