//! # Start Subcommand
//!
//! Prints the first proleptic Gregorian date of a year-of-era.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use crate::table::load_table;

/// Arguments for the start subcommand.
#[derive(Args, Debug)]
pub struct StartArgs {
    /// Era table YAML file.
    pub table: PathBuf,

    /// Canonical era name.
    pub era: String,

    /// Year-of-era, starting at 1.
    pub year: i32,
}

/// Execute the start subcommand.
pub fn run_start(args: &StartArgs) -> Result<u8> {
    let table = load_table(&args.table)?;
    let start = table
        .eras
        .year_start(&args.era, args.year)
        .with_context(|| format!("no start date for {} {}", args.era, args.year))?;
    println!("{start}");
    Ok(0)
}
