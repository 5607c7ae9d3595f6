//! # Validate Subcommand
//!
//! Loads an era table, runs every era system check, and prints a summary
//! of the eras in chronological order.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use calera_core::EraSystem;

use crate::table::load_table;

/// Arguments for the validate subcommand.
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Era table YAML file.
    pub table: PathBuf,

    /// Only report pass/fail, without the era listing.
    #[arg(long, short)]
    pub quiet: bool,
}

/// Execute the validate subcommand. Returns exit code 1 for an invalid table.
pub fn run_validate(args: &ValidateArgs) -> Result<u8> {
    let table = match load_table(&args.table) {
        Ok(table) => table,
        Err(e) => {
            println!("FAIL  {}: {e:#}", args.table.display());
            return Ok(1);
        }
    };

    println!(
        "OK    {} ({}, {} eras)",
        args.table.display(),
        table.label(),
        table.eras.len()
    );
    if !args.quiet {
        print!("{}", render_summary(&table.eras));
    }
    Ok(0)
}

/// One line per era: ordinal, name, direction, reference date.
pub fn render_summary(system: &EraSystem) -> String {
    if system.is_empty() {
        return "      (no era concept)\n".to_string();
    }
    let mut out = String::new();
    for era in system {
        let direction = if era.is_starting() { "starts" } else { "ends" };
        let marker = if era.ordinal_value() == 1 { "  [epoch]" } else { "" };
        out.push_str(&format!(
            "  {:>5}  {:<16} {:<6} {}{}\n",
            era.ordinal_value(),
            era.name().as_str(),
            direction,
            era.reference_date(),
            marker
        ));
    }
    out
}
