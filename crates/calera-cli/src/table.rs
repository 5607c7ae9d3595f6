//! # Era Table Files
//!
//! An era table is a YAML document describing one calendar's era system:
//!
//! ```yaml
//! calendar: julian-gregorian
//! eras:
//!   - name: BC
//!     ordinal: 0
//!     reference_date: 0000-12-31
//!     is_starting: false
//!   - name: AD
//!     ordinal: 1
//!     reference_date: 0001-01-01
//!     is_starting: true
//! ```
//!
//! Eras are listed in chronological order. Loading a table runs every
//! era system construction check; an invalid table never loads.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use calera_core::EraSystem;

/// A calendar's era system as stored on disk.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EraTable {
    /// Free-form calendar label, for display only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub calendar: Option<String>,
    /// The validated eras. May be empty for calendars without eras.
    #[serde(default)]
    pub eras: EraSystem,
}

impl EraTable {
    /// Label used in output: the calendar name, or `"unnamed"`.
    pub fn label(&self) -> &str {
        self.calendar.as_deref().unwrap_or("unnamed")
    }
}

/// Parse an era table from YAML text.
pub fn parse_table(yaml: &str) -> Result<EraTable> {
    serde_yaml::from_str(yaml).context("invalid era table")
}

/// Read and parse an era table file.
pub fn load_table(path: &Path) -> Result<EraTable> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read era table: {}", path.display()))?;
    let table =
        parse_table(&content).with_context(|| format!("in era table {}", path.display()))?;
    tracing::debug!(
        path = %path.display(),
        calendar = table.label(),
        eras = table.eras.len(),
        "loaded era table"
    );
    Ok(table)
}
