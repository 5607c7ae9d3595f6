//! # Era System
//!
//! An [`EraSystem`] is the ordered, validated set of eras of one calendar.
//! Construction is the only place invariants are checked; once built the
//! system is immutable and can be shared across threads freely.
//!
//! ## Invariants
//!
//! - Era names are unique.
//! - At most one era is an ending era, and only as the earliest era.
//! - Reference dates strictly increase in sequence order.
//! - Ordinals strictly increase in sequence order (gaps are allowed).
//! - The era whose span contains 1972-01-01 has ordinal 1.
//!
//! An empty system is valid: it models a calendar without an era concept,
//! such as ISO-8601, where every membership query is a range error.
//!
//! ## Membership
//!
//! ```text
//!   ending era          gap           starting eras
//! ──────────────]  (range error)  [──────────)[──────────) ...
//!               R0                R1          R2
//! ```
//!
//! A date belongs to the ending era if it is `<= R0`, otherwise to the
//! starting era with the latest reference date `<= date`.

use std::collections::HashSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::date::CalendarDate;
use crate::era::Era;
use crate::error::{ConfigurationError, EraError, RangeError};

/// An ordered, validated collection of eras.
///
/// Serializes as the plain list of eras. Deserialization re-runs every
/// construction check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    try_from = "Vec<Era<D>>",
    into = "Vec<Era<D>>",
    bound(
        serialize = "D: Clone + Serialize",
        deserialize = "D: CalendarDate + Deserialize<'de>"
    )
)]
pub struct EraSystem<D = NaiveDate> {
    eras: Vec<Era<D>>,
}

impl<D> EraSystem<D> {
    /// A system with no eras, for calendars without an era concept.
    pub fn without_eras() -> Self {
        Self { eras: Vec::new() }
    }

    /// All eras in chronological order.
    pub fn eras(&self) -> &[Era<D>] {
        &self.eras
    }

    /// Iterate eras in chronological order.
    pub fn iter(&self) -> std::slice::Iter<'_, Era<D>> {
        self.eras.iter()
    }

    /// Number of eras.
    pub fn len(&self) -> usize {
        self.eras.len()
    }

    /// Whether the calendar has no era concept.
    pub fn is_empty(&self) -> bool {
        self.eras.is_empty()
    }

    /// Look up an era by canonical name.
    pub fn get(&self, name: &str) -> Option<&Era<D>> {
        self.eras.iter().find(|era| era.name().as_str() == name)
    }

    /// Look up an era by ordinal.
    pub fn by_ordinal(&self, ordinal: i32) -> Option<&Era<D>> {
        self.eras
            .binary_search_by_key(&ordinal, Era::ordinal_value)
            .ok()
            .map(|index| &self.eras[index])
    }

    /// The era with ordinal 1, i.e. the one containing the UTC epoch.
    pub fn epoch_era(&self) -> Option<&Era<D>> {
        self.by_ordinal(1)
    }

    /// The ending era, if the system has one.
    pub fn ending_era(&self) -> Option<&Era<D>> {
        self.eras.first().filter(|era| !era.is_starting())
    }

    /// The era following `name` chronologically.
    pub fn next_era(&self, name: &str) -> Option<&Era<D>> {
        let index = self.eras.iter().position(|era| era.name().as_str() == name)?;
        self.eras.get(index + 1)
    }

    /// Exclusive upper bound of a starting era's span: the next era's
    /// reference date, or `None` if the era is open-ended or ending.
    pub fn span_end(&self, name: &str) -> Option<&D> {
        let era = self.get(name)?;
        if !era.is_starting() {
            return None;
        }
        self.next_era(name).map(Era::reference_date)
    }
}

impl<D: CalendarDate> EraSystem<D> {
    /// Validate and assemble an era system from eras in chronological order.
    ///
    /// # Errors
    ///
    /// A [`ConfigurationError`] naming the first offending era.
    pub fn new(eras: Vec<Era<D>>) -> Result<Self, EraError> {
        check_unique_names(&eras)?;
        check_ending_era(&eras)?;
        check_chronology(&eras)?;

        let system = Self { eras };
        system.check_epoch_scaling()?;

        tracing::debug!(
            eras = system.len(),
            ending = system.ending_era().is_some(),
            epoch_era = system.epoch_era().map(|era| era.name().as_str()),
            "assembled era system"
        );
        Ok(system)
    }

    /// The era containing `date`.
    ///
    /// # Errors
    ///
    /// [`RangeError::NoEra`] if the system is empty, or the date precedes
    /// every starting era without falling into the ending era.
    pub fn era_of(&self, date: &D) -> Result<&Era<D>, EraError> {
        if let Some(ending) = self.ending_era() {
            if ending.contains(date) {
                return Ok(ending);
            }
        }
        let claimed = self.eras.partition_point(|era| era.reference_date() <= date);
        match claimed.checked_sub(1).map(|index| &self.eras[index]) {
            Some(era) if era.is_starting() => Ok(era),
            _ => Err(RangeError::NoEra {
                date: date.to_string(),
            }
            .into()),
        }
    }

    /// The era containing `date` and the year-of-era within it.
    pub fn year_of_era(&self, date: &D) -> Result<(&Era<D>, i32), EraError> {
        let era = self.era_of(date)?;
        let year = era.year_of_era(date)?;
        Ok((era, year))
    }

    /// Chronologically first date of `year` in the era called `name`.
    ///
    /// # Errors
    ///
    /// [`RangeError::UnknownEra`] for an unknown name,
    /// [`RangeError::YearOutOfRange`] if the year starts at or after the
    /// next era's reference date or is below 1.
    pub fn year_start(&self, name: &str, year: i32) -> Result<D, EraError> {
        let era = self.get(name).ok_or_else(|| RangeError::UnknownEra {
            name: name.to_string(),
        })?;
        let start = era.year_start(year)?;
        if let Some(end) = self.span_end(name) {
            if start >= *end {
                return Err(RangeError::YearOutOfRange {
                    era: name.to_string(),
                    year: i64::from(year),
                }
                .into());
            }
        }
        Ok(start)
    }

    fn check_epoch_scaling(&self) -> Result<(), ConfigurationError> {
        if self.is_empty() {
            return Ok(());
        }
        let era = self
            .era_of(&D::utc_epoch())
            .map_err(|_| ConfigurationError::EpochNotCovered)?;
        if era.ordinal_value() != 1 {
            return Err(ConfigurationError::EpochOrdinal {
                name: era.name().to_string(),
                ordinal: era.ordinal_value(),
            });
        }
        Ok(())
    }
}

impl<D: CalendarDate> TryFrom<Vec<Era<D>>> for EraSystem<D> {
    type Error = EraError;

    fn try_from(eras: Vec<Era<D>>) -> Result<Self, Self::Error> {
        Self::new(eras)
    }
}

impl<D> From<EraSystem<D>> for Vec<Era<D>> {
    fn from(system: EraSystem<D>) -> Self {
        system.eras
    }
}

impl<D> Default for EraSystem<D> {
    fn default() -> Self {
        Self::without_eras()
    }
}

impl<'a, D> IntoIterator for &'a EraSystem<D> {
    type Item = &'a Era<D>;
    type IntoIter = std::slice::Iter<'a, Era<D>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// ─── Construction checks ─────────────────────────────────────────────

fn check_unique_names<D>(eras: &[Era<D>]) -> Result<(), ConfigurationError> {
    let mut seen = HashSet::new();
    for era in eras {
        if !seen.insert(era.name().as_str()) {
            return Err(ConfigurationError::DuplicateName {
                name: era.name().to_string(),
            });
        }
    }
    Ok(())
}

fn check_ending_era<D>(eras: &[Era<D>]) -> Result<(), ConfigurationError> {
    let mut first_ending: Option<&Era<D>> = None;
    for (position, era) in eras.iter().enumerate() {
        if era.is_starting() {
            continue;
        }
        if let Some(first) = first_ending {
            return Err(ConfigurationError::MultipleEndingEras {
                first: first.name().to_string(),
                name: era.name().to_string(),
            });
        }
        if position != 0 {
            return Err(ConfigurationError::EndingEraNotFirst {
                name: era.name().to_string(),
                ordinal: era.ordinal_value(),
                position,
            });
        }
        first_ending = Some(era);
    }
    Ok(())
}

fn check_chronology<D: CalendarDate>(eras: &[Era<D>]) -> Result<(), ConfigurationError> {
    for pair in eras.windows(2) {
        let (previous, era) = (&pair[0], &pair[1]);
        if era.reference_date() <= previous.reference_date() {
            return Err(ConfigurationError::NonChronological {
                name: era.name().to_string(),
                date: era.reference_date().to_string(),
                previous: previous.name().to_string(),
                previous_date: previous.reference_date().to_string(),
            });
        }
        if era.ordinal_value() <= previous.ordinal_value() {
            return Err(ConfigurationError::NonMonotonicOrdinal {
                name: era.name().to_string(),
                ordinal: era.ordinal_value(),
                previous: previous.name().to_string(),
                previous_ordinal: previous.ordinal_value(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn era_a() -> Era {
        Era::starting("A", 1, date(1972, 1, 1)).unwrap()
    }

    fn era_b() -> Era {
        Era::ending("B", 0, date(1950, 1, 1)).unwrap()
    }

    fn config_error(result: Result<EraSystem, EraError>) -> ConfigurationError {
        match result {
            Err(EraError::Configuration(err)) => err,
            other => panic!("expected configuration error, got {other:?}"),
        }
    }

    // ---- construction ----

    #[test]
    fn ending_then_starting_builds() {
        let system = EraSystem::new(vec![era_b(), era_a()]).unwrap();
        assert_eq!(system.len(), 2);
        assert_eq!(system.ending_era().unwrap().name().as_str(), "B");
        assert_eq!(system.epoch_era().unwrap().name().as_str(), "A");
    }

    #[test]
    fn ending_era_not_first_rejected() {
        let err = config_error(EraSystem::new(vec![era_a(), era_b()]));
        assert_eq!(
            err,
            ConfigurationError::EndingEraNotFirst {
                name: "B".into(),
                ordinal: 0,
                position: 1,
            }
        );
    }

    #[test]
    fn two_ending_eras_rejected() {
        let other = Era::ending("C", -1, date(1940, 1, 1)).unwrap();
        let err = config_error(EraSystem::new(vec![other, era_b(), era_a()]));
        assert!(matches!(err, ConfigurationError::MultipleEndingEras { .. }));
    }

    #[test]
    fn duplicate_names_rejected() {
        let dup = Era::starting("A", 2, date(1990, 1, 1)).unwrap();
        let err = config_error(EraSystem::new(vec![era_a(), dup]));
        assert_eq!(err, ConfigurationError::DuplicateName { name: "A".into() });
    }

    #[test]
    fn out_of_order_dates_rejected() {
        let earlier = Era::starting("Z", 2, date(1960, 1, 1)).unwrap();
        let err = config_error(EraSystem::new(vec![era_a(), earlier]));
        assert!(matches!(err, ConfigurationError::NonChronological { .. }));
    }

    #[test]
    fn ending_era_overlapping_first_start_rejected() {
        let late_end = Era::ending("B", 0, date(1972, 1, 1)).unwrap();
        let err = config_error(EraSystem::new(vec![late_end, era_a()]));
        assert!(matches!(err, ConfigurationError::NonChronological { .. }));
    }

    #[test]
    fn non_monotonic_ordinals_rejected() {
        let later = Era::starting("C", 1, date(1990, 1, 1)).unwrap();
        let err = config_error(EraSystem::new(vec![era_a(), later]));
        assert!(matches!(err, ConfigurationError::NonMonotonicOrdinal { .. }));
    }

    #[test]
    fn gaps_in_ordinals_allowed() {
        let later = Era::starting("C", 5, date(1990, 1, 1)).unwrap();
        let earliest = Era::starting("P", -10, date(1900, 1, 1)).unwrap();
        assert!(EraSystem::new(vec![earliest, era_a(), later]).is_ok());
    }

    #[test]
    fn epoch_era_must_have_ordinal_one() {
        let epoch = Era::starting("E", 2, date(1950, 1, 1)).unwrap();
        let err = config_error(EraSystem::new(vec![epoch]));
        assert_eq!(
            err,
            ConfigurationError::EpochOrdinal {
                name: "E".into(),
                ordinal: 2,
            }
        );
    }

    #[test]
    fn epoch_must_be_covered() {
        let future = Era::starting("F", 1, date(2000, 1, 1)).unwrap();
        let err = config_error(EraSystem::new(vec![future]));
        assert_eq!(err, ConfigurationError::EpochNotCovered);
    }

    #[test]
    fn ending_era_may_contain_epoch() {
        let end = Era::ending("Old", 1, date(1980, 1, 1)).unwrap();
        let new = Era::starting("New", 2, date(1980, 1, 2)).unwrap();
        let system = EraSystem::new(vec![end, new]).unwrap();
        assert_eq!(system.epoch_era().unwrap().name().as_str(), "Old");
    }

    #[test]
    fn empty_system_is_valid() {
        let system: EraSystem = EraSystem::new(Vec::new()).unwrap();
        assert!(system.is_empty());
        assert_eq!(system, EraSystem::without_eras());
        let err = system.era_of(&date(2000, 1, 1)).unwrap_err();
        assert!(matches!(err, EraError::Range(RangeError::NoEra { .. })));
    }

    // ---- membership ----

    #[test]
    fn era_of_resolves_both_sides() {
        let system = EraSystem::new(vec![era_b(), era_a()]).unwrap();
        assert_eq!(system.era_of(&date(1950, 1, 1)).unwrap().name().as_str(), "B");
        assert_eq!(system.era_of(&date(1800, 3, 3)).unwrap().name().as_str(), "B");
        assert_eq!(system.era_of(&date(1972, 1, 1)).unwrap().name().as_str(), "A");
        assert_eq!(system.era_of(&date(2100, 1, 1)).unwrap().name().as_str(), "A");
    }

    #[test]
    fn date_in_gap_has_no_era() {
        let system = EraSystem::new(vec![era_b(), era_a()]).unwrap();
        let err = system.era_of(&date(1960, 1, 1)).unwrap_err();
        assert!(matches!(err, EraError::Range(RangeError::NoEra { .. })));
    }

    #[test]
    fn latest_starting_era_wins() {
        let showa = Era::starting("Showa", 1, date(1926, 12, 25)).unwrap();
        let heisei = Era::starting("Heisei", 2, date(1989, 1, 8)).unwrap();
        let reiwa = Era::starting("Reiwa", 3, date(2019, 5, 1)).unwrap();
        let system = EraSystem::new(vec![showa, heisei, reiwa]).unwrap();

        let (era, year) = system.year_of_era(&date(1989, 1, 7)).unwrap();
        assert_eq!((era.name().as_str(), year), ("Showa", 63));
        let (era, year) = system.year_of_era(&date(1989, 1, 8)).unwrap();
        assert_eq!((era.name().as_str(), year), ("Heisei", 1));
        let (era, year) = system.year_of_era(&date(2019, 4, 30)).unwrap();
        assert_eq!((era.name().as_str(), year), ("Heisei", 31));
        let (era, year) = system.year_of_era(&date(2019, 5, 1)).unwrap();
        assert_eq!((era.name().as_str(), year), ("Reiwa", 1));
    }

    // ---- lookups ----

    #[test]
    fn lookups_by_name_and_ordinal() {
        let system = EraSystem::new(vec![era_b(), era_a()]).unwrap();
        assert_eq!(system.get("A").unwrap().ordinal_value(), 1);
        assert!(system.get("Q").is_none());
        assert_eq!(system.by_ordinal(0).unwrap().name().as_str(), "B");
        assert!(system.by_ordinal(7).is_none());
        assert_eq!(system.next_era("B").unwrap().name().as_str(), "A");
        assert!(system.next_era("A").is_none());
    }

    #[test]
    fn span_end_only_for_bounded_starting_eras() {
        let later = Era::starting("C", 2, date(1990, 1, 1)).unwrap();
        let system = EraSystem::new(vec![era_b(), era_a(), later]).unwrap();
        assert_eq!(system.span_end("A"), Some(&date(1990, 1, 1)));
        assert_eq!(system.span_end("C"), None);
        assert_eq!(system.span_end("B"), None);
    }

    // ---- year_start ----

    #[test]
    fn year_start_bounded_by_next_era() {
        let later = Era::starting("C", 2, date(1990, 1, 1)).unwrap();
        let system = EraSystem::new(vec![era_a(), later]).unwrap();
        assert_eq!(system.year_start("A", 18).unwrap(), date(1989, 1, 1));
        let err = system.year_start("A", 19).unwrap_err();
        assert!(matches!(err, EraError::Range(RangeError::YearOutOfRange { .. })));
        let err = system.year_start("X", 1).unwrap_err();
        assert!(matches!(err, EraError::Range(RangeError::UnknownEra { .. })));
    }

    // ---- serde ----

    #[test]
    fn serde_roundtrip_as_list() {
        let system = EraSystem::new(vec![era_b(), era_a()]).unwrap();
        let json = serde_json::to_string(&system).unwrap();
        assert!(json.starts_with('['));
        let parsed: EraSystem = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, system);
    }

    #[test]
    fn serde_revalidates() {
        let system = EraSystem::new(vec![era_b(), era_a()]).unwrap();
        let mut eras: Vec<Era> = system.into();
        eras.reverse();
        let json = serde_json::to_string(&eras).unwrap();
        let err = serde_json::from_str::<EraSystem>(&json).unwrap_err();
        assert!(err.to_string().contains("ending era"));
    }

    #[test]
    fn system_is_send_and_sync() {
        fn assert_shared<T: Send + Sync>() {}
        assert_shared::<EraSystem>();
    }
}
