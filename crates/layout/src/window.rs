// SPDX-License-Identifier: MIT

//!
//! The visible time window
//!

use lifetimes_core::{Date, Person, PersonId, YearSpan};
use serde::Serialize;
use std::collections::BTreeSet;
use thiserror::Error;

/// The set of person IDs currently selected.  Owned by the caller and passed
/// in explicitly on every call - the layout engine never holds on to it.
pub type Selection = BTreeSet<PersonId>;

/// Errors that can arise in relation to a [`TimeWindow`]
#[derive(Error, Debug, Clone, PartialEq)]
pub enum WindowError {
    /// No person contributed a date bound (empty dataset, or a selection
    /// matching nothing)
    #[error("No people to compute a window from")]
    NoPeople,

    /// Every contributing bound was the same instant.  The caller decides
    /// how to widen - see [`TimeWindow::year_of`]
    #[error("Window collapsed to a single instant at {0}")]
    Collapsed(Date),

    /// The bounds are the wrong way round
    #[error("Window bounds are inverted ({min} is after {max})")]
    Inverted { min: Date, max: Date },
}

/// The visible time range
///
/// `min` is strictly before `max`, so positions along the window are always
/// well defined.
#[derive(Serialize, Debug, Clone, Copy, PartialEq)]
pub struct TimeWindow {
    min: Date,
    max: Date,
}

impl TimeWindow {
    /// Create a window if `min` comes strictly before `max`
    pub fn from(min: Date, max: Date) -> Result<Self, WindowError> {
        match min.cmp(&max) {
            std::cmp::Ordering::Less => Ok(TimeWindow { min, max }),
            std::cmp::Ordering::Equal => Err(WindowError::Collapsed(min)),
            std::cmp::Ordering::Greater => Err(WindowError::Inverted { min, max }),
        }
    }

    /// A window spanning the whole of the instant's year: from the first day
    /// of that year to the first day of the next year that exists (year 0 is
    /// skipped).  This is the guard for a collapsed window
    pub fn year_of(date: Date) -> Self {
        TimeWindow {
            min: Date::first_of_year(date.year()),
            max: Date::first_of_year(date.year().successor()),
        }
    }

    /// Get the window's earliest instant
    pub fn min(&self) -> Date {
        self.min
    }

    /// Get the window's latest instant
    pub fn max(&self) -> Date {
        self.max
    }

    /// The window's total span
    pub fn span(&self) -> YearSpan {
        self.max - self.min
    }

    /// Position of a date along the window as a percentage, clamped to
    /// `[0, 100]` to absorb floating point edge error
    pub fn position_percent(&self, date: Date) -> f64 {
        let fraction = (date - self.min).ratio_of(self.span());
        (fraction * 100.0).clamp(0.0, 100.0)
    }
}

/// Compute the visible window from the current selection
///
/// An empty selection means every person contributes.  The window spans the
/// min/max of all four bounds (birth earliest/latest, death earliest/latest)
/// over the contributing people.  A collapsed window is surfaced, never
/// silently widened - the caller applies [`TimeWindow::year_of`] if it wants
/// a drawable window regardless.
pub fn compute_window(people: &[Person], selection: &Selection) -> Result<TimeWindow, WindowError> {
    let mut min: Option<Date> = None;
    let mut max: Option<Date> = None;

    for person in people {
        if !selection.is_empty() && !selection.contains(person.id()) {
            continue;
        }
        for bound in [
            person.birth().earliest(),
            person.birth().latest(),
            person.death().earliest(),
            person.death().latest(),
        ] {
            min = Some(min.map_or(bound, |current| current.min(bound)));
            max = Some(max.map_or(bound, |current| current.max(bound)));
        }
    }

    match (min, max) {
        (Some(min), Some(max)) => TimeWindow::from(min, max),
        _ => Err(WindowError::NoPeople),
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use lifetimes_core::{SortKey, UncertainInterval};

    fn person(id: &str, birth: (&str, &str), death: (&str, &str)) -> Person {
        Person::from(
            PersonId::from(id).unwrap(),
            SortKey::from(id).unwrap(),
            UncertainInterval::parse(birth.0, birth.1).unwrap(),
            UncertainInterval::parse(death.0, death.1).unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn from() {
        let min = Date::parse("1800").unwrap();
        let max = Date::parse("1850").unwrap();
        assert!(TimeWindow::from(min, max).is_ok());
        assert_eq!(TimeWindow::from(min, min), Err(WindowError::Collapsed(min)));
        assert_eq!(
            TimeWindow::from(max, min),
            Err(WindowError::Inverted { min: max, max: min })
        );
    }

    #[test]
    fn empty_selection_is_everyone() {
        let people = vec![
            person("a", ("-0450", "-0450"), ("-0380", "-0380")),
            person("b", ("0050-03-01", "0050-03-01"), ("0121", "0121")),
        ];
        let everyone: Selection = people.iter().map(|p| p.id().clone()).collect();

        let from_empty = compute_window(&people, &Selection::new()).unwrap();
        let from_all = compute_window(&people, &everyone).unwrap();
        assert_eq!(from_empty, from_all);
        assert_eq!(from_empty.min(), Date::parse("-0450").unwrap());
        assert_eq!(from_empty.max(), Date::parse("0121").unwrap());
    }

    #[test]
    fn selection_narrows_the_window() {
        let people = vec![
            person("a", ("-0450", "-0450"), ("-0380", "-0380")),
            person("b", ("1800", "1800"), ("1850", "1850")),
        ];
        let selection: Selection = [PersonId::from("b").unwrap()].into();

        let window = compute_window(&people, &selection).unwrap();
        assert_eq!(window.min(), Date::parse("1800").unwrap());
        assert_eq!(window.max(), Date::parse("1850").unwrap());
    }

    #[test]
    fn uncertain_bounds_contribute() {
        let people = vec![person("a", ("1700", "1705"), ("1750", "1760"))];
        let window = compute_window(&people, &Selection::new()).unwrap();
        assert_eq!(window.min(), Date::parse("1700").unwrap());
        assert_eq!(window.max(), Date::parse("1760").unwrap());
    }

    #[test]
    fn degenerate_cases_are_surfaced() {
        // Nothing to span
        assert_eq!(
            compute_window(&[], &Selection::new()),
            Err(WindowError::NoPeople)
        );

        // A selection matching nothing
        let people = vec![person("a", ("1800", "1800"), ("1850", "1850"))];
        let selection: Selection = [PersonId::from("nobody").unwrap()].into();
        assert_eq!(
            compute_window(&people, &selection),
            Err(WindowError::NoPeople)
        );

        // A single instant
        let people = vec![person("a", ("0300-05-12", "0300-05-12"), ("0300-05-12", "0300-05-12"))];
        assert_eq!(
            compute_window(&people, &Selection::new()),
            Err(WindowError::Collapsed(Date::parse("0300-05-12").unwrap()))
        );
    }

    #[test]
    fn year_of_guard() {
        let window = TimeWindow::year_of(Date::parse("0300-05-12").unwrap());
        assert_eq!(window.min(), Date::parse("0300").unwrap());
        assert_eq!(window.max(), Date::parse("0301").unwrap());

        // The year after 1 BCE is 1 CE
        let window = TimeWindow::year_of(Date::parse("-0001-06-01").unwrap());
        assert_eq!(window.min(), Date::parse("-0001").unwrap());
        assert_eq!(window.max(), Date::parse("0001").unwrap());
    }

    #[test]
    fn position_percent_is_clamped() {
        let window = TimeWindow::from(
            Date::parse("1800").unwrap(),
            Date::parse("1900").unwrap(),
        )
        .unwrap();
        assert_eq!(window.position_percent(Date::parse("1800").unwrap()), 0.0);
        assert_eq!(window.position_percent(Date::parse("1900").unwrap()), 100.0);
        assert!((window.position_percent(Date::parse("1850").unwrap()) - 50.0).abs() < 1e-9);

        // Dates outside the window clamp to the edges
        assert_eq!(window.position_percent(Date::parse("1700").unwrap()), 0.0);
        assert_eq!(window.position_percent(Date::parse("2000").unwrap()), 100.0);
    }
}
