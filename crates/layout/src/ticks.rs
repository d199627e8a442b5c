// SPDX-License-Identifier: MIT

//!
//! Axis tick marks
//!

use crate::TimeWindow;
use lifetimes_core::{Date, Year};
use serde::Serialize;

/// The label given to the era boundary marker
pub const ERA_BOUNDARY_LABEL: &str = "BCE/CE";

/// What a tick mark stands for
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickKind {
    /// A real calendar year
    Year(Year),

    /// The crossing between the BCE and CE eras.  Not a real instant - there
    /// is no year 0 to stand on, so the marker is interpolated between its
    /// neighbouring real ticks
    EraBoundary,
}

/// A labelled position on the time axis
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct TickMark {
    pub kind: TickKind,
    pub label: String,
    pub position_percent: f64,
}

impl TickMark {
    /// The tick's year, if it stands for one
    pub fn year(&self) -> Option<Year> {
        match self.kind {
            TickKind::Year(year) => Some(year),
            TickKind::EraBoundary => None,
        }
    }
}

/// Generate the tick marks for a window
///
/// The step is `max(1, ceil(year span / 10))`, so there are always about ten
/// ticks, dropping to one-year granularity for windows under ten years.  The
/// first candidate is aligned to a multiple of the step for clean labels.
/// Candidates before the window are dropped, and year 0 is never emitted as
/// a real tick.  A window that crosses the era boundary is guaranteed a CE
/// tick and, when both eras are represented, an interpolated boundary marker.
pub fn generate_ticks(window: &TimeWindow) -> Vec<TickMark> {
    let min_year = window.min().year().value();
    let max_year = window.max().year().value();

    let year_span = i64::from(max_year) - i64::from(min_year);
    let step = (year_span as u64).div_ceil(10).max(1) as i32;

    let start_year = min_year.div_euclid(step) * step;

    let mut years = Vec::new();
    let mut year = start_year;
    while year <= max_year {
        if year >= min_year && year != 0 {
            years.push(year);
        }
        year += step;
    }

    // A window crossing the era boundary must show the CE side.  The
    // smallest positive multiple of the step is used, unless even that
    // overshoots the window
    let crosses_era_boundary = min_year < 0 && max_year > 0;
    if crosses_era_boundary && !years.iter().any(|&year| year > 0) {
        years.push(if step <= max_year { step } else { max_year });
    }

    let mut ticks: Vec<TickMark> = years
        .into_iter()
        .filter_map(|year| Year::try_from(i64::from(year)).ok())
        .map(|year| TickMark {
            kind: TickKind::Year(year),
            label: year.to_string(),
            position_percent: window.position_percent(Date::first_of_year(year)),
        })
        .collect();

    if crosses_era_boundary {
        insert_era_boundary_marker(&mut ticks);
    }

    ticks
}

/// Place the era boundary marker halfway, in position space, between the
/// closest negative and closest positive real ticks.  Skipped unless both
/// exist
fn insert_era_boundary_marker(ticks: &mut Vec<TickMark>) {
    let first_ce = ticks
        .iter()
        .position(|tick| tick.year().is_some_and(|year| year.value() > 0));
    let Some(first_ce) = first_ce else {
        return;
    };
    if first_ce == 0 {
        return;
    }

    let position_percent =
        (ticks[first_ce - 1].position_percent + ticks[first_ce].position_percent) / 2.0;
    ticks.insert(
        first_ce,
        TickMark {
            kind: TickKind::EraBoundary,
            label: ERA_BOUNDARY_LABEL.to_string(),
            position_percent,
        },
    );
}
