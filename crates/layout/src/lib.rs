// SPDX-License-Identifier: MIT

//!
//! *Part of the wider Lifetimes project*
//!
//! The Lifetimes layout engine.  Pure geometry: given the loaded people and
//! the caller's current selection it produces the visible time window, the
//! axis tick marks, and each selected person's bar segments, all as
//! percentages along a proportional time axis.
//!
//! The engine holds no state between calls and registers no callbacks.  The
//! caller owns the selection and recomputes the whole layout on every
//! selection change or resize; every call is a full, independent
//! recomputation.
//!

mod bars;
mod order;
mod ticks;
mod window;

pub use bars::*;
pub use order::*;
pub use ticks::*;
pub use window::*;

use lifetimes_core::{Person, PersonId};
use log::debug;
use serde::Serialize;

/// One person's bar, ready to draw
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct PersonBars {
    pub id: PersonId,
    pub segments: Vec<BarSegment>,
}

/// Everything an external renderer needs for one frame
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Layout {
    pub window: TimeWindow,
    pub ticks: Vec<TickMark>,
    pub bars: Vec<PersonBars>,
}

/// Recompute the whole layout from scratch
///
/// The axis spans the selection (or everyone, when the selection is empty),
/// but bars are produced for the selected people only, in [`display_order`].
/// A window that collapses to a single instant is widened to that instant's
/// year before any geometry is computed.
pub fn recompute(people: &[Person], selection: &Selection) -> Result<Layout, WindowError> {
    let window = match compute_window(people, selection) {
        Ok(window) => window,
        Err(WindowError::Collapsed(at)) => TimeWindow::year_of(at),
        Err(error) => return Err(error),
    };

    let ticks = generate_ticks(&window);

    let mut selected: Vec<&Person> = people
        .iter()
        .filter(|person| selection.contains(person.id()))
        .collect();
    selected.sort_by(|a, b| display_order(a, b));
    debug!(
        "layout: {} ticks, {} selected people",
        ticks.len(),
        selected.len()
    );

    let bars = selected
        .into_iter()
        .map(|person| PersonBars {
            id: person.id().clone(),
            segments: compute_bar_segments(&window, person),
        })
        .collect();

    Ok(Layout {
        window,
        ticks,
        bars,
    })
}
