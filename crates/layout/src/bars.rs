// SPDX-License-Identifier: MIT

//!
//! Bar segment geometry
//!

use crate::TimeWindow;
use lifetimes_core::Person;
use log::warn;
use serde::Serialize;

/// Which part of a person's bar a segment draws
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentKind {
    /// The span in which the person was certainly alive under both worst-case
    /// bounds
    Certain,

    /// The span in which the person may already have been born
    UncertainLeft,

    /// The span in which the person may still have been alive
    UncertainRight,
}

/// One rectangle of a person's timeline bar, as percentages along the window
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct BarSegment {
    pub kind: SegmentKind,
    pub left_percent: f64,
    pub width_percent: f64,
}

/// Compute the bar segments for one person within a window
///
/// The certain segment runs from the latest possible birth to the earliest
/// possible death - uncertainty narrows it inward, not outward.  An uncertain
/// segment is emitted on a side only when that side's interval is genuinely
/// uncertain, so an exactly-dated person gets a single certain segment.
///
/// A certain span whose width would come out negative (the dataset put a
/// death bound before a birth bound) is clamped to zero width rather than
/// propagated or panicked on.
pub fn compute_bar_segments(window: &TimeWindow, person: &Person) -> Vec<BarSegment> {
    let mut segments = Vec::new();

    let certain_start = person.birth().latest();
    let certain_end = person.death().earliest();

    if !person.birth().is_certain() {
        let left_percent = window.position_percent(person.birth().earliest());
        segments.push(BarSegment {
            kind: SegmentKind::UncertainLeft,
            left_percent,
            width_percent: window.position_percent(certain_start) - left_percent,
        });
    }

    let left_percent = window.position_percent(certain_start);
    let width_percent = window.position_percent(certain_end) - left_percent;
    if width_percent < 0.0 {
        warn!(
            "person {} has a death bound before a birth bound; clamping the certain span to zero width",
            person.id()
        );
    }
    segments.push(BarSegment {
        kind: SegmentKind::Certain,
        left_percent,
        width_percent: width_percent.max(0.0),
    });

    if !person.death().is_certain() {
        let left_percent = window.position_percent(certain_end);
        segments.push(BarSegment {
            kind: SegmentKind::UncertainRight,
            left_percent,
            width_percent: window.position_percent(person.death().latest()) - left_percent,
        });
    }

    segments
}
