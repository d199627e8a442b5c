// SPDX-License-Identifier: MIT

//!
//! Orderings over people
//!
//! Two different orderings are used in two different places: the timeline
//! bars go earliest-birth-first, while the selection roster goes
//! collation-key-first.  Both are exposed; they are not interchangeable.
//!

use lifetimes_core::Person;
use std::cmp::Ordering;

/// Order for the timeline bars: earliest possible birth first, collation key
/// as the tiebreak
///
/// Remaining ties compare `Equal`, so a stable sort keeps dataset order as
/// the final key.
pub fn display_order(a: &Person, b: &Person) -> Ordering {
    a.birth()
        .earliest()
        .cmp(&b.birth().earliest())
        .then_with(|| a.sort_key().caseless_cmp(b.sort_key()))
}

/// Order for the selection roster: collation key first, earliest possible
/// birth as the tiebreak
pub fn roster_order(a: &Person, b: &Person) -> Ordering {
    a.sort_key()
        .caseless_cmp(b.sort_key())
        .then_with(|| a.birth().earliest().cmp(&b.birth().earliest()))
}
