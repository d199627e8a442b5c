// SPDX-License-Identifier: MIT

//!
//! *Part of the wider Lifetimes project*
//!
//! This crate defines the basic datatypes used across the Lifetimes project
//! (layout engine, external renderers, dataset tooling).
//!
//! Dates here live on a single proleptic Gregorian calendar with no year 0
//! (year -1 is immediately followed by year 1), and may carry year, month and
//! day precision.  A person's birth and death are *uncertain intervals*: an
//! earliest and a latest bound, equal when the date is exactly known.
//!
//! This crate aims to provide APIs for each type so that if a type is
//! instantiated, the developer can be sure it's valid.
//!

mod date;
mod interval;
mod person;

pub use date::*;
pub use interval::*;
pub use person::*;
