// SPDX-License-Identifier: MIT

//!
//! The Lifetimes uncertain interval type
//!

use crate::{Date, DateError};
use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

/// Errors that can arise in relation to an [`UncertainInterval`]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IntervalError {
    /// The bounds are the wrong way round
    #[error("Interval bounds are inverted ({earliest} is after {latest})")]
    Inverted { earliest: Date, latest: Date },

    /// One of the bound strings failed to parse
    #[error(transparent)]
    Date(#[from] DateError),
}

/// A date known only to lie somewhere between two bounds
///
/// The true instant lies somewhere in `[earliest, latest]`.  When the two
/// bounds coincide the date is certain.
#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct UncertainInterval {
    earliest: Date,
    latest: Date,
}

impl UncertainInterval {
    /// Create a new interval if `earliest` does not come after `latest`
    pub fn from(earliest: Date, latest: Date) -> Result<Self, IntervalError> {
        if earliest > latest {
            return Err(IntervalError::Inverted { earliest, latest });
        }
        Ok(UncertainInterval { earliest, latest })
    }

    /// An interval whose date is exactly known
    pub fn certain(date: Date) -> Self {
        UncertainInterval {
            earliest: date,
            latest: date,
        }
    }

    /// Parse a pair of bound strings into an interval
    pub fn parse(earliest: &str, latest: &str) -> Result<Self, IntervalError> {
        Self::from(Date::parse(earliest)?, Date::parse(latest)?)
    }

    /// Get the interval's earliest bound
    pub fn earliest(&self) -> Date {
        self.earliest
    }

    /// Get the interval's latest bound
    pub fn latest(&self) -> Date {
        self.latest
    }

    /// Whether the two bounds coincide
    pub fn is_certain(&self) -> bool {
        self.earliest == self.latest
    }
}

/// Used only by the custom deserialiser (to make it simpler)
#[derive(Deserialize)]
struct RawInterval {
    earliest: Date,
    latest: Date,
}

impl<'de> Deserialize<'de> for UncertainInterval {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = RawInterval::deserialize(deserializer)?;
        UncertainInterval::from(raw.earliest, raw.latest).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn from() {
        let earlier = Date::parse("1800").unwrap();
        let later = Date::parse("1805").unwrap();

        assert!(UncertainInterval::from(earlier, later).is_ok());
        assert!(UncertainInterval::from(earlier, earlier).is_ok());
        assert_eq!(
            UncertainInterval::from(later, earlier),
            Err(IntervalError::Inverted {
                earliest: later,
                latest: earlier
            })
        );
    }

    #[test]
    fn is_certain() {
        assert!(UncertainInterval::parse("1800", "1800").unwrap().is_certain());
        assert!(!UncertainInterval::parse("1800", "1805").unwrap().is_certain());
        assert!(
            UncertainInterval::certain(Date::parse("-0450").unwrap()).is_certain()
        );
    }

    #[test]
    fn deserialisation() {
        // Extra dataset fields (labels etc) are ignored
        let json = r#"{"earliest": "1799-05", "latest": "1799-06", "label": "May/Jun 1799"}"#;
        let interval: UncertainInterval = serde_json::from_str(json).unwrap();
        assert_eq!(interval.earliest(), Date::parse("1799-05-01").unwrap());
        assert_eq!(interval.latest(), Date::parse("1799-06-01").unwrap());

        // Inverted bounds are rejected
        let json = r#"{"earliest": "1805", "latest": "1800"}"#;
        assert!(serde_json::from_str::<UncertainInterval>(json).is_err());

        // Malformed bound strings are rejected
        let json = r#"{"earliest": "not a date", "latest": "1800"}"#;
        assert!(serde_json::from_str::<UncertainInterval>(json).is_err());
    }
}
