// SPDX-License-Identifier: MIT

//!
//! The Lifetimes person type
//!

use crate::{IntervalError, UncertainInterval};
use log::warn;
use serde::{Deserialize, Deserializer, Serialize};
use std::cmp::Ordering;
use thiserror::Error;
use unicase::UniCase;

/// Errors that can arise in relation to a [`Person`]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PersonError {
    /// The person's ID is empty
    #[error("Person ID cannot be empty")]
    EmptyId,

    /// The person's sort key is empty
    #[error("Sort key cannot be empty")]
    EmptySortKey,

    /// The person's death latest bound precedes their earliest possible birth
    #[error("The person's death cannot precede their earliest possible birth")]
    Dates,

    /// One of the person's intervals is invalid
    #[error(transparent)]
    Interval(#[from] IntervalError),
}

/// The Lifetimes person identifier.  Supplied by the dataset and unique
/// within it.  The value can be any string apart from one which when trimmed
/// of trailing and leading whitespace is empty.
#[rustfmt::skip]
#[derive(derive_more::Display, Serialize, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PersonId(String);

impl PersonId {
    /// Create and initialise a new ID if it will be valid
    pub fn from<S: ToString>(id: S) -> Result<Self, PersonError> {
        let id = id.to_string();
        if id.trim().is_empty() {
            Err(PersonError::EmptyId)
        } else {
            Ok(PersonId(id.trim().to_string()))
        }
    }

    /// Get the underlying `&str`
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl<'de> Deserialize<'de> for PersonId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let string = String::deserialize(deserializer)?;
        PersonId::from(string).map_err(serde::de::Error::custom)
    }
}

/// An opaque collation key for a person
///
/// The core never interprets the value beyond ordering by it; the
/// presentation layer decides what goes in it (typically a surname-first
/// rendering of the person's name).
#[rustfmt::skip]
#[derive(derive_more::Display, Serialize, Clone, Debug, PartialEq, Eq, Hash)]
pub struct SortKey(String);

impl SortKey {
    /// Create and initialise a new sort key if it will be valid
    pub fn from<S: ToString>(key: S) -> Result<Self, PersonError> {
        let key = key.to_string();
        if key.trim().is_empty() {
            Err(PersonError::EmptySortKey)
        } else {
            Ok(SortKey(key.trim().to_string()))
        }
    }

    /// Get the underlying `&str`
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Case-insensitive Unicode-aware ordering, with a raw comparison as the
    /// tiebreak so keys equal ignoring case still order deterministically
    pub fn caseless_cmp(&self, other: &SortKey) -> Ordering {
        UniCase::new(self.0.as_str())
            .cmp(&UniCase::new(other.0.as_str()))
            .then_with(|| self.0.cmp(&other.0))
    }
}

impl<'de> Deserialize<'de> for SortKey {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let string = String::deserialize(deserializer)?;
        SortKey::from(string).map_err(serde::de::Error::custom)
    }
}

/// The Lifetimes [`Person`] type
///
/// Both the birth and the death are uncertain intervals.  Constructed once
/// from the dataset at load time and immutable thereafter.
#[derive(Serialize, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Person {
    /// The person's ID
    id: PersonId,

    /// The person's collation key
    sort_key: SortKey,

    /// When the person was born
    birth: UncertainInterval,

    /// When the person died
    death: UncertainInterval,
}

impl Person {
    /// Create a valid Lifetimes [`Person`] if it is possible to do so with
    /// the values passed in
    ///
    /// The death's latest bound must not precede the birth's earliest bound.
    /// Nothing tighter is checked: a death bound inside the birth interval is
    /// accepted as-is, not repaired.
    pub fn from(
        id: PersonId,
        sort_key: SortKey,
        birth: UncertainInterval,
        death: UncertainInterval,
    ) -> Result<Person, PersonError> {
        if death.latest() < birth.earliest() {
            return Err(PersonError::Dates);
        }
        Ok(Person {
            id,
            sort_key,
            birth,
            death,
        })
    }

    /// Get the person's ID
    pub fn id(&self) -> &PersonId {
        &self.id
    }

    /// Get the person's collation key
    pub fn sort_key(&self) -> &SortKey {
        &self.sort_key
    }

    /// Get the person's birth interval
    pub fn birth(&self) -> UncertainInterval {
        self.birth
    }

    /// Get the person's death interval
    pub fn death(&self) -> UncertainInterval {
        self.death
    }
}

/// Used only by the custom deserialiser (to make it simpler).  Display-only
/// dataset fields (names, labels) are not listed and so are ignored - they
/// belong to the presentation layer.
#[derive(Deserialize)]
struct RawPerson {
    id: PersonId,
    sort_key: SortKey,
    birth: UncertainInterval,
    death: UncertainInterval,
}

impl<'de> Deserialize<'de> for Person {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = RawPerson::deserialize(deserializer)?;
        Person::from(raw.id, raw.sort_key, raw.birth, raw.death)
            .map_err(serde::de::Error::custom)
    }
}

/// The outcome of a lossy dataset load
#[derive(Debug)]
pub struct PeopleLoad {
    /// The records that parsed and validated
    pub people: Vec<Person>,

    /// The records that didn't, with the reason each was rejected
    pub rejected: Vec<RejectedRecord>,
}

/// A dataset record that could not be loaded
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedRecord {
    /// Index of the record in the input array
    pub index: usize,

    /// Why the record was rejected
    pub reason: String,
}

/// Load a JSON array of people, keeping the well-formed records when some
/// are malformed.  Fails only if the input is not a JSON array at all.
pub fn people_from_json(json: &str) -> Result<PeopleLoad, serde_json::Error> {
    let raw: Vec<serde_json::Value> = serde_json::from_str(json)?;

    let mut people = Vec::new();
    let mut rejected = Vec::new();
    for (index, value) in raw.into_iter().enumerate() {
        match serde_json::from_value::<Person>(value) {
            Ok(person) => people.push(person),
            Err(error) => {
                warn!("rejected person record {index}: {error}");
                rejected.push(RejectedRecord {
                    index,
                    reason: error.to_string(),
                });
            }
        }
    }

    Ok(PeopleLoad { people, rejected })
}
