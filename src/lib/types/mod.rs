//! Shared data types for the reference site.
//! Implemented as newtypes to enforce invariants.

use std::fmt;

use serde::Deserialize;

use crate::utils::slugify;

/// URL-path-safe identifier derived from a display name.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Slug(String);

impl Slug {
    pub fn from_name(name: &str) -> Self {
        Self(slugify(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Slug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Key selecting which damage statistic of a weapon to read.
///
/// The set of keys is defined by the game data, so any string is accepted.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
#[serde(transparent)]
pub struct DamageType(String);

impl DamageType {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn shield() -> Self {
        Self::new("shield")
    }

    pub fn hull() -> Self {
        Self::new("hull")
    }

    pub fn heat() -> Self {
        Self::new("heat")
    }

    pub fn ion() -> Self {
        Self::new("ion")
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DamageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// License required to purchase an outfit.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
#[serde(transparent)]
pub struct License(String);

impl License {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for License {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
