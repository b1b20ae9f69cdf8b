//! Team identity: the identifier newtype and the display-name directory.
//!
//! Team identifiers are caller-supplied strings, not validated against a
//! roster. Display names live in a static directory loaded from
//! configuration; an identifier without an entry resolves to `None` and
//! the caller degrades to an unlabeled dataset.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Identifier a team submits scores under.
///
/// A thin wrapper around the raw string so team identifiers cannot be
/// mixed up with display names or other strings at compile time.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct TeamId(pub String);

impl TeamId {
    /// Create a team identifier from any string-like value.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Return the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the wrapper and return the inner [`String`].
    pub fn into_inner(self) -> String {
        self.0
    }

    /// Whether the identifier is the empty string.
    ///
    /// Empty identifiers are rejected at the ingestion boundary.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl core::fmt::Display for TeamId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for TeamId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for TeamId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

/// Immutable lookup table from team identifier to display name.
///
/// Built once from configuration and injected into the aggregators.
/// Lookups for unknown teams return `None` rather than failing -- the
/// scoreboard renders those teams without a label.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TeamDirectory {
    names: BTreeMap<TeamId, String>,
}

impl TeamDirectory {
    /// Build a directory from raw `identifier -> display name` pairs.
    pub fn new(names: BTreeMap<String, String>) -> Self {
        Self {
            names: names
                .into_iter()
                .map(|(id, name)| (TeamId(id), name))
                .collect(),
        }
    }

    /// Resolve a team identifier to its display name, if one is configured.
    pub fn resolve(&self, id: &TeamId) -> Option<&str> {
        self.names.get(id).map(String::as_str)
    }

    /// Number of configured teams.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Whether the directory has no entries.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl FromIterator<(TeamId, String)> for TeamDirectory {
    fn from_iter<T: IntoIterator<Item = (TeamId, String)>>(iter: T) -> Self {
        Self {
            names: iter.into_iter().collect(),
        }
    }
}
