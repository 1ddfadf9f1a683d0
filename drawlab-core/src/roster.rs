//! Participant roster: the validated, insertion-ordered set of entrants.
//!
//! A `Roster` maps unique names to positive integer weights ("entries").
//! Validation happens at insertion time so the selector can assume every
//! stored weight is >= 1. Iteration order is insertion order, which fixes
//! the interval each name occupies in the stacked-interval representation
//! used by the selector — this matters for reproducibility under a fixed
//! seed, not for the marginal probabilities.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// One entrant: a unique name and a weight of at least 1.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    pub name: String,
    /// Number of entries. More entries, better odds.
    pub weight: u64,
}

/// Validation errors raised when building a roster.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RosterError {
    #[error("participant name cannot be blank")]
    BlankName,
    #[error("duplicate participant name: {name}")]
    DuplicateName { name: String },
    #[error("weight for {name} must be at least 1")]
    ZeroWeight { name: String },
}

/// Errors raised when loading a roster from a TOML file.
#[derive(Debug, Error)]
pub enum RosterFileError {
    #[error("failed to read roster file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse roster TOML: {0}")]
    Parse(#[from] toml::de::Error),
    #[error(transparent)]
    Invalid(#[from] RosterError),
}

/// Insertion-ordered collection of participants with unique names.
///
/// Read-only once handed to the selector: no core operation mutates a
/// `&Roster`. Multi-winner draws work on a private copy (see
/// [`crate::selector::Pool`]).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Roster {
    entries: Vec<Participant>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a participant, enforcing non-blank name, uniqueness, and
    /// weight >= 1.
    pub fn add(&mut self, name: impl Into<String>, weight: u64) -> Result<(), RosterError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(RosterError::BlankName);
        }
        if weight == 0 {
            return Err(RosterError::ZeroWeight { name });
        }
        if self.entries.iter().any(|p| p.name == name) {
            return Err(RosterError::DuplicateName { name });
        }
        self.entries.push(Participant { name, weight });
        Ok(())
    }

    /// Participants in insertion order.
    pub fn participants(&self) -> &[Participant] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = &Participant> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all weights. Zero only for an empty roster.
    pub fn total_weight(&self) -> u64 {
        self.entries.iter().map(|p| p.weight).sum()
    }

    /// Parse a roster from TOML text.
    ///
    /// The file uses an array of tables so entry order in the file is the
    /// roster's insertion order:
    ///
    /// ```toml
    /// [[participant]]
    /// name = "alice"
    /// entries = 3
    ///
    /// [[participant]]
    /// name = "bob"
    /// entries = 1
    /// ```
    pub fn from_toml(input: &str) -> Result<Self, RosterFileError> {
        let file: RosterFile = toml::from_str(input)?;
        let mut roster = Roster::new();
        for entry in file.participants {
            roster.add(entry.name, entry.entries)?;
        }
        Ok(roster)
    }

    /// Load a roster from a TOML file on disk.
    pub fn from_file(path: &Path) -> Result<Self, RosterFileError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }
}

#[derive(Debug, Deserialize)]
struct RosterFile {
    #[serde(rename = "participant", default)]
    participants: Vec<RosterFileEntry>,
}

#[derive(Debug, Deserialize)]
struct RosterFileEntry {
    name: String,
    entries: u64,
}
