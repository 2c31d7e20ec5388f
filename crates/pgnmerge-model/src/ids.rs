#![deny(unsafe_code)]

use std::fmt;
use std::str::FromStr;

use crate::ModelError;

/// Parameter group number, the first half of a `PGN:SPN` column key.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct Pgn(u32);

impl Pgn {
    pub fn new(value: u32) -> Self {
        Self(value)
    }

    pub fn value(self) -> u32 {
        self.0
    }
}

impl fmt::Display for Pgn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Suspect parameter number. Metadata lookups are keyed by this half alone.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct Spn(u32);

impl Spn {
    pub fn new(value: u32) -> Self {
        Self(value)
    }

    pub fn value(self) -> u32 {
        self.0
    }
}

impl fmt::Display for Spn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Composite key naming one parameter column, rendered as `PGN:SPN`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct ParameterKey {
    pub pgn: Pgn,
    pub spn: Spn,
}

impl ParameterKey {
    pub fn new(pgn: Pgn, spn: Spn) -> Self {
        Self { pgn, spn }
    }
}

impl FromStr for ParameterKey {
    type Err = ModelError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let invalid = || ModelError::InvalidParameterKey(value.to_string());
        let (pgn, spn) = value.trim().split_once(':').ok_or_else(invalid)?;
        let pgn: u32 = pgn.trim().parse().map_err(|_| invalid())?;
        let spn: u32 = spn.trim().parse().map_err(|_| invalid())?;
        Ok(Self::new(Pgn::new(pgn), Spn::new(spn)))
    }
}

impl fmt::Display for ParameterKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.pgn, self.spn)
    }
}
