use std::{fmt::Display, num::ParseIntError, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Identifier shared by an artist and its location, date and relation records.
///
/// The upstream API indexes all four resources by the same id space,
/// so one `ArtistId` selects the whole composite record. Ids are positive;
/// parsing and decoding both reject 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct ArtistId(pub u32);

#[derive(Debug, Error, PartialEq, Eq)]
pub enum InvalidArtistId {
    #[error("artist id is not a number: {0}")]
    NotANumber(#[from] ParseIntError),

    #[error("artist id must be positive")]
    Zero,
}

impl TryFrom<u32> for ArtistId {
    type Error = InvalidArtistId;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        if value == 0 {
            return Err(InvalidArtistId::Zero);
        }
        Ok(Self(value))
    }
}

impl From<ArtistId> for u32 {
    fn from(id: ArtistId) -> Self {
        id.0
    }
}

impl FromStr for ArtistId {
    type Err = InvalidArtistId;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from(s.parse::<u32>()?)
    }
}

impl Display for ArtistId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
