use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::id::ArtistId;

/// One entry of the upstream `/artists` collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Artist {
    pub id: ArtistId,
    pub image: String,
    pub name: String,
    pub members: Vec<String>,
    pub creation_date: i32,
    pub first_album: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationSet {
    pub id: ArtistId,
    pub locations: Vec<String>,
    /// Upstream descriptor, usually a link to the matching date set. Not interpreted.
    pub dates: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateSet {
    pub id: ArtistId,
    pub dates: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RelationSet {
    pub id: ArtistId,
    pub dates_locations: HashMap<String, Vec<String>>,
}

impl RelationSet {
    /// Entries ordered by location name.
    pub fn sorted_entries(&self) -> Vec<(&str, &[String])> {
        let mut entries: Vec<_> = self
            .dates_locations
            .iter()
            .map(|(location, dates)| (location.as_str(), dates.as_slice()))
            .collect();
        entries.sort_by(|a, b| a.0.cmp(b.0));
        entries
    }
}

/// Everything the detail page shows about one artist.
///
/// Built per request and dropped once the page is rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailRecord {
    pub artist: Artist,
    pub location: LocationSet,
    pub date: DateSet,
    pub relation: RelationSet,
}
