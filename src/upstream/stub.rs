use std::{collections::HashMap, sync::Mutex};

use crate::{
    domain::{
        artist::{Artist, DateSet, LocationSet, RelationSet},
        id::ArtistId,
    },
    upstream::{Resource, Upstream, error::UpstreamError},
};

/// In-memory upstream that records every call it receives.
#[derive(Default)]
pub struct StubUpstream {
    pub artists: Vec<Artist>,
    pub fail_artists: bool,
    pub failing: Option<Resource>,
    /// Answer auxiliary requests with this id instead of the requested one.
    pub wrong_id: Option<ArtistId>,
    pub(crate) artist_calls: Mutex<usize>,
    pub(crate) aux_calls: Mutex<Vec<(Resource, ArtistId)>>,
}

impl StubUpstream {
    pub fn with_artists(artists: Vec<Artist>) -> Self {
        Self {
            artists,
            ..Default::default()
        }
    }

    pub fn artist_calls(&self) -> usize {
        *self.artist_calls.lock().unwrap()
    }

    pub fn aux_calls(&self) -> Vec<(Resource, ArtistId)> {
        self.aux_calls.lock().unwrap().clone()
    }

    fn record(&self, resource: Resource, id: ArtistId) -> Result<ArtistId, UpstreamError> {
        self.aux_calls.lock().unwrap().push((resource, id));
        if self.failing == Some(resource) {
            return Err(decode_error(&resource.path(id)));
        }
        Ok(self.wrong_id.unwrap_or(id))
    }
}

fn decode_error(path: &str) -> UpstreamError {
    UpstreamError::Decode {
        url: format!("stub://{path}"),
        source: serde_json::from_str::<serde_json::Value>("{").unwrap_err(),
    }
}

pub fn artist(id: u32, name: &str) -> Artist {
    Artist {
        id: ArtistId(id),
        image: format!("https://img.example/{id}.jpeg"),
        name: name.to_string(),
        members: vec![format!("{name} singer"), format!("{name} drummer")],
        creation_date: 1960 + id as i32,
        first_album: "01-01-1970".to_string(),
    }
}

impl Upstream for StubUpstream {
    fn artists(&self) -> Result<Vec<Artist>, UpstreamError> {
        *self.artist_calls.lock().unwrap() += 1;
        if self.fail_artists {
            return Err(decode_error("/artists"));
        }
        Ok(self.artists.clone())
    }

    fn locations(&self, id: ArtistId) -> Result<LocationSet, UpstreamError> {
        let id = self.record(Resource::Locations, id)?;
        Ok(LocationSet {
            id,
            locations: vec!["north_carolina-usa".to_string(), "osaka-japan".to_string()],
            dates: format!("https://groupietrackers.herokuapp.com/api/dates/{id}"),
        })
    }

    fn dates(&self, id: ArtistId) -> Result<DateSet, UpstreamError> {
        let id = self.record(Resource::Dates, id)?;
        Ok(DateSet {
            id,
            dates: vec!["*23-08-2019".to_string(), "28-01-2020".to_string()],
        })
    }

    fn relation(&self, id: ArtistId) -> Result<RelationSet, UpstreamError> {
        let id = self.record(Resource::Relation, id)?;
        Ok(RelationSet {
            id,
            dates_locations: HashMap::from([
                (
                    "north_carolina-usa".to_string(),
                    vec!["23-08-2019".to_string()],
                ),
                ("osaka-japan".to_string(), vec!["28-01-2020".to_string()]),
            ]),
        })
    }
}
