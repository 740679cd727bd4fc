//! Listing and per-artist lookup over an [`Upstream`].

use std::thread;

use anyhow::anyhow;
use log::{debug, warn};

use crate::{
    domain::{
        artist::{Artist, DetailRecord},
        id::ArtistId,
    },
    upstream::{Resource, Upstream},
};

pub mod error;

use error::CatalogError;

/// Whole artist collection, in upstream order.
pub fn list_artists(upstream: &impl Upstream) -> Result<Vec<Artist>, CatalogError> {
    Ok(upstream.artists()?)
}

/// First artist in `artists` whose id is `raw_id`.
///
/// An id that does not parse matches nothing.
pub fn find_artist(artists: Vec<Artist>, raw_id: &str) -> Option<Artist> {
    let id: ArtistId = raw_id.parse().ok()?;
    artists.into_iter().find(|artist| artist.id == id)
}

/// Resolves `raw_id` against the artist collection and gathers its
/// locations, dates and relations into one record.
///
/// Only an id found in the collection leads to further upstream calls.
/// The three follow-up fetches run concurrently; any failure among them
/// fails the whole lookup.
pub fn lookup_detail(
    upstream: &impl Upstream,
    raw_id: &str,
) -> Result<DetailRecord, CatalogError> {
    let artists = upstream.artists()?;
    let artist = find_artist(artists, raw_id).ok_or_else(|| {
        warn!("No artist matches id {raw_id:?}");
        CatalogError::NotFound(raw_id.to_string())
    })?;
    let id = artist.id;
    debug!("Resolved artist {id} ({}), fetching details", artist.name);

    let (location, date, relation) = thread::scope(|s| {
        let location = s.spawn(|| upstream.locations(id));
        let date = s.spawn(|| upstream.dates(id));
        let relation = upstream.relation(id);

        let location = location
            .join()
            .map_err(|_| anyhow!("locations fetch for artist {id} panicked"));
        let date = date
            .join()
            .map_err(|_| anyhow!("dates fetch for artist {id} panicked"));
        (location, date, relation)
    });
    let location = location??;
    let date = date??;
    let relation = relation?;

    check_id(id, Resource::Locations, location.id)?;
    check_id(id, Resource::Dates, date.id)?;
    check_id(id, Resource::Relation, relation.id)?;

    Ok(DetailRecord {
        artist,
        location,
        date,
        relation,
    })
}

fn check_id(requested: ArtistId, resource: Resource, got: ArtistId) -> Result<(), CatalogError> {
    if requested == got {
        Ok(())
    } else {
        Err(CatalogError::Inconsistent {
            requested,
            resource,
            got,
        })
    }
}
