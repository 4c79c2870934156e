//! Data shapes exchanged with the upstream artist API.
//!
//! The upstream serves five JSON documents:
//!
//! ```json
//! // GET /artists (roster) -> [ArtistSummary, ...]
//! // GET /artists/{id}
//! {
//!   "id": 1,
//!   "image": "https://groupietrackers.herokuapp.com/api/images/queen.jpeg",
//!   "name": "Queen",
//!   "members": ["Freddie Mercury", "Brian May"],
//!   "creationDate": 1970,
//!   "firstAlbum": "14-12-1973",
//!   "locations": "https://groupietrackers.herokuapp.com/api/locations/1",
//!   "concertDates": "https://groupietrackers.herokuapp.com/api/dates/1",
//!   "relations": "https://groupietrackers.herokuapp.com/api/relation/1"
//! }
//! // GET /locations/{id} -> { "id": 1, "locations": ["..."], "dates": "..." }
//! // GET /dates/{id}     -> { "id": 1, "dates": ["*23-08-2019", "..."] }
//! // GET /relation/{id}  -> { "id": 1, "datesLocations": { "key": ["..."] } }
//! ```

use serde::{Deserialize, Deserializer};
use std::collections::BTreeMap;

/// Location-and-date key to the dates played there.
pub type RelationsMap = BTreeMap<String, Vec<String>>;

/// The upstream answers unknown ids with zero-value bodies where
/// collections are `null`; read those as empty.
fn null_as_empty<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// One artist as it appears in the roster and on the profile endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtistSummary {
    pub id: i64,
    pub name: String,
    pub image: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub members: Vec<String>,
    pub creation_date: i64,
    /// Free-form, passed through exactly as the upstream supplies it.
    pub first_album: String,
    /// Upstream reference strings. Not followed; kept for shape fidelity.
    #[serde(default)]
    pub locations: String,
    #[serde(default)]
    pub concert_dates: String,
    #[serde(default)]
    pub relations: String,
}

/// A profile merged with its three resolved collections.
///
/// Only ever built from four successful sub-fetches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtistDetail {
    pub artist: ArtistSummary,
    pub locations_list: Vec<String>,
    pub concert_dates_list: Vec<String>,
    pub relations_map: RelationsMap,
}

impl ArtistDetail {
    pub fn new(
        artist: ArtistSummary,
        locations: Vec<String>,
        concert_dates: Vec<String>,
        relations: RelationsMap,
    ) -> Self {
        Self {
            artist,
            locations_list: locations,
            concert_dates_list: concert_dates,
            relations_map: relations,
        }
    }
}

/// Body of `/locations/{id}`.
#[derive(Debug, Deserialize)]
pub(crate) struct LocationsEnvelope {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub locations: Vec<String>,
}

/// Body of `/dates/{id}`.
#[derive(Debug, Deserialize)]
pub(crate) struct DatesEnvelope {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub dates: Vec<String>,
}

/// Body of `/relation/{id}`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RelationsEnvelope {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub dates_locations: RelationsMap,
}
