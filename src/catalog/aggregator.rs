//! Detail aggregation: four concurrent sub-fetches joined into one record.

use std::sync::Arc;

use super::error::{FetchError, Result};
use super::models::{ArtistDetail, ArtistSummary, RelationsMap};
use super::source::CatalogSource;

/// Every sub-fetch result for one artist, collected after all four finished.
#[derive(Debug)]
pub struct DetailOutcome {
    pub profile: Result<ArtistSummary>,
    pub locations: Result<Vec<String>>,
    pub dates: Result<Vec<String>>,
    pub relations: Result<RelationsMap>,
}

impl DetailOutcome {
    /// Merge into a detail, or return the first failure in the order
    /// profile, locations, dates, relations.
    pub fn into_detail(self) -> Result<ArtistDetail> {
        let profile = self.profile?;
        let locations = self.locations?;
        let dates = self.dates?;
        let relations = self.relations?;

        Ok(ArtistDetail::new(profile, locations, dates, relations))
    }

    /// All failures, in priority order.
    pub fn errors(&self) -> impl Iterator<Item = &FetchError> {
        [
            self.profile.as_ref().err(),
            self.locations.as_ref().err(),
            self.dates.as_ref().err(),
            self.relations.as_ref().err(),
        ]
        .into_iter()
        .flatten()
    }

    pub fn is_complete(&self) -> bool {
        self.errors().next().is_none()
    }
}

/// Stateless; one instance serves any number of concurrent requests.
#[derive(Clone)]
pub struct DetailAggregator {
    source: Arc<dyn CatalogSource>,
}

impl DetailAggregator {
    pub fn new(source: Arc<dyn CatalogSource>) -> Self {
        Self { source }
    }

    /// Run the four sub-fetches concurrently and wait for all of them.
    ///
    /// A failing fetch does not cancel its siblings.
    pub async fn fetch_outcomes(&self, artist_id: &str) -> DetailOutcome {
        let source = self.source.as_ref();

        let (profile, locations, dates, relations) = tokio::join!(
            source.fetch_profile(artist_id),
            source.fetch_locations(artist_id),
            source.fetch_dates(artist_id),
            source.fetch_relations(artist_id),
        );

        DetailOutcome {
            profile,
            locations,
            dates,
            relations,
        }
    }

    pub async fn fetch_detail(&self, artist_id: &str) -> Result<ArtistDetail> {
        self.fetch_outcomes(artist_id).await.into_detail()
    }
}
