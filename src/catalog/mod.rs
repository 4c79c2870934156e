//! Artist catalog core
//!
//! Everything the web layer needs from the upstream artist API:
//!
//! - [`Roster`] - the full artist list, fetched once at startup
//! - [`DetailAggregator`] - one artist's profile, locations, dates and
//!   relations fetched concurrently and merged into an [`ArtistDetail`]
//! - [`search_by_name`] - case-insensitive substring filter over the roster
//!
//! Upstream access goes through the [`CatalogSource`] trait; [`HttpCatalog`]
//! implements it on top of [`HttpFetcher`].
//!
//! ## Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use groupie::catalog::{DetailAggregator, Endpoints, FetcherConfig, HttpCatalog, HttpFetcher, Roster};
//!
//! let fetcher = HttpFetcher::new(FetcherConfig::default())?;
//! let catalog = Arc::new(HttpCatalog::new(fetcher, Endpoints::new("https://groupietrackers.herokuapp.com/api")));
//!
//! let roster = Roster::load(catalog.as_ref()).await?;
//! let detail = DetailAggregator::new(catalog).fetch_detail("1").await?;
//! ```

mod aggregator;
mod error;
mod fetcher;
mod models;
mod roster;
mod search;
mod source;

pub use aggregator::{DetailAggregator, DetailOutcome};
pub use error::{FetchError, ResourceKind, Result};
pub use fetcher::{FetcherConfig, HttpFetcher};
pub use models::{ArtistDetail, ArtistSummary, RelationsMap};
pub use roster::Roster;
pub use search::search_by_name;
pub use source::{CatalogSource, Endpoints, HttpCatalog};
