use std::sync::Arc;

use crate::catalog::{CatalogSource, DetailAggregator, Roster};
use crate::config::Config;
use crate::observability::Metrics;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    /// Read-only after startup.
    pub roster: Arc<Roster>,
    pub aggregator: Arc<DetailAggregator>,
    pub metrics: Arc<Metrics>,
}

impl AppState {
    pub fn new(config: Config, roster: Roster, source: Arc<dyn CatalogSource>) -> Self {
        Self {
            config: Arc::new(config),
            roster: Arc::new(roster),
            aggregator: Arc::new(DetailAggregator::new(source)),
            metrics: Arc::new(Metrics::new()),
        }
    }
}
