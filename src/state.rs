//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::services::{AdService, EarningsService, JoinResolver, SeriesService};
use crate::domain::metrics::PageReadRate;
use crate::domain::repositories::RecordStore;

/// Services and the record store behind them.
///
/// Cloned per request; every field is reference counted.
#[derive(Clone)]
pub struct AppState {
    pub store: RecordStore,
    pub ad_service: Arc<AdService>,
    pub earnings_service: Arc<EarningsService>,
    pub series_service: Arc<SeriesService>,
}

impl AppState {
    /// Wires the services over `store`.
    ///
    /// `fanout_limit` bounds concurrent per-book work inside one report.
    pub fn new(store: RecordStore, rate: PageReadRate, fanout_limit: usize) -> Self {
        let resolver = JoinResolver::new(store.clone(), fanout_limit);

        Self {
            ad_service: Arc::new(AdService::new(resolver.clone(), rate)),
            earnings_service: Arc::new(EarningsService::new(resolver.clone(), rate)),
            series_service: Arc::new(SeriesService::new(resolver, rate)),
            store,
        }
    }
}
