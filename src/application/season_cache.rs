// Season cache - Per-season memoization of rows, features and breaks
use crate::application::production_repository::{FetchError, ProductionRepository};
use crate::domain::classification::{quantile_breaks, CLASS_COUNT};
use crate::domain::feature::RegionFeature;
use crate::domain::row::RegionRow;
use crate::domain::season::Season;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Everything derived from one season's fetch. Cached for the whole session;
/// the season domain is small and fixed, so there is no eviction or TTL.
#[derive(Debug)]
pub struct SeasonDataset {
    pub rows: Vec<RegionRow>,
    pub features: Vec<RegionFeature>,
    pub breaks: Vec<f64>,
}

pub struct SeasonCache {
    repository: Arc<dyn ProductionRepository>,
    entries: Mutex<HashMap<Season, Arc<SeasonDataset>>>,
}

impl SeasonCache {
    pub fn new(repository: Arc<dyn ProductionRepository>) -> Self {
        Self {
            repository,
            entries: Mutex::new(HashMap::new()),
        }
    }

    /// Resolve a season's dataset: cache hit returns the stored entry
    /// without touching the network; a miss fetches, derives features
    /// (dropping rows without geometry) and breaks, and stores the result.
    /// Nothing is cached when the fetch fails.
    pub async fn get_or_load(&self, season: Season) -> Result<Arc<SeasonDataset>, FetchError> {
        // The entries lock is only ever held across synchronous work.
        if let Some(entry) = self.entries.lock().await.get(&season) {
            tracing::debug!(season = %season, "season cache hit");
            return Ok(entry.clone());
        }

        tracing::debug!(season = %season, "season cache miss, fetching");
        let rows = self.repository.fetch_season_rows(season).await?;

        let features: Vec<RegionFeature> = rows.iter().filter_map(RegionFeature::from_row).collect();
        let dropped = rows.len() - features.len();
        if dropped > 0 {
            tracing::debug!(season = %season, dropped, "excluded rows without geometry");
        }

        let values: Vec<f64> = features.iter().map(|f| f.production_gwh).collect();
        let breaks = quantile_breaks(&values, CLASS_COUNT);

        let entry = Arc::new(SeasonDataset {
            rows,
            features,
            breaks,
        });
        self.entries.lock().await.insert(season, entry.clone());
        Ok(entry)
    }
}
