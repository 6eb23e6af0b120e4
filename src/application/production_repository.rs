// Repository trait for production data access
use crate::domain::row::RegionRow;
use crate::domain::season::Season;
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("data service returned status {status}: {detail}")]
    Status { status: u16, detail: String },

    #[error("transport failure reaching the data service: {0}")]
    Transport(String),

    #[error("could not decode the data service response: {0}")]
    Decode(String),

    /// A newer fetch superseded this one. Not a user-visible failure; the
    /// render pipeline swallows it silently.
    #[error("fetch superseded by a newer request")]
    Superseded,
}

#[async_trait]
pub trait ProductionRepository: Send + Sync {
    /// Fetch all rows for one season. Issuing a new fetch aborts any
    /// still-pending previous fetch on the same repository; the superseded
    /// call resolves to `FetchError::Superseded`.
    async fn fetch_season_rows(&self, season: Season) -> Result<Vec<RegionRow>, FetchError>;
}
