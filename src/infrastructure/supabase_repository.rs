// Supabase (PostgREST) repository implementation
use crate::application::production_repository::{FetchError, ProductionRepository};
use crate::domain::row::RegionRow;
use crate::domain::season::Season;
use async_trait::async_trait;
use futures::future::{AbortHandle, Abortable};
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::Mutex;

const SELECT_COLUMNS: &str = "region,period,production,geom";
const DETAIL_LIMIT: usize = 300;

pub struct SupabaseRepository {
    url: String,
    anon_key: String,
    table: String,
    client: reqwest::Client,
    fetch_seq: AtomicU64,
    /// Abort handle of the in-flight request, tagged with its fetch id. A new
    /// fetch aborts it first, so at most one request is in flight per
    /// repository; a completed fetch clears its own slot.
    in_flight: Mutex<Option<(u64, AbortHandle)>>,
}

impl SupabaseRepository {
    pub fn new(url: String, anon_key: String, table: String) -> Self {
        Self {
            url: url.trim_end_matches('/').to_string(),
            anon_key,
            table,
            client: reqwest::Client::new(),
            fetch_seq: AtomicU64::new(0),
            in_flight: Mutex::new(None),
        }
    }

    fn build_rows_url(&self, season: Season) -> String {
        format!(
            "{}/rest/v1/{}?select={}&period=eq.{}",
            self.url,
            self.table,
            SELECT_COLUMNS,
            urlencoding::encode(season.as_str())
        )
    }

    /// PostgREST wants the credential twice: as `apikey` and as the bearer
    /// token.
    fn request_headers(&self) -> [(&'static str, String); 3] {
        [
            ("apikey", self.anon_key.clone()),
            ("Authorization", format!("Bearer {}", self.anon_key)),
            ("Accept", "application/json".to_string()),
        ]
    }

    async fn request_rows(&self, url: &str) -> Result<Vec<RegionRow>, FetchError> {
        let mut request = self.client.get(url);
        for (name, value) in self.request_headers() {
            request = request.header(name, value);
        }
        let response = request
            .send()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            let mut detail: String = body.chars().take(DETAIL_LIMIT).collect();
            if body.chars().count() > DETAIL_LIMIT {
                detail.push('…');
            }
            return Err(FetchError::Status { status, detail });
        }

        response
            .json::<Vec<RegionRow>>()
            .await
            .map_err(|e| FetchError::Decode(e.to_string()))
    }
}

#[async_trait]
impl ProductionRepository for SupabaseRepository {
    async fn fetch_season_rows(&self, season: Season) -> Result<Vec<RegionRow>, FetchError> {
        let url = self.build_rows_url(season);
        tracing::debug!(%url, "fetching season rows");

        let fetch_id = self.fetch_seq.fetch_add(1, Ordering::SeqCst) + 1;
        let (abort_handle, abort_registration) = AbortHandle::new_pair();
        {
            let mut slot = self.in_flight.lock().await;
            if let Some((_, previous)) = slot.replace((fetch_id, abort_handle)) {
                previous.abort();
            }
        }

        let outcome = match Abortable::new(self.request_rows(&url), abort_registration).await {
            Ok(result) => result,
            Err(futures::future::Aborted) => Err(FetchError::Superseded),
        };

        // Clear the slot unless a newer fetch already took it over.
        {
            let mut slot = self.in_flight.lock().await;
            if matches!(&*slot, Some((current, _)) if *current == fetch_id) {
                *slot = None;
            }
        }

        outcome
    }
}
