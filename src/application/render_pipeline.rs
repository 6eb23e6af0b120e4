// Render pipeline - Use case turning a season into map, legend and chart
use crate::application::chart_widget::{BarChart, ChartBar, ChartWidget};
use crate::application::legend_widget::{Legend, LegendWidget};
use crate::application::map_widget::{FeatureStyle, MapFeature, MapWidget, Popup, ShapeId};
use crate::application::production_repository::FetchError;
use crate::application::season_cache::SeasonCache;
use crate::domain::classification::classify;
use crate::domain::feature::RegionFeature;
use crate::domain::season::Season;
use crate::domain::units::format_gwh;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::Mutex;

const CHART_TOP_N: usize = 5;

/// User-facing view state, reset in part when the rendered season changes.
#[derive(Debug, Default)]
pub struct ViewState {
    /// Empty string means "all regions".
    pub focused_region: String,
    pub last_season: Option<Season>,
    pub fitted_once: bool,
}

#[derive(Debug, PartialEq, Eq)]
pub enum RenderOutcome {
    Rendered { regions: usize, features: usize },
    /// A newer render started before this one could apply; nothing changed.
    Superseded,
}

struct RenderState<M, C, L> {
    map: M,
    chart: C,
    legend: L,
    view: ViewState,
    shape_index: HashMap<String, ShapeId>,
    region_names: Vec<String>,
}

/// Owns the cache, the widgets and the view state. Renders are guarded by a
/// generation counter: each call captures a fresh generation up front and
/// re-checks it under the state lock before applying, so a stale result can
/// never mutate render state after a newer request has started.
pub struct RenderPipeline<M: MapWidget, C: ChartWidget, L: LegendWidget> {
    cache: SeasonCache,
    generation: AtomicU64,
    state: Mutex<RenderState<M, C, L>>,
}

impl<M: MapWidget, C: ChartWidget, L: LegendWidget> RenderPipeline<M, C, L> {
    pub fn new(cache: SeasonCache, map: M, chart: C, legend: L) -> Self {
        Self {
            cache,
            generation: AtomicU64::new(0),
            state: Mutex::new(RenderState {
                map,
                chart,
                legend,
                view: ViewState::default(),
                shape_index: HashMap::new(),
                region_names: Vec::new(),
            }),
        }
    }

    /// Render one season end to end. The cache resolution is the only
    /// suspension point; once data is in hand the widgets are rebuilt
    /// synchronously under the state lock.
    pub async fn render_season(&self, season: Season) -> Result<RenderOutcome, FetchError> {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;

        let dataset = match self.cache.get_or_load(season).await {
            Ok(dataset) => dataset,
            Err(FetchError::Superseded) => {
                tracing::debug!(season = %season, "fetch superseded, skipping render");
                return Ok(RenderOutcome::Superseded);
            }
            Err(e) => return Err(e),
        };

        let mut state = self.state.lock().await;
        if generation != self.generation.load(Ordering::SeqCst) {
            tracing::debug!(season = %season, "stale render generation, skipping apply");
            return Ok(RenderOutcome::Superseded);
        }

        let mut regions: Vec<String> = dataset.features.iter().map(|f| f.region.clone()).collect();
        regions.sort();
        regions.dedup();

        let map_features: Vec<MapFeature> = dataset
            .features
            .iter()
            .map(|f| MapFeature {
                region: f.region.clone(),
                geometry: f.to_geojson(),
                style: FeatureStyle {
                    weight: 1,
                    color: "#444".to_string(),
                    fill_color: classify(f.production_gwh, &dataset.breaks)
                        .color()
                        .to_string(),
                    fill_opacity: 0.75,
                },
                popup: Popup {
                    region: f.region.clone(),
                    season: season.to_string(),
                    production: format!("{} GWh", format_gwh(f.production_gwh)),
                },
            })
            .collect();

        let handles = state.map.replace_layer(map_features);
        state.shape_index = dataset
            .features
            .iter()
            .zip(handles)
            .map(|(f, handle)| (f.region.clone(), handle))
            .collect();

        state.legend.replace_legend(Legend::from_breaks(&dataset.breaks));

        let season_changed = state.view.last_season != Some(season);
        if season_changed {
            state.view.focused_region.clear();
        }

        let chart = build_top_chart(&dataset.features, season, &state.view.focused_region);
        state.chart.replace_chart(chart);

        if !state.view.fitted_once || season_changed {
            state.map.fit_layer_bounds();
            state.view.fitted_once = true;
        }
        state.view.last_season = Some(season);
        state.region_names = regions;

        Ok(RenderOutcome::Rendered {
            regions: state.region_names.len(),
            features: dataset.features.len(),
        })
    }

    /// Focus a region and fit the viewport to its shape. The fit is a silent
    /// no-op when the shape is not indexed (e.g. raced with a season change);
    /// the focus is still recorded.
    pub async fn focus_region(&self, name: &str) {
        let mut state = self.state.lock().await;
        state.view.focused_region = name.to_string();
        match state.shape_index.get(name).copied() {
            Some(shape) => state.map.fit_shape_bounds(shape),
            None => tracing::debug!(region = name, "no indexed shape for region, skipping fit"),
        }
    }

    /// Clear the focus and fit the viewport to the whole layer.
    pub async fn focus_all_regions(&self) {
        let mut state = self.state.lock().await;
        state.view.focused_region.clear();
        state.map.fit_layer_bounds();
    }

    pub async fn region_names(&self) -> Vec<String> {
        self.state.lock().await.region_names.clone()
    }

    pub async fn focused_region(&self) -> String {
        self.state.lock().await.view.focused_region.clone()
    }
}

/// Top N features by finite display value, descending. Non-finite values
/// cannot rank and are excluded up front.
fn build_top_chart(features: &[RegionFeature], season: Season, focused: &str) -> BarChart {
    let mut ranked: Vec<&RegionFeature> = features
        .iter()
        .filter(|f| f.production_gwh.is_finite())
        .collect();
    ranked.sort_by(|a, b| b.production_gwh.total_cmp(&a.production_gwh));
    ranked.truncate(CHART_TOP_N);

    let caption = if focused.is_empty() {
        format!("Season: {season}")
    } else {
        format!("Season: {season} • Zoom: {focused}")
    };

    BarChart {
        caption,
        value_label: "GWh".to_string(),
        bars: ranked
            .iter()
            .map(|f| ChartBar {
                label: f.region.clone(),
                value: f.production_gwh,
            })
            .collect(),
    }
}
