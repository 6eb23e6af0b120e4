// Application layer - Ports and use cases
pub mod chart_widget;
pub mod legend_widget;
pub mod map_widget;
pub mod production_repository;
pub mod region_selector;
pub mod render_pipeline;
pub mod season_cache;
