// Console implementations of the widget ports
use crate::application::chart_widget::{BarChart, ChartWidget};
use crate::application::legend_widget::{Legend, LegendWidget};
use crate::application::map_widget::{MapFeature, MapWidget, ShapeId};
use crate::domain::units::format_gwh;
use std::collections::HashMap;

const BAR_WIDTH: usize = 40;

/// Prints layer and viewport operations as single lines; region names are
/// remembered per shape handle so fit messages can name their target.
pub struct ConsoleMap {
    next_id: u64,
    shape_regions: HashMap<ShapeId, String>,
}

impl ConsoleMap {
    pub fn new() -> Self {
        Self {
            next_id: 0,
            shape_regions: HashMap::new(),
        }
    }
}

impl Default for ConsoleMap {
    fn default() -> Self {
        Self::new()
    }
}

impl MapWidget for ConsoleMap {
    fn replace_layer(&mut self, features: Vec<MapFeature>) -> Vec<ShapeId> {
        self.shape_regions.clear();
        let mut handles = Vec::with_capacity(features.len());
        for feature in &features {
            self.next_id += 1;
            let id = ShapeId(self.next_id);
            self.shape_regions.insert(id, feature.region.clone());
            handles.push(id);
        }
        println!("[map] layer replaced: {} shapes", features.len());
        handles
    }

    fn fit_layer_bounds(&mut self) {
        println!("[map] viewport fit: full layer");
    }

    fn fit_shape_bounds(&mut self, shape: ShapeId) {
        match self.shape_regions.get(&shape) {
            Some(region) => println!("[map] viewport fit: {region}"),
            None => println!("[map] viewport fit: shape {}", shape.0),
        }
    }
}

pub struct ConsoleLegend;

impl LegendWidget for ConsoleLegend {
    fn replace_legend(&mut self, legend: Legend) {
        println!("[legend] {}", legend.title);
        for row in &legend.rows {
            println!("  {} {}", row.swatch, row.label);
        }
    }
}

/// Draws proportional horizontal bars with right-aligned labels.
pub struct ConsoleChart;

impl ChartWidget for ConsoleChart {
    fn replace_chart(&mut self, chart: BarChart) {
        println!("[chart] {}", chart.caption);
        if chart.bars.is_empty() {
            return;
        }
        let max_value = chart
            .bars
            .iter()
            .map(|b| b.value)
            .fold(f64::MIN, f64::max)
            .max(0.0);
        let label_width = chart.bars.iter().map(|b| b.label.len()).max().unwrap_or(0);
        for bar in &chart.bars {
            let filled = if max_value > 0.0 {
                (((bar.value / max_value) * BAR_WIDTH as f64).round() as usize).max(1)
            } else {
                1
            };
            println!(
                "  {:>width$}  {} {} {}",
                bar.label,
                "█".repeat(filled),
                format_gwh(bar.value),
                chart.value_label,
                width = label_width
            );
        }
    }
}
