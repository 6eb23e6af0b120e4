// Legend widget port
use crate::domain::classification::{FillClass, CLASS_COUNT};
use crate::domain::units::format_gwh;

#[derive(Debug, Clone, PartialEq)]
pub struct LegendRow {
    /// Swatch color, hex.
    pub swatch: &'static str,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Legend {
    pub title: String,
    pub rows: Vec<LegendRow>,
}

impl Legend {
    /// One row per class, swatch-aligned: class 0 covers everything up to
    /// the first break, the top class is open-ended. No breaks, no rows.
    pub fn from_breaks(breaks: &[f64]) -> Self {
        let title = "Solar production by region (GWh, quantile classes)".to_string();
        if breaks.is_empty() {
            return Self {
                title,
                rows: Vec::new(),
            };
        }

        let mut rows = Vec::with_capacity(CLASS_COUNT);
        rows.push(LegendRow {
            swatch: FillClass::Quantile(0).color(),
            label: format!("≤ {} GWh", format_gwh(breaks[0])),
        });
        for i in 1..breaks.len() {
            rows.push(LegendRow {
                swatch: FillClass::Quantile(i).color(),
                label: format!("{} – {} GWh", format_gwh(breaks[i - 1]), format_gwh(breaks[i])),
            });
        }
        rows.push(LegendRow {
            swatch: FillClass::Quantile(breaks.len()).color(),
            label: format!("> {} GWh", format_gwh(breaks[breaks.len() - 1])),
        });
        Self { title, rows }
    }
}

pub trait LegendWidget: Send {
    fn replace_legend(&mut self, legend: Legend);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_five_rows_with_aligned_swatches() {
        let legend = Legend::from_breaks(&[2.0, 4.0, 6.0, 8.0]);
        assert_eq!(legend.rows.len(), 5);
        assert_eq!(legend.rows[0].label, "≤ 2 GWh");
        assert_eq!(legend.rows[0].swatch, "#edf8fb");
        assert_eq!(legend.rows[1].label, "2 – 4 GWh");
        assert_eq!(legend.rows[3].label, "6 – 8 GWh");
        assert_eq!(legend.rows[4].label, "> 8 GWh");
        assert_eq!(legend.rows[4].swatch, "#810f7c");
    }

    #[test]
    fn test_empty_breaks_yield_no_rows() {
        let legend = Legend::from_breaks(&[]);
        assert!(legend.rows.is_empty());
        assert!(legend.title.contains("quantile classes"));
    }

    #[test]
    fn test_bounds_are_display_formatted() {
        let legend = Legend::from_breaks(&[1234.5, 2000.0, 3000.0, 4000.125]);
        assert_eq!(legend.rows[0].label, "≤ 1,234.5 GWh");
        assert_eq!(legend.rows[4].label, "> 4,000.13 GWh");
    }
}
