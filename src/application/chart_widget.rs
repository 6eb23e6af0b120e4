// Bar chart widget port

#[derive(Debug, Clone)]
pub struct ChartBar {
    pub label: String,
    pub value: f64,
}

#[derive(Debug, Clone)]
pub struct BarChart {
    pub caption: String,
    pub value_label: String,
    pub bars: Vec<ChartBar>,
}

pub trait ChartWidget: Send {
    /// Replace the whole dataset atomically; destroy-and-recreate is fine.
    fn replace_chart(&mut self, chart: BarChart);
}
