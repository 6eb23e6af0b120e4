// Quantile classification for the choropleth fill

pub const CLASS_COUNT: usize = 5;

const FILL_RAMP: [&str; CLASS_COUNT] = ["#edf8fb", "#b3cde3", "#8c96c6", "#8856a7", "#810f7c"];
const NO_DATA_FILL: &str = "#ccc";

/// Position-based quantile break estimator: filter to finite values, sort
/// ascending, pick elements at `floor(i / class_count * (n - 1))` for
/// `i = 1..class_count-1`. Returns an empty vec when no finite values exist.
///
/// Duplicate or sparse inputs can produce duplicate thresholds, collapsing
/// some classes. That is accepted behavior of this estimator, not corrected.
pub fn quantile_breaks(values: &[f64], class_count: usize) -> Vec<f64> {
    let mut finite: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();
    if finite.is_empty() || class_count < 2 {
        return Vec::new();
    }
    finite.sort_by(f64::total_cmp);

    let n = finite.len();
    let mut breaks = Vec::with_capacity(class_count - 1);
    for i in 1..class_count {
        let idx = ((i as f64 / class_count as f64) * (n - 1) as f64).floor() as usize;
        breaks.push(finite[idx]);
    }
    breaks
}

/// Ordinal fill class of a value under a set of breaks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FillClass {
    NoData,
    Quantile(usize),
}

impl FillClass {
    pub fn color(&self) -> &'static str {
        match self {
            FillClass::NoData => NO_DATA_FILL,
            FillClass::Quantile(i) => FILL_RAMP.get(*i).copied().unwrap_or(NO_DATA_FILL),
        }
    }
}

/// Classify a value against the breaks: the first break the value does not
/// exceed (`<=`) decides the class, anything above the last break lands in
/// the top class. Non-finite values, or fewer than `CLASS_COUNT - 1` breaks,
/// yield the no-data class.
pub fn classify(value: f64, breaks: &[f64]) -> FillClass {
    if !value.is_finite() || breaks.len() < CLASS_COUNT - 1 {
        return FillClass::NoData;
    }
    for (i, b) in breaks.iter().enumerate() {
        if value <= *b {
            return FillClass::Quantile(i);
        }
    }
    FillClass::Quantile(breaks.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_breaks_for_one_to_ten() {
        let values: Vec<f64> = (1..=10).map(|v| v as f64).collect();
        assert_eq!(quantile_breaks(&values, 5), vec![2.0, 4.0, 6.0, 8.0]);
    }

    #[test]
    fn test_breaks_count_and_monotonicity() {
        let values = [7.0, 3.0, 9.5, 0.1, 12.0, 4.4, 8.8];
        let breaks = quantile_breaks(&values, 5);
        assert_eq!(breaks.len(), 4);
        assert!(breaks.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn test_breaks_ignore_non_finite() {
        let values = [f64::NAN, f64::INFINITY, f64::NAN];
        assert!(quantile_breaks(&values, 5).is_empty());
        assert!(quantile_breaks(&[], 5).is_empty());
    }

    #[test]
    fn test_sparse_input_yields_duplicate_thresholds() {
        // One finite value collapses every class onto it; kept as-is.
        let breaks = quantile_breaks(&[42.0], 5);
        assert_eq!(breaks, vec![42.0, 42.0, 42.0, 42.0]);
    }

    #[test]
    fn test_classify_boundary_falls_into_lower_class() {
        let breaks = [2.0, 4.0, 6.0, 8.0];
        assert_eq!(classify(2.0, &breaks), FillClass::Quantile(0));
        assert_eq!(classify(2.1, &breaks), FillClass::Quantile(1));
        assert_eq!(classify(8.0, &breaks), FillClass::Quantile(3));
    }

    #[test]
    fn test_classify_above_last_break_is_top_class() {
        let breaks = [2.0, 4.0, 6.0, 8.0];
        assert_eq!(classify(100.0, &breaks), FillClass::Quantile(4));
        assert_eq!(classify(100.0, &breaks).color(), "#810f7c");
    }

    #[test]
    fn test_classify_no_data_cases() {
        let breaks = [2.0, 4.0, 6.0, 8.0];
        assert_eq!(classify(f64::NAN, &breaks), FillClass::NoData);
        assert_eq!(classify(5.0, &[2.0, 4.0]), FillClass::NoData);
        assert_eq!(classify(5.0, &[]), FillClass::NoData);
        assert_eq!(FillClass::NoData.color(), "#ccc");
    }
}
