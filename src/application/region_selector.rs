// Region selector - the open/closed search combo over region names

pub const ALL_REGIONS_LABEL: &str = "All regions";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PanelState {
    Closed,
    Open,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    AllRegions,
    Region(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComboEntry {
    pub label: String,
    /// Marks the entry matching the currently focused region.
    pub active: bool,
}

/// Two-state combo box: closed or open with a live search filter. The
/// frontend owns the actual controls; this struct owns the state machine.
pub struct RegionSelector {
    state: PanelState,
    filter: String,
}

impl RegionSelector {
    pub fn new() -> Self {
        Self {
            state: PanelState::Closed,
            filter: String::new(),
        }
    }

    pub fn is_open(&self) -> bool {
        self.state == PanelState::Open
    }

    /// Flip open/closed. Opening always starts with a cleared filter.
    /// Returns whether the panel is now open.
    pub fn toggle(&mut self) -> bool {
        match self.state {
            PanelState::Closed => {
                self.state = PanelState::Open;
                self.filter.clear();
                true
            }
            PanelState::Open => {
                self.state = PanelState::Closed;
                false
            }
        }
    }

    /// Outside click / escape analog: close without selecting.
    pub fn close(&mut self) {
        self.state = PanelState::Closed;
    }

    pub fn set_filter(&mut self, text: &str) {
        if self.is_open() {
            self.filter = text.to_string();
        }
    }

    /// The visible list: a synthetic "All regions" entry first, always shown
    /// regardless of the filter, then the regions matching the filter
    /// case-insensitively by substring.
    pub fn entries(&self, regions: &[String], focused: &str) -> Vec<ComboEntry> {
        let needle = self.filter.to_lowercase();
        let mut entries = vec![ComboEntry {
            label: ALL_REGIONS_LABEL.to_string(),
            active: focused.is_empty(),
        }];
        for region in regions {
            if region.to_lowercase().contains(&needle) {
                entries.push(ComboEntry {
                    label: region.clone(),
                    active: region == focused,
                });
            }
        }
        entries
    }

    /// Resolve a picked label. A successful selection closes the panel;
    /// an unknown label leaves it open and selects nothing.
    pub fn select(&mut self, label: &str, regions: &[String]) -> Option<Selection> {
        if label == ALL_REGIONS_LABEL {
            self.close();
            return Some(Selection::AllRegions);
        }
        if regions.iter().any(|r| r == label) {
            self.close();
            return Some(Selection::Region(label.to_string()));
        }
        None
    }
}

impl Default for RegionSelector {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn regions() -> Vec<String> {
        vec!["Lazio".to_string(), "Lombardia".to_string(), "Umbria".to_string()]
    }

    #[test]
    fn test_opening_clears_the_filter() {
        let mut selector = RegionSelector::new();
        assert!(selector.toggle());
        selector.set_filter("umb");
        selector.close();

        assert!(selector.toggle());
        let entries = selector.entries(&regions(), "");
        assert_eq!(entries.len(), 4);
    }

    #[test]
    fn test_filter_is_case_insensitive_substring() {
        let mut selector = RegionSelector::new();
        selector.toggle();
        selector.set_filter("LOMB");

        let entries = selector.entries(&regions(), "");
        let labels: Vec<&str> = entries.iter().map(|e| e.label.as_str()).collect();
        assert_eq!(labels, vec![ALL_REGIONS_LABEL, "Lombardia"]);
    }

    #[test]
    fn test_all_regions_always_listed() {
        let mut selector = RegionSelector::new();
        selector.toggle();
        selector.set_filter("no such region");

        let entries = selector.entries(&regions(), "");
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].label, ALL_REGIONS_LABEL);
    }

    #[test]
    fn test_active_flag_follows_focus() {
        let mut selector = RegionSelector::new();
        selector.toggle();

        let entries = selector.entries(&regions(), "Umbria");
        assert!(!entries[0].active);
        assert!(entries.iter().any(|e| e.label == "Umbria" && e.active));

        let entries = selector.entries(&regions(), "");
        assert!(entries[0].active);
    }

    #[test]
    fn test_select_region_closes_panel() {
        let mut selector = RegionSelector::new();
        selector.toggle();

        let selection = selector.select("Umbria", &regions());
        assert_eq!(selection, Some(Selection::Region("Umbria".to_string())));
        assert!(!selector.is_open());
    }

    #[test]
    fn test_select_all_regions() {
        let mut selector = RegionSelector::new();
        selector.toggle();

        assert_eq!(
            selector.select(ALL_REGIONS_LABEL, &regions()),
            Some(Selection::AllRegions)
        );
        assert!(!selector.is_open());
    }

    #[test]
    fn test_select_unknown_label_is_rejected() {
        let mut selector = RegionSelector::new();
        selector.toggle();

        assert_eq!(selector.select("Atlantis", &regions()), None);
        assert!(selector.is_open());
    }
}
