use serde::{Deserialize, Serialize};

pub const ALL_NEIGHBORHOODS: &str = "all";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FilterTab {
    #[default]
    All,
    Critical,
    Recurrent,
    MostVoted,
}

impl FilterTab {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "all" => Some(FilterTab::All),
            "critical" => Some(FilterTab::Critical),
            "recurrent" => Some(FilterTab::Recurrent),
            "most-voted" => Some(FilterTab::MostVoted),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FilterTab::All => "all",
            FilterTab::Critical => "critical",
            FilterTab::Recurrent => "recurrent",
            FilterTab::MostVoted => "most-voted",
        }
    }
}

/// Neighborhood selector. Travels over IPC as a plain string, `"all"` meaning no restriction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum NeighborhoodFilter {
    #[default]
    All,
    Named(String),
}

impl From<String> for NeighborhoodFilter {
    fn from(raw: String) -> Self {
        if raw == ALL_NEIGHBORHOODS {
            NeighborhoodFilter::All
        } else {
            NeighborhoodFilter::Named(raw)
        }
    }
}

impl From<NeighborhoodFilter> for String {
    fn from(filter: NeighborhoodFilter) -> Self {
        match filter {
            NeighborhoodFilter::All => ALL_NEIGHBORHOODS.to_string(),
            NeighborhoodFilter::Named(name) => name,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterSelection {
    #[serde(default)]
    pub query: String,
    #[serde(default)]
    pub neighborhood: NeighborhoodFilter,
    #[serde(default)]
    pub tab: FilterTab,
}

impl FilterSelection {
    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    pub fn with_neighborhood(mut self, name: impl Into<String>) -> Self {
        self.neighborhood = NeighborhoodFilter::from(name.into());
        self
    }

    pub fn with_tab(mut self, tab: FilterTab) -> Self {
        self.tab = tab;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn selection_deserializes_from_front_end_shape() {
        let selection: FilterSelection = serde_json::from_value(json!({
            "query": "marco",
            "neighborhood": "all",
            "tab": "most-voted"
        }))
        .expect("deserialize selection");

        assert_eq!(selection.neighborhood, NeighborhoodFilter::All);
        assert_eq!(selection.tab, FilterTab::MostVoted);

        let named: FilterSelection =
            serde_json::from_value(json!({ "neighborhood": "Guamá" })).expect("partial selection");
        assert_eq!(named.neighborhood, NeighborhoodFilter::Named("Guamá".to_string()));
        assert!(named.query.is_empty());
    }

    #[test]
    fn tab_names_round_trip_through_parse() {
        for tab in [FilterTab::All, FilterTab::Critical, FilterTab::Recurrent, FilterTab::MostVoted] {
            assert_eq!(FilterTab::parse(tab.as_str()), Some(tab));
        }
        assert_eq!(FilterTab::parse("newest"), None);
    }
}
