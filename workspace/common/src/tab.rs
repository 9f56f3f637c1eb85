use crate::error::ParseTabError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The five mutually exclusive content regions of the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DashboardTab {
    #[default]
    Overview,
    RiskScores,
    Valuation,
    AiIndex,
    Reports,
}

impl DashboardTab {
    /// All tabs in the order the tab bar shows them.
    pub const ALL: [DashboardTab; 5] = [
        DashboardTab::Overview,
        DashboardTab::RiskScores,
        DashboardTab::Valuation,
        DashboardTab::AiIndex,
        DashboardTab::Reports,
    ];

    /// Stable identifier, also used for `data-tab` attributes.
    pub fn id(&self) -> &'static str {
        match self {
            DashboardTab::Overview => "overview",
            DashboardTab::RiskScores => "risk-scores",
            DashboardTab::Valuation => "valuation",
            DashboardTab::AiIndex => "ai-index",
            DashboardTab::Reports => "reports",
        }
    }

    /// Caption on the tab trigger.
    pub fn label(&self) -> &'static str {
        match self {
            DashboardTab::Overview => "Overview",
            DashboardTab::RiskScores => "Risk Scores",
            DashboardTab::Valuation => "Valuation Engine",
            DashboardTab::AiIndex => "AI Index",
            DashboardTab::Reports => "Reports",
        }
    }

    /// Font Awesome icon class for the tab trigger.
    pub fn icon(&self) -> &'static str {
        match self {
            DashboardTab::Overview => "fas fa-eye",
            DashboardTab::RiskScores => "fas fa-triangle-exclamation",
            DashboardTab::Valuation => "fas fa-arrow-trend-up",
            DashboardTab::AiIndex => "fas fa-brain",
            DashboardTab::Reports => "fas fa-file-lines",
        }
    }
}

impl fmt::Display for DashboardTab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for DashboardTab {
    type Err = ParseTabError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DashboardTab::ALL
            .into_iter()
            .find(|tab| tab.id() == s)
            .ok_or_else(|| {
                tracing::debug!(tab = s, "Rejected unknown dashboard tab id");
                ParseTabError(s.to_string())
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_tab_is_overview() {
        assert_eq!(DashboardTab::default(), DashboardTab::Overview);
    }

    #[test]
    fn test_tab_ids_parse_back() {
        for tab in DashboardTab::ALL {
            assert_eq!(tab.id().parse::<DashboardTab>(), Ok(tab));
            assert_eq!(tab.to_string(), tab.id());
        }
    }

    #[test]
    fn test_unknown_tab_is_rejected() {
        let err = "settings".parse::<DashboardTab>().unwrap_err();
        assert_eq!(err, ParseTabError("settings".to_string()));
        assert_eq!(err.to_string(), "Unknown dashboard tab: settings");
    }

    #[test]
    fn test_ids_are_unique() {
        let mut ids: Vec<_> = DashboardTab::ALL.iter().map(|t| t.id()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), DashboardTab::ALL.len());
    }

    #[test]
    fn test_serde_uses_ids() {
        let json = serde_json::to_string(&DashboardTab::AiIndex).unwrap();
        assert_eq!(json, "\"ai-index\"");
        let tab: DashboardTab = serde_json::from_str("\"risk-scores\"").unwrap();
        assert_eq!(tab, DashboardTab::RiskScores);
    }
}
