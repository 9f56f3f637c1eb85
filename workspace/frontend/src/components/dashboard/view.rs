use common::{DashboardTab, Tone};
use yew::prelude::*;

use super::ai_index::AiIndexTab;
use super::overview::OverviewTab;
use super::reports::ReportsTab;
use super::risk_scores::RiskScoresTab;
use super::tab_bar::TabBar;
use super::valuation::ValuationTab;
use crate::components::ui::Badge;

#[derive(Properties, PartialEq)]
pub struct DashboardProps {
    /// Tab shown on first render
    #[prop_or_default]
    pub initial_tab: DashboardTab,
}

#[function_component(Dashboard)]
pub fn dashboard(props: &DashboardProps) -> Html {
    let initial = props.initial_tab;
    let active = use_state(move || initial);

    let on_select = {
        let active = active.clone();
        Callback::from(move |tab: DashboardTab| {
            log::debug!("Dashboard tab selected: {}", tab);
            active.set(tab);
        })
    };

    let on_refresh = Callback::from(|_: MouseEvent| {
        log::info!("Refresh requested; dashboard data is static");
    });

    let tab = *active;
    let panel = match tab {
        DashboardTab::Overview => html! { <OverviewTab /> },
        DashboardTab::RiskScores => html! { <RiskScoresTab /> },
        DashboardTab::Valuation => html! { <ValuationTab /> },
        DashboardTab::AiIndex => html! { <AiIndexTab /> },
        DashboardTab::Reports => html! { <ReportsTab /> },
    };

    html! {
        <div class="min-h-screen bg-background text-white" data-view="dashboard">
            <div class="pt-24 pb-6 bg-gradient-hero">
                <div class="container mx-auto px-4 sm:px-6 lg:px-8">
                    <div class="flex flex-col md:flex-row justify-between items-start md:items-center">
                        <div>
                            <h1 class="text-2xl md:text-3xl font-bold text-white mb-2">{"REIVIP-COP Dashboard"}</h1>
                            <p class="text-white/70">{"AI-powered IP integrity scoring platform by Reinvent DAO"}</p>
                        </div>
                        <div class="flex items-center mt-4 md:mt-0 space-x-2">
                            <Badge tone={Tone::Accent}>
                                <i class="fas fa-rotate mr-1"></i>{"Live Data"}
                            </Badge>
                            <button class="btn-outline btn-sm" onclick={on_refresh}>
                                <i class="fas fa-rotate mr-2"></i>{"Refresh"}
                            </button>
                        </div>
                    </div>
                </div>
            </div>

            <div class="container mx-auto px-4 sm:px-6 lg:px-8 py-6">
                <TabBar active={tab} {on_select} />
                <div
                    role="tabpanel"
                    id={format!("panel-{}", tab.id())}
                    aria-labelledby={format!("tab-{}", tab.id())}
                    data-tab={tab.id()}
                >
                    { panel }
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{count, render_with};

    async fn render(tab: DashboardTab) -> String {
        render_with::<Dashboard>(move || DashboardProps { initial_tab: tab }).await
    }

    /// A heading only the given tab renders.
    fn marker(tab: DashboardTab) -> &'static str {
        match tab {
            DashboardTab::Overview => "IP Integrity Score",
            DashboardTab::RiskScores => "Risk Score Trend",
            DashboardTab::Valuation => "IP Portfolio Valuation",
            DashboardTab::AiIndex => "AI Competitive Analysis",
            DashboardTab::Reports => "Available Reports",
        }
    }

    #[tokio::test]
    async fn test_default_tab_is_overview() {
        let html = render_with::<Dashboard>(|| yew::props!(DashboardProps {})).await;
        assert!(html.contains("data-tab=\"overview\""));
    }

    #[tokio::test]
    async fn test_each_tab_renders_only_its_panel() {
        for tab in DashboardTab::ALL {
            let html = render(tab).await;
            assert_eq!(count(&html, "role=\"tabpanel\""), 1);
            assert!(html.contains(&format!("data-tab=\"{}\"", tab.id())));

            for other in DashboardTab::ALL {
                let visible = html.contains(marker(other));
                assert_eq!(visible, other == tab, "{} content on {} tab", other, tab);
            }
        }
    }

    #[tokio::test]
    async fn test_tab_bar_marks_active_trigger() {
        let html = render(DashboardTab::Valuation).await;
        assert_eq!(count(&html, "role=\"tab\""), DashboardTab::ALL.len());
        assert_eq!(count(&html, "aria-selected=\"true\""), 1);
        assert_eq!(count(&html, "data-state=\"active\""), 1);
        let active = html.find("data-state=\"active\"").unwrap();
        let label = html[active..].find("Valuation Engine").unwrap();
        let next_tab = html[active..].find("role=\"tab\"").unwrap_or(usize::MAX);
        assert!(label < next_tab);
    }

    #[tokio::test]
    async fn test_header_is_present_on_every_tab() {
        for tab in DashboardTab::ALL {
            let html = render(tab).await;
            assert!(html.contains("REIVIP-COP Dashboard"));
            assert!(html.contains("Live Data"));
        }
    }

    #[tokio::test]
    async fn test_current_valuation_is_literal() {
        let html = render(DashboardTab::Overview).await;
        let label = html.find("Current Valuation").unwrap();
        assert!(html[label..].contains("$450,000"));
        assert!(html.contains("+12.5% from last quarter"));
    }

    #[tokio::test]
    async fn test_overall_ai_index_is_literal() {
        let html = render(DashboardTab::AiIndex).await;
        let label = html.find("Overall AI Index").unwrap();
        assert!(html[label..].contains("92/100"));
    }

    #[tokio::test]
    async fn test_render_is_idempotent() {
        for tab in DashboardTab::ALL {
            assert_eq!(render(tab).await, render(tab).await);
        }
    }
}
