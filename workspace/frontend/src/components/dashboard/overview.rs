use common::mock_data::{
    AI_INDEX_HEADLINES, ASSETS_BY_TYPE, INFRINGEMENT_DISTRIBUTION, INTEGRITY_RATING, INTEGRITY_RISKS,
    INTEGRITY_SCORE, INTEGRITY_SUMMARY, PROTECTION_STATUS, RECENT_ALERTS, TOTAL_ASSETS,
    VALUATION_CHANGE_PERCENT, VALUATION_HISTORY,
};
use common::{format_signed_percent, format_usd, Alert, Tone};
use yew::prelude::*;

use super::{figures, headline_tile, legend_dot};
use crate::components::ui::{Badge, Card, PlotlyChart, ProgressBar, ScoreGauge};

fn alert_row(alert: &Alert) -> Html {
    let tone = alert.severity.tone();
    html! {
        <div
            key={alert.title}
            class="flex items-start space-x-3 p-3 rounded-lg bg-background/30 hover:bg-background/40 transition-colors cursor-pointer"
            data-severity={alert.severity.label().to_lowercase()}
        >
            <div class={format!("mt-0.5 p-1.5 rounded-full {}", tone.badge_class())}>
                <i class={format!("fas fa-triangle-exclamation {}", tone.text_class())}></i>
            </div>
            <div class="flex-1">
                <h4 class="text-sm font-medium text-white">{ alert.title }</h4>
                <p class="text-xs text-white/70">{ alert.description }</p>
                <p class="text-xs text-white/50 mt-1">{ alert.time }</p>
            </div>
        </div>
    }
}

#[function_component(IntegrityScoreCard)]
fn integrity_score_card() -> Html {
    html! {
        <Card
            title="IP Integrity Score"
            description="Overall protection score of your IP portfolio"
            badge={html! { <Badge tone={Tone::Accent}>{"Real-time"}</Badge> }}
        >
            <div class="flex flex-col items-center">
                <ScoreGauge score={INTEGRITY_SCORE} />
                <Badge tone={Tone::Accent}>{ INTEGRITY_RATING }</Badge>
                <p class="text-white/70 text-sm text-center mt-2">{ INTEGRITY_SUMMARY }</p>
            </div>
            <div class="mt-6 space-y-4">
                { for INTEGRITY_RISKS.iter().map(|risk| html! {
                    <div key={risk.name}>
                        <div class="flex justify-between items-center mb-1">
                            <span class="text-sm text-white">{ risk.name }</span>
                            <Badge tone={risk.severity.tone()}>{ risk.severity.label() }</Badge>
                        </div>
                        <ProgressBar value={risk.score} tone={risk.severity.tone()} />
                    </div>
                }) }
            </div>
        </Card>
    }
}

#[function_component(AssetSummaryCard)]
fn asset_summary_card() -> Html {
    html! {
        <Card
            title="IP Asset Summary"
            description="Overview of your protected IP assets"
            footer={html! { <button class="btn-link w-full">{"View All Assets"}</button> }}
        >
            <div class="space-y-4">
                <div class="flex justify-between items-center">
                    <span class="text-white/70">{"Total Assets"}</span>
                    <span class="text-white font-medium">{ TOTAL_ASSETS }</span>
                </div>
                <hr class="border-white/10" />
                <div>
                    <span class="text-white/70 text-sm">{"By Type"}</span>
                    <div class="space-y-2 mt-2">
                        { for ASSETS_BY_TYPE.iter().map(|asset| html! {
                            <div key={asset.name} class="flex justify-between items-center">
                                <div class="flex items-center">
                                    <div class={format!("w-3 h-3 rounded-full mr-2 {}", asset.dot_class)}></div>
                                    <span class="text-white text-xs">{ asset.name }</span>
                                </div>
                                <span class="text-white text-xs">{ asset.count }</span>
                            </div>
                        }) }
                    </div>
                </div>
                <hr class="border-white/10" />
                <div>
                    <span class="text-white/70 text-sm">{"Protection Status"}</span>
                    <div class="h-4 w-full rounded-full bg-background/30 overflow-hidden mt-2">
                        <div class="flex h-full">
                            { for PROTECTION_STATUS.iter().map(|share| html! {
                                <div
                                    key={share.label}
                                    class={format!("h-full {}", share.severity.tone().bar_class())}
                                    style={format!("width: {}%", share.percent)}
                                ></div>
                            }) }
                        </div>
                    </div>
                    <div class="flex justify-between mt-2 text-xs">
                        { for PROTECTION_STATUS.iter().map(|share| html! {
                            <div key={share.label} class="flex items-center">
                                <div class={format!("w-2 h-2 rounded-full mr-1 {}", share.severity.tone().bar_class())}></div>
                                <span class="text-white/70">{ format!("{} ({}%)", share.label, share.percent) }</span>
                            </div>
                        }) }
                    </div>
                </div>
            </div>
        </Card>
    }
}

#[function_component(ValuationTrendCard)]
fn valuation_trend_card() -> Html {
    let figure = use_memo((), |_| figures::valuation_trend());
    let current = VALUATION_HISTORY.last().map(|point| point.value).unwrap_or_default();

    html! {
        <Card title="Valuation Trend" description="Estimated value of your IP portfolio">
            <PlotlyChart id="chart-valuation-trend" {figure} height={200} />
            <div class="mt-4 flex justify-between items-center">
                <div>
                    <p class="text-white/70 text-xs">{"Current Valuation"}</p>
                    <p class="text-white text-xl font-bold">{ format_usd(current) }</p>
                </div>
                <Badge tone={Tone::Success}>
                    { format!("{} from last quarter", format_signed_percent(VALUATION_CHANGE_PERCENT)) }
                </Badge>
            </div>
        </Card>
    }
}

#[function_component(InfringementCard)]
fn infringement_card() -> Html {
    let figure = use_memo((), |_| figures::infringement_distribution());

    html! {
        <Card title="Infringement Risk Distribution" description="Risk breakdown by content type">
            <PlotlyChart id="chart-infringement-distribution" {figure} height={200} />
            <div class="mt-2 grid grid-cols-2 gap-2">
                { for INFRINGEMENT_DISTRIBUTION.iter().enumerate().map(|(index, share)| {
                    legend_dot(format!("{}: {}%", share.name, share.percent), figures::palette_color(index))
                }) }
            </div>
        </Card>
    }
}

#[function_component(AiIndexTrendCard)]
fn ai_index_trend_card() -> Html {
    let figure = use_memo((), |_| figures::ai_index_trend());

    html! {
        <Card
            class="md:col-span-2"
            title="AI Index Score Trend"
            description="Tracking your IP's performance against AI-driven metrics"
        >
            <PlotlyChart id="chart-ai-index-overview" {figure} height={250} />
            <div class="mt-4 grid grid-cols-1 md:grid-cols-3 gap-4">
                { for AI_INDEX_HEADLINES.iter().map(|headline| headline_tile(headline, None)) }
            </div>
        </Card>
    }
}

#[function_component(OverviewTab)]
pub fn overview_tab() -> Html {
    html! {
        <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">
            <IntegrityScoreCard />
            <Card
                title="Recent Alerts"
                description="Latest IP protection alerts"
                footer={html! { <button class="btn-link w-full">{"View All Alerts"}</button> }}
            >
                <div class="space-y-4">
                    { for RECENT_ALERTS.iter().map(alert_row) }
                </div>
            </Card>
            <AssetSummaryCard />
            <ValuationTrendCard />
            <InfringementCard />
            <AiIndexTrendCard />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{count, render_with};

    #[tokio::test]
    async fn test_overview_cards() {
        let html = render_with::<OverviewTab>(|| ()).await;
        for title in [
            "IP Integrity Score",
            "Recent Alerts",
            "IP Asset Summary",
            "Valuation Trend",
            "Infringement Risk Distribution",
            "AI Index Score Trend",
        ] {
            assert!(html.contains(title), "missing card {}", title);
        }
        assert!(html.contains("Good Protection"));
        assert!(html.contains("Protected (70%)"));
    }

    #[tokio::test]
    async fn test_alerts_carry_severity() {
        let html = render_with::<OverviewTab>(|| ()).await;
        assert_eq!(count(&html, "data-severity="), RECENT_ALERTS.len());
        assert_eq!(count(&html, "data-severity=\"medium\""), 2);
    }

    #[tokio::test]
    async fn test_overview_charts_mounted() {
        let html = render_with::<OverviewTab>(|| ()).await;
        assert_eq!(count(&html, "data-chart="), 3);
    }

    #[tokio::test]
    async fn test_ai_index_notes_toned() {
        let html = render_with::<OverviewTab>(|| ()).await;
        assert!(html.contains("<p class=\"text-green-500 text-sm ml-2\">+2 pts</p>"));
        assert!(html.contains("<p class=\"text-white/70 text-sm ml-2\">points</p>"));
    }
}
