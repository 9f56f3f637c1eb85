use common::mock_data::{AI_OVERVIEW_HEADLINES, COMPETITIVE_METRICS, PROTECTION_STRATEGIES};
use common::{CompetitiveMetric, ProtectionStrategy, Tone};
use yew::prelude::*;

use super::{figures, outline_button};
use crate::components::ui::{Badge, Card, PlotlyChart};

fn metric_row(metric: &CompetitiveMetric) -> Html {
    html! {
        <div key={metric.name} class="space-y-2" data-lead={metric.lead().to_string()}>
            <div>
                <span class="text-white text-sm font-medium">{ metric.name }</span>
                <p class="text-white/70 text-xs">{ metric.description }</p>
            </div>
            <div class="relative pt-1">
                <div class="flex items-center justify-between">
                    <div>
                        <span class="text-xs text-white/70">{"Your Score"}</span>
                        <span class="text-xs font-semibold text-white ml-1">{ metric.your_score }</span>
                    </div>
                    <div>
                        <span class="text-xs text-white/70">{"AI Average"}</span>
                        <span class="text-xs font-semibold text-white ml-1">{ metric.ai_average }</span>
                    </div>
                </div>
                <div class="overflow-hidden h-2 flex rounded bg-white/10 mt-1">
                    <div class="bg-reiv-purple-light h-full" style={format!("width: {}%", metric.your_score.min(100))}></div>
                </div>
                <div class="overflow-hidden h-2 flex rounded bg-white/10 mt-1">
                    <div class="bg-gray-500 h-full" style={format!("width: {}%", metric.ai_average.min(100))}></div>
                </div>
            </div>
        </div>
    }
}

fn strategy_row(strategy: &ProtectionStrategy) -> Html {
    html! {
        <div key={strategy.title} class="p-3 rounded-lg bg-background/30">
            <div class="flex justify-between items-start gap-4">
                <div>
                    <h4 class="text-sm font-medium text-white flex items-center gap-2">
                        { strategy.title }
                        <Badge tone={strategy.status.tone()}>{ strategy.status.label() }</Badge>
                    </h4>
                    <p class="text-xs text-white/70 mt-1">{ strategy.description }</p>
                </div>
                if strategy.status.is_actionable() {
                    { outline_button("Implement") }
                }
            </div>
        </div>
    }
}

#[function_component(AiOverviewCard)]
fn ai_overview_card() -> Html {
    let figure = use_memo((), |_| figures::ai_index_trend());

    html! {
        <Card
            class="md:col-span-3"
            title="AI Index Overview"
            description="Comprehensive AI-powered analysis of your IP portfolio"
            badge={html! { <Badge tone={Tone::Accent}>{"Real-time"}</Badge> }}
        >
            <div class="grid grid-cols-1 md:grid-cols-4 gap-4 mb-6">
                { for AI_OVERVIEW_HEADLINES.iter().map(|headline| html! {
                    <div key={headline.label} class="bg-background/30 p-4 rounded-lg">
                        <p class="text-white/70 text-xs mb-1">{ headline.label }</p>
                        <p class="text-white text-2xl font-bold">{ headline.value }</p>
                        <p class="text-white/50 text-xs mt-1">{ headline.note }</p>
                    </div>
                }) }
            </div>
            <PlotlyChart id="chart-ai-index-trend" {figure} />
        </Card>
    }
}

#[function_component(AiIndexTab)]
pub fn ai_index_tab() -> Html {
    html! {
        <div class="grid grid-cols-1 md:grid-cols-3 gap-6">
            <AiOverviewCard />
            <Card
                class="md:col-span-2"
                title="AI Competitive Analysis"
                description="How your IP compares to AI-generated alternatives"
            >
                <div class="space-y-6">
                    { for COMPETITIVE_METRICS.iter().map(metric_row) }
                </div>
            </Card>
            <Card
                title="AI Protection Strategies"
                description="Recommended approaches to protect against AI threats"
            >
                <div class="space-y-4">
                    { for PROTECTION_STRATEGIES.iter().map(strategy_row) }
                </div>
            </Card>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{count, render_with};

    #[tokio::test]
    async fn test_implement_only_on_recommended() {
        let html = render_with::<AiIndexTab>(|| ()).await;
        let recommended = PROTECTION_STRATEGIES
            .iter()
            .filter(|strategy| strategy.status.is_actionable())
            .count();
        assert_eq!(recommended, 2);
        assert_eq!(count(&html, ">Implement<"), recommended);
        assert!(html.contains("In Progress"));
    }

    #[tokio::test]
    async fn test_competitive_leads() {
        let html = render_with::<AiIndexTab>(|| ()).await;
        assert!(html.contains("data-lead=\"45\""));
        assert_eq!(count(&html, "data-lead="), COMPETITIVE_METRICS.len());
    }
}
